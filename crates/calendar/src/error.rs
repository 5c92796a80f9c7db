//! Error types for the chronos-calendar crate.

use crate::calendar::Calendar;
use crate::date::CalendarDate;
use crate::delta::TimeUnit;

/// Error type for all fallible operations in the chronos-calendar crate.
///
/// Variants split into two families: configuration errors (unknown calendar
/// or unit names, malformed units strings, bad deltas) which indicate a
/// caller bug or an unsupported archive convention, and `DateResolution`,
/// which signals that a numeric time value does not map onto a legal date
/// in the requested calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a calendar name is not one of the supported set.
    #[error("unknown calendar: '{name}'")]
    UnknownCalendar {
        /// The unrecognised calendar name.
        name: String,
    },

    /// Returned when a time-unit word cannot be parsed.
    #[error("unknown time unit: '{unit}'")]
    UnknownTimeUnit {
        /// The unrecognised unit word.
        unit: String,
    },

    /// Returned when a units string does not follow `<unit> since <reference>`.
    #[error("malformed time units '{units}' (expected '<unit> since <reference-date>')")]
    MalformedUnits {
        /// The offending units string.
        units: String,
    },

    /// Returned when a units string uses a unit with no fixed duration.
    #[error("time units must use a fixed-duration unit, got '{unit}'")]
    NonFixedUnits {
        /// The non-fixed unit (month or year).
        unit: TimeUnit,
    },

    /// Returned when a date/time string cannot be parsed.
    #[error("cannot parse date/time from '{text}'")]
    MalformedDate {
        /// The offending text.
        text: String,
    },

    /// Returned when a time delta has a non-positive, non-finite or
    /// (for month/year units) fractional count.
    #[error("invalid time delta: {count} {unit}")]
    InvalidDelta {
        /// The offending count.
        count: f64,
        /// The delta unit.
        unit: TimeUnit,
    },

    /// Returned when a date does not exist in the given calendar.
    #[error("date {date} does not exist in the {calendar} calendar")]
    InvalidDate {
        /// The illegal date.
        date: CalendarDate,
        /// The calendar under which the date is illegal.
        calendar: Calendar,
    },

    /// Returned when a numeric time value cannot be resolved to a legal
    /// date under the given units and calendar.
    #[error("cannot resolve date/time from: {value} {units} (calendar: {calendar})")]
    DateResolution {
        /// The offending numeric time value.
        value: f64,
        /// The units string the value was interpreted under.
        units: String,
        /// The calendar the value was interpreted under.
        calendar: Calendar,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_calendar_display() {
        let err = CalendarError::UnknownCalendar {
            name: "lunar".to_string(),
        };
        assert_eq!(err.to_string(), "unknown calendar: 'lunar'");
    }

    #[test]
    fn date_resolution_display() {
        let err = CalendarError::DateResolution {
            value: 18321.0,
            units: "days since 250-01-01 00:00:00".to_string(),
            calendar: Calendar::ProlepticGregorian,
        };
        assert_eq!(
            err.to_string(),
            "cannot resolve date/time from: 18321 days since 250-01-01 00:00:00 \
             (calendar: proleptic_gregorian)"
        );
    }

    #[test]
    fn invalid_date_display() {
        let err = CalendarError::InvalidDate {
            date: CalendarDate::new(1999, 2, 30),
            calendar: Calendar::Standard,
        };
        assert_eq!(
            err.to_string(),
            "date 1999-02-30 00:00:00 does not exist in the standard calendar"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
