//! Time units and sampling deltas.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A time unit as used in units strings and sampling steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// One microsecond.
    Microsecond,
    /// One second.
    Second,
    /// One minute.
    Minute,
    /// One hour.
    Hour,
    /// One day.
    Day,
    /// One calendar month (variable duration).
    Month,
    /// One calendar year (variable duration).
    Year,
}

impl TimeUnit {
    /// Returns the number of units per day, or `None` for month/year,
    /// which have no fixed duration.
    pub fn per_day(self) -> Option<f64> {
        match self {
            TimeUnit::Microsecond => Some(86_400.0 * 1e6),
            TimeUnit::Second => Some(86_400.0),
            TimeUnit::Minute => Some(1_440.0),
            TimeUnit::Hour => Some(24.0),
            TimeUnit::Day => Some(1.0),
            TimeUnit::Month | TimeUnit::Year => None,
        }
    }

    /// Returns whether the unit has a fixed duration.
    pub fn is_fixed(self) -> bool {
        self.per_day().is_some()
    }

    /// Returns the singular unit name.
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Microsecond => "microsecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "microsecond" | "microseconds" => Ok(TimeUnit::Microsecond),
            "second" | "seconds" => Ok(TimeUnit::Second),
            "minute" | "minutes" => Ok(TimeUnit::Minute),
            "hour" | "hours" => Ok(TimeUnit::Hour),
            "day" | "days" => Ok(TimeUnit::Day),
            "month" | "months" | "mon" => Ok(TimeUnit::Month),
            "year" | "years" | "yr" => Ok(TimeUnit::Year),
            other => Err(CalendarError::UnknownTimeUnit {
                unit: other.to_string(),
            }),
        }
    }
}

/// A sampling step: a count of some time unit.
///
/// Month and year steps have no fixed duration and are applied by
/// component-wise increment with carry; all other units convert to a
/// fixed day fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDelta {
    count: f64,
    unit: TimeUnit,
}

impl TimeDelta {
    /// Creates a new delta.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDelta`] when the count is not
    /// finite and positive, or is fractional for a month/year unit.
    pub fn new(count: f64, unit: TimeUnit) -> Result<Self, CalendarError> {
        let bad = !count.is_finite()
            || count <= 0.0
            || (!unit.is_fixed() && count.fract() != 0.0);
        if bad {
            return Err(CalendarError::InvalidDelta { count, unit });
        }
        Ok(Self { count, unit })
    }

    /// Returns the step count.
    pub fn count(self) -> f64 {
        self.count
    }

    /// Returns the step unit.
    pub fn unit(self) -> TimeUnit {
        self.unit
    }

    /// Returns the fixed duration of the step in days, or `None` for
    /// month/year steps.
    pub fn in_days(self) -> Option<f64> {
        self.unit.per_day().map(|per_day| self.count / per_day)
    }
}

impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parse_plural_forms() {
        assert_eq!("days".parse::<TimeUnit>().unwrap(), TimeUnit::Day);
        assert_eq!("day".parse::<TimeUnit>().unwrap(), TimeUnit::Day);
        assert_eq!("hours".parse::<TimeUnit>().unwrap(), TimeUnit::Hour);
        assert_eq!("mon".parse::<TimeUnit>().unwrap(), TimeUnit::Month);
        assert_eq!("yr".parse::<TimeUnit>().unwrap(), TimeUnit::Year);
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn per_day_factors() {
        assert_eq!(TimeUnit::Day.per_day(), Some(1.0));
        assert_eq!(TimeUnit::Hour.per_day(), Some(24.0));
        assert_eq!(TimeUnit::Minute.per_day(), Some(1440.0));
        assert_eq!(TimeUnit::Second.per_day(), Some(86400.0));
        assert_eq!(TimeUnit::Month.per_day(), None);
        assert_eq!(TimeUnit::Year.per_day(), None);
    }

    #[test]
    fn delta_construction() {
        let d = TimeDelta::new(6.0, TimeUnit::Hour).unwrap();
        assert_eq!(d.count(), 6.0);
        assert_eq!(d.in_days(), Some(0.25));

        let d = TimeDelta::new(1.0, TimeUnit::Month).unwrap();
        assert_eq!(d.in_days(), None);
    }

    #[test]
    fn delta_rejects_bad_counts() {
        assert!(TimeDelta::new(0.0, TimeUnit::Day).is_err());
        assert!(TimeDelta::new(-1.0, TimeUnit::Hour).is_err());
        assert!(TimeDelta::new(f64::NAN, TimeUnit::Day).is_err());
        assert!(TimeDelta::new(1.5, TimeUnit::Month).is_err());
        assert!(TimeDelta::new(2.5, TimeUnit::Day).is_ok());
    }

    #[test]
    fn delta_display() {
        let d = TimeDelta::new(3.0, TimeUnit::Hour).unwrap();
        assert_eq!(d.to_string(), "3 hour");
    }
}
