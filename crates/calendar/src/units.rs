//! Parsing of `"<unit> since <reference-date>"` units strings.

use std::str::FromStr;

use crate::date::CalendarDate;
use crate::delta::TimeUnit;
use crate::error::CalendarError;

/// A parsed time-coordinate units string.
///
/// Carries the offset unit, the reference date the offsets count from,
/// and how many date components (year, month, day) the reference string
/// actually spelled out. The precision matters to the checks layer:
/// archives occasionally write `days since 1850-01`, which is malformed
/// metadata rather than a conversion problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeUnits {
    unit: TimeUnit,
    origin: CalendarDate,
    origin_precision: u8,
}

impl TimeUnits {
    /// Returns the offset unit.
    pub fn unit(self) -> TimeUnit {
        self.unit
    }

    /// Returns the reference date.
    pub fn origin(self) -> CalendarDate {
        self.origin
    }

    /// Returns how many date components (1..=3) the reference string
    /// carried: 1 for `YYYY`, 2 for `YYYY-MM`, 3 for a full date.
    pub fn origin_precision(self) -> u8 {
        self.origin_precision
    }
}

/// Parses a units string of the form `"<unit> since <date>[ <time>]"`.
///
/// # Errors
///
/// Returns [`CalendarError::MalformedUnits`] when the `since` keyword or
/// the reference date is missing, [`CalendarError::UnknownTimeUnit`] for
/// an unrecognised unit word, [`CalendarError::NonFixedUnits`] when the
/// unit is month or year, and [`CalendarError::MalformedDate`] when the
/// reference date does not parse.
pub fn parse_units(units: &str) -> Result<TimeUnits, CalendarError> {
    let malformed = || CalendarError::MalformedUnits {
        units: units.to_string(),
    };

    let mut words = units.split_whitespace();
    let unit = TimeUnit::from_str(words.next().ok_or_else(malformed)?)?;
    if !unit.is_fixed() {
        return Err(CalendarError::NonFixedUnits { unit });
    }
    if words.next() != Some("since") {
        return Err(malformed());
    }

    let date_word = words.next().ok_or_else(malformed)?;
    let reference = match words.next() {
        Some(time_word) => format!("{date_word} {time_word}"),
        None => date_word.to_string(),
    };
    if words.next().is_some() {
        return Err(malformed());
    }

    let origin = CalendarDate::parse(&reference)?;
    let origin_precision = date_word.split('-').count().min(3) as u8;

    Ok(TimeUnits {
        unit,
        origin,
        origin_precision,
    })
}
