//! Component-wise date/time value permitting non-standard calendar dates.

use std::fmt;

use crate::error::CalendarError;

/// A date/time held as explicit components, with no calendar attached.
///
/// Climate-model calendars legitimately produce dates such as 30 February
/// (360-day calendar), so this type performs no range checking at
/// construction and never wraps a standard-library date. Comparison and
/// equality are defined purely on the component tuple, which keeps values
/// from different calendars comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub(crate) year: i64,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    pub(crate) microsecond: u32,
}

impl CalendarDate {
    /// Creates a date at midnight. No range checking is performed.
    pub fn new(year: i64, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            microsecond: 0,
        }
    }

    /// Creates a date/time from all seven components.
    pub fn from_components(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Returns a copy with the time-of-day components replaced.
    pub fn at(mut self, hour: u8, minute: u8, second: u8, microsecond: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self.microsecond = microsecond;
        self
    }

    /// Parses an ISO-like date/time string.
    ///
    /// Accepts `YYYY[-MM[-DD]]` optionally followed by `T` or a space and
    /// `HH[:MM[:SS[.ffffff]]]`. Missing trailing components default to the
    /// minimum legal value (month/day 1, time components 0). The fractional
    /// second part is scaled to microseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MalformedDate`] for anything else.
    pub fn parse(text: &str) -> Result<Self, CalendarError> {
        let err = || CalendarError::MalformedDate {
            text: text.to_string(),
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(err());
        }
        let (date_part, time_part) = match trimmed.find(|c| c == 'T' || c == ' ') {
            Some(i) => (&trimmed[..i], Some(trimmed[i + 1..].trim())),
            None => (trimmed, None),
        };

        let mut fields = date_part.split('-');
        let year = fields
            .next()
            .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(err)?;
        let month = match fields.next() {
            Some(s) => s.parse::<u8>().map_err(|_| err())?,
            None => 1,
        };
        let day = match fields.next() {
            Some(s) => s.parse::<u8>().map_err(|_| err())?,
            None => 1,
        };
        if fields.next().is_some() {
            return Err(err());
        }

        let (hour, minute, second, microsecond) = match time_part {
            None | Some("") => (0, 0, 0, 0),
            Some(tp) => {
                let mut fields = tp.split(':');
                let hour = fields
                    .next()
                    .and_then(|s| s.parse::<u8>().ok())
                    .ok_or_else(err)?;
                let minute = match fields.next() {
                    Some(s) => s.parse::<u8>().map_err(|_| err())?,
                    None => 0,
                };
                let (second, microsecond) = match fields.next() {
                    None => (0, 0),
                    Some(s) => match s.split_once('.') {
                        None => (s.parse::<u8>().map_err(|_| err())?, 0),
                        Some((whole, frac)) => {
                            let second = whole.parse::<u8>().map_err(|_| err())?;
                            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                                return Err(err());
                            }
                            let mut padded = frac.to_string();
                            padded.truncate(6);
                            while padded.len() < 6 {
                                padded.push('0');
                            }
                            (second, padded.parse::<u32>().map_err(|_| err())?)
                        }
                    },
                };
                if fields.next().is_some() {
                    return Err(err());
                }
                (hour, minute, second, microsecond)
            }
        };

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        })
    }

    /// Returns the year.
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (nominally 1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour.
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute.
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second.
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the microsecond.
    pub fn microsecond(self) -> u32 {
        self.microsecond
    }

    /// Returns all seven components as a tuple.
    pub fn components(self) -> (i64, u8, u8, u8, u8, u8, u32) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.microsecond,
        )
    }

    /// Returns the seconds elapsed since midnight, including the
    /// microsecond fraction.
    pub(crate) fn seconds_of_day(self) -> f64 {
        f64::from(self.hour) * 3600.0
            + f64::from(self.minute) * 60.0
            + f64::from(self.second)
            + f64::from(self.microsecond) / 1e6
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        Ok(())
    }
}
