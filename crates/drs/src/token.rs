//! Parsing of the compact time tokens used in archive filenames.

use chronos_calendar::CalendarDate;

use crate::error::DrsError;

/// Accepted digit lengths for a single time token: `yyyy`, `yyyyMM`,
/// `yyyyMMdd`, `yyyyMMddhh`, `yyyyMMddhhmm`, `yyyyMMddhhmmss`.
const TOKEN_LENGTHS: [usize; 6] = [4, 6, 8, 10, 12, 14];

/// A time token from a filename, with explicit per-component presence.
///
/// Filenames truncate the timestamp at the sampling resolution
/// (`185912` for monthly data, `1999010106` for 6-hourly), so every
/// component after the year is optional and the checks only validate
/// the components that were actually written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeToken {
    year: i64,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
}

impl TimeToken {
    /// Returns the year.
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month, when the token carried one.
    pub fn month(self) -> Option<u8> {
        self.month
    }

    /// Returns the day, when the token carried one.
    pub fn day(self) -> Option<u8> {
        self.day
    }

    /// Returns the hour, when the token carried one.
    pub fn hour(self) -> Option<u8> {
        self.hour
    }

    /// Returns the minute, when the token carried one.
    pub fn minute(self) -> Option<u8> {
        self.minute
    }

    /// Returns the second, when the token carried one.
    pub fn second(self) -> Option<u8> {
        self.second
    }

    /// Returns the number of digits the token was written with.
    pub fn digits(self) -> usize {
        if self.second.is_some() {
            14
        } else if self.minute.is_some() {
            12
        } else if self.hour.is_some() {
            10
        } else if self.day.is_some() {
            8
        } else if self.month.is_some() {
            6
        } else {
            4
        }
    }

    /// Converts the token to a date, filling absent components with the
    /// minimum legal value (month/day 1, time components 0).
    pub fn to_date(self) -> CalendarDate {
        CalendarDate::from_components(
            self.year,
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            0,
        )
    }
}

/// Parses a single time token.
///
/// Accepts a compact digit run of an accepted length, or a delimited
/// ISO-like date/time (containing `-`), which is treated as fully
/// specified.
///
/// # Errors
///
/// Returns [`DrsError::BadTimeToken`] for anything else.
pub fn parse_token(token: &str) -> Result<TimeToken, DrsError> {
    let bad = || DrsError::BadTimeToken {
        token: token.to_string(),
    };

    if token.contains('-') {
        let date = CalendarDate::parse(token).map_err(|_| bad())?;
        return Ok(TimeToken {
            year: date.year(),
            month: Some(date.month()),
            day: Some(date.day()),
            hour: Some(date.hour()),
            minute: Some(date.minute()),
            second: Some(date.second()),
        });
    }

    if !TOKEN_LENGTHS.contains(&token.len()) || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }

    let field = |range: std::ops::Range<usize>| -> Option<u8> {
        token.get(range).and_then(|s| s.parse().ok())
    };
    let year = token[..4].parse::<i64>().map_err(|_| bad())?;
    Ok(TimeToken {
        year,
        month: field(4..6),
        day: field(6..8),
        hour: field(8..10),
        minute: field(10..12),
        second: field(12..14),
    })
}

/// Returns whether a filename token looks like a time range: a compact
/// digit run of an accepted length, or two of the same length joined by
/// `-`. Never errors; malformed tokens simply return false.
pub fn is_valid_time_token(token: &str) -> bool {
    let compact = |s: &str| TOKEN_LENGTHS.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    match token.split_once('-') {
        None => compact(token),
        Some((start, end)) => compact(start) && compact(end) && start.len() == end.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_each_length() {
        let t = parse_token("1859").unwrap();
        assert_eq!(t.year(), 1859);
        assert_eq!(t.month(), None);
        assert_eq!(t.digits(), 4);
        assert_eq!(t.to_date(), CalendarDate::new(1859, 1, 1));

        let t = parse_token("185912").unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (1859, Some(12), None));
        assert_eq!(t.digits(), 6);

        let t = parse_token("19990230").unwrap();
        assert_eq!(t.to_date(), CalendarDate::new(1999, 2, 30));
        assert_eq!(t.digits(), 8);

        let t = parse_token("1999010106").unwrap();
        assert_eq!(t.hour(), Some(6));
        assert_eq!(t.to_date(), CalendarDate::new(1999, 1, 1).at(6, 0, 0, 0));

        let t = parse_token("199901010630").unwrap();
        assert_eq!(t.minute(), Some(30));

        let t = parse_token("19990101063015").unwrap();
        assert_eq!(t.second(), Some(15));
        assert_eq!(t.digits(), 14);
    }

    #[test]
    fn parse_delimited_token() {
        let t = parse_token("1999-02-30").unwrap();
        assert_eq!(t.to_date(), CalendarDate::new(1999, 2, 30));
        assert_eq!(t.month(), Some(2));
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        for token in ["199", "19990", "1999013", "199901a1", "", "r1i1p1"] {
            assert!(parse_token(token).is_err(), "parsed: {token}");
        }
    }

    #[test]
    fn valid_time_token_shapes() {
        assert!(is_valid_time_token("185912"));
        assert!(is_valid_time_token("185912-188411"));
        assert!(is_valid_time_token("1859-1884"));
        assert!(is_valid_time_token("19990101-19991231"));

        assert!(!is_valid_time_token("185912-1884"));
        assert!(!is_valid_time_token("18591-18841"));
        assert!(!is_valid_time_token("r1i1p1"));
        assert!(!is_valid_time_token("185912-"));
        assert!(!is_valid_time_token(""));
    }
}
