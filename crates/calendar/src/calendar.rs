//! Supported climate-model calendars and their month/leap rules.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Days per month for a non-leap year in the real-world calendars
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year offset at which each month starts in a 365-day year
/// (index 0 unused; January starts at offset 0).
pub(crate) const MONTH_START_365: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Day-of-year offset at which each month starts in a 366-day year.
pub(crate) const MONTH_START_366: [u16; 13] =
    [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// A named calendar as used by climate-model archives.
///
/// The set covers exactly the calendars CMIP-style archives declare on
/// their time coordinates. `Standard` is the mixed Julian/Gregorian
/// calendar with the October 1582 reform; `ProlepticGregorian` extends
/// the Gregorian rules indefinitely backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    /// Mixed Julian/Gregorian calendar (aliases: `standard`, `gregorian`).
    Standard,
    /// Gregorian rules applied to all years (`proleptic_gregorian`).
    ProlepticGregorian,
    /// Julian calendar (`julian`).
    Julian,
    /// 365-day calendar with no leap years (aliases: `noleap`, `365_day`).
    NoLeap,
    /// 366-day calendar where every year is a leap year
    /// (aliases: `all_leap`, `366_day`).
    AllLeap,
    /// 360-day calendar with twelve 30-day months (`360_day`).
    Day360,
}

impl Calendar {
    /// Returns the canonical name of the calendar.
    pub fn name(self) -> &'static str {
        match self {
            Calendar::Standard => "standard",
            Calendar::ProlepticGregorian => "proleptic_gregorian",
            Calendar::Julian => "julian",
            Calendar::NoLeap => "noleap",
            Calendar::AllLeap => "all_leap",
            Calendar::Day360 => "360_day",
        }
    }

    /// Returns whether `year` is a leap year under this calendar.
    ///
    /// The mixed `standard` calendar follows the Julian rule before the
    /// 1582 reform and the Gregorian rule from 1582 onwards.
    pub fn is_leap_year(self, year: i64) -> bool {
        let julian = year.rem_euclid(4) == 0;
        let gregorian =
            year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0);
        match self {
            Calendar::Day360 | Calendar::NoLeap => false,
            Calendar::AllLeap => true,
            Calendar::Julian => julian,
            Calendar::ProlepticGregorian => gregorian,
            Calendar::Standard => {
                if year < 1582 {
                    julian
                } else {
                    gregorian
                }
            }
        }
    }

    /// Returns the number of days in the given month of the given year.
    ///
    /// Months outside 1..=12 return 0, which makes any day-of-month
    /// illegal for them.
    pub fn days_in_month(self, year: i64, month: u8) -> u8 {
        if !(1..=12).contains(&month) {
            return 0;
        }
        if self == Calendar::Day360 {
            return 30;
        }
        if month == 2 && self.is_leap_year(year) {
            return 29;
        }
        DAYS_PER_MONTH[month as usize]
    }

    /// Returns the number of days in the given year.
    pub fn days_in_year(self, year: i64) -> u16 {
        match self {
            Calendar::Day360 => 360,
            Calendar::NoLeap => 365,
            Calendar::AllLeap => 366,
            _ => {
                if self.is_leap_year(year) {
                    366
                } else {
                    365
                }
            }
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Calendar {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" | "gregorian" => Ok(Calendar::Standard),
            "proleptic_gregorian" => Ok(Calendar::ProlepticGregorian),
            "julian" => Ok(Calendar::Julian),
            "noleap" | "365_day" => Ok(Calendar::NoLeap),
            "all_leap" | "366_day" => Ok(Calendar::AllLeap),
            "360_day" => Ok(Calendar::Day360),
            other => Err(CalendarError::UnknownCalendar {
                name: other.to_string(),
            }),
        }
    }
}
