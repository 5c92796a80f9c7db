//! Static table configuration: time-token layout and sampling frequency
//! per CMOR-style table.

use chronos_calendar::{Calendar, TimeDelta, TimeUnit};

use crate::error::DrsError;

/// Valid day differences between consecutive monthly samples under a
/// calendar with irregular month lengths (mid-month timestamps land
/// 29.5, 30.5 or 31 days apart).
pub const VALID_MONTHLY_STEPS_DAYS: [f64; 3] = [29.5, 30.5, 31.0];

/// Returns the number of digits a time token carries for the given
/// table, or `None` for an unrecognised table. Tables with no time axis
/// (fixed fields, site and offline data) return `Some(0)`.
pub fn token_length(table: &str) -> Option<usize> {
    let len = match table {
        "3hr" | "cf3hr" | "subhr" => 12,
        "6hrLev" | "6hrPLev" | "6hrPlev" => 10,
        "day" | "cfDay" => 8,
        "Amon" | "Lmon" | "Omon" | "LImon" | "OImon" | "cfMon" | "monClim" | "aero" => 6,
        "yr" | "Oyr" => 4,
        "fx" | "cfOff" | "cfSites" => 0,
        _ => return None,
    };
    Some(len)
}

/// Returns the sampling step of the given table.
///
/// # Errors
///
/// Returns [`DrsError::UnknownTable`] for an unrecognised table and
/// [`DrsError::NoSamplingStep`] for tables with no time axis.
pub fn sampling_step(table: &str) -> Result<TimeDelta, DrsError> {
    let (count, unit) = match table {
        "3hr" | "cf3hr" => (3.0, TimeUnit::Hour),
        "6hrLev" | "6hrPLev" | "6hrPlev" => (6.0, TimeUnit::Hour),
        "subhr" => (30.0, TimeUnit::Minute),
        "day" | "cfDay" => (1.0, TimeUnit::Day),
        "Amon" | "Lmon" | "Omon" | "LImon" | "OImon" | "cfMon" | "monClim" | "aero" => {
            (1.0, TimeUnit::Month)
        }
        "yr" | "Oyr" => (1.0, TimeUnit::Year),
        "fx" | "cfOff" | "cfSites" => {
            return Err(DrsError::NoSamplingStep {
                table: table.to_string(),
            })
        }
        _ => {
            return Err(DrsError::UnknownTable {
                table: table.to_string(),
            })
        }
    };
    // The counts above are all whole, so construction cannot fail.
    TimeDelta::new(count, unit).map_err(DrsError::from)
}

/// Returns whether the table samples monthly.
pub fn is_monthly_table(table: &str) -> bool {
    matches!(
        sampling_step(table),
        Ok(step) if step.unit() == TimeUnit::Month
    )
}

/// Returns whether months have varying lengths under the calendar.
/// Only the 360-day and all-leap calendars give every month (of a kind)
/// the same length.
pub fn has_irregular_months(calendar: Calendar) -> bool {
    !matches!(calendar, Calendar::Day360 | Calendar::AllLeap)
}
