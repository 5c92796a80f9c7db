//! Single-file checks: filename format, temporal element ranges,
//! frequency/format consistency, filename/time-axis agreement and
//! time-axis regularity.

use tracing::debug;

use chronos_calendar::{parse_units, to_date, to_offset, Calendar, CalendarError, CalendarDate, TimeUnits};
use chronos_drs::{
    has_irregular_months, is_monthly_table, is_valid_time_token, parse_token, token_length,
    TimeToken, VALID_MONTHLY_STEPS_DAYS,
};

use crate::dataset::DatasetTimeInfo;
use crate::error::CheckError;
use crate::result::CheckResult;
use crate::tolerance::MatchConfig;

/// Numeric slack when comparing raw time-axis differences.
const DIFF_EPSILON: f64 = 1e-6;

/// Checks that the filename's time-range token matches one of the
/// accepted layouts (`YYYY[MM[DD[hh[mm[ss]]]]]`, single or `start-end`
/// pair of equal lengths).
pub fn check_filename_time_format(ds: &DatasetTimeInfo) -> Result<CheckResult, CheckError> {
    let Some(token) = ds.time_token() else {
        return Ok(CheckResult::fail("Filename has no time range token"));
    };
    if is_valid_time_token(token) {
        Ok(CheckResult::pass())
    } else {
        Ok(CheckResult::fail(format!(
            "Format of time range token is not recognised: '{token}'"
        )))
    }
}

/// Checks that the components of the time-range token are within legal
/// ranges: year 1..=4000, month 1..=12, day 1..=31, hour 0..=23,
/// minute 0..=59. Components absent from the token are not checked,
/// and the day is not checked against the calendar's month length.
pub fn check_valid_temporal_element(ds: &DatasetTimeInfo) -> Result<CheckResult, CheckError> {
    let Some(token) = ds.time_token() else {
        return Ok(CheckResult::fail("Filename has no time range token"));
    };

    for element in token.split('-') {
        let parsed = match parse_token(element) {
            Ok(t) => t,
            Err(_) => {
                return Ok(CheckResult::fail(format!(
                    "Format of time range token is not recognised: '{token}'"
                )))
            }
        };
        if let Some(msg) = element_out_of_range(parsed) {
            return Ok(CheckResult::fail(msg));
        }
    }
    Ok(CheckResult::pass())
}

fn element_out_of_range(t: TimeToken) -> Option<&'static str> {
    if t.year() <= 0 || t.year() > 4000 {
        return Some("Year element out of range");
    }
    if t.month().is_some_and(|m| !(1..=12).contains(&m)) {
        return Some("Month element out of range");
    }
    if t.day().is_some_and(|d| !(1..=31).contains(&d)) {
        return Some("Day element out of range");
    }
    if t.hour().is_some_and(|h| h > 23) {
        return Some("Hour element out of range");
    }
    if t.minute().is_some_and(|m| m > 59) {
        return Some("Minute element out of range");
    }
    None
}

/// Checks that the digit length of the time-range token matches the
/// length expected for the table facet.
///
/// # Errors
///
/// An unrecognised table facet is a configuration error.
pub fn check_time_format_matches_frequency(
    ds: &DatasetTimeInfo,
) -> Result<CheckResult, CheckError> {
    let Some(table) = ds.table_token() else {
        return Ok(CheckResult::fail("Filename has no table token"));
    };
    let expected = token_length(table).ok_or_else(|| chronos_drs::DrsError::UnknownTable {
        table: table.to_string(),
    })?;

    let start_len = ds
        .time_token()
        .map(|t| t.split('-').next().unwrap_or(t).len())
        .unwrap_or(0);
    if start_len == expected {
        Ok(CheckResult::pass())
    } else {
        Ok(CheckResult::fail(format!(
            "Time range token length {start_len} does not match table '{table}' (expected {expected})"
        )))
    }
}

/// Checks that the filename's start/end dates match the first/last
/// values of the time axis within the configured tolerance.
///
/// # Errors
///
/// Unknown calendar names, malformed units strings and an empty time
/// axis are configuration errors; everything data-driven is a failed
/// result.
pub fn check_filename_matches_time_axis(
    ds: &DatasetTimeInfo,
    config: &MatchConfig,
) -> Result<CheckResult, CheckError> {
    let calendar = ds.calendar()?;
    let units = parse_units(ds.units())?;
    if units.origin_precision() < 3 {
        return Ok(CheckResult::fail(
            "Format of units is incorrect: reference date must be a full 'YYYY-MM-DD' date",
        ));
    }
    let (Some(first), Some(last)) = (ds.time_values().first(), ds.time_values().last()) else {
        return Err(CheckError::EmptyTimeAxis { file: ds.label() });
    };

    let Some(token) = ds.time_token() else {
        return Ok(CheckResult::fail("Filename has no time range token"));
    };
    let (start_token, end_token) = match token.split_once('-') {
        Some((s, e)) => (s, e),
        None => (token, token),
    };

    let ends = [
        ("start", start_token, *first),
        ("end", end_token, *last),
    ];
    let mut note = "";
    for (which, name_token, value) in ends {
        let name_date = match parse_token(name_token) {
            Ok(t) => t.to_date(),
            Err(_) => {
                return Ok(CheckResult::fail(format!(
                    "Format of time range token is not recognised: '{token}'"
                )))
            }
        };
        let axis_date = match to_date(value, &units, calendar) {
            Ok(d) => d,
            Err(e @ CalendarError::DateResolution { .. }) => {
                return Ok(CheckResult::fail(e.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        debug!(%which, %name_date, %axis_date, "comparing filename against time axis");

        match times_match(axis_date, name_date, &units, calendar, config)? {
            Verdict::Match => {}
            Verdict::CloseToZero => note = "Time close to zero",
            Verdict::Mismatch => {
                return Ok(CheckResult::fail(format!(
                    "The {which} time in the filename ({name_date}) does not match the \
                     time axis ({axis_date}) within the tolerance"
                )));
            }
        }
    }
    if note.is_empty() {
        Ok(CheckResult::pass())
    } else {
        Ok(CheckResult::pass_with(note))
    }
}

enum Verdict {
    Match,
    CloseToZero,
    Mismatch,
}

/// Compares an axis-derived date against a filename-derived date within
/// the tolerance, expressing both as offsets under the file's own units
/// and calendar. Filename dates before the epoch threshold get only the
/// one-sided upper comparison.
fn times_match(
    axis: CalendarDate,
    name: CalendarDate,
    units: &TimeUnits,
    calendar: Calendar,
    config: &MatchConfig,
) -> Result<Verdict, CheckError> {
    if axis == name {
        return Ok(Verdict::Match);
    }

    let axis_off = to_offset(axis, units, calendar)?;
    let name_off = match to_offset(name, units, calendar) {
        Ok(v) => v,
        // A filename date that does not exist in the calendar cannot
        // match anything on the axis.
        Err(CalendarError::InvalidDate { .. }) => return Ok(Verdict::Mismatch),
        Err(e) => return Err(e.into()),
    };
    let per_day = units.unit().per_day().unwrap_or(1.0);
    let diff_days = (axis_off - name_off) / per_day;
    let tol_days = config.tolerance().in_days();

    if name < config.epoch_threshold() {
        if name_off < axis_off + tol_days * per_day {
            return Ok(Verdict::CloseToZero);
        }
    }
    if diff_days.abs() < tol_days {
        Ok(Verdict::Match)
    } else {
        Ok(Verdict::Mismatch)
    }
}

/// Checks that the time axis increments regularly: every successive
/// difference equals the first one, except for monthly tables under
/// calendars with irregular month lengths, where any difference in
/// {29.5, 30.5, 31.0} days is accepted.
pub fn check_regular_time_axis_increments(
    ds: &DatasetTimeInfo,
) -> Result<CheckResult, CheckError> {
    let times = ds.time_values();
    if times.len() <= 1 {
        return Ok(CheckResult::pass_with("Only one time-step"));
    }
    let Some(table) = ds.table_token() else {
        return Ok(CheckResult::fail("Filename has no table token"));
    };
    let calendar = ds.calendar()?;

    let allowed: Vec<f64> = if is_monthly_table(table) && has_irregular_months(calendar) {
        VALID_MONTHLY_STEPS_DAYS.to_vec()
    } else {
        vec![times[1] - times[0]]
    };

    for pair in times.windows(2) {
        let diff = pair[1] - pair[0];
        if !allowed.iter().any(|a| (diff - a).abs() < DIFF_EPSILON) {
            return Ok(CheckResult::fail(format!(
                "Time difference {diff} is irregular or not in allowed values {allowed:?}"
            )));
        }
    }
    Ok(CheckResult::pass())
}
