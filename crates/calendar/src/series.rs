//! Generation of regular date series under a calendar.

use crate::calendar::Calendar;
use crate::convert::shift;
use crate::date::CalendarDate;
use crate::delta::TimeDelta;
use crate::error::CalendarError;

/// Generates the inclusive series of dates from `start` to `end` at the
/// given sampling step.
///
/// The series starts exactly at `start` and includes every stepped date
/// up to and including `end` when the step lands on it. A `start` after
/// `end` yields an empty series; `start == end` yields a single entry.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] when a fixed-duration step is
/// applied from a date that does not exist in the calendar.
pub fn generate(
    start: CalendarDate,
    end: CalendarDate,
    step: &TimeDelta,
    calendar: Calendar,
) -> Result<Vec<CalendarDate>, CalendarError> {
    let mut series = Vec::new();
    let mut current = start;
    while current <= end {
        series.push(current);
        current = shift(current, step, calendar)?;
    }
    Ok(series)
}
