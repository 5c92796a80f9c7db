//! Conversion between numeric time-axis values and calendar dates,
//! and calendar-aware date arithmetic.
//!
//! Generic date libraries cannot represent the archive calendars (30
//! February, mixed Julian/Gregorian years), so day counting is done here
//! directly: the fixed-length calendars are linear in (year, day-of-year)
//! and the real-world calendars go through integer Julian-day-number
//! formulas. The `standard` calendar switches from Julian to Gregorian
//! rules at 15 October 1582, so the ten skipped days of the reform never
//! materialise from arithmetic.

use crate::calendar::{Calendar, MONTH_START_365, MONTH_START_366};
use crate::date::CalendarDate;
use crate::delta::{TimeDelta, TimeUnit};
use crate::error::CalendarError;
use crate::units::TimeUnits;

const US_PER_DAY: i64 = 86_400_000_000;

/// Day number of 1582-10-15, the first Gregorian day of the mixed calendar.
const GREGORIAN_REFORM_DAY: i64 = 2_299_161;

/// Dates adjacent to the calendar-reform boundary that netCDF tooling has
/// historically emitted out-of-range day numbers for. A failed resolution
/// whose neighbour steps onto one of these is accepted.
const SPECIAL_DATES: &[(i64, u8, u8)] = &[(300, 3, 1)];

/// Converts a numeric time-axis value to a date under the given units
/// and calendar.
///
/// # Errors
///
/// Returns [`CalendarError::DateResolution`] when the value does not
/// resolve to a legal date and the special-case handling (see
/// [`SPECIAL_DATES`]) does not apply. Configuration errors from an
/// illegal reference date propagate unchanged.
pub fn to_date(
    value: f64,
    units: &TimeUnits,
    calendar: Calendar,
) -> Result<CalendarDate, CalendarError> {
    if !value.is_finite() {
        return Err(resolution_error(value, units, calendar));
    }
    let date = raw_to_date(value, units, calendar)?;
    match validate(calendar, date) {
        Ok(()) => Ok(date),
        Err(_) => resolve_special(value, units, calendar),
    }
}

/// Converts a date to a numeric time-axis value, the inverse of
/// [`to_date`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] when the date (or the units
/// reference date) does not exist in the calendar.
pub fn to_offset(
    date: CalendarDate,
    units: &TimeUnits,
    calendar: Calendar,
) -> Result<f64, CalendarError> {
    validate(calendar, date)?;
    let origin = units.origin();
    validate(calendar, origin)?;
    let days = (day_number(calendar, date) - day_number(calendar, origin)) as f64
        + (date.seconds_of_day() - origin.seconds_of_day()) / 86_400.0;
    Ok(days * per_day(units.unit())?)
}

/// Advances a date by a sampling step under the given calendar.
///
/// Month and year steps increment components directly, carrying months
/// into years; the day and time-of-day components are left untouched.
/// Fixed-duration steps go through day-number arithmetic and therefore
/// require the starting date to be legal in the calendar.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] when a fixed-duration step is
/// applied to a date that does not exist in the calendar.
pub fn shift(
    date: CalendarDate,
    delta: &TimeDelta,
    calendar: Calendar,
) -> Result<CalendarDate, CalendarError> {
    match delta.unit() {
        TimeUnit::Year => {
            let mut d = date;
            d.year += delta.count() as i64;
            Ok(d)
        }
        TimeUnit::Month => {
            let mut d = date;
            let mut month = i64::from(d.month) + delta.count() as i64;
            let mut year = d.year;
            while month > 12 {
                month -= 12;
                year += 1;
            }
            d.month = month as u8;
            d.year = year;
            Ok(d)
        }
        _ => {
            // in_days is Some for every fixed unit
            let days = delta
                .in_days()
                .ok_or(CalendarError::InvalidDelta {
                    count: delta.count(),
                    unit: delta.unit(),
                })?;
            shift_days(date, days, calendar)
        }
    }
}

/// Moves a date by a (possibly fractional, possibly negative) number of
/// days under the given calendar.
pub(crate) fn shift_days(
    date: CalendarDate,
    days: f64,
    calendar: Calendar,
) -> Result<CalendarDate, CalendarError> {
    validate(calendar, date)?;
    let base = day_number(calendar, date);
    Ok(rebuild(calendar, base, days + date.seconds_of_day() / 86_400.0))
}

fn raw_to_date(
    value: f64,
    units: &TimeUnits,
    calendar: Calendar,
) -> Result<CalendarDate, CalendarError> {
    let origin = units.origin();
    validate(calendar, origin)?;
    let base = day_number(calendar, origin);
    let total_days = value / per_day(units.unit())? + origin.seconds_of_day() / 86_400.0;
    Ok(rebuild(calendar, base, total_days))
}

/// Reconstructs a date from a base day number plus a fractional day
/// offset, rounding the time of day to the nearest microsecond.
fn rebuild(calendar: Calendar, base: i64, total_days: f64) -> CalendarDate {
    let whole = total_days.floor();
    let mut dnum = base + whole as i64;
    let mut us_of_day = ((total_days - whole) * 86_400.0 * 1e6).round() as i64;
    if us_of_day >= US_PER_DAY {
        us_of_day -= US_PER_DAY;
        dnum += 1;
    }
    let (year, month, day) = date_from_day_number(calendar, dnum);
    CalendarDate::from_components(
        year,
        month,
        day,
        (us_of_day / 3_600_000_000) as u8,
        ((us_of_day / 60_000_000) % 60) as u8,
        ((us_of_day / 1_000_000) % 60) as u8,
        (us_of_day % 1_000_000) as u32,
    )
}

/// Attempts the documented reform-boundary resolution: convert one unit
/// earlier, advance one unit with the generator increment, and accept the
/// result only if it lands on a known special date.
fn resolve_special(
    value: f64,
    units: &TimeUnits,
    calendar: Calendar,
) -> Result<CalendarDate, CalendarError> {
    let fail = || resolution_error(value, units, calendar);

    let day_before = raw_to_date(value - 1.0, units, calendar)?;
    if validate(calendar, day_before).is_err() {
        return Err(fail());
    }
    let step = TimeDelta::new(1.0, units.unit())?;
    let stepped = shift(day_before, &step, calendar)?;
    if SPECIAL_DATES.contains(&(stepped.year(), stepped.month(), stepped.day())) {
        Ok(stepped)
    } else {
        Err(fail())
    }
}

fn resolution_error(value: f64, units: &TimeUnits, calendar: Calendar) -> CalendarError {
    CalendarError::DateResolution {
        value,
        units: format!("{}s since {}", units.unit(), units.origin()),
        calendar,
    }
}

fn per_day(unit: TimeUnit) -> Result<f64, CalendarError> {
    unit.per_day().ok_or(CalendarError::NonFixedUnits { unit })
}

/// Checks that the (year, month, day) components exist in the calendar.
pub(crate) fn validate(calendar: Calendar, date: CalendarDate) -> Result<(), CalendarError> {
    let legal = (1..=12).contains(&date.month)
        && date.day >= 1
        && date.day <= calendar.days_in_month(date.year, date.month)
        && !(calendar == Calendar::Standard
            && date.year == 1582
            && date.month == 10
            && (5..=14).contains(&date.day));
    if legal {
        Ok(())
    } else {
        Err(CalendarError::InvalidDate { date, calendar })
    }
}

/// Returns the day index of a date within its calendar. The epoch is
/// arbitrary but fixed per calendar; only differences are meaningful.
pub(crate) fn day_number(calendar: Calendar, date: CalendarDate) -> i64 {
    let (year, month, day) = (date.year, i64::from(date.month), i64::from(date.day));
    match calendar {
        Calendar::Day360 => year * 360 + (month - 1) * 30 + (day - 1),
        Calendar::NoLeap => {
            year * 365 + i64::from(MONTH_START_365[month as usize]) + (day - 1)
        }
        Calendar::AllLeap => {
            year * 366 + i64::from(MONTH_START_366[month as usize]) + (day - 1)
        }
        Calendar::ProlepticGregorian => gregorian_day_number(year, month, day),
        Calendar::Julian => julian_day_number(year, month, day),
        Calendar::Standard => {
            if (date.year, date.month, date.day) >= (1582, 10, 15) {
                gregorian_day_number(year, month, day)
            } else {
                julian_day_number(year, month, day)
            }
        }
    }
}

/// Inverse of [`day_number`].
pub(crate) fn date_from_day_number(calendar: Calendar, n: i64) -> (i64, u8, u8) {
    match calendar {
        Calendar::Day360 => {
            let year = n.div_euclid(360);
            let doy = n.rem_euclid(360);
            (year, (doy / 30 + 1) as u8, (doy % 30 + 1) as u8)
        }
        Calendar::NoLeap => {
            let year = n.div_euclid(365);
            let doy = n.rem_euclid(365) as u16;
            let (month, day) = month_day_from_doy(&MONTH_START_365, doy);
            (year, month, day)
        }
        Calendar::AllLeap => {
            let year = n.div_euclid(366);
            let doy = n.rem_euclid(366) as u16;
            let (month, day) = month_day_from_doy(&MONTH_START_366, doy);
            (year, month, day)
        }
        Calendar::ProlepticGregorian => gregorian_from_day_number(n),
        Calendar::Julian => julian_from_day_number(n),
        Calendar::Standard => {
            if n >= GREGORIAN_REFORM_DAY {
                gregorian_from_day_number(n)
            } else {
                julian_from_day_number(n)
            }
        }
    }
}

fn month_day_from_doy(starts: &[u16; 13], doy: u16) -> (u8, u8) {
    let mut month = 12u8;
    for m in 2..=12u8 {
        if starts[m as usize] > doy {
            month = m - 1;
            break;
        }
    }
    (month, (doy - starts[month as usize] + 1) as u8)
}

// Julian day numbers via the standard integer formulas (Richards).
// Valid for years above roughly -4800, which comfortably covers the
// archive range.

fn gregorian_day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

fn julian_day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083
}

fn gregorian_from_day_number(jdn: i64) -> (i64, u8, u8) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year, month as u8, day as u8)
}

fn julian_from_day_number(jdn: i64) -> (i64, u8, u8) {
    let c = jdn + 32082;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = d - 4800 + m / 10;
    (year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::parse_units;

    fn date(y: i64, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d)
    }

    #[test]
    fn day_number_round_trips() {
        let cals = [
            Calendar::Standard,
            Calendar::ProlepticGregorian,
            Calendar::Julian,
            Calendar::NoLeap,
            Calendar::AllLeap,
            Calendar::Day360,
        ];
        for cal in cals {
            for d in [
                date(1850, 1, 1),
                date(1999, 2, 28),
                date(2000, 12, 31),
                date(1, 1, 1),
                date(300, 2, 28),
            ] {
                let n = day_number(cal, d);
                assert_eq!(
                    date_from_day_number(cal, n),
                    (d.year(), d.month(), d.day()),
                    "calendar {cal}, date {d}"
                );
            }
        }
    }

    #[test]
    fn reform_boundary_is_contiguous() {
        let before = day_number(Calendar::Standard, date(1582, 10, 4));
        let after = day_number(Calendar::Standard, date(1582, 10, 15));
        assert_eq!(after - before, 1);
        assert_eq!(
            date_from_day_number(Calendar::Standard, before + 1),
            (1582, 10, 15)
        );
        assert_eq!(after, GREGORIAN_REFORM_DAY);
    }

    #[test]
    fn julian_gregorian_divergence() {
        // 1900 is a Julian leap year but not a Gregorian one.
        let feb28 = day_number(Calendar::Julian, date(1900, 2, 28));
        assert_eq!(
            date_from_day_number(Calendar::Julian, feb28 + 1),
            (1900, 2, 29)
        );
        let feb28 = day_number(Calendar::ProlepticGregorian, date(1900, 2, 28));
        assert_eq!(
            date_from_day_number(Calendar::ProlepticGregorian, feb28 + 1),
            (1900, 3, 1)
        );
    }

    #[test]
    fn validate_rejects_reform_gap() {
        assert!(validate(Calendar::Standard, date(1582, 10, 4)).is_ok());
        assert!(validate(Calendar::Standard, date(1582, 10, 15)).is_ok());
        for day in 5..=14 {
            assert!(validate(Calendar::Standard, date(1582, 10, day)).is_err());
        }
        // The proleptic calendar has no gap.
        assert!(validate(Calendar::ProlepticGregorian, date(1582, 10, 10)).is_ok());
    }

    #[test]
    fn validate_by_calendar() {
        assert!(validate(Calendar::Day360, date(1999, 2, 30)).is_ok());
        assert!(validate(Calendar::Standard, date(1999, 2, 30)).is_err());
        assert!(validate(Calendar::AllLeap, date(1999, 2, 29)).is_ok());
        assert!(validate(Calendar::NoLeap, date(2000, 2, 29)).is_err());
        assert!(validate(Calendar::Standard, date(1999, 0, 1)).is_err());
        assert!(validate(Calendar::Standard, date(1999, 1, 0)).is_err());
    }

    #[test]
    fn to_date_rejects_non_finite() {
        let units = parse_units("days since 1850-01-01").unwrap();
        assert!(matches!(
            to_date(f64::NAN, &units, Calendar::Standard),
            Err(CalendarError::DateResolution { .. })
        ));
    }

    #[test]
    fn to_offset_rejects_illegal_date() {
        let units = parse_units("days since 1999-01-01").unwrap();
        assert!(matches!(
            to_offset(date(1999, 2, 30), &units, Calendar::Standard),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(to_offset(date(1999, 2, 30), &units, Calendar::Day360).is_ok());
    }

    #[test]
    fn negative_offsets_resolve() {
        let units = parse_units("days since 1850-01-01 00:00:00").unwrap();
        let d = to_date(-0.5, &units, Calendar::Standard).unwrap();
        assert_eq!(d.to_string(), "1849-12-31 12:00:00");
    }

    #[test]
    fn shift_months_carries_years() {
        let d = date(2001, 11, 15);
        let step = TimeDelta::new(3.0, TimeUnit::Month).unwrap();
        let shifted = shift(d, &step, Calendar::Standard).unwrap();
        assert_eq!(shifted, date(2002, 2, 15));
    }

    #[test]
    fn shift_years_keeps_components() {
        let d = date(1999, 2, 30).at(6, 0, 0, 0);
        let step = TimeDelta::new(2.0, TimeUnit::Year).unwrap();
        let shifted = shift(d, &step, Calendar::Day360).unwrap();
        assert_eq!(shifted, date(2001, 2, 30).at(6, 0, 0, 0));
    }

    #[test]
    fn shift_days_crosses_reform() {
        let step = TimeDelta::new(1.0, TimeUnit::Day).unwrap();
        let shifted = shift(date(1582, 10, 4), &step, Calendar::Standard).unwrap();
        assert_eq!(shifted, date(1582, 10, 15));
    }
}
