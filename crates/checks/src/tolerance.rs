//! Tolerances for the filename/time-axis match.

use std::str::FromStr;

use chronos_calendar::{CalendarDate, TimeUnit};

use crate::error::CheckError;

/// A match tolerance: a fixed-duration window such as `days:16`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    count: f64,
    unit: TimeUnit,
}

impl Tolerance {
    /// Builds a tolerance from a count of a fixed-duration unit.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::BadTolerance`] for month/year units or a
    /// negative or non-finite count.
    pub fn new(count: f64, unit: TimeUnit) -> Result<Self, CheckError> {
        if !unit.is_fixed() || !count.is_finite() || count < 0.0 {
            return Err(CheckError::BadTolerance {
                value: format!("{unit}:{count}"),
            });
        }
        Ok(Self { count, unit })
    }

    /// The window expressed in days.
    pub fn in_days(self) -> f64 {
        // Construction rejects non-fixed units, so per_day is Some.
        self.unit.per_day().map_or(self.count, |p| self.count / p)
    }

    /// The default tolerance for a table, per archive practice: wide
    /// for yearly and monthly data whose timestamps sit mid-period,
    /// tight for daily and sub-daily data.
    pub fn default_for_table(table: &str) -> Self {
        let (count, unit) = match table {
            "yr" | "Oyr" => (180.0, TimeUnit::Day),
            "Amon" | "Lmon" | "Omon" | "LImon" | "OImon" | "cfMon" | "monClim" | "aero" => {
                (16.0, TimeUnit::Day)
            }
            "6hrLev" | "6hrPLev" | "6hrPlev" | "3hr" | "cf3hr" | "subhr" => (1.0, TimeUnit::Hour),
            _ => (1.0, TimeUnit::Day),
        };
        Self { count, unit }
    }
}

impl FromStr for Tolerance {
    type Err = CheckError;

    /// Parses `"<unit>:<count>"`, e.g. `days:16` or `hours:1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CheckError::BadTolerance {
            value: s.to_string(),
        };
        let (unit, count) = s.split_once(':').ok_or_else(bad)?;
        let unit = TimeUnit::from_str(unit.trim()).map_err(|_| bad())?;
        let count = count.trim().parse::<f64>().map_err(|_| bad())?;
        Tolerance::new(count, unit).map_err(|_| bad())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_for_table("day")
    }
}

impl std::fmt::Display for Tolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s:{}", self.unit, self.count)
    }
}

/// Configuration for the filename/time-axis match check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    tolerance: Tolerance,
    epoch_threshold: CalendarDate,
}

impl MatchConfig {
    /// Replaces the tolerance.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replaces the epoch-proximity threshold: filename dates before
    /// this point only get the one-sided upper comparison, since the
    /// time axis of an epoch-adjacent series may start within the
    /// tolerance of date zero.
    pub fn with_epoch_threshold(mut self, threshold: CalendarDate) -> Self {
        self.epoch_threshold = threshold;
        self
    }

    /// Returns the tolerance.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Returns the epoch-proximity threshold.
    pub fn epoch_threshold(&self) -> CalendarDate {
        self.epoch_threshold
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            epoch_threshold: CalendarDate::new(1, 1, 17),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tolerances() {
        let t: Tolerance = "days:16".parse().unwrap();
        assert_eq!(t.in_days(), 16.0);

        let t: Tolerance = "hours:1".parse().unwrap();
        assert_eq!(t.in_days(), 1.0 / 24.0);

        let t: Tolerance = "days:0.5".parse().unwrap();
        assert_eq!(t.in_days(), 0.5);
    }

    #[test]
    fn parse_rejects_bad_tolerances() {
        for s in ["16 days", "days", ":16", "days:", "months:1", "days:-1", "days:x"] {
            assert!(s.parse::<Tolerance>().is_err(), "parsed: {s}");
        }
    }

    #[test]
    fn table_defaults() {
        assert_eq!(Tolerance::default_for_table("Oyr").in_days(), 180.0);
        assert_eq!(Tolerance::default_for_table("Amon").in_days(), 16.0);
        assert_eq!(Tolerance::default_for_table("aero").in_days(), 16.0);
        assert_eq!(Tolerance::default_for_table("day").in_days(), 1.0);
        assert_eq!(Tolerance::default_for_table("3hr").in_days(), 1.0 / 24.0);
        assert_eq!(Tolerance::default_for_table("unknown").in_days(), 1.0);
    }

    #[test]
    fn tolerance_display() {
        let t: Tolerance = "days:16".parse().unwrap();
        assert_eq!(t.to_string(), "days:16");
    }

    #[test]
    fn match_config_builder() {
        let cfg = MatchConfig::default()
            .with_tolerance("days:16".parse().unwrap())
            .with_epoch_threshold(CalendarDate::new(1, 2, 1));
        assert_eq!(cfg.tolerance().in_days(), 16.0);
        assert_eq!(cfg.epoch_threshold(), CalendarDate::new(1, 2, 1));
    }
}
