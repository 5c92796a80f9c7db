//! The time range a filename declares.

use chronos_calendar::{CalendarDate, TimeDelta};

use crate::error::DrsError;
use crate::tables::sampling_step;
use crate::token::parse_token;

/// The temporal coverage of a file as declared by its name: the start
/// and end dates from the time-range token plus the sampling step of
/// the table facet.
#[derive(Debug, Clone)]
pub struct FileTimeRange {
    start: CalendarDate,
    end: CalendarDate,
    table: String,
    step: TimeDelta,
}

impl FileTimeRange {
    /// Builds the range from a filename's facet tokens. The table is
    /// the second facet and the time range the last, per the archive
    /// naming convention. A single time token (`1859`) covers a range
    /// of one sample.
    ///
    /// # Errors
    ///
    /// Returns [`DrsError::MissingTableToken`] /
    /// [`DrsError::MissingTimeToken`] when the token list is too short,
    /// [`DrsError::BadTimeToken`] when the time token does not parse,
    /// and a table error when the table facet is unknown or has no
    /// sampling frequency.
    pub fn from_tokens(tokens: &[String]) -> Result<Self, DrsError> {
        let table = tokens.get(1).ok_or(DrsError::MissingTableToken)?;
        let time = tokens.last().ok_or(DrsError::MissingTimeToken)?;

        let (start, end) = match time.split_once('-') {
            Some((s, e)) => (parse_token(s)?, parse_token(e)?),
            None => {
                let t = parse_token(time)?;
                (t, t)
            }
        };

        Ok(Self {
            start: start.to_date(),
            end: end.to_date(),
            table: table.clone(),
            step: sampling_step(table)?,
        })
    }

    /// Returns the start date.
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date.
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns the table facet.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the table's sampling step.
    pub fn step(&self) -> TimeDelta {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronos_calendar::TimeUnit;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn monthly_range() {
        let r = FileTimeRange::from_tokens(&tokens(&[
            "tas", "Amon", "HadGEM2-ES", "historical", "r1i1p1", "185912-188411",
        ]))
        .unwrap();
        assert_eq!(r.start(), CalendarDate::new(1859, 12, 1));
        assert_eq!(r.end(), CalendarDate::new(1884, 11, 1));
        assert_eq!(r.table(), "Amon");
        assert_eq!(r.step().unit(), TimeUnit::Month);
    }

    #[test]
    fn single_token_range() {
        let r =
            FileTimeRange::from_tokens(&tokens(&["pr", "yr", "model", "rcp45", "r1i1p1", "1859"]))
                .unwrap();
        assert_eq!(r.start(), r.end());
        assert_eq!(r.start(), CalendarDate::new(1859, 1, 1));
    }

    #[test]
    fn bad_inputs() {
        assert!(matches!(
            FileTimeRange::from_tokens(&tokens(&["tas"])),
            Err(DrsError::MissingTableToken)
        ));
        assert!(matches!(
            FileTimeRange::from_tokens(&tokens(&["tas", "Amon", "r1i1p1"])),
            Err(DrsError::BadTimeToken { .. })
        ));
        assert!(matches!(
            FileTimeRange::from_tokens(&tokens(&["tas", "Xmon", "185912-188411"])),
            Err(DrsError::UnknownTable { .. })
        ));
        assert!(matches!(
            FileTimeRange::from_tokens(&tokens(&["orog", "fx", "r0i0p0"])),
            Err(DrsError::BadTimeToken { .. })
        ));
    }
}
