//! The per-file record the checks consume.

use std::path::Path;
use std::str::FromStr;

use chronos_calendar::Calendar;

use crate::error::CheckError;

/// Everything the checks need to know about one file: its filename
/// facets and the already-extracted time coordinate (numeric values,
/// units string, calendar name).
///
/// Reading the physical file format is a collaborator's job; this
/// record is the whole boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetTimeInfo {
    filename_tokens: Vec<String>,
    time_values: Vec<f64>,
    units: String,
    calendar: String,
}

impl DatasetTimeInfo {
    /// Builds a record from a filename (path and extension are
    /// stripped, facets split on `_`) plus the time coordinate.
    /// An empty calendar name defaults to `standard`.
    pub fn from_parts(
        filename: &str,
        time_values: Vec<f64>,
        units: impl Into<String>,
        calendar: impl Into<String>,
    ) -> Self {
        let mut calendar = calendar.into();
        if calendar.is_empty() {
            calendar = "standard".to_string();
        }
        Self {
            filename_tokens: split_facets(filename),
            time_values,
            units: units.into(),
            calendar,
        }
    }

    /// Builds a record carrying only filename facets, for checks that
    /// never look at the time coordinate.
    pub fn from_filename(filename: &str) -> Self {
        Self::from_parts(filename, Vec::new(), "", "")
    }

    /// Returns the filename facets.
    pub fn filename_tokens(&self) -> &[String] {
        &self.filename_tokens
    }

    /// Returns the time-axis numeric values.
    pub fn time_values(&self) -> &[f64] {
        &self.time_values
    }

    /// Returns the time units string.
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Returns the declared calendar name.
    pub fn calendar_name(&self) -> &str {
        &self.calendar
    }

    /// Parses the declared calendar.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unrecognised calendar name.
    pub fn calendar(&self) -> Result<Calendar, CheckError> {
        Ok(Calendar::from_str(&self.calendar).map_err(CheckError::from)?)
    }

    /// Returns the time-range facet (the last token), if any.
    pub fn time_token(&self) -> Option<&str> {
        self.filename_tokens.last().map(String::as_str)
    }

    /// Returns the table facet (the second token), if any.
    pub fn table_token(&self) -> Option<&str> {
        self.filename_tokens.get(1).map(String::as_str)
    }

    /// Returns the reassembled filename for messages.
    pub fn label(&self) -> String {
        self.filename_tokens.join("_")
    }
}

fn split_facets(filename: &str) -> Vec<String> {
    let base = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    base.split('_').map(String::from).collect()
}
