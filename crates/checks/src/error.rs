//! Error types for the check layer.
//!
//! Checks distinguish data-quality defects, reported through a failed
//! [`crate::CheckResult`], from configuration and programmer errors,
//! which surface here.

use chronos_calendar::CalendarError;
use chronos_drs::DrsError;
use thiserror::Error;

/// Errors raised by the checks for misconfiguration, never for
/// data-quality defects.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A tolerance string did not parse.
    #[error("malformed tolerance: '{value}' (expected '<unit>:<count>')")]
    BadTolerance {
        /// The offending tolerance text.
        value: String,
    },

    /// A file record carries no time values.
    #[error("file '{file}' has an empty time axis")]
    EmptyTimeAxis {
        /// The file's name.
        file: String,
    },

    /// The multi-file check was invoked with no files.
    #[error("no files to check")]
    EmptySet,

    /// A calendar-layer failure.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A filename-interpretation failure.
    #[error(transparent)]
    Drs(#[from] DrsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = CheckError::BadTolerance {
            value: "16 days".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "malformed tolerance: '16 days' (expected '<unit>:<count>')"
        );

        let e = CheckError::EmptyTimeAxis {
            file: "tas_Amon_x_y_r1i1p1_185912-188411".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "file 'tas_Amon_x_y_r1i1p1_185912-188411' has an empty time axis"
        );

        assert_eq!(CheckError::EmptySet.to_string(), "no files to check");
    }
}
