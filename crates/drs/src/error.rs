//! Error types for filename parsing.

use chronos_calendar::CalendarError;
use thiserror::Error;

/// Errors raised while interpreting archive filenames.
#[derive(Error, Debug)]
pub enum DrsError {
    /// The time token does not match any recognised layout.
    #[error("malformed time token: '{token}'")]
    BadTimeToken {
        /// The offending token text.
        token: String,
    },

    /// The filename has no time token where one is required.
    #[error("filename has no time range token")]
    MissingTimeToken,

    /// The filename has too few facets to carry a table token.
    #[error("filename has no table token")]
    MissingTableToken,

    /// The table token is not a recognised table.
    #[error("unknown table: '{table}'")]
    UnknownTable {
        /// The offending table name.
        table: String,
    },

    /// The table carries no time axis, so no sampling step exists.
    #[error("table '{table}' has no sampling frequency")]
    NoSamplingStep {
        /// The table name.
        table: String,
    },

    /// A calendar-level failure while interpreting token dates.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
