//! # chronos-checks
//!
//! Temporal-metadata quality checks for archive files: five single-file
//! checks plus continuity checking across the files of a timeseries.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chronos_checks::{check_filename_time_format, DatasetTimeInfo};
//!
//! let ds = DatasetTimeInfo::from_parts(
//!     "tas_Amon_HadGEM2-ES_historical_r1i1p1_185912-188411.nc",
//!     vec![15.5, 45.0],
//!     "days since 1859-12-01",
//!     "360_day",
//! );
//! let result = check_filename_time_format(&ds)?;
//! assert!(result.passed());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `dataset` | The per-file record the checks consume |
//! | `result` | Pass/fail outcome type |
//! | `tolerance` | Match tolerances and per-table defaults |
//! | `file` | The five single-file checks |
//! | `multifile` | Timeseries continuity check |
//! | `error` | Error types |

mod dataset;
mod error;
mod file;
mod multifile;
mod result;
mod tolerance;

pub use dataset::DatasetTimeInfo;
pub use error::CheckError;
pub use file::{
    check_filename_matches_time_axis, check_filename_time_format,
    check_regular_time_axis_increments, check_time_format_matches_frequency,
    check_valid_temporal_element,
};
pub use multifile::check_multifile_temporal_continuity;
pub use result::CheckResult;
pub use tolerance::{MatchConfig, Tolerance};
