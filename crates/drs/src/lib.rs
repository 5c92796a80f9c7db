//! # chronos-drs
//!
//! Archive filename interpretation: compact time tokens, table facets
//! and the sampling frequency they imply.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chronos_drs::{parse_token, FileTimeRange};
//!
//! let token = parse_token("185912")?;
//! assert_eq!(token.year(), 1859);
//!
//! let tokens: Vec<String> = "tas_Amon_HadGEM2-ES_historical_r1i1p1_185912-188411"
//!     .split('_').map(String::from).collect();
//! let range = FileTimeRange::from_tokens(&tokens)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `token` | Compact time-token parsing |
//! | `tables` | Table token-length and sampling-frequency configuration |
//! | `range` | Filename time range |
//! | `error` | Error types |

mod error;
mod range;
mod tables;
mod token;

pub use error::DrsError;
pub use range::FileTimeRange;
pub use tables::{
    has_irregular_months, is_monthly_table, sampling_step, token_length,
    VALID_MONTHLY_STEPS_DAYS,
};
pub use token::{is_valid_time_token, parse_token, TimeToken};
