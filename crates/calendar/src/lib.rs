//! # chronos-calendar
//!
//! Calendar-aware date arithmetic for climate-model time coordinates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["units string"] -->|"parse_units()"| B["TimeUnits"]
//!     V["numeric value"] -->|"to_date()"| C["CalendarDate"]
//!     C -->|"to_offset()"| V
//!     C -->|"shift()"| C
//!     C -->|"generate()"| D["Vec of CalendarDate"]
//!     E["Calendar"] --> C
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chronos_calendar::{parse_units, to_date, Calendar};
//!
//! let units = parse_units("days since 1999-02-01")?;
//! let date = to_date(29.0, &units, Calendar::Day360)?;
//! assert_eq!(date.to_string(), "1999-02-30 00:00:00");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | Calendar variants and month/leap rules |
//! | `date` | Component-wise date/time value |
//! | `delta` | Time units and sampling steps |
//! | `units` | `"<unit> since <date>"` units-string parsing |
//! | `convert` | Offset/date conversion and date arithmetic |
//! | `series` | Regular date-series generation |
//! | `error` | Error types |

mod calendar;
mod convert;
mod date;
mod delta;
mod error;
mod series;
mod units;

pub use calendar::Calendar;
pub use convert::{shift, to_date, to_offset};
pub use date::CalendarDate;
pub use delta::{TimeDelta, TimeUnit};
pub use error::CalendarError;
pub use series::generate;
pub use units::{parse_units, TimeUnits};
