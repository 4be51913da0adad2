//! # datekit
//!
//! Gregorian calendar-date conveniences: flexible construction, differences,
//! and offsets.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateInput (number / text / date)"] -->|"date()"| B["CalendarDate"]
//!     B -->|"datedif()"| C["DateDifference"]
//!     B -->|"date_math()"| B
//!     B -->|"julian() / week_num()"| D["day-of-year / ISO week"]
//!     B -->|"eo_month()"| E["last day of month"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use datekit::{date, datedif, date_math, eo_month, julian, DateOffset, Period};
//!
//! // Flexible construction: compact numbers, digit strings, or free text.
//! let d = date(Some(20120719.into()), None, None)?;        // 2012-07-19
//! let d = date(Some("July 19, 2012".into()), None, None)?; // 2012-07-19
//!
//! // Differences, approximate or exact.
//! let days = datedif("20200101", Some("20200201".into()), Period::Days, false)?;
//! let years = datedif("20200101", Some("20210101".into()), Period::Years, true)?;
//!
//! // Offsets with end-of-month clamping.
//! let clamped = date_math(Some("20170131".into()), DateOffset::months(1))?; // 2017-02-28
//!
//! // Derived values.
//! let doy = julian(Some("20200301".into()))?; // 60
//! let eom = eo_month(Some("20200210".into()))?; // 2020-02-29
//! ```
//!
//! All operations are pure functions of their arguments, aside from the
//! implicit current-date default when an optional input is omitted. There
//! is no shared state, so concurrent calls need no coordination.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian `CalendarDate` value type and month-length rules |
//! | `input` | Heterogeneous `DateInput` and flexible construction |
//! | `period` | Difference units and lenient token matching |
//! | `diff` | `datedif` and the per-unit difference functions |
//! | `offset` | `DateOffset` and `date_math` with end-of-month clamping |
//! | `derived` | Field accessors, day-of-year, end-of-month, ISO weeks |
//! | `error` | Error types |

mod date;
mod derived;
mod diff;
mod error;
mod input;
mod offset;
mod period;

pub use date::{days_in_month, is_leap_year, CalendarDate};
pub use derived::{day, eo_month, julian, month, week_num, year};
pub use diff::{datedif, DateDifference};
pub use error::InvalidDateError;
pub use input::{date, DateInput};
pub use offset::{date_math, DateOffset};
pub use period::{exact_from_token, Period};
