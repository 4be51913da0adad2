//! Heterogeneous date inputs and flexible date construction.

use chrono::Local;
use chrono_english::{parse_date_string, Dialect};
use tracing::debug;

use crate::date::CalendarDate;
use crate::error::InvalidDateError;

/// A date-like input accepted by [`date`] and the other resolving functions.
///
/// Numbers are interpreted as compact calendar forms (YYYY, YYYYMM,
/// YYYYMMDD). Text holding only digits is treated the same way; any other
/// text is handed to the flexible natural-language parser.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// An already-resolved calendar date, passed through unchanged.
    Date(CalendarDate),
    /// A compact numeric form: YYYY, YYYYMM, or YYYYMMDD.
    Number(i64),
    /// Free-form text such as `"July 19, 2012"` or `"07/19/2012"`.
    Text(String),
}

impl From<CalendarDate> for DateInput {
    fn from(date: CalendarDate) -> Self {
        Self::Date(date)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for DateInput {
    fn from(value: i32) -> Self {
        Self::Number(value as i64)
    }
}

impl From<u32> for DateInput {
    fn from(value: u32) -> Self {
        Self::Number(value as i64)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Resolves a compact numeric form into a date.
///
/// 4 digits select January 1 of that year, 6 digits (YYYYMM) the first of
/// that month, and 8 digits (YYYYMMDD) the exact date. Any other digit
/// count is rejected.
fn from_number(value: i64) -> Result<CalendarDate, InvalidDateError> {
    let digits = if value > 0 {
        (value.ilog10() + 1) as usize
    } else {
        1
    };
    match digits {
        4 => CalendarDate::new(value as i32, 1, 1),
        6 => CalendarDate::new((value / 100) as i32, (value % 100) as u32, 1),
        8 => CalendarDate::new(
            (value / 10_000) as i32,
            ((value / 100) % 100) as u32,
            (value % 100) as u32,
        ),
        _ => Err(InvalidDateError::InvalidNumeric { value, digits }),
    }
}

/// Resolves free-form text into a date.
///
/// All-digit text is routed through the compact numeric forms; everything
/// else is delegated to the chrono-english parser (US dialect), keeping only
/// the date part of its result.
fn from_text(text: &str) -> Result<CalendarDate, InvalidDateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidDateError::Unparseable {
            input: text.to_string(),
        });
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        // Decode by character count so leading zeros keep their digit
        // count intact ("0500" is a 4-digit year, not a 3-digit number).
        let value: i64 = trimmed.parse().map_err(|_| InvalidDateError::Unparseable {
            input: text.to_string(),
        })?;
        return match trimmed.len() {
            4 => CalendarDate::new(value as i32, 1, 1),
            6 => CalendarDate::new((value / 100) as i32, (value % 100) as u32, 1),
            8 => CalendarDate::new(
                (value / 10_000) as i32,
                ((value / 100) % 100) as u32,
                (value % 100) as u32,
            ),
            len => Err(InvalidDateError::InvalidNumeric {
                value,
                digits: len,
            }),
        };
    }
    debug!(input = trimmed, "delegating to flexible date parser");
    parse_date_string(trimmed, Local::now(), Dialect::Us)
        .map_err(|_| InvalidDateError::Unparseable {
            input: text.to_string(),
        })
        .and_then(|resolved| CalendarDate::from_naive(resolved.date_naive()))
}

/// Resolves an optional input into a date, defaulting to today.
pub(crate) fn resolve(input: Option<DateInput>) -> Result<CalendarDate, InvalidDateError> {
    match input {
        None => Ok(CalendarDate::today()),
        Some(DateInput::Date(date)) => Ok(date),
        Some(DateInput::Number(value)) => from_number(value),
        Some(DateInput::Text(text)) => from_text(&text),
    }
}

/// Constructs a [`CalendarDate`] from a flexible input with optional month
/// and day overrides.
///
/// With no input at all, returns the current system date. Compact numeric
/// forms (YYYY, YYYYMM, YYYYMMDD, as numbers or digit strings) are decoded
/// directly; any other text goes through the flexible string parser.
///
/// A supplied `month` overrides the month implied by `input` and resets the
/// day to 1 unless `day` is also supplied; a supplied `day` alone overrides
/// just the day. Either way the year comes from the resolved input.
///
/// # Errors
///
/// Returns [`InvalidDateError`] when the resolved (year, month, day) is not
/// calendar-valid or the input cannot be parsed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(date(Some(2012.into()), None, None)?, CalendarDate::new(2012, 1, 1)?);
/// assert_eq!(date(Some("July 19, 2012".into()), None, None)?, CalendarDate::new(2012, 7, 19)?);
/// assert_eq!(date(Some(2012.into()), Some(7), Some(19))?, CalendarDate::new(2012, 7, 19)?);
/// ```
pub fn date(
    input: Option<DateInput>,
    month: Option<u32>,
    day: Option<u32>,
) -> Result<CalendarDate, InvalidDateError> {
    let base = resolve(input)?;
    match (month, day) {
        (None, None) => Ok(base),
        (Some(m), None) => CalendarDate::new(base.year(), m, 1),
        (Some(m), Some(d)) => CalendarDate::new(base.year(), m, d),
        (None, Some(d)) => CalendarDate::new(base.year(), base.month(), d),
    }
}
