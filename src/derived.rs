//! Derived accessors: field extraction, day-of-year, end-of-month, and
//! ISO week numbers.

use chrono::Datelike;

use crate::date::CalendarDate;
use crate::diff::days_between;
use crate::error::InvalidDateError;
use crate::input::{resolve, DateInput};
use crate::offset::{date_math, DateOffset};

/// Returns the year of the given date, or of today when `input` is `None`.
///
/// # Errors
///
/// Returns [`InvalidDateError`] if the input cannot be resolved.
pub fn year(input: Option<DateInput>) -> Result<i32, InvalidDateError> {
    Ok(resolve(input)?.year())
}

/// Returns the month of the given date, or of today when `input` is `None`.
///
/// # Errors
///
/// Returns [`InvalidDateError`] if the input cannot be resolved.
pub fn month(input: Option<DateInput>) -> Result<u32, InvalidDateError> {
    Ok(resolve(input)?.month())
}

/// Returns the day of month of the given date, or of today when `input`
/// is `None`.
///
/// # Errors
///
/// Returns [`InvalidDateError`] if the input cannot be resolved.
pub fn day(input: Option<DateInput>) -> Result<u32, InvalidDateError> {
    Ok(resolve(input)?.day())
}

/// Returns the day-of-year of the given date: the day count from January 1
/// of that year, so January 1 itself is 0 and 2020-03-01 is 60.
///
/// This is a day-of-year ordinal, not the astronomical Julian Day Number.
///
/// # Errors
///
/// Returns [`InvalidDateError`] if the input cannot be resolved.
pub fn julian(input: Option<DateInput>) -> Result<u32, InvalidDateError> {
    let date = resolve(input)?;
    Ok(days_between(date, date.first_of_year()) as u32)
}

/// Returns the last day of the given date's month as a full date.
///
/// Composed from [`date_math`]: the first of the month, plus one month,
/// minus one day.
///
/// # Errors
///
/// Returns [`InvalidDateError`] if the input cannot be resolved.
pub fn eo_month(input: Option<DateInput>) -> Result<CalendarDate, InvalidDateError> {
    let first = resolve(input)?.first_of_month();
    date_math(Some(first.into()), DateOffset::months(1))?.add_days(-1)
}

/// Returns the ISO-8601 week number (1..=53) of the given date, or of
/// today when `input` is `None`.
///
/// # Errors
///
/// Returns [`InvalidDateError`] if the input cannot be resolved.
pub fn week_num(input: Option<DateInput>) -> Result<u32, InvalidDateError> {
    Ok(resolve(input)?.as_naive().iso_week().week())
}
