//! Date differences in days, weeks, months, and years.

use std::fmt;

use crate::date::{days_in_month, CalendarDate};
use crate::error::InvalidDateError;
use crate::input::{resolve, DateInput};
use crate::offset::shift_year_month;
use crate::period::Period;

/// A non-negative difference between two dates.
///
/// Approximate differences (and day counts, which are inherently exact)
/// are whole numbers; exact months, years, and weeks carry a fractional
/// remainder. The value never depends on the order of the two input dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateDifference {
    /// A whole-unit count.
    Whole(u64),
    /// A count with a fractional remainder.
    Fractional(f64),
}

impl DateDifference {
    /// Returns the difference as a float regardless of variant.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Whole(n) => n as f64,
            Self::Fractional(x) => x,
        }
    }
}

impl fmt::Display for DateDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(n) => write!(f, "{n}"),
            Self::Fractional(x) => write!(f, "{x}"),
        }
    }
}

/// Day count from `earlier` to `later` (non-negative when ordered).
pub(crate) fn days_between(later: CalendarDate, earlier: CalendarDate) -> i64 {
    later
        .as_naive()
        .signed_duration_since(earlier.as_naive())
        .num_days()
}

/// Whole calendar months from `earlier` to `later` (`earlier <= later`).
///
/// A month is counted only once the same day-of-month is reached again,
/// except that a clamped end-of-month landing counts as a full month
/// (Jan 31 to Feb 28 is one whole month).
fn whole_months(later: CalendarDate, earlier: CalendarDate) -> Result<i64, InvalidDateError> {
    let mut months = (later.year() as i64 - earlier.year() as i64) * 12 + later.month() as i64
        - earlier.month() as i64;
    if shift_year_month(earlier, 0, months)? > later {
        months -= 1;
    }
    Ok(months)
}

/// Whole calendar years from `earlier` to `later` (`earlier <= later`).
fn whole_years(later: CalendarDate, earlier: CalendarDate) -> Result<i64, InvalidDateError> {
    let mut years = later.year() as i64 - earlier.year() as i64;
    if shift_year_month(earlier, years, 0)? > later {
        years -= 1;
    }
    Ok(years)
}

/// Months from `earlier` to `later` with a fractional remainder.
///
/// Within a single calendar month the fraction is the day delta over that
/// month's length. Across months, the whole-month count is anchored at the
/// earlier date (end-of-month clamped) and the leftover days are divided by
/// the anchor month's length.
fn exact_months(later: CalendarDate, earlier: CalendarDate) -> Result<f64, InvalidDateError> {
    if later.year() == earlier.year() && later.month() == earlier.month() {
        let span = days_in_month(later.year(), later.month())?;
        return Ok((later.day() - earlier.day()) as f64 / span as f64);
    }
    let whole = whole_months(later, earlier)?;
    let anchor = shift_year_month(earlier, 0, whole)?;
    let span = days_in_month(anchor.year(), anchor.month())?;
    Ok(whole as f64 + days_between(later, anchor) as f64 / span as f64)
}

/// Years from `earlier` to `later` with a fractional remainder, normalized
/// by 365 days per year.
fn exact_years(later: CalendarDate, earlier: CalendarDate) -> Result<f64, InvalidDateError> {
    let whole = whole_years(later, earlier)?;
    let anchor = shift_year_month(earlier, whole, 0)?;
    Ok(whole as f64 + days_between(later, anchor) as f64 / 365.0)
}

/// Computes the difference between two dates in the requested unit.
///
/// Both inputs are resolved like [`crate::date()`]; `today` defaults to the
/// current date when `None`. The two dates are ordered internally, so the
/// result is symmetric in its arguments and never negative.
///
/// Day counts are inherently exact and come back as
/// [`DateDifference::Whole`] in both modes. Weeks, months, and years are
/// whole counts when `exact` is false and carry a fractional remainder
/// otherwise. Lenient period and exactness tokens can be resolved up front
/// with [`Period::from_token`] and [`crate::exact_from_token`].
///
/// # Errors
///
/// Returns [`InvalidDateError`] if either input cannot be resolved to a
/// calendar-valid date.
///
/// # Examples
///
/// ```ignore
/// let d = datedif("20200101", Some("20200201".into()), Period::Days, false)?;
/// assert_eq!(d, DateDifference::Whole(31));
/// ```
pub fn datedif(
    compare: impl Into<DateInput>,
    today: Option<DateInput>,
    period: Period,
    exact: bool,
) -> Result<DateDifference, InvalidDateError> {
    let compare = resolve(Some(compare.into()))?;
    let today = resolve(today)?;
    let (earlier, later) = if compare <= today {
        (compare, today)
    } else {
        (today, compare)
    };
    let days = days_between(later, earlier);
    let difference = match (period, exact) {
        (Period::Days, _) => DateDifference::Whole(days as u64),
        (Period::Weeks, false) => DateDifference::Whole((days / 7) as u64),
        (Period::Weeks, true) => DateDifference::Fractional(days as f64 / 7.0),
        (Period::Months, false) => DateDifference::Whole(whole_months(later, earlier)? as u64),
        (Period::Months, true) => DateDifference::Fractional(exact_months(later, earlier)?),
        (Period::Years, false) => DateDifference::Whole(whole_years(later, earlier)? as u64),
        (Period::Years, true) => DateDifference::Fractional(exact_years(later, earlier)?),
    };
    Ok(difference)
}
