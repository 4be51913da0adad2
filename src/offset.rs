//! Calendar offsets with end-of-month clamping.

use tracing::debug;

use crate::date::{days_in_month, CalendarDate};
use crate::error::InvalidDateError;
use crate::input::{resolve, DateInput};

/// A signed calendar offset applied to a base date by [`date_math`].
///
/// The zero offset is the identity. Years and months are applied first
/// (with end-of-month clamping), then weeks and days as a plain day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateOffset {
    /// Whole years to add (may be negative).
    pub years: i32,
    /// Whole months to add (may be negative).
    pub months: i32,
    /// Seven-day weeks to add (may be negative).
    pub weeks: i32,
    /// Calendar days to add (may be negative).
    pub days: i32,
}

impl DateOffset {
    /// An offset of whole years only.
    pub fn years(years: i32) -> Self {
        Self {
            years,
            ..Self::default()
        }
    }

    /// An offset of whole months only.
    pub fn months(months: i32) -> Self {
        Self {
            months,
            ..Self::default()
        }
    }

    /// An offset of weeks only.
    pub fn weeks(weeks: i32) -> Self {
        Self {
            weeks,
            ..Self::default()
        }
    }

    /// An offset of days only.
    pub fn days(days: i32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }
}

/// Shifts a date by whole years and months, clamping the day to the end of
/// the target month when needed (Jan 31 + 1 month is Feb 28 or 29, never
/// an error and never an overflow into March).
pub(crate) fn shift_year_month(
    base: CalendarDate,
    years: i64,
    months: i64,
) -> Result<CalendarDate, InvalidDateError> {
    // 0-based month index; div_euclid/rem_euclid carry negative months
    // into the year correctly.
    let index = base.month() as i64 - 1 + months;
    let year = base.year() as i64 + years + index.div_euclid(12);
    let month = (index.rem_euclid(12) + 1) as u32;
    if !(1..=9999).contains(&year) {
        return Err(InvalidDateError::InvalidYear { year });
    }
    let year = year as i32;
    let max_day = days_in_month(year, month)?;
    let day = base.day().min(max_day);
    if day < base.day() {
        debug!(%base, year, month, day, "clamped day to end of target month");
    }
    CalendarDate::new(year, month, day)
}

/// Adds a calendar offset to a date.
///
/// The base date defaults to today when `input` is `None` and is otherwise
/// resolved like [`crate::date()`]. Years and months are applied first; if the
/// base day does not exist in the target month the day clamps to that
/// month's last day. Weeks and days are then added as a single day count
/// (weeks × 7 + days), crossing month and year boundaries normally with no
/// clamping.
///
/// # Errors
///
/// Returns [`InvalidDateError`] if the base date cannot be resolved or the
/// result leaves the supported year range.
///
/// # Examples
///
/// ```ignore
/// let d = date_math(Some("20170131".into()), DateOffset::months(1))?;
/// assert_eq!(d, CalendarDate::new(2017, 2, 28)?);
/// ```
pub fn date_math(
    input: Option<DateInput>,
    offset: DateOffset,
) -> Result<CalendarDate, InvalidDateError> {
    let base = resolve(input)?;
    let shifted = shift_year_month(base, offset.years as i64, offset.months as i64)?;
    shifted.add_days(offset.weeks as i64 * 7 + offset.days as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn zero_offset_is_identity() {
        let base = d(2020, 2, 29);
        assert_eq!(
            date_math(Some(base.into()), DateOffset::default()).unwrap(),
            base
        );
    }

    #[test]
    fn add_months_clamps_non_leap() {
        let result = date_math(Some("20170131".into()), DateOffset::months(1)).unwrap();
        assert_eq!(result, d(2017, 2, 28));
    }

    #[test]
    fn add_months_clamps_leap() {
        let result = date_math(Some("20160131".into()), DateOffset::months(1)).unwrap();
        assert_eq!(result, d(2016, 2, 29));
    }

    #[test]
    fn add_months_crosses_year() {
        let result = date_math(Some(d(2020, 11, 15).into()), DateOffset::months(3)).unwrap();
        assert_eq!(result, d(2021, 2, 15));
    }

    #[test]
    fn subtract_months_crosses_year() {
        let result = date_math(Some(d(2020, 2, 15).into()), DateOffset::months(-3)).unwrap();
        assert_eq!(result, d(2019, 11, 15));
    }

    #[test]
    fn subtract_months_clamps() {
        let result = date_math(Some(d(2020, 3, 31).into()), DateOffset::months(-1)).unwrap();
        assert_eq!(result, d(2020, 2, 29));
    }

    #[test]
    fn add_years_clamps_leap_day() {
        let result = date_math(Some(d(2020, 2, 29).into()), DateOffset::years(1)).unwrap();
        assert_eq!(result, d(2021, 2, 28));
    }

    #[test]
    fn years_and_months_combine() {
        let result = date_math(
            Some(d(2018, 10, 5).into()),
            DateOffset {
                years: 1,
                months: 5,
                ..DateOffset::default()
            },
        )
        .unwrap();
        assert_eq!(result, d(2020, 3, 5));
    }

    #[test]
    fn days_applied_after_months_without_clamping() {
        // Jan 31 + 1 month clamps to Feb 28, then +1 day crosses to Mar 1.
        let result = date_math(
            Some(d(2017, 1, 31).into()),
            DateOffset {
                months: 1,
                days: 1,
                ..DateOffset::default()
            },
        )
        .unwrap();
        assert_eq!(result, d(2017, 3, 1));
    }

    #[test]
    fn weeks_are_seven_days() {
        let result = date_math(Some(d(2020, 1, 1).into()), DateOffset::weeks(2)).unwrap();
        assert_eq!(result, d(2020, 1, 15));
        let combined = date_math(
            Some(d(2020, 1, 1).into()),
            DateOffset {
                weeks: 1,
                days: 3,
                ..DateOffset::default()
            },
        )
        .unwrap();
        assert_eq!(combined, d(2020, 1, 11));
    }

    #[test]
    fn negative_days_cross_month_start() {
        let result = date_math(Some(d(2020, 3, 1).into()), DateOffset::days(-1)).unwrap();
        assert_eq!(result, d(2020, 2, 29));
    }

    #[test]
    fn shift_twelve_months_is_one_year() {
        let base = d(2019, 6, 15);
        assert_eq!(
            shift_year_month(base, 0, 12).unwrap(),
            shift_year_month(base, 1, 0).unwrap()
        );
    }

    #[test]
    fn shift_negative_month_index_carries() {
        let base = d(2020, 1, 15);
        assert_eq!(shift_year_month(base, 0, -1).unwrap(), d(2019, 12, 15));
        assert_eq!(shift_year_month(base, 0, -13).unwrap(), d(2018, 12, 15));
    }

    #[test]
    fn year_range_overflow_rejected() {
        let base = d(9999, 12, 1);
        assert_eq!(
            shift_year_month(base, 0, 1).unwrap_err(),
            InvalidDateError::InvalidYear { year: 10_000 }
        );
        let base = d(1, 1, 1);
        assert!(shift_year_month(base, -1, 0).is_err());
    }

    #[test]
    fn base_defaults_to_today() {
        let result = date_math(None, DateOffset::default()).unwrap();
        assert_eq!(result, CalendarDate::today());
    }
}
