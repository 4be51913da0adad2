//! Gregorian calendar date value type.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, TimeDelta};

use crate::error::InvalidDateError;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December). February is corrected
/// for leap years by [`days_in_month`].
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`InvalidDateError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, InvalidDateError> {
    if !(1..=12).contains(&month) {
        return Err(InvalidDateError::InvalidMonth { month });
    }
    let base = DAYS_PER_MONTH[month as usize] as u32;
    if month == 2 && is_leap_year(year) {
        Ok(base + 1)
    } else {
        Ok(base)
    }
}

/// A Gregorian calendar date with no time-of-day component.
///
/// A `CalendarDate` is always calendar-valid: the year is in 1..=9999, the
/// month in 1..=12, and the day valid for that month and year (leap-aware).
/// Equality and ordering follow `(year, month, day)` lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] if the year is outside 1..=9999, the
    /// month outside 1..=12, or the day invalid for that month and year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, InvalidDateError> {
        if !(1..=9999).contains(&year) {
            return Err(InvalidDateError::InvalidYear { year: year as i64 });
        }
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(InvalidDateError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Returns the current local system date.
    pub fn today() -> Self {
        // Safety: the system clock reports a year well inside 1..=9999.
        Self::from_naive(Local::now().date_naive())
            .expect("system clock within supported year range")
    }

    /// Converts a `chrono::NaiveDate` into a `CalendarDate`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError::InvalidYear`] if the year falls outside
    /// the supported 1..=9999 range (chrono permits a wider span).
    pub fn from_naive(date: NaiveDate) -> Result<Self, InvalidDateError> {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Converts this date into a `chrono::NaiveDate`.
    pub fn as_naive(self) -> NaiveDate {
        // Safety: CalendarDate always holds a calendar-valid (y, m, d)
        // inside chrono's supported range, guaranteed by the constructors.
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .expect("CalendarDate always holds a calendar-valid date")
    }

    /// Returns the year (1..=9999).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month as u32
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.day as u32
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(self) -> Self {
        Self {
            day: 1,
            ..self
        }
    }

    /// Returns the first day of this date's year.
    pub fn first_of_year(self) -> Self {
        Self {
            month: 1,
            day: 1,
            ..self
        }
    }

    /// Returns the last day of this date's month, leap-aware.
    pub fn last_of_month(self) -> Self {
        // Safety: the month is already validated, so days_in_month cannot fail.
        let max_day = days_in_month(self.year, self.month as u32)
            .expect("CalendarDate always holds a valid month");
        Self {
            day: max_day as u8,
            ..self
        }
    }

    /// Adds a signed number of calendar days, crossing month and year
    /// boundaries normally.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError::InvalidYear`] if the result leaves the
    /// supported year range.
    pub fn add_days(self, days: i64) -> Result<Self, InvalidDateError> {
        let shifted = self
            .as_naive()
            .checked_add_signed(TimeDelta::days(days))
            .ok_or(InvalidDateError::InvalidYear {
                year: self.year as i64 + days / 365,
            })?;
        Self::from_naive(shifted)
    }
}
