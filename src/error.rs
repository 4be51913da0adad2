//! Error types for the datekit crate.

/// Error type for all fallible operations in the datekit crate.
///
/// Every public function either returns a calendar-valid result or fails
/// synchronously with one of these variants. There is no partial-failure
/// model: the only silent fallback in the crate is that unrecognized
/// period tokens resolve to days, which is a documented default rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDateError {
    /// Returned when a year is outside the supported range 1..=9999.
    #[error("invalid year: {year} (must be 1..=9999)")]
    InvalidYear {
        /// The invalid year that was provided or computed.
        year: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The year in which the month falls (February length depends on it).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u32,
    },

    /// Returned when a numeric input has a digit count that matches none of
    /// the accepted compact forms (YYYY, YYYYMM, YYYYMMDD).
    #[error("numeric date {value} has {digits} digits (expected 4, 6, or 8)")]
    InvalidNumeric {
        /// The numeric value that was provided.
        value: i64,
        /// Its decimal digit count.
        digits: usize,
    },

    /// Returned when the flexible string parser cannot resolve the input.
    #[error("unrecognized date string: {input:?}")]
    Unparseable {
        /// The string that could not be parsed.
        input: String,
    },
}
