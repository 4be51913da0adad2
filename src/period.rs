//! Period tags and lenient token matching.

/// The unit in which a date difference is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    /// Whole calendar years.
    Years,
    /// Whole calendar months (the conventional default).
    #[default]
    Months,
    /// Seven-day weeks.
    Weeks,
    /// Calendar days.
    Days,
}

/// Exact-token synonyms, mostly the numeric codes used by spreadsheet-style
/// date-difference functions. Checked before the first-letter rules.
const PERIOD_CODES: &[(&str, Period)] = &[
    ("1", Period::Years),
    ("2", Period::Months),
    ("12", Period::Months),
    ("3", Period::Weeks),
    ("52", Period::Weeks),
    ("4", Period::Days),
    ("365", Period::Days),
];

/// Tokens that select approximate mode; anything else means exact.
const FALSY_TOKENS: &[&str] = &["", "0", "n", "no", "false", "not exact", "approx", "approximate"];

impl Period {
    /// Resolves a loosely-matched token into a `Period`.
    ///
    /// Accepts the spreadsheet numeric codes, full words, and
    /// anything starting with `m` (months), `y` or `a` (years, "annual"),
    /// or `w` (weeks), case-insensitively. Every unrecognized token falls
    /// back to [`Period::Days`]; that fallback is a documented default,
    /// not an error.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(Period::from_token("Monthly"), Period::Months);
    /// assert_eq!(Period::from_token("12"), Period::Months);
    /// assert_eq!(Period::from_token("annual"), Period::Years);
    /// assert_eq!(Period::from_token("???"), Period::Days);
    /// ```
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if let Some(&(_, period)) = PERIOD_CODES.iter().find(|(code, _)| *code == token) {
            return period;
        }
        match token.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('m') => Period::Months,
            Some('y') | Some('a') => Period::Years,
            Some('w') => Period::Weeks,
            _ => Period::Days,
        }
    }
}

/// Resolves a loosely-matched exactness token.
///
/// The falsy synonyms (`"no"`, `"0"`, `"false"`, `"not exact"`, empty, and
/// friends) select approximate mode; every other token means exact.
pub fn exact_from_token(token: &str) -> bool {
    let token = token.trim().to_ascii_lowercase();
    !FALSY_TOKENS.contains(&token.as_str())
}
