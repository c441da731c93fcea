//! Calendar-period filtering.
//!
//! A [`PeriodFilter`] translates optional month/year selectors into a pure
//! predicate over transaction dates. The store uses it to decide its scan
//! strategy; the filter itself never touches storage.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Extract the month (1-12) and year components of a calendar date.
///
/// `NaiveDate` carries no timezone, so this is plain component access with
/// no hidden conversions.
#[must_use]
pub fn month_and_year(date: NaiveDate) -> (u32, i32) {
    (date.month(), date.year())
}

/// A predicate selecting transactions whose date falls in a requested period.
///
/// - Neither selector supplied: matches every date.
/// - Only `month`: matches that month component across all years.
/// - Only `year`: matches that year component across all months.
/// - Both: logical AND of the two conditions.
///
/// Selector values are not validated; an out-of-range month or year simply
/// matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFilter {
    /// Month selector (1-12 by convention).
    pub month: Option<u32>,

    /// Year selector (conventionally 4-digit).
    pub year: Option<i32>,
}

impl PeriodFilter {
    /// Build a filter from optional selectors.
    #[must_use]
    pub const fn new(month: Option<u32>, year: Option<i32>) -> Self {
        Self { month, year }
    }

    /// A filter matching all records.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            month: None,
            year: None,
        }
    }

    /// A filter restricted to a single year, all months.
    #[must_use]
    pub const fn for_year(year: i32) -> Self {
        Self {
            month: None,
            year: Some(year),
        }
    }

    /// Whether `date` falls inside the requested period.
    #[must_use]
    pub fn matches(&self, date: NaiveDate) -> bool {
        let (month, year) = month_and_year(date);
        self.month.map_or(true, |m| m == month) && self.year.map_or(true, |y| y == year)
    }
}
