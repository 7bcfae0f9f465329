//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type used to select the attendance
//! entries belonging to one payroll window.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents a pay period as an inclusive date range.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod::from_month("2026-02").unwrap();
///
/// assert_eq!(pay_period.end_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
/// assert!(pay_period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()));
/// assert!(!pay_period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period covering `start_date..=end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Creates a pay period spanning one calendar month given as `YYYY-MM`.
    ///
    /// Returns `None` if the string is not a valid year and month.
    pub fn from_month(month: &str) -> Option<Self> {
        let start_date = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").ok()?;
        let next_month = start_date.checked_add_months(Months::new(1))?;
        let end_date = next_month.pred_opt()?;
        Some(Self::new(start_date, end_date))
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
