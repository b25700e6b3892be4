use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::locale::month_name;

/// Years a report can cover. Keeps dates well inside what both chrono and a
/// spreadsheet cell can represent.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 9999;

/// The month+year window that bounds valid transaction dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPeriod {
    month: u32,
    year: i32,
}

impl ReportPeriod {
    pub fn new(month: u32, year: i32) -> Result<Self, LedgerError> {
        if !(1..=12).contains(&month) || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(LedgerError::InvalidPeriod { month, year });
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First calendar day of the period.
    pub fn start(&self) -> NaiveDate {
        // Month and year are bounded in the constructor.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated period")
    }

    /// Last calendar day of the period, leap years included.
    pub fn end(&self) -> NaiveDate {
        self.start() + chrono::Months::new(1) - chrono::Days::new(1)
    }

    /// Number of days in the month.
    pub fn last_day(&self) -> u32 {
        use chrono::Datelike;
        self.end().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }

    /// Display label, e.g. `Maret 2025`.
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}
