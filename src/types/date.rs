//! Fixed-width date types
//!
//! Ledger dates are `YYYYMMDD` strings and statement periods are `YYYYMM`
//! strings. Both are validated only for shape (exact length, ASCII digits): a
//! transaction dated `20239999` is accepted. Because the strings are fixed-width,
//! lexicographic order is chronological order and the types derive `Ord` on the
//! underlying string.

use super::error::LedgerError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

const DATE_LEN: usize = 8;
const YEAR_MONTH_LEN: usize = 6;

fn is_fixed_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// A `YYYYMMDD` date as recorded on transactions and interest rules
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerDate(String);

impl LedgerDate {
    /// Parse an 8-digit date
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateFormat` unless `value` is exactly 8 ASCII digits.
    pub fn parse(value: &str) -> Result<Self, LedgerError> {
        if is_fixed_digits(value, DATE_LEN) {
            Ok(LedgerDate(value.to_string()))
        } else {
            Err(LedgerError::invalid_date_format(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this date falls inside the given statement month (prefix match)
    pub fn is_in(&self, year_month: &YearMonth) -> bool {
        self.0.starts_with(year_month.as_str())
    }
}

impl fmt::Display for LedgerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `YYYYMM` statement period
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(String);

impl YearMonth {
    /// Parse a 6-digit year-month
    ///
    /// # Errors
    ///
    /// Returns `InvalidYearMonth` unless `value` is exactly 6 ASCII digits.
    pub fn parse(value: &str) -> Result<Self, LedgerError> {
        if is_fixed_digits(value, YEAR_MONTH_LEN) {
            Ok(YearMonth(value.to_string()))
        } else {
            Err(LedgerError::invalid_year_month(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First day of the month as a ledger date (`YYYYMM01`)
    pub fn first_day(&self) -> LedgerDate {
        LedgerDate(format!("{}01", self.0))
    }

    /// Every calendar day of the month, in order
    ///
    /// # Errors
    ///
    /// Returns `InvalidCalendarMonth` when the month digits are not 01-12.
    pub fn calendar_days(&self) -> Result<Vec<LedgerDate>, LedgerError> {
        let invalid = || LedgerError::invalid_calendar_month(&self.0);

        // Both slices are ASCII digits by construction
        let year: i32 = self.0[..4].parse().map_err(|_| invalid())?;
        let month: u32 = self.0[4..].parse().map_err(|_| invalid())?;
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

        Ok(first
            .iter_days()
            .take_while(|day| day.month() == month)
            .map(|day| LedgerDate(day.format("%Y%m%d").to_string()))
            .collect())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
