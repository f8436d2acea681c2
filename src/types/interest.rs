//! Interest rule types

use super::date::LedgerDate;
use super::error::LedgerError;
use super::transaction::parse_plain_decimal;
use rust_decimal::Decimal;

/// An interest rate rule effective from `date` onwards
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRule {
    /// First day the rule applies
    pub date: LedgerDate,

    /// Free-form label; not a uniqueness key
    pub rule_id: String,

    /// Percent per annum, strictly between 0 and 100
    pub rate: Decimal,
}

/// Parse an interest rate in percent per annum
///
/// # Errors
///
/// Returns `InvalidInterestRate` when the value is not a plain decimal or is not
/// strictly between 0 and 100.
pub fn parse_rate(value: &str) -> Result<Decimal, LedgerError> {
    let rate =
        parse_plain_decimal(value).ok_or_else(|| LedgerError::invalid_interest_rate(value))?;

    if rate <= Decimal::ZERO || rate >= Decimal::ONE_HUNDRED {
        return Err(LedgerError::invalid_interest_rate(value));
    }

    Ok(rate)
}
