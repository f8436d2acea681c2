//! Transaction-related types for the bank ledger
//!
//! This module defines the transaction type, the per-day transaction identifier
//! and the recorded transaction itself, along with the parsers that turn raw
//! command tokens into those types.

use super::date::LedgerDate;
use super::error::LedgerError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits an amount may carry
pub const AMOUNT_SCALE: u32 = 2;

/// Transaction types supported by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Credit funds to an account
    ///
    /// The first transaction of every account must be a deposit.
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires a balance at least equal to the amount.
    Withdrawal,
}

impl TransactionType {
    /// Parse a transaction type token (`D` or `W`, case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransactionType` for any other token.
    pub fn parse(value: &str) -> Result<Self, LedgerError> {
        if value.eq_ignore_ascii_case("D") {
            Ok(TransactionType::Deposit)
        } else if value.eq_ignore_ascii_case("W") {
            Ok(TransactionType::Withdrawal)
        } else {
            Err(LedgerError::invalid_transaction_type(value))
        }
    }

    /// Single-letter code used in listings
    pub fn code(self) -> char {
        match self {
            TransactionType::Deposit => 'D',
            TransactionType::Withdrawal => 'W',
        }
    }

    /// Apply the sign of this transaction type to an amount
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Deposit => amount,
            TransactionType::Withdrawal => -amount,
        }
    }
}

fn all_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a plain decimal: optional sign, digits, optional `.` and digits
///
/// `Decimal::from_str` also takes underscores and exponents (`1_000`, `1e2`),
/// which are rejected here.
pub(crate) fn parse_plain_decimal(value: &str) -> Option<Decimal> {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let well_formed = match unsigned.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(unsigned),
    };
    if !well_formed {
        return None;
    }
    Decimal::from_str(value).ok()
}

/// Parse a transaction amount
///
/// The amount must be a plain decimal, be strictly positive, and be unchanged
/// by rounding to two decimal places. Trailing zeros beyond the second place
/// are therefore accepted (`10.500` is `10.50`).
///
/// # Errors
///
/// Returns `InvalidAmount` when any of those conditions fails.
pub fn parse_amount(value: &str) -> Result<Decimal, LedgerError> {
    let amount = parse_plain_decimal(value).ok_or_else(|| LedgerError::invalid_amount(value))?;

    let rounded = amount.round_dp(AMOUNT_SCALE);
    if amount <= Decimal::ZERO || rounded != amount {
        return Err(LedgerError::invalid_amount(value));
    }

    Ok(rounded)
}

/// Transaction identifier of the form `<date>-<NN>`
///
/// `sequence` is the 1-based position of the transaction among the account's
/// transactions on the same date. Sequences of 100 or more print with three
/// digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId {
    pub date: LedgerDate,
    pub sequence: u32,
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.date, self.sequence)
    }
}

/// A recorded transaction
///
/// Transactions are immutable once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Identifier assigned on recording
    pub id: TransactionId,

    /// The date the transaction was booked on
    pub date: LedgerDate,

    /// Owning account
    pub account: String,

    /// Deposit or withdrawal
    pub tx_type: TransactionType,

    /// Positive amount with at most two decimal places
    pub amount: Decimal,
}

impl Transaction {
    /// The amount with the sign of the transaction type applied
    pub fn signed_amount(&self) -> Decimal {
        self.tx_type.signed(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::upper_deposit("D", TransactionType::Deposit)]
    #[case::lower_deposit("d", TransactionType::Deposit)]
    #[case::upper_withdrawal("W", TransactionType::Withdrawal)]
    #[case::lower_withdrawal("w", TransactionType::Withdrawal)]
    fn test_parse_transaction_type(#[case] value: &str, #[case] expected: TransactionType) {
        assert_eq!(TransactionType::parse(value), Ok(expected));
    }

    #[rstest]
    #[case::unknown_letter("X")]
    #[case::word("deposit")]
    #[case::empty("")]
    #[case::doubled("DD")]
    fn test_parse_invalid_transaction_type(#[case] value: &str) {
        assert_eq!(
            TransactionType::parse(value),
            Err(LedgerError::invalid_transaction_type(value))
        );
    }

    #[rstest]
    #[case::integer("100", Decimal::new(100, 0))]
    #[case::two_places("100.25", Decimal::new(10025, 2))]
    #[case::one_place("0.5", Decimal::new(5, 1))]
    #[case::smallest("0.01", Decimal::new(1, 2))]
    #[case::trailing_zero("10.500", Decimal::new(1050, 2))]
    #[case::explicit_plus("+5", Decimal::new(5, 0))]
    fn test_parse_valid_amount(#[case] value: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(value), Ok(expected));
    }

    #[rstest]
    #[case::zero("0")]
    #[case::zero_fraction("0.00")]
    #[case::negative("-5")]
    #[case::three_places("1.005")]
    #[case::not_a_number("abc")]
    #[case::empty("")]
    #[case::underscore("1_000")]
    #[case::exponent("1e2")]
    #[case::thousands_separator("1,000")]
    #[case::bare_fraction(".5")]
    #[case::trailing_point("5.")]
    #[case::sign_only("+")]
    fn test_parse_invalid_amount(#[case] value: &str) {
        assert_eq!(parse_amount(value), Err(LedgerError::invalid_amount(value)));
    }

    #[rstest]
    #[case::first(1, "20230626-01")]
    #[case::tenth(10, "20230626-10")]
    #[case::overflows_width(100, "20230626-100")]
    fn test_transaction_id_display(#[case] sequence: u32, #[case] expected: &str) {
        let id = TransactionId {
            date: LedgerDate::parse("20230626").unwrap(),
            sequence,
        };
        assert_eq!(id.to_string(), expected);
    }

    #[test]
    fn test_signed_amount() {
        let amount = Decimal::new(2500, 2);
        assert_eq!(TransactionType::Deposit.signed(amount), amount);
        assert_eq!(TransactionType::Withdrawal.signed(amount), -amount);
    }
}
