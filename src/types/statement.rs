//! Statement types
//!
//! Statements are derived views computed on request from the transaction store.
//! They own their data and are never stored back into the ledger.

use super::date::LedgerDate;
use super::transaction::Transaction;
use rust_decimal::Decimal;

/// One statement row: a transaction and the running balance after it
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLine {
    pub transaction: Transaction,
    pub balance: Decimal,
}

/// Result of a plain monthly statement query
///
/// The three outcomes are rendered differently by callers, so an unknown
/// account and an idle month are not collapsed into an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum MonthlyStatement {
    /// The account has never recorded a transaction
    UnknownAccount,

    /// The account exists but has no transactions dated in the month
    NoActivity,

    /// Transactions of the month in recording order with running balances
    Lines(Vec<StatementLine>),
}

/// Interest accrued over a statement month
#[derive(Debug, Clone, PartialEq)]
pub struct InterestAccrual {
    /// Last calendar day of the month, where the interest is reported
    pub date: LedgerDate,

    /// Interest rounded to two decimal places
    pub amount: Decimal,

    /// Closing balance including the interest
    pub balance: Decimal,
}

/// Result of a monthly statement query with interest accrual
#[derive(Debug, Clone, PartialEq)]
pub enum InterestStatement {
    /// The account has never recorded a transaction
    UnknownAccount,

    /// Statement for an existing account
    ///
    /// `lines` may be empty: an idle month still accrues interest on the
    /// opening balance.
    Statement {
        opening_balance: Decimal,
        lines: Vec<StatementLine>,
        interest: InterestAccrual,
    },
}
