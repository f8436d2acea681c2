//! Error types for the bank ledger
//!
//! This module defines the errors returned by the ledger core and by the console
//! shell that drives it.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: rejected input (malformed dates, bad amounts, withdrawals
//!   that would overdraw an account, out-of-range interest rates). None of these are
//!   fatal; the requested mutation is simply not applied.
//! - **Shell Errors**: I/O failures and input lines with the wrong shape.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for every ledger operation
///
/// Each variant carries the offending value so the caller can render a precise
/// message. A ledger operation that returns an error has not changed any state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Date is not exactly 8 ASCII digits
    #[error("Date '{date}' must be in YYYYMMdd format")]
    InvalidDateFormat {
        /// The rejected date string
        date: String,
    },

    /// Transaction type is neither D nor W
    #[error("Transaction type '{tx_type}' must be D (deposit) or W (withdrawal)")]
    InvalidTransactionType {
        /// The rejected type string
        tx_type: String,
    },

    /// Amount is unparsable, not positive, or has more than two decimal places
    #[error("Amount '{amount}' must be greater than zero with up to two decimal places")]
    InvalidAmount {
        /// The rejected amount string
        amount: String,
    },

    /// The first transaction of an account was a withdrawal
    #[error("The first transaction for account {account} cannot be a withdrawal")]
    FirstTransactionCannotBeWithdrawal {
        /// Account identifier
        account: String,
    },

    /// Withdrawal amount exceeds the current balance
    #[error("Insufficient balance for account {account}: balance {balance:.2}, requested {requested:.2}")]
    InsufficientBalance {
        /// Account identifier
        account: String,
        /// Balance at validation time
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Interest rate is unparsable or outside the open interval (0, 100)
    #[error("Interest rate '{rate}' must be greater than 0 and less than 100")]
    InvalidInterestRate {
        /// The rejected rate string
        rate: String,
    },

    /// Statement month is not exactly 6 ASCII digits
    #[error("Year-month '{year_month}' must be in YYYYMM format")]
    InvalidYearMonth {
        /// The rejected year-month string
        year_month: String,
    },

    /// Statement month is well-formed but is not a calendar month
    ///
    /// Only interest accrual needs real calendar days; the plain statement
    /// accepts any 6-digit prefix.
    #[error("Year-month '{year_month}' is not a valid calendar month")]
    InvalidCalendarMonth {
        /// The rejected year-month string
        year_month: String,
    },

    /// Balance arithmetic would leave the representable decimal range
    #[error("Balance overflow for account {account}")]
    BalanceOverflow {
        /// Account identifier
        account: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidDateFormat error
    pub fn invalid_date_format(date: &str) -> Self {
        LedgerError::InvalidDateFormat {
            date: date.to_string(),
        }
    }

    /// Create an InvalidTransactionType error
    pub fn invalid_transaction_type(tx_type: &str) -> Self {
        LedgerError::InvalidTransactionType {
            tx_type: tx_type.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create a FirstTransactionCannotBeWithdrawal error
    pub fn first_transaction_cannot_be_withdrawal(account: &str) -> Self {
        LedgerError::FirstTransactionCannotBeWithdrawal {
            account: account.to_string(),
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(account: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientBalance {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an InvalidInterestRate error
    pub fn invalid_interest_rate(rate: &str) -> Self {
        LedgerError::InvalidInterestRate {
            rate: rate.to_string(),
        }
    }

    /// Create an InvalidYearMonth error
    pub fn invalid_year_month(year_month: &str) -> Self {
        LedgerError::InvalidYearMonth {
            year_month: year_month.to_string(),
        }
    }

    /// Create an InvalidCalendarMonth error
    pub fn invalid_calendar_month(year_month: &str) -> Self {
        LedgerError::InvalidCalendarMonth {
            year_month: year_month.to_string(),
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(account: &str) -> Self {
        LedgerError::BalanceOverflow {
            account: account.to_string(),
        }
    }
}

/// Error type for the console shell
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input line does not have the expected number of fields
    #[error("Invalid input. Please follow the specified format.")]
    MalformedInput,

    /// Script file given on the command line could not be opened
    #[error("Script file not found: {path}")]
    ScriptNotFound {
        /// The path that could not be opened
        path: String,
    },
}
