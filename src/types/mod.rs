//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `date`: Fixed-width `YYYYMMDD` and `YYYYMM` values
//! - `transaction`: Transaction types, identifiers and amount parsing
//! - `interest`: Interest rules and rate parsing
//! - `statement`: Derived statement views
//! - `error`: Error types for the ledger and the shell

pub mod date;
pub mod error;
pub mod interest;
pub mod statement;
pub mod transaction;

pub use date::{LedgerDate, YearMonth};
pub use error::{LedgerError, ShellError};
pub use interest::{parse_rate, InterestRule};
pub use statement::{InterestAccrual, InterestStatement, MonthlyStatement, StatementLine};
pub use transaction::{parse_amount, Transaction, TransactionId, TransactionType};
