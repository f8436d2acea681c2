//! Bank Ledger Library
//! # Overview
//!
//! This library provides an in-memory, single-currency bank ledger with an
//! interest rule timeline and monthly statements, plus the console shell that
//! drives it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, InterestRule, statements, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::transaction_store`] - Per-account history, validation and ID assignment
//!   - [`core::interest_rule_store`] - Interest rules, one per date, sorted by date
//!   - [`core::statement_engine`] - Monthly statements and interest accrual
//!   - [`core::ledger`] - Facade over both stores
//!   - [`core::shared`] - Mutex-guarded ledger for multi-caller use
//! - [`shell`] - Interactive menu loop and table rendering
//! - [`logging`] - Tracing subscriber setup
//!
//! # Transaction Rules
//!
//! - Dates are `YYYYMMDD` strings of 8 digits; no calendar check is made
//! - Types are `D` (deposit) or `W` (withdrawal), case-insensitive
//! - Amounts are positive with at most two decimal places
//! - An account's first transaction cannot be a withdrawal, and a withdrawal
//!   cannot exceed the balance
//! - Transaction IDs are `<date>-<NN>`, numbering the account's transactions on
//!   that date from 01
//!
//! # Statements
//!
//! The default statement lists a month's transactions in recording order with a
//! running balance that starts at zero. The accrual statement carries the
//! balance into the month and reports daily interest under the rule timeline.

// Module declarations
pub mod cli;
pub mod core;
pub mod logging;
pub mod shell;
pub mod types;

pub use core::{InterestRuleStore, Ledger, SharedLedger, StatementEngine, TransactionStore};
pub use shell::{Session, SessionConfig};
pub use types::{
    InterestAccrual, InterestRule, InterestStatement, LedgerDate, LedgerError,
    MonthlyStatement, ShellError, StatementLine, Transaction, TransactionId, TransactionType,
    YearMonth,
};
