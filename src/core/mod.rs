//! Core business logic module
//!
//! This module contains the ledger components:
//! - `transaction_store` - Per-account transaction history, validation and IDs
//! - `interest_rule_store` - Date-ordered interest rule timeline
//! - `statement_engine` - Monthly statements and interest accrual
//! - `ledger` - Facade owning both stores
//! - `shared` - Mutex-guarded ledger handle for multi-caller use

pub mod interest_rule_store;
pub mod ledger;
pub mod shared;
pub mod statement_engine;
pub mod transaction_store;

pub use interest_rule_store::InterestRuleStore;
pub use ledger::Ledger;
pub use shared::SharedLedger;
pub use statement_engine::StatementEngine;
pub use transaction_store::TransactionStore;
