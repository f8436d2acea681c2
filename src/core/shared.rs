//! Thread-safe ledger handle
//!
//! `SharedLedger` wraps a [`Ledger`] in a single `Mutex` so that it can be
//! handed to several callers. Every operation holds the lock for its whole
//! validate-then-mutate sequence: a withdrawal's balance check and its append
//! can never interleave with another writer on the same ledger.
//!
//! Query results are returned as owned values because borrowed slices cannot
//! outlive the lock guard.

use crate::core::ledger::Ledger;
use crate::types::{
    InterestRule, InterestStatement, LedgerError, MonthlyStatement, Transaction,
};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-protected handle to one ledger
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    pub fn from_ledger(ledger: Ledger) -> Self {
        SharedLedger {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // Ledger operations never panic while holding the lock, so a poisoned
    // mutex still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record_transaction(
        &self,
        date: &str,
        account: &str,
        tx_type: &str,
        amount: &str,
    ) -> Result<Transaction, LedgerError> {
        self.lock().record_transaction(date, account, tx_type, amount)
    }

    pub fn define_interest_rule(
        &self,
        date: &str,
        rule_id: &str,
        rate: &str,
    ) -> Result<InterestRule, LedgerError> {
        self.lock().define_interest_rule(date, rule_id, rate)
    }

    pub fn balance(&self, account: &str) -> Decimal {
        self.lock().balance(account)
    }

    pub fn transactions(&self, account: &str) -> Option<Vec<Transaction>> {
        self.lock().transactions(account).map(<[Transaction]>::to_vec)
    }

    pub fn interest_rules(&self) -> Option<Vec<InterestRule>> {
        self.lock().interest_rules().map(<[InterestRule]>::to_vec)
    }

    pub fn monthly_statement(
        &self,
        account: &str,
        year_month: &str,
    ) -> Result<MonthlyStatement, LedgerError> {
        self.lock().monthly_statement(account, year_month)
    }

    pub fn monthly_statement_with_interest(
        &self,
        account: &str,
        year_month: &str,
    ) -> Result<InterestStatement, LedgerError> {
        self.lock()
            .monthly_statement_with_interest(account, year_month)
    }
}
