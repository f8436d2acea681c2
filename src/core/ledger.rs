//! Ledger facade
//!
//! This module provides the Ledger that owns the transaction store and the
//! interest rule timeline and exposes the operations callers use. Each store
//! validates its own input; the ledger adds logging of accepted mutations and
//! builds statement engines over both stores.

use crate::core::interest_rule_store::InterestRuleStore;
use crate::core::statement_engine::StatementEngine;
use crate::core::transaction_store::TransactionStore;
use crate::types::{
    InterestRule, InterestStatement, LedgerError, MonthlyStatement, Transaction,
};
use rust_decimal::Decimal;
use tracing::debug;

/// In-memory single-session ledger
#[derive(Debug, Default)]
pub struct Ledger {
    transaction_store: TransactionStore,
    interest_rules: InterestRuleStore,
}

impl Ledger {
    /// Create an empty ledger with no accounts and no interest rules
    pub fn new() -> Self {
        Ledger {
            transaction_store: TransactionStore::new(),
            interest_rules: InterestRuleStore::new(),
        }
    }

    /// Record a deposit or withdrawal
    ///
    /// See [`TransactionStore::add`] for the validation rules.
    pub fn record_transaction(
        &mut self,
        date: &str,
        account: &str,
        tx_type: &str,
        amount: &str,
    ) -> Result<Transaction, LedgerError> {
        let transaction = self.transaction_store.add(date, account, tx_type, amount)?;
        debug!(
            account,
            id = %transaction.id,
            amount = %transaction.amount,
            "transaction recorded"
        );
        Ok(transaction)
    }

    /// Define an interest rule, replacing any rule on the same date
    pub fn define_interest_rule(
        &mut self,
        date: &str,
        rule_id: &str,
        rate: &str,
    ) -> Result<InterestRule, LedgerError> {
        let rule = self.interest_rules.add(date, rule_id, rate)?;
        debug!(date = %rule.date, rule_id, rate = %rule.rate, "interest rule defined");
        Ok(rule)
    }

    pub fn balance(&self, account: &str) -> Decimal {
        self.transaction_store.balance(account)
    }

    /// Transactions of an account in recording order, `None` if unknown
    pub fn transactions(&self, account: &str) -> Option<&[Transaction]> {
        self.transaction_store.list(account)
    }

    /// Interest rules ascending by date, `None` if none are defined
    pub fn interest_rules(&self) -> Option<&[InterestRule]> {
        self.interest_rules.list()
    }

    pub fn statement_engine(&self) -> StatementEngine<'_> {
        StatementEngine::new(&self.transaction_store, &self.interest_rules)
    }

    /// Monthly statement without interest; see [`StatementEngine::monthly_statement`]
    pub fn monthly_statement(
        &self,
        account: &str,
        year_month: &str,
    ) -> Result<MonthlyStatement, LedgerError> {
        self.statement_engine().monthly_statement(account, year_month)
    }

    /// Monthly statement with daily interest accrual; see
    /// [`StatementEngine::monthly_statement_with_interest`]
    pub fn monthly_statement_with_interest(
        &self,
        account: &str,
        year_month: &str,
    ) -> Result<InterestStatement, LedgerError> {
        self.statement_engine()
            .monthly_statement_with_interest(account, year_month)
    }
}
