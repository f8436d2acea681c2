//! Monthly statement generation
//!
//! This module provides the StatementEngine, a read-only view over the
//! transaction store and the interest rule timeline.
//!
//! Two statements are available:
//! - [`StatementEngine::monthly_statement`] lists the month's transactions in
//!   recording order with a running balance that starts at zero for the month.
//!   It does not read the interest rules.
//! - [`StatementEngine::monthly_statement_with_interest`] seeds the running
//!   balance with the balance carried into the month and adds the interest
//!   accrued day by day under the rule in force on each day.

use crate::core::interest_rule_store::InterestRuleStore;
use crate::core::transaction_store::TransactionStore;
use crate::types::{
    InterestAccrual, InterestStatement, LedgerError, MonthlyStatement, StatementLine,
    Transaction, YearMonth,
};
use rust_decimal::{Decimal, RoundingStrategy};

/// Day-count basis for the annual rate
const DAYS_PER_YEAR: i64 = 365;

/// Rates are stored in percent
const PERCENT: i64 = 100;

/// Read-only statement builder over the ledger stores
pub struct StatementEngine<'a> {
    transactions: &'a TransactionStore,
    rules: &'a InterestRuleStore,
}

impl<'a> StatementEngine<'a> {
    pub fn new(transactions: &'a TransactionStore, rules: &'a InterestRuleStore) -> Self {
        StatementEngine {
            transactions,
            rules,
        }
    }

    /// Statement of an account's transactions in a month
    ///
    /// Selects the transactions whose date starts with `year_month`, in
    /// recording order. The running balance covers the selected transactions
    /// only; it is not seeded from earlier months.
    ///
    /// # Returns
    ///
    /// * `Ok(MonthlyStatement::UnknownAccount)` - No transactions for the account
    /// * `Ok(MonthlyStatement::NoActivity)` - Nothing dated in the month
    /// * `Ok(MonthlyStatement::Lines(..))` - The month's transactions
    /// * `Err(LedgerError)` - `year_month` is not 6 digits, or balance overflow
    pub fn monthly_statement(
        &self,
        account: &str,
        year_month: &str,
    ) -> Result<MonthlyStatement, LedgerError> {
        let month = YearMonth::parse(year_month)?;

        let Some(history) = self.transactions.list(account) else {
            return Ok(MonthlyStatement::UnknownAccount);
        };

        let lines = running_lines(
            account,
            history.iter().filter(|tx| tx.date.is_in(&month)),
            Decimal::ZERO,
        )?;

        if lines.is_empty() {
            Ok(MonthlyStatement::NoActivity)
        } else {
            Ok(MonthlyStatement::Lines(lines))
        }
    }

    /// Statement of a month with daily interest accrual
    ///
    /// Interest for each calendar day is the end-of-day balance times the rate
    /// of the latest rule dated on or before that day. End-of-day balances are
    /// taken in date order across the account's whole history, and days with no
    /// rule in force or a balance at or below zero accrue nothing. Each day's
    /// interest is divided by 365 before it is added, and the sum is rounded
    /// half away from zero to two decimal places.
    /// The interest is reported on the last day of the month and is not
    /// recorded in the transaction store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `year_month` is not 6 digits (`InvalidYearMonth`)
    /// - `year_month` is not a calendar month (`InvalidCalendarMonth`)
    /// - Balance arithmetic overflows (`BalanceOverflow`)
    pub fn monthly_statement_with_interest(
        &self,
        account: &str,
        year_month: &str,
    ) -> Result<InterestStatement, LedgerError> {
        let month = YearMonth::parse(year_month)?;
        let days = month.calendar_days()?;

        let Some(history) = self.transactions.list(account) else {
            return Ok(InterestStatement::UnknownAccount);
        };

        let first_day = month.first_day();
        let opening_balance = history
            .iter()
            .filter(|tx| tx.date < first_day)
            .try_fold(Decimal::ZERO, |acc, tx| {
                acc.checked_add(tx.signed_amount())
                    .ok_or_else(|| LedgerError::balance_overflow(account))
            })?;

        let lines = running_lines(
            account,
            history.iter().filter(|tx| tx.date.is_in(&month)),
            opening_balance,
        )?;
        let closing_balance = lines.last().map_or(opening_balance, |line| line.balance);

        // End-of-day balances follow booking dates, not recording order
        let mut dated: Vec<&Transaction> = history.iter().collect();
        dated.sort_by(|a, b| a.date.cmp(&b.date));
        let mut pending = dated.into_iter().peekable();

        let day_count_divisor = Decimal::from(DAYS_PER_YEAR * PERCENT);
        let mut end_of_day = Decimal::ZERO;
        let mut accrued = Decimal::ZERO;
        for day in &days {
            while let Some(tx) = pending.next_if(|tx| &tx.date <= day) {
                end_of_day = end_of_day
                    .checked_add(tx.signed_amount())
                    .ok_or_else(|| LedgerError::balance_overflow(account))?;
            }

            if end_of_day <= Decimal::ZERO {
                continue;
            }
            if let Some(rule) = self.rules.effective_rule(day) {
                // Each day's share stays within a fraction of the balance
                accrued = (end_of_day / day_count_divisor)
                    .checked_mul(rule.rate)
                    .and_then(|daily| accrued.checked_add(daily))
                    .ok_or_else(|| LedgerError::balance_overflow(account))?;
            }
        }

        let amount = accrued.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let balance = closing_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::balance_overflow(account))?;
        let date = days
            .last()
            .cloned()
            .ok_or_else(|| LedgerError::invalid_calendar_month(year_month))?;

        Ok(InterestStatement::Statement {
            opening_balance,
            lines,
            interest: InterestAccrual {
                date,
                amount,
                balance,
            },
        })
    }
}

/// Attach a running balance, starting from `opening`, to each transaction
fn running_lines<'t>(
    account: &str,
    transactions: impl Iterator<Item = &'t Transaction>,
    opening: Decimal,
) -> Result<Vec<StatementLine>, LedgerError> {
    let mut balance = opening;
    transactions
        .map(|tx| {
            balance = balance
                .checked_add(tx.signed_amount())
                .ok_or_else(|| LedgerError::balance_overflow(account))?;
            Ok(StatementLine {
                transaction: tx.clone(),
                balance,
            })
        })
        .collect()
}
