//! Per-account transaction storage
//!
//! This module provides the TransactionStore component that owns every recorded
//! transaction. Each account maps to an append-only sequence kept in recording
//! order; the store never re-sorts by date.
//!
//! # Validation
//!
//! `add` validates its raw tokens in a fixed order and reports the first failure:
//! date format, transaction type, amount, first-transaction rule, balance. A
//! rejected transaction leaves the store untouched.
//!
//! # Balance Cache
//!
//! Every account carries its running balance, updated on append. The cached
//! value always equals the signed sum of the account's transactions.

use crate::types::{
    parse_amount, LedgerDate, LedgerError, Transaction, TransactionId, TransactionType,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Transactions of one account plus their cached balance
#[derive(Debug, Default)]
struct AccountHistory {
    transactions: Vec<Transaction>,
    balance: Decimal,
}

impl AccountHistory {
    fn next_sequence(&self, date: &LedgerDate) -> u32 {
        let same_day = self
            .transactions
            .iter()
            .filter(|tx| &tx.date == date)
            .count();
        same_day as u32 + 1
    }
}

/// Transaction store keyed by account identifier
///
/// An account exists exactly when it has at least one transaction.
#[derive(Debug, Default)]
pub struct TransactionStore {
    /// Map of account identifier to its transaction history
    accounts: HashMap<String, AccountHistory>,
}

impl TransactionStore {
    /// Create a new empty transaction store
    pub fn new() -> Self {
        TransactionStore {
            accounts: HashMap::new(),
        }
    }

    /// Validate and record a transaction
    ///
    /// # Arguments
    ///
    /// * `date` - `YYYYMMDD` date token
    /// * `account` - Account identifier (case-sensitive)
    /// * `tx_type` - `D` or `W`, case-insensitive
    /// * `amount` - Decimal amount token
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - The recorded transaction with its assigned ID
    /// * `Err(LedgerError)` - The first validation failure; nothing is recorded
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The date is not 8 digits (`InvalidDateFormat`)
    /// - The type is not D/W (`InvalidTransactionType`)
    /// - The amount is not positive with at most two decimals (`InvalidAmount`)
    /// - A withdrawal is the account's first transaction
    ///   (`FirstTransactionCannotBeWithdrawal`)
    /// - A withdrawal exceeds the balance (`InsufficientBalance`)
    /// - A deposit would overflow the balance (`BalanceOverflow`)
    pub fn add(
        &mut self,
        date: &str,
        account: &str,
        tx_type: &str,
        amount: &str,
    ) -> Result<Transaction, LedgerError> {
        let date = LedgerDate::parse(date)?;
        let tx_type = TransactionType::parse(tx_type)?;
        let amount = parse_amount(amount)?;

        let history = self.accounts.get(account);
        let balance = history.map_or(Decimal::ZERO, |h| h.balance);

        if tx_type == TransactionType::Withdrawal {
            if history.map_or(true, |h| h.transactions.is_empty()) {
                return Err(LedgerError::first_transaction_cannot_be_withdrawal(
                    account,
                ));
            }
            if balance < amount {
                return Err(LedgerError::insufficient_balance(account, balance, amount));
            }
        }

        let new_balance = balance
            .checked_add(tx_type.signed(amount))
            .ok_or_else(|| LedgerError::balance_overflow(account))?;

        // Validation passed; only now create the account entry
        let history = self.accounts.entry(account.to_string()).or_default();
        let transaction = Transaction {
            id: TransactionId {
                date: date.clone(),
                sequence: history.next_sequence(&date),
            },
            date,
            account: account.to_string(),
            tx_type,
            amount,
        };

        history.transactions.push(transaction.clone());
        history.balance = new_balance;

        Ok(transaction)
    }

    /// Current balance of an account
    ///
    /// Unknown accounts have a balance of zero.
    pub fn balance(&self, account: &str) -> Decimal {
        self.accounts
            .get(account)
            .map_or(Decimal::ZERO, |history| history.balance)
    }

    /// Transactions of an account in recording order
    ///
    /// # Returns
    ///
    /// * `Some(&[Transaction])` - Non-empty history of a known account
    /// * `None` - The account has no transactions
    pub fn list(&self, account: &str) -> Option<&[Transaction]> {
        self.accounts
            .get(account)
            .map(|history| history.transactions.as_slice())
            .filter(|transactions| !transactions.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn recomputed_balance(store: &TransactionStore, account: &str) -> Decimal {
        store
            .list(account)
            .unwrap_or_default()
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    #[test]
    fn test_same_day_deposits_get_consecutive_ids() {
        let mut store = TransactionStore::new();

        let first = store.add("20230505", "A1", "D", "100.00").unwrap();
        let second = store.add("20230505", "A1", "D", "50.00").unwrap();

        assert_eq!(first.id.to_string(), "20230505-01");
        assert_eq!(second.id.to_string(), "20230505-02");
        assert_eq!(store.balance("A1"), dec("150.00"));
    }

    #[test]
    fn test_sequence_counts_per_date_and_account() {
        let mut store = TransactionStore::new();

        store.add("20230505", "A1", "D", "10").unwrap();
        store.add("20230506", "A1", "D", "10").unwrap();
        store.add("20230505", "A2", "D", "10").unwrap();
        let tx = store.add("20230505", "A1", "W", "5").unwrap();

        assert_eq!(tx.id.to_string(), "20230505-02");
        let other = store.list("A2").unwrap();
        assert_eq!(other[0].id.to_string(), "20230505-01");
    }

    #[test]
    fn test_sequence_counts_out_of_order_dates() {
        let mut store = TransactionStore::new();

        store.add("20230510", "A1", "D", "10").unwrap();
        store.add("20230501", "A1", "D", "10").unwrap();
        let tx = store.add("20230510", "A1", "D", "10").unwrap();

        assert_eq!(tx.id.to_string(), "20230510-02");
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut store = TransactionStore::new();

        store.add("20230620", "A1", "D", "10").unwrap();
        store.add("20230601", "A1", "D", "20").unwrap();
        store.add("20230615", "A1", "W", "5").unwrap();

        let dates: Vec<&str> = store
            .list("A1")
            .unwrap()
            .iter()
            .map(|tx| tx.date.as_str())
            .collect();
        assert_eq!(dates, vec!["20230620", "20230601", "20230615"]);
    }

    #[test]
    fn test_first_transaction_cannot_be_withdrawal() {
        let mut store = TransactionStore::new();

        let result = store.add("20230505", "A1", "W", "200.00");

        assert_eq!(
            result,
            Err(LedgerError::first_transaction_cannot_be_withdrawal("A1"))
        );
        assert!(store.list("A1").is_none());
    }

    #[rstest]
    #[case::tiny("0.01")]
    #[case::large("1000000")]
    fn test_first_withdrawal_rejected_regardless_of_amount(#[case] amount: &str) {
        let mut store = TransactionStore::new();
        assert!(matches!(
            store.add("20230505", "A1", "w", amount),
            Err(LedgerError::FirstTransactionCannotBeWithdrawal { .. })
        ));
    }

    #[rstest]
    #[case::exact_balance("100.00", true)]
    #[case::below_balance("99.99", true)]
    #[case::above_balance("100.01", false)]
    fn test_withdrawal_against_balance(#[case] amount: &str, #[case] accepted: bool) {
        let mut store = TransactionStore::new();
        store.add("20230505", "A1", "D", "100.00").unwrap();

        let result = store.add("20230506", "A1", "W", amount);

        if accepted {
            assert!(result.is_ok());
            assert_eq!(store.balance("A1"), dec("100.00") - dec(amount));
        } else {
            assert_eq!(
                result,
                Err(LedgerError::insufficient_balance(
                    "A1",
                    dec("100.00"),
                    dec(amount)
                ))
            );
            assert_eq!(store.balance("A1"), dec("100.00"));
            assert_eq!(store.list("A1").unwrap().len(), 1);
        }
    }

    #[test]
    fn test_withdrawal_after_account_drained_reports_insufficient_balance() {
        let mut store = TransactionStore::new();
        store.add("20230505", "A1", "D", "50").unwrap();
        store.add("20230506", "A1", "W", "50").unwrap();

        assert!(matches!(
            store.add("20230507", "A1", "W", "1"),
            Err(LedgerError::InsufficientBalance { .. })
        ));
    }

    // Earlier checks win when several fields are invalid
    #[rstest]
    #[case::date_first("2023", "X", "-1", LedgerError::invalid_date_format("2023"))]
    #[case::type_second("20230505", "X", "-1", LedgerError::invalid_transaction_type("X"))]
    #[case::amount_third("20230505", "W", "-1", LedgerError::invalid_amount("-1"))]
    #[case::first_withdrawal_fourth(
        "20230505",
        "W",
        "1",
        LedgerError::first_transaction_cannot_be_withdrawal("A1")
    )]
    fn test_validation_order(
        #[case] date: &str,
        #[case] tx_type: &str,
        #[case] amount: &str,
        #[case] expected: LedgerError,
    ) {
        let mut store = TransactionStore::new();
        assert_eq!(store.add(date, "A1", tx_type, amount), Err(expected));
        assert!(store.list("A1").is_none());
    }

    #[test]
    fn test_rejected_transaction_leaves_store_unchanged() {
        let mut store = TransactionStore::new();
        store.add("20230505", "A1", "D", "10").unwrap();

        assert!(store.add("20230505", "A1", "D", "1.234").is_err());
        assert!(store.add("20230505", "A1", "W", "11").is_err());

        let tx = store.add("20230505", "A1", "D", "1").unwrap();
        assert_eq!(tx.id.to_string(), "20230505-02");
        assert_eq!(store.list("A1").unwrap().len(), 2);
    }

    #[test]
    fn test_accounts_are_case_sensitive() {
        let mut store = TransactionStore::new();
        store.add("20230505", "ac001", "D", "10").unwrap();

        assert_eq!(store.balance("AC001"), Decimal::ZERO);
        assert!(matches!(
            store.add("20230505", "AC001", "W", "5"),
            Err(LedgerError::FirstTransactionCannotBeWithdrawal { .. })
        ));
    }

    #[test]
    fn test_unknown_account() {
        let store = TransactionStore::new();
        assert_eq!(store.balance("nobody"), Decimal::ZERO);
        assert!(store.list("nobody").is_none());
    }

    #[test]
    fn test_deposit_sum_is_exact() {
        let mut store = TransactionStore::new();
        for _ in 0..10 {
            store.add("20230505", "A1", "D", "0.10").unwrap();
        }
        store.add("20230505", "A1", "D", "0.20").unwrap();

        assert_eq!(store.balance("A1"), dec("1.20"));
    }

    #[test]
    fn test_cached_balance_matches_recomputed_sum() {
        let mut store = TransactionStore::new();
        let operations = [
            ("D", "100.55"),
            ("W", "20.10"),
            ("D", "0.05"),
            ("W", "500"),
            ("W", "80.50"),
            ("D", "3"),
        ];

        for (tx_type, amount) in operations {
            let _ = store.add("20230601", "A1", tx_type, amount);
            assert_eq!(store.balance("A1"), recomputed_balance(&store, "A1"));
        }
        assert_eq!(store.balance("A1"), dec("3.00"));
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let mut store = TransactionStore::new();
        let max = Decimal::MAX.round_dp(0).to_string();
        store.add("20230505", "A1", "D", &max).unwrap();

        assert_eq!(
            store.add("20230505", "A1", "D", &max),
            Err(LedgerError::balance_overflow("A1"))
        );
        assert_eq!(store.list("A1").unwrap().len(), 1);
    }

    #[test]
    fn test_type_is_normalized() {
        let mut store = TransactionStore::new();
        let tx = store.add("20230505", "A1", "d", "10").unwrap();
        assert_eq!(tx.tx_type, TransactionType::Deposit);
        assert_eq!(tx.tx_type.code(), 'D');
    }
}
