//! Console input parsing
//!
//! Splits input lines into the fixed-arity command tuples the ledger accepts.
//! Field contents are not validated here; that is the ledger's job.

use crate::types::ShellError;

/// Main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Transactions,
    InterestRules,
    Statement,
    Quit,
    Invalid,
}

impl MenuChoice {
    /// Parse a menu line; surrounding whitespace and case are ignored
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_uppercase().as_str() {
            "T" => MenuChoice::Transactions,
            "I" => MenuChoice::InterestRules,
            "P" => MenuChoice::Statement,
            "Q" => MenuChoice::Quit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Split a line into exactly `N` whitespace-separated fields
fn fields<const N: usize>(line: &str) -> Result<[&str; N], ShellError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    <[&str; N]>::try_from(parts).map_err(|_| ShellError::MalformedInput)
}

/// `<Date> <Account> <Type> <Amount>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionCommand<'a> {
    pub date: &'a str,
    pub account: &'a str,
    pub tx_type: &'a str,
    pub amount: &'a str,
}

impl<'a> TransactionCommand<'a> {
    pub fn parse(line: &'a str) -> Result<Self, ShellError> {
        let [date, account, tx_type, amount] = fields::<4>(line)?;
        Ok(TransactionCommand {
            date,
            account,
            tx_type,
            amount,
        })
    }
}

/// `<Date> <RuleId> <Rate in %>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestRuleCommand<'a> {
    pub date: &'a str,
    pub rule_id: &'a str,
    pub rate: &'a str,
}

impl<'a> InterestRuleCommand<'a> {
    pub fn parse(line: &'a str) -> Result<Self, ShellError> {
        let [date, rule_id, rate] = fields::<3>(line)?;
        Ok(InterestRuleCommand {
            date,
            rule_id,
            rate,
        })
    }
}

/// `<Account> <Year><Month>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementQuery<'a> {
    pub account: &'a str,
    pub year_month: &'a str,
}

impl<'a> StatementQuery<'a> {
    pub fn parse(line: &'a str) -> Result<Self, ShellError> {
        let [account, year_month] = fields::<2>(line)?;
        Ok(StatementQuery {
            account,
            year_month,
        })
    }
}
