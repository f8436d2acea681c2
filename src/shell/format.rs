//! Console table rendering
//!
//! All functions write to a caller-supplied writer and perform no other I/O,
//! which keeps them easy to test against in-memory buffers.

use crate::types::{InterestAccrual, InterestRule, StatementLine, Transaction};
use rust_decimal::Decimal;
use std::io::{self, Write};

const TRANSACTION_HEADER: &str = "| Date     | Txn Id      | Type | Amount   |";
const STATEMENT_HEADER: &str = "| Date     | Txn Id      | Type | Amount   | Balance  |";
const RULE_HEADER: &str = "| Date     | RuleId | Rate (%) |";

/// Synthetic type code for accrued interest rows
const INTEREST_CODE: char = 'I';

fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Write an account's transaction table
pub fn write_transactions(
    account: &str,
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> io::Result<()> {
    writeln!(output, "Account: {}", account)?;
    writeln!(output, "{}", TRANSACTION_HEADER)?;
    for tx in transactions {
        writeln!(
            output,
            "| {} | {:<11} | {:<4} | {:>8} |",
            tx.date,
            tx.id.to_string(),
            tx.tx_type.code(),
            money(tx.amount)
        )?;
    }
    Ok(())
}

/// Write the interest rule table, or a notice when no rule is defined
pub fn write_interest_rules(
    rules: Option<&[InterestRule]>,
    output: &mut dyn Write,
) -> io::Result<()> {
    let Some(rules) = rules else {
        return writeln!(output, "No interest rules defined.");
    };

    writeln!(output, "Interest rules:")?;
    writeln!(output, "{}", RULE_HEADER)?;
    for rule in rules {
        writeln!(
            output,
            "| {} | {:<6} | {:>8} |",
            rule.date,
            rule.rule_id,
            money(rule.rate)
        )?;
    }
    Ok(())
}

/// Notice for an account without transactions
pub fn write_unknown_account(account: &str, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "No transactions found for account {}.", account)
}

/// Notice for an account without transactions in the requested month
pub fn write_no_activity(
    account: &str,
    year_month: &str,
    output: &mut dyn Write,
) -> io::Result<()> {
    writeln!(output, "No transactions for {} in {}.", account, year_month)
}

/// Write a statement table, optionally closed by an accrued interest row
pub fn write_statement(
    account: &str,
    lines: &[StatementLine],
    interest: Option<&InterestAccrual>,
    output: &mut dyn Write,
) -> io::Result<()> {
    writeln!(output, "Account: {}", account)?;
    writeln!(output, "{}", STATEMENT_HEADER)?;
    for line in lines {
        let tx = &line.transaction;
        writeln!(
            output,
            "| {} | {:<11} | {:<4} | {:>8} | {:>8} |",
            tx.date,
            tx.id.to_string(),
            tx.tx_type.code(),
            money(tx.amount),
            money(line.balance)
        )?;
    }
    if let Some(interest) = interest {
        writeln!(
            output,
            "| {} | {:<11} | {:<4} | {:>8} | {:>8} |",
            interest.date,
            "",
            INTEREST_CODE,
            money(interest.amount),
            money(interest.balance)
        )?;
    }
    Ok(())
}
