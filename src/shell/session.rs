//! Interactive console session
//!
//! The session runs the main menu loop over a line-based input and writes the
//! transcript to an output writer. Each menu entry opens a sub-prompt that
//! repeats until a blank line (or end of input) returns to the menu.
//!
//! Rejected input never ends the session: ledger errors are printed as
//! `Error: <message>` and the prompt is shown again. Only I/O failures on the
//! input or output streams are returned to the caller.

use crate::cli::StatementMode;
use crate::core::Ledger;
use crate::shell::command::{InterestRuleCommand, MenuChoice, StatementQuery, TransactionCommand};
use crate::shell::format;
use crate::types::{InterestStatement, LedgerError, MonthlyStatement, ShellError};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Settings for a console session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name shown in the banner and farewell
    pub bank_name: String,

    /// Which statement the `P` entry prints
    pub statement_mode: StatementMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            bank_name: "AwesomeGIC".to_string(),
            statement_mode: StatementMode::RunningBalance,
        }
    }
}

/// A console session driving one ledger
pub struct Session {
    ledger: Ledger,
    config: SessionConfig,
}

/// Read one line; `None` at end of input
///
/// Bytes that are not UTF-8 are replaced rather than failing the read, so such a
/// line is rejected like any other malformed entry.
fn read_line(input: &mut dyn BufRead) -> Result<Option<String>, ShellError> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

/// Read a sub-prompt line; `None` on a blank line or end of input
fn read_entry(input: &mut dyn BufRead) -> Result<Option<String>, ShellError> {
    Ok(read_line(input)?.filter(|line| !line.is_empty()))
}

fn write_rejection(error: &LedgerError, output: &mut dyn Write) -> Result<(), ShellError> {
    debug!(%error, "input rejected");
    writeln!(output, "Error: {}", error)?;
    Ok(())
}

impl Session {
    pub fn new(ledger: Ledger, config: SessionConfig) -> Self {
        Session { ledger, config }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run the menu loop until `Q` or end of input
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Io` if reading input or writing output fails.
    pub fn run(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), ShellError> {
        info!(
            bank = %self.config.bank_name,
            mode = ?self.config.statement_mode,
            "session started"
        );

        loop {
            self.write_menu(output)?;
            let Some(line) = read_line(input)? else {
                break;
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Transactions => self.transactions_prompt(input, output)?,
                MenuChoice::InterestRules => self.interest_rules_prompt(input, output)?,
                MenuChoice::Statement => self.statement_prompt(input, output)?,
                MenuChoice::Quit => {
                    writeln!(
                        output,
                        "Thank you for banking with {} Bank.",
                        self.config.bank_name
                    )?;
                    break;
                }
                MenuChoice::Invalid => writeln!(output, "Invalid choice. Please try again.")?,
            }
        }

        output.flush()?;
        info!("session ended");
        Ok(())
    }

    fn write_menu(&self, output: &mut dyn Write) -> Result<(), ShellError> {
        writeln!(output)?;
        writeln!(
            output,
            "Welcome to {} Bank! What would you like to do?",
            self.config.bank_name
        )?;
        writeln!(output, "[T] Input transactions")?;
        writeln!(output, "[I] Define interest rules")?;
        writeln!(output, "[P] Print statement")?;
        writeln!(output, "[Q] Quit")?;
        Ok(())
    }

    fn transactions_prompt(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), ShellError> {
        loop {
            writeln!(
                output,
                "Please enter transaction details in <Date> <Account> <Type> <Amount> format"
            )?;
            writeln!(output, "(or enter blank to go back to the main menu):")?;
            let Some(line) = read_entry(input)? else {
                return Ok(());
            };

            let cmd = match TransactionCommand::parse(&line) {
                Ok(cmd) => cmd,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match self
                .ledger
                .record_transaction(cmd.date, cmd.account, cmd.tx_type, cmd.amount)
            {
                Ok(tx) => {
                    let history = self.ledger.transactions(&tx.account).unwrap_or_default();
                    format::write_transactions(&tx.account, history, output)?;
                }
                Err(e) => write_rejection(&e, output)?,
            }
        }
    }

    fn interest_rules_prompt(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), ShellError> {
        loop {
            writeln!(
                output,
                "Please enter interest rules details in <Date> <RuleId> <Rate in %> format"
            )?;
            writeln!(output, "(or enter blank to go back to the main menu):")?;
            let Some(line) = read_entry(input)? else {
                return Ok(());
            };

            let cmd = match InterestRuleCommand::parse(&line) {
                Ok(cmd) => cmd,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match self
                .ledger
                .define_interest_rule(cmd.date, cmd.rule_id, cmd.rate)
            {
                Ok(_) => format::write_interest_rules(self.ledger.interest_rules(), output)?,
                Err(e) => write_rejection(&e, output)?,
            }
        }
    }

    fn statement_prompt(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), ShellError> {
        loop {
            writeln!(
                output,
                "Please enter account and month to generate the statement <Account> <Year><Month>"
            )?;
            writeln!(output, "(or enter blank to go back to the main menu):")?;
            let Some(line) = read_entry(input)? else {
                return Ok(());
            };

            let query = match StatementQuery::parse(&line) {
                Ok(query) => query,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            let printed = match self.config.statement_mode {
                StatementMode::RunningBalance => self.write_monthly_statement(&query, output)?,
                StatementMode::Accrual => self.write_interest_statement(&query, output)?,
            };
            if let Err(e) = printed {
                write_rejection(&e, output)?;
            }
        }
    }

    // Outer Result is output I/O, inner Result is the ledger's verdict
    fn write_monthly_statement(
        &self,
        query: &StatementQuery<'_>,
        output: &mut dyn Write,
    ) -> Result<Result<(), LedgerError>, ShellError> {
        let statement = match self
            .ledger
            .monthly_statement(query.account, query.year_month)
        {
            Ok(statement) => statement,
            Err(e) => return Ok(Err(e)),
        };

        match statement {
            MonthlyStatement::UnknownAccount => {
                format::write_unknown_account(query.account, output)?
            }
            MonthlyStatement::NoActivity => {
                format::write_no_activity(query.account, query.year_month, output)?
            }
            MonthlyStatement::Lines(lines) => {
                format::write_statement(query.account, &lines, None, output)?
            }
        }
        Ok(Ok(()))
    }

    fn write_interest_statement(
        &self,
        query: &StatementQuery<'_>,
        output: &mut dyn Write,
    ) -> Result<Result<(), LedgerError>, ShellError> {
        let statement = match self
            .ledger
            .monthly_statement_with_interest(query.account, query.year_month)
        {
            Ok(statement) => statement,
            Err(e) => return Ok(Err(e)),
        };

        match statement {
            InterestStatement::UnknownAccount => {
                format::write_unknown_account(query.account, output)?
            }
            InterestStatement::Statement {
                lines, interest, ..
            } => format::write_statement(query.account, &lines, Some(&interest), output)?,
        }
        Ok(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn run(input: &str, config: SessionConfig) -> (Session, String) {
        let mut session = Session::new(Ledger::new(), config);
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        session.run(&mut reader, &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit_prints_farewell() {
        let (_, output) = run("q\n", SessionConfig::default());
        assert!(output.starts_with("\nWelcome to AwesomeGIC Bank! What would you like to do?\n"));
        assert!(output.ends_with("Thank you for banking with AwesomeGIC Bank.\n"));
    }

    #[test]
    fn test_end_of_input_ends_session_quietly() {
        let (_, output) = run("T\n20230505 A1 D 10\n", SessionConfig::default());
        assert!(!output.contains("Thank you"));
        assert_eq!(output.matches("[Q] Quit").count(), 2);
    }

    #[test]
    fn test_invalid_choice() {
        let (_, output) = run("X\nQ\n", SessionConfig::default());
        assert!(output.contains("Invalid choice. Please try again.\n"));
    }

    #[test]
    fn test_transactions_recorded_until_blank_line() {
        let (session, output) = run(
            "T\n20230505 A1 D 100.00\n20230505 A1 W 30\n\nQ\n",
            SessionConfig::default(),
        );

        assert_eq!(session.ledger().balance("A1"), Decimal::new(7000, 2));
        assert!(output.contains("| 20230505 | 20230505-02 | W    |    30.00 |\n"));
    }

    #[test]
    fn test_rejections_keep_prompting() {
        let (session, output) = run(
            "T\n20230505 A1 W 10\n20230505 A1 D\n20230505 A1 D 10\n\nQ\n",
            SessionConfig::default(),
        );

        assert!(output.contains("Error: The first transaction for account A1 cannot be a withdrawal\n"));
        assert!(output.contains("Invalid input. Please follow the specified format.\n"));
        assert_eq!(session.ledger().transactions("A1").unwrap().len(), 1);
    }

    #[test]
    fn test_non_utf8_line_is_rejected_and_session_continues() {
        let mut input = b"T\n20230505 A1 D 10\n".to_vec();
        input.extend_from_slice(b"2023\xff0505 A1 D 10\n");
        input.extend_from_slice(b"20230506 A1 D 5\n\nQ\n");

        let mut session = Session::new(Ledger::new(), SessionConfig::default());
        let mut output = Vec::new();
        session.run(&mut Cursor::new(input), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Error: Date '2023\u{FFFD}0505' must be in YYYYMMdd format\n"));
        assert_eq!(session.ledger().balance("A1"), Decimal::new(15, 0));
        assert!(output.ends_with("Thank you for banking with AwesomeGIC Bank.\n"));
    }

    #[test]
    fn test_custom_bank_name() {
        let config = SessionConfig {
            bank_name: "Harbour".to_string(),
            ..SessionConfig::default()
        };
        let (_, output) = run("Q\n", config);
        assert!(output.contains("Welcome to Harbour Bank!"));
        assert!(output.contains("Thank you for banking with Harbour Bank."));
    }

    #[test]
    fn test_statement_mode_selects_interest_row() {
        let script = "T\n20230601 A1 D 36500\n\nI\n20230101 R1 1\n\nP\nA1 202306\n\nQ\n";

        let (_, plain) = run(script, SessionConfig::default());
        let (_, accrual) = run(
            script,
            SessionConfig {
                statement_mode: StatementMode::Accrual,
                ..SessionConfig::default()
            },
        );

        assert!(!plain.contains("| I    |"));
        assert!(accrual.contains("| 20230630 |             | I    |    30.00 | 36530.00 |\n"));
    }

    #[test]
    fn test_statement_errors_are_printed() {
        let (_, output) = run("P\nA1 2023\n\nQ\n", SessionConfig::default());
        assert!(output.contains("Error: Year-month '2023' must be in YYYYMM format\n"));
    }
}
