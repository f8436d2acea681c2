use crate::shell::SessionConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Record deposits, withdrawals and interest rules, and print monthly statements
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Interactive single-currency bank ledger", long_about = None)]
pub struct CliArgs {
    /// Script file to read console input from instead of stdin
    #[arg(value_name = "SCRIPT", help = "Read commands from this file instead of stdin")]
    pub script: Option<PathBuf>,

    /// Statement printed by the [P] menu entry
    #[arg(
        long = "statement",
        value_name = "MODE",
        default_value = "running-balance",
        help = "Statement type: 'running-balance' for the month's transactions or 'accrual' to add daily interest"
    )]
    pub statement: StatementMode,

    /// Bank name shown in the banner
    #[arg(long = "bank-name", value_name = "NAME", default_value = "AwesomeGIC")]
    pub bank_name: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter for stderr output (overridden by RUST_LOG)"
    )]
    pub log_level: String,
}

/// Statement types available from the console
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatementMode {
    /// Transactions of the month with a running balance starting at zero
    RunningBalance,
    /// Running balance carried into the month plus accrued interest
    Accrual,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            bank_name: self.bank_name.clone(),
            statement_mode: self.statement,
        }
    }
}
