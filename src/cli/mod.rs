// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, StatementMode};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, or `--help`), clap prints an error or
/// the help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
