//! Bank Ledger CLI
//!
//! Interactive console for recording transactions, defining interest rules and
//! printing monthly statements.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --statement accrual
//! cargo run -- session.txt > transcript.txt
//! RUST_LOG=debug cargo run -- --bank-name Harbour
//! ```
//!
//! Console input is read from stdin, or from the script file when one is given.
//! The transcript goes to stdout and logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Session ended (by `Q` or end of input)
//! - 1: Error (script file not readable, I/O failure)

use bank_ledger::cli;
use bank_ledger::logging;
use bank_ledger::shell::{self, Session};
use bank_ledger::Ledger;
use std::io::{self, BufRead};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init(&args.log_level);

    let mut input: Box<dyn BufRead> = match &args.script {
        Some(path) => match shell::open_script(path) {
            Ok(reader) => reader,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new(Ledger::new(), args.to_session_config());
    let mut output = io::stdout().lock();
    if let Err(e) = session.run(&mut input, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
