//! Console shell module
//!
//! The shell turns console lines into ledger calls and ledger results into
//! tables. It holds no ledger logic of its own.
//!
//! # Components
//!
//! - `command` - Line splitting into menu choices and command tuples
//! - `format` - Table rendering for transactions, rules and statements
//! - `session` - The interactive menu loop

pub mod command;
pub mod format;
pub mod session;

pub use session::{Session, SessionConfig};

use crate::types::ShellError;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Open a script file whose lines replace console input
///
/// # Errors
///
/// Returns `ShellError::ScriptNotFound` when the file does not exist and
/// `ShellError::Io` for any other open failure.
pub fn open_script(path: &Path) -> Result<Box<dyn BufRead>, ShellError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ShellError::ScriptNotFound {
            path: path.display().to_string(),
        },
        _ => ShellError::Io(e),
    })?;
    Ok(Box::new(BufReader::new(file)))
}
