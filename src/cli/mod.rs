//! Interactive shell over the ledger, with a stdin script mode for tests.

pub mod commands;
pub mod output;
pub mod shell;

use thiserror::Error;

use crate::errors::LedgerError;

pub use shell::run_cli;

/// How the shell reads its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Fatal shell failures; ledger errors inside commands are reported inline
/// and never abort the loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
