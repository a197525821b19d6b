//! Interactive menu shell around the ledger core.

pub mod chart;
pub mod commands;
pub mod io;
pub mod output;
pub mod shell;

use thiserror::Error;

use crate::errors::LedgerError;

pub use shell::run_cli;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
