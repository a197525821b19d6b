//! Persistence backends for the day ledger.

pub mod table_store;

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::ledger::Ledger;

/// Abstraction over persistence backends capable of storing and archiving a
/// ledger's tables.
pub trait StorageBackend {
    fn save(&self, ledger: &Ledger) -> Result<()>;
    fn load(&self) -> Result<Ledger>;

    /// Moves the live tables aside to a timestamped location, returning the
    /// archived paths. The in-memory ledger is untouched.
    fn archive(&self) -> Result<Vec<PathBuf>>;

    /// One-way flat CSV report of every transaction across all days.
    fn export_csv(&self, ledger: &Ledger, path: &Path) -> Result<()>;
}

pub use table_store::TableStore;
