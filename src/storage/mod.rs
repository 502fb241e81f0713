//! Record Store boundary: persistence backends for ledger snapshots.

pub mod json_backend;

use std::path::Path;

use crate::{errors::FinanceError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Abstraction over persistence backends capable of storing ledger snapshots.
pub trait StorageBackend: Send + Sync {
    fn save(&self, ledger: &Ledger, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Ledger>;
    fn list(&self) -> Result<Vec<String>>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// use the JSON codec.
    fn save_to_path(&self, ledger: &Ledger, path: &Path) -> Result<()> {
        json_backend::save_ledger_to_path(ledger, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Ledger> {
        json_backend::load_ledger_from_path(path)
    }
}

pub use json_backend::JsonStorage;
