//! Ledger Errors
//!
//! One error type shared by the store, the codecs and the storage backends.

use thiserror::Error;

/// Common result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level errors
///
/// Operations on unknown identifiers are not errors: they return `false`.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Key-value backend failure (browser quota, SQLite, ...)
    #[error("Storage error: {0}")]
    Storage(String),
    /// Snapshot or import text is not valid JSON of the expected shape
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON parsed, but it is not a ledger backup (no `repairRows`)
    #[error("Invalid backup file: missing repairRows")]
    InvalidBackup,
    /// Every identifier up to `u64::MAX` is taken
    #[error("No free item identifier left")]
    IdsExhausted,
    /// Report requested while no item is completed
    #[error("Nothing to export: no completed items")]
    NothingToExport,
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for LedgerError {
    fn from(e: rusqlite::Error) -> Self {
        LedgerError::Storage(e.to_string())
    }
}
