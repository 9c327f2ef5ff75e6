//! Flat-file persistence for dream entries.
//!
//! The whole journal lives in a single JSON array on disk. Reads tolerate a
//! missing or corrupt file by resetting it to an empty array; writes rewrite
//! the full file.

pub mod models;
pub mod repositories;

pub use repositories::EntryStore;

/// Default location of the journal file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/dreams.json";

/// Errors raised while writing or inspecting the journal file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure (permissions, disk full, missing parent, ...).
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The entry list could not be encoded as JSON.
    #[error("Store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The file exists but does not hold a valid entry list.
    #[error("Store file is corrupt: {0}")]
    Corrupt(serde_json::Error),
}
