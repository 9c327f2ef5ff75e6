//! Repository for the JSON journal file.
//!
//! Every write is a full read-modify-write of the file. There is no locking
//! and no atomic rename, so two overlapping saves can lose one entry and a
//! crash mid-write leaves a truncated file (which the next load resets).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::DreamEntry;
use crate::StoreError;

/// Contents written when the journal is created or reset.
const EMPTY_JOURNAL: &str = "[]";

/// Owns the on-disk journal. Cheap to clone; holds only the path.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data directory and an empty journal if they do not exist.
    ///
    /// Existing content is left untouched, even if it is not valid JSON.
    pub async fn ensure_initialized(&self) -> Result<(), StoreError> {
        self.ensure_parent_dir().await?;

        if !tokio::fs::try_exists(&self.path).await? {
            tokio::fs::write(&self.path, EMPTY_JOURNAL).await?;
            tracing::info!(path = %self.path.display(), "Created empty journal file");
        }

        Ok(())
    }

    /// Read every entry in write order (oldest first).
    ///
    /// Never fails. A missing, unreadable or malformed file is replaced with
    /// an empty journal and an empty list is returned. A file holding only
    /// whitespace reads as empty and is not rewritten.
    pub async fn load_entries(&self) -> Vec<DreamEntry> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "Journal file missing, resetting to empty");
                self.reset().await;
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Journal file unreadable, resetting to empty",
                );
                self.reset().await;
                return Vec::new();
            }
        };

        let content = content.trim();
        if content.is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<DreamEntry>>(content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Journal file is not a valid entry list, discarding contents",
                );
                self.reset().await;
                Vec::new()
            }
        }
    }

    /// Count stored entries without modifying the file.
    ///
    /// Unlike [`load_entries`](Self::load_entries) this never resets the
    /// journal: a malformed file is reported as [`StoreError::Corrupt`]. A
    /// missing or whitespace-only file counts as zero.
    pub async fn count_entries(&self) -> Result<usize, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let content = content.trim();
        if content.is_empty() {
            return Ok(0);
        }

        serde_json::from_str::<Vec<DreamEntry>>(content)
            .map(|entries| entries.len())
            .map_err(StoreError::Corrupt)
    }

    /// Append one entry and rewrite the whole journal.
    pub async fn save_entry(&self, entry: DreamEntry) -> Result<(), StoreError> {
        let mut entries = self.load_entries().await;
        entries.push(entry);

        let body = serde_json::to_string_pretty(&entries)?;
        self.ensure_parent_dir().await?;
        tokio::fs::write(&self.path, body).await?;

        tracing::debug!(
            path = %self.path.display(),
            count = entries.len(),
            "Journal entry saved",
        );
        Ok(())
    }

    // ---- private helpers ----

    /// Overwrite the journal with an empty list. Failures are logged only.
    async fn reset(&self) {
        let result: std::io::Result<()> = async {
            self.ensure_parent_dir().await?;
            tokio::fs::write(&self.path, EMPTY_JOURNAL).await
        }
        .await;

        if let Err(e) = result {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "Failed to reset journal file",
            );
        }
    }

    async fn ensure_parent_dir(&self) -> std::io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                tokio::fs::create_dir_all(parent).await
            }
            _ => Ok(()),
        }
    }
}
