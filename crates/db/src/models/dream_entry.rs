//! The single persisted record type.

use dreamjournal_core::journal::NewDream;
use serde::{Deserialize, Serialize};

/// One dream as stored in the journal file.
///
/// There is no id column: position in the file is the only ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamEntry {
    /// Local write time, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
    pub dream_text: String,
    pub emotions: String,
    pub symbols: String,
    pub ai_interpretation: String,
}

impl DreamEntry {
    /// Assemble an entry from a validated submission and its interpretation.
    pub fn new(dream: NewDream, ai_interpretation: String, date: String) -> Self {
        Self {
            date,
            dream_text: dream.dream_text,
            emotions: dream.emotions,
            symbols: dream.symbols,
            ai_interpretation,
        }
    }
}
