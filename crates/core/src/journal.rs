//! Submission rules for new dream entries.
//!
//! A submission carries three optional form fields. Only `dream_text` is
//! required; the other two fall back to [`NOT_SPECIFIED`] when missing or
//! empty.

use serde::Deserialize;

use crate::error::CoreError;

/// Stand-in for optional fields the dreamer left blank.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Interpretation stored when the language model could not be reached.
pub const FALLBACK_INTERPRETATION: &str =
    "I'm sorry, I couldn't interpret your dream right now. Please try again.";

/// Raw form body posted to `/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DreamSubmission {
    pub dream_text: Option<String>,
    pub emotions: Option<String>,
    pub symbols: Option<String>,
}

/// A validated submission with defaults applied, ready for interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDream {
    pub dream_text: String,
    pub emotions: String,
    pub symbols: String,
}

impl DreamSubmission {
    /// Validate the submission and fill in defaults.
    ///
    /// Text is kept exactly as submitted; only an absent or zero-length
    /// `dream_text` is rejected.
    pub fn into_new_dream(self) -> Result<NewDream, CoreError> {
        let dream_text = self
            .dream_text
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::Validation("dream_text is required".into()))?;

        Ok(NewDream {
            dream_text,
            emotions: or_not_specified(self.emotions),
            symbols: or_not_specified(self.symbols),
        })
    }
}

/// Replace a missing or empty optional field with [`NOT_SPECIFIED`].
pub fn or_not_specified(value: Option<String>) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}
