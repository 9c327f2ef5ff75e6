//! Interpretation with a fixed fallback.

use std::sync::Arc;

use dreamjournal_core::journal::FALLBACK_INTERPRETATION;
use dreamjournal_core::prompt::build_prompt;

use crate::generator::TextGenerator;

/// Wraps a [`TextGenerator`] so that callers always get text back.
///
/// Generation failures never reach the caller: they are logged and replaced
/// by [`FALLBACK_INTERPRETATION`].
#[derive(Clone)]
pub struct InterpretationService {
    generator: Arc<dyn TextGenerator>,
}

impl InterpretationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Interpret a dream. `emotions` and `symbols` should already carry the
    /// "Not specified" default when the dreamer left them blank.
    pub async fn interpret(&self, dream_text: &str, emotions: &str, symbols: &str) -> String {
        let prompt = build_prompt(dream_text, emotions, symbols);

        match self.generator.generate(&prompt).await {
            Ok(text) => {
                tracing::debug!(chars = text.len(), "Dream interpretation generated");
                text
            }
            Err(e) => {
                tracing::error!(error = %e, "Dream interpretation failed, using fallback");
                FALLBACK_INTERPRETATION.to_string()
            }
        }
    }
}
