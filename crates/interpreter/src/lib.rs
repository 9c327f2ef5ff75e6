//! Dream interpretation through an external text-generation model.
//!
//! - [`generator`]: the [`TextGenerator`] seam and its error type
//! - [`gemini`]: REST client for Google's Gemini `generateContent` endpoint
//! - [`service`]: prompt building plus the fallback applied on failure

pub mod gemini;
pub mod generator;
pub mod service;

pub use gemini::{GeminiClient, GeminiConfig};
pub use generator::{GenerationError, TextGenerator};
pub use service::InterpretationService;
