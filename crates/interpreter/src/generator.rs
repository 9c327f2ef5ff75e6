use async_trait::async_trait;

/// Errors from a text-generation backend.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Generation API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered but produced no text (blocked prompt, empty
    /// candidate list, unexpected shape).
    #[error("Generation returned no text")]
    EmptyResponse,
}

/// A model that turns one prompt into one block of text.
///
/// Injected into the request handlers so tests can swap in a stub.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
