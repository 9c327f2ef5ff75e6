use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of entries in the journal, `null` when the file cannot be read.
    pub entries: Option<usize>,
}

/// GET /health -- returns service status and journal size.
///
/// Read-only: a corrupt journal reports `degraded` and is left untouched.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let entries = match state.store.count_entries().await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Journal unreadable during health check");
            None
        }
    };

    let status = if entries.is_some() { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        entries,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
