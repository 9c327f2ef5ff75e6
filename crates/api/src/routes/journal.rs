use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Read-only journal pages.
///
/// ```text
/// /            GET  form + all entries (oldest first)
/// /history     GET  all entries (newest first)
/// ```
pub fn pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::journal::index))
        .route("/history", get(handlers::journal::history))
}

/// Dream submission.
///
/// ```text
/// /            POST record a dream, then redirect to GET /
/// ```
///
/// Kept apart from [`pages_router`] so the request timeout is not applied to it.
pub fn submit_router() -> Router<AppState> {
    Router::new().route("/", post(handlers::journal::submit))
}
