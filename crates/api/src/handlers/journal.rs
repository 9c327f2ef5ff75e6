//! Handlers for the journal pages.
//!
//! The store is the only source of truth: every render reads the full file.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use dreamjournal_core::journal::DreamSubmission;
use dreamjournal_core::types::entry_date_now;
use dreamjournal_db::models::DreamEntry;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Submission form followed by every entry, oldest first.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let entries = state.store.load_entries().await;
    Html(views::render_index(&entries))
}

/// POST /
///
/// Interpret and record a dream, then redirect to `GET /` so a browser
/// refresh does not resubmit. A submission without `dream_text` records
/// nothing and renders the page as-is; a body that is not a urlencoded form
/// counts as such a submission.
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<DreamSubmission>, FormRejection>,
) -> AppResult<Response> {
    let submission = match form {
        Ok(Form(submission)) => submission,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Submission without form body");
            DreamSubmission::default()
        }
    };

    let dream = match submission.into_new_dream() {
        Ok(dream) => dream,
        Err(e) => {
            tracing::debug!(error = %e, "Empty submission, nothing recorded");
            return Ok(index(State(state)).await.into_response());
        }
    };

    let interpretation = state
        .interpreter
        .interpret(&dream.dream_text, &dream.emotions, &dream.symbols)
        .await;

    let entry = DreamEntry::new(dream, interpretation, entry_date_now());
    let date = entry.date.clone();
    state.store.save_entry(entry).await?;

    tracing::info!(%date, "Dream recorded");

    Ok(Redirect::to("/").into_response())
}

/// GET /history
///
/// Every entry, newest first.
pub async fn history(State(state): State<AppState>) -> Html<String> {
    let mut entries = state.store.load_entries().await;
    entries.reverse();
    Html(views::render_history(&entries))
}
