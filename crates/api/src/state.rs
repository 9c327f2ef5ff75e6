use std::sync::Arc;

use dreamjournal_db::EntryStore;
use dreamjournal_interpreter::InterpretationService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store holds only a path and the interpreter is
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Journal file repository.
    pub store: EntryStore,
    /// Language-model interpretation with fallback.
    pub interpreter: Arc<InterpretationService>,
}
