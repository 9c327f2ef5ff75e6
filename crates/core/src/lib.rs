//! Domain rules shared by the dream journal crates.
//!
//! Nothing in here performs I/O: the store lives in `dreamjournal-db` and the
//! language-model client in `dreamjournal-interpreter`.

pub mod error;
pub mod journal;
pub mod prompt;
pub mod types;
