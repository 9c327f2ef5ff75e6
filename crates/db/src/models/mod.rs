pub mod dream_entry;

pub use dream_entry::DreamEntry;
