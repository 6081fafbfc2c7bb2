//! Note storage adapters.

mod json_note_repository;

pub use json_note_repository::{JsonNoteRepository, to_pretty_json};
