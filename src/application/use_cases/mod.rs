//! Use case implementations.

mod create_note_use_case;
mod delete_note_use_case;
mod load_notes_use_case;
mod save_note_use_case;

pub use create_note_use_case::CreateNoteUseCase;
pub use delete_note_use_case::DeleteNoteUseCase;
pub use load_notes_use_case::LoadNotesUseCase;
pub use save_note_use_case::SaveNoteUseCase;
