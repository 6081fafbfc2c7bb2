//! Domain error types.

mod note_error;
mod storage_error;

pub use note_error::NoteError;
pub use storage_error::StorageError;
