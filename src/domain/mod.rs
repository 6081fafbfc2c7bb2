//! Domain layer with core note entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Tag search.
pub mod search;

pub use entities::{Note, NoteBook, NoteTitle};
pub use errors::{NoteError, StorageError};
pub use ports::NoteRepositoryPort;
pub use search::TagFilter;
