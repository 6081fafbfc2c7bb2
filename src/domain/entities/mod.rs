//! Domain entities.

mod note;
mod note_book;

pub use note::{Note, NoteTitle, TAG_SEPARATOR, format_tags, parse_tags};
pub use note_book::NoteBook;
