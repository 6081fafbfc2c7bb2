mod body_editor;
mod footer_bar;
mod header_bar;
mod input;
mod note_list;

pub use body_editor::BodyEditor;
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use note_list::{NoteList, NoteListState};
