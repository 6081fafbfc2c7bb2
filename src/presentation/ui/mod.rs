//! UI screens.

mod app;
mod dialog;
mod notes_screen;

pub use app::App;
pub use dialog::{Dialog, DialogLevel, DialogWidget};
pub use notes_screen::{NotesKeyResult, NotesScreen, NotesScreenState};
