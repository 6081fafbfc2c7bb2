//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, error, info, warn};

use crate::application::use_cases::{
    CreateNoteUseCase, DeleteNoteUseCase, LoadNotesUseCase, SaveNoteUseCase,
};
use crate::domain::entities::NoteBook;
use crate::domain::errors::NoteError;
use crate::domain::ports::NoteRepositoryPort;
use crate::infrastructure::config::AppConfig;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;

use super::dialog::{Dialog, DialogWidget};
use super::notes_screen::{NotesKeyResult, NotesScreen, NotesScreenState};

/// Main application.
pub struct App {
    book: NoteBook,
    location: String,
    load_notes: LoadNotesUseCase,
    create_note: CreateNoteUseCase,
    delete_note: DeleteNoteUseCase,
    save_note: SaveNoteUseCase,
    registry: CommandRegistry,
    theme: Theme,
    screen: NotesScreenState,
    dialog: Option<Dialog>,
    seed_example: bool,
    should_quit: bool,
}

impl App {
    /// Creates new application backed by `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn NoteRepositoryPort>, config: &AppConfig) -> Self {
        Self {
            book: NoteBook::new(),
            location: repository.location(),
            load_notes: LoadNotesUseCase::new(repository.clone()),
            create_note: CreateNoteUseCase::new(repository.clone()),
            delete_note: DeleteNoteUseCase::new(repository.clone()),
            save_note: SaveNoteUseCase::new(repository),
            registry: CommandRegistry::with_overrides(&config.keybindings),
            theme: Theme::new(&config.theme.accent_color),
            screen: NotesScreenState::new().with_footer(config.ui.show_footer),
            dialog: None,
            seed_example: config.seed_example,
            should_quit: false,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns error if drawing fails or the terminal event stream errors.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.load().await;

        let mut terminal_events = EventStream::new();
        terminal.draw(|frame| self.render(frame))?;

        while !self.should_quit {
            let Some(event) = terminal_events.next().await else {
                debug!("Terminal event stream closed");
                break;
            };
            let event = event?;

            if let Some(key) = EventHandler::key_press(&event)
                && self.handle_key(key).await == EventResult::Exit
            {
                self.should_quit = true;
            }

            if EventHandler::needs_redraw(&event) {
                terminal.draw(|frame| self.render(frame))?;
            }
        }

        info!("Exiting");
        Ok(())
    }

    /// Loads the note book, showing an error dialog if the store is unreadable.
    pub async fn load(&mut self) {
        self.book = match self.load_notes.execute(self.seed_example).await {
            Ok(book) => book,
            Err(e) => {
                error!(location = %self.location, error = %e, "Failed to load notes");
                self.dialog = Some(Dialog::error(format!("Failed to load notes: {e}")));
                NoteBook::new()
            }
        };
        self.screen.resync(&self.book, None);
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dialog = None;
            }
            return EventResult::Consumed;
        }

        match self.screen.handle_key(key, &self.registry) {
            NotesKeyResult::Quit => return EventResult::Exit,
            NotesKeyResult::AddNote => self.add_note().await,
            NotesKeyResult::DeleteNote => self.delete_note().await,
            NotesKeyResult::SaveNote => self.save_note().await,
            NotesKeyResult::ToggleTagSearch => self.toggle_tag_search(),
            NotesKeyResult::SelectionChanged => self.screen.show_selected(&self.book),
            NotesKeyResult::Consumed => {}
            NotesKeyResult::Ignored => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    async fn add_note(&mut self) {
        let raw_title = self.screen.title_text().to_string();
        let result = self.create_note.execute(&mut self.book, &raw_title).await;
        self.screen.resync(&self.book, None);

        match result {
            Ok(_) => self.screen.clear_title(),
            Err(e) => self.report(&e),
        }
    }

    async fn delete_note(&mut self) {
        let selected = self.screen.selected_title().map(String::from);
        let result = self
            .delete_note
            .execute(&mut self.book, selected.as_deref())
            .await;
        self.screen.resync(&self.book, None);

        match result {
            Ok(_) => self.screen.clear_fields(),
            Err(e) => self.report(&e),
        }
    }

    async fn save_note(&mut self) {
        let request = self.screen.save_request();
        match self.save_note.execute(&mut self.book, request).await {
            Ok(title) => {
                self.screen.resync(&self.book, Some(title.as_str()));
                self.screen.show_selected(&self.book);
                self.dialog = Some(Dialog::info("Note saved!"));
            }
            Err(e) => {
                self.screen.resync(&self.book, None);
                self.report(&e);
            }
        }
    }

    fn toggle_tag_search(&mut self) {
        match self.screen.toggle_filter(&self.book) {
            Ok(()) => debug!(
                active = self.screen.filter().is_active(),
                tag = ?self.screen.filter().tag(),
                "Tag filter toggled"
            ),
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, error: &NoteError) {
        if error.is_validation() {
            warn!(error = %error, "Note operation rejected");
        } else {
            error!(location = %self.location, error = %error, "Note operation failed");
        }
        self.dialog = Some(Dialog::from_note_error(error));
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let commands = self.screen.get_commands(&self.registry);
        let screen = NotesScreen::new(&self.book, &self.theme, commands)
            .location(&self.location)
            .dialog_open(self.dialog.is_some());
        frame.render_stateful_widget(screen, area, &mut self.screen);

        if let Some(dialog) = &self.dialog {
            frame.render_widget(DialogWidget::new(dialog, &self.theme), area);
        }
    }

    /// Returns the in-memory notes.
    #[must_use]
    pub const fn book(&self) -> &NoteBook {
        &self.book
    }

    /// Returns the open dialog, if any.
    #[must_use]
    pub const fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Returns the notes screen state.
    #[must_use]
    pub const fn screen(&self) -> &NotesScreenState {
        &self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Note, NoteTitle};
    use crate::domain::ports::mocks::MockNoteRepository;
    use crate::infrastructure::JsonNoteRepository;
    use crate::presentation::ui::DialogLevel;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
    }

    fn book_with(notes: &[(&str, &[&str])]) -> NoteBook {
        let mut book = NoteBook::new();
        for (title, tags) in notes {
            let title = NoteTitle::parse(title).unwrap();
            let tags = tags.iter().map(|t| (*t).to_string()).collect();
            book.insert(&title, Note::new(tags, "")).unwrap();
        }
        book
    }

    async fn app_with(repo: Arc<MockNoteRepository>) -> App {
        let mut app = App::new(repo, &AppConfig::default());
        app.load().await;
        app
    }

    #[tokio::test]
    async fn test_first_run_seeds_example() {
        let repo = Arc::new(MockNoteRepository::new());
        let app = app_with(repo.clone()).await;

        assert_eq!(app.book().len(), 1);
        assert!(app.book().contains("Instructions"));
        assert_eq!(repo.save_count(), 1);
        assert!(app.dialog().is_none());
    }

    #[tokio::test]
    async fn test_add_note_from_title_field() {
        let repo = Arc::new(MockNoteRepository::with_book(NoteBook::new()));
        let mut app = app_with(repo.clone()).await;

        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "Groceries").await;
        app.handle_key(ctrl('n')).await;

        assert!(app.book().contains("Groceries"));
        assert_eq!(app.screen().title_text(), "");
        assert_eq!(app.screen().list().titles(), ["Groceries"]);
        assert!(repo.stored().unwrap().contains("Groceries"));
    }

    #[tokio::test]
    async fn test_add_empty_and_duplicate_titles() {
        let repo = Arc::new(MockNoteRepository::with_book(book_with(&[("a", &[])])));
        let mut app = app_with(repo.clone()).await;

        app.handle_key(ctrl('n')).await;
        let dialog = app.dialog().unwrap();
        assert_eq!(dialog.message, "Note title cannot be empty!");
        assert_eq!(dialog.level, DialogLevel::Warning);

        app.handle_key(key(KeyCode::Enter)).await;
        assert!(app.dialog().is_none());

        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "a").await;
        app.handle_key(ctrl('n')).await;
        assert_eq!(
            app.dialog().unwrap().message,
            "A note with this title already exists!"
        );
        assert_eq!(app.book().len(), 1);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_dialog_swallows_keys() {
        let repo = Arc::new(MockNoteRepository::with_book(NoteBook::new()));
        let mut app = app_with(repo).await;

        app.handle_key(ctrl('d')).await;
        assert_eq!(app.dialog().unwrap().message, "Select a note to delete!");

        assert_eq!(app.handle_key(ctrl('c')).await, EventResult::Consumed);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))).await, EventResult::Consumed);
        assert!(app.dialog().is_some());

        app.handle_key(key(KeyCode::Esc)).await;
        assert!(app.dialog().is_none());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))).await, EventResult::Exit);
    }

    #[tokio::test]
    async fn test_delete_selected_note() {
        let repo = Arc::new(MockNoteRepository::with_book(book_with(&[
            ("a", &["x"]),
            ("b", &[]),
        ])));
        let mut app = app_with(repo.clone()).await;

        app.handle_key(key(KeyCode::Down)).await;
        assert_eq!(app.screen().title_text(), "a");
        assert_eq!(app.screen().tags_text(), "x");

        app.handle_key(ctrl('d')).await;

        assert!(!app.book().contains("a"));
        assert!(!repo.stored().unwrap().contains("a"));
        assert_eq!(app.screen().list().titles(), ["b"]);
        assert_eq!(app.screen().selected_title(), None);
        assert_eq!(app.screen().title_text(), "");
        assert_eq!(app.screen().tags_text(), "");
    }

    #[tokio::test]
    async fn test_save_renames_and_keeps_selection() {
        let repo = Arc::new(MockNoteRepository::with_book(book_with(&[
            ("a", &[]),
            ("b", &[]),
        ])));
        let mut app = app_with(repo.clone()).await;

        app.handle_key(key(KeyCode::Down)).await;
        app.handle_key(key(KeyCode::Tab)).await;
        app.handle_key(ctrl('u')).await;
        type_text(&mut app, "renamed").await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "one, two, one").await;
        app.handle_key(ctrl('s')).await;

        let dialog = app.dialog().unwrap();
        assert_eq!(dialog.level, DialogLevel::Info);
        assert_eq!(dialog.message, "Note saved!");

        assert_eq!(app.screen().list().titles(), ["b", "renamed"]);
        assert_eq!(app.screen().selected_title(), Some("renamed"));
        assert_eq!(app.screen().tags_text(), "one, two");
        let stored = repo.stored().unwrap();
        assert_eq!(stored.get("renamed").unwrap().tags(), ["one", "two"]);
    }

    #[tokio::test]
    async fn test_save_without_selection() {
        let repo = Arc::new(MockNoteRepository::with_book(book_with(&[("a", &[])])));
        let mut app = app_with(repo.clone()).await;

        app.handle_key(ctrl('s')).await;

        assert_eq!(app.dialog().unwrap().message, "Select a note to save!");
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_tag_search_toggle() {
        let repo = Arc::new(MockNoteRepository::with_book(book_with(&[
            ("a", &["work"]),
            ("b", &["home"]),
            ("c", &["work", "home"]),
        ])));
        let mut app = app_with(repo).await;

        app.handle_key(ctrl('f')).await;
        assert_eq!(app.dialog().unwrap().message, "Enter a tag to search!");
        app.handle_key(key(KeyCode::Enter)).await;

        app.handle_key(key(KeyCode::Tab)).await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "home").await;
        app.handle_key(ctrl('f')).await;
        assert_eq!(app.screen().list().titles(), ["b", "c"]);

        app.handle_key(ctrl('f')).await;
        assert_eq!(app.screen().list().titles(), ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_write_failure_keeps_change_in_memory() {
        let repo = Arc::new(MockNoteRepository::with_book(NoteBook::new()));
        repo.fail_saves();
        let mut app = app_with(repo.clone()).await;

        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "draft").await;
        app.handle_key(ctrl('n')).await;

        let dialog = app.dialog().unwrap();
        assert_eq!(dialog.level, DialogLevel::Error);
        assert!(dialog.message.starts_with("Failed to write notes"));
        assert!(app.book().contains("draft"));
        assert!(repo.stored().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_seed_write_shows_load_error() {
        let repo = Arc::new(MockNoteRepository::new());
        repo.fail_saves();
        let app = app_with(repo).await;

        let dialog = app.dialog().unwrap();
        assert_eq!(dialog.level, DialogLevel::Error);
        assert!(dialog.message.starts_with("Failed to load notes"));
        assert!(app.book().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_file_is_replaced_on_next_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "{ not json").unwrap();
        let repo = Arc::new(JsonNoteRepository::new(&path));
        let mut app = App::new(repo.clone(), &AppConfig::default());
        app.load().await;

        let dialog = app.dialog().unwrap();
        assert_eq!(dialog.level, DialogLevel::Error);
        assert!(dialog.message.starts_with("Failed to load notes"));
        assert!(app.book().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");

        app.handle_key(key(KeyCode::Enter)).await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "fresh").await;
        app.handle_key(ctrl('n')).await;

        assert!(app.dialog().is_none());
        let reloaded = repo.load().await.unwrap().unwrap();
        assert_eq!(reloaded.titles().collect::<Vec<_>>(), ["fresh"]);
    }

    #[tokio::test]
    async fn test_note_with_padded_title_from_file_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, r#"{" padded ": {"tags": ["a"], "body": "text"}}"#).unwrap();
        let repo = Arc::new(JsonNoteRepository::new(&path));
        let mut app = App::new(repo.clone(), &AppConfig::default());
        app.load().await;

        app.handle_key(key(KeyCode::Down)).await;
        assert_eq!(app.screen().title_text(), " padded ");
        app.handle_key(ctrl('s')).await;

        assert_eq!(app.dialog().unwrap().message, "Note saved!");
        assert_eq!(app.screen().selected_title(), Some("padded"));
        let reloaded = repo.load().await.unwrap().unwrap();
        assert_eq!(reloaded.get("padded").unwrap().body(), "text");
    }
}
