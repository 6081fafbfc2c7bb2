//! Notes screen: note list, editor fields, header and footer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};

use crate::NAME;
use crate::application::dto::SaveNoteRequest;
use crate::domain::entities::NoteBook;
use crate::domain::errors::NoteError;
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::search::TagFilter;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    BodyEditor, FocusContext, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, NoteList,
    NoteListState, TextInput,
};

const LIST_WIDTH_PERCENT: u16 = 35;
const LIST_MIN_WIDTH: u16 = 20;
const STACKED_LAYOUT_BELOW: u16 = 60;

/// What the app should do after a key reached the screen.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesKeyResult {
    Consumed,
    Ignored,
    Quit,
    AddNote,
    DeleteNote,
    SaveNote,
    ToggleTagSearch,
    SelectionChanged,
}

/// State of the notes screen: list, editor fields, focus and tag filter.
pub struct NotesScreenState {
    list: NoteListState,
    title_input: TextInput,
    tags_input: TextInput,
    body_editor: BodyEditor<'static>,
    focus: FocusContext,
    filter: TagFilter,
    show_footer: bool,
}

impl Default for NotesScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesScreenState {
    /// Creates the screen with the list focused and no filter.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            list: NoteListState::new(),
            title_input: TextInput::new("Title").placeholder("Note title"),
            tags_input: TextInput::new("Tags").placeholder("tag, another tag"),
            body_editor: BodyEditor::new(),
            focus: FocusContext::NoteList,
            filter: TagFilter::Inactive,
            show_footer: true,
        };
        state.apply_focus();
        state
    }

    /// Shows or hides the key binding footer.
    #[must_use]
    pub const fn with_footer(mut self, show_footer: bool) -> Self {
        self.show_footer = show_footer;
        self
    }

    /// Returns the focused pane.
    #[must_use]
    pub const fn focus(&self) -> FocusContext {
        self.focus
    }

    /// Returns the tag filter.
    #[must_use]
    pub const fn filter(&self) -> &TagFilter {
        &self.filter
    }

    /// Returns the note list state.
    #[must_use]
    pub const fn list(&self) -> &NoteListState {
        &self.list
    }

    /// Returns the title selected in the list.
    #[must_use]
    pub fn selected_title(&self) -> Option<&str> {
        self.list.selected_title()
    }

    /// Returns the title field content.
    #[must_use]
    pub fn title_text(&self) -> &str {
        self.title_input.value()
    }

    /// Returns the tags field content.
    #[must_use]
    pub fn tags_text(&self) -> &str {
        self.tags_input.value()
    }

    /// Returns the body editor content.
    #[must_use]
    pub fn body_text(&self) -> String {
        self.body_editor.value()
    }

    /// Moves focus to `focus`.
    pub fn set_focus(&mut self, focus: FocusContext) {
        self.focus = focus;
        self.apply_focus();
    }

    /// Cycles focus forward: list, title, tags, body.
    pub fn focus_next(&mut self) {
        self.set_focus(match self.focus {
            FocusContext::NoteList | FocusContext::Dialog => FocusContext::Title,
            FocusContext::Title => FocusContext::Tags,
            FocusContext::Tags => FocusContext::Body,
            FocusContext::Body => FocusContext::NoteList,
        });
    }

    /// Cycles focus backward.
    pub fn focus_previous(&mut self) {
        self.set_focus(match self.focus {
            FocusContext::NoteList | FocusContext::Dialog => FocusContext::Body,
            FocusContext::Title => FocusContext::NoteList,
            FocusContext::Tags => FocusContext::Title,
            FocusContext::Body => FocusContext::Tags,
        });
    }

    fn apply_focus(&mut self) {
        self.list.set_focused(self.focus == FocusContext::NoteList);
        self.title_input
            .set_focused(self.focus == FocusContext::Title);
        self.tags_input.set_focused(self.focus == FocusContext::Tags);
        self.body_editor
            .set_focused(self.focus == FocusContext::Body);
    }

    /// Recomputes the visible titles from `book` and the active filter.
    ///
    /// `keep` names the title to select; without it the current selection
    /// survives when still visible.
    pub fn resync(&mut self, book: &NoteBook, keep: Option<&str>) {
        let titles = self.filter.apply(book);
        self.list.set_titles(titles, keep);
    }

    /// Fills the editor fields from the selected note.
    pub fn show_selected(&mut self, book: &NoteBook) {
        let Some(title) = self.list.selected_title().map(String::from) else {
            return;
        };
        if let Some(note) = book.get(&title) {
            self.tags_input.set_value(note.tags_display());
            self.body_editor.set_content(note.body());
            self.title_input.set_value(title);
        }
    }

    /// Clears the title field.
    pub fn clear_title(&mut self) {
        self.title_input.clear();
    }

    /// Clears title, tags and body.
    pub fn clear_fields(&mut self) {
        self.title_input.clear();
        self.tags_input.clear();
        self.body_editor.clear();
    }

    /// Snapshot of the editor fields for saving the selected note.
    #[must_use]
    pub fn save_request(&self) -> SaveNoteRequest {
        SaveNoteRequest::new(self.selected_title().map(String::from))
            .with_title(self.title_input.value())
            .with_tags(self.tags_input.value())
            .with_body(self.body_text())
    }

    /// Toggles the tag filter using the tags field and refreshes the list.
    ///
    /// Resetting the filter also clears the tags field.
    ///
    /// # Errors
    /// Returns [`NoteError::EmptySearchTag`] when activating with an empty
    /// tags field; the list is left untouched.
    pub fn toggle_filter(&mut self, book: &NoteBook) -> Result<(), NoteError> {
        let tag = self.tags_text().to_string();
        self.filter.toggle(&tag)?;
        if !self.filter.is_active() {
            self.tags_input.clear();
        }
        self.resync(book, None);
        Ok(())
    }

    /// Routes a key press: global actions first, then the focused pane.
    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> NotesKeyResult {
        if let Some(result) = self.handle_global_key(key, registry) {
            return result;
        }

        match self.focus {
            FocusContext::NoteList => self.handle_list_key(key, registry),
            FocusContext::Title | FocusContext::Tags => self.handle_input_key(key, registry),
            FocusContext::Body => self.handle_body_key(key, registry),
            FocusContext::Dialog => NotesKeyResult::Ignored,
        }
    }

    fn handle_global_key(
        &mut self,
        key: KeyEvent,
        registry: &CommandRegistry,
    ) -> Option<NotesKeyResult> {
        match registry.find_action(key)? {
            Action::Quit => Some(NotesKeyResult::Quit),
            Action::AddNote => Some(NotesKeyResult::AddNote),
            Action::DeleteNote => Some(NotesKeyResult::DeleteNote),
            Action::SaveNote => Some(NotesKeyResult::SaveNote),
            Action::ToggleTagSearch => Some(NotesKeyResult::ToggleTagSearch),
            Action::FocusNext => {
                self.focus_next();
                Some(NotesKeyResult::Consumed)
            }
            Action::FocusPrevious => {
                self.focus_previous();
                Some(NotesKeyResult::Consumed)
            }
            Action::FocusList => {
                self.set_focus(FocusContext::NoteList);
                Some(NotesKeyResult::Consumed)
            }
            _ => None,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> NotesKeyResult {
        if key.code == KeyCode::Char('q') && key.modifiers == KeyModifiers::NONE {
            return NotesKeyResult::Quit;
        }

        let before = self.list.selected_index();
        match registry.find_action(key) {
            Some(Action::NavigateUp) => self.list.select_previous(),
            Some(Action::NavigateDown) => self.list.select_next(),
            Some(Action::SelectFirst) => self.list.select_first(),
            Some(Action::SelectLast) => self.list.select_last(),
            Some(Action::Confirm) => {
                self.set_focus(FocusContext::Title);
                return NotesKeyResult::Consumed;
            }
            Some(Action::Cancel) => return NotesKeyResult::Quit,
            _ => return NotesKeyResult::Ignored,
        }

        if self.list.selected_index() == before {
            NotesKeyResult::Consumed
        } else {
            NotesKeyResult::SelectionChanged
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> NotesKeyResult {
        match registry.find_action(key) {
            Some(Action::Cancel) => {
                self.set_focus(FocusContext::NoteList);
                return NotesKeyResult::Consumed;
            }
            Some(Action::Confirm) if key.code == KeyCode::Enter => {
                self.focus_next();
                return NotesKeyResult::Consumed;
            }
            _ => {}
        }

        let input = if self.focus == FocusContext::Title {
            &mut self.title_input
        } else {
            &mut self.tags_input
        };
        if input.handle_key(key) {
            NotesKeyResult::Consumed
        } else {
            NotesKeyResult::Ignored
        }
    }

    fn handle_body_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> NotesKeyResult {
        if registry.find_action(key) == Some(Action::Cancel) {
            self.set_focus(FocusContext::NoteList);
            return NotesKeyResult::Consumed;
        }
        if self.body_editor.handle_key(key) {
            NotesKeyResult::Consumed
        } else {
            NotesKeyResult::Ignored
        }
    }
}

impl HasCommands for NotesScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut commands = Vec::new();
        if self.focus == FocusContext::NoteList {
            commands.extend(registry.keybind(Action::NavigateDown, "Next"));
            commands.extend(registry.keybind(Action::Confirm, "Edit"));
        } else {
            commands.extend(registry.keybind(Action::FocusList, "Notes"));
        }
        commands.extend(registry.keybind(Action::AddNote, "Add"));
        commands.extend(registry.keybind(Action::DeleteNote, "Delete"));
        commands.extend(registry.keybind(Action::SaveNote, "Save"));
        commands.extend(registry.keybind(Action::ToggleTagSearch, self.filter.toggle_label()));
        commands.extend(registry.keybind(Action::FocusNext, "Focus"));
        commands.extend(registry.keybind(Action::Quit, "Quit"));
        commands
    }
}

/// Renders [`NotesScreenState`] with header, list, editor and footer.
pub struct NotesScreen<'a> {
    book: &'a NoteBook,
    theme: &'a Theme,
    commands: Vec<Keybind>,
    location: Option<&'a str>,
    dialog_open: bool,
}

impl<'a> NotesScreen<'a> {
    /// Creates the screen widget; `commands` fill the footer.
    #[must_use]
    pub fn new(book: &'a NoteBook, theme: &'a Theme, commands: Vec<Keybind>) -> Self {
        Self {
            book,
            theme,
            commands,
            location: None,
            dialog_open: false,
        }
    }

    /// Shows where the notes are stored at the right of the footer.
    #[must_use]
    pub const fn location(mut self, location: &'a str) -> Self {
        self.location = Some(location);
        self
    }

    /// Marks the footer focus as the dialog while one is open.
    #[must_use]
    pub const fn dialog_open(mut self, open: bool) -> Self {
        self.dialog_open = open;
        self
    }
}

impl StatefulWidget for NotesScreen<'_> {
    type State = NotesScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let footer_height = u16::from(state.show_footer);
        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        let header = HeaderBar::new(NAME)
            .counts(state.list.len(), self.book.len())
            .filter_tag(state.filter.tag())
            .style(HeaderBarStyle::from_theme(self.theme));
        header.render(header_area, buf);

        let (list_area, editor_area) = split_content(content_area);
        NoteList::new(self.theme)
            .title(" Notes ")
            .render(list_area, buf, &mut state.list);
        render_editor(state, self.theme, editor_area, buf);

        if state.show_footer {
            let focus = if self.dialog_open {
                FocusContext::Dialog
            } else {
                state.focus
            };
            FooterBar::new(&self.commands)
                .focus_context(focus)
                .right_info(self.location)
                .style(FooterBarStyle::from_theme(self.theme))
                .render(footer_area, buf);
        }
    }
}

fn split_content(area: Rect) -> (Rect, Rect) {
    if area.width < STACKED_LAYOUT_BELOW {
        let [list, editor] =
            Layout::vertical([Constraint::Percentage(40), Constraint::Min(0)]).areas(area);
        return (list, editor);
    }

    let scaled = u32::from(area.width) * u32::from(LIST_WIDTH_PERCENT) / 100;
    let list_width = u16::try_from(scaled)
        .unwrap_or(area.width)
        .max(LIST_MIN_WIDTH);
    let [list, editor] =
        Layout::horizontal([Constraint::Length(list_width), Constraint::Min(0)]).areas(area);
    (list, editor)
}

fn render_editor(state: &mut NotesScreenState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let [title_area, tags_area, body_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
    ])
    .areas(area);

    state.title_input.render_themed(title_area, buf, theme);
    state.tags_input.render_themed(tags_area, buf, theme);
    state.body_editor.render_themed(body_area, buf, theme);
}
