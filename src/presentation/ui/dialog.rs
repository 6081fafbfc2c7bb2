//! Modal message dialog.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::errors::NoteError;
use crate::presentation::theme::Theme;

const MAX_DIALOG_WIDTH: u16 = 60;
const MIN_DIALOG_WIDTH: u16 = 24;

/// Severity of a dialog.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Warning,
    Error,
}

impl DialogLevel {
    /// Returns the dialog title for this level.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Info => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    fn color(self, theme: &Theme) -> Color {
        match self {
            Self::Info => theme.accent,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Modal message shown over the screen until dismissed.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub level: DialogLevel,
    pub message: String,
}

impl Dialog {
    /// Creates a dialog.
    #[must_use]
    pub fn new(level: DialogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Creates an information dialog.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DialogLevel::Info, message)
    }

    /// Creates a warning dialog.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DialogLevel::Warning, message)
    }

    /// Creates an error dialog.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DialogLevel::Error, message)
    }

    /// Maps a failed note operation to the dialog shown to the user.
    #[must_use]
    pub fn from_note_error(error: &NoteError) -> Self {
        match error {
            NoteError::EmptyTitle => Self::warning("Note title cannot be empty!"),
            NoteError::DuplicateTitle { .. } => {
                Self::warning("A note with this title already exists!")
            }
            NoteError::NoSelection { operation } => {
                Self::warning(format!("Select a note to {operation}!"))
            }
            NoteError::EmptySearchTag => Self::warning("Enter a tag to search!"),
            NoteError::NotFound { title } => Self::warning(format!("Note \"{title}\" not found!")),
            NoteError::Storage(e) => Self::error(format!("Failed to write notes: {e}")),
        }
    }
}

/// Renders a [`Dialog`] centered over the given area.
pub struct DialogWidget<'a> {
    dialog: &'a Dialog,
    theme: &'a Theme,
}

impl<'a> DialogWidget<'a> {
    /// Creates the widget.
    #[must_use]
    pub fn new(dialog: &'a Dialog, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let message_width = u16::try_from(self.dialog.message.width()).unwrap_or(u16::MAX);
        let width = message_width
            .saturating_add(4)
            .clamp(MIN_DIALOG_WIDTH, MAX_DIALOG_WIDTH)
            .min(area.width);

        let inner_width = width.saturating_sub(2).max(1);
        let lines = message_width.div_ceil(inner_width).max(1);
        // Borders, message, blank line, hint.
        let height = lines.saturating_add(4).min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for DialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        if popup.area() == 0 {
            return;
        }

        let color = self.dialog.level.color(self.theme);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.dialog.level.title()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));

        let text = vec![
            Line::from(self.dialog.message.as_str()),
            Line::raw(""),
            Line::from(Span::styled("Enter: OK", self.theme.dimmed_style)),
        ];

        Clear.render(popup, buf);
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;

    #[test]
    fn test_validation_errors_are_warnings() {
        let dialog = Dialog::from_note_error(&NoteError::duplicate("x"));
        assert_eq!(dialog.level, DialogLevel::Warning);
        assert_eq!(dialog.message, "A note with this title already exists!");

        let dialog = Dialog::from_note_error(&NoteError::no_selection("delete"));
        assert_eq!(dialog.message, "Select a note to delete!");
    }

    #[test]
    fn test_storage_errors_are_errors() {
        let error = NoteError::Storage(StorageError::Serialize("boom".into()));
        let dialog = Dialog::from_note_error(&error);
        assert_eq!(dialog.level, DialogLevel::Error);
        assert!(dialog.message.starts_with("Failed to write notes"));
    }

    #[test]
    fn test_popup_is_centered_and_fits() {
        let dialog = Dialog::info("Note saved!");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);

        let popup = DialogWidget::new(&dialog, &theme).popup_area(area);

        assert_eq!(popup.width, MIN_DIALOG_WIDTH);
        assert_eq!(popup.height, 5);
        assert_eq!(popup.x, (80 - MIN_DIALOG_WIDTH) / 2);
        assert!(area.contains(popup.as_position()));
    }

    #[test]
    fn test_render_shows_message() {
        let dialog = Dialog::warning("Enter a tag to search!");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        DialogWidget::new(&dialog, &theme).render(area, &mut buf);

        let screen: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(screen.contains("Enter a tag to search!"));
        assert!(screen.contains("Warning"));
    }
}
