//! Multi-line note body editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

const PLACEHOLDER_TEXT: &str = "Note text...";

/// Multi-line editor for the note body.
pub struct BodyEditor<'a> {
    textarea: TextArea<'a>,
    focused: bool,
    scroll_row: usize,
    scroll_col: usize,
}

impl Default for BodyEditor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyEditor<'_> {
    /// Creates an empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            focused: false,
            scroll_row: 0,
            scroll_col: 0,
        }
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns the full text, lines joined with `\n`.
    #[must_use]
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Checks whether every line is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(String::is_empty)
    }

    /// Replaces the text and puts the cursor at the top.
    pub fn set_content(&mut self, text: &str) {
        self.textarea = TextArea::new(text.split('\n').map(String::from).collect());
        self.scroll_row = 0;
        self.scroll_col = 0;
    }

    /// Removes all text.
    pub fn clear(&mut self) {
        self.set_content("");
    }

    /// Applies an editing key. Returns whether the key was used.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let word = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.textarea.insert_char(c);
            }
            KeyCode::Char('w' | 'h') if key.modifiers == KeyModifiers::CONTROL => {
                self.textarea.delete_word();
            }
            KeyCode::Enter if !word => {
                self.textarea.insert_newline();
            }
            KeyCode::Backspace if word => {
                self.textarea.delete_word();
            }
            KeyCode::Backspace => {
                self.textarea.delete_char();
            }
            KeyCode::Delete if word => {
                self.textarea.delete_next_word();
            }
            KeyCode::Delete => {
                self.textarea.delete_next_char();
            }
            KeyCode::Left if word => self.textarea.move_cursor(CursorMove::WordBack),
            KeyCode::Left => self.textarea.move_cursor(CursorMove::Back),
            KeyCode::Right if word => self.textarea.move_cursor(CursorMove::WordForward),
            KeyCode::Right => self.textarea.move_cursor(CursorMove::Forward),
            KeyCode::Up => self.textarea.move_cursor(CursorMove::Up),
            KeyCode::Down => self.textarea.move_cursor(CursorMove::Down),
            KeyCode::Home => self.textarea.move_cursor(CursorMove::Head),
            KeyCode::End => self.textarea.move_cursor(CursorMove::End),
            _ => return false,
        }
        true
    }

    /// Cursor as `(row, display column)`.
    fn cursor_position(&self) -> (usize, usize) {
        let (row, col) = self.textarea.cursor();
        let display_col = self
            .textarea
            .lines()
            .get(row)
            .map_or(0, |line| {
                let end = line
                    .char_indices()
                    .nth(col)
                    .map_or(line.len(), |(i, _)| i);
                line[..end].width()
            });
        (row, display_col)
    }

    fn update_scroll(&mut self, height: usize, width: usize) {
        let (row, col) = self.cursor_position();
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if height > 0 && row >= self.scroll_row + height {
            self.scroll_row = row + 1 - height;
        }
        if col < self.scroll_col {
            self.scroll_col = col;
        } else if width > 0 && col >= self.scroll_col + width {
            self.scroll_col = col + 1 - width;
        }
    }

    /// Renders lines manually; the textarea only holds the editing state.
    pub fn render_themed(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(self.focused))
            .title(" Text ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.is_empty() && !self.focused {
            Paragraph::new(PLACEHOLDER_TEXT)
                .style(theme.dimmed_style)
                .render(inner, buf);
            return;
        }

        self.update_scroll(inner.height as usize, inner.width as usize);

        let lines: Vec<Line> = self
            .textarea
            .lines()
            .iter()
            .map(|l| Line::raw(l.as_str()))
            .collect();
        Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .scroll((
                u16::try_from(self.scroll_row).unwrap_or(u16::MAX),
                u16::try_from(self.scroll_col).unwrap_or(u16::MAX),
            ))
            .render(inner, buf);

        if self.focused {
            let (row, col) = self.cursor_position();
            let x = u16::try_from(col - self.scroll_col).unwrap_or(u16::MAX);
            let y = u16::try_from(row - self.scroll_row).unwrap_or(u16::MAX);
            if x < inner.width && y < inner.height {
                buf[(inner.x + x, inner.y + y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}
