//! Note title list.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::presentation::theme::Theme;

/// Visible titles and the current selection.
#[derive(Debug, Clone, Default)]
pub struct NoteListState {
    titles: Vec<String>,
    list_state: ListState,
    focused: bool,
}

impl NoteListState {
    /// Creates an empty list with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visible titles.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Returns the number of visible titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Checks whether no titles are visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns the selected row.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Returns the selected title.
    #[must_use]
    pub fn selected_title(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|i| self.titles.get(i))
            .map(String::as_str)
    }

    /// Replaces the visible titles.
    ///
    /// The previous selection is kept when its title is still listed, or
    /// when `keep` names a listed title it is selected instead. Otherwise
    /// nothing is selected.
    pub fn set_titles(&mut self, titles: Vec<String>, keep: Option<&str>) {
        let wanted = keep
            .map(String::from)
            .or_else(|| self.selected_title().map(String::from));
        self.titles = titles;
        let index = wanted.and_then(|title| self.titles.iter().position(|t| *t == title));
        self.list_state.select(index);
    }

    /// Moves the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        if self.titles.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.titles.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        if self.titles.is_empty() {
            return;
        }
        let last = self.titles.len() - 1;
        let previous = match self.list_state.selected() {
            Some(0) | None => last,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(previous));
    }

    /// Selects the first title.
    pub fn select_first(&mut self) {
        if !self.titles.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    /// Selects the last title.
    pub fn select_last(&mut self) {
        if !self.titles.is_empty() {
            self.list_state.select(Some(self.titles.len() - 1));
        }
    }
}

/// Note list widget.
pub struct NoteList<'a> {
    theme: &'a Theme,
    title: String,
}

impl<'a> NoteList<'a> {
    /// Creates the widget.
    #[must_use]
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            title: " Notes ".to_string(),
        }
    }

    /// Sets the block title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl StatefulWidget for NoteList<'_> {
    type State = NoteListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(state.focused))
            .title(self.title);

        if state.titles.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Line::from(Span::styled(
                "No notes",
                self.theme.dimmed_style,
            )))
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = state
            .titles
            .iter()
            .map(|title| ListItem::new(Line::from(format!(" {title}"))))
            .collect();

        let highlight = if state.focused {
            self.theme.selection_style
        } else {
            Style::default().add_modifier(self.theme.selection_style.add_modifier)
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▌");

        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}
