use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Header colors.
#[allow(missing_docs)]
pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub info: Style,
    pub filter: Style,
}

impl HeaderBarStyle {
    /// Builds the style from a theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            info: theme.key_style,
            filter: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            info: Style::default().fg(Color::DarkGray),
            filter: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Header showing the app name, note count and active filter.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    visible: usize,
    total: usize,
    filter_tag: Option<&'a str>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Creates the header.
    #[must_use]
    pub fn new(app_name: &'a str) -> Self {
        Self {
            app_name,
            visible: 0,
            total: 0,
            filter_tag: None,
            style: HeaderBarStyle::default(),
        }
    }

    /// Sets visible and total note counts.
    #[must_use]
    pub const fn counts(mut self, visible: usize, total: usize) -> Self {
        self.visible = visible;
        self.total = total;
        self
    }

    /// Sets the active filter tag.
    #[must_use]
    pub const fn filter_tag(mut self, tag: Option<&'a str>) -> Self {
        self.filter_tag = tag;
        self
    }

    /// Sets the style.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn count_text(&self) -> String {
        match (self.filter_tag, self.total) {
            (Some(_), total) => format!(" {} of {total} notes ", self.visible),
            (None, 1) => " 1 note ".to_string(),
            (None, total) => format!(" {total} notes "),
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(self.count_text(), self.style.info),
        ]);
        Paragraph::new(left_line).render(area, buf);

        if let Some(tag) = self.filter_tag {
            let text = format!(" tag: {tag} ");
            let width = u16::try_from(unicode_width::UnicodeWidthStr::width(text.as_str()))
                .unwrap_or(u16::MAX);
            if width < area.width {
                let right_area = Rect::new(area.right() - width, area.y, width, 1);
                Paragraph::new(Span::styled(text, self.style.filter)).render(right_area, buf);
            }
        }
    }
}
