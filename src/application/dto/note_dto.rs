//! Note editing DTOs.

/// Contents of the editor fields when the user saves a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveNoteRequest {
    /// Title of the note selected in the list, if any.
    pub selected: Option<String>,
    /// Raw content of the title field.
    pub title: String,
    /// Raw content of the tags field.
    pub tags: String,
    /// Content of the body editor.
    pub body: String,
}

impl SaveNoteRequest {
    /// Creates request for the selected note.
    #[must_use]
    pub fn new(selected: Option<String>) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    /// Sets title field content.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets tags field content.
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Sets body content.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}
