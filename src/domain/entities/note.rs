//! Note entity and title/tag value handling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::NoteError;

/// Separator used when tags are shown in a single text field.
pub const TAG_SEPARATOR: &str = ", ";

/// Validated note title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteTitle(String);

impl NoteTitle {
    /// Creates a title from raw user input.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns [`NoteError::EmptyTitle`] if nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, NoteError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NoteError::EmptyTitle);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A note: ordered tags plus free text.
///
/// The title is not stored here; it is the key in the
/// [`NoteBook`](super::NoteBook).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, alias = "теги")]
    tags: Vec<String>,
    #[serde(default, alias = "текст")]
    body: String,
}

impl Note {
    /// Creates a note with the given tags and body.
    #[must_use]
    pub fn new(tags: Vec<String>, body: impl Into<String>) -> Self {
        Self {
            tags,
            body: body.into(),
        }
    }

    /// Creates a note without tags or text.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns tags in order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the note text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns tags joined for display in the tags field.
    #[must_use]
    pub fn tags_display(&self) -> String {
        format_tags(&self.tags)
    }

    /// Checks exact, case-sensitive tag membership.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Replaces the tags.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }

    /// Replaces the note text.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }
}

/// Parses the tags field, entries separated by [`TAG_SEPARATOR`].
///
/// Entries are trimmed, empty entries dropped and repeated tags collapsed
/// to their first occurrence. A bare comma is part of the tag, so any tag
/// list survives a round trip through [`format_tags`].
#[must_use]
pub fn parse_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in text
        .split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Joins tags into the single-line form used by the tags field.
#[must_use]
pub fn format_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}
