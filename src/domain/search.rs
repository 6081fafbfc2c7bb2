//! Tag search state.

use crate::domain::entities::NoteBook;
use crate::domain::errors::NoteError;

/// Label of the search toggle while no filter is active.
pub const SEARCH_LABEL: &str = "Search by tag";
/// Label of the search toggle while a filter is active.
pub const RESET_LABEL: &str = "Reset search";

/// Tag filter applied to the note list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    /// Every note is listed.
    #[default]
    Inactive,
    /// Only notes carrying this tag are listed.
    Active(String),
}

impl TagFilter {
    /// Flips the filter.
    ///
    /// When inactive, activates it for the trimmed `tag`. When active,
    /// resets it and ignores `tag`.
    ///
    /// # Errors
    /// Returns [`NoteError::EmptySearchTag`] when activating with a blank tag.
    pub fn toggle(&mut self, tag: &str) -> Result<(), NoteError> {
        match self {
            Self::Active(_) => {
                *self = Self::Inactive;
                Ok(())
            }
            Self::Inactive => {
                let tag = tag.trim();
                if tag.is_empty() {
                    return Err(NoteError::EmptySearchTag);
                }
                *self = Self::Active(tag.to_string());
                Ok(())
            }
        }
    }

    /// Checks whether a tag filter is applied.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Returns the filtered tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Active(tag) => Some(tag),
            Self::Inactive => None,
        }
    }

    /// Label for the toggle action in its current state.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        match self {
            Self::Active(_) => RESET_LABEL,
            Self::Inactive => SEARCH_LABEL,
        }
    }

    /// Returns the titles visible under this filter.
    #[must_use]
    pub fn apply(&self, book: &NoteBook) -> Vec<String> {
        match self {
            Self::Inactive => book.titles().map(String::from).collect(),
            Self::Active(tag) => book
                .filter_by_tag(tag)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
