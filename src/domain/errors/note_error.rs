//! Note operation error types.

use thiserror::Error;

use super::StorageError;

/// Note operation error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum NoteError {
    #[error("note title cannot be empty")]
    EmptyTitle,

    #[error("a note titled `{title}` already exists")]
    DuplicateTitle { title: String },

    #[error("no note titled `{title}`")]
    NotFound { title: String },

    #[error("no note selected to {operation}")]
    NoSelection { operation: &'static str },

    #[error("search tag cannot be empty")]
    EmptySearchTag,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl NoteError {
    /// Creates duplicate title error.
    #[must_use]
    pub fn duplicate(title: impl Into<String>) -> Self {
        Self::DuplicateTitle {
            title: title.into(),
        }
    }

    /// Creates not found error.
    #[must_use]
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
        }
    }

    /// Creates missing selection error.
    #[must_use]
    pub const fn no_selection(operation: &'static str) -> Self {
        Self::NoSelection { operation }
    }

    /// Returns whether the error was caused by user input rather than I/O.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
