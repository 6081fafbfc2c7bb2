//! Delete note use case implementation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{Note, NoteBook};
use crate::domain::errors::NoteError;
use crate::domain::ports::NoteRepositoryPort;

/// Removes the selected note.
#[derive(Clone)]
pub struct DeleteNoteUseCase {
    repository: Arc<dyn NoteRepositoryPort>,
}

impl DeleteNoteUseCase {
    /// Creates new delete use case.
    #[must_use]
    pub const fn new(repository: Arc<dyn NoteRepositoryPort>) -> Self {
        Self { repository }
    }

    /// Removes `selected` from the book and persists it.
    ///
    /// # Errors
    /// Returns [`NoteError::NoSelection`] when nothing is selected,
    /// [`NoteError::NotFound`] for an unknown title, or a storage error.
    pub async fn execute(
        &self,
        book: &mut NoteBook,
        selected: Option<&str>,
    ) -> Result<Note, NoteError> {
        let title = selected.ok_or(NoteError::no_selection("delete"))?;
        debug!(title = %title, "Deleting note");

        let note = book.remove(title)?;

        self.repository.save(book).await?;
        info!(title = %title, count = book.len(), "Note deleted");
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockNoteRepository;

    #[tokio::test]
    async fn test_delete_removes_from_book_and_store() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = DeleteNoteUseCase::new(repo.clone());
        let mut book = NoteBook::example();

        let removed = use_case
            .execute(&mut book, Some("Instructions"))
            .await
            .unwrap();

        assert!(removed.has_tag("instructions"));
        assert!(book.is_empty());
        assert_eq!(repo.stored(), Some(NoteBook::new()));
    }

    #[tokio::test]
    async fn test_no_selection_rejected() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = DeleteNoteUseCase::new(repo.clone());
        let mut book = NoteBook::example();

        let result = use_case.execute(&mut book, None).await;

        assert!(matches!(result, Err(NoteError::NoSelection { .. })));
        assert_eq!(book.len(), 1);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_title_rejected() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = DeleteNoteUseCase::new(repo);
        let mut book = NoteBook::example();

        let result = use_case.execute(&mut book, Some("missing")).await;

        assert!(matches!(result, Err(NoteError::NotFound { .. })));
    }
}
