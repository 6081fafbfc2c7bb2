//! Create note use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{NoteBook, NoteTitle};
use crate::domain::errors::NoteError;
use crate::domain::ports::NoteRepositoryPort;

/// Adds an empty note under a new title.
#[derive(Clone)]
pub struct CreateNoteUseCase {
    repository: Arc<dyn NoteRepositoryPort>,
}

impl CreateNoteUseCase {
    /// Creates new create use case.
    #[must_use]
    pub const fn new(repository: Arc<dyn NoteRepositoryPort>) -> Self {
        Self { repository }
    }

    /// Validates `raw_title`, inserts an empty note and persists the book.
    ///
    /// # Errors
    /// Returns error if the title is empty or taken, or if persisting fails.
    /// On a persistence failure the note stays in `book`.
    pub async fn execute(
        &self,
        book: &mut NoteBook,
        raw_title: &str,
    ) -> Result<NoteTitle, NoteError> {
        let title = NoteTitle::parse(raw_title)?;
        debug!(title = %title, "Creating note");

        book.create(&title).inspect_err(|e| {
            warn!(title = %title, error = %e, "Note not created");
        })?;

        self.repository.save(book).await?;
        info!(title = %title, count = book.len(), "Note created");
        Ok(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockNoteRepository;

    #[tokio::test]
    async fn test_create_adds_one_and_persists() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = CreateNoteUseCase::new(repo.clone());
        let mut book = NoteBook::example();

        let title = use_case.execute(&mut book, "  Groceries ").await.unwrap();

        assert_eq!(title.as_str(), "Groceries");
        assert_eq!(book.len(), 2);
        assert_eq!(repo.stored(), Some(book));
    }

    #[tokio::test]
    async fn test_duplicate_rejected_without_write() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = CreateNoteUseCase::new(repo.clone());
        let mut book = NoteBook::example();

        let result = use_case.execute(&mut book, "Instructions").await;

        assert!(matches!(result, Err(NoteError::DuplicateTitle { .. })));
        assert_eq!(book.len(), 1);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = CreateNoteUseCase::new(repo.clone());
        let mut book = NoteBook::new();

        let result = use_case.execute(&mut book, "   ").await;

        assert!(matches!(result, Err(NoteError::EmptyTitle)));
        assert!(book.is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_note_in_memory() {
        let repo = Arc::new(MockNoteRepository::new());
        repo.fail_saves();
        let use_case = CreateNoteUseCase::new(repo);
        let mut book = NoteBook::new();

        let result = use_case.execute(&mut book, "draft").await;

        assert!(matches!(result, Err(NoteError::Storage(_))));
        assert!(book.contains("draft"));
    }
}
