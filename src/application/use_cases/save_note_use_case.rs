//! Save note use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::SaveNoteRequest;
use crate::domain::entities::{NoteBook, NoteTitle, parse_tags};
use crate::domain::errors::NoteError;
use crate::domain::ports::NoteRepositoryPort;

/// Writes the editor fields back into the selected note.
#[derive(Clone)]
pub struct SaveNoteUseCase {
    repository: Arc<dyn NoteRepositoryPort>,
}

impl SaveNoteUseCase {
    /// Creates new save use case.
    #[must_use]
    pub const fn new(repository: Arc<dyn NoteRepositoryPort>) -> Self {
        Self { repository }
    }

    /// Renames the selected note if the title field changed, then replaces
    /// its tags and body and persists the book.
    ///
    /// The selected title is used verbatim as the store key, so notes whose
    /// stored titles carry surrounding whitespace are still found. A blank
    /// title field keeps the current title. Returns the final title.
    ///
    /// # Errors
    /// Returns [`NoteError::NoSelection`] when nothing is selected,
    /// [`NoteError::DuplicateTitle`] when the new title is taken (nothing is
    /// changed in that case), or a storage error.
    pub async fn execute(
        &self,
        book: &mut NoteBook,
        request: SaveNoteRequest,
    ) -> Result<String, NoteError> {
        let current = request.selected.ok_or(NoteError::no_selection("save"))?;

        let title = match NoteTitle::parse(&request.title) {
            Ok(new_title) if new_title.as_str() != current => {
                book.rename(&current, &new_title).inspect_err(|e| {
                    warn!(from = %current, to = %new_title, error = %e, "Rename rejected");
                })?;
                debug!(from = %current, to = %new_title, "Note renamed");
                new_title.to_string()
            }
            _ => current,
        };

        let tags = parse_tags(&request.tags);
        debug!(title = %title, tags = tags.len(), "Updating note");
        book.update(&title, tags, request.body)?;

        self.repository.save(book).await?;
        info!(title = %title, "Note saved");
        Ok(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Note;
    use crate::domain::ports::mocks::MockNoteRepository;

    fn book() -> NoteBook {
        let mut book = NoteBook::new();
        book.insert(
            &NoteTitle::parse("draft").unwrap(),
            Note::new(vec!["old".into()], "first"),
        )
        .unwrap();
        book.insert(&NoteTitle::parse("other").unwrap(), Note::empty())
            .unwrap();
        book
    }

    #[tokio::test]
    async fn test_save_updates_tags_and_body() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = SaveNoteUseCase::new(repo.clone());
        let mut book = book();

        let request = SaveNoteRequest::new(Some("draft".into()))
            .with_title("draft")
            .with_tags("a, b")
            .with_body("second");
        let title = use_case.execute(&mut book, request).await.unwrap();

        assert_eq!(title.as_str(), "draft");
        let note = book.get("draft").unwrap();
        assert_eq!(note.tags(), ["a", "b"]);
        assert_eq!(note.body(), "second");
        assert_eq!(repo.stored(), Some(book));
    }

    #[tokio::test]
    async fn test_save_with_new_title_renames() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = SaveNoteUseCase::new(repo);
        let mut book = book();

        let request = SaveNoteRequest::new(Some("draft".into()))
            .with_title(" final ")
            .with_tags("old")
            .with_body("first");
        let title = use_case.execute(&mut book, request).await.unwrap();

        assert_eq!(title.as_str(), "final");
        assert!(!book.contains("draft"));
        let note = book.get("final").unwrap();
        assert_eq!(note.tags(), ["old"]);
        assert_eq!(note.body(), "first");
        assert_eq!(book.len(), 2);
    }

    #[tokio::test]
    async fn test_save_with_duplicate_title_changes_nothing() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = SaveNoteUseCase::new(repo.clone());
        let mut book = book();
        let before = book.clone();

        let request = SaveNoteRequest::new(Some("draft".into()))
            .with_title("other")
            .with_tags("new")
            .with_body("changed");
        let result = use_case.execute(&mut book, request).await;

        assert!(matches!(result, Err(NoteError::DuplicateTitle { .. })));
        assert_eq!(book, before);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_title_keeps_current() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = SaveNoteUseCase::new(repo);
        let mut book = book();

        let request = SaveNoteRequest::new(Some("draft".into())).with_body("kept title");
        let title = use_case.execute(&mut book, request).await.unwrap();

        assert_eq!(title.as_str(), "draft");
        assert_eq!(book.get("draft").unwrap().body(), "kept title");
        assert!(book.get("draft").unwrap().tags().is_empty());
    }

    #[tokio::test]
    async fn test_no_selection_rejected() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = SaveNoteUseCase::new(repo);
        let mut book = book();

        let result = use_case
            .execute(&mut book, SaveNoteRequest::new(None).with_title("x"))
            .await;

        assert!(matches!(result, Err(NoteError::NoSelection { .. })));
    }

    #[tokio::test]
    async fn test_untrimmed_stored_titles_can_be_saved() {
        let repo = Arc::new(MockNoteRepository::new());
        let use_case = SaveNoteUseCase::new(repo.clone());
        let mut book: NoteBook = serde_json::from_str(
            r#"{" padded ": {"tags": ["a"], "body": "one"}, "": {"tags": [], "body": "two"}}"#,
        )
        .unwrap();

        let request = SaveNoteRequest::new(Some(" padded ".into()))
            .with_title(" padded ")
            .with_tags("a")
            .with_body("one!");
        let title = use_case.execute(&mut book, request).await.unwrap();
        assert_eq!(title, "padded");
        assert!(!book.contains(" padded "));
        assert_eq!(book.get("padded").unwrap().body(), "one!");

        let request = SaveNoteRequest::new(Some(String::new())).with_body("two!");
        let title = use_case.execute(&mut book, request).await.unwrap();
        assert_eq!(title, "");
        assert_eq!(book.get("").unwrap().body(), "two!");
        assert_eq!(repo.save_count(), 2);
    }
}
