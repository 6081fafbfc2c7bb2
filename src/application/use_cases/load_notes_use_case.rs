//! Load notes use case implementation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::NoteBook;
use crate::domain::errors::StorageError;
use crate::domain::ports::NoteRepositoryPort;

/// Reads the note collection at start-up.
#[derive(Clone)]
pub struct LoadNotesUseCase {
    repository: Arc<dyn NoteRepositoryPort>,
}

impl LoadNotesUseCase {
    /// Creates new load use case.
    #[must_use]
    pub const fn new(repository: Arc<dyn NoteRepositoryPort>) -> Self {
        Self { repository }
    }

    /// Loads the stored notes.
    ///
    /// On first run (nothing stored) the example book is written and
    /// returned when `seed` is set; otherwise an empty book is returned.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or parsed, or if writing
    /// the example book fails.
    pub async fn execute(&self, seed: bool) -> Result<NoteBook, StorageError> {
        debug!(location = %self.repository.location(), "Loading notes");

        if let Some(book) = self.repository.load().await? {
            info!(count = book.len(), "Notes loaded");
            return Ok(book);
        }

        if !seed {
            info!("No notes stored yet");
            return Ok(NoteBook::new());
        }

        let book = NoteBook::example();
        self.repository.save(&book).await?;
        info!(location = %self.repository.location(), "Example notes written");
        Ok(book)
    }
}
