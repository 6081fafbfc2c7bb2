//! Note repository port definition.

use async_trait::async_trait;

use crate::domain::entities::NoteBook;
use crate::domain::errors::StorageError;

/// Port for loading and saving the whole note collection.
#[async_trait]
pub trait NoteRepositoryPort: Send + Sync {
    /// Loads the stored notes, or `None` if nothing has been stored yet.
    async fn load(&self) -> Result<Option<NoteBook>, StorageError>;

    /// Overwrites the stored notes with `book`.
    async fn save(&self, book: &NoteBook) -> Result<(), StorageError>;

    /// Human readable location of the store.
    fn location(&self) -> String;
}
