//! JSON file note repository.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::entities::NoteBook;
use crate::domain::errors::StorageError;
use crate::domain::ports::NoteRepositoryPort;

const INDENT: &[u8] = b"    ";

/// Stores the whole note book in one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonNoteRepository {
    path: PathBuf,
}

impl JsonNoteRepository {
    /// Creates repository backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, err: &std::io::Error) -> StorageError {
        StorageError::io(self.path.display().to_string(), err)
    }
}

/// Serializes notes as UTF-8 JSON with four-space indentation.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_pretty_json(book: &NoteBook) -> Result<Vec<u8>, StorageError> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    book.serialize(&mut serializer)
        .map_err(|e| StorageError::Serialize(e.to_string()))?;
    Ok(out)
}

#[async_trait]
impl NoteRepositoryPort for JsonNoteRepository {
    async fn load(&self) -> Result<Option<NoteBook>, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Notes file does not exist");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(&e)),
        };

        serde_json::from_str::<NoteBook>(&content)
            .map(Some)
            .map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "Notes file is not valid");
                StorageError::parse(self.path.display().to_string(), &e)
            })
    }

    async fn save(&self, book: &NoteBook) -> Result<(), StorageError> {
        let content = to_pretty_json(book)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(&e))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, content)
            .await
            .map_err(|e| self.io_error(&e))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.io_error(&e))?;

        debug!(path = %self.path.display(), count = book.len(), "Notes written");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Note, NoteTitle};
    use tempfile::tempdir;

    fn book() -> NoteBook {
        let mut book = NoteBook::new();
        book.insert(
            &NoteTitle::parse("Инструкция").unwrap(),
            Note::new(vec!["инструкция".into(), "начало".into()], "Пример"),
        )
        .unwrap();
        book.insert(&NoteTitle::parse("second").unwrap(), Note::empty())
            .unwrap();
        book
    }

    #[tokio::test]
    async fn test_missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let repo = JsonNoteRepository::new(dir.path().join("notes.json"));

        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let repo = JsonNoteRepository::new(dir.path().join("nested").join("notes.json"));

        repo.save(&book()).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(book()));
        assert!(!repo.temp_path().exists());
    }

    #[tokio::test]
    async fn test_file_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let repo = JsonNoteRepository::new(&path);

        repo.save(&book()).await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("{\n    \"Инструкция\": {\n        \"tags\": [\n"));
        assert!(content.contains("\"body\": \"Пример\""));
        assert!(!content.contains("\\u"));
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_file() {
        let dir = tempdir().unwrap();
        let repo = JsonNoteRepository::new(dir.path().join("notes.json"));

        repo.save(&book()).await.unwrap();
        let mut smaller = book();
        smaller.remove("second").unwrap();
        repo.save(&smaller).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(smaller));
    }

    #[tokio::test]
    async fn test_legacy_file_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes_data.json");
        std::fs::write(
            &path,
            r#"{"Инструкция": {"теги": ["инструкция", "начало"], "текст": "Пример"}}"#,
        )
        .unwrap();
        let repo = JsonNoteRepository::new(&path);

        let loaded = repo.load().await.unwrap().unwrap();

        assert_eq!(loaded.get("Инструкция").unwrap().tags(), ["инструкция", "начало"]);
        assert_eq!(loaded.get("Инструкция").unwrap().body(), "Пример");
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "{ not json").unwrap();
        let repo = JsonNoteRepository::new(&path);

        assert!(matches!(
            repo.load().await,
            Err(StorageError::Parse { .. })
        ));
    }
}
