//! Ordered in-memory note collection.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::note::{Note, NoteTitle};
use crate::domain::errors::NoteError;

/// Mapping from note title to note, in insertion order.
///
/// Titles are unique. Order is the order shown in the note list and
/// written to disk; a rename moves the entry to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBook {
    entries: Vec<(String, Note)>,
}

impl NoteBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the book written on first run.
    #[must_use]
    pub fn example() -> Self {
        let mut book = Self::new();
        book.entries.push((
            "Instructions".to_string(),
            Note::new(
                vec!["instructions".to_string(), "start".to_string()],
                "This is an example note. Use this application to manage your notes.",
            ),
        ));
        book
    }

    /// Returns the number of notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the book has no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks whether a note has this exact title.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    /// Returns the note with this exact title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Note> {
        self.position(title).map(|i| &self.entries[i].1)
    }

    /// Iterates titles in store order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(title, _)| title.as_str())
    }

    /// Iterates `(title, note)` pairs in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Note)> {
        self.entries.iter().map(|(title, note)| (title.as_str(), note))
    }

    /// Inserts an empty note.
    ///
    /// # Errors
    /// Returns [`NoteError::DuplicateTitle`] if the title is taken.
    pub fn create(&mut self, title: &NoteTitle) -> Result<(), NoteError> {
        self.insert(title, Note::empty())
    }

    /// Inserts a note under a fresh title.
    ///
    /// # Errors
    /// Returns [`NoteError::DuplicateTitle`] if the title is taken.
    pub fn insert(&mut self, title: &NoteTitle, note: Note) -> Result<(), NoteError> {
        if self.contains(title.as_str()) {
            return Err(NoteError::duplicate(title.as_str()));
        }
        self.entries.push((title.as_str().to_string(), note));
        Ok(())
    }

    /// Removes a note and returns it.
    ///
    /// # Errors
    /// Returns [`NoteError::NotFound`] if no note has this title.
    pub fn remove(&mut self, title: &str) -> Result<Note, NoteError> {
        let index = self
            .position(title)
            .ok_or_else(|| NoteError::not_found(title))?;
        Ok(self.entries.remove(index).1)
    }

    /// Moves a note to a new title, keeping its tags and body.
    ///
    /// Renaming to the current title is a no-op.
    ///
    /// # Errors
    /// Returns [`NoteError::NotFound`] if `old` is missing and
    /// [`NoteError::DuplicateTitle`] if `new` is already used.
    pub fn rename(&mut self, old: &str, new: &NoteTitle) -> Result<(), NoteError> {
        let index = self.position(old).ok_or_else(|| NoteError::not_found(old))?;
        if old == new.as_str() {
            return Ok(());
        }
        if self.contains(new.as_str()) {
            return Err(NoteError::duplicate(new.as_str()));
        }
        let (_, note) = self.entries.remove(index);
        self.entries.push((new.as_str().to_string(), note));
        Ok(())
    }

    /// Replaces the tags and body of an existing note.
    ///
    /// # Errors
    /// Returns [`NoteError::NotFound`] if no note has this title.
    pub fn update(&mut self, title: &str, tags: Vec<String>, body: String) -> Result<(), NoteError> {
        let index = self
            .position(title)
            .ok_or_else(|| NoteError::not_found(title))?;
        let note = &mut self.entries[index].1;
        note.set_tags(tags);
        note.set_body(body);
        Ok(())
    }

    /// Returns titles of notes carrying `tag`, in store order.
    #[must_use]
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&str> {
        self.iter()
            .filter(|(_, note)| note.has_tag(tag))
            .map(|(title, _)| title)
            .collect()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|(t, _)| t == title)
    }
}

impl Serialize for NoteBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (title, note) in &self.entries {
            map.serialize_entry(title, note)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NoteBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NoteBookVisitor;

        impl<'de> Visitor<'de> for NoteBookVisitor {
            type Value = NoteBook;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping note titles to notes")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut book = NoteBook::new();
                while let Some((title, note)) = access.next_entry::<String, Note>()? {
                    if book.contains(&title) {
                        return Err(de::Error::custom(format!("duplicate note title `{title}`")));
                    }
                    book.entries.push((title, note));
                }
                Ok(book)
            }
        }

        deserializer.deserialize_map(NoteBookVisitor)
    }
}
