mod note_repository_port;

pub use note_repository_port::NoteRepositoryPort;

#[cfg(test)]
pub mod mocks {
    pub use super::note_repository_port::mock::MockNoteRepository;
}
