use std::fmt;

/// Which kind of record a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Playlist,
    Song,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::User => "User",
            Entity::Playlist => "Playlist",
            Entity::Song => "Song",
        };
        f.write_str(name)
    }
}

/// Failures a store operation can report. None of them leave partial state
/// behind: an operation either applies in full or not at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A required field was empty.
    #[error("{0}")]
    Validation(&'static str),
    /// A uniqueness rule would be broken.
    #[error("{0}")]
    Conflict(&'static str),
    #[error("{0} not found")]
    NotFound(Entity),
}

pub type StoreResult<T> = Result<T, StoreError>;
