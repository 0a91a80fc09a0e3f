//! Persistence: key-value stores and the tournament repository on top of them.

mod kv;
mod repository;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use repository::{TournamentRepository, TOURNAMENTS_KEY};

use crate::models::{TournamentError, TournamentId};

/// Errors from loading or saving tournaments.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    /// Stored data is not valid JSON for the expected shape.
    Json(serde_json::Error),
    NotFound(TournamentId),
    AlreadyExists(TournamentId),
    /// The requested change was rejected by the tournament rules.
    Tournament(TournamentError),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "Storage I/O error: {}", e),
            StorageError::Json(e) => write!(f, "Stored data is invalid: {}", e),
            StorageError::NotFound(id) => write!(f, "Tournament {} not found", id),
            StorageError::AlreadyExists(id) => write!(f, "Tournament {} already exists", id),
            StorageError::Tournament(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
            StorageError::Tournament(e) => Some(e),
            StorageError::NotFound(_) | StorageError::AlreadyExists(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

impl From<TournamentError> for StorageError {
    fn from(e: TournamentError) -> Self {
        StorageError::Tournament(e)
    }
}
