//! Error types raised by snapshot store implementations.

use thiserror::Error;

/// Errors surfaced by snapshot store implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("snapshot store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("corrupted snapshot: {0}")]
    CorruptedData(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
