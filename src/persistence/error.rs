//! Persistence errors.

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Errors surfaced by stores and the save-slot manager.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("maximum of {max} save slots reached")]
    SlotsFull { max: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
