use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Failed to write {key} to storage: {reason}")]
    Write { key: String, reason: String },
    #[error("Failed to serialize session: {0}")]
    Serialize(String),
}
