//! Error types for reading and writing snapshot documents.

use thiserror::Error;

/// Errors that can occur while loading or saving a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure, including a document without
    /// a `collections` sequence.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`SnapshotError`].
pub type Result<T> = std::result::Result<T, SnapshotError>;
