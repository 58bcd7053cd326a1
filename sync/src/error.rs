//! Error types for host access and snapshot/apply orchestration.

use schema_merge_core::SnapshotError;
use thiserror::Error;

/// Errors that can occur while talking to the host or running a workflow.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Reading, parsing, or writing a snapshot document failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Transport-level HTTP failure (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The host answered with a non-success status.
    #[error("host returned {status}: {message}")]
    HostError {
        /// HTTP status code.
        status: u16,
        /// First error message reported by the host, or the raw body.
        message: String,
    },

    /// The host answered successfully but with an unexpected payload.
    #[error("invalid host response: {0}")]
    InvalidResponse(String),

    /// Host connection settings are missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// File I/O failure outside snapshot documents (e.g. config files).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure outside snapshot documents.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON encoding failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience alias for results with [`SyncError`].
pub type Result<T> = std::result::Result<T, SyncError>;
