//! Error types for the service client.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by a [`crate::ProductService`] implementation.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The resource does not exist remotely.
    #[error("resource {0} not found")]
    NotFound(String),

    /// The update was made against a stale version.
    #[error("version conflict: sent {expected}, remote has {actual:?}")]
    VersionConflict {
        /// The version the update was made against.
        expected: u64,
        /// The remote's current version, if the service reported it.
        actual: Option<u64>,
    },

    /// The service rejected the action payload.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network or transport error.
    #[error("transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
        /// Whether the operation can be retried as-is.
        retryable: bool,
    },
}

impl ClientError {
    /// Creates a retryable transport error.
    pub fn transport_retryable(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            retryable: true,
        }
    }

    /// Creates a non-retryable transport error.
    pub fn transport_fatal(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            retryable: false,
        }
    }

    /// Returns true if retrying the same call can succeed.
    ///
    /// Version conflicts are deliberately not retryable as-is: the caller
    /// must refetch and recompute the action list first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport { retryable: true, .. })
    }
}
