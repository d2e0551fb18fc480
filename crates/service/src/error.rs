//! Typed error enum for the service layer.

use quizlink_core::PayloadError;
use quizlink_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying payload and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (not configured, unreachable, statement error).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller sent a body we cannot act on.
    #[error("invalid payload: {0}")]
    Payload(#[from] PayloadError),
}

impl ServiceError {
    /// Whether the database could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_unavailable())
    }
}
