//! Typed error enum for the storage layer.
//!
//! Lets callers tell a missing configuration or an unreachable database apart
//! from a failed statement without downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// `DATABASE_URL` is unset or blank.
    #[error("database connection string is not configured")]
    NotConfigured,

    /// Opening a connection failed.
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// SQL / transaction failure on an open connection.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be deserialized into domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schema initialization failure.
    #[error("schema initialization error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether the database could not be reached at all (config or connect).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::NotConfigured | Self::Connection(_))
    }
}

/// Statement errors only. Connection failures are wrapped explicitly by
/// [`crate::ConnectionProvider::connect`].
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}
