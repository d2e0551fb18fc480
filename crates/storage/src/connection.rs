//! One-connection-per-operation provider.
//!
//! Every storage call opens a fresh connection, uses it and closes it. There is
//! no pool and no connection reuse between requests.

use sqlx::{Connection, PgConnection};

use crate::error::StorageError;

#[derive(Clone)]
pub struct ConnectionProvider {
    database_url: Option<String>,
}

impl ConnectionProvider {
    /// Blank connection strings are treated as absent.
    #[must_use]
    pub fn new(database_url: Option<String>) -> Self {
        Self { database_url: database_url.filter(|url| !url.trim().is_empty()) }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.database_url.is_some()
    }

    /// Open a live connection.
    ///
    /// Both failure modes are logged here; callers only need to map the error.
    pub async fn connect(&self) -> Result<PgConnection, StorageError> {
        let Some(url) = self.database_url.as_deref() else {
            tracing::error!("DATABASE_URL environment variable not set");
            return Err(StorageError::NotConfigured);
        };
        PgConnection::connect(url).await.map_err(|e| {
            tracing::error!(error = %e, "database connection failed");
            StorageError::Connection(e)
        })
    }
}

// The connection string carries credentials.
impl std::fmt::Debug for ConnectionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionProvider")
            .field("configured", &self.is_configured())
            .finish()
    }
}
