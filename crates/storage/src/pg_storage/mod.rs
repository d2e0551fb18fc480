//! PostgreSQL storage backend using sqlx.
//!
//! Each operation opens its own connection through [`ConnectionProvider`].

mod user_responses;

use chrono::NaiveDateTime;
use quizlink_core::UserResponse;
use sqlx::{Connection, PgConnection, Row};

use crate::connection::ConnectionProvider;
use crate::error::StorageError;

#[derive(Clone, Debug)]
pub struct PgStorage {
    provider: ConnectionProvider,
}

impl PgStorage {
    /// Does not connect; the first operation does.
    #[must_use]
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }
}

pub(crate) const USER_RESPONSE_COLUMNS: &str = "id, facebook_id, facebook_name, facebook_email, \
     facebook_likes, scoreapp_data, scoreapp_quiz_id, scoreapp_result_url, \
     scoreapp_finished_at, created_at";

pub(crate) fn row_to_user_response(
    row: &sqlx::postgres::PgRow,
) -> Result<UserResponse, StorageError> {
    let id: i32 = row.try_get("id")?;
    let created_at: Option<NaiveDateTime> = row.try_get("created_at")?;
    let created_at = created_at.ok_or_else(|| StorageError::DataCorruption {
        context: format!("user_responses row {id} has no created_at"),
        source: "NULL created_at".into(),
    })?;
    Ok(UserResponse {
        id,
        facebook_id: row.try_get("facebook_id")?,
        facebook_name: row.try_get("facebook_name")?,
        facebook_email: row.try_get("facebook_email")?,
        facebook_likes: row.try_get("facebook_likes")?,
        scoreapp_data: row.try_get("scoreapp_data")?,
        scoreapp_quiz_id: row.try_get("scoreapp_quiz_id")?,
        scoreapp_result_url: row.try_get("scoreapp_result_url")?,
        scoreapp_finished_at: row.try_get("scoreapp_finished_at")?,
        created_at,
    })
}

/// Close a connection after use. A failed close never fails the request.
pub(crate) async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "error closing database connection");
    }
}
