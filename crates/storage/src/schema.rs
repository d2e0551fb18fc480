//! Idempotent schema setup for `user_responses`.

use sqlx::PgConnection;

use crate::error::StorageError;

const CREATE_USER_RESPONSES: &str = r#"
    CREATE TABLE IF NOT EXISTS user_responses (
        id SERIAL PRIMARY KEY,
        facebook_id VARCHAR(255),
        facebook_name VARCHAR(255),
        facebook_email VARCHAR(255),
        facebook_likes JSONB,
        scoreapp_data JSONB,
        scoreapp_quiz_id VARCHAR(255),
        scoreapp_result_url TEXT,
        scoreapp_finished_at TIMESTAMP,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

// Non-unique: profile ingest may store several rows for one Facebook ID.
const CREATE_FACEBOOK_ID_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_user_responses_facebook_id ON user_responses (facebook_id)";

/// Create the table and its lookup index if they are missing.
pub async fn init_schema(conn: &mut PgConnection) -> Result<(), StorageError> {
    for statement in [CREATE_USER_RESPONSES, CREATE_FACEBOOK_ID_INDEX] {
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }
    Ok(())
}
