//! UserResponseStore implementation for PgStorage.

use super::*;

use crate::schema;
use crate::traits::UserResponseStore;
use async_trait::async_trait;
use quizlink_core::{ProfilePayload, QuizResult, UpsertOutcome};

#[async_trait]
impl UserResponseStore for PgStorage {
    async fn init_schema(&self) -> Result<(), StorageError> {
        let mut conn = self.provider.connect().await?;
        let result = schema::init_schema(&mut conn).await;
        release(conn).await;
        result
    }

    async fn insert_profile(&self, profile: &ProfilePayload) -> Result<i32, StorageError> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query_scalar::<_, i32>(
            "INSERT INTO user_responses (facebook_id, facebook_name, facebook_email, facebook_likes)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&profile.facebook_id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.likes)
        .fetch_one(&mut conn)
        .await
        .map_err(StorageError::from);
        release(conn).await;
        result
    }

    async fn upsert_quiz_result(&self, result: &QuizResult) -> Result<UpsertOutcome, StorageError> {
        let mut conn = self.provider.connect().await?;
        let outcome = upsert_in_transaction(&mut conn, result).await;
        release(conn).await;
        outcome
    }

    async fn get_user_response(&self, id: i32) -> Result<Option<UserResponse>, StorageError> {
        let mut conn = self.provider.connect().await?;
        let row = sqlx::query(&format!(
            "SELECT {USER_RESPONSE_COLUMNS} FROM user_responses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut conn)
        .await;
        release(conn).await;
        row?.map(|r| row_to_user_response(&r)).transpose()
    }

    async fn find_by_facebook_id(
        &self,
        facebook_id: &str,
    ) -> Result<Vec<UserResponse>, StorageError> {
        let mut conn = self.provider.connect().await?;
        let rows = sqlx::query(&format!(
            "SELECT {USER_RESPONSE_COLUMNS} FROM user_responses WHERE facebook_id = $1 ORDER BY id"
        ))
        .bind(facebook_id)
        .fetch_all(&mut conn)
        .await;
        release(conn).await;
        rows?.iter().map(row_to_user_response).collect()
    }
}

/// Lookup-then-branch inside one transaction.
///
/// The advisory lock is keyed on the Facebook ID and held until commit, so two
/// deliveries for an unseen ID cannot both take the insert branch.
async fn upsert_in_transaction(
    conn: &mut PgConnection,
    result: &QuizResult,
) -> Result<UpsertOutcome, StorageError> {
    let mut tx = conn.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
        .bind(&result.facebook_id)
        .execute(&mut *tx)
        .await?;

    let existing: Option<i32> = sqlx::query_scalar(
        "SELECT id FROM user_responses WHERE facebook_id = $1 ORDER BY id LIMIT 1",
    )
    .bind(&result.facebook_id)
    .fetch_optional(&mut *tx)
    .await?;

    let outcome = match existing {
        Some(id) => {
            sqlx::query(
                "UPDATE user_responses
                 SET scoreapp_data = $1, scoreapp_quiz_id = $2,
                     scoreapp_result_url = $3, scoreapp_finished_at = $4
                 WHERE id = $5",
            )
            .bind(&result.raw_payload)
            .bind(&result.quiz_id)
            .bind(&result.result_url)
            .bind(result.finished_at)
            .bind(id)
            .execute(&mut *tx)
            .await?;
            UpsertOutcome::Updated(id)
        },
        None => {
            let id: i32 = sqlx::query_scalar(
                "INSERT INTO user_responses (
                     facebook_id, scoreapp_data, scoreapp_quiz_id,
                     scoreapp_result_url, scoreapp_finished_at
                 )
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id",
            )
            .bind(&result.facebook_id)
            .bind(&result.raw_payload)
            .bind(&result.quiz_id)
            .bind(&result.result_url)
            .bind(result.finished_at)
            .fetch_one(&mut *tx)
            .await?;
            UpsertOutcome::Inserted(id)
        },
    };

    tx.commit().await?;
    Ok(outcome)
}
