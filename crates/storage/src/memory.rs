//! In-process store with the same semantics as [`crate::PgStorage`].
//!
//! Used by the service and HTTP test suites, which run without PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use quizlink_core::{ProfilePayload, QuizResult, UpsertOutcome, UserResponse};
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::traits::UserResponseStore;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    rows: Mutex<Vec<UserResponse>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }
}

fn next_id(rows: &[UserResponse]) -> i32 {
    rows.last().map_or(1, |row| row.id.saturating_add(1))
}

#[async_trait]
impl UserResponseStore for MemoryStorage {
    async fn init_schema(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn insert_profile(&self, profile: &ProfilePayload) -> Result<i32, StorageError> {
        let mut rows = self.rows.lock().await;
        let id = next_id(&rows);
        rows.push(UserResponse {
            id,
            facebook_id: profile.facebook_id.clone(),
            facebook_name: profile.name.clone(),
            facebook_email: profile.email.clone(),
            facebook_likes: Some(profile.likes.clone()),
            scoreapp_data: None,
            scoreapp_quiz_id: None,
            scoreapp_result_url: None,
            scoreapp_finished_at: None,
            created_at: Utc::now().naive_utc(),
        });
        Ok(id)
    }

    async fn upsert_quiz_result(&self, result: &QuizResult) -> Result<UpsertOutcome, StorageError> {
        let mut rows = self.rows.lock().await;
        let existing = rows
            .iter_mut()
            .find(|row| row.facebook_id.as_deref() == Some(result.facebook_id.as_str()));
        if let Some(row) = existing {
            row.scoreapp_data = Some(result.raw_payload.clone());
            row.scoreapp_quiz_id = result.quiz_id.clone();
            row.scoreapp_result_url = result.result_url.clone();
            row.scoreapp_finished_at = result.finished_at;
            return Ok(UpsertOutcome::Updated(row.id));
        }
        let id = next_id(&rows);
        rows.push(UserResponse {
            id,
            facebook_id: Some(result.facebook_id.clone()),
            facebook_name: None,
            facebook_email: None,
            facebook_likes: None,
            scoreapp_data: Some(result.raw_payload.clone()),
            scoreapp_quiz_id: result.quiz_id.clone(),
            scoreapp_result_url: result.result_url.clone(),
            scoreapp_finished_at: result.finished_at,
            created_at: Utc::now().naive_utc(),
        });
        Ok(UpsertOutcome::Inserted(id))
    }

    async fn get_user_response(&self, id: i32) -> Result<Option<UserResponse>, StorageError> {
        Ok(self.rows.lock().await.iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_facebook_id(
        &self,
        facebook_id: &str,
    ) -> Result<Vec<UserResponse>, StorageError> {
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .filter(|row| row.facebook_id.as_deref() == Some(facebook_id))
            .cloned()
            .collect())
    }
}
