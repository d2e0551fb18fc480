use async_trait::async_trait;
use quizlink_core::{ProfilePayload, QuizResult, UpsertOutcome, UserResponse};

use crate::error::StorageError;

/// Persistence for merged profile and quiz-result rows.
#[async_trait]
pub trait UserResponseStore: Send + Sync {
    /// Create the backing table if needed.
    async fn init_schema(&self) -> Result<(), StorageError>;

    /// Insert a profile row unconditionally. Returns the new row id.
    async fn insert_profile(&self, profile: &ProfilePayload) -> Result<i32, StorageError>;

    /// Overwrite the quiz fields of the oldest row with the same Facebook ID,
    /// or insert a quiz-only row when none exists.
    ///
    /// Newer rows sharing the Facebook ID (repeat profile submissions) are left
    /// without quiz data.
    ///
    /// Concurrent calls for the same Facebook ID are serialized.
    async fn upsert_quiz_result(&self, result: &QuizResult) -> Result<UpsertOutcome, StorageError>;

    /// Get a row by id.
    async fn get_user_response(&self, id: i32) -> Result<Option<UserResponse>, StorageError>;

    /// All rows carrying `facebook_id`, oldest first.
    async fn find_by_facebook_id(
        &self,
        facebook_id: &str,
    ) -> Result<Vec<UserResponse>, StorageError>;
}
