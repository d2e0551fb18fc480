use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of `user_responses`: a Facebook profile merged with its ScoreApp result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub facebook_id: Option<String>,
    pub facebook_name: Option<String>,
    pub facebook_email: Option<String>,
    pub facebook_likes: Option<Value>,
    pub scoreapp_data: Option<Value>,
    pub scoreapp_quiz_id: Option<String>,
    pub scoreapp_result_url: Option<String>,
    pub scoreapp_finished_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// Quiz-result columns written by the webhook upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    /// Merge key; never empty.
    pub facebook_id: String,
    /// Entire webhook body as received.
    pub raw_payload: Value,
    pub quiz_id: Option<String>,
    pub result_url: Option<String>,
    pub finished_at: Option<NaiveDateTime>,
}

/// Outcome of [`QuizResult`] persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// An existing row with the same Facebook ID was overwritten.
    Updated(i32),
    /// No row matched; a new one was created.
    Inserted(i32),
}

impl UpsertOutcome {
    #[must_use]
    pub fn row_id(self) -> i32 {
        match self {
            Self::Updated(id) | Self::Inserted(id) => id,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Updated(_) => "updated",
            Self::Inserted(_) => "inserted",
        }
    }
}
