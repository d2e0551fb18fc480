use std::sync::Arc;

use quizlink_core::{
    EventKind, PayloadError, ProfilePayload, UpsertOutcome, WebhookEvent, parse_object_body,
};
use quizlink_storage::{StorageBackend, UserResponseStore};

use crate::ServiceError;

/// Result of a webhook delivery that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Event type outside the tracked set; nothing was written.
    Ignored { event_name: Option<String> },
    /// Quiz fields were merged into storage.
    Stored { kind: EventKind, facebook_id: String, outcome: UpsertOutcome },
}

pub struct IngestService {
    storage: Arc<StorageBackend>,
}

impl IngestService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Create the `user_responses` table if it is missing.
    pub async fn init_schema(&self) -> Result<(), ServiceError> {
        Ok(self.storage.init_schema().await?)
    }

    /// Store a Facebook profile submitted by the landing page.
    ///
    /// Always inserts; returns the new row id.
    pub async fn save_profile(&self, body: &[u8]) -> Result<i32, ServiceError> {
        let object = parse_object_body(body).ok_or(PayloadError::Empty)?;
        let profile = ProfilePayload::from_object(&object);

        let user_id = self.storage.insert_profile(&profile).await?;

        tracing::info!(
            user_id,
            facebook_id = profile.facebook_id.as_deref().unwrap_or("<none>"),
            "Facebook data saved"
        );
        Ok(user_id)
    }

    /// Process a ScoreApp webhook delivery.
    ///
    /// The decoded payload is logged in full at info level before any decision
    /// is made. Storage failures also log the raw body.
    pub async fn handle_webhook(&self, body: &[u8]) -> Result<WebhookOutcome, ServiceError> {
        let Some(object) = parse_object_body(body) else {
            tracing::error!("no data received in ScoreApp webhook");
            return Err(PayloadError::Empty.into());
        };
        tracing::info!(payload = %serde_json::Value::Object(object.clone()), "ScoreApp webhook received");

        let event = WebhookEvent::from_payload(object).inspect_err(|e| {
            tracing::error!(error = %e, "rejected ScoreApp webhook");
        })?;

        let (kind, result) = match event {
            WebhookEvent::Ignored { event_name } => {
                tracing::info!(event_name = event_name.as_deref().unwrap_or("null"), "ignoring event");
                return Ok(WebhookOutcome::Ignored { event_name });
            },
            WebhookEvent::Tracked { kind, result } => (kind, result),
        };

        let outcome = self.storage.upsert_quiz_result(&result).await.inspect_err(|e| {
            tracing::error!(
                error = %e,
                received = %String::from_utf8_lossy(body),
                "error processing ScoreApp webhook"
            );
        })?;

        tracing::info!(
            facebook_id = %result.facebook_id,
            event = %kind,
            row_id = outcome.row_id(),
            action = outcome.as_str(),
            "ScoreApp data stored"
        );
        Ok(WebhookOutcome::Stored { kind, facebook_id: result.facebook_id, outcome })
    }

    /// Read access for callers that need to inspect stored rows.
    #[must_use]
    pub fn storage(&self) -> &Arc<StorageBackend> {
        &self.storage
    }
}
