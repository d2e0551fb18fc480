use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;

use quizlink_service::WebhookOutcome;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::WebhookResponse;

/// `POST /webhooks/scoreapp`
///
/// Ignored event types still answer 200 so ScoreApp does not redeliver them.
pub async fn scoreapp_webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    let message = match state.ingest_service.handle_webhook(&body).await? {
        WebhookOutcome::Ignored { event_name } => {
            Some(format!("Event {} ignored", event_name.as_deref().unwrap_or("null")))
        },
        WebhookOutcome::Stored { .. } => None,
    };
    Ok(Json(WebhookResponse { success: true, message }))
}
