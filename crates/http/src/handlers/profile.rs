use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::ProfileSavedResponse;

/// `POST /api/facebook-data`
///
/// Raw bytes instead of `Json<_>` so every undecodable body maps to the same 400.
pub async fn save_facebook_data(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ProfileSavedResponse>, ApiError> {
    let user_id = state.ingest_service.save_profile(&body).await?;
    Ok(Json(ProfileSavedResponse { success: true, user_id }))
}
