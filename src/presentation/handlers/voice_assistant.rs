use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::services::AnalysisContext;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::analyses::parse_analysis_id;
use super::{ApiError, CurrentUser};

#[derive(Deserialize)]
pub struct VoiceAssistantRequest {
    pub query: String,
    pub analysis_id: String,
    #[serde(default)]
    pub analysis_data: AnalysisContext,
}

#[derive(Serialize)]
pub struct VoiceAssistantResponse {
    pub response: String,
}

#[tracing::instrument(skip(state, payload), fields(user_id = %user_id))]
pub async fn voice_assistant_handler(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<VoiceAssistantRequest>, JsonRejection>,
) -> Result<Json<VoiceAssistantResponse>, ApiError> {
    let Json(request) = payload?;
    let analysis_id = parse_analysis_id(&request.analysis_id)?;
    tracing::debug!(query = %sanitize_prompt(&request.query), "Processing assistant query");

    let response = state
        .voice_assistant_service
        .ask(&user_id, analysis_id, &request.query, &request.analysis_data)
        .await?;

    Ok(Json(VoiceAssistantResponse { response }))
}
