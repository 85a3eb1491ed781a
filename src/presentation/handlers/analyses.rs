use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    AnalysisId, AnalysisReport, ChatMessage, DocumentAnalysis, StoragePath, UserId,
};
use crate::presentation::state::AppState;

use super::{ApiError, CurrentUser};

#[derive(Serialize)]
pub struct UploadResponse {
    pub analysis_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub id: String,
    pub filename: String,
    pub file_type: String,
    pub file_size: u64,
    pub status: String,
    pub report: Option<AnalysisReport>,
    pub error_message: Option<String>,
    pub processing_time_ms: Option<u64>,
    pub started_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<DocumentAnalysis> for AnalysisResponse {
    fn from(analysis: DocumentAnalysis) -> Self {
        Self {
            id: analysis.id.as_uuid().to_string(),
            filename: analysis.filename,
            file_type: analysis.content_type.as_mime().to_string(),
            file_size: analysis.file_size,
            status: analysis.status.as_str().to_string(),
            report: analysis.report,
            error_message: analysis.error_message,
            processing_time_ms: analysis.processing_time_ms,
            started_at: analysis.started_at.map(|t| t.to_rfc3339()),
            created_at: analysis.created_at.to_rfc3339(),
            updated_at: analysis.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Deserialize)]
pub struct TriggerRequest {
    pub analysis_id: String,
    pub file_path: String,
}

#[derive(Serialize)]
pub struct TriggerResponse {
    pub success: bool,
    pub analysis_id: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub role: String,
    pub content: String,
    pub is_voice: bool,
    pub created_at: String,
}

impl From<ChatMessage> for MessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id.as_uuid().to_string(),
            role: message.role.as_str().to_string(),
            content: message.content,
            is_voice: message.is_voice,
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

pub(super) fn parse_analysis_id(raw: &str) -> Result<AnalysisId, ApiError> {
    Uuid::parse_str(raw)
        .map(AnalysisId::from_uuid)
        .map_err(|_| ApiError::bad_request(format!("Invalid analysis ID: {}", raw)))
}

#[tracing::instrument(skip(state, multipart), fields(user_id = %user_id))]
pub async fn upload_handler(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart =
        multipart.map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;

    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.file_name().is_some() => break field,
            Ok(Some(_)) => continue,
            Ok(None) => return Err(ApiError::bad_request("No file uploaded")),
            Err(e) => {
                return Err(ApiError::new(
                    e.status(),
                    format!("Failed to read multipart: {}", e.body_text()),
                ));
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    tracing::debug!(filename = %filename, content_type = %content_type, "Processing file upload");

    // Reject on type before buffering the body.
    state
        .upload_service
        .policy()
        .validate(&content_type, 1)
        .map_err(ApiError::from)?;

    let data = field.bytes().await.map_err(|e| {
        ApiError::new(e.status(), format!("Failed to read file: {}", e.body_text()))
    })?;

    let analysis = state
        .upload_service
        .upload(user_id, filename, &content_type, data)
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(UploadResponse {
            analysis_id: analysis.id.as_uuid().to_string(),
            status: analysis.status.as_str().to_string(),
            message: "Document analysis started".to_string(),
        }),
    ))
}

#[tracing::instrument(skip(state, payload), fields(user_id = %user_id))]
pub async fn trigger_handler(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<TriggerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let analysis_id = parse_analysis_id(&request.analysis_id)?;

    state
        .upload_service
        .trigger(&user_id, analysis_id, StoragePath::from_raw(request.file_path))
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(TriggerResponse {
            success: true,
            analysis_id: analysis_id.as_uuid().to_string(),
        }),
    ))
}

#[tracing::instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_analyses_handler(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<AnalysisResponse>>, ApiError> {
    let analyses = state.analysis_repository.list_by_user(&user_id).await?;
    Ok(Json(analyses.into_iter().map(AnalysisResponse::from).collect()))
}

#[tracing::instrument(skip(state), fields(user_id = %user_id))]
pub async fn get_analysis_handler(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(analysis_id): Path<String>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let id = parse_analysis_id(&analysis_id)?;
    let analysis = find_owned(&state, &user_id, id).await?;
    Ok(Json(analysis.into()))
}

#[tracing::instrument(skip(state), fields(user_id = %user_id))]
pub async fn analysis_messages_handler(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(analysis_id): Path<String>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let id = parse_analysis_id(&analysis_id)?;
    let messages = state.voice_assistant_service.history(&user_id, id).await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

async fn find_owned(
    state: &AppState,
    user_id: &UserId,
    id: AnalysisId,
) -> Result<DocumentAnalysis, ApiError> {
    state
        .analysis_repository
        .get_by_id(id)
        .await?
        .filter(|a| a.is_owned_by(user_id))
        .ok_or_else(|| ApiError::not_found(format!("Analysis not found: {}", id.as_uuid())))
}
