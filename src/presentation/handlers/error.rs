use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::RepositoryError;
use crate::application::services::{
    ThreatScanError, UploadError, VoiceAssistantError,
};
use crate::domain::UploadRejection;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error carried out of a handler as `{status, {"error": message}}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.message, "Request rejected");
        }
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => Self::not_found(msg),
            RepositoryError::InvalidTransition { .. } => {
                Self::new(StatusCode::CONFLICT, error.to_string())
            }
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<UploadRejection> for ApiError {
    fn from(rejection: UploadRejection) -> Self {
        let status = match rejection {
            UploadRejection::UnsupportedType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            UploadRejection::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadRejection::Empty => StatusCode::BAD_REQUEST,
        };
        Self::new(status, rejection.to_string())
    }
}

impl From<UploadError> for ApiError {
    fn from(error: UploadError) -> Self {
        match error {
            UploadError::Rejected(rejection) => rejection.into(),
            UploadError::NotFound(_) | UploadError::ForeignPath(_) => {
                Self::not_found(error.to_string())
            }
            UploadError::NotProcessing(_) => Self::new(StatusCode::CONFLICT, error.to_string()),
            UploadError::QueueUnavailable => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, error.to_string())
            }
            UploadError::Repository(e) => e.into(),
            UploadError::Staging(e) => Self::internal(e.to_string()),
        }
    }
}

impl From<ThreatScanError> for ApiError {
    fn from(error: ThreatScanError) -> Self {
        match error {
            ThreatScanError::EmptyContent => Self::bad_request(error.to_string()),
            ThreatScanError::Repository(e) => e.into(),
            ThreatScanError::Llm(e) => Self::internal(e.to_string()),
        }
    }
}

impl From<VoiceAssistantError> for ApiError {
    fn from(error: VoiceAssistantError) -> Self {
        match error {
            VoiceAssistantError::EmptyQuery => Self::bad_request(error.to_string()),
            VoiceAssistantError::AnalysisNotFound(_) => Self::not_found(error.to_string()),
            VoiceAssistantError::Repository(e) => e.into(),
            VoiceAssistantError::Llm(e) => Self::internal(e.to_string()),
        }
    }
}
