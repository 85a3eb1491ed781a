use chrono::{DateTime, Utc};

use super::{AnalysisId, AnalysisReport, AnalysisStatus, ContentType, UserId};

#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub id: AnalysisId,
    pub user_id: UserId,
    pub filename: String,
    pub content_type: ContentType,
    pub file_size: u64,
    pub status: AnalysisStatus,
    pub report: Option<AnalysisReport>,
    pub error_message: Option<String>,
    pub processing_time_ms: Option<u64>,
    /// Set when the worker dequeues the job; `None` while still queued.
    pub started_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentAnalysis {
    pub fn new(user_id: UserId, filename: String, content_type: ContentType, file_size: u64) -> Self {
        let now = Utc::now();
        Self {
            id: AnalysisId::new(),
            user_id,
            filename,
            content_type,
            file_size,
            status: AnalysisStatus::Processing,
            report: None,
            error_message: None,
            processing_time_ms: None,
            started_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
