use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{AnalysisId, AnalysisReport, AnalysisStatus, DocumentAnalysis, UserId};

use super::RepositoryError;

/// Storage for analysis records. A record leaves `processing` exactly once;
/// `mark_started`, `complete` and `fail` reject records that already reached a
/// terminal state.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    async fn create(&self, analysis: &DocumentAnalysis) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: AnalysisId) -> Result<Option<DocumentAnalysis>, RepositoryError>;

    async fn list_by_user(&self, user_id: &UserId)
    -> Result<Vec<DocumentAnalysis>, RepositoryError>;

    async fn list_by_status(
        &self,
        status: AnalysisStatus,
    ) -> Result<Vec<DocumentAnalysis>, RepositoryError>;

    /// Records when the worker picked the job up.
    async fn mark_started(
        &self,
        id: AnalysisId,
        started_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    async fn complete(
        &self,
        id: AnalysisId,
        report: &AnalysisReport,
        processing_time_ms: u64,
    ) -> Result<(), RepositoryError>;

    async fn fail(&self, id: AnalysisId, error_message: &str) -> Result<(), RepositoryError>;
}
