use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{AnalysisRepository, RepositoryError};
use crate::domain::{AnalysisId, AnalysisReport, AnalysisStatus, DocumentAnalysis, UserId};

#[derive(Default)]
pub struct InMemoryAnalysisRepository {
    records: RwLock<HashMap<AnalysisId, DocumentAnalysis>>,
}

impl InMemoryAnalysisRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn transition(
        &self,
        id: AnalysisId,
        status: AnalysisStatus,
        apply: impl FnOnce(&mut DocumentAnalysis),
    ) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_uuid().to_string()))?;

        if record.status.is_terminal() {
            return Err(RepositoryError::InvalidTransition {
                from: record.status,
                to: status,
            });
        }

        record.status = status;
        record.updated_at = Utc::now();
        apply(record);
        Ok(())
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    #[instrument(skip(self, analysis), fields(analysis_id = %analysis.id.as_uuid()))]
    async fn create(&self, analysis: &DocumentAnalysis) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        if records.contains_key(&analysis.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "analysis {} already exists",
                analysis.id.as_uuid()
            )));
        }
        records.insert(analysis.id, analysis.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: AnalysisId) -> Result<Option<DocumentAnalysis>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<DocumentAnalysis>, RepositoryError> {
        let mut analyses: Vec<DocumentAnalysis> = self
            .records
            .read()
            .await
            .values()
            .filter(|a| a.is_owned_by(user_id))
            .cloned()
            .collect();
        analyses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(analyses)
    }

    async fn list_by_status(
        &self,
        status: AnalysisStatus,
    ) -> Result<Vec<DocumentAnalysis>, RepositoryError> {
        let mut analyses: Vec<DocumentAnalysis> = self
            .records
            .read()
            .await
            .values()
            .filter(|a| a.status == status)
            .cloned()
            .collect();
        analyses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(analyses)
    }

    #[instrument(skip(self), fields(analysis_id = %id.as_uuid()))]
    async fn mark_started(
        &self,
        id: AnalysisId,
        started_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        self.transition(id, AnalysisStatus::Processing, |record| {
            record.started_at = Some(started_at);
        })
        .await
    }

    #[instrument(skip(self, report), fields(analysis_id = %id.as_uuid()))]
    async fn complete(
        &self,
        id: AnalysisId,
        report: &AnalysisReport,
        processing_time_ms: u64,
    ) -> Result<(), RepositoryError> {
        self.transition(id, AnalysisStatus::Completed, |record| {
            record.report = Some(report.clone());
            record.processing_time_ms = Some(processing_time_ms);
        })
        .await
    }

    #[instrument(skip(self, error_message), fields(analysis_id = %id.as_uuid()))]
    async fn fail(&self, id: AnalysisId, error_message: &str) -> Result<(), RepositoryError> {
        self.transition(id, AnalysisStatus::Failed, |record| {
            record.error_message = Some(error_message.to_string());
        })
        .await
    }
}
