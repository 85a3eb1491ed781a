use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::mpsc;

use crate::application::ports::{
    AnalysisRepository, RepositoryError, StagingStore, StagingStoreError,
};
use crate::domain::{
    AnalysisId, AnalysisStatus, DocumentAnalysis, StoragePath, UploadPolicy, UploadRejection,
    UserId,
};

use super::analysis_worker::AnalysisMessage;

/// Intake for documents: validate, stage, record, enqueue.
pub struct UploadService {
    analysis_repository: Arc<dyn AnalysisRepository>,
    staging_store: Arc<dyn StagingStore>,
    sender: mpsc::Sender<AnalysisMessage>,
    policy: UploadPolicy,
}

impl UploadService {
    pub fn new(
        analysis_repository: Arc<dyn AnalysisRepository>,
        staging_store: Arc<dyn StagingStore>,
        sender: mpsc::Sender<AnalysisMessage>,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            analysis_repository,
            staging_store,
            sender,
            policy,
        }
    }

    pub fn policy(&self) -> UploadPolicy {
        self.policy
    }

    #[tracing::instrument(skip(self, data), fields(user_id = %user_id, bytes = data.len()))]
    pub async fn upload(
        &self,
        user_id: UserId,
        filename: String,
        mime: &str,
        data: Bytes,
    ) -> Result<DocumentAnalysis, UploadError> {
        let size = data.len() as u64;
        let content_type = self.policy.validate(mime, size)?;

        let storage_path = StoragePath::new(&user_id, &filename);
        self.staging_store.store(&storage_path, data).await?;
        tracing::debug!(path = %storage_path, "File staged");

        let analysis = DocumentAnalysis::new(user_id, filename, content_type, size);
        if let Err(e) = self.analysis_repository.create(&analysis).await {
            self.discard_staged(&storage_path).await;
            return Err(e.into());
        }

        self.enqueue(analysis.id, storage_path).await?;

        tracing::info!(
            analysis_id = %analysis.id.as_uuid(),
            filename = %analysis.filename,
            "Document analysis enqueued"
        );
        Ok(analysis)
    }

    /// Re-queues an already staged file for a record that is still processing.
    #[tracing::instrument(skip(self), fields(user_id = %user_id, analysis_id = %analysis_id.as_uuid()))]
    pub async fn trigger(
        &self,
        user_id: &UserId,
        analysis_id: AnalysisId,
        storage_path: StoragePath,
    ) -> Result<(), UploadError> {
        let analysis = self
            .analysis_repository
            .get_by_id(analysis_id)
            .await?
            .filter(|a| a.is_owned_by(user_id))
            .ok_or(UploadError::NotFound(analysis_id))?;

        if analysis.status != AnalysisStatus::Processing {
            return Err(UploadError::NotProcessing(analysis.status));
        }

        if !storage_path.is_owned_by(user_id) {
            return Err(UploadError::ForeignPath(storage_path));
        }

        self.enqueue(analysis_id, storage_path).await
    }

    async fn enqueue(
        &self,
        analysis_id: AnalysisId,
        storage_path: StoragePath,
    ) -> Result<(), UploadError> {
        let msg = AnalysisMessage {
            analysis_id,
            storage_path: storage_path.clone(),
        };

        if let Err(e) = self.sender.send(msg).await {
            tracing::error!(error = %e, "Failed to enqueue analysis job");
            self.discard_staged(&storage_path).await;
            if let Err(fail_err) = self
                .analysis_repository
                .fail(analysis_id, "Analysis queue unavailable")
                .await
            {
                tracing::warn!(error = %fail_err, "Could not mark analysis as failed");
            }
            return Err(UploadError::QueueUnavailable);
        }

        Ok(())
    }

    async fn discard_staged(&self, path: &StoragePath) {
        if let Err(e) = self.staging_store.delete(path).await {
            tracing::warn!(error = %e, path = %path, "Failed to delete staged file");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),
    #[error("analysis not found: {}", .0.as_uuid())]
    NotFound(AnalysisId),
    #[error("analysis is {0}, not processing")]
    NotProcessing(AnalysisStatus),
    #[error("file not found: {0}")]
    ForeignPath(StoragePath),
    #[error("staging store: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("analysis queue full or worker unavailable")]
    QueueUnavailable,
}
