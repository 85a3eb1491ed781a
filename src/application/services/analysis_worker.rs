use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::Instrument;

use crate::application::ports::{
    AnalysisRepository, FileLoader, FileLoaderError, RepositoryError, StagingStore,
    StagingStoreError,
};
use crate::domain::{AnalysisId, AnalysisReport, AnalysisStatus, DocumentAnalysis, StoragePath};

use super::document_analyzer::{DocumentAnalysisError, DocumentAnalyzer};

#[derive(Debug, Clone)]
pub struct AnalysisMessage {
    pub analysis_id: AnalysisId,
    pub storage_path: StoragePath,
}

/// Consumes queued uploads one at a time: fetch, extract, analyse, record.
pub struct AnalysisWorker {
    receiver: mpsc::Receiver<AnalysisMessage>,
    file_loader: Arc<dyn FileLoader>,
    analyzer: Arc<DocumentAnalyzer>,
    analysis_repository: Arc<dyn AnalysisRepository>,
    staging_store: Arc<dyn StagingStore>,
    processing_timeout: Duration,
}

impl AnalysisWorker {
    pub fn new(
        receiver: mpsc::Receiver<AnalysisMessage>,
        file_loader: Arc<dyn FileLoader>,
        analyzer: Arc<DocumentAnalyzer>,
        analysis_repository: Arc<dyn AnalysisRepository>,
        staging_store: Arc<dyn StagingStore>,
        processing_timeout: Duration,
    ) -> Self {
        Self {
            receiver,
            file_loader,
            analyzer,
            analysis_repository,
            staging_store,
            processing_timeout,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Analysis worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "analysis_job",
                analysis_id = %msg.analysis_id.as_uuid(),
                path = %msg.storage_path,
            );

            if let Err(e) = self.process_job(msg).instrument(span).await {
                tracing::error!(error = %e, "Analysis job failed");
            }
        }
        tracing::info!("Analysis worker stopped: channel closed");
    }

    pub async fn process_job(&self, msg: AnalysisMessage) -> Result<(), AnalysisWorkerError> {
        let analysis = match self.analysis_repository.get_by_id(msg.analysis_id).await {
            Ok(Some(analysis)) => analysis,
            Ok(None) => {
                self.discard_staged(&msg.storage_path).await;
                return Err(AnalysisWorkerError::NotFound(msg.analysis_id));
            }
            Err(e) => {
                self.discard_staged(&msg.storage_path).await;
                return Err(AnalysisWorkerError::Repository(e));
            }
        };

        if analysis.status != AnalysisStatus::Processing {
            tracing::warn!(status = %analysis.status, "Skipping analysis that is no longer processing");
            self.discard_staged(&msg.storage_path).await;
            return Ok(());
        }

        if let Err(e) = self
            .analysis_repository
            .mark_started(analysis.id, Utc::now())
            .await
        {
            self.discard_staged(&msg.storage_path).await;
            return Err(e.into());
        }

        tracing::debug!(filename = %analysis.filename, "Starting analysis pipeline");
        let started = Instant::now();

        let outcome = match tokio::time::timeout(
            self.processing_timeout,
            self.process_pipeline(&analysis, &msg.storage_path),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(AnalysisWorkerError::TimedOut(self.processing_timeout)),
        };

        self.discard_staged(&msg.storage_path).await;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(report) => {
                self.analysis_repository
                    .complete(analysis.id, &report, elapsed_ms)
                    .await?;
                tracing::info!(
                    risk_level = %report.risk_level,
                    risk_score = report.risk_score,
                    clauses = report.clauses.len(),
                    degraded = report.degraded,
                    processing_time_ms = elapsed_ms,
                    "Analysis completed"
                );
                Ok(())
            }
            Err(e) => {
                let error_msg = e.to_string();
                if let Err(update_err) = self.analysis_repository.fail(analysis.id, &error_msg).await
                {
                    tracing::warn!(error = %update_err, "Could not mark analysis as failed");
                }
                Err(e)
            }
        }
    }

    async fn process_pipeline(
        &self,
        analysis: &DocumentAnalysis,
        storage_path: &StoragePath,
    ) -> Result<AnalysisReport, AnalysisWorkerError> {
        if !storage_path.is_owned_by(&analysis.user_id) {
            return Err(AnalysisWorkerError::ForeignPath(storage_path.clone()));
        }

        let data = self.staging_store.fetch(storage_path).await?;
        tracing::debug!(bytes = data.len(), "Fetched staged file");

        let text = self.file_loader.extract_text(&data, analysis).await?;
        tracing::debug!(chars = text.chars().count(), "Text extracted");

        Ok(self.analyzer.analyze(&text, analysis.id).await?)
    }

    async fn discard_staged(&self, path: &StoragePath) {
        if let Err(e) = self.staging_store.delete(path).await {
            tracing::warn!(error = %e, path = %path, "Failed to delete staged file");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisWorkerError {
    #[error("analysis not found: {}", .0.as_uuid())]
    NotFound(AnalysisId),
    #[error("staged file {0} does not belong to the analysis owner")]
    ForeignPath(StoragePath),
    #[error("staging store: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("file loading: {0}")]
    FileLoading(#[from] FileLoaderError),
    #[error("{0}")]
    Analysis(#[from] DocumentAnalysisError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("processing timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
}
