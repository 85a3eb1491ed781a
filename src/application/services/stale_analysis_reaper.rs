use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::application::ports::{AnalysisRepository, RepositoryError};
use crate::domain::AnalysisStatus;

pub const STALE_ANALYSIS_ERROR: &str = "Analysis did not finish in time and was abandoned";

/// Fails records stuck in `processing`, e.g. after a crash mid-job. Only
/// records the worker has picked up are considered; queue wait never counts.
pub struct StaleAnalysisReaper {
    analysis_repository: Arc<dyn AnalysisRepository>,
    stale_after: Duration,
    interval: Duration,
}

impl StaleAnalysisReaper {
    pub fn new(
        analysis_repository: Arc<dyn AnalysisRepository>,
        stale_after: Duration,
        interval: Duration,
    ) -> Self {
        Self {
            analysis_repository,
            stale_after,
            interval,
        }
    }

    pub async fn run(self) {
        tracing::info!(
            stale_after_secs = self.stale_after.as_secs(),
            "Stale analysis reaper started"
        );
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            match self.reap(Utc::now()).await {
                Ok(0) => {}
                Ok(reaped) => tracing::warn!(reaped, "Failed stale analyses"),
                Err(e) => tracing::error!(error = %e, "Stale analysis sweep failed"),
            }
        }
    }

    /// Fails every record whose job started more than `stale_after` before `now`.
    pub async fn reap(&self, now: DateTime<Utc>) -> Result<usize, RepositoryError> {
        let stale_after = chrono::Duration::from_std(self.stale_after)
            .unwrap_or_else(|_| chrono::Duration::MAX);
        let processing = self
            .analysis_repository
            .list_by_status(AnalysisStatus::Processing)
            .await?;

        let mut reaped = 0;
        for analysis in processing
            .into_iter()
            .filter(|a| {
                a.started_at
                    .is_some_and(|started| now.signed_duration_since(started) > stale_after)
            })
        {
            match self
                .analysis_repository
                .fail(analysis.id, STALE_ANALYSIS_ERROR)
                .await
            {
                Ok(()) => reaped += 1,
                Err(RepositoryError::InvalidTransition { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(reaped)
    }
}
