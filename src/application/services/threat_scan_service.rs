use std::sync::Arc;

use tokio::time::Instant;

use crate::application::ports::{
    LlmClient, LlmClientError, RepositoryError, ThreatScanRepository,
};
use crate::domain::{ScanType, ThreatScan, ThreatVerdict, UserId};

use super::prompts;
use super::reply_parser::parse_reply;

pub struct ThreatScanService {
    llm_client: Arc<dyn LlmClient>,
    scan_repository: Arc<dyn ThreatScanRepository>,
    model: String,
}

impl ThreatScanService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        scan_repository: Arc<dyn ThreatScanRepository>,
        model: String,
    ) -> Self {
        Self {
            llm_client,
            scan_repository,
            model,
        }
    }

    #[tracing::instrument(skip(self, content), fields(user_id = %user_id, scan_type = %scan_type))]
    pub async fn scan(
        &self,
        user_id: UserId,
        scan_type: ScanType,
        content: String,
    ) -> Result<ThreatScan, ThreatScanError> {
        if content.trim().is_empty() {
            return Err(ThreatScanError::EmptyContent);
        }

        let started = Instant::now();
        let request = prompts::threat_request(&self.model, scan_type.as_str(), &content);
        let reply = self.llm_client.complete(&request).await?;

        let verdict = match parse_reply::<ThreatVerdict>(&reply) {
            Ok(mut verdict) => {
                verdict.degraded = false;
                verdict
            }
            Err(e) => {
                tracing::warn!(error = %e, "Threat reply unusable, storing fail-open verdict");
                ThreatVerdict::parse_failure()
            }
        };

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let scan = ThreatScan::new(user_id, scan_type, content, verdict, elapsed_ms);
        self.scan_repository.create(&scan).await?;

        tracing::info!(
            scan_id = %scan.id.as_uuid(),
            is_threat = scan.verdict.is_threat,
            degraded = scan.verdict.degraded,
            "Threat scan completed"
        );
        Ok(scan)
    }

    pub async fn list(&self, user_id: &UserId) -> Result<Vec<ThreatScan>, ThreatScanError> {
        Ok(self.scan_repository.list_by_user(user_id).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThreatScanError {
    #[error("content must not be empty")]
    EmptyContent,
    #[error("model call failed: {0}")]
    Llm(#[from] LlmClientError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
