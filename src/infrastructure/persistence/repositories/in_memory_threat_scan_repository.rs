use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, ThreatScanRepository};
use crate::domain::{ThreatScan, UserId};

#[derive(Default)]
pub struct InMemoryThreatScanRepository {
    scans: RwLock<Vec<ThreatScan>>,
}

impl InMemoryThreatScanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThreatScanRepository for InMemoryThreatScanRepository {
    #[tracing::instrument(skip(self, scan), fields(scan_id = %scan.id.as_uuid()))]
    async fn create(&self, scan: &ThreatScan) -> Result<(), RepositoryError> {
        self.scans.write().await.push(scan.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ThreatScan>, RepositoryError> {
        Ok(self
            .scans
            .read()
            .await
            .iter()
            .rev()
            .filter(|s| &s.user_id == user_id)
            .cloned()
            .collect())
    }
}
