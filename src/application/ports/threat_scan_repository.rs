use async_trait::async_trait;

use crate::domain::{ThreatScan, UserId};

use super::RepositoryError;

#[async_trait]
pub trait ThreatScanRepository: Send + Sync {
    async fn create(&self, scan: &ThreatScan) -> Result<(), RepositoryError>;

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ThreatScan>, RepositoryError>;
}
