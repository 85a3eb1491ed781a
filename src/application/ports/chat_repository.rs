use async_trait::async_trait;

use crate::domain::{AnalysisId, ChatMessage, UserId};

use super::RepositoryError;

/// Append-only log of assistant conversations about an analysis.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn append_messages(&self, messages: &[ChatMessage]) -> Result<(), RepositoryError>;

    async fn get_messages(
        &self,
        user_id: &UserId,
        analysis_id: AnalysisId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, RepositoryError>;
}
