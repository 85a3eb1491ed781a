use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ChatRepository, RepositoryError};
use crate::domain::{AnalysisId, ChatMessage, UserId};

#[derive(Default)]
pub struct InMemoryChatRepository {
    messages: RwLock<Vec<ChatMessage>>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn append_messages(&self, messages: &[ChatMessage]) -> Result<(), RepositoryError> {
        self.messages.write().await.extend_from_slice(messages);
        Ok(())
    }

    async fn get_messages(
        &self,
        user_id: &UserId,
        analysis_id: AnalysisId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.read().await;
        let matching: Vec<&ChatMessage> = messages
            .iter()
            .filter(|m| &m.user_id == user_id && m.analysis_id == analysis_id)
            .collect();
        let skip = matching.len().saturating_sub(limit);
        Ok(matching.into_iter().skip(skip).cloned().collect())
    }
}
