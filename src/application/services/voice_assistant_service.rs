use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{
    AnalysisRepository, ChatRepository, LlmClient, LlmClientError, RepositoryError,
};
use crate::domain::{AnalysisId, ChatMessage, MessageRole, UserId};

use super::prompts;

pub const MESSAGE_HISTORY_LIMIT: usize = 100;

/// Analysis fields the caller already holds and passes back as context.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisContext {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub clauses: Option<Value>,
    #[serde(default)]
    pub obligations: Option<Value>,
    #[serde(default)]
    pub actions: Option<Value>,
}

impl AnalysisContext {
    pub fn render(&self) -> String {
        format!(
            "\nDocument Summary: {}\nRisk Level: {}\nKey Clauses: {}\nObligations: {}\nRecommended Actions: {}\n",
            self.summary.as_deref().unwrap_or("Not available"),
            self.risk_level.as_deref().unwrap_or("Not assessed"),
            render_json(self.clauses.as_ref()),
            render_json(self.obligations.as_ref()),
            render_json(self.actions.as_ref()),
        )
    }
}

fn render_json(value: Option<&Value>) -> String {
    match value {
        Some(Value::Null) | None => "[]".to_string(),
        Some(v) => v.to_string(),
    }
}

pub struct VoiceAssistantService {
    llm_client: Arc<dyn LlmClient>,
    analysis_repository: Arc<dyn AnalysisRepository>,
    chat_repository: Arc<dyn ChatRepository>,
    model: String,
}

impl VoiceAssistantService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        analysis_repository: Arc<dyn AnalysisRepository>,
        chat_repository: Arc<dyn ChatRepository>,
        model: String,
    ) -> Self {
        Self {
            llm_client,
            analysis_repository,
            chat_repository,
            model,
        }
    }

    #[tracing::instrument(skip(self, query, context), fields(user_id = %user_id, analysis_id = %analysis_id.as_uuid()))]
    pub async fn ask(
        &self,
        user_id: &UserId,
        analysis_id: AnalysisId,
        query: &str,
        context: &AnalysisContext,
    ) -> Result<String, VoiceAssistantError> {
        if query.trim().is_empty() {
            return Err(VoiceAssistantError::EmptyQuery);
        }
        self.ensure_owned(user_id, analysis_id).await?;

        let request = prompts::assistant_request(&self.model, &context.render(), query);
        let answer = self.llm_client.complete(&request).await?;

        let exchange = [
            ChatMessage::new(
                user_id.clone(),
                analysis_id,
                MessageRole::User,
                query.to_string(),
                true,
            ),
            ChatMessage::new(
                user_id.clone(),
                analysis_id,
                MessageRole::Assistant,
                answer.clone(),
                true,
            ),
        ];
        self.chat_repository.append_messages(&exchange).await?;

        Ok(answer)
    }

    pub async fn history(
        &self,
        user_id: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<Vec<ChatMessage>, VoiceAssistantError> {
        self.ensure_owned(user_id, analysis_id).await?;
        Ok(self
            .chat_repository
            .get_messages(user_id, analysis_id, MESSAGE_HISTORY_LIMIT)
            .await?)
    }

    async fn ensure_owned(
        &self,
        user_id: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<(), VoiceAssistantError> {
        match self.analysis_repository.get_by_id(analysis_id).await? {
            Some(analysis) if analysis.is_owned_by(user_id) => Ok(()),
            _ => Err(VoiceAssistantError::AnalysisNotFound(analysis_id)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceAssistantError {
    #[error("query must not be empty")]
    EmptyQuery,
    #[error("analysis not found: {}", .0.as_uuid())]
    AnalysisNotFound(AnalysisId),
    #[error("model call failed: {0}")]
    Llm(#[from] LlmClientError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
