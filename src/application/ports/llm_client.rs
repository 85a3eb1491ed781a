use async_trait::async_trait;

/// One chat-completion call: an optional system instruction plus a single user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: Option<String>,
    pub user: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("[Code: {status}] {body}")]
    Http { status: u16, body: String },
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmClientError {
    /// Failures worth another attempt after a back-off.
    pub fn is_transient(&self) -> bool {
        match self {
            LlmClientError::RateLimited => true,
            LlmClientError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
