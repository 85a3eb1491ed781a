use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};

/// Scripted client: replies are handed out in order, then `default_reply` forever.
/// Every request is recorded for inspection.
pub struct MockLlmClient {
    replies: Mutex<VecDeque<Result<String, LlmClientError>>>,
    default_reply: String,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            default_reply: default_reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_replies(replies: Vec<Result<String, LlmClientError>>) -> Self {
        let client = Self::new("Mock answer");
        if let Ok(mut queue) = client.replies.lock() {
            queue.extend(replies);
        }
        client
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let next = self.replies.lock().ok().and_then(|mut q| q.pop_front());
        next.unwrap_or_else(|| Ok(self.default_reply.clone()))
    }
}
