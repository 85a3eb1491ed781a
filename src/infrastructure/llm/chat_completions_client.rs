use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use crate::presentation::config::LlmSettings;

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// HTTP 429 and 5xx responses are retried up to `max_retries` times with a linear
/// back-off; every other failure is returned on the first attempt.
pub struct ChatCompletionsClient {
    client: Client,
    base_url: String,
    api_key: String,
    max_retries: u32,
    retry_backoff: Duration,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionsClient {
    fn build_messages(request: &CompletionRequest) -> Vec<ChatMessage<'_>> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.user,
        });
        messages
    }

    async fn send_once(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &request.model,
            messages: Self::build_messages(request),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::Http { status, body });
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    #[tracing::instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        let mut attempt: u32 = 0;
        loop {
            match self.send_once(request).await {
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.retry_backoff * attempt;
                    tracing::warn!(
                        error = %e,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Transient LLM failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }
}

pub fn create_chat_completions_client(
    settings: &LlmSettings,
) -> Result<ChatCompletionsClient, LlmClientError> {
    let base_url = settings.base_url.trim_end_matches('/').to_string();
    if base_url.is_empty() {
        return Err(LlmClientError::InvalidResponse(
            "llm.base_url is required".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()
        .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

    Ok(ChatCompletionsClient {
        client,
        base_url,
        api_key: settings.api_key.clone(),
        max_retries: settings.max_retries,
        retry_backoff: Duration::from_millis(settings.retry_backoff_ms),
    })
}
