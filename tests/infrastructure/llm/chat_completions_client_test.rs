use clausewise::application::ports::{CompletionRequest, LlmClient, LlmClientError};
use clausewise::infrastructure::llm::create_chat_completions_client;
use clausewise::presentation::config::LlmSettings;

use crate::helpers::{TEST_MODEL, start_mock_completions_server};

const OK_BODY: &str = r#"{"choices": [{"message": {"role": "assistant", "content": "Hello from the model"}}]}"#;

fn settings(base_url: &str, max_retries: u32) -> LlmSettings {
    LlmSettings {
        base_url: format!("{base_url}/"),
        api_key: "test-key".to_string(),
        ocr_model: TEST_MODEL.to_string(),
        analysis_model: TEST_MODEL.to_string(),
        assistant_model: TEST_MODEL.to_string(),
        threat_model: TEST_MODEL.to_string(),
        request_timeout_secs: 5,
        max_retries,
        retry_backoff_ms: 1,
    }
}

fn request() -> CompletionRequest {
    CompletionRequest {
        model: TEST_MODEL.to_string(),
        system: Some("You are terse.".to_string()),
        user: "Say hello".to_string(),
        max_tokens: 16,
        temperature: 0.2,
    }
}

#[tokio::test]
async fn given_successful_response_when_completing_then_first_choice_is_returned() {
    let (base_url, shutdown) = start_mock_completions_server(vec![(200, OK_BODY)]).await;
    let client = create_chat_completions_client(&settings(&base_url, 0)).unwrap();

    let reply = client.complete(&request()).await.unwrap();

    assert_eq!(reply, "Hello from the model");
    let _ = shutdown.send(());
}

#[tokio::test]
async fn given_rate_limit_then_success_when_completing_then_request_is_retried() {
    let (base_url, shutdown) = start_mock_completions_server(vec![
        (429, r#"{"error": "slow down"}"#),
        (503, "overloaded"),
        (200, OK_BODY),
    ])
    .await;
    let client = create_chat_completions_client(&settings(&base_url, 2)).unwrap();

    let reply = client.complete(&request()).await.unwrap();

    assert_eq!(reply, "Hello from the model");
    let _ = shutdown.send(());
}

#[tokio::test]
async fn given_persistent_server_error_when_retries_exhausted_then_http_error_carries_body() {
    let (base_url, shutdown) =
        start_mock_completions_server(vec![(500, "upstream exploded")]).await;
    let client = create_chat_completions_client(&settings(&base_url, 1)).unwrap();

    let err = client.complete(&request()).await.unwrap_err();

    assert!(matches!(err, LlmClientError::Http { status: 500, .. }));
    assert_eq!(err.to_string(), "[Code: 500] upstream exploded");
    let _ = shutdown.send(());
}

#[tokio::test]
async fn given_client_error_when_completing_then_it_is_not_retried() {
    let (base_url, shutdown) = start_mock_completions_server(vec![
        (400, "bad model"),
        (200, OK_BODY),
    ])
    .await;
    let client = create_chat_completions_client(&settings(&base_url, 3)).unwrap();

    let err = client.complete(&request()).await.unwrap_err();

    assert!(matches!(err, LlmClientError::Http { status: 400, .. }));
    assert!(!err.is_transient());
    let _ = shutdown.send(());
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_invalid_response_is_returned() {
    let (base_url, shutdown) =
        start_mock_completions_server(vec![(200, r#"{"choices": []}"#)]).await;
    let client = create_chat_completions_client(&settings(&base_url, 0)).unwrap();

    let err = client.complete(&request()).await.unwrap_err();

    assert!(matches!(err, LlmClientError::InvalidResponse(_)));
    let _ = shutdown.send(());
}

#[test]
fn given_blank_base_url_when_creating_client_then_it_is_rejected() {
    let mut settings = settings("", 0);
    settings.base_url = String::new();

    assert!(create_chat_completions_client(&settings).is_err());
}
