use std::time::Duration;

use serde_json::json;

use clausewise::client::{ApiClient, ClientError};
use clausewise::domain::{AnalysisId, AnalysisStatus, ScanType, UploadPolicy, UploadRejection};
use clausewise::infrastructure::llm::MockLlmClient;

use crate::helpers::{serve_router, test_app, user};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn given_unsupported_type_when_uploading_then_no_request_is_sent() {
    let client = ApiClient::new("http://127.0.0.1:9", user("alice"), TIMEOUT).unwrap();

    let result = client
        .upload("setup.exe", "application/x-msdownload", b"MZ".to_vec())
        .await;

    assert!(matches!(
        result,
        Err(ClientError::Validation(UploadRejection::UnsupportedType(_)))
    ));
}

#[tokio::test]
async fn given_tight_policy_when_uploading_large_file_then_it_is_rejected_locally() {
    let client = ApiClient::new("http://127.0.0.1:9", user("alice"), TIMEOUT)
        .unwrap()
        .with_policy(UploadPolicy::new(4));

    let result = client
        .upload("lease.txt", "text/plain", b"too long".to_vec())
        .await;

    assert!(matches!(
        result,
        Err(ClientError::Validation(UploadRejection::TooLarge { .. }))
    ));
}

#[tokio::test]
async fn given_running_server_when_uploading_then_processing_record_is_visible() {
    let app = test_app(MockLlmClient::new("unused"));
    let (base_url, shutdown) = serve_router(app.router).await;
    let client = ApiClient::new(base_url.as_str(), user("alice"), TIMEOUT).unwrap();

    let accepted = client
        .upload("lease.txt", "text/plain", b"The tenant pays rent.".to_vec())
        .await
        .unwrap();
    assert_eq!(accepted.status, AnalysisStatus::Processing);

    let analysis_id = AnalysisId::from_uuid(accepted.analysis_id);
    let snapshot = client.get_analysis(analysis_id).await.unwrap();
    assert_eq!(snapshot.filename, "lease.txt");
    assert_eq!(snapshot.status, AnalysisStatus::Processing);
    assert_eq!(client.list_analyses().await.unwrap().len(), 1);

    let stranger = ApiClient::new(base_url.as_str(), user("mallory"), TIMEOUT).unwrap();
    let err = stranger.get_analysis(analysis_id).await.unwrap_err();
    assert!(matches!(err, ClientError::Http { status: 404, .. }));
    assert!(err.to_string().starts_with("[Code: 404] "));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn given_running_server_when_scanning_and_asking_then_typed_results_are_returned() {
    let llm = MockLlmClient::new(
        r#"{"is_threat": false, "threat_level": "low", "threat_score": 5, "threat_category": "safe"}"#,
    );
    let app = test_app(llm);
    let (base_url, shutdown) = serve_router(app.router).await;
    let client = ApiClient::new(base_url.as_str(), user("alice"), TIMEOUT).unwrap();

    let scan = client
        .scan_threat(ScanType::UrlAnalysis, "https://example.com")
        .await
        .unwrap();
    assert_eq!(scan.scan_type, ScanType::UrlAnalysis);
    assert!(!scan.verdict.is_threat);
    assert_eq!(scan.verdict.threat_score, Some(5));

    let err = client
        .ask_assistant(AnalysisId::new(), "What is the notice period?", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http { status: 404, .. }));

    let _ = shutdown.send(());
}
