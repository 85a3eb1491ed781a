use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose;

use clausewise::application::ports::{FileLoader, FileLoaderError, LlmClientError};
use clausewise::domain::{ContentType, DocumentAnalysis};
use clausewise::infrastructure::llm::MockLlmClient;
use clausewise::infrastructure::text_processing::{
    LlmTranscriptionAdapter, TRANSCRIPTION_MAX_TOKENS, TRANSCRIPTION_PROMPT,
};

use crate::helpers::user;

fn pdf_analysis() -> DocumentAnalysis {
    DocumentAnalysis::new(
        user("alice"),
        "contract.pdf".to_string(),
        ContentType::Pdf,
        8,
    )
}

#[tokio::test]
async fn given_pdf_bytes_when_extracting_then_base64_document_is_sent_to_ocr_model() {
    let llm = Arc::new(MockLlmClient::new("1. Parties. Alice and Bob."));
    let adapter = LlmTranscriptionAdapter::new(llm.clone(), "ocr-model");

    let text = adapter.extract_text(b"%PDF-1.7", &pdf_analysis()).await.unwrap();

    assert_eq!(text, "1. Parties. Alice and Bob.");
    let request = &llm.requests()[0];
    assert_eq!(request.model, "ocr-model");
    assert_eq!(request.max_tokens, TRANSCRIPTION_MAX_TOKENS);
    assert!(request.system.is_none());
    assert!(request.user.starts_with(TRANSCRIPTION_PROMPT));
    let encoded = general_purpose::STANDARD.encode(b"%PDF-1.7");
    assert!(request.user.ends_with(&format!("Document (base64 encoded): {encoded}")));
}

#[tokio::test]
async fn given_blank_transcription_when_extracting_then_no_text_found() {
    let adapter = LlmTranscriptionAdapter::new(Arc::new(MockLlmClient::new("  ")), "ocr-model");

    let result = adapter.extract_text(b"%PDF-1.7", &pdf_analysis()).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_model_error_when_extracting_then_extraction_failed_names_ocr() {
    let llm = MockLlmClient::with_replies(vec![Err(LlmClientError::Http {
        status: 413,
        body: "payload too large".to_string(),
    })]);
    let adapter = LlmTranscriptionAdapter::new(Arc::new(llm), "ocr-model");

    let result = adapter.extract_text(b"%PDF-1.7", &pdf_analysis()).await;

    match result {
        Err(FileLoaderError::ExtractionFailed(message)) => {
            assert_eq!(message, "OCR failed: [Code: 413] payload too large");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
