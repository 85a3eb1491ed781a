use std::sync::Arc;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};

use crate::application::ports::{CompletionRequest, FileLoader, FileLoaderError, LlmClient};
use crate::domain::DocumentAnalysis;

pub const TRANSCRIPTION_MAX_TOKENS: usize = 100_000;
pub const TRANSCRIPTION_TEMPERATURE: f32 = 0.1;

pub const TRANSCRIPTION_PROMPT: &str = "You are an advanced OCR and document text extraction system. Your task is to extract ALL text content from the provided document with maximum accuracy.

CRITICAL REQUIREMENTS:
- Extract EVERY word, number, and character from the document
- Preserve ALL formatting, line breaks, and structure
- Include headers, footers, footnotes, and annotations
- Do NOT summarize, paraphrase, or skip ANY content
- Return ONLY the extracted text with no additional commentary
- Maintain original document order and layout
- Extract text from ALL pages (even if 100+ pages)";

/// Extracts text from binary documents (PDF, DOC, DOCX) by sending the whole
/// base64-encoded file to a model and asking for a verbatim transcription.
pub struct LlmTranscriptionAdapter {
    llm_client: Arc<dyn LlmClient>,
    model: String,
}

impl LlmTranscriptionAdapter {
    pub fn new(llm_client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            llm_client,
            model: model.into(),
        }
    }

    fn build_request(&self, data: &[u8]) -> CompletionRequest {
        let encoded = general_purpose::STANDARD.encode(data);
        CompletionRequest {
            model: self.model.clone(),
            system: None,
            user: format!("{TRANSCRIPTION_PROMPT}\n\nDocument (base64 encoded): {encoded}"),
            max_tokens: TRANSCRIPTION_MAX_TOKENS,
            temperature: TRANSCRIPTION_TEMPERATURE,
        }
    }
}

#[async_trait]
impl FileLoader for LlmTranscriptionAdapter {
    #[tracing::instrument(
        skip(self, data, analysis),
        fields(
            analysis_id = %analysis.id.as_uuid(),
            filename = %analysis.filename
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        analysis: &DocumentAnalysis,
    ) -> Result<String, FileLoaderError> {
        if !analysis.content_type.is_binary() {
            return Err(FileLoaderError::UnsupportedContentType(
                analysis.content_type.as_mime().to_string(),
            ));
        }

        let request = self.build_request(data);
        tracing::info!(
            encoded_len = request.user.len(),
            model = %self.model,
            "Transcribing document with model"
        );

        let text = self
            .llm_client
            .complete(&request)
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("OCR failed: {e}")))?;

        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(analysis.filename.clone()));
        }

        tracing::info!(chars = text.chars().count(), "Text extracted");
        Ok(text)
    }
}
