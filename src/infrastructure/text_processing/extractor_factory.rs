use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::ContentType;

use super::composite_file_loader::CompositeFileLoader;
use super::llm_transcription_adapter::LlmTranscriptionAdapter;
use super::plain_text_adapter::PlainTextAdapter;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Plain text is decoded locally; every binary format is transcribed by `ocr_model`.
    pub fn create(llm_client: Arc<dyn LlmClient>, ocr_model: &str) -> Arc<dyn FileLoader> {
        tracing::info!(ocr_model, "Loading document extractors");

        let plain_text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let transcriber: Arc<dyn FileLoader> =
            Arc::new(LlmTranscriptionAdapter::new(llm_client, ocr_model));

        Arc::new(CompositeFileLoader::new(vec![
            (ContentType::Text, plain_text),
            (ContentType::Pdf, Arc::clone(&transcriber)),
            (ContentType::Doc, Arc::clone(&transcriber)),
            (ContentType::Docx, transcriber),
        ]))
    }
}
