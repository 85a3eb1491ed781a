use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, DocumentAnalysis};

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        analysis: &DocumentAnalysis,
    ) -> Result<String, FileLoaderError> {
        if analysis.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                analysis.content_type.as_mime().to_string(),
            ));
        }

        let text = String::from_utf8(data.to_vec())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(analysis.filename.clone()));
        }

        Ok(text)
    }
}
