use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{AnalysisId, Chunk};

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";
const SEPARATOR_LEN: usize = 2;

/// Greedy paragraph packer.
///
/// Paragraphs (separated by a blank line) are appended to the current chunk while the
/// chunk, separators included, stays within `max_chunk_chars`. A paragraph that alone
/// exceeds the bound becomes its own oversized chunk; it is never cut. Joining the
/// chunks with [`PARAGRAPH_SEPARATOR`] yields the input text unchanged.
pub struct ParagraphSplitter {
    max_chunk_chars: usize,
}

impl ParagraphSplitter {
    pub fn new(max_chunk_chars: usize) -> Self {
        Self { max_chunk_chars }
    }

    pub fn max_chunk_chars(&self) -> usize {
        self.max_chunk_chars
    }

    pub fn split_text(
        &self,
        text: &str,
        analysis_id: AnalysisId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        if self.max_chunk_chars == 0 {
            return Err(TextSplitterError::InvalidChunkSize(self.max_chunk_chars));
        }

        let mut chunks = Vec::new();
        if text.is_empty() {
            return Ok(chunks);
        }

        let mut current: Option<String> = None;
        let mut current_len = 0;
        let mut current_offset = 0;
        let mut offset = 0;

        for paragraph in text.split(PARAGRAPH_SEPARATOR) {
            let paragraph_len = paragraph.chars().count();

            match current.as_mut() {
                Some(buffer)
                    if current_len + SEPARATOR_LEN + paragraph_len <= self.max_chunk_chars =>
                {
                    buffer.push_str(PARAGRAPH_SEPARATOR);
                    buffer.push_str(paragraph);
                    current_len += SEPARATOR_LEN + paragraph_len;
                }
                _ => {
                    if let Some(finished) = current.replace(paragraph.to_string()) {
                        chunks.push(Chunk::new(finished, analysis_id, chunks.len(), current_offset));
                    }
                    current_len = paragraph_len;
                    current_offset = offset;
                }
            }

            offset += paragraph_len + SEPARATOR_LEN;
        }

        if let Some(finished) = current {
            chunks.push(Chunk::new(finished, analysis_id, chunks.len(), current_offset));
        }

        Ok(chunks)
    }
}

#[async_trait]
impl TextSplitter for ParagraphSplitter {
    async fn split(
        &self,
        text: &str,
        analysis_id: AnalysisId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        self.split_text(text, analysis_id)
    }
}
