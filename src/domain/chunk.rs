use super::AnalysisId;

/// A paragraph-aligned slice of a document's extracted text.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub text: String,
    pub analysis_id: AnalysisId,
    pub index: usize,
    /// Character offset of the chunk's first character within the source text.
    pub offset: usize,
}

impl Chunk {
    pub fn new(text: String, analysis_id: AnalysisId, index: usize, offset: usize) -> Self {
        Self {
            text,
            analysis_id,
            index,
            offset,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
