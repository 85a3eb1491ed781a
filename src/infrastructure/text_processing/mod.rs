mod composite_file_loader;
mod extractor_factory;
mod llm_transcription_adapter;
mod paragraph_splitter;
mod plain_text_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use extractor_factory::ExtractorFactory;
pub use llm_transcription_adapter::{
    LlmTranscriptionAdapter, TRANSCRIPTION_MAX_TOKENS, TRANSCRIPTION_PROMPT,
    TRANSCRIPTION_TEMPERATURE,
};
pub use paragraph_splitter::{PARAGRAPH_SEPARATOR, ParagraphSplitter};
pub use plain_text_adapter::PlainTextAdapter;
