mod analysis_repository;
mod chat_repository;
mod file_loader;
mod llm_client;
mod repository_error;
mod staging_store;
mod text_splitter;
mod threat_scan_repository;

pub use analysis_repository::AnalysisRepository;
pub use chat_repository::ChatRepository;
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{CompletionRequest, LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use staging_store::{StagingStore, StagingStoreError};
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use threat_scan_repository::ThreatScanRepository;
