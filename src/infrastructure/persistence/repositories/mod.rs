mod in_memory_analysis_repository;
mod in_memory_chat_repository;
mod in_memory_threat_scan_repository;

pub use in_memory_analysis_repository::InMemoryAnalysisRepository;
pub use in_memory_chat_repository::InMemoryChatRepository;
pub use in_memory_threat_scan_repository::InMemoryThreatScanRepository;
