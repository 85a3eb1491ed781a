mod repositories;

pub use repositories::InMemoryAnalysisRepository;
pub use repositories::InMemoryChatRepository;
pub use repositories::InMemoryThreatScanRepository;
