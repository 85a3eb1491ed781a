mod analysis_merge;
mod analysis_worker;
mod document_analyzer;
pub mod prompts;
mod reply_parser;
mod stale_analysis_reaper;
mod threat_scan_service;
mod upload_service;
mod voice_assistant_service;

pub use analysis_merge::{ChunkReport, DEFAULT_MAX_CLAUSES, MULTI_SECTION_SUMMARY, merge_chunk_reports};
pub use analysis_worker::{AnalysisMessage, AnalysisWorker, AnalysisWorkerError};
pub use document_analyzer::{
    AnalyzerConfig, DocumentAnalysisError, DocumentAnalyzer, parse_document_reply,
};
pub use reply_parser::{ReplyParseError, extract_json_object, parse_reply};
pub use stale_analysis_reaper::{STALE_ANALYSIS_ERROR, StaleAnalysisReaper};
pub use threat_scan_service::{ThreatScanError, ThreatScanService};
pub use upload_service::{UploadError, UploadService};
pub use voice_assistant_service::{
    AnalysisContext, MESSAGE_HISTORY_LIMIT, VoiceAssistantError, VoiceAssistantService,
};
