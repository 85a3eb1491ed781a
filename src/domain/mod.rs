mod analysis_id;
mod analysis_report;
mod analysis_status;
mod chat_message;
mod chunk;
mod clause;
mod content_type;
mod document_analysis;
pub(crate) mod lenient;
mod message_id;
pub(crate) mod risk_level;
mod scan_id;
mod storage_path;
mod terms;
mod threat_scan;
mod upload_policy;
mod user_id;

pub use analysis_id::AnalysisId;
pub use analysis_report::{AnalysisReport, ContractType};
pub use analysis_status::AnalysisStatus;
pub use chat_message::{ChatMessage, MessageRole};
pub use chunk::Chunk;
pub use clause::{Clause, ClauseType};
pub use content_type::ContentType;
pub use document_analysis::DocumentAnalysis;
pub use message_id::MessageId;
pub use risk_level::{MAX_SCORE, RiskLevel, clamp_score};
pub use scan_id::ScanId;
pub use storage_path::StoragePath;
pub use terms::{ExpiryTerms, PaymentTerms};
pub use threat_scan::{RiskIndicator, ScanType, ThreatLevel, ThreatScan, ThreatVerdict};
pub use upload_policy::{DEFAULT_MAX_UPLOAD_BYTES, UploadPolicy, UploadRejection};
pub use user_id::UserId;
