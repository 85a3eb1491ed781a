mod analyses;
mod current_user;
mod error;
mod health;
mod threat_scans;
mod voice_assistant;

pub use analyses::{
    AnalysisResponse, MessageResponse, TriggerRequest, TriggerResponse, UploadResponse,
    analysis_messages_handler, get_analysis_handler, list_analyses_handler, trigger_handler,
    upload_handler,
};
pub use current_user::{CurrentUser, USER_ID_HEADER};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use threat_scans::{
    ScanRecord, ThreatScanRequest, ThreatScanResponse, create_threat_scan_handler,
    list_threat_scans_handler,
};
pub use voice_assistant::{VoiceAssistantRequest, VoiceAssistantResponse, voice_assistant_handler};
