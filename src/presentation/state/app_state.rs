use std::sync::Arc;

use crate::application::ports::AnalysisRepository;
use crate::application::services::{ThreatScanService, UploadService, VoiceAssistantService};

#[derive(Clone)]
pub struct AppState {
    pub upload_service: Arc<UploadService>,
    pub analysis_repository: Arc<dyn AnalysisRepository>,
    pub threat_scan_service: Arc<ThreatScanService>,
    pub voice_assistant_service: Arc<VoiceAssistantService>,
}
