use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{AnalysisId, AnalysisReport, AnalysisStatus, ScanType, ThreatVerdict};

/// An analysis record as returned by `GET /api/v1/analyses/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisSnapshot {
    pub id: Uuid,
    pub filename: String,
    pub status: AnalysisStatus,
    #[serde(default)]
    pub report: Option<AnalysisReport>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub processing_time_ms: Option<u64>,
}

impl AnalysisSnapshot {
    pub fn analysis_id(&self) -> AnalysisId {
        AnalysisId::from_uuid(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadAccepted {
    pub analysis_id: Uuid,
    pub status: AnalysisStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanSnapshot {
    pub id: Uuid,
    pub scan_type: ScanType,
    #[serde(flatten)]
    pub verdict: ThreatVerdict,
    pub processing_time_ms: u64,
}
