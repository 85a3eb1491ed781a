use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::domain::{ScanType, ThreatScan, ThreatVerdict};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::{ApiError, CurrentUser};

#[derive(Deserialize)]
pub struct ThreatScanRequest {
    pub scan_type: ScanType,
    pub content: String,
}

#[derive(Serialize)]
pub struct ThreatScanResponse {
    pub scan: ScanRecord,
}

#[derive(Serialize)]
pub struct ScanRecord {
    pub id: String,
    pub scan_type: ScanType,
    pub content: String,
    #[serde(flatten)]
    pub verdict: ThreatVerdict,
    pub processing_time_ms: u64,
    pub created_at: String,
}

impl From<ThreatScan> for ScanRecord {
    fn from(scan: ThreatScan) -> Self {
        Self {
            id: scan.id.as_uuid().to_string(),
            scan_type: scan.scan_type,
            content: scan.content,
            verdict: scan.verdict,
            processing_time_ms: scan.processing_time_ms,
            created_at: scan.created_at.to_rfc3339(),
        }
    }
}

#[tracing::instrument(skip(state, payload), fields(user_id = %user_id))]
pub async fn create_threat_scan_handler(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<ThreatScanRequest>, JsonRejection>,
) -> Result<Json<ThreatScanResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(
        scan_type = %request.scan_type,
        content = %sanitize_prompt(&request.content),
        "Processing threat scan"
    );

    let scan = state
        .threat_scan_service
        .scan(user_id, request.scan_type, request.content)
        .await?;

    Ok(Json(ThreatScanResponse { scan: scan.into() }))
}

#[tracing::instrument(skip(state), fields(user_id = %user_id))]
pub async fn list_threat_scans_handler(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<ScanRecord>>, ApiError> {
    let scans = state.threat_scan_service.list(&user_id).await?;
    Ok(Json(scans.into_iter().map(ScanRecord::from).collect()))
}
