//! Caller-side pieces: the upload phase machine, status polling and a typed API client.

mod analysis_poller;
mod api_client;
mod snapshot;
mod upload_phase;

pub use analysis_poller::{
    AnalysisPoller, DEFAULT_POLL_INTERVAL, PollHandle, PollOutcome, StatusSource,
};
pub use api_client::{ApiClient, ClientError};
pub use snapshot::{AnalysisSnapshot, ScanSnapshot, UploadAccepted};
pub use upload_phase::{InvalidTransition, UploadEvent, UploadPhase};
