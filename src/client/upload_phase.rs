use crate::domain::{AnalysisId, AnalysisStatus};

use super::AnalysisSnapshot;

const DEFAULT_FAILURE_MESSAGE: &str = "Analysis failed";

/// Where a single document upload stands from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Processing { analysis_id: AnalysisId },
    Completed(AnalysisSnapshot),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// A file was picked and the upload request is in flight.
    Start,
    /// The server accepted the file and queued an analysis.
    Accepted { analysis_id: AnalysisId },
    /// A poll returned a terminal record.
    Finished(AnalysisSnapshot),
    /// Validation, transport or server failure.
    Error(String),
    Reset,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid upload transition from {from} on {event}")]
pub struct InvalidTransition {
    pub from: &'static str,
    pub event: &'static str,
}

impl UploadPhase {
    pub fn name(&self) -> &'static str {
        match self {
            UploadPhase::Idle => "idle",
            UploadPhase::Uploading => "uploading",
            UploadPhase::Processing { .. } => "processing",
            UploadPhase::Completed(_) => "completed",
            UploadPhase::Failed(_) => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadPhase::Completed(_) | UploadPhase::Failed(_))
    }

    pub fn transition(self, event: UploadEvent) -> Result<UploadPhase, InvalidTransition> {
        match (self, event) {
            (UploadPhase::Idle | UploadPhase::Completed(_) | UploadPhase::Failed(_), UploadEvent::Start) => {
                Ok(UploadPhase::Uploading)
            }
            (UploadPhase::Uploading, UploadEvent::Accepted { analysis_id }) => {
                Ok(UploadPhase::Processing { analysis_id })
            }
            (UploadPhase::Uploading | UploadPhase::Processing { .. }, UploadEvent::Error(message)) => {
                Ok(UploadPhase::Failed(message))
            }
            (UploadPhase::Processing { analysis_id }, UploadEvent::Finished(snapshot))
                if snapshot.analysis_id() == analysis_id =>
            {
                match snapshot.status {
                    AnalysisStatus::Completed => Ok(UploadPhase::Completed(snapshot)),
                    AnalysisStatus::Failed => Ok(UploadPhase::Failed(
                        snapshot
                            .error_message
                            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
                    )),
                    AnalysisStatus::Processing => Err(InvalidTransition {
                        from: "processing",
                        event: "finished",
                    }),
                }
            }
            (UploadPhase::Completed(_) | UploadPhase::Failed(_), UploadEvent::Reset) => {
                Ok(UploadPhase::Idle)
            }
            (phase, event) => Err(InvalidTransition {
                from: phase.name(),
                event: event.name(),
            }),
        }
    }
}

impl UploadEvent {
    fn name(&self) -> &'static str {
        match self {
            UploadEvent::Start => "start",
            UploadEvent::Accepted { .. } => "accepted",
            UploadEvent::Finished(_) => "finished",
            UploadEvent::Error(_) => "error",
            UploadEvent::Reset => "reset",
        }
    }
}
