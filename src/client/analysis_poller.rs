use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::domain::AnalysisId;

use super::{AnalysisSnapshot, ClientError};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Anything that can report the current state of an analysis.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_analysis(&self, analysis_id: AnalysisId)
    -> Result<AnalysisSnapshot, ClientError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The record reached `completed` or `failed`.
    Finished(AnalysisSnapshot),
    /// Polling was cancelled before a terminal status was seen.
    Stopped,
}

/// Polls a `StatusSource` until the analysis is terminal.
pub struct AnalysisPoller;

impl AnalysisPoller {
    pub fn start(
        source: Arc<dyn StatusSource>,
        analysis_id: AnalysisId,
        interval: Duration,
    ) -> PollHandle {
        let (stop_tx, stop_rx) = watch::channel(false);
        let task = tokio::spawn(poll_until_terminal(source, analysis_id, interval, stop_rx));
        PollHandle {
            task: Some(task),
            stop_tx,
        }
    }
}

async fn poll_until_terminal(
    source: Arc<dyn StatusSource>,
    analysis_id: AnalysisId,
    interval: Duration,
    mut stop_rx: watch::Receiver<bool>,
) -> PollOutcome {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = stop_rx.changed() => return PollOutcome::Stopped,
            _ = ticker.tick() => {}
        }

        match source.fetch_analysis(analysis_id).await {
            Ok(snapshot) if snapshot.status.is_terminal() => {
                tracing::debug!(status = %snapshot.status, "Analysis reached terminal status");
                return PollOutcome::Finished(snapshot);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(analysis_id = %analysis_id.as_uuid(), error = %e, "Status poll failed");
            }
        }
    }
}

/// Owner of a running poll. Dropping the handle cancels the poll.
pub struct PollHandle {
    task: Option<JoinHandle<PollOutcome>>,
    stop_tx: watch::Sender<bool>,
}

impl PollHandle {
    pub fn stop(&self) {
        self.stop_tx.send_replace(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }

    pub async fn wait(mut self) -> PollOutcome {
        match self.task.take() {
            Some(task) => task.await.unwrap_or(PollOutcome::Stopped),
            None => PollOutcome::Stopped,
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
