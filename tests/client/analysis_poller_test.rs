use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use clausewise::client::{
    AnalysisPoller, AnalysisSnapshot, ClientError, DEFAULT_POLL_INTERVAL, PollOutcome,
    StatusSource,
};
use clausewise::domain::{AnalysisId, AnalysisStatus};

/// Replays scripted statuses, repeating the last one.
struct ScriptedSource {
    statuses: Mutex<VecDeque<Result<AnalysisStatus, u16>>>,
    last: AnalysisStatus,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(statuses: Vec<Result<AnalysisStatus, u16>>, last: AnalysisStatus) -> Arc<Self> {
        Arc::new(Self {
            statuses: Mutex::new(statuses.into()),
            last,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch_analysis(
        &self,
        analysis_id: AnalysisId,
    ) -> Result<AnalysisSnapshot, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.statuses.lock().unwrap().pop_front();
        let status = match next {
            Some(Ok(status)) => status,
            Some(Err(code)) => {
                return Err(ClientError::Http {
                    status: code,
                    body: "unavailable".to_string(),
                });
            }
            None => self.last,
        };

        Ok(AnalysisSnapshot {
            id: analysis_id.as_uuid(),
            filename: "lease.pdf".to_string(),
            status,
            report: None,
            error_message: None,
            processing_time_ms: None,
        })
    }
}

#[tokio::test(start_paused = true)]
async fn given_record_finishing_on_third_poll_when_polling_then_outcome_is_finished() {
    let source = ScriptedSource::new(
        vec![
            Ok(AnalysisStatus::Processing),
            Ok(AnalysisStatus::Processing),
        ],
        AnalysisStatus::Completed,
    );
    let analysis_id = AnalysisId::new();
    let started = tokio::time::Instant::now();

    let handle = AnalysisPoller::start(source.clone(), analysis_id, DEFAULT_POLL_INTERVAL);
    let outcome = handle.wait().await;

    match outcome {
        PollOutcome::Finished(snapshot) => {
            assert_eq!(snapshot.status, AnalysisStatus::Completed);
            assert_eq!(snapshot.analysis_id(), analysis_id);
        }
        PollOutcome::Stopped => panic!("poll was stopped"),
    }
    assert_eq!(source.calls(), 3);
    assert_eq!(started.elapsed(), Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn given_transient_errors_when_polling_then_polling_continues() {
    let source = ScriptedSource::new(vec![Err(503), Err(500)], AnalysisStatus::Failed);

    let outcome = AnalysisPoller::start(source.clone(), AnalysisId::new(), DEFAULT_POLL_INTERVAL)
        .wait()
        .await;

    assert!(matches!(
        outcome,
        PollOutcome::Finished(AnalysisSnapshot {
            status: AnalysisStatus::Failed,
            ..
        })
    ));
    assert_eq!(source.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn given_stop_request_when_polling_then_outcome_is_stopped_and_no_more_calls() {
    let source = ScriptedSource::new(Vec::new(), AnalysisStatus::Processing);
    let handle = AnalysisPoller::start(source.clone(), AnalysisId::new(), DEFAULT_POLL_INTERVAL);

    tokio::time::sleep(Duration::from_secs(5)).await;
    handle.stop();
    let outcome = handle.wait().await;
    let calls_at_stop = source.calls();

    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(outcome, PollOutcome::Stopped);
    assert_eq!(calls_at_stop, 3);
    assert_eq!(source.calls(), calls_at_stop);
}

#[tokio::test(start_paused = true)]
async fn given_dropped_handle_when_time_passes_then_source_is_not_polled() {
    let source = ScriptedSource::new(Vec::new(), AnalysisStatus::Processing);
    let handle = AnalysisPoller::start(source.clone(), AnalysisId::new(), DEFAULT_POLL_INTERVAL);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!handle.is_finished());
    drop(handle);
    let calls_at_drop = source.calls();

    tokio::time::sleep(Duration::from_secs(20)).await;

    assert_eq!(calls_at_drop, 1);
    assert_eq!(source.calls(), calls_at_drop);
}
