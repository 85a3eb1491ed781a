use uuid::Uuid;

use clausewise::client::{AnalysisSnapshot, InvalidTransition, UploadEvent, UploadPhase};
use clausewise::domain::{AnalysisId, AnalysisStatus};

fn snapshot(analysis_id: AnalysisId, status: AnalysisStatus) -> AnalysisSnapshot {
    AnalysisSnapshot {
        id: analysis_id.as_uuid(),
        filename: "lease.pdf".to_string(),
        status,
        report: None,
        error_message: None,
        processing_time_ms: None,
    }
}

fn processing(analysis_id: AnalysisId) -> UploadPhase {
    UploadPhase::Idle
        .transition(UploadEvent::Start)
        .and_then(|p| p.transition(UploadEvent::Accepted { analysis_id }))
        .unwrap()
}

#[test]
fn given_happy_path_when_events_arrive_then_phase_reaches_completed() {
    let analysis_id = AnalysisId::new();
    let phase = processing(analysis_id);
    assert_eq!(phase, UploadPhase::Processing { analysis_id });

    let done = snapshot(analysis_id, AnalysisStatus::Completed);
    let phase = phase.transition(UploadEvent::Finished(done.clone())).unwrap();

    assert_eq!(phase, UploadPhase::Completed(done));
    assert!(phase.is_terminal());
}

#[test]
fn given_failed_record_without_message_when_finished_then_default_message_is_used() {
    let analysis_id = AnalysisId::new();

    let phase = processing(analysis_id)
        .transition(UploadEvent::Finished(snapshot(
            analysis_id,
            AnalysisStatus::Failed,
        )))
        .unwrap();

    assert_eq!(phase, UploadPhase::Failed("Analysis failed".to_string()));
}

#[test]
fn given_failed_record_with_message_when_finished_then_message_is_kept() {
    let analysis_id = AnalysisId::new();
    let mut failed = snapshot(analysis_id, AnalysisStatus::Failed);
    failed.error_message = Some("[Code: 401] invalid api key".to_string());

    let phase = processing(analysis_id)
        .transition(UploadEvent::Finished(failed))
        .unwrap();

    assert_eq!(
        phase,
        UploadPhase::Failed("[Code: 401] invalid api key".to_string())
    );
}

#[test]
fn given_snapshot_for_other_analysis_when_finished_then_transition_is_rejected() {
    let phase = processing(AnalysisId::new());
    let stray = snapshot(
        AnalysisId::from_uuid(Uuid::new_v4()),
        AnalysisStatus::Completed,
    );

    let result = phase.transition(UploadEvent::Finished(stray));

    assert_eq!(
        result,
        Err(InvalidTransition {
            from: "processing",
            event: "finished",
        })
    );
}

#[test]
fn given_still_processing_snapshot_when_finished_then_transition_is_rejected() {
    let analysis_id = AnalysisId::new();

    let result = processing(analysis_id).transition(UploadEvent::Finished(snapshot(
        analysis_id,
        AnalysisStatus::Processing,
    )));

    assert!(result.is_err());
}

#[test]
fn given_upload_error_when_uploading_then_phase_fails_and_can_restart() {
    let phase = UploadPhase::Idle
        .transition(UploadEvent::Start)
        .and_then(|p| p.transition(UploadEvent::Error("[Code: 413] too large".to_string())))
        .unwrap();
    assert_eq!(phase, UploadPhase::Failed("[Code: 413] too large".to_string()));

    let restarted = phase.clone().transition(UploadEvent::Start).unwrap();
    assert_eq!(restarted, UploadPhase::Uploading);

    let reset = phase.transition(UploadEvent::Reset).unwrap();
    assert_eq!(reset, UploadPhase::Idle);
}

#[test]
fn given_out_of_order_events_when_transitioning_then_they_are_rejected() {
    let analysis_id = AnalysisId::new();

    let accepted_while_idle = UploadPhase::Idle.transition(UploadEvent::Accepted { analysis_id });
    let start_while_uploading = UploadPhase::Uploading.transition(UploadEvent::Start);
    let reset_while_processing = processing(analysis_id).transition(UploadEvent::Reset);

    assert_eq!(
        accepted_while_idle.unwrap_err().to_string(),
        "invalid upload transition from idle on accepted"
    );
    assert!(start_while_uploading.is_err());
    assert!(reset_while_processing.is_err());
}
