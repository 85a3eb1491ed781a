use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use clausewise::application::ports::AnalysisRepository;
use clausewise::application::services::{STALE_ANALYSIS_ERROR, StaleAnalysisReaper};
use clausewise::domain::AnalysisStatus;
use clausewise::infrastructure::persistence::InMemoryAnalysisRepository;

use crate::helpers::{text_analysis, user};

const STALE_AFTER: Duration = Duration::from_secs(1_800);

fn reaper(repository: Arc<InMemoryAnalysisRepository>) -> StaleAnalysisReaper {
    StaleAnalysisReaper::new(repository, STALE_AFTER, Duration::from_secs(60))
}

#[tokio::test]
async fn given_job_started_long_ago_when_reaping_then_it_is_failed() {
    let repository = Arc::new(InMemoryAnalysisRepository::new());
    let analysis = text_analysis(&user("alice"));
    repository.create(&analysis).await.unwrap();
    let started = Utc::now();
    repository.mark_started(analysis.id, started).await.unwrap();

    let later = started + chrono::Duration::seconds(1_801);
    let reaped = reaper(repository.clone()).reap(later).await.unwrap();

    assert_eq!(reaped, 1);
    let stored = repository.get_by_id(analysis.id).await.unwrap().unwrap();
    assert_eq!(stored.status, AnalysisStatus::Failed);
    assert_eq!(stored.error_message.as_deref(), Some(STALE_ANALYSIS_ERROR));
}

#[tokio::test]
async fn given_recent_or_finished_records_when_reaping_then_they_are_untouched() {
    let repository = Arc::new(InMemoryAnalysisRepository::new());
    let fresh = text_analysis(&user("alice"));
    let finished = text_analysis(&user("alice"));
    repository.create(&fresh).await.unwrap();
    repository.create(&finished).await.unwrap();
    repository.mark_started(fresh.id, Utc::now()).await.unwrap();
    repository.fail(finished.id, "boom").await.unwrap();

    let reaped = reaper(repository.clone()).reap(Utc::now()).await.unwrap();

    assert_eq!(reaped, 0);
    let stored = repository.get_by_id(fresh.id).await.unwrap().unwrap();
    assert_eq!(stored.status, AnalysisStatus::Processing);

    let much_later = Utc::now() + chrono::Duration::hours(2);
    assert_eq!(reaper(repository.clone()).reap(much_later).await.unwrap(), 1);
    let finished = repository.get_by_id(finished.id).await.unwrap().unwrap();
    assert_eq!(finished.error_message.as_deref(), Some("boom"));
}

#[tokio::test]
async fn given_record_still_queued_when_reaping_then_queue_wait_does_not_count() {
    let repository = Arc::new(InMemoryAnalysisRepository::new());
    let queued = text_analysis(&user("alice"));
    repository.create(&queued).await.unwrap();

    let much_later = Utc::now() + chrono::Duration::hours(3);
    let reaped = reaper(repository.clone()).reap(much_later).await.unwrap();

    assert_eq!(reaped, 0);
    let stored = repository.get_by_id(queued.id).await.unwrap().unwrap();
    assert_eq!(stored.status, AnalysisStatus::Processing);
    assert!(stored.started_at.is_none());

    repository.mark_started(queued.id, much_later).await.unwrap();
    let shortly_after = much_later + chrono::Duration::minutes(5);
    assert_eq!(reaper(repository.clone()).reap(shortly_after).await.unwrap(), 0);
}
