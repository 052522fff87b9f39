//! Read-path behavior: freshness, refetch, stale fallback, merge order.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use futures::future::BoxFuture;

use medreg_core::{Category, Deadline, DocumentKind, ManualClock, Source, Status, TriagePolicy};
use medreg_service::{DeadlineService, DeadlineSource, ServiceError};

/// Source scripted with a queue of outcomes; repeats the last one when the
/// queue runs dry, and counts calls.
struct ScriptedSource {
    outcomes: Mutex<VecDeque<Result<Vec<Deadline>, String>>>,
    last: Mutex<Result<Vec<Deadline>, String>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(outcomes: Vec<Result<Vec<Deadline>, String>>) -> Self {
        let last = outcomes
            .last()
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()));
        Self {
            outcomes: Mutex::new(outcomes.into()),
            last: Mutex::new(last),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DeadlineSource for ScriptedSource {
    fn fetch(&self) -> BoxFuture<'_, anyhow::Result<Vec<Deadline>>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self
                .outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| self.last.lock().unwrap().clone());
            next.map_err(|msg| anyhow!(msg))
        })
    }
}

fn federal_deadline(id: &str, date: NaiveDate) -> Deadline {
    Deadline {
        id: id.into(),
        title: format!("{id} rule"),
        description: String::new(),
        date,
        category: Category::Hipaa,
        source: Source::FederalRegister,
        source_url: None,
        document_number: Some(id.into()),
        agency: Some("Health and Human Services Department".into()),
        state: None,
        triage: TriagePolicy::Federal {
            kind: DocumentKind::Rule,
        },
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service_at(
    outcomes: Vec<Result<Vec<Deadline>, String>>,
) -> (DeadlineService, Arc<ScriptedSource>, Arc<ManualClock>) {
    let source = Arc::new(ScriptedSource::new(outcomes));
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    ));
    let service = DeadlineService::new(source.clone(), clock.clone());
    (service, source, clock)
}

#[tokio::test]
async fn first_read_fetches_and_second_read_is_cached() {
    let (service, source, _clock) =
        service_at(vec![Ok(vec![federal_deadline("2024-00001", day(2024, 6, 1))])]);

    let first = service.current().await.unwrap();
    assert!(!first.cached);
    assert!(!first.stale);
    assert_eq!(source.calls(), 1);

    let second = service.current().await.unwrap();
    assert!(second.cached);
    assert_eq!(second.deadlines, first.deadlines);
    assert_eq!(second.last_updated, first.last_updated);
    assert_eq!(source.calls(), 1, "fresh cache must not refetch");
}

#[tokio::test]
async fn aged_cache_triggers_exactly_one_refetch() {
    let (service, source, clock) =
        service_at(vec![Ok(vec![federal_deadline("2024-00001", day(2024, 6, 1))])]);

    service.current().await.unwrap();
    clock.advance(Duration::minutes(59));
    service.current().await.unwrap();
    assert_eq!(source.calls(), 1, "still inside the freshness window");

    clock.advance(Duration::minutes(2));
    let report = service.current().await.unwrap();
    assert!(!report.cached);
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn failed_refetch_serves_stale_data() {
    let (service, source, clock) = service_at(vec![
        Ok(vec![federal_deadline("2024-00001", day(2024, 6, 1))]),
        Err("federal register unreachable".into()),
    ]);

    let fresh = service.current().await.unwrap();
    clock.advance(Duration::hours(2));

    let fallback = service.current().await.unwrap();
    assert!(fallback.cached);
    assert!(fallback.stale);
    assert!(fallback.error.is_some());
    assert_eq!(fallback.last_updated, fresh.last_updated);
    let ids = |r: &medreg_service::DeadlineReport| {
        r.deadlines.iter().map(|d| d.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&fallback), ids(&fresh));
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn failure_with_empty_cache_is_an_error() {
    let (service, _source, _clock) = service_at(vec![Err("boom".into())]);

    let result = service.current().await;
    assert!(matches!(result, Err(ServiceError::Unavailable(_))));
}

#[tokio::test]
async fn merged_output_is_sorted_and_includes_licensing() {
    let (service, _source, _clock) = service_at(vec![Ok(vec![
        federal_deadline("2024-00002", day(2025, 1, 15)),
        federal_deadline("2024-00001", day(2024, 4, 1)),
    ])]);

    let report = service.current().await.unwrap();

    // Non-decreasing by date across the whole merge.
    for pair in report.deadlines.windows(2) {
        assert!(pair[0].date <= pair[1].date);
    }

    // Licensing records are present alongside the federal ones:
    // 2 federal + 2 per state for 5 states.
    assert_eq!(report.deadlines.len(), 12);
    assert!(report.deadlines.iter().any(|d| d.id == "license-SC-2024"));
    assert!(report
        .deadlines
        .iter()
        .any(|d| d.category == Category::Licensing));
}

#[tokio::test]
async fn same_date_keeps_federal_before_licensing() {
    // SC's CME deadline lands on 2024-03-31 when "today" is 2024-03-01;
    // give a federal record the same date and check the tie order.
    let (service, _source, _clock) =
        service_at(vec![Ok(vec![federal_deadline("2024-00003", day(2024, 3, 31))])]);

    let report = service.current().await.unwrap();
    let fed_pos = report
        .deadlines
        .iter()
        .position(|d| d.id == "2024-00003")
        .unwrap();
    let cme_pos = report
        .deadlines
        .iter()
        .position(|d| d.id == "cme-SC-2024")
        .unwrap();
    assert_eq!(report.deadlines[fed_pos].date, report.deadlines[cme_pos].date);
    assert!(fed_pos < cme_pos);
}

#[tokio::test]
async fn status_is_recomputed_per_read_while_cached() {
    // Freshness window stretched so both reads hit the same cache slot.
    let source = Arc::new(ScriptedSource::new(vec![Ok(vec![federal_deadline(
        "2024-00004",
        day(2024, 3, 30),
    )])]));
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    ));
    let service = DeadlineService::new(source.clone(), clock.clone())
        .with_freshness(Duration::days(365));

    let before = service.current().await.unwrap();
    let find = |r: &medreg_service::DeadlineReport| {
        r.deadlines
            .iter()
            .find(|d| d.id == "2024-00004")
            .unwrap()
            .status
    };
    assert_eq!(find(&before), Status::Upcoming);

    // 28 days later the same cached record is inside the 14-day window.
    clock.advance(Duration::days(28));
    let after = service.current().await.unwrap();
    assert!(after.cached);
    assert_eq!(find(&after), Status::Urgent);
    assert_eq!(source.calls(), 1);
}
