mod support;

use std::sync::Arc;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use sortvis_core::{Algorithm, RunOutcome, StepEvent};
use sortvis_engine::{EngineConfig, EngineEvent, EngineHandle, SessionError, SortSession};
use support::{init_logging, ImmediateScheduler};

fn immediate_engine() -> EngineHandle {
    EngineHandle::with_session(|sink| {
        SortSession::new(EngineConfig::default(), sink)
            .with_scheduler(Arc::new(ImmediateScheduler::default()))
            .with_seed(3)
    })
}

/// Collects events until `stop` matches or the deadline passes.
fn collect_until(engine: &EngineHandle, stop: impl Fn(&EngineEvent) -> bool) -> Vec<EngineEvent> {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut events = Vec::new();
    while Instant::now() < deadline {
        if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
            let done = stop(&event);
            events.push(event);
            if done {
                return events;
            }
        }
    }
    panic!("engine did not deliver the expected event; got {events:?}");
}

#[test]
fn generate_then_sort_reports_every_step() {
    init_logging();
    let engine = immediate_engine();

    engine.generate(12);
    let events = collect_until(&engine, |event| matches!(event, EngineEvent::Generated(_)));
    let values = match events.last() {
        Some(EngineEvent::Generated(values)) => values.clone(),
        other => panic!("unexpected event {other:?}"),
    };
    assert_eq!(values.len(), 12);

    engine.start(Algorithm::Merge, values.clone(), 150);
    let events = collect_until(&engine, |event| matches!(event, EngineEvent::RunFinished(_)));

    let report = match events.last() {
        Some(EngineEvent::RunFinished(report)) => report.clone(),
        other => panic!("unexpected event {other:?}"),
    };
    let mut expected = values;
    expected.sort_unstable();
    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(report.sequence, expected);

    let steps: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::Step(step) => Some(*step),
            _ => None,
        })
        .collect();
    assert_eq!(steps.last(), Some(&StepEvent::Done));
    assert!(events
        .iter()
        .any(|event| matches!(event, EngineEvent::Stats(_))));
    assert!(!engine.is_running());
}

#[test]
fn stop_through_handle_aborts_slow_run() {
    init_logging();
    let engine = EngineHandle::new(EngineConfig::default());

    engine.start(Algorithm::Bubble, (1..=40).rev().collect(), 1);
    collect_until(&engine, |event| matches!(event, EngineEvent::Step(_)));
    assert!(engine.is_running());

    engine.start(Algorithm::Quick, vec![2, 1], 200);
    let events = collect_until(&engine, |event| matches!(event, EngineEvent::Rejected(_)));
    assert!(matches!(
        events.last(),
        Some(EngineEvent::Rejected(SessionError::AlreadyRunning))
    ));
    engine.generate(5);
    let events = collect_until(&engine, |event| matches!(event, EngineEvent::Rejected(_)));
    assert!(matches!(
        events.last(),
        Some(EngineEvent::Rejected(SessionError::Busy))
    ));

    engine.request_stop();
    let events = collect_until(&engine, |event| matches!(event, EngineEvent::RunFinished(_)));
    match events.last() {
        Some(EngineEvent::RunFinished(report)) => {
            assert_eq!(report.algorithm, Algorithm::Bubble);
            assert_eq!(report.outcome, RunOutcome::Aborted);
            assert_eq!(report.sequence.len(), 40);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn stop_sent_right_after_start_is_honoured() {
    init_logging();
    let engine = EngineHandle::new(EngineConfig::default());

    engine.start(Algorithm::Bubble, (1..=200).rev().collect(), 1);
    assert!(engine.is_running());
    engine.request_stop();

    let events = collect_until(&engine, |event| matches!(event, EngineEvent::RunFinished(_)));
    match events.last() {
        Some(EngineEvent::RunFinished(report)) => {
            assert_eq!(report.outcome, RunOutcome::Aborted);
            assert_eq!(report.sequence.len(), 200);
            assert_eq!(report.stats.comparisons, 0);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(!events
        .iter()
        .any(|event| matches!(event, EngineEvent::Step(StepEvent::Done))));
    assert!(!engine.is_running());
}

#[test]
fn rejected_start_is_reported_immediately() {
    init_logging();
    let engine = EngineHandle::new(EngineConfig::default());

    engine.start(Algorithm::Bubble, (1..=50).rev().collect(), 1);
    engine.start(Algorithm::Merge, vec![3, 1, 2], 200);
    let events = collect_until(&engine, |event| matches!(event, EngineEvent::Rejected(_)));
    assert!(matches!(
        events.last(),
        Some(EngineEvent::Rejected(SessionError::AlreadyRunning))
    ));

    engine.request_stop();
    let events = collect_until(&engine, |event| matches!(event, EngineEvent::RunFinished(_)));
    match events.last() {
        Some(EngineEvent::RunFinished(report)) => {
            assert_eq!(report.algorithm, Algorithm::Bubble);
            assert_eq!(report.outcome, RunOutcome::Aborted);
        }
        other => panic!("unexpected event {other:?}"),
    }
}
