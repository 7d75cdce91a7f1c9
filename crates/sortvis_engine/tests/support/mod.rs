#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use sortvis_core::{RunStats, StepEvent};
use sortvis_engine::{
    CancelToken, EngineConfig, ScheduleError, Scheduler, SortSession, StepSink,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

/// Never waits; counts how often the engine suspended.
#[derive(Default)]
pub struct ImmediateScheduler {
    pub suspensions: AtomicUsize,
}

#[async_trait::async_trait]
impl Scheduler for ImmediateScheduler {
    async fn after(&self, _delay: Duration, _token: &CancelToken) -> Result<(), ScheduleError> {
        self.suspensions.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(())
    }
}

/// Requests stop during the suspension numbered `stop_at` (zero based).
pub struct StopAfter {
    stop_at: usize,
    seen: AtomicUsize,
}

impl StopAfter {
    pub fn new(stop_at: usize) -> Self {
        Self {
            stop_at,
            seen: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl Scheduler for StopAfter {
    async fn after(&self, _delay: Duration, token: &CancelToken) -> Result<(), ScheduleError> {
        let seen = self.seen.fetch_add(1, Ordering::SeqCst);
        if seen >= self.stop_at {
            token.request_stop();
        }
        Ok(())
    }
}

/// Rejects the suspension numbered `fail_at`.
pub struct FailingScheduler {
    fail_at: usize,
    seen: AtomicUsize,
}

impl FailingScheduler {
    pub fn new(fail_at: usize) -> Self {
        Self {
            fail_at,
            seen: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl Scheduler for FailingScheduler {
    async fn after(&self, _delay: Duration, _token: &CancelToken) -> Result<(), ScheduleError> {
        if self.seen.fetch_add(1, Ordering::SeqCst) >= self.fail_at {
            return Err(ScheduleError::new("timer queue closed"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<StepEvent>>,
    stats: Mutex<Vec<RunStats>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<StepEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn stats(&self) -> Vec<RunStats> {
        self.stats.lock().unwrap().clone()
    }
}

impl StepSink for RecordingSink {
    fn on_step_event(&self, event: StepEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn on_stats_changed(&self, stats: RunStats) {
        self.stats.lock().unwrap().push(stats);
    }
}

pub fn session_with(scheduler: Arc<dyn Scheduler>) -> (SortSession, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let session = SortSession::new(EngineConfig::default(), sink.clone())
        .with_scheduler(scheduler)
        .with_seed(42);
    (session, sink)
}

pub fn sorted(values: &[u32]) -> Vec<u32> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}

pub fn fixtures() -> Vec<(&'static str, Vec<u32>)> {
    vec![
        ("empty", vec![]),
        ("single", vec![42]),
        ("pair", vec![2, 1]),
        ("all_equal", vec![7; 6]),
        ("sorted", (1..=8).collect()),
        ("reverse", (1..=8).rev().collect()),
        ("duplicates", vec![4, 2, 2, 3, 4, 1, 2]),
        ("random", vec![201, 35, 377, 20, 150, 150, 88, 312, 64, 99, 250, 21]),
    ]
}
