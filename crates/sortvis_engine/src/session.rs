use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use engine_logging::{engine_debug, engine_error, engine_info, engine_warn, with_run_id};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortvis_core::{Algorithm, RunOutcome, RunReport, RunStats, StepEvent, Value};

use crate::algorithms::{self, StepContext};
use crate::error::Interrupt;
use crate::generate::random_sequence;
use crate::run_state::{RunState, SharedRunState};
use crate::{
    CancelToken, Clock, EngineConfig, Pacer, Scheduler, SequenceStore, SessionError, StepSink,
    SystemClock, TokioScheduler,
};

/// Run orchestrator: owns the sequence, the run lifecycle and the stop flag.
///
/// Shared through `Arc`; every method takes `&self` so a stop request can
/// arrive while `start` is awaiting.
pub struct SortSession {
    config: EngineConfig,
    store: Mutex<SequenceStore>,
    run: SharedRunState,
    token: CancelToken,
    sink: Arc<dyn StepSink>,
    scheduler: Arc<dyn Scheduler>,
    rng: Mutex<StdRng>,
    next_run_id: AtomicU64,
}

impl SortSession {
    pub fn new(config: EngineConfig, sink: Arc<dyn StepSink>) -> Self {
        Self {
            config,
            store: Mutex::new(SequenceStore::default()),
            run: SharedRunState::new(Arc::new(SystemClock)),
            token: CancelToken::new(),
            sink,
            scheduler: Arc::new(TokioScheduler),
            rng: Mutex::new(StdRng::from_entropy()),
            next_run_id: AtomicU64::new(0),
        }
    }

    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.run = SharedRunState::new(clock);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the sequence with `size` fresh random values.
    pub fn generate(&self, size: usize) -> Result<Vec<Value>, SessionError> {
        self.run.reset()?;
        let values = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            random_sequence(&mut *rng, size, &self.config.generation)
        };
        if values.len() < size {
            engine_debug!("generate: size {} capped to {}", size, values.len());
        }
        *self.lock_store() = SequenceStore::new(values.clone());
        Ok(values)
    }

    /// Runs `algorithm` over `initial` to completion or until stopped.
    ///
    /// Rejected with `AlreadyRunning`, without touching any state, while
    /// another run is active. A user stop or a scheduler failure both end
    /// the run as `Aborted`; neither is an error here.
    pub async fn start(
        &self,
        algorithm: Algorithm,
        initial: Vec<Value>,
        speed: u32,
    ) -> Result<RunReport, SessionError> {
        let run_id = self.begin(algorithm)?;
        Ok(self.run_begun(run_id, algorithm, initial, speed).await)
    }

    /// Claims the session for a new run and returns its id.
    ///
    /// From here on `request_stop` is honoured, even before `run_begun`
    /// gets to execute the first step.
    pub(crate) fn begin(&self, algorithm: Algorithm) -> Result<u64, SessionError> {
        self.run.begin(algorithm, &self.token)?;
        Ok(self.next_run_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Ends a run that was begun but will never execute.
    pub(crate) fn abandon(&self, run_id: u64) {
        let stats = self.run.finish(RunOutcome::Aborted);
        self.sink.on_stats_changed(stats);
        with_run_id(run_id, || engine_warn!("run abandoned before its first step"));
    }

    pub(crate) async fn run_begun(
        &self,
        run_id: u64,
        algorithm: Algorithm,
        initial: Vec<Value>,
        speed: u32,
    ) -> RunReport {
        let mut store = SequenceStore::new(initial);
        let pacer = Pacer::for_speed(speed, &self.config.pacing, self.scheduler.clone());
        with_run_id(run_id, || {
            engine_info!(
                "{} started: {} values, speed {}, delay {:?}",
                algorithm,
                store.len(),
                speed,
                pacer.delay()
            )
        });

        let result = {
            let mut ctx = StepContext::new(
                &mut store,
                &pacer,
                &self.token,
                self.sink.as_ref(),
                &self.run,
            );
            algorithms::run(algorithm, &mut ctx).await
        };

        let outcome = match result {
            Ok(()) if self.token.is_stop_requested() => RunOutcome::Aborted,
            Ok(()) => RunOutcome::Completed,
            Err(Interrupt::Stopped) => RunOutcome::Aborted,
            Err(Interrupt::Failed(err)) => {
                with_run_id(run_id, || {
                    engine_error!("{} failed, forcing abort: {}", algorithm, err)
                });
                RunOutcome::Aborted
            }
        };
        if outcome == RunOutcome::Completed {
            self.sink.on_step_event(StepEvent::Done);
        }

        let sequence = store.as_slice().to_vec();
        *self.lock_store() = store;
        let stats = self.run.finish(outcome);
        self.sink.on_stats_changed(stats);

        with_run_id(run_id, || {
            engine_info!(
                "{} {:?}: {} comparisons, {} swaps, {} ms",
                algorithm,
                outcome,
                stats.comparisons,
                stats.swaps,
                stats.elapsed_ms
            )
        });

        RunReport {
            algorithm,
            outcome,
            stats,
            sequence,
        }
    }

    /// Asks the active run to stop at its next checkpoint. Repeated calls
    /// have no further effect; calls while idle are ignored.
    pub fn request_stop(&self) {
        if self.run.request_stop(&self.token) {
            engine_info!("stop requested");
        }
    }

    pub fn is_stop_requested(&self) -> bool {
        self.token.is_stop_requested()
    }

    /// Clears a finished run back to `Idle`.
    pub fn reset(&self) -> Result<(), SessionError> {
        self.run.reset()
    }

    pub fn run_state(&self) -> RunState {
        self.run.snapshot()
    }

    /// Counters plus live elapsed time, for periodic polling.
    pub fn stats(&self) -> RunStats {
        self.run.stats()
    }

    /// The sequence as of the last generate or finished run.
    pub fn sequence(&self) -> Vec<Value> {
        self.lock_store().as_slice().to_vec()
    }

    fn lock_store(&self) -> MutexGuard<'_, SequenceStore> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
