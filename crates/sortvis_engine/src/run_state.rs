use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use sortvis_core::{Algorithm, RunOutcome, RunStats, RunStatus};

use crate::{CancelToken, Clock, SessionError};

/// Lifecycle and counters of the most recent run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunState {
    pub status: RunStatus,
    pub algorithm: Option<Algorithm>,
    pub comparisons: u64,
    pub swaps: u64,
    pub started_at: Option<Instant>,
    /// Frozen once the run finishes.
    pub elapsed: Option<Duration>,
}

impl RunState {
    pub fn stats_at(&self, now: Instant) -> RunStats {
        let elapsed = match (self.elapsed, self.started_at) {
            (Some(elapsed), _) => elapsed,
            (None, Some(started)) => now.saturating_duration_since(started),
            (None, None) => Duration::ZERO,
        };
        RunStats {
            comparisons: self.comparisons,
            swaps: self.swaps,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}

/// `RunState` behind a short-lived lock, plus the clock that times it.
///
/// The lock is never held across an `.await`.
pub(crate) struct SharedRunState {
    state: Mutex<RunState>,
    clock: Arc<dyn Clock>,
}

impl SharedRunState {
    pub(crate) fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(RunState::default()),
            clock,
        }
    }

    pub(crate) fn snapshot(&self) -> RunState {
        self.lock().clone()
    }

    pub(crate) fn stats(&self) -> RunStats {
        let now = self.clock.now();
        self.lock().stats_at(now)
    }

    pub(crate) fn is_active(&self) -> bool {
        self.lock().status.is_active()
    }

    /// Moves to `Running` and re-arms the stop flag, atomically with respect
    /// to `request_stop`.
    pub(crate) fn begin(
        &self,
        algorithm: Algorithm,
        token: &CancelToken,
    ) -> Result<(), SessionError> {
        let now = self.clock.now();
        let mut state = self.lock();
        if state.status.is_active() {
            return Err(SessionError::AlreadyRunning);
        }
        token.reset();
        *state = RunState {
            status: RunStatus::Running,
            algorithm: Some(algorithm),
            comparisons: 0,
            swaps: 0,
            started_at: Some(now),
            elapsed: None,
        };
        Ok(())
    }

    /// Returns true when an active run was told to stop.
    pub(crate) fn request_stop(&self, token: &CancelToken) -> bool {
        let mut state = self.lock();
        if !state.status.is_active() {
            return false;
        }
        token.request_stop();
        state.status = RunStatus::Stopping;
        true
    }

    pub(crate) fn record_comparison(&self) -> RunStats {
        self.bump(|state| state.comparisons += 1)
    }

    pub(crate) fn record_swap(&self) -> RunStats {
        self.bump(|state| state.swaps += 1)
    }

    pub(crate) fn finish(&self, outcome: RunOutcome) -> RunStats {
        let now = self.clock.now();
        let mut state = self.lock();
        state.status = outcome.into();
        state.elapsed = Some(
            state
                .started_at
                .map(|started| now.saturating_duration_since(started))
                .unwrap_or_default(),
        );
        state.stats_at(now)
    }

    /// Back to `Idle` with cleared counters, unless a run is active.
    pub(crate) fn reset(&self) -> Result<(), SessionError> {
        let mut state = self.lock();
        if state.status.is_active() {
            return Err(SessionError::Busy);
        }
        *state = RunState::default();
        Ok(())
    }

    fn bump(&self, apply: impl FnOnce(&mut RunState)) -> RunStats {
        let now = self.clock.now();
        let mut state = self.lock();
        apply(&mut *state);
        state.stats_at(now)
    }

    fn lock(&self) -> MutexGuard<'_, RunState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
