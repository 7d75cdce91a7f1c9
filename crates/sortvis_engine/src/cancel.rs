use std::sync::{Arc, Mutex, MutexGuard};

use tokio_util::sync::CancellationToken;

/// Stop flag shared between the orchestrator and the running engine.
///
/// Clones observe the same flag. `reset` arms a fresh flag for the next run
/// and is only called while no engine is running.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Mutex<CancellationToken>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent.
    pub fn request_stop(&self) {
        self.lock().cancel();
    }

    pub fn is_stop_requested(&self) -> bool {
        self.lock().is_cancelled()
    }

    pub fn reset(&self) {
        *self.lock() = CancellationToken::new();
    }

    /// Resolves once stop has been requested for the current run.
    pub async fn stopped(&self) {
        let token = self.lock().clone();
        token.cancelled().await;
    }

    fn lock(&self) -> MutexGuard<'_, CancellationToken> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
