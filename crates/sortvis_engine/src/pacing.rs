use std::sync::Arc;
use std::time::{Duration, Instant};

use sortvis_core::{delay_for_speed, PacingConfig};

use crate::{CancelToken, ScheduleError};

/// Deferred-execution primitive the engines suspend on.
#[async_trait::async_trait]
pub trait Scheduler: Send + Sync {
    /// Waits for `delay`, returning early once `token` is stopped.
    async fn after(&self, delay: Duration, token: &CancelToken) -> Result<(), ScheduleError>;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[async_trait::async_trait]
impl Scheduler for TokioScheduler {
    async fn after(&self, delay: Duration, token: &CancelToken) -> Result<(), ScheduleError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(ScheduleError::new("no tokio runtime available"));
        }
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = token.stopped() => {}
        }
        Ok(())
    }
}

/// Monotonic clock used for elapsed-time stats.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Pacing for one run: a fixed delay and the scheduler that waits it out.
#[derive(Clone)]
pub struct Pacer {
    delay: Duration,
    scheduler: Arc<dyn Scheduler>,
}

impl Pacer {
    pub fn new(delay: Duration, scheduler: Arc<dyn Scheduler>) -> Self {
        Self { delay, scheduler }
    }

    pub fn for_speed(speed: u32, config: &PacingConfig, scheduler: Arc<dyn Scheduler>) -> Self {
        Self::new(delay_for_speed(speed, config), scheduler)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn suspend(&self, token: &CancelToken) -> Result<(), ScheduleError> {
        self.scheduler.after(self.delay, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tokio_scheduler_wakes_early_on_stop() {
        let token = CancelToken::new();
        token.request_stop();
        let pacer = Pacer::new(Duration::from_secs(3600), Arc::new(TokioScheduler));

        let started = Instant::now();
        pacer.suspend(&token).await.unwrap();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn pacer_uses_mapped_delay() {
        let pacer = Pacer::for_speed(200, &PacingConfig::default(), Arc::new(TokioScheduler));
        assert_eq!(pacer.delay(), Duration::from_millis(2));
    }
}
