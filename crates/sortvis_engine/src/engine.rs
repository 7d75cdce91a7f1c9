use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_error};
use sortvis_core::{Algorithm, RunStats, Value};

use crate::sink::ChannelStepSink;
use crate::{EngineConfig, EngineEvent, SortSession, StepSink};

enum EngineCommand {
    Generate {
        size: usize,
    },
    Start {
        run_id: u64,
        algorithm: Algorithm,
        sequence: Vec<Value>,
        speed: u32,
    },
}

/// Runs a `SortSession` on a background tokio runtime.
///
/// Generate and start travel over a command channel; everything the session
/// reports comes back as `EngineEvent`s. Stop and stats polling go straight
/// to the shared session so they are never queued behind a run. A start
/// claims the session before it is queued, so a stop sent right after it
/// is never lost.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    event_rx: Arc<std::sync::Mutex<mpsc::Receiver<EngineEvent>>>,
    session: Arc<SortSession>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_session(|sink| SortSession::new(config, sink))
    }

    /// Lets callers swap in a seeded or custom-scheduled session.
    pub fn with_session(build: impl FnOnce(Arc<dyn StepSink>) -> SortSession) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let sink: Arc<dyn StepSink> = Arc::new(ChannelStepSink::new(event_tx.clone()));
        let session = Arc::new(build(sink));

        let worker_session = session.clone();
        let worker_events = event_tx.clone();
        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("failed to start engine runtime: {}", err);
                    // Starts already claimed the session; release them.
                    while let Ok(command) = cmd_rx.try_recv() {
                        if let EngineCommand::Start { run_id, .. } = command {
                            worker_session.abandon(run_id);
                        }
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let session = worker_session.clone();
                let event_tx = worker_events.clone();
                runtime.spawn(async move {
                    handle_command(&session, command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_tx,
            event_rx: Arc::new(std::sync::Mutex::new(event_rx)),
            session,
        }
    }

    pub fn generate(&self, size: usize) {
        let _ = self.cmd_tx.send(EngineCommand::Generate { size });
    }

    pub fn start(&self, algorithm: Algorithm, sequence: Vec<Value>, speed: u32) {
        let run_id = match self.session.begin(algorithm) {
            Ok(run_id) => run_id,
            Err(err) => {
                engine_debug!("start of {} rejected: {}", algorithm, err);
                let _ = self.event_tx.send(EngineEvent::Rejected(err));
                return;
            }
        };
        let command = EngineCommand::Start {
            run_id,
            algorithm,
            sequence,
            speed,
        };
        if self.cmd_tx.send(command).is_err() {
            engine_error!("engine worker is gone; abandoning run {}", run_id);
            self.session.abandon(run_id);
        }
    }

    pub fn request_stop(&self) {
        self.session.request_stop();
    }

    pub fn stats(&self) -> RunStats {
        self.session.stats()
    }

    pub fn is_running(&self) -> bool {
        self.session.run_state().status.is_active()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    session: &SortSession,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Generate { size } => session
            .generate(size)
            .map(EngineEvent::Generated)
            .unwrap_or_else(EngineEvent::Rejected),
        EngineCommand::Start {
            run_id,
            algorithm,
            sequence,
            speed,
        } => {
            let report = session.run_begun(run_id, algorithm, sequence, speed).await;
            EngineEvent::RunFinished(report)
        }
    };
    let _ = event_tx.send(event);
}
