use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use sortvis_core::{Effect, Msg, RunReport};
use sortvis_engine::{EngineEvent, EngineHandle};

pub struct EffectRunner {
    engine: EngineHandle,
    last_report: Arc<Mutex<Option<RunReport>>>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self {
            engine,
            last_report: Arc::new(Mutex::new(None)),
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::GenerateSequence { size } => {
                    engine_debug!("GenerateSequence size={}", size);
                    self.engine.generate(size);
                }
                Effect::StartRun {
                    algorithm,
                    sequence,
                    speed,
                } => {
                    engine_info!(
                        "StartRun algorithm={} len={} speed={}",
                        algorithm,
                        sequence.len(),
                        speed
                    );
                    self.engine.start(algorithm, sequence, speed);
                }
                Effect::RequestStop => {
                    self.engine.request_stop();
                }
            }
        }
    }

    /// Report of the most recent finished run, as the engine produced it.
    pub fn last_report(&self) -> Option<RunReport> {
        self.last_report
            .lock()
            .map(|report| report.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        let last_report = self.last_report.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(Duration::from_millis(20)) else {
                continue;
            };
            let msg = match event {
                EngineEvent::Generated(values) => Msg::SequenceGenerated(values),
                EngineEvent::Step(step) => Msg::Step(step),
                EngineEvent::Stats(stats) => Msg::StatsChanged(stats),
                EngineEvent::RunFinished(report) => {
                    let msg = Msg::RunFinished {
                        outcome: report.outcome,
                        stats: report.stats,
                    };
                    if let Ok(mut slot) = last_report.lock() {
                        *slot = Some(report);
                    }
                    msg
                }
                EngineEvent::Rejected(err) => {
                    engine_warn!("Engine rejected command: {}", err);
                    Msg::NoOp
                }
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        });
    }
}
