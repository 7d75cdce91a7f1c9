use std::sync::mpsc;

use sortvis_core::{RunStats, StepEvent};

use crate::EngineEvent;

/// Presentation side of a run. Both callbacks are invoked synchronously from
/// the engine, in program order.
pub trait StepSink: Send + Sync {
    fn on_step_event(&self, event: StepEvent);
    fn on_stats_changed(&self, stats: RunStats);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StepSink for NullSink {
    fn on_step_event(&self, _event: StepEvent) {}
    fn on_stats_changed(&self, _stats: RunStats) {}
}

/// Forwards steps and stats to an engine event channel.
pub struct ChannelStepSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelStepSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl StepSink for ChannelStepSink {
    fn on_step_event(&self, event: StepEvent) {
        let _ = self.tx.send(EngineEvent::Step(event));
    }

    fn on_stats_changed(&self, stats: RunStats) {
        let _ = self.tx.send(EngineEvent::Stats(stats));
    }
}
