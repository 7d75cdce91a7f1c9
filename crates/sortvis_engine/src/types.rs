use sortvis_core::{RunReport, RunStats, StepEvent, Value};

use crate::SessionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Generated(Vec<Value>),
    Step(StepEvent),
    Stats(RunStats),
    RunFinished(RunReport),
    /// A command was refused because of the current run.
    Rejected(SessionError),
}
