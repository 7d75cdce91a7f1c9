use thiserror::Error;

/// The scheduling primitive refused to defer execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("scheduler rejected suspension: {message}")]
pub struct ScheduleError {
    pub message: String,
}

impl ScheduleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a sort run is already in progress")]
    AlreadyRunning,
    #[error("the sequence is owned by a running sort")]
    Busy,
}

/// Why an engine stopped before finishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Interrupt {
    /// Stop was observed at a checkpoint.
    Stopped,
    Failed(ScheduleError),
}

impl From<ScheduleError> for Interrupt {
    fn from(err: ScheduleError) -> Self {
        Interrupt::Failed(err)
    }
}
