//! Sortvis engine: animated sorting engines and run orchestration.
mod algorithms;
mod cancel;
mod config;
mod engine;
mod error;
mod generate;
mod pacing;
mod run_state;
mod session;
mod sink;
mod store;
mod types;

pub use cancel::CancelToken;
pub use config::EngineConfig;
pub use engine::EngineHandle;
pub use error::{ScheduleError, SessionError};
pub use generate::{random_sequence, GenerationConfig};
pub use pacing::{Clock, Pacer, Scheduler, SystemClock, TokioScheduler};
pub use run_state::RunState;
pub use session::SortSession;
pub use sink::{ChannelStepSink, NullSink, StepSink};
pub use store::SequenceStore;
pub use types::EngineEvent;
