//! Sortvis core: shared run vocabulary, pacing math and the pure
//! presentation state machine.
mod effect;
mod msg;
mod pacing;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use pacing::{delay_for_speed, PacingConfig};
pub use state::{AppState, BarMark};
pub use types::{
    Algorithm, ParseAlgorithmError, RunOutcome, RunReport, RunStats, RunStatus, StepEvent, Value,
};
pub use update::update;
pub use view_model::{AppViewModel, BarView};
