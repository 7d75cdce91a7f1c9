use crate::{Algorithm, BarMark, RunStatus, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub status: RunStatus,
    pub algorithm: Algorithm,
    pub bars: Vec<BarView>,
    pub size: usize,
    pub speed: u32,
    /// Delay the current speed maps to, shown next to the speed control.
    pub delay_ms: u64,
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed_ms: u64,
    /// Generate, algorithm, size, speed and sort controls.
    pub controls_enabled: bool,
    pub stop_enabled: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarView {
    pub value: Value,
    pub mark: BarMark,
}
