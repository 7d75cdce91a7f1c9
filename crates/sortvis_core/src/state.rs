use crate::view_model::{AppViewModel, BarView};
use crate::{
    delay_for_speed, Algorithm, PacingConfig, RunOutcome, RunStats, RunStatus, StepEvent, Value,
};

pub const DEFAULT_SIZE: usize = 40;
pub const DEFAULT_SPEED: u32 = 100;

/// Visual state of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarMark {
    #[default]
    Plain,
    Compare,
    Swap,
    Sorted,
}

impl BarMark {
    fn is_transient(self) -> bool {
        matches!(self, BarMark::Compare | BarMark::Swap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bar {
    value: Value,
    mark: BarMark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    bars: Vec<Bar>,
    status: RunStatus,
    algorithm: Algorithm,
    size: usize,
    speed: u32,
    pacing: PacingConfig,
    stats: RunStats,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            bars: Vec::new(),
            status: RunStatus::Idle,
            algorithm: Algorithm::default(),
            size: DEFAULT_SIZE,
            speed: DEFAULT_SPEED,
            pacing: PacingConfig::default(),
            stats: RunStats::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pacing(pacing: PacingConfig) -> Self {
        Self {
            pacing,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let active = self.status.is_active();
        AppViewModel {
            status: self.status,
            algorithm: self.algorithm,
            bars: self
                .bars
                .iter()
                .map(|bar| BarView {
                    value: bar.value,
                    mark: bar.mark,
                })
                .collect(),
            size: self.size,
            speed: self.speed,
            delay_ms: delay_for_speed(self.speed, &self.pacing).as_millis() as u64,
            comparisons: self.stats.comparisons,
            swaps: self.stats.swaps,
            elapsed_ms: self.stats.elapsed_ms,
            controls_enabled: !active,
            stop_enabled: active,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn values(&self) -> Vec<Value> {
        self.bars.iter().map(|bar| bar.value).collect()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn speed(&self) -> u32 {
        self.speed
    }

    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = size;
        self.mark_dirty();
    }

    pub(crate) fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(1, self.pacing.max_speed.max(1));
        self.mark_dirty();
    }

    pub(crate) fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.mark_dirty();
    }

    pub(crate) fn load_sequence(&mut self, values: Vec<Value>) {
        self.size = values.len();
        self.bars = values
            .into_iter()
            .map(|value| Bar {
                value,
                mark: BarMark::Plain,
            })
            .collect();
        self.status = RunStatus::Idle;
        self.stats = RunStats::default();
        self.mark_dirty();
    }

    pub(crate) fn begin_run(&mut self) {
        for bar in &mut self.bars {
            bar.mark = BarMark::Plain;
        }
        self.status = RunStatus::Running;
        self.stats = RunStats::default();
        self.mark_dirty();
    }

    pub(crate) fn begin_stopping(&mut self) {
        self.status = RunStatus::Stopping;
        self.mark_dirty();
    }

    /// Counters only move forward within a run; polled snapshots may arrive
    /// after a newer pushed value.
    pub(crate) fn apply_stats(&mut self, stats: RunStats) {
        let merged = RunStats {
            comparisons: self.stats.comparisons.max(stats.comparisons),
            swaps: self.stats.swaps.max(stats.swaps),
            elapsed_ms: self.stats.elapsed_ms.max(stats.elapsed_ms),
        };
        if self.stats != merged {
            self.stats = merged;
            self.mark_dirty();
        }
    }

    pub(crate) fn finish_run(&mut self, outcome: RunOutcome, stats: RunStats) {
        self.status = outcome.into();
        self.stats = stats;
        if outcome == RunOutcome::Aborted {
            self.clear_transient_marks();
        }
        self.mark_dirty();
    }

    /// Mirrors one engine step onto the bars. Out-of-range indices are
    /// ignored: events from a stale run must not crash the view.
    pub(crate) fn apply_step(&mut self, event: StepEvent) {
        match event {
            StepEvent::Compare(i, j) => {
                self.clear_transient_marks();
                self.set_mark(i, BarMark::Compare);
                self.set_mark(j, BarMark::Compare);
            }
            StepEvent::Swap(i, j) => {
                self.clear_transient_marks();
                if i < self.bars.len() && j < self.bars.len() {
                    let (a, b) = (self.bars[i].value, self.bars[j].value);
                    self.bars[i].value = b;
                    self.bars[j].value = a;
                }
                self.set_mark(i, BarMark::Swap);
                self.set_mark(j, BarMark::Swap);
            }
            StepEvent::SetValue { index, value } => {
                self.clear_transient_marks();
                if let Some(bar) = self.bars.get_mut(index) {
                    bar.value = value;
                }
                self.set_mark(index, BarMark::Swap);
            }
            StepEvent::MarkSettled(index) => {
                if let Some(bar) = self.bars.get_mut(index) {
                    bar.mark = BarMark::Sorted;
                }
            }
            StepEvent::Done => {
                for bar in &mut self.bars {
                    bar.mark = BarMark::Sorted;
                }
            }
        }
        self.mark_dirty();
    }

    fn set_mark(&mut self, index: usize, mark: BarMark) {
        if let Some(bar) = self.bars.get_mut(index) {
            // Settled bars keep their colour even when the engine revisits them.
            if bar.mark != BarMark::Sorted {
                bar.mark = mark;
            }
        }
    }

    fn clear_transient_marks(&mut self) {
        for bar in &mut self.bars {
            if bar.mark.is_transient() {
                bar.mark = BarMark::Plain;
            }
        }
    }
}
