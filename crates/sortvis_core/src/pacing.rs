use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bounds for mapping the speed control onto a per-step delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub max_speed: u32,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            max_speed: 200,
            min_delay_ms: 2,
            max_delay_ms: 200,
        }
    }
}

/// Maps a speed value to the delay between animated steps.
///
/// Higher speed gives a shorter delay. Speed is clamped into
/// `1..=max_speed` and the result into `min_delay_ms..=max_delay_ms`.
pub fn delay_for_speed(speed: u32, config: &PacingConfig) -> Duration {
    let max_speed = config.max_speed.max(1);
    let min_delay = config.min_delay_ms.min(config.max_delay_ms);
    let max_delay = config.max_delay_ms.max(min_delay);

    let speed = speed.clamp(1, max_speed) as f64;
    let span = (max_delay - min_delay) as f64;
    let delay = (max_delay as f64 - (speed / max_speed as f64) * span).round() as u64;

    Duration::from_millis(delay.clamp(min_delay, max_delay))
}
