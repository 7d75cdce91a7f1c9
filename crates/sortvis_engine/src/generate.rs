use rand::Rng;
use serde::{Deserialize, Serialize};
use sortvis_core::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Smallest bar height, inclusive.
    pub min_value: Value,
    /// Largest bar height, exclusive.
    pub max_value: Value,
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_value: 20,
            max_value: 380,
            default_size: 40,
            max_size: 200,
        }
    }
}

/// `size` values drawn uniformly from `min_value..max_value`, with `size`
/// capped at `max_size`.
pub fn random_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    config: &GenerationConfig,
) -> Vec<Value> {
    let size = size.min(config.max_size);
    if config.max_value <= config.min_value {
        return vec![config.min_value; size];
    }
    (0..size)
        .map(|_| rng.gen_range(config.min_value..config.max_value))
        .collect()
}
