use std::fs;
use std::path::Path;

use anyhow::Context;
use engine_logging::engine_info;
use serde::{Deserialize, Serialize};
use sortvis_core::Algorithm;
use sortvis_engine::EngineConfig;

use super::Cli;

/// Everything the front end can be configured with, loaded from RON.
///
/// ```ron
/// (
///     algorithm: quick,
///     size: Some(60),
///     speed: 180,
///     engine: (pacing: (min_delay_ms: 1)),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub algorithm: Algorithm,
    /// Falls back to the engine's default size.
    pub size: Option<usize>,
    pub speed: u32,
    pub seed: Option<u64>,
    /// Terminal rows used for the tallest bar.
    pub bar_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            algorithm: Algorithm::default(),
            size: None,
            speed: 100,
            seed: None,
            bar_rows: 16,
        }
    }
}

impl Settings {
    pub fn size(&self) -> usize {
        self.size.unwrap_or(self.engine.generation.default_size)
    }

    /// Command-line flags win over the file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(algorithm) = cli.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(size) = cli.size {
            self.size = Some(size);
        }
        if let Some(speed) = cli.speed {
            self.speed = speed;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
    }
}

pub(crate) fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings: Settings = ron::from_str(&content)
        .with_context(|| format!("failed to parse settings in {}", path.display()))?;
    engine_info!("Loaded settings from {:?}", path);
    Ok(settings)
}
