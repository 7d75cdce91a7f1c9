use serde::{Deserialize, Serialize};
use sortvis_core::PacingConfig;

use crate::GenerationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub pacing: PacingConfig,
    pub generation: GenerationConfig,
}
