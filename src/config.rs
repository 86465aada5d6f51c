use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScatterError};
use crate::scatter::AnimationParams;
use crate::scrubber::ScrubberConfig;
use crate::timeline::TimelineConfig;

/// Everything tunable about one animated title. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub params: AnimationParams,
    pub timeline: TimelineConfig,
    pub scrubber: ScrubberConfig,
    /// Fraction of the mesh size to shift back, per axis
    pub anchor: Vec3,
    /// Placement of the title in the scene
    pub translation: Vec3,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            params: AnimationParams::default(),
            timeline: TimelineConfig::default(),
            scrubber: ScrubberConfig::default(),
            anchor: Vec3::new(0.5, 0.5, 0.0),
            translation: Vec3::new(0.0, -40.0, 0.0),
        }
    }
}

impl ScatterConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|error| ScatterError::Config(format!("cannot read {}: {error}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
