//! Start-up parameters, optionally loaded from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{ColorError, HexColor, MIN_CELL_SIZE, particle::DEFAULT_POOL_SIZE};

pub const DEFAULT_CELL_SIZE: f32 = 10.0;
pub const DEFAULT_COLOR: &str = "#00ff00";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Edge of one grid cell in pixels.
    pub cell_size: f32,
    /// Particles in the ambient pool after every reset.
    pub particle_count: usize,
    /// Initial active color, `#rrggbb` or `#rgb`.
    pub color: String,
    /// Fixed RNG seed for a reproducible run. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            particle_count: DEFAULT_POOL_SIZE,
            color: DEFAULT_COLOR.to_owned(),
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cell size must be a number of at least 1 pixel, got {0}")]
    InvalidCellSize(f32),
    #[error("invalid initial color: {0}")]
    InvalidColor(#[from] ColorError),
}

impl SimulationConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size >= MIN_CELL_SIZE) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        HexColor::parse(&self.color)?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> String {
        // a struct of plain fields always serializes
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
