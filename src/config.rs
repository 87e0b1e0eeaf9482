//! Runtime configuration.
//!
//! Gameplay rules (radii, speeds, scores) are fixed constants in the modules that use
//! them; only timing and presentation knobs are configurable here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "SPLASH_SHOOTER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation ticks per second
    pub frame_rate: u32,
    /// Milliseconds between enemy spawns
    pub spawn_interval_ms: u64,
    /// Length of the radius-shrink animation after a hit
    pub shrink_duration_ms: u64,
    /// World units per terminal half-block pixel
    pub pixel_scale: f32,
    /// Opacity of the black overlay painted each frame (lower = longer trails)
    pub trail_alpha: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            spawn_interval_ms: 1000,
            shrink_duration_ms: 500,
            pixel_scale: 4.0,
            trail_alpha: 0.1,
        }
    }
}

impl GameConfig {
    /// Load from the file named by `SPLASH_SHOOTER_CONFIG`, or fall back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json).map_err(|err| match err {
            GameError::ConfigParse { source, .. } => GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|source| GameError::ConfigParse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(GameError::InvalidConfig("frame_rate must be positive".into()));
        }
        if !(self.pixel_scale > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "pixel_scale must be positive, got {}",
                self.pixel_scale
            )));
        }
        if !(self.trail_alpha > 0.0 && self.trail_alpha <= 1.0) {
            return Err(GameError::InvalidConfig(format!(
                "trail_alpha must be in (0, 1], got {}",
                self.trail_alpha
            )));
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }

    /// Spawn interval expressed in ticks (at least one).
    pub fn spawn_period_ticks(&self) -> u32 {
        self.ms_to_ticks(self.spawn_interval_ms)
    }

    /// Shrink animation length expressed in ticks (at least one).
    pub fn shrink_ticks(&self) -> u32 {
        self.ms_to_ticks(self.shrink_duration_ms)
    }

    fn ms_to_ticks(&self, ms: u64) -> u32 {
        let ticks = ms.saturating_mul(self.frame_rate as u64) / 1000;
        ticks.clamp(1, u32::MAX as u64) as u32
    }
}
