//! Game settings
//!
//! Loaded once at startup from an optional JSON file. Missing fields fall back
//! to the defaults below.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Fixed tick rate; every per-tick physics constant is derived from it
    pub ticks_per_second: u32,
    /// RNG seed for meteor spawning
    pub seed: u64,

    // === Timers ===
    /// Time between meteor spawns
    pub meteor_spawn_interval_ms: u64,
    /// Minimum time between two shots
    pub shoot_cooldown_ms: u64,

    // === Play field ===
    pub field_width: f64,
    pub field_height: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks_per_second: TICKS_PER_SECOND,
            seed: 0x5EED_0F_5EED,
            meteor_spawn_interval_ms: METEOR_SPAWN_INTERVAL_MS,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,
            field_width: SCREEN_WIDTH,
            field_height: SCREEN_HEIGHT,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is absent or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings: {err}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ticks_per_second == 0 {
            return Err(Error::InvalidTickRate);
        }
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(Error::InvalidPlayField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        Ok(())
    }

    /// Bullet travel per tick
    pub fn bullet_speed_per_tick(&self) -> f64 {
        BULLET_SPEED / self.ticks_per_second as f64
    }

    /// Player rotation per tick while a rotate input is held
    pub fn rotation_speed_per_tick(&self) -> f64 {
        PLAYER_ROTATION_SPEED / self.ticks_per_second as f64
    }

    pub fn meteor_spawn_interval(&self) -> Duration {
        Duration::from_millis(self.meteor_spawn_interval_ms)
    }

    pub fn shoot_cooldown(&self) -> Duration {
        Duration::from_millis(self.shoot_cooldown_ms)
    }
}
