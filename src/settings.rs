//! Runner settings
//!
//! Loaded from a JSON file; missing fields fall back to defaults and an
//! unreadable file falls back to `Settings::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_MS;

/// Headless runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
    /// Elapsed time handed to each tick
    pub tick_ms: f64,
    /// Paddle drift steps run between ticks (the idle cycle rate)
    pub drift_steps_per_tick: u32,
    /// Stop after this many ticks even if the round is still going
    pub max_ticks: u64,
    /// Rounds to play back to back, restarting after each game over
    pub rounds: u32,
    /// Let the built-in autopilot steer the paddle
    pub autopilot: bool,
    /// Print the final frame as JSON
    pub dump_final_frame: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            drift_steps_per_tick: 20,
            max_ticks: 60 * 60 * 5,
            rounds: 1,
            autopilot: true,
            dump_final_frame: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
