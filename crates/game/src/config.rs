//! Game configuration (window, clock, city seed, simulation parameters).
//! Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::params::SimParams;

/// Persistent settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Simulation seconds added per rendered frame.
    #[serde(default = "default_time_step")]
    pub time_step: f32,
    /// Fixed city seed. `None` draws one from entropy.
    #[serde(default)]
    pub city_seed: Option<u64>,
    #[serde(default)]
    pub params: SimParams,
}

fn default_window_width() -> u32 {
    900
}
fn default_window_height() -> u32 {
    900
}
fn default_time_step() -> f32 {
    engine_core::DEFAULT_TIME_STEP
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            time_step: default_time_step(),
            city_seed: None,
            params: SimParams::default(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            return Self::parse(&data).unwrap_or_else(|e| {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            });
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            Ok(s) => {
                if let Err(e) = std::fs::write(&path, s) {
                    log::warn!("Could not write config to {:?}: {}", path, e);
                }
            }
            Err(e) => log::warn!("Could not serialize config: {}", e),
        }
    }

    fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GameConfig::parse("()").unwrap();
        assert_eq!(config.window_width, 900);
        assert_eq!(config.city_seed, None);
        assert_eq!(config.params, SimParams::default());
    }

    #[test]
    fn seed_and_nested_params_are_read() {
        let config = GameConfig::parse("(city_seed: Some(12), params: (wind_resistance: 0.0))").unwrap();
        assert_eq!(config.city_seed, Some(12));
        assert_eq!(config.params.wind_resistance, 0.0);
        assert_eq!(config.params.gravity, 9.8);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(GameConfig::parse("(window_width: \"wide\")").is_err());
    }
}
