//! Game settings and preferences
//!
//! Persisted as JSON next to the high-score file. A missing or broken file
//! falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_RATE_HZ;
use crate::highscores::DEFAULT_HIGHSCORE_PATH;
use crate::sim::{AdaptiveMode, DifficultyPreset};

/// Default settings file name
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preset highlighted in the menu at startup
    pub difficulty: DifficultyPreset,
    /// Fixed RNG seed; `None` picks a fresh one per process
    pub seed: Option<u64>,
    /// Where the best score is stored
    pub highscore_path: PathBuf,
    /// Adaptive difficulty behaviour
    pub adaptive: AdaptiveMode,
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: DifficultyPreset::Medium,
            seed: None,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            adaptive: AdaptiveMode::EveryTick,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl Settings {
    /// Read settings, reporting what went wrong
    pub fn try_load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&json)?;
        if settings.tick_rate_hz == 0 {
            log::warn!("tick_rate_hz of 0 is invalid, using {}", TICK_RATE_HZ);
            settings.tick_rate_hz = TICK_RATE_HZ;
        }
        Ok(settings)
    }

    /// Load settings, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Seed to use for this process
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.difficulty, DifficultyPreset::Medium);
        assert_eq!(settings.tick_rate_hz, 60);
        assert_eq!(settings.adaptive, AdaptiveMode::EveryTick);
        assert_eq!(settings.highscore_path, PathBuf::from("highscore.txt"));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            difficulty: DifficultyPreset::Hard,
            seed: Some(1234),
            highscore_path: dir.path().join("best.txt"),
            adaptive: AdaptiveMode::OncePerThreshold,
            tick_rate_hz: 30,
        };

        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "difficulty": "Easy", "adaptive": "once_per_threshold" }"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.difficulty, DifficultyPreset::Easy);
        assert_eq!(settings.adaptive, AdaptiveMode::OncePerThreshold);
        assert_eq!(settings.tick_rate_hz, 60);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_missing_or_broken_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(Settings::load(&missing), Settings::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(Settings::try_load(&broken), Err(SettingsError::Json(_))));
        assert_eq!(Settings::load(&broken), Settings::default());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "tick_rate_hz": 0 }"#).unwrap();
        assert_eq!(Settings::load(&path).tick_rate_hz, 60);
    }

    #[test]
    fn test_resolve_seed() {
        let settings = Settings {
            seed: Some(77),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(), 77);
    }
}
