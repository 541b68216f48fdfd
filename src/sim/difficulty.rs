//! Difficulty presets and the runtime difficulty setting

use serde::{Deserialize, Serialize};

use crate::consts::{GAP_STEP, MAX_SPEED, MIN_GAP, SPEED_STEP};

/// Named difficulty presets selectable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPreset {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyPreset {
    pub const ALL: [DifficultyPreset; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "EASY",
            DifficultyPreset::Medium => "MEDIUM",
            DifficultyPreset::Hard => "HARD",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(DifficultyPreset::Easy),
            "medium" | "med" => Some(DifficultyPreset::Medium),
            "hard" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }

    /// Horizontal scroll speed (pixels per tick)
    pub fn speed(&self) -> f32 {
        match self {
            DifficultyPreset::Easy => 2.5,
            DifficultyPreset::Medium => 3.2,
            DifficultyPreset::Hard => 4.0,
        }
    }

    /// Vertical opening between the two halves of a pipe pair
    pub fn gap(&self) -> f32 {
        match self {
            DifficultyPreset::Easy => 190.0,
            DifficultyPreset::Medium => 170.0,
            DifficultyPreset::Hard => 150.0,
        }
    }

    pub fn setting(&self) -> DifficultySetting {
        DifficultySetting {
            speed: self.speed(),
            gap: self.gap(),
        }
    }
}

impl std::fmt::Display for DifficultyPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live difficulty, seeded from a preset and tightened as the score grows.
///
/// Always `0 < speed <= MAX_SPEED` and `gap >= MIN_GAP`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultySetting {
    pub speed: f32,
    pub gap: f32,
}

impl DifficultySetting {
    /// One adaptive step: faster scroll, narrower openings, both clamped
    pub fn tighten(&mut self) {
        self.speed = (self.speed + SPEED_STEP).min(MAX_SPEED);
        self.gap = (self.gap - GAP_STEP).max(MIN_GAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        let medium = DifficultyPreset::Medium.setting();
        assert_eq!(medium.speed, 3.2);
        assert_eq!(medium.gap, 170.0);

        assert_eq!(DifficultyPreset::Easy.speed(), 2.5);
        assert_eq!(DifficultyPreset::Easy.gap(), 190.0);
        assert_eq!(DifficultyPreset::Hard.speed(), 4.0);
        assert_eq!(DifficultyPreset::Hard.gap(), 150.0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(DifficultyPreset::from_name("EASY"), Some(DifficultyPreset::Easy));
        assert_eq!(DifficultyPreset::from_name("med"), Some(DifficultyPreset::Medium));
        assert_eq!(DifficultyPreset::from_name(" Hard "), Some(DifficultyPreset::Hard));
        assert_eq!(DifficultyPreset::from_name("insane"), None);

        for preset in DifficultyPreset::ALL {
            assert_eq!(DifficultyPreset::from_name(preset.as_str()), Some(preset));
        }
    }

    #[test]
    fn test_tighten_clamps() {
        let mut setting = DifficultySetting {
            speed: 5.999,
            gap: 120.2,
        };
        setting.tighten();
        assert_eq!(setting.speed, MAX_SPEED);
        assert_eq!(setting.gap, MIN_GAP);

        // Further steps stay pinned at the bounds
        setting.tighten();
        assert_eq!(setting.speed, MAX_SPEED);
        assert_eq!(setting.gap, MIN_GAP);
    }

    #[test]
    fn test_tighten_single_step() {
        let mut setting = DifficultyPreset::Hard.setting();
        setting.tighten();
        assert!((setting.speed - 4.002).abs() < 1e-5);
        assert!((setting.gap - 149.5).abs() < 1e-5);
    }
}
