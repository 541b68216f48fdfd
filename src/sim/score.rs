//! Score bookkeeping and the adaptive difficulty step

use serde::{Deserialize, Serialize};

use super::difficulty::DifficultySetting;
use crate::consts::TIGHTEN_EVERY;

/// How the adaptive step reacts to a score sitting on a multiple of five
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdaptiveMode {
    /// Tighten on every tick while the score is a multiple of five
    #[default]
    EveryTick,
    /// Tighten once per distinct score that reaches a multiple of five
    OncePerThreshold,
}

/// Current and best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub current: u32,
    pub best: u32,
}

/// Counts passed pairs and drives difficulty tightening
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    pub state: ScoreState,
    mode: AdaptiveMode,
    /// Score at which `OncePerThreshold` last tightened
    last_tightened: Option<u32>,
}

impl ScoreTracker {
    pub fn new(best: u32, mode: AdaptiveMode) -> Self {
        Self {
            state: ScoreState { current: 0, best },
            mode,
            last_tightened: None,
        }
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.state.current
    }

    #[inline]
    pub fn best(&self) -> u32 {
        self.state.best
    }

    pub fn mode(&self) -> AdaptiveMode {
        self.mode
    }

    /// New game: zero the running score, keep the best
    pub fn reset(&mut self) {
        self.state.current = 0;
        self.last_tightened = None;
    }

    /// One point per recycled pair
    pub fn record_pass(&mut self) {
        self.state.current += 1;
    }

    /// Run the per-tick adaptive check. Returns `true` if the setting changed.
    pub fn apply_adaptive(&mut self, setting: &mut DifficultySetting) -> bool {
        let current = self.state.current;
        if current == 0 || current % TIGHTEN_EVERY != 0 {
            return false;
        }
        if self.mode == AdaptiveMode::OncePerThreshold {
            if self.last_tightened == Some(current) {
                return false;
            }
            self.last_tightened = Some(current);
        }
        setting.tighten();
        true
    }

    /// Settle the run. Returns the new best when `current` beat it.
    pub fn finish(&mut self) -> Option<u32> {
        if self.state.current > self.state.best {
            self.state.best = self.state.current;
            Some(self.state.best)
        } else {
            None
        }
    }
}
