//! Game driver: the state machine plus its high-score store
//!
//! Store I/O happens only here, at construction and on the Playing ->
//! GameOver transition, so the tick code stays free of side effects.

use super::difficulty::DifficultyPreset;
use super::score::AdaptiveMode;
use super::state::{Cue, Frame, GameEvent, GameState, Mode, Step};
use super::tick::{handle_event, tick};
use crate::highscores::ScoreStore;
use crate::settings::Settings;

/// Whether the host loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running game bound to a best-score store
pub struct Game<S: ScoreStore> {
    state: GameState,
    store: S,
}

impl<S: ScoreStore> Game<S> {
    /// Load the best score once and start in the menu
    pub fn new(store: S, seed: u64, preset: DifficultyPreset, adaptive: AdaptiveMode) -> Self {
        let best = store.load();
        Self {
            state: GameState::new(seed, best, preset, adaptive),
            store,
        }
    }

    pub fn from_settings(store: S, settings: &Settings, seed: u64) -> Self {
        Self::new(store, seed, settings.difficulty, settings.adaptive)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts and tests that need to stage a scenario
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn handle_event(&mut self, event: GameEvent) -> Flow {
        match handle_event(&mut self.state, event) {
            Step::Quit => Flow::Quit,
            step => {
                self.settle(step);
                Flow::Continue
            }
        }
    }

    pub fn tick(&mut self) {
        let step = tick(&mut self.state);
        self.settle(step);
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame {
        self.state.frame()
    }

    /// Take the cues raised since the last call
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.state.cues)
    }

    fn settle(&mut self, step: Step) {
        if let Step::GameOver {
            new_best: Some(best),
        } = step
        {
            // Best is already updated in memory; a failed write only loses persistence
            if let Err(e) = self.store.save(best) {
                log::warn!("Could not persist high score {}: {}", best, e);
            }
        }
    }
}
