//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; there is no
//! ambient global state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::{DifficultyPreset, DifficultySetting};
use super::obstacles::{self, ObstaclePair};
use super::physics::Bird;
use super::score::{AdaptiveMode, ScoreTracker};
use crate::consts::*;

/// Current top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Title screen, difficulty selection
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended; death-drop plays out
    GameOver,
}

/// Semantic input, already classified by the host's input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    DifficultySelected(DifficultyPreset),
    PlayRequested,
    JumpRequested,
    PauseToggleRequested,
    RestartRequested,
    QuitRequested,
}

impl GameEvent {
    /// Build a difficulty selection from a preset name ("easy", "MEDIUM", ...)
    pub fn difficulty_named(name: &str) -> Option<Self> {
        DifficultyPreset::from_name(name).map(GameEvent::DifficultySelected)
    }
}

/// Discrete audio cues raised by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Jumped,
    Scored,
    Died,
}

/// What the host should do after an event or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// Playing just ended; `new_best` is set when the score beat the best
    GameOver { new_best: Option<u32> },
    Quit,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Obstacle RNG, seeded once and carried across restarts
    pub rng: Pcg32,
    /// Current mode
    pub mode: Mode,
    /// Preset picked in the menu; every new game starts from it
    pub preset: DifficultyPreset,
    /// Live difficulty, tightened during play
    pub difficulty: DifficultySetting,
    /// Player bird
    pub bird: Bird,
    /// Live pipe pairs, earliest first
    pub pairs: Vec<ObstaclePair>,
    /// Current/best score and adaptive step
    pub score: ScoreTracker,
    /// Simulation tick counter (all modes)
    pub time_ticks: u64,
    /// Ticks spent in Playing this run (drives the wing animation)
    pub play_ticks: u64,
    /// Ticks since entering GameOver (drives the death spin)
    pub death_ticks: u64,
    /// Ground scroll offset in `[0, WIDTH)`
    pub ground_offset: f32,
    /// Cues raised since the host last drained them
    pub cues: Vec<Cue>,
}

impl GameState {
    /// Create a state sitting in the menu
    pub fn new(seed: u64, best: u32, preset: DifficultyPreset, adaptive: AdaptiveMode) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: Mode::Menu,
            preset,
            difficulty: preset.setting(),
            bird: Bird::default(),
            pairs: Vec::new(),
            score: ScoreTracker::new(best, adaptive),
            time_ticks: 0,
            play_ticks: 0,
            death_ticks: 0,
            ground_offset: 0.0,
            cues: Vec::new(),
        }
    }

    /// Rebuild everything a new run needs and enter Playing
    pub fn start_run(&mut self) {
        self.difficulty = self.preset.setting();
        self.bird = Bird::default();
        self.pairs = obstacles::initial_queue(self.difficulty.gap, &mut self.rng);
        self.score.reset();
        self.play_ticks = 0;
        self.death_ticks = 0;
        self.mode = Mode::Playing;
    }

    /// Snapshot for renderer/HUD collaborators
    pub fn frame(&self) -> Frame {
        let bird_rotation = match self.mode {
            Mode::GameOver => (self.death_ticks as f32 * DEATH_SPIN_PER_TICK) % 360.0,
            _ => self.bird.rotation(),
        };
        Frame {
            mode: self.mode,
            preset: self.preset,
            bird_x: BIRD_X,
            bird_y: self.bird.y,
            bird_rotation,
            wing_frame: (self.play_ticks % WING_FRAMES) as u8,
            obstacles: self.pairs.iter().flat_map(|p| p.halves()).collect(),
            score: self.score.current(),
            best: self.score.best(),
            ground_offset: self.ground_offset,
        }
    }
}

/// Per-tick presentation data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub mode: Mode,
    pub preset: DifficultyPreset,
    pub bird_x: f32,
    pub bird_y: f32,
    /// Sprite tilt in degrees
    pub bird_rotation: f32,
    pub wing_frame: u8,
    /// Pipe halves, two per live pair, upper first
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub best: u32,
    pub ground_offset: f32,
}
