//! Flappy Core - simulation core for a side-scrolling flappy arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `highscores`: Persisted best-score store
//! - `settings`: Player preferences and runtime configuration
//! - `autopilot`: Demo policy that plays the game on its own
//!
//! Rendering, audio playback and raw input polling live outside this crate.
//! Hosts feed classified [`sim::GameEvent`]s in and read [`sim::Frame`]s and
//! [`sim::Cue`]s out.

pub mod autopilot;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use settings::Settings;
pub use sim::{DifficultyPreset, Game, GameEvent, Mode};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICK_RATE_HZ: u32 = 60;

    /// World dimensions
    pub const WIDTH: f32 = 400.0;
    pub const HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 100.0;
    /// Y coordinate of the ground line; the bird dies at or below it
    pub const FLOOR_Y: f32 = HEIGHT - GROUND_HEIGHT;

    /// Bird defaults - fixed column, sprite-sized hitbox
    pub const BIRD_X: f32 = 60.0;
    pub const BIRD_START_Y: f32 = HEIGHT / 2.0;
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_STRENGTH: f32 = -8.0;

    /// Pipe sprite dimensions
    pub const PIPE_WIDTH: f32 = 90.0;
    pub const PIPE_HEIGHT: f32 = 500.0;
    /// Range the top of each opening is drawn from (inclusive)
    pub const GAP_TOP_MIN: i32 = 150;
    pub const GAP_TOP_MAX: i32 = 400;
    /// Left edge of a freshly spawned pair (centred on the right screen edge)
    pub const SPAWN_X: f32 = WIDTH - PIPE_WIDTH / 2.0;
    /// A pair whose left edge drops below this has fully left the screen
    pub const RECYCLE_X: f32 = -100.0;
    /// Horizontal distance between the two live pairs
    pub const PAIR_SPACING: f32 = (SPAWN_X - RECYCLE_X) / 2.0;

    /// Adaptive difficulty bounds and steps
    pub const MAX_SPEED: f32 = 6.0;
    pub const MIN_GAP: f32 = 120.0;
    pub const SPEED_STEP: f32 = 0.002;
    pub const GAP_STEP: f32 = 0.5;
    /// Tightening applies while the score is a multiple of this
    pub const TIGHTEN_EVERY: u32 = 5;

    /// Death-drop spin per tick (degrees)
    pub const DEATH_SPIN_PER_TICK: f32 = 5.0;
    /// Number of wing animation frames
    pub const WING_FRAMES: u64 = 3;
}
