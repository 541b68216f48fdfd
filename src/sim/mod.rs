//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies
//!
//! Store I/O is confined to [`Game`], at well-defined transition points.

pub mod collision;
pub mod difficulty;
pub mod game;
pub mod obstacles;
pub mod physics;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Rect, bird_rect, check as check_collision};
pub use difficulty::{DifficultyPreset, DifficultySetting};
pub use game::{Flow, Game};
pub use obstacles::ObstaclePair;
pub use physics::{Bird, rotation_for_velocity};
pub use score::{AdaptiveMode, ScoreState, ScoreTracker};
pub use state::{Cue, Frame, GameEvent, GameState, Mode, Step};
pub use tick::{handle_event, tick};
