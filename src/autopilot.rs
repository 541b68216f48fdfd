//! Idle/demo mode - a simple policy that plays the game
//!
//! Picks the next pair the bird has not yet cleared and flaps whenever the
//! bird is falling below a target line inside that pair's opening.

use crate::consts::*;
use crate::sim::{GameEvent, GameState, Mode, ObstaclePair};

/// How far into the opening (from its top) the bird aims
const TARGET_DEPTH: f32 = 115.0;
/// Keep the target this far above the ground line
const GROUND_MARGIN: f32 = 40.0;

/// First pair whose right edge is still ahead of the bird's left edge
pub fn next_pair(pairs: &[ObstaclePair]) -> Option<&ObstaclePair> {
    let bird_left = BIRD_X - BIRD_WIDTH / 2.0;
    pairs.iter().find(|p| p.right() > bird_left)
}

/// Y the bird tries to hover around
pub fn target_y(pair: Option<&ObstaclePair>) -> f32 {
    let target = match pair {
        Some(pair) => pair.gap_top + TARGET_DEPTH.min(pair.gap_height * 0.7),
        None => BIRD_START_Y,
    };
    target.min(FLOOR_Y - GROUND_MARGIN)
}

/// Decide the input for this tick, if any
pub fn decide(state: &GameState) -> Option<GameEvent> {
    if state.mode != Mode::Playing {
        return None;
    }
    let target = target_y(next_pair(&state.pairs));
    if state.bird.y > target && state.bird.vel >= 0.0 {
        Some(GameEvent::JumpRequested)
    } else {
        None
    }
}
