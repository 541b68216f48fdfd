//! Collision detection for the bird against pipes and world bounds
//!
//! Everything is axis-aligned. The bird's hitbox is its unrotated sprite
//! box; tilt is presentation only.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacles::ObstaclePair;
use super::physics::Bird;
use crate::consts::*;

/// Axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap test; rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Hitbox of the bird at its current position
pub fn bird_rect(bird: &Bird) -> Rect {
    Rect::from_center(
        Vec2::new(BIRD_X, bird.y),
        Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
    )
}

/// Check if the bird hit the ceiling or the ground
pub fn bird_out_of_bounds(bird: &Bird) -> bool {
    bird.y <= 0.0 || bird.y >= FLOOR_Y
}

/// Check if the bird overlaps any half of any live pair
pub fn bird_hits_obstacles(bird: &Bird, pairs: &[ObstaclePair]) -> bool {
    let hitbox = bird_rect(bird);
    pairs
        .iter()
        .flat_map(|pair| pair.halves())
        .any(|half| hitbox.overlaps(&half))
}

/// Combined check; the caller does not learn which obstacle or bound was hit
pub fn check(bird: &Bird, pairs: &[ObstaclePair]) -> bool {
    bird_hits_obstacles(bird, pairs) || bird_out_of_bounds(bird)
}
