//! Bird physics: fixed-step gravity integration and jump impulses
//!
//! Positions use screen coordinates (y grows downward), so a negative
//! velocity moves the bird up.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Nose-up tilt while rising (degrees)
const RISING_TILT: f32 = -20.0;
/// Maximum nose-down tilt while falling (degrees)
const MAX_DIVE_TILT: f32 = 90.0;
/// Degrees of dive tilt per unit of downward velocity
const DIVE_TILT_PER_VEL: f32 = 6.0;

/// The player-controlled bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Vertical position of the sprite centre
    pub y: f32,
    /// Vertical velocity in pixels per tick (positive = downward)
    pub vel: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: BIRD_START_Y,
            vel: 0.0,
        }
    }
}

impl Bird {
    /// Visual tilt derived from the current velocity
    #[inline]
    pub fn rotation(&self) -> f32 {
        rotation_for_velocity(self.vel)
    }
}

/// Advance the bird by one tick: `vel += gravity; y += vel`
pub fn advance(bird: &mut Bird, gravity: f32) {
    bird.vel += gravity;
    bird.y += bird.vel;
}

/// Jump: overwrite the velocity (not additive)
pub fn apply_impulse(bird: &mut Bird, strength: f32) {
    bird.vel = strength;
}

/// Map velocity to sprite tilt in degrees.
///
/// Stateless; callers recompute it every frame instead of storing it.
pub fn rotation_for_velocity(vel: f32) -> f32 {
    if vel < 0.0 {
        RISING_TILT
    } else {
        (vel * DIVE_TILT_PER_VEL).min(MAX_DIVE_TILT)
    }
}

/// Post-collision fall. Same integration as play, but the bird comes to
/// rest on the ground line instead of falling forever.
pub fn death_drop(bird: &mut Bird, gravity: f32) {
    if bird.y >= FLOOR_Y {
        bird.y = FLOOR_Y;
        bird.vel = 0.0;
        return;
    }
    advance(bird, gravity);
    if bird.y > FLOOR_Y {
        bird.y = FLOOR_Y;
        bird.vel = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_integrates_velocity_first() {
        let mut bird = Bird { y: 100.0, vel: 0.0 };
        advance(&mut bird, GRAVITY);
        assert_eq!(bird.vel, 0.5);
        assert_eq!(bird.y, 100.5);

        advance(&mut bird, GRAVITY);
        assert_eq!(bird.vel, 1.0);
        assert_eq!(bird.y, 101.5);
    }

    #[test]
    fn test_impulse_overwrites_velocity() {
        let mut bird = Bird { y: 100.0, vel: 7.5 };
        apply_impulse(&mut bird, JUMP_STRENGTH);
        assert_eq!(bird.vel, JUMP_STRENGTH);

        // Jumping twice does not stack
        apply_impulse(&mut bird, JUMP_STRENGTH);
        assert_eq!(bird.vel, JUMP_STRENGTH);
    }

    #[test]
    fn test_rotation_mapping() {
        assert_eq!(rotation_for_velocity(-8.0), -20.0);
        assert_eq!(rotation_for_velocity(-0.1), -20.0);
        assert_eq!(rotation_for_velocity(0.0), 0.0);
        assert_eq!(rotation_for_velocity(2.0), 12.0);
        assert_eq!(rotation_for_velocity(15.0), 90.0);
        assert_eq!(rotation_for_velocity(100.0), 90.0);
    }

    #[test]
    fn test_rotation_follows_velocity_without_state() {
        let mut bird = Bird::default();
        apply_impulse(&mut bird, JUMP_STRENGTH);
        assert_eq!(bird.rotation(), -20.0);

        // Once velocity turns positive the tilt snaps to the dive mapping
        for _ in 0..17 {
            advance(&mut bird, GRAVITY);
        }
        assert_eq!(bird.vel, 0.5);
        assert_eq!(bird.rotation(), 3.0);
    }

    #[test]
    fn test_death_drop_rests_on_ground() {
        let mut bird = Bird {
            y: FLOOR_Y - 1.0,
            vel: 4.0,
        };
        death_drop(&mut bird, GRAVITY);
        assert_eq!(bird.y, FLOOR_Y);
        assert_eq!(bird.vel, 0.0);

        death_drop(&mut bird, GRAVITY);
        assert_eq!(bird.y, FLOOR_Y);
    }
}
