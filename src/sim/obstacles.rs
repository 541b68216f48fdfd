//! Pipe pair generation, scrolling and recycling

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// An upper and a lower pipe sharing one opening.
///
/// The opening spans `gap_top..gap_top + gap_height`. Both halves share the
/// same left edge `x` and are `PIPE_WIDTH` wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Left edge of both halves
    pub x: f32,
    /// Y where the opening begins (bottom edge of the upper half)
    pub gap_top: f32,
    /// Height of the opening, fixed when the pair is created
    pub gap_height: f32,
}

impl ObstaclePair {
    /// Upper half: its bottom edge sits on the top of the opening
    pub fn upper(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_top - PIPE_HEIGHT,
            PIPE_WIDTH,
            PIPE_HEIGHT,
        )
    }

    /// Lower half: its top edge sits on the bottom of the opening
    pub fn lower(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_top + self.gap_height,
            PIPE_WIDTH,
            PIPE_HEIGHT,
        )
    }

    /// Both halves, upper first
    pub fn halves(&self) -> [Rect; 2] {
        [self.upper(), self.lower()]
    }

    /// Right edge of both halves
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }
}

/// Create a pair at `x` with a random opening position
pub fn create_pair<R: Rng>(x: f32, gap_height: f32, rng: &mut R) -> ObstaclePair {
    let gap_top = rng.random_range(GAP_TOP_MIN..=GAP_TOP_MAX) as f32;
    ObstaclePair {
        x,
        gap_top,
        gap_height,
    }
}

/// Fresh queue for a new game: one pair at the right edge, one trailing it
pub fn initial_queue<R: Rng>(gap_height: f32, rng: &mut R) -> Vec<ObstaclePair> {
    let first = create_pair(SPAWN_X, gap_height, rng);
    let second = create_pair(SPAWN_X + PAIR_SPACING, gap_height, rng);
    vec![first, second]
}

/// Scroll every live pair left by `speed`
pub fn advance(queue: &mut [ObstaclePair], speed: f32) {
    for pair in queue.iter_mut() {
        pair.x -= speed;
    }
}

/// Replace the earliest pair once it has fully left the screen.
///
/// Returns `true` when a pair was recycled; each recycle is worth exactly
/// one point. New pairs take the current `gap_height`, so tightening only
/// affects pairs spawned afterwards.
pub fn recycle<R: Rng>(queue: &mut Vec<ObstaclePair>, gap_height: f32, rng: &mut R) -> bool {
    let Some(earliest) = queue.first() else {
        return false;
    };
    if earliest.x >= RECYCLE_X {
        return false;
    }

    queue.remove(0);
    let spawn_x = queue
        .last()
        .map(|last| last.x + PAIR_SPACING)
        .unwrap_or(SPAWN_X);
    queue.push(create_pair(spawn_x, gap_height, rng));
    log::debug!("Recycled pipe pair, next spawned at x={:.1}", spawn_x);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_create_pair_geometry() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let pair = create_pair(SPAWN_X, 170.0, &mut rng);
            assert!(pair.gap_top >= GAP_TOP_MIN as f32);
            assert!(pair.gap_top <= GAP_TOP_MAX as f32);
            assert_eq!(pair.gap_top.fract(), 0.0);

            let upper = pair.upper();
            let lower = pair.lower();
            assert_eq!(upper.max.y, pair.gap_top);
            assert_eq!(lower.min.y, pair.gap_top + 170.0);
            assert_eq!(lower.min.y - upper.max.y, 170.0);
            assert_eq!(upper.min.x, lower.min.x);
            assert_eq!(upper.width(), PIPE_WIDTH);
        }
    }

    #[test]
    fn test_create_pair_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(create_pair(0.0, 150.0, &mut a), create_pair(0.0, 150.0, &mut b));
        }
    }

    #[test]
    fn test_initial_queue() {
        let mut rng = Pcg32::seed_from_u64(1);
        let queue = initial_queue(190.0, &mut rng);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].x, SPAWN_X);
        assert_eq!(queue[1].x, SPAWN_X + PAIR_SPACING);
        assert!(queue.iter().all(|p| p.gap_height == 190.0));
    }

    #[test]
    fn test_advance_scrolls_all_pairs() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut queue = initial_queue(170.0, &mut rng);
        advance(&mut queue, 3.0);
        assert_eq!(queue[0].x, SPAWN_X - 3.0);
        assert_eq!(queue[1].x, SPAWN_X + PAIR_SPACING - 3.0);
    }

    #[test]
    fn test_recycle_only_after_leaving_screen() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut queue = initial_queue(170.0, &mut rng);

        queue[0].x = RECYCLE_X;
        assert!(!recycle(&mut queue, 170.0, &mut rng));
        assert_eq!(queue.len(), 2);

        queue[0].x = RECYCLE_X - 0.1;
        queue[1].x = RECYCLE_X - 0.1 + PAIR_SPACING;
        let survivor = queue[1];
        assert!(recycle(&mut queue, 160.0, &mut rng));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0], survivor);
        assert_eq!(queue[1].x, survivor.x + PAIR_SPACING);
        assert_eq!(queue[1].gap_height, 160.0);
        assert!(queue[0].x <= queue[1].x);
    }
}
