//! Obstacle field: spawning, scrolling, pass detection and pruning
//!
//! Obstacles are kept in spawn order, so the last element is always the
//! most recently spawned one and pruning only ever drops from the front.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyParams;
use crate::consts::*;

/// A vertical barrier pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Gap ceiling (height of the top segment)
    pub top_height: f32,
    /// Gap floor (top of the bottom segment)
    pub bottom_y: f32,
    /// Set once when the trailing edge crosses the player lane
    pub passed: bool,
}

impl Obstacle {
    pub fn gap_size(&self) -> f32 {
        self.bottom_y - self.top_height
    }

    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// What happened to the field during one advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStep {
    /// An obstacle was created this step
    pub spawned: bool,
    /// The spawn timer fired but spacing blocked the spawn
    pub spawn_skipped: bool,
    /// Obstacles whose trailing edge crossed the player lane this step
    pub passed: u32,
    /// Obstacles pruned off the left edge this step
    pub removed: usize,
}

/// Ordered obstacle sequence plus the spawn timer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    spawn_timer: f32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }

    /// Insert an obstacle directly, bypassing the spawn rules
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Run one step: spawn timer, scroll, pass marking, pruning
    pub fn advance_and_spawn<R: Rng>(
        &mut self,
        dt: f32,
        params: &DifficultyParams,
        world: (f32, f32),
        player_x: f32,
        rng: &mut R,
    ) -> FieldStep {
        let (world_width, world_height) = world;
        let mut step = FieldStep::default();

        self.spawn_timer += dt;
        if self.spawn_timer >= params.spawn_interval {
            self.spawn_timer = 0.0;
            if self.has_room_to_spawn(world_width) {
                let obstacle = spawn_obstacle(params.base_gap_size, world_width, world_height, rng);
                log::debug!(
                    "Spawned obstacle: top={:.1} gap={:.1}",
                    obstacle.top_height,
                    obstacle.gap_size()
                );
                self.obstacles.push(obstacle);
                step.spawned = true;
            } else {
                step.spawn_skipped = true;
            }
        }

        let dx = params.horizontal_speed * dt;
        for obstacle in &mut self.obstacles {
            obstacle.x -= dx;
            if !obstacle.passed && obstacle.trailing_edge() < player_x {
                obstacle.passed = true;
                step.passed += 1;
            }
        }

        let before = self.obstacles.len();
        self.obstacles
            .retain(|obstacle| obstacle.trailing_edge() >= OFFSCREEN_PRUNE_X);
        step.removed = before - self.obstacles.len();

        step
    }

    /// Newest obstacle must have scrolled far enough left
    fn has_room_to_spawn(&self, world_width: f32) -> bool {
        self.obstacles
            .last()
            .is_none_or(|newest| newest.x <= world_width - MIN_HORIZONTAL_SPACING)
    }
}

/// Roll a new obstacle just beyond the right edge of the world
pub fn spawn_obstacle<R: Rng>(
    base_gap_size: f32,
    world_width: f32,
    world_height: f32,
    rng: &mut R,
) -> Obstacle {
    let jitter = (rng.random::<f32>() - 0.5) * 2.0 * GAP_JITTER;
    let gap_size = (base_gap_size + jitter).max(MIN_GAP_SIZE);

    let (min_top, max_top) = gap_top_band(gap_size, world_height);
    let top = min_top + rng.random::<f32>() * (max_top - min_top);

    Obstacle {
        x: world_width + OBSTACLE_WIDTH,
        width: OBSTACLE_WIDTH,
        top_height: top,
        bottom_y: top + gap_size,
        passed: false,
    }
}

/// Feasible range for the gap's top edge. Never empty.
pub fn gap_top_band(gap_size: f32, world_height: f32) -> (f32, f32) {
    let min_top = MIN_GAP_TOP;
    let mut max_top = world_height - GAP_BOTTOM_MARGIN - gap_size;
    if max_top < min_top {
        max_top = min_top + MIN_GAP_BAND;
    }
    (min_top, max_top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DifficultyLevel;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const WORLD: (f32, f32) = (480.0, 800.0);
    const PLAYER_X: f32 = 144.0;

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            x,
            width: OBSTACLE_WIDTH,
            top_height: 200.0,
            bottom_y: 350.0,
            passed: false,
        }
    }

    #[test]
    fn test_spawn_on_interval() {
        let mut rng = Pcg32::seed_from_u64(7);
        let params = DifficultyLevel::Normal.params();
        let mut field = ObstacleField::new();

        let step = field.advance_and_spawn(1.0, &params, WORLD, PLAYER_X, &mut rng);
        assert!(!step.spawned);
        assert!(field.is_empty());

        let step = field.advance_and_spawn(0.6, &params, WORLD, PLAYER_X, &mut rng);
        assert!(step.spawned);
        assert_eq!(field.len(), 1);
        assert_eq!(field.spawn_timer(), 0.0);

        // Spawned at width + obstacle width, then scrolled this step
        let expected = 480.0 + OBSTACLE_WIDTH - params.horizontal_speed * 0.6;
        assert!((field.obstacles()[0].x - expected).abs() < 1e-3);
    }

    #[test]
    fn test_spawn_skipped_when_crowded() {
        let mut rng = Pcg32::seed_from_u64(7);
        let params = DifficultyLevel::Normal.params();
        let mut field = ObstacleField::new();
        field.push(obstacle_at(400.0));

        let step = field.advance_and_spawn(params.spawn_interval, &params, WORLD, PLAYER_X, &mut rng);
        assert!(step.spawn_skipped);
        assert!(!step.spawned);
        assert_eq!(field.len(), 1);
        assert_eq!(field.spawn_timer(), 0.0);
    }

    #[test]
    fn test_pass_marked_once() {
        let mut rng = Pcg32::seed_from_u64(1);
        let params = DifficultyLevel::Normal.params();
        let mut field = ObstacleField::new();
        // Trailing edge at 145, one unit right of the player lane
        field.push(obstacle_at(PLAYER_X + 1.0 - OBSTACLE_WIDTH));

        let step = field.advance_and_spawn(0.1, &params, WORLD, PLAYER_X, &mut rng);
        assert_eq!(step.passed, 1);
        assert!(field.obstacles()[0].passed);

        let step = field.advance_and_spawn(0.1, &params, WORLD, PLAYER_X, &mut rng);
        assert_eq!(step.passed, 0);
    }

    #[test]
    fn test_prune_off_screen() {
        let mut rng = Pcg32::seed_from_u64(1);
        let params = DifficultyLevel::Normal.params();
        let mut field = ObstacleField::new();
        field.push(obstacle_at(-110.0));
        field.push(obstacle_at(300.0));

        let step = field.advance_and_spawn(0.1, &params, WORLD, PLAYER_X, &mut rng);
        assert_eq!(step.removed, 1);
        assert_eq!(field.len(), 1);
        assert!(field.obstacles()[0].x > 200.0);
        assert!(field.obstacles().iter().all(|o| o.trailing_edge() >= OFFSCREEN_PRUNE_X));
    }

    #[test]
    fn test_gap_band_widens_in_short_worlds() {
        let (min_top, max_top) = gap_top_band(150.0, 250.0);
        assert_eq!(min_top, MIN_GAP_TOP);
        assert_eq!(max_top, MIN_GAP_TOP + MIN_GAP_BAND);

        let (min_top, max_top) = gap_top_band(150.0, 800.0);
        assert_eq!(min_top, 40.0);
        assert_eq!(max_top, 530.0);
    }

    #[test]
    fn test_clear_resets_timer() {
        let mut rng = Pcg32::seed_from_u64(3);
        let params = DifficultyLevel::Easy.params();
        let mut field = ObstacleField::new();
        field.push(obstacle_at(300.0));
        field.advance_and_spawn(0.5, &params, WORLD, PLAYER_X, &mut rng);
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.spawn_timer(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_spawn_within_bounds(seed in any::<u64>(), level in 0usize..3) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let params = DifficultyLevel::ALL[level].params();
            let obstacle = spawn_obstacle(params.base_gap_size, 480.0, 800.0, &mut rng);
            let gap = obstacle.gap_size();
            prop_assert!(gap >= MIN_GAP_SIZE - 1e-3);
            prop_assert!(gap <= params.base_gap_size + GAP_JITTER + 1e-3);
            prop_assert!(obstacle.top_height >= MIN_GAP_TOP);
            prop_assert!(obstacle.top_height <= 800.0 - GAP_BOTTOM_MARGIN - gap + 1e-3);
            prop_assert_eq!(obstacle.x, 480.0 + OBSTACLE_WIDTH);
            prop_assert!(!obstacle.passed);
        }

        #[test]
        fn prop_spacing_holds_over_long_runs(seed in any::<u64>(), level in 0usize..3) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let params = DifficultyLevel::ALL[level].params();
            let mut field = ObstacleField::new();
            let mut saw_passed = false;
            for _ in 0..1200 {
                field.advance_and_spawn(1.0 / 60.0, &params, WORLD, PLAYER_X, &mut rng);
                for pair in field.obstacles().windows(2) {
                    // Consecutive obstacles scroll at the same speed, so their
                    // separation never shrinks after spawn.
                    prop_assert!(pair[1].x - pair[0].x >= MIN_HORIZONTAL_SPACING + OBSTACLE_WIDTH - 1e-2);
                }
                prop_assert!(field.obstacles().iter().all(|o| o.trailing_edge() >= OFFSCREEN_PRUNE_X));
                saw_passed |= field.obstacles().iter().any(|o| o.passed);
            }
            prop_assert!(saw_passed);
        }
    }
}
