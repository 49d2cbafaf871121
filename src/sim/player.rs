//! The player-controlled body

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Result of one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyOutcome {
    /// Still flying (possibly pressed against the ceiling)
    Flying,
    /// Hit the floor on this step
    HitFloor,
    /// Already dead, nothing happened
    Inert,
}

/// The player body: fixed lane, vertical motion only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// `x` is the fixed lane, `y` grows downward
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    pub alive: bool,
}

impl Player {
    /// Spawn a player at the standard start position for a world
    pub fn spawn(world_width: f32, world_height: f32) -> Self {
        Self {
            pos: Vec2::new(
                world_width * PLAYER_X_RATIO,
                world_height * PLAYER_START_Y_RATIO,
            ),
            vel_y: 0.0,
            alive: true,
        }
    }

    /// Set vertical velocity to the flap impulse. Returns false if dead.
    pub fn flap(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.vel_y = FLAP_VELOCITY;
        true
    }

    /// Apply gravity, move, then clamp against floor and ceiling
    pub fn integrate(&mut self, dt: f32, world_height: f32) -> BodyOutcome {
        if !self.alive {
            return BodyOutcome::Inert;
        }

        self.vel_y += GRAVITY * dt;
        self.pos.y += self.vel_y * dt;

        let mut outcome = BodyOutcome::Flying;
        let floor = world_height - FLOOR_MARGIN;
        if self.pos.y > floor {
            self.pos.y = floor;
            self.alive = false;
            outcome = BodyOutcome::HitFloor;
        }
        // Soft ceiling
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel_y = 0.0;
        }
        outcome
    }

    /// Mark dead. Returns true only on the alive -> dead transition.
    pub fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }

    /// Render rotation in radians, derived from vertical velocity
    pub fn rotation(&self) -> f32 {
        self.vel_y.atan2(ROTATION_VELOCITY_SCALE) * 0.5
    }

    /// Top-left corner of the hitbox
    pub fn hitbox_min(&self) -> Vec2 {
        self.pos - Vec2::splat(PLAYER_HITBOX / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_position() {
        let player = Player::spawn(480.0, 800.0);
        assert!((player.pos.x - 144.0).abs() < 1e-4);
        assert!((player.pos.y - 320.0).abs() < 1e-4);
        assert_eq!(player.vel_y, 0.0);
        assert!(player.alive);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut player = Player::spawn(480.0, 800.0);
        player.vel_y = 412.0;
        assert!(player.flap());
        assert_eq!(player.vel_y, FLAP_VELOCITY);

        player.alive = false;
        player.vel_y = 10.0;
        assert!(!player.flap());
        assert_eq!(player.vel_y, 10.0);
    }

    #[test]
    fn test_floor_is_terminal() {
        let mut player = Player::spawn(480.0, 800.0);
        // Crosses the bound at 770 during this step
        player.pos.y = 765.0;
        player.vel_y = 200.0;
        assert_eq!(player.integrate(0.1, 800.0), BodyOutcome::HitFloor);
        assert_eq!(player.pos.y, 770.0);
        assert!(!player.alive);

        let before = player.clone();
        assert_eq!(player.integrate(0.1, 800.0), BodyOutcome::Inert);
        assert_eq!(player.pos, before.pos);
        assert_eq!(player.vel_y, before.vel_y);
    }

    #[test]
    fn test_resting_on_floor_bound_survives() {
        let mut player = Player::spawn(480.0, 800.0);
        player.pos.y = 800.0 - FLOOR_MARGIN;
        assert_eq!(player.integrate(0.0, 800.0), BodyOutcome::Flying);
        assert!(player.alive);
        assert_eq!(player.pos.y, 770.0);
    }

    #[test]
    fn test_ceiling_is_soft() {
        let mut player = Player::spawn(480.0, 800.0);
        player.pos.y = 2.0;
        player.vel_y = -300.0;
        assert_eq!(player.integrate(0.05, 800.0), BodyOutcome::Flying);
        assert_eq!(player.pos.y, 0.0);
        assert_eq!(player.vel_y, 0.0);
        assert!(player.alive);
    }

    #[test]
    fn test_kill_reports_transition_once() {
        let mut player = Player::spawn(480.0, 800.0);
        assert!(player.kill());
        assert!(!player.kill());
    }

    #[test]
    fn test_rotation() {
        let mut player = Player::spawn(480.0, 800.0);
        assert_eq!(player.rotation(), 0.0);
        player.vel_y = 200.0;
        assert!((player.rotation() - std::f32::consts::FRAC_PI_8).abs() < 1e-5);
        player.vel_y = FLAP_VELOCITY;
        assert!(player.rotation() < 0.0);
    }

    proptest! {
        #[test]
        fn prop_gravity_integration(
            y in 100.0f32..500.0,
            vel in -300.0f32..300.0,
            dt in 0.001f32..0.05,
        ) {
            let mut player = Player::spawn(480.0, 800.0);
            player.pos.y = y;
            player.vel_y = vel;
            player.integrate(dt, 800.0);
            prop_assert!((player.vel_y - (vel + GRAVITY * dt)).abs() < 1e-3);
            prop_assert!(player.pos.y <= 800.0 - FLOOR_MARGIN);
            prop_assert!(player.pos.y >= 0.0);
        }
    }
}
