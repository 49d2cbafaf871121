//! Axis-aligned collision detection
//!
//! Everything in this world is a box: the player hitbox and the two solid
//! segments above and below each obstacle's gap.

use glam::Vec2;

use super::obstacles::Obstacle;
use super::player::Player;
use crate::consts::PLAYER_HITBOX;

/// Axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Overlap test on raw coordinates
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn overlaps(ax: f32, ay: f32, aw: f32, ah: f32, bx: f32, by: f32, bw: f32, bh: f32) -> bool {
    Rect::new(ax, ay, aw, ah).overlaps(&Rect::new(bx, by, bw, bh))
}

/// The player's square hitbox
pub fn player_hitbox(player: &Player) -> Rect {
    let min = player.hitbox_min();
    Rect::new(min.x, min.y, PLAYER_HITBOX, PLAYER_HITBOX)
}

/// Solid segment above the gap
pub fn top_segment(obstacle: &Obstacle) -> Rect {
    Rect::new(obstacle.x, 0.0, obstacle.width, obstacle.top_height)
}

/// Solid segment below the gap, down to the world floor
pub fn bottom_segment(obstacle: &Obstacle, world_height: f32) -> Rect {
    Rect::new(
        obstacle.x,
        obstacle.bottom_y,
        obstacle.width,
        world_height - obstacle.bottom_y,
    )
}

/// Does the player touch either solid segment of this obstacle?
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, world_height: f32) -> bool {
    let hitbox = player_hitbox(player);
    hitbox.overlaps(&top_segment(obstacle)) || hitbox.overlaps(&bottom_segment(obstacle, world_height))
}

/// Does the player touch any obstacle in the field?
pub fn player_hits_any(player: &Player, obstacles: &[Obstacle], world_height: f32) -> bool {
    obstacles
        .iter()
        .any(|obstacle| player_hits_obstacle(player, obstacle, world_height))
}
