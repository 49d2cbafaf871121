//! Flap Sim - A side-scrolling flap-through-the-gaps game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `render`: Immutable render snapshots for an external renderer
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Key/value storage backends
//! - `settings`, `highscores`, `unlocks`: Session-external progression data

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod unlocks;

pub use highscores::{BestScore, Leaderboard, SessionRecorder, UnlockedCharacters};
pub use render::{PipeRender, PlayerRender, RenderSnapshot};
pub use settings::Settings;
pub use sim::{DifficultyLevel, DifficultyParams, Engine, GameEvent};

/// Game configuration constants
pub mod consts {
    /// Default logical world dimensions
    pub const DEFAULT_WORLD_WIDTH: u32 = 480;
    pub const DEFAULT_WORLD_HEIGHT: u32 = 800;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 900.0;
    /// Vertical velocity set by a flap (negative is up)
    pub const FLAP_VELOCITY: f32 = -300.0;

    /// Player lane, as a fraction of world width
    pub const PLAYER_X_RATIO: f32 = 0.3;
    /// Player spawn height, as a fraction of world height
    pub const PLAYER_START_Y_RATIO: f32 = 0.4;
    /// Distance above the world floor at which the player dies
    pub const FLOOR_MARGIN: f32 = 30.0;
    /// Square hitbox centered on the player position
    pub const PLAYER_HITBOX: f32 = 36.0;
    /// Sprite draw size handed to the renderer
    pub const PLAYER_DRAW_SIZE: f32 = 48.0;
    /// Horizontal velocity used to scale render rotation
    pub const ROTATION_VELOCITY_SCALE: f32 = 200.0;

    /// Obstacle speed before the difficulty multiplier (units/s)
    pub const BASE_OBSTACLE_SPEED: f32 = 120.0;
    pub const OBSTACLE_WIDTH: f32 = 64.0;
    /// Newest obstacle must be at least this far left of the right edge to spawn another
    pub const MIN_HORIZONTAL_SPACING: f32 = 150.0;
    /// Obstacles whose trailing edge is left of this are removed
    pub const OFFSCREEN_PRUNE_X: f32 = -50.0;

    /// Gap sizing
    pub const MIN_GAP_SIZE: f32 = 110.0;
    pub const GAP_JITTER: f32 = 12.0;
    pub const MIN_GAP_TOP: f32 = 40.0;
    pub const GAP_BOTTOM_MARGIN: f32 = 120.0;
    /// Band width used when the world is too short for the requested gap
    pub const MIN_GAP_BAND: f32 = 10.0;

    /// Highest background variant reachable in a session
    pub const MAX_BACKGROUND_INDEX: u32 = 2;
}
