//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Variable `dt` supplied by the driver, one call per frame
//! - Injected, seedable RNG only
//! - Obstacles kept in spawn order
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod engine;
pub mod obstacles;
pub mod player;
pub mod progression;

pub use collision::{Rect, overlaps, player_hits_any, player_hits_obstacle};
pub use difficulty::{DifficultyLevel, DifficultyParams};
pub use engine::{Engine, GameEvent};
pub use obstacles::{FieldStep, Obstacle, ObstacleField, spawn_obstacle};
pub use player::{BodyOutcome, Player};
pub use progression::{Progression, Unlock};
