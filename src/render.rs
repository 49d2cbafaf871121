//! Render snapshots
//!
//! A snapshot is a plain copy of what the renderer needs for one frame. It
//! holds no reference back into the engine and serializes to the JSON shape
//! the web renderer reads (camelCase keys).

use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_DRAW_SIZE;
use crate::sim::Engine;

/// Player projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRender {
    pub x: f32,
    pub y: f32,
    /// Radians, nose-down positive
    pub rotation: f32,
    pub sprite: String,
    pub size: f32,
}

/// Obstacle projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipeRender {
    pub x: f32,
    pub width: f32,
    pub top_height: f32,
    pub bottom_y: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub score: u32,
    pub paused: bool,
    pub world_width: u32,
    pub world_height: u32,
    pub background: String,
    pub player: PlayerRender,
    pub pipes: Vec<PipeRender>,
}

impl RenderSnapshot {
    pub fn to_json(&self) -> String {
        // Plain structs of numbers and strings always serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Asset key for a background variant
pub fn background_key(index: u32) -> String {
    format!("images/bg{}.svg", index)
}

/// Asset key for a character variant (asset files are 1-based)
pub fn character_key(index: u32) -> String {
    format!("images/bird{}.svg", index + 1)
}

/// Build a snapshot from the engine's current state
pub fn project<R>(engine: &Engine<R>) -> RenderSnapshot {
    let player = engine.player();
    RenderSnapshot {
        score: engine.score(),
        paused: engine.is_paused(),
        world_width: engine.world_width(),
        world_height: engine.world_height(),
        background: background_key(engine.background_index()),
        player: PlayerRender {
            x: player.pos.x,
            y: player.pos.y,
            rotation: player.rotation(),
            sprite: character_key(engine.character_index()),
            size: PLAYER_DRAW_SIZE,
        },
        pipes: engine
            .obstacles()
            .iter()
            .map(|o| PipeRender {
                x: o.x,
                width: o.width,
                top_height: o.top_height,
                bottom_y: o.bottom_y,
            })
            .collect(),
    }
}
