//! Difficulty presets
//!
//! Each level maps to a fixed parameter record through a static table, so
//! adding a level means adding one enum variant and one table row.

use serde::{Deserialize, Serialize};

use crate::consts::BASE_OBSTACLE_SPEED;

/// Named tuning preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Spawn cadence, obstacle speed and gap size for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Seconds between spawn attempts
    pub spawn_interval: f32,
    /// Leftward obstacle speed (units/s)
    pub horizontal_speed: f32,
    /// Gap size before jitter
    pub base_gap_size: f32,
}

struct ProfileRow {
    spawn_interval: f32,
    speed_multiplier: f32,
    base_gap_size: f32,
}

/// Rows in `DifficultyLevel` declaration order
const PROFILES: [ProfileRow; 3] = [
    ProfileRow {
        spawn_interval: 1.8,
        speed_multiplier: 0.85,
        base_gap_size: 180.0,
    },
    ProfileRow {
        spawn_interval: 1.55,
        speed_multiplier: 1.05,
        base_gap_size: 150.0,
    },
    ProfileRow {
        spawn_interval: 1.25,
        speed_multiplier: 1.35,
        base_gap_size: 130.0,
    },
];

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Normal,
        DifficultyLevel::Hard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Normal => "Normal",
            DifficultyLevel::Hard => "Hard",
        }
    }

    /// Case-insensitive parse, `None` for anything unrecognized
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(DifficultyLevel::Easy),
            "normal" => Some(DifficultyLevel::Normal),
            "hard" => Some(DifficultyLevel::Hard),
            _ => None,
        }
    }

    /// Look up the parameter record for this level
    pub fn params(&self) -> DifficultyParams {
        let row = &PROFILES[*self as usize];
        DifficultyParams {
            spawn_interval: row.spawn_interval,
            horizontal_speed: BASE_OBSTACLE_SPEED * row.speed_multiplier,
            base_gap_size: row.base_gap_size,
        }
    }
}
