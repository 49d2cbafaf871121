//! Score and in-session unlock progression

use serde::{Deserialize, Serialize};

use crate::consts::MAX_BACKGROUND_INDEX;

/// Scores that advance the background by one variant
pub const BACKGROUND_THRESHOLDS: [u32; 2] = [10, 25];
/// (score, minimum character index) pairs
pub const CHARACTER_THRESHOLDS: [(u32, u32); 2] = [(15, 1), (35, 2)];

/// Unlock raised by a single pass event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlock {
    Background(u32),
    Character(u32),
}

/// Score plus the indices it drives. Indices only ever grow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Progression {
    pub score: u32,
    pub character_index: u32,
    pub background_index: u32,
}

impl Progression {
    /// Count one passed obstacle and apply any threshold hit by the new score.
    ///
    /// Thresholds match on exact score, so callers must report passes one
    /// at a time; skipping a score value would skip its unlock.
    pub fn record_pass(&mut self, unlocks: &mut Vec<Unlock>) {
        self.score += 1;

        if BACKGROUND_THRESHOLDS.contains(&self.score) {
            let next = (self.background_index + 1).min(MAX_BACKGROUND_INDEX);
            if next != self.background_index {
                self.background_index = next;
                unlocks.push(Unlock::Background(next));
            }
        }

        for &(threshold, index) in &CHARACTER_THRESHOLDS {
            if self.score == threshold && self.character_index < index {
                self.character_index = index;
                unlocks.push(Unlock::Character(index));
            }
        }
    }

    /// Zero the score. Unlocked indices carry over into the next run.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}
