//! Best score, unlocked characters and the local leaderboard
//!
//! All three persist through a `Storage` backend and are updated when a run
//! ends, keyed off the engine's score at the moment of death.

use serde::{Deserialize, Serialize};

use crate::persistence::{
    BEST_KEY, LEADERBOARD_KEY, Storage, UNLOCKED_KEY, load_json, save_json,
};
use crate::unlocks;

/// Maximum number of leaderboard entries to keep
pub const MAX_LEADERBOARD_ENTRIES: usize = 20;

/// All-time best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestScore(pub u32);

impl BestScore {
    pub fn load(storage: &dyn Storage) -> Self {
        load_json(storage, BEST_KEY).unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        save_json(storage, BEST_KEY, self);
    }

    /// Raise the best if `score` beats it. Returns true on a new best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

/// Sorted, deduplicated list of unlocked character indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnlockedCharacters(Vec<u32>);

impl Default for UnlockedCharacters {
    fn default() -> Self {
        Self(vec![0])
    }
}

impl UnlockedCharacters {
    pub fn load(storage: &dyn Storage) -> Self {
        let mut unlocked: Self = load_json(storage, UNLOCKED_KEY).unwrap_or_default();
        unlocked.0.sort_unstable();
        unlocked.0.dedup();
        unlocked
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        save_json(storage, UNLOCKED_KEY, self);
    }

    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Add an index. Returns true if it was newly unlocked.
    pub fn unlock(&mut self, index: u32) -> bool {
        match self.0.binary_search(&index) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, index);
                true
            }
        }
    }
}

/// Local leaderboard, highest first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<u32>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(storage: &dyn Storage) -> Self {
        let mut board: Self = load_json(storage, LEADERBOARD_KEY).unwrap_or_default();
        board.entries.sort_unstable_by(|a, b| b.cmp(a));
        board.entries.truncate(MAX_LEADERBOARD_ENTRIES);
        log::info!("Loaded {} leaderboard entries", board.entries.len());
        board
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        save_json(storage, LEADERBOARD_KEY, self);
        log::info!("Leaderboard saved ({} entries)", self.entries.len());
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Check if a score would make the board
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_LEADERBOARD_ENTRIES {
            return true;
        }
        self.entries.last().is_none_or(|&lowest| score > lowest)
    }

    /// Add a score. Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        // Ties rank below existing entries
        let pos = self
            .entries
            .iter()
            .position(|&e| score > e)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, score);
        self.entries.truncate(MAX_LEADERBOARD_ENTRIES);
        Some(pos + 1)
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of recording a finished run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunRecord {
    pub score: u32,
    pub new_best: bool,
    pub rank: Option<usize>,
    pub newly_unlocked: Vec<u32>,
}

/// Updates every persisted record when a run ends
#[derive(Debug, Clone, Default)]
pub struct SessionRecorder {
    pub best: BestScore,
    pub unlocked: UnlockedCharacters,
    pub leaderboard: Leaderboard,
}

impl SessionRecorder {
    pub fn load(storage: &dyn Storage) -> Self {
        Self {
            best: BestScore::load(storage),
            unlocked: UnlockedCharacters::load(storage),
            leaderboard: Leaderboard::load(storage),
        }
    }

    /// Record the score of a run that just ended and persist the changes
    pub fn record_death(&mut self, score: u32, storage: &mut dyn Storage) -> RunRecord {
        let new_best = self.best.submit(score);
        if new_best {
            self.best.save(storage);
            log::info!("New best score: {}", score);
        }

        let rank = self.leaderboard.add_score(score);
        self.leaderboard.save(storage);

        let mut newly_unlocked = Vec::new();
        for index in unlocks::unlocked_for_best(self.best.0) {
            let index = index as u32;
            if self.unlocked.unlock(index) {
                newly_unlocked.push(index);
            }
        }
        if !newly_unlocked.is_empty() {
            self.unlocked.save(storage);
            log::info!("Unlocked characters: {:?}", newly_unlocked);
        }

        RunRecord {
            score,
            new_best,
            rank,
            newly_unlocked,
        }
    }
}
