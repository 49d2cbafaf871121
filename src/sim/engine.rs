//! Simulation orchestrator
//!
//! Owns the player, the obstacle field and the progression tracker, and is
//! the only entry point a driver calls once per animation frame.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::player_hits_any;
use super::difficulty::{DifficultyLevel, DifficultyParams};
use super::obstacles::{Obstacle, ObstacleField};
use super::player::{BodyOutcome, Player};
use super::progression::{Progression, Unlock};
use crate::consts::*;
use crate::render::{self, RenderSnapshot};

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Notable things that happened since the last drain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Flapped,
    ObstacleSpawned,
    ObstaclePassed { score: u32 },
    BackgroundUnlocked { index: u32 },
    CharacterUnlocked { index: u32 },
    /// Fires once per run with the score at the moment of death
    Died { score: u32 },
}

/// The simulation engine
#[derive(Debug, Clone)]
pub struct Engine<R = Pcg32> {
    world_width: u32,
    world_height: u32,
    difficulty: DifficultyLevel,
    params: DifficultyParams,
    player: Player,
    field: ObstacleField,
    progression: Progression,
    paused: bool,
    events: VecDeque<GameEvent>,
    rng: R,
}

impl Default for Engine<Pcg32> {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT, 0)
    }
}

impl Engine<Pcg32> {
    /// Create an engine with a seeded PCG generator
    pub fn new(world_width: u32, world_height: u32, seed: u64) -> Self {
        Self::with_rng(world_width, world_height, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine drawing spawn randomness from `rng`
    pub fn with_rng(world_width: u32, world_height: u32, rng: R) -> Self {
        let difficulty = DifficultyLevel::default();
        let mut engine = Self {
            world_width,
            world_height,
            difficulty,
            params: difficulty.params(),
            player: Player::spawn(world_width as f32, world_height as f32),
            field: ObstacleField::new(),
            progression: Progression::default(),
            paused: false,
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
            rng,
        };
        engine.reset();
        engine
    }

    /// Start a fresh run. Difficulty and unlocked indices carry over.
    pub fn reset(&mut self) {
        self.player = Player::spawn(self.world_width as f32, self.world_height as f32);
        self.field.clear();
        self.progression.reset();
        self.paused = false;
        self.events.clear();
        self.params = self.difficulty.params();
        log::info!(
            "Engine reset: {}x{} world, difficulty {}",
            self.world_width,
            self.world_height,
            self.difficulty.as_str()
        );
    }

    /// Switch difficulty. Takes effect on the next update; spawned obstacles keep their gaps.
    pub fn set_difficulty(&mut self, level: DifficultyLevel) {
        self.difficulty = level;
        self.params = level.params();
        log::info!("Difficulty set to {}", level.as_str());
    }

    /// Select a character variant. Negative indices clamp to 0.
    pub fn set_character_index(&mut self, index: i32) {
        self.progression.character_index = index.max(0) as u32;
    }

    /// Apply the upward impulse. No-op while dead or paused.
    pub fn flap(&mut self) {
        if self.paused {
            return;
        }
        if self.player.flap() {
            self.push_event(GameEvent::Flapped);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("Paused: {}", self.paused);
    }

    /// Advance the simulation by `dt` seconds. No-op while dead or paused.
    pub fn update(&mut self, dt: f32) {
        if !self.player.alive || self.paused {
            return;
        }

        let world_height = self.world_height as f32;

        if self.player.integrate(dt, world_height) == BodyOutcome::HitFloor {
            self.on_death();
        }

        let step = self.field.advance_and_spawn(
            dt,
            &self.params,
            (self.world_width as f32, world_height),
            self.player.pos.x,
            &mut self.rng,
        );
        if step.spawned {
            self.push_event(GameEvent::ObstacleSpawned);
        }
        if step.spawn_skipped {
            log::debug!("Spawn skipped: newest obstacle too close to the right edge");
        }
        if step.removed > 0 {
            log::debug!("Pruned {} obstacle(s), {} live", step.removed, self.field.len());
        }

        if player_hits_any(&self.player, self.field.obstacles(), world_height) && self.player.kill() {
            self.on_death();
        }

        // One increment per pass so exact-score thresholds are never skipped
        let mut unlocks = Vec::new();
        for _ in 0..step.passed {
            self.progression.record_pass(&mut unlocks);
            self.push_event(GameEvent::ObstaclePassed {
                score: self.progression.score,
            });
        }
        for unlock in unlocks {
            match unlock {
                Unlock::Background(index) => {
                    log::info!("Background {} unlocked", index);
                    self.push_event(GameEvent::BackgroundUnlocked { index });
                }
                Unlock::Character(index) => {
                    log::info!("Character {} unlocked", index);
                    self.push_event(GameEvent::CharacterUnlocked { index });
                }
            }
        }
    }

    fn on_death(&mut self) {
        log::info!("Player died with score {}", self.progression.score);
        self.push_event(GameEvent::Died {
            score: self.progression.score,
        });
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take events recorded since the last drain, oldest first.
    ///
    /// At most `MAX_PENDING_EVENTS` are kept; a driver that never drains
    /// only sees the most recent ones.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}

impl<R> Engine<R> {
    /// Project the current state for the renderer
    pub fn render_state(&self) -> RenderSnapshot {
        render::project(self)
    }

    pub fn score(&self) -> u32 {
        self.progression.score
    }

    pub fn is_alive(&self) -> bool {
        self.player.alive
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn params(&self) -> &DifficultyParams {
        &self.params
    }

    pub fn character_index(&self) -> u32 {
        self.progression.character_index
    }

    pub fn background_index(&self) -> u32 {
        self.progression.background_index
    }

    pub fn world_width(&self) -> u32 {
        self.world_width
    }

    pub fn world_height(&self) -> u32 {
        self.world_height
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.field.obstacles()
    }

    pub fn spawn_timer(&self) -> f32 {
        self.field.spawn_timer()
    }

    /// Place an obstacle directly (scenario setup and tooling)
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.field.push(obstacle);
    }
}
