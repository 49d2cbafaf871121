//! JavaScript-facing engine facade
//!
//! The page owns the animation loop and the canvas; it calls `update` once
//! per frame and draws whatever `render_state_json` returns.

use wasm_bindgen::prelude::*;

use super::clamp_frame_dt;
use crate::highscores::SessionRecorder;
use crate::persistence::LocalStorage;
use crate::settings::Settings;
use crate::sim::{DifficultyLevel, Engine, GameEvent};

#[wasm_bindgen]
pub struct WebEngine {
    engine: Engine,
    storage: LocalStorage,
    recorder: SessionRecorder,
}

#[wasm_bindgen]
impl WebEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> WebEngine {
        super::init_logging();

        let storage = LocalStorage::new();
        let seed = js_sys::Date::now() as u64;
        let mut engine = Engine::new(width, height, seed);
        Settings::load(&storage).apply(&mut engine);
        let recorder = SessionRecorder::load(&storage);
        log::info!("Engine created with seed: {}", seed);

        WebEngine {
            engine,
            storage,
            recorder,
        }
    }

    pub fn flap(&mut self) {
        self.engine.flap();
    }

    pub fn toggle_pause(&mut self) {
        self.engine.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Advance by `dt` seconds and persist the run if it just ended
    pub fn update(&mut self, dt: f32) {
        self.engine.update(clamp_frame_dt(dt));
        for event in self.engine.drain_events() {
            if let GameEvent::Died { score } = event {
                self.recorder.record_death(score, &mut self.storage);
            }
        }
    }

    pub fn set_difficulty(&mut self, level: &str) {
        let level = DifficultyLevel::parse(level).unwrap_or_default();
        self.engine.set_difficulty(level);
        Settings::from_engine(&self.engine).save(&mut self.storage);
    }

    pub fn set_character_index(&mut self, index: i32) {
        self.engine.set_character_index(index);
        Settings::from_engine(&self.engine).save(&mut self.storage);
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn is_alive(&self) -> bool {
        self.engine.is_alive()
    }

    pub fn best_score(&self) -> u32 {
        self.recorder.best.0
    }

    pub fn render_state_json(&self) -> String {
        self.engine.render_state().to_json()
    }
}
