//! Player settings and preferences
//!
//! Persisted separately from scores. Anything missing or malformed falls
//! back to Normal difficulty and the default character.

use serde::{Deserialize, Serialize};

use crate::persistence::{SETTINGS_KEY, Storage, load_json, save_json};
use crate::sim::{DifficultyLevel, Engine};

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub difficulty: DifficultyLevel,
    pub selected_character_index: u32,
}

/// On-disk layout
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    #[serde(default)]
    selected_character_index: i64,
    #[serde(default)]
    difficulty: String,
}

impl Settings {
    /// Load settings, defaulting on missing or malformed data
    pub fn load(storage: &dyn Storage) -> Self {
        let Some(stored) = load_json::<StoredSettings>(storage, SETTINGS_KEY) else {
            log::info!("Using default settings");
            return Self::default();
        };

        let difficulty = DifficultyLevel::parse(&stored.difficulty).unwrap_or_else(|| {
            log::warn!("Unknown difficulty {:?}, using Normal", stored.difficulty);
            DifficultyLevel::Normal
        });
        let selected_character_index =
            u32::try_from(stored.selected_character_index.max(0)).unwrap_or(0);

        log::info!("Loaded settings");
        Self {
            difficulty,
            selected_character_index,
        }
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        let stored = StoredSettings {
            selected_character_index: i64::from(self.selected_character_index),
            difficulty: self.difficulty.as_str().to_string(),
        };
        save_json(storage, SETTINGS_KEY, &stored);
        log::info!("Settings saved");
    }

    /// Push these settings into an engine
    pub fn apply<R: rand::Rng>(&self, engine: &mut Engine<R>) {
        engine.set_difficulty(self.difficulty);
        engine.set_character_index(i32::try_from(self.selected_character_index).unwrap_or(i32::MAX));
    }

    /// Capture the engine's current selections
    pub fn from_engine<R>(engine: &Engine<R>) -> Self {
        Self {
            difficulty: engine.difficulty(),
            selected_character_index: engine.character_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_missing_settings_default() {
        let storage = MemoryStorage::new();
        let settings = Settings::load(&storage);
        assert_eq!(settings.difficulty, DifficultyLevel::Normal);
        assert_eq!(settings.selected_character_index, 0);
    }

    #[test]
    fn test_round_trip_uses_stored_layout() {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            difficulty: DifficultyLevel::Hard,
            selected_character_index: 2,
        };
        settings.save(&mut storage);

        let raw = storage.get_item(SETTINGS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["selectedCharacterIndex"], 2);
        assert_eq!(value["difficulty"], "Hard");

        assert_eq!(Settings::load(&storage), settings);
    }

    #[test]
    fn test_malformed_settings_default() {
        let mut storage = MemoryStorage::new();
        storage.set_item(SETTINGS_KEY, "{broken");
        assert_eq!(Settings::load(&storage), Settings::default());

        storage.set_item(
            SETTINGS_KEY,
            r#"{"selectedCharacterIndex": -3, "difficulty": "Insane"}"#,
        );
        let settings = Settings::load(&storage);
        assert_eq!(settings.difficulty, DifficultyLevel::Normal);
        assert_eq!(settings.selected_character_index, 0);

        storage.set_item(SETTINGS_KEY, r#"{"difficulty": "Easy"}"#);
        let settings = Settings::load(&storage);
        assert_eq!(settings.difficulty, DifficultyLevel::Easy);
        assert_eq!(settings.selected_character_index, 0);
    }

    #[test]
    fn test_apply_to_engine() {
        let mut engine = Engine::new(480, 800, 5);
        let settings = Settings {
            difficulty: DifficultyLevel::Easy,
            selected_character_index: 1,
        };
        settings.apply(&mut engine);
        assert_eq!(engine.difficulty(), DifficultyLevel::Easy);
        assert_eq!(engine.character_index(), 1);
        assert_eq!(Settings::from_engine(&engine), settings);
    }
}
