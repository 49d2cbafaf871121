//! Key/value persistence backends
//!
//! Features:
//! - `Storage` trait shared by every persisted record
//! - In-memory backend for native builds and tests
//! - LocalStorage backend in the browser
//! - JSON helpers that fall back to defaults on missing or malformed data

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the best score
pub const BEST_KEY: &str = "flappy_best";
/// Storage key for the unlocked character list
pub const UNLOCKED_KEY: &str = "flappy_unlocked_chars";
/// Storage key for player settings
pub const SETTINGS_KEY: &str = "flappy_settings";
/// Storage key for the local leaderboard
pub const LEADERBOARD_KEY: &str = "flappy_leaderboard_v1";

/// String key/value store
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// Volatile storage (native builds, tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, nothing will persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage
            && storage.set_item(key, value).is_err()
        {
            log::warn!("Failed to write {}", key);
        }
    }
}

/// Read and decode a JSON record. Missing or malformed data yields `None`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = storage.get_item(key)?;
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Ignoring malformed {}: {}", key, err);
            None
        }
    }
}

/// Encode and write a JSON record
pub fn save_json<T: Serialize>(storage: &mut dyn Storage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => storage.set_item(key, &json),
        Err(err) => log::warn!("Failed to encode {}: {}", key, err),
    }
}
