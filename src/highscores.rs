//! Per-level best scores
//!
//! One integer per (game mode, level). Read once when a round starts, written
//! only when the running score beats it. Storage failures never interrupt play.

use serde::{Deserialize, Serialize};

use crate::content::Level;
use crate::persistence::SharedStore;

/// The two games in the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    ArtikelDrop,
    SatzSplitter,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::ArtikelDrop, GameMode::SatzSplitter];

    /// Storage key prefix
    pub fn key_prefix(&self) -> &'static str {
        match self {
            GameMode::ArtikelDrop => "artikeldrop",
            GameMode::SatzSplitter => "satzsplitter",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameMode::ArtikelDrop => "Artikel-Drop",
            GameMode::SatzSplitter => "Satz-Splitter",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "artikeldrop" => Some(GameMode::ArtikelDrop),
            "satzsplitter" => Some(GameMode::SatzSplitter),
            _ => None,
        }
    }
}

/// Storage key for a mode and level
pub fn highscore_key(mode: GameMode, level: Level) -> String {
    format!("{}-highscore-{}", mode.key_prefix(), level.as_str())
}

/// Read a stored best, treating missing or unreadable entries as 0
pub fn read_best(store: &SharedStore, mode: GameMode, level: Level) -> u64 {
    let key = highscore_key(mode, level);
    match store.get(&key) {
        Ok(value) => value.unwrap_or(0),
        Err(e) => {
            log::warn!("Could not read {}: {}", key, e);
            0
        }
    }
}

/// Best score for the level being played
pub struct HighScore {
    key: String,
    best: u64,
    store: SharedStore,
}

impl std::fmt::Debug for HighScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighScore")
            .field("key", &self.key)
            .field("best", &self.best)
            .finish()
    }
}

impl HighScore {
    pub fn load(store: SharedStore, mode: GameMode, level: Level) -> Self {
        let best = read_best(&store, mode, level);
        let key = highscore_key(mode, level);
        log::info!("Loaded {} = {}", key, best);
        Self { key, best, store }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record `score` if it beats the best. Returns true on a new best, even
    /// when the write itself failed.
    pub fn submit(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = self.store.set(&self.key, score) {
            log::warn!("High score not saved ({}): {}", self.key, e);
        }
        true
    }

    /// Re-read from the store (new round)
    pub fn reload(&mut self) {
        if let Ok(Some(stored)) = self.store.get(&self.key) {
            self.best = self.best.max(stored);
        }
    }
}
