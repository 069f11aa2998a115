//! Lernen Hub - German grammar drag-and-drop games
//!
//! Core modules:
//! - `sim`: Deterministic round logic (falling word, drag, hit-testing, scoring)
//! - `content`: Levels, word and sentence tables
//! - `persistence`: High score key-value store port
//! - `highscores`: Per-level best scores
//! - `platform`: Browser/native platform abstraction
//! - `session`: Hub navigation and arena ownership
//! - `settings` / `tuning`: Player preferences and data-driven game balance

pub mod content;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use content::{Artikel, Catalog, Level};
pub use highscores::{GameMode, HighScore};
pub use session::{Arena, Screen, Session};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Lives at the start of every run
    pub const STARTING_LIVES: u8 = 3;

    /// Pixels travelled per second at fall speed 1.0
    pub const DISTANCE_UNIT: f32 = 120.0;
    /// Largest frame delta the simulation accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Tilt decays by this factor every frame when not dragging
    pub const TILT_DECAY: f32 = 0.9;
    /// Tilt below this (degrees) snaps to zero
    pub const TILT_SNAP: f32 = 0.5;
    /// Degrees of tilt per pixel of horizontal pointer movement
    pub const TILT_GAIN: f32 = 0.8;
    /// Maximum tilt either way (degrees)
    pub const TILT_MAX: f32 = 12.0;

    /// Floor sits this far above the bottom of the arena
    pub const FLOOR_OFFSET: f32 = 200.0;
    /// Falling words are checked against zones below `height - ZONE_ENTRY_OFFSET`
    pub const ZONE_ENTRY_OFFSET: f32 = 180.0;
    /// Expansion applied to zones for the word-centre fallback test
    pub const NEAR_MISS_MARGIN: f32 = 20.0;

    /// Base points for a correct article
    pub const ARTIKEL_POINTS: u64 = 10;
    /// Base points for a completed sentence
    pub const SENTENCE_POINTS: u64 = 50;

    /// Feedback windows before the next word/sentence (seconds)
    pub const CORRECT_DELAY: f32 = 0.5;
    pub const INCORRECT_DELAY: f32 = 0.6;
    pub const MISSED_DELAY: f32 = 0.4;
    pub const SENTENCE_DELAY: f32 = 0.8;

    /// Sentence preview shown before the first Satz-Splitter round
    pub const INTRO_DURATION: f32 = 2.0;
}
