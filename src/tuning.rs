//! Data-driven game balance
//!
//! Every number the round logic depends on lives here so a host can ship
//! overrides as JSON without rebuilding.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Falling ===
    pub distance_unit: f32,
    pub max_frame_dt: f32,
    pub floor_offset: f32,
    pub zone_entry_offset: f32,

    // === Tilt (cosmetic) ===
    pub tilt_decay: f32,
    pub tilt_snap: f32,
    pub tilt_gain: f32,
    pub tilt_max: f32,

    // === Hit testing ===
    pub near_miss_margin: f32,

    // === Scoring ===
    pub artikel_points: u64,
    pub sentence_points: u64,

    // === Timing (seconds) ===
    pub correct_delay: f32,
    pub incorrect_delay: f32,
    pub missed_delay: f32,
    pub sentence_delay: f32,
    pub intro_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            distance_unit: DISTANCE_UNIT,
            max_frame_dt: MAX_FRAME_DT,
            floor_offset: FLOOR_OFFSET,
            zone_entry_offset: ZONE_ENTRY_OFFSET,

            tilt_decay: TILT_DECAY,
            tilt_snap: TILT_SNAP,
            tilt_gain: TILT_GAIN,
            tilt_max: TILT_MAX,

            near_miss_margin: NEAR_MISS_MARGIN,

            artikel_points: ARTIKEL_POINTS,
            sentence_points: SENTENCE_POINTS,

            correct_delay: CORRECT_DELAY,
            incorrect_delay: INCORRECT_DELAY,
            missed_delay: MISSED_DELAY,
            sentence_delay: SENTENCE_DELAY,
            intro_duration: INTRO_DURATION,
        }
    }
}

impl Tuning {
    /// Parse overrides; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers, serialization can't fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
