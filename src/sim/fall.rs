//! Gravity for the active word
//!
//! Position is an offset from the spawn point in screen pixels; +y is down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Outcome of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallStep {
    /// Held in place (dragging or already on the floor)
    Held,
    Falling,
    /// Reached the floor this step. Reported once per body.
    HitFloor,
}

/// Kinematic state of a falling word
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FallBody {
    pub pos: Vec2,
    /// Degrees, purely cosmetic
    pub tilt: f32,
    pub dragging: bool,
    pub landed: bool,
}

impl FallBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds at `speed`; the step is clamped to the tuning limit.
    /// With `tilt_enabled` off the word stays level.
    pub fn step(&mut self, dt: f32, speed: f32, tuning: &Tuning, floor_y: f32, tilt_enabled: bool) -> FallStep {
        // Drag wins over gravity
        if self.dragging || self.landed {
            return FallStep::Held;
        }

        let dt = dt.clamp(0.0, tuning.max_frame_dt);
        self.pos.y += speed * tuning.distance_unit * dt;

        if self.pos.y >= floor_y {
            self.pos.y = floor_y;
            self.landed = true;
            return FallStep::HitFloor;
        }

        if tilt_enabled {
            self.decay_tilt(tuning);
        } else {
            self.tilt = 0.0;
        }
        FallStep::Falling
    }

    pub fn decay_tilt(&mut self, tuning: &Tuning) {
        self.tilt *= tuning.tilt_decay;
        if self.tilt.abs() < tuning.tilt_snap {
            self.tilt = 0.0;
        }
    }
}
