//! Pointer drag tracking
//!
//! A drag captures one pointer id. Moves and releases from any other pointer
//! are ignored until the captured one lets go or is cancelled, which matches
//! browser pointer capture: the word keeps receiving events even after the
//! pointer leaves its bounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Low-level pointer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    /// Pressed on a draggable item
    Down,
    Move,
    Up,
    /// Pointer lost by the platform; handled exactly like `Up`
    Cancel,
}

/// A pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub pointer_id: i32,
    pub phase: PointerPhase,
    pub pos: Vec2,
    /// Item pressed on `Down` when the arena has several (pool word id)
    #[serde(default)]
    pub target: Option<u32>,
}

impl PointerEvent {
    pub fn down(pointer_id: i32, pos: Vec2) -> Self {
        Self {
            pointer_id,
            phase: PointerPhase::Down,
            pos,
            target: None,
        }
    }

    pub fn down_on(pointer_id: i32, pos: Vec2, target: u32) -> Self {
        Self {
            target: Some(target),
            ..Self::down(pointer_id, pos)
        }
    }

    pub fn moved(pointer_id: i32, pos: Vec2) -> Self {
        Self {
            pointer_id,
            phase: PointerPhase::Move,
            pos,
            target: None,
        }
    }

    pub fn up(pointer_id: i32, pos: Vec2) -> Self {
        Self {
            pointer_id,
            phase: PointerPhase::Up,
            pos,
            target: None,
        }
    }

    pub fn cancel(pointer_id: i32, pos: Vec2) -> Self {
        Self {
            pointer_id,
            phase: PointerPhase::Cancel,
            pos,
            target: None,
        }
    }
}

/// Where the drag ended up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMove {
    pub pos: Vec2,
    pub tilt: f32,
}

/// Released drag, handed to the arena for classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub pointer: Vec2,
    /// Item position at release
    pub position: Vec2,
    /// Generation of the item when the drag began
    pub generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    pointer_id: i32,
    pointer_start: Vec2,
    origin: Vec2,
    last_x: f32,
    position: Vec2,
    generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Generation of the item being dragged, if any
    pub fn generation(&self) -> Option<u64> {
        self.session.map(|s| s.generation)
    }

    /// Capture `pointer_id`. Returns false if another drag is in progress.
    pub fn begin(&mut self, pointer_id: i32, pointer: Vec2, origin: Vec2, generation: u64) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            pointer_id,
            pointer_start: pointer,
            origin,
            last_x: pointer.x,
            position: origin,
            generation,
        });
        true
    }

    /// Follow the pointer; `None` if the event isn't from the captured pointer
    pub fn update(&mut self, pointer_id: i32, pointer: Vec2, tuning: &Tuning) -> Option<DragMove> {
        let session = self.session.as_mut().filter(|s| s.pointer_id == pointer_id)?;

        session.position = session.origin + (pointer - session.pointer_start);
        let vx = pointer.x - session.last_x;
        session.last_x = pointer.x;
        let tilt = (vx * tuning.tilt_gain).clamp(-tuning.tilt_max, tuning.tilt_max);

        Some(DragMove {
            pos: session.position,
            tilt,
        })
    }

    /// End the drag on `Up` or `Cancel` from the captured pointer
    pub fn release(&mut self, pointer_id: i32, pointer: Vec2) -> Option<DragRelease> {
        let session = self.session.filter(|s| s.pointer_id == pointer_id)?;
        self.session = None;
        Some(DragRelease {
            pointer,
            position: session.position,
            generation: session.generation,
        })
    }

    /// Drop the drag without a release (pause, round teardown)
    pub fn abort(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_motion_from_baseline() {
        let tuning = Tuning::default();
        let mut drag = DragController::new();
        assert!(drag.begin(1, Vec2::new(100.0, 100.0), Vec2::new(0.0, 40.0), 7));

        let moved = drag.update(1, Vec2::new(130.0, 160.0), &tuning).unwrap();
        assert_eq!(moved.pos, Vec2::new(30.0, 100.0));

        let release = drag.release(1, Vec2::new(130.0, 160.0)).unwrap();
        assert_eq!(release.position, Vec2::new(30.0, 100.0));
        assert_eq!(release.generation, 7);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_tilt_from_velocity_is_clamped() {
        let tuning = Tuning::default();
        let mut drag = DragController::new();
        drag.begin(1, Vec2::ZERO, Vec2::ZERO, 0);

        let slow = drag.update(1, Vec2::new(5.0, 0.0), &tuning).unwrap();
        assert!((slow.tilt - 4.0).abs() < 1e-5);

        let fast = drag.update(1, Vec2::new(105.0, 0.0), &tuning).unwrap();
        assert_eq!(fast.tilt, tuning.tilt_max);

        let back = drag.update(1, Vec2::new(0.0, 0.0), &tuning).unwrap();
        assert_eq!(back.tilt, -tuning.tilt_max);
    }

    #[test]
    fn test_other_pointers_are_ignored() {
        let tuning = Tuning::default();
        let mut drag = DragController::new();
        drag.begin(1, Vec2::ZERO, Vec2::ZERO, 0);

        assert!(!drag.begin(2, Vec2::ZERO, Vec2::ZERO, 0));
        assert!(drag.update(2, Vec2::new(50.0, 50.0), &tuning).is_none());
        assert!(drag.release(2, Vec2::new(50.0, 50.0)).is_none());
        assert!(drag.is_dragging());
        assert!(drag.release(1, Vec2::ZERO).is_some());
    }

    #[test]
    fn test_release_without_move_reports_origin() {
        let mut drag = DragController::new();
        drag.begin(3, Vec2::new(10.0, 10.0), Vec2::new(0.0, 90.0), 1);
        let release = drag.release(3, Vec2::new(10.0, 10.0)).unwrap();
        assert_eq!(release.position, Vec2::new(0.0, 90.0));
    }

    #[test]
    fn test_abort_clears_capture() {
        let mut drag = DragController::new();
        drag.begin(1, Vec2::ZERO, Vec2::ZERO, 0);
        drag.abort();
        assert!(drag.release(1, Vec2::ZERO).is_none());
        assert!(drag.begin(2, Vec2::ZERO, Vec2::ZERO, 0));
    }
}
