//! Screen-space rectangles and the layout port
//!
//! The round logic never queries a renderer directly. Whatever draws the game
//! implements `Layout` to report where drop targets and the active word are.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: Vec2::new(left.min(right), top.min(bottom)),
            max: Vec2::new(left.max(right), top.max(bottom)),
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Inclusive on every edge
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Grow by `margin` on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }
}

/// Geometry provider, implemented by the presentation layer
pub trait Layout<R> {
    /// Current rectangle of a drop target, `None` if it isn't laid out yet
    fn region_rect(&self, id: R) -> Option<Rect>;

    /// Rectangle of the active word when its simulated offset is `pos`
    fn entity_rect(&self, _pos: Vec2) -> Option<Rect> {
        None
    }
}

/// Table-backed layout for hosts that push geometry, and for tests
#[derive(Debug, Clone)]
pub struct StaticLayout<R> {
    regions: Vec<(R, Rect)>,
    /// Screen centre of the word at offset zero
    pub entity_origin: Vec2,
    /// Word card size, `None` if unknown
    pub entity_size: Option<Vec2>,
}

impl<R> Default for StaticLayout<R> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            entity_origin: Vec2::ZERO,
            entity_size: None,
        }
    }
}

impl<R: Copy + PartialEq> StaticLayout<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a region rectangle
    pub fn set_region(&mut self, id: R, rect: Rect) {
        match self.regions.iter_mut().find(|(r, _)| *r == id) {
            Some(entry) => entry.1 = rect,
            None => self.regions.push((id, rect)),
        }
    }

    pub fn remove_region(&mut self, id: R) {
        self.regions.retain(|(r, _)| *r != id);
    }

    pub fn clear_regions(&mut self) {
        self.regions.clear();
    }

    pub fn with_region(mut self, id: R, rect: Rect) -> Self {
        self.set_region(id, rect);
        self
    }

    pub fn with_entity(mut self, origin: Vec2, size: Vec2) -> Self {
        self.entity_origin = origin;
        self.entity_size = Some(size);
        self
    }
}

impl<R: Copy + PartialEq> Layout<R> for StaticLayout<R> {
    fn region_rect(&self, id: R) -> Option<Rect> {
        self.regions.iter().find(|(r, _)| *r == id).map(|(_, rect)| *rect)
    }

    fn entity_rect(&self, pos: Vec2) -> Option<Rect> {
        self.entity_size
            .map(|size| Rect::from_center(self.entity_origin + pos, size))
    }
}
