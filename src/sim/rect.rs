//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! Screen coordinates: x grows to the right, y grows toward the floor.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point (where brick labels are anchored)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point lies inside the rectangle grown by `offset` on every side
    ///
    /// Edges are inclusive.
    pub fn contains_inflated(&self, point: Vec2, offset: f32) -> bool {
        point.x >= self.x - offset
            && point.x <= self.right() + offset
            && point.y >= self.y - offset
            && point.y <= self.bottom() + offset
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.contains_inflated(point, 0.0)
    }
}
