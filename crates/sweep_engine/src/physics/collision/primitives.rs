//! Primitive collision shapes
//!
//! Provides the axis-aligned rectangle that every sweep test operates on.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// An axis-aligned rectangle (AABB) described by its center and full size
///
/// Sizes are expected to be non-negative. The y axis grows downward when the
/// rectangle comes from screen space, but nothing here depends on that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center of the rectangle
    pub center: Vec2,
    /// Full width and height
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its center and full size
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Creates a rectangle from a top-left (minimum) corner, width and height
    pub fn from_top_left(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(x + width / 2.0, y + height / 2.0),
            size: Vec2::new(width, height),
        }
    }

    /// Half of the width and height
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Minimum corner (left, top)
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    /// Maximum corner (right, bottom)
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents()
    }

    /// Returns a copy moved by `delta`
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.center + delta, self.size)
    }

    /// Returns a copy re-centered on `center`
    #[must_use]
    pub const fn with_center(&self, center: Vec2) -> Self {
        Self::new(center, self.size)
    }

    /// Check if a point lies inside this rectangle (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Check if another rectangle lies entirely inside this one (edges included)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(other.min()) && self.contains(other.max())
    }

    /// Check if this rectangle overlaps another
    ///
    /// The test is strict: rectangles that only share an edge or a corner do
    /// not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_min = self.min();
        let a_max = self.max();
        let b_min = other.min();
        let b_max = other.max();
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}
