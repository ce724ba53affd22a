//! Axis-aligned rectangle geometry for the body and obstacles
//!
//! A rectangle is its top-left corner plus a non-negative extent. Y grows
//! downward, matching the logical screen space the level is authored in.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width (≥ 0)
    pub w: f32,
    /// Height (≥ 0)
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test.
    ///
    /// Exact edge contact is NOT an overlap: a body resting with its bottom
    /// on an obstacle's top shares the edge without colliding, which is what
    /// lets it sit on a surface instead of being perpetually inside it.
    /// Zero-extent rectangles therefore never overlap anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Inclusive point containment, used for on-screen button hit testing.
    /// Unlike `overlaps`, a point exactly on an edge counts as inside.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}
