//! Rectangle and rounding helpers for the layout pixel math.
//!
//! Every coordinate the layout produces is snapped to one decimal place so that
//! repeated passes over identical input yield identical frames.

use serde::{Deserialize, Serialize};

/// Round a pixel value to one decimal place.
pub fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// An axis-aligned rectangle in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the two rectangles share a region of positive area.
    /// Zero-sized rectangles touching an edge do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        let overlap_left = self.min_x().max(other.min_x());
        let overlap_right = self.max_x().min(other.max_x());
        let overlap_top = self.min_y().max(other.min_y());
        let overlap_bottom = self.max_y().min(other.max_y());

        overlap_right > overlap_left && overlap_bottom > overlap_top
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Width and height of the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}
