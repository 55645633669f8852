//! Stage geometry in whole pixels.
//!
//! Positions are signed because a layer larger than the base model is
//! placed partly above or left of it.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A pixel position on the stage (top-left anchored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Image or stage dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the right edge coordinate (exclusive)
    pub fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    /// Returns the bottom edge coordinate (exclusive)
    pub fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Offset that centers `inner` within `outer`.
///
/// Uses floor division, so an odd difference rounds toward negative infinity
/// (a 3px-wider item sits 2px left, not 1px).
pub fn center_offset(outer: Size, inner: Size) -> Point {
    let dx = (outer.width as i64 - inner.width as i64).div_euclid(2);
    let dy = (outer.height as i64 - inner.height as i64).div_euclid(2);
    Point::new(dx, dy)
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
