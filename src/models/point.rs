// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Positions on screen and on the drawing surface.

/// A 2D point in logical pixels.
///
/// Whether a point is viewport-relative or surface-local depends on where
/// it came from; adapters in [`crate::input`] only ever hand surface-local
/// points to the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<egui::Pos2> for Point {
    fn from(pos: egui::Pos2) -> Self {
        Point::new(pos.x as f64, pos.y as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from() {
        let p = Point::new(110.0, 70.0).offset_from(Point::new(10.0, -30.0));
        assert_eq!(p, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_distance() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-9);
    }
}
