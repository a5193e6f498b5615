// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for coordinate transformations between
//! viewport coordinates and surface-local coordinates, and the distance
//! test used when rasterizing segments.

use crate::models::point::Point;

/// Where the surface currently sits on screen.
///
/// Hosts build a fresh value for every event they deliver. Scrolling or
/// relayout moves the origin, so a stale value would shift strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    /// Top-left corner in viewport coordinates.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Convert a viewport position to surface-local coordinates.
    pub fn to_local(&self, viewport: Point) -> Point {
        viewport.offset_from(self.origin)
    }

    /// Whether a viewport position lies over the surface.
    pub fn contains(&self, viewport: Point) -> bool {
        let local = self.to_local(viewport);
        local.x >= 0.0 && local.y >= 0.0 && local.x < self.width && local.y < self.height
    }
}

impl From<egui::Rect> for SurfaceBounds {
    fn from(rect: egui::Rect) -> Self {
        SurfaceBounds::new(rect.min.into(), rect.width() as f64, rect.height() as f64)
    }
}

/// Shortest distance from `p` to the segment `a`-`b`.
///
/// A zero-length segment degenerates to the distance from `a`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_local_tracks_scroll() {
        let before = SurfaceBounds::new(Point::new(10.0, 20.0), 800.0, 500.0);
        let after = SurfaceBounds::new(Point::new(10.0, -30.0), 800.0, 500.0);

        let a = before.to_local(Point::new(110.0, 120.0));
        let b = after.to_local(Point::new(110.0, 70.0));

        assert!((a.x - b.x).abs() < 0.0001);
        assert!((a.y - b.y).abs() < 0.0001);
        assert_eq!(a, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_contains_edges() {
        let bounds = SurfaceBounds::new(Point::new(50.0, 50.0), 800.0, 500.0);

        // Top-left corner is inside, bottom-right edge is not
        assert!(bounds.contains(Point::new(50.0, 50.0)));
        assert!(!bounds.contains(Point::new(850.0, 550.0)));
        assert!(!bounds.contains(Point::new(49.9, 100.0)));
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);

        assert!((distance_to_segment(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 0.0001);
        // Past the end the distance is measured to the endpoint
        assert!((distance_to_segment(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 0.0001);
        // Degenerate segment
        assert!((distance_to_segment(Point::new(3.0, 4.0), a, a) - 5.0).abs() < 0.0001);
    }
}
