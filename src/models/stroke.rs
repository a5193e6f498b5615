// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stroke appearance.
//!
//! Only the color is adjustable. Width is fixed, and caps and joins are
//! always round, so every segment on the surface looks the same apart
//! from its color.

use super::color::HexColor;

/// Width of every stroke, in logical pixels.
pub const STROKE_WIDTH: f64 = 3.0;

/// Style applied to each segment at the moment it is drawn.
///
/// The renderer covers everything within [`StrokeStyle::radius`] of a
/// segment, which makes caps round and lets consecutive caps form round
/// joins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: HexColor,
    width: f64,
}

impl StrokeStyle {
    /// Create a style with the given color and the fixed width.
    pub fn new(color: HexColor) -> Self {
        Self {
            color,
            width: STROKE_WIDTH,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Half the stroke width; the distance from the centerline a pixel
    /// may be and still be covered.
    pub fn radius(&self) -> f64 {
        self.width() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width() {
        let style = StrokeStyle::new(HexColor::from_rgb(0, 0, 0));
        assert_eq!(style.width(), 3.0);
        assert_eq!(style.radius(), 1.5);
    }
}
