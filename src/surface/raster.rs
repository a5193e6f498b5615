// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pixel buffer behind the drawing surface.
//!
//! The raster is the only record of what has been drawn. Segments are
//! composited directly into it and never kept anywhere else.

use crate::config::{GRADIENT_END, GRADIENT_START};
use crate::models::{color::HexColor, point::Point, stroke::StrokeStyle};
use crate::util::geometry::distance_to_segment;
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// Two-stop linear gradient running from the top-left corner to the
/// bottom-right corner of the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gradient {
    pub from: HexColor,
    pub to: HexColor,
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(GRADIENT_START, GRADIENT_END)
    }
}

impl Gradient {
    pub fn new(from: HexColor, to: HexColor) -> Self {
        Self { from, to }
    }

    /// Color at position `t` along the gradient axis, `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> Rgba<u8> {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba([
            lerp(self.from.r(), self.to.r()),
            lerp(self.from.g(), self.to.g()),
            lerp(self.from.b(), self.to.b()),
            255,
        ])
    }
}

/// Fixed-size RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: RgbaImage,
}

impl Raster {
    /// Create a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Reset every pixel to transparent.
    pub fn erase(&mut self) {
        self.pixels.fill(0);
    }

    /// Paint `gradient` over the whole raster.
    ///
    /// Each pixel is sampled at its center, projected onto the diagonal
    /// from `(0, 0)` to `(width, height)`.
    pub fn fill_gradient(&mut self, gradient: &Gradient) {
        let w = self.width() as f64;
        let h = self.height() as f64;
        let axis_len_sq = w * w + h * h;

        for (x, y, px) in self.pixels.enumerate_pixels_mut() {
            let cx = x as f64 + 0.5;
            let cy = y as f64 + 0.5;
            let t = if axis_len_sq > 0.0 {
                (cx * w + cy * h) / axis_len_sq
            } else {
                0.0
            };
            *px = gradient.sample(t);
        }
    }

    /// Draw one straight segment from `from` to `to`.
    ///
    /// Coverage depends only on the distance from a pixel center to the
    /// segment, which gives round caps at both ends. Consecutive segments
    /// share an endpoint, so their caps overlap into a round join. Pixels
    /// within `radius - 0.5` are fully covered; coverage then falls off
    /// linearly to zero at `radius + 0.5`.
    /// Parts of the segment outside the raster are clipped.
    pub fn draw_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        if ![from.x, from.y, to.x, to.y].iter().all(|v| v.is_finite()) {
            log::debug!("Skipping segment with non-finite endpoint");
            return;
        }

        let radius = style.radius();
        let reach = radius + 1.0;
        let clamp_x = |v: f64| (v as i64).clamp(0, self.width() as i64) as u32;
        let clamp_y = |v: f64| (v as i64).clamp(0, self.height() as i64) as u32;

        let x0 = clamp_x((from.x.min(to.x) - reach).floor());
        let x1 = clamp_x((from.x.max(to.x) + reach).ceil());
        let y0 = clamp_y((from.y.min(to.y) - reach).floor());
        let y1 = clamp_y((from.y.max(to.y) + reach).ceil());

        let color: Rgba<u8> = style.color.into();

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let coverage = (radius + 0.5 - distance_to_segment(center, from, to)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let dst = self.pixels.get_pixel_mut(x, y);
                    *dst = blend(*dst, color, coverage);
                }
            }
        }
    }
}

/// Composite `src` over `dst` with the given coverage.
fn blend(dst: Rgba<u8>, src: Rgba<u8>, coverage: f64) -> Rgba<u8> {
    if coverage >= 1.0 {
        return src;
    }
    let mix = |d: u8, s: u8| (s as f64 * coverage + d as f64 * (1.0 - coverage)).round() as u8;
    Rgba([
        mix(dst[0], src[0]),
        mix(dst[1], src[1]),
        mix(dst[2], src[2]),
        mix(dst[3], src[3]),
    ])
}
