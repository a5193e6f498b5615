// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The freehand drawing surface.
//!
//! [`DrawingSurface`] owns the raster, the drag state and the current
//! stroke color. All input arrives as [`PointerSignal`]s through
//! [`DrawingSurface::apply`], which runs each signal to completion before
//! returning.

pub mod mount;
pub mod raster;
pub mod state;

use crate::config::SketchConfig;
use crate::input::PointerSignal;
use crate::models::{color::HexColor, stroke::StrokeStyle};
use raster::{Gradient, Raster};
use state::DrawState;

/// A persistent raster that turns drags into connected line segments.
pub struct DrawingSurface {
    raster: Raster,
    background: Gradient,
    state: DrawState,
    style: StrokeStyle,
    /// Segments drawn since the last Down.
    segments: usize,
    /// Raster changed since the last `take_dirty`.
    dirty: bool,
}

impl DrawingSurface {
    /// Create a surface of the configured size on the canonical background.
    pub fn new(config: &SketchConfig) -> Self {
        Self::with_raster(Raster::new(config.width, config.height), config)
    }

    /// Adopt a raster supplied by the host. Its size is kept and its
    /// contents are replaced by the canonical background.
    pub fn with_raster(raster: Raster, config: &SketchConfig) -> Self {
        let mut surface = Self {
            raster,
            background: config.background,
            state: DrawState::Idle,
            style: StrokeStyle::new(config.stroke_color),
            segments: 0,
            dirty: true,
        };
        surface.raster.fill_gradient(&surface.background);
        surface
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Color the next segment will be drawn in.
    pub fn color(&self) -> HexColor {
        self.style.color
    }

    /// Select the color for subsequent segments. Segments already on the
    /// raster keep their color.
    pub fn set_color(&mut self, color: HexColor) {
        if color != self.style.color {
            log::debug!("Stroke color {} -> {}", self.style.color, color);
            self.style.color = color;
        }
    }

    /// Segments drawn in the current stroke, or the last one if idle.
    pub fn segments_drawn(&self) -> usize {
        self.segments
    }

    /// Returns whether the raster changed since the previous call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Feed one signal through the state machine.
    pub fn apply(&mut self, signal: PointerSignal) {
        log::trace!("{:?} in {:?}", signal, self.state.mode());

        match signal {
            PointerSignal::Down(point) => {
                if !self.state.is_dragging() {
                    log::debug!("Stroke started at ({:.1}, {:.1})", point.x, point.y);
                }
                self.segments = 0;
                self.state = DrawState::Dragging { last: point };
            }
            PointerSignal::Move(point) => {
                if let DrawState::Dragging { last } = &mut self.state {
                    self.raster.draw_segment(*last, point, &self.style);
                    *last = point;
                    self.segments += 1;
                    self.dirty = true;
                }
            }
            PointerSignal::End(reason) => {
                if self.state.is_dragging() {
                    log::debug!(
                        "Stroke ended ({:?}) after {} segments",
                        reason,
                        self.segments
                    );
                }
                self.state = DrawState::Idle;
            }
        }
    }

    /// Erase everything and repaint the canonical background.
    ///
    /// The drag state is left alone; a drag in progress keeps drawing from
    /// its last point.
    pub fn clear(&mut self) {
        self.raster.erase();
        self.raster.fill_gradient(&self.background);
        self.dirty = true;
        log::info!("Surface cleared");
    }
}
