// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Input normalization.
//!
//! Mouse and touch each have an adapter that turns native input into
//! [`PointerSignal`]s in surface-local coordinates. The drawing surface
//! only ever sees signals, so both input sources drive the same state
//! machine.

pub mod mouse;
pub mod touch;

use crate::models::point::Point;

/// Why a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Button released or finger lifted.
    Up,
    /// Pointer left the surface.
    Leave,
    /// Platform cancelled the touch.
    Cancel,
}

/// Canonical input event consumed by [`crate::surface::DrawingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSignal {
    Down(Point),
    Move(Point),
    End(EndReason),
}
