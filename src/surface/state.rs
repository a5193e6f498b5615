// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drag state of the drawing surface.

use crate::models::point::Point;

/// Coarse mode of the surface, without the pen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Dragging,
}

/// Input state machine.
///
/// The last pen position only exists while dragging, so it lives inside
/// the `Dragging` variant. Points are surface-local.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawState {
    #[default]
    Idle,
    Dragging { last: Point },
}

impl DrawState {
    pub fn mode(&self) -> Mode {
        match self {
            DrawState::Idle => Mode::Idle,
            DrawState::Dragging { .. } => Mode::Dragging,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DrawState::Dragging { .. })
    }

    pub fn last_point(&self) -> Option<Point> {
        match self {
            DrawState::Idle => None,
            DrawState::Dragging { last } => Some(*last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_point_defined_iff_dragging() {
        let idle = DrawState::default();
        assert_eq!(idle.mode(), Mode::Idle);
        assert_eq!(idle.last_point(), None);

        let dragging = DrawState::Dragging {
            last: Point::new(3.0, 4.0),
        };
        assert_eq!(dragging.mode(), Mode::Dragging);
        assert!(dragging.is_dragging());
        assert_eq!(dragging.last_point(), Some(Point::new(3.0, 4.0)));
    }
}
