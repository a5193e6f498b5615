// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mouse adapter.
//!
//! The host reports primary-button presses, releases and pointer motion
//! anywhere in the window. The adapter keeps track of whether the pointer
//! is over the surface so it can report leaving as its own signal.

use super::{EndReason, PointerSignal};
use crate::models::point::Point;
use crate::util::geometry::SurfaceBounds;

/// Raw mouse input in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseInput {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    /// Pointer left the window.
    Gone,
}

#[derive(Debug, Default)]
pub struct MouseAdapter {
    inside: bool,
}

impl MouseAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one input against the surface's current bounds.
    pub fn translate(&mut self, input: MouseInput, bounds: &SurfaceBounds) -> Option<PointerSignal> {
        match input {
            MouseInput::Pressed(pos) => {
                let was_inside = self.inside;
                self.inside = bounds.contains(pos);
                match (was_inside, self.inside) {
                    (_, true) => Some(PointerSignal::Down(bounds.to_local(pos))),
                    // The surface moved out from under a still pointer
                    (true, false) => Some(PointerSignal::End(EndReason::Leave)),
                    (false, false) => None,
                }
            }
            MouseInput::Moved(pos) => {
                let was_inside = self.inside;
                self.inside = bounds.contains(pos);
                match (was_inside, self.inside) {
                    (_, true) => Some(PointerSignal::Move(bounds.to_local(pos))),
                    (true, false) => Some(PointerSignal::End(EndReason::Leave)),
                    (false, false) => None,
                }
            }
            // A release always ends the drag. The page may have scrolled
            // while the button was held, so the pointer can be off the
            // surface without a move ever reporting it.
            MouseInput::Released(pos) => {
                self.inside = bounds.contains(pos);
                Some(PointerSignal::End(EndReason::Up))
            }
            MouseInput::Gone => {
                let was_inside = std::mem::replace(&mut self.inside, false);
                was_inside.then_some(PointerSignal::End(EndReason::Leave))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> SurfaceBounds {
        SurfaceBounds::new(Point::new(100.0, 50.0), 800.0, 500.0)
    }

    #[test]
    fn test_press_inside_is_down_in_local_coords() {
        let mut mouse = MouseAdapter::new();
        let signal = mouse.translate(MouseInput::Pressed(Point::new(150.0, 80.0)), &bounds());
        assert_eq!(signal, Some(PointerSignal::Down(Point::new(50.0, 30.0))));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut mouse = MouseAdapter::new();
        let signal = mouse.translate(MouseInput::Pressed(Point::new(10.0, 10.0)), &bounds());
        assert_eq!(signal, None);
    }

    #[test]
    fn test_leaving_emits_leave_once() {
        let mut mouse = MouseAdapter::new();
        mouse.translate(MouseInput::Moved(Point::new(150.0, 80.0)), &bounds());

        let out = Point::new(950.0, 80.0);
        assert_eq!(
            mouse.translate(MouseInput::Moved(out), &bounds()),
            Some(PointerSignal::End(EndReason::Leave))
        );
        assert_eq!(mouse.translate(MouseInput::Moved(out), &bounds()), None);

        // Re-entering is just a move; the surface decides whether it draws
        assert_eq!(
            mouse.translate(MouseInput::Moved(Point::new(200.0, 80.0)), &bounds()),
            Some(PointerSignal::Move(Point::new(100.0, 30.0)))
        );
    }

    #[test]
    fn test_release_always_ends() {
        let mut mouse = MouseAdapter::new();
        assert_eq!(
            mouse.translate(MouseInput::Released(Point::new(150.0, 80.0)), &bounds()),
            Some(PointerSignal::End(EndReason::Up))
        );
        assert_eq!(
            mouse.translate(MouseInput::Released(Point::new(0.0, 0.0)), &bounds()),
            Some(PointerSignal::End(EndReason::Up))
        );
    }

    #[test]
    fn test_release_after_scroll_ends_drag() {
        let mut mouse = MouseAdapter::new();
        let at_rest = SurfaceBounds::new(Point::new(0.0, 100.0), 800.0, 500.0);
        let scrolled = SurfaceBounds::new(Point::new(0.0, -500.0), 800.0, 500.0);
        let pointer = Point::new(50.0, 150.0);

        assert_eq!(
            mouse.translate(MouseInput::Pressed(pointer), &at_rest),
            Some(PointerSignal::Down(Point::new(50.0, 50.0)))
        );
        // Wheel scroll moved the surface away; the pointer stayed put
        assert_eq!(
            mouse.translate(MouseInput::Released(pointer), &scrolled),
            Some(PointerSignal::End(EndReason::Up))
        );
    }

    #[test]
    fn test_press_after_surface_scrolled_away_leaves() {
        let mut mouse = MouseAdapter::new();
        let at_rest = SurfaceBounds::new(Point::new(0.0, 100.0), 800.0, 500.0);
        let scrolled = SurfaceBounds::new(Point::new(0.0, -500.0), 800.0, 500.0);

        mouse.translate(MouseInput::Moved(Point::new(50.0, 150.0)), &at_rest);
        assert_eq!(
            mouse.translate(MouseInput::Pressed(Point::new(50.0, 150.0)), &scrolled),
            Some(PointerSignal::End(EndReason::Leave))
        );
        assert_eq!(
            mouse.translate(MouseInput::Pressed(Point::new(50.0, 150.0)), &scrolled),
            None
        );
    }

    #[test]
    fn test_gone_only_leaves_when_inside() {
        let mut mouse = MouseAdapter::new();
        assert_eq!(mouse.translate(MouseInput::Gone, &bounds()), None);

        mouse.translate(MouseInput::Moved(Point::new(150.0, 80.0)), &bounds());
        assert_eq!(
            mouse.translate(MouseInput::Gone, &bounds()),
            Some(PointerSignal::End(EndReason::Leave))
        );
    }

    #[test]
    fn test_bounds_are_read_per_event() {
        let mut mouse = MouseAdapter::new();
        let scrolled = SurfaceBounds::new(Point::new(100.0, 0.0), 800.0, 500.0);

        mouse.translate(MouseInput::Pressed(Point::new(150.0, 80.0)), &bounds());
        assert_eq!(
            mouse.translate(MouseInput::Moved(Point::new(150.0, 80.0)), &scrolled),
            Some(PointerSignal::Move(Point::new(50.0, 80.0)))
        );
    }
}
