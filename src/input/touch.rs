// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Touch adapter.
//!
//! Touches arrive one contact at a time. The earliest contact still down
//! is the primary one and is the only contact that draws. A contact that
//! started on the surface keeps drawing even when it slides off it.

use super::{EndReason, PointerSignal};
use crate::models::point::Point;
use crate::util::geometry::SurfaceBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One touch update in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchInput {
    pub id: u64,
    pub phase: TouchPhase,
    pub pos: Point,
}

#[derive(Debug, Default)]
pub struct TouchAdapter {
    /// Active contacts in arrival order, with their last viewport position.
    contacts: Vec<(u64, Point)>,
}

impl TouchAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the platform's scroll and zoom gestures must be held off.
    pub fn suppresses_default(&self) -> bool {
        !self.contacts.is_empty()
    }

    /// Translate one touch update against the surface's current bounds.
    pub fn translate(&mut self, input: TouchInput, bounds: &SurfaceBounds) -> Option<PointerSignal> {
        let tracked = self.contacts.iter().position(|(id, _)| *id == input.id);

        match input.phase {
            TouchPhase::Start => {
                if !bounds.contains(input.pos) {
                    return None;
                }
                match tracked {
                    Some(i) => self.contacts[i].1 = input.pos,
                    None => self.contacts.push((input.id, input.pos)),
                }
                let (_, primary) = self.contacts[0];
                Some(PointerSignal::Down(bounds.to_local(primary)))
            }
            TouchPhase::Move => {
                let i = tracked?;
                self.contacts[i].1 = input.pos;
                (i == 0).then(|| PointerSignal::Move(bounds.to_local(input.pos)))
            }
            TouchPhase::End | TouchPhase::Cancel => {
                self.contacts.remove(tracked?);
                let reason = if input.phase == TouchPhase::End {
                    EndReason::Up
                } else {
                    EndReason::Cancel
                };
                Some(PointerSignal::End(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> SurfaceBounds {
        SurfaceBounds::new(Point::new(0.0, 100.0), 800.0, 500.0)
    }

    fn touch(id: u64, phase: TouchPhase, x: f64, y: f64) -> TouchInput {
        TouchInput {
            id,
            phase,
            pos: Point::new(x, y),
        }
    }

    #[test]
    fn test_single_contact_lifecycle() {
        let mut adapter = TouchAdapter::new();
        assert!(!adapter.suppresses_default());

        assert_eq!(
            adapter.translate(touch(1, TouchPhase::Start, 10.0, 110.0), &bounds()),
            Some(PointerSignal::Down(Point::new(10.0, 10.0)))
        );
        assert!(adapter.suppresses_default());

        assert_eq!(
            adapter.translate(touch(1, TouchPhase::Move, 20.0, 130.0), &bounds()),
            Some(PointerSignal::Move(Point::new(20.0, 30.0)))
        );
        assert_eq!(
            adapter.translate(touch(1, TouchPhase::End, 20.0, 130.0), &bounds()),
            Some(PointerSignal::End(EndReason::Up))
        );
        assert!(!adapter.suppresses_default());
    }

    #[test]
    fn test_start_outside_surface_is_ignored() {
        let mut adapter = TouchAdapter::new();
        assert_eq!(
            adapter.translate(touch(1, TouchPhase::Start, 10.0, 10.0), &bounds()),
            None
        );
        assert_eq!(
            adapter.translate(touch(1, TouchPhase::Move, 10.0, 150.0), &bounds()),
            None
        );
        assert!(!adapter.suppresses_default());
    }

    #[test]
    fn test_primary_contact_draws_off_surface() {
        let mut adapter = TouchAdapter::new();
        adapter.translate(touch(1, TouchPhase::Start, 10.0, 110.0), &bounds());

        assert_eq!(
            adapter.translate(touch(1, TouchPhase::Move, -40.0, 90.0), &bounds()),
            Some(PointerSignal::Move(Point::new(-40.0, -10.0)))
        );
    }

    #[test]
    fn test_second_finger_restarts_at_primary() {
        let mut adapter = TouchAdapter::new();
        adapter.translate(touch(1, TouchPhase::Start, 10.0, 110.0), &bounds());
        adapter.translate(touch(1, TouchPhase::Move, 50.0, 150.0), &bounds());

        assert_eq!(
            adapter.translate(touch(2, TouchPhase::Start, 400.0, 400.0), &bounds()),
            Some(PointerSignal::Down(Point::new(50.0, 50.0)))
        );
        // Secondary motion does not draw
        assert_eq!(
            adapter.translate(touch(2, TouchPhase::Move, 410.0, 410.0), &bounds()),
            None
        );
    }

    #[test]
    fn test_cancel_ends_with_cancel() {
        let mut adapter = TouchAdapter::new();
        adapter.translate(touch(7, TouchPhase::Start, 10.0, 110.0), &bounds());

        assert_eq!(
            adapter.translate(touch(7, TouchPhase::Cancel, 10.0, 110.0), &bounds()),
            Some(PointerSignal::End(EndReason::Cancel))
        );
        assert_eq!(
            adapter.translate(touch(7, TouchPhase::Cancel, 10.0, 110.0), &bounds()),
            None
        );
    }
}
