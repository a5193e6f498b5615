// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas display and input routing.
//!
//! This module shows the surface's raster as a texture and forwards the
//! frame's egui events to the mouse and touch adapters. The on-screen
//! rect of the canvas is taken from this frame's layout, so scrolling
//! between frames never shifts the strokes.

use crate::input::mouse::{MouseAdapter, MouseInput};
use crate::input::touch::{TouchAdapter, TouchInput, TouchPhase};
use crate::surface::{raster::Raster, DrawingSurface};
use crate::util::geometry::SurfaceBounds;

/// Both input adapters for one canvas.
#[derive(Debug, Default)]
pub struct CanvasInput {
    mouse: MouseAdapter,
    touch: TouchAdapter,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether scrolling of the enclosing page must be held off.
    pub fn suppresses_default(&self) -> bool {
        self.touch.suppresses_default()
    }

    /// Translate this frame's events and apply them to `surface` in order.
    ///
    /// egui also reports touches as emulated pointer events. Pointer events
    /// are dropped in frames that carry touches or while a finger is down,
    /// so a contact is only seen once.
    pub fn route(&mut self, events: &[egui::Event], bounds: &SurfaceBounds, surface: &mut DrawingSurface) {
        let mouse_muted = self.touch.suppresses_default()
            || events.iter().any(|e| matches!(e, egui::Event::Touch { .. }));

        for event in events {
            let signal = match event {
                egui::Event::Touch { id, phase, pos, .. } => {
                    let input = TouchInput {
                        id: id.0,
                        phase: touch_phase(*phase),
                        pos: (*pos).into(),
                    };
                    self.touch.translate(input, bounds)
                }
                _ if mouse_muted => None,
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let input = if *pressed {
                        MouseInput::Pressed((*pos).into())
                    } else {
                        MouseInput::Released((*pos).into())
                    };
                    self.mouse.translate(input, bounds)
                }
                egui::Event::PointerMoved(pos) => {
                    self.mouse.translate(MouseInput::Moved((*pos).into()), bounds)
                }
                egui::Event::PointerGone => self.mouse.translate(MouseInput::Gone, bounds),
                _ => None,
            };

            if let Some(signal) = signal {
                surface.apply(signal);
            }
        }
    }
}

fn touch_phase(phase: egui::TouchPhase) -> TouchPhase {
    match phase {
        egui::TouchPhase::Start => TouchPhase::Start,
        egui::TouchPhase::Move => TouchPhase::Move,
        egui::TouchPhase::End => TouchPhase::End,
        egui::TouchPhase::Cancel => TouchPhase::Cancel,
    }
}

fn to_color_image(raster: &Raster) -> egui::ColorImage {
    let size = [raster.width() as usize, raster.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, raster.as_raw())
}

/// Display the canvas and handle pointer and touch input on it.
pub fn show(
    ui: &mut egui::Ui,
    surface: &mut DrawingSurface,
    texture: &mut Option<egui::TextureHandle>,
    input: &mut CanvasInput,
) {
    let size = egui::vec2(surface.width() as f32, surface.height() as f32);
    let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::drag());

    let events = ui.input(|i| i.events.clone());
    input.route(&events, &SurfaceBounds::from(rect), surface);

    // Upload the raster only when it changed
    if surface.take_dirty() || texture.is_none() {
        let image = to_color_image(surface.raster());
        match texture {
            Some(handle) => handle.set(image, egui::TextureOptions::NEAREST),
            None => {
                *texture = Some(ui.ctx().load_texture(
                    "drawing_surface",
                    image,
                    egui::TextureOptions::NEAREST,
                ));
            }
        }
    }

    if let Some(handle) = texture {
        ui.painter().image(
            handle.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    // Status line below the canvas
    ui.horizontal(|ui| {
        ui.label(format!("{}x{}", surface.width(), surface.height()));
        ui.separator();
        match surface.state().last_point() {
            Some(p) => ui.label(format!("Drawing at ({:.0}, {:.0})", p.x, p.y)),
            None => ui.label("Ready"),
        };
    });
}
