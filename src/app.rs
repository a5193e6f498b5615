// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The window is laid out like a scrolling page section: a heading, the
//! toolbar and the canvas. The app owns one mounted surface and hands
//! mutable references to the UI components each frame.

use crate::config::SketchConfig;
use crate::surface::mount::{mount, Mounted, Scaffold};
use crate::ui::{
    canvas::{self, CanvasInput},
    toolbar::{self, ToolbarAction},
};

/// Main application state.
pub struct SketchApp {
    /// Surface and controls
    mounted: Mounted,

    /// Texture mirroring the surface raster
    texture: Option<egui::TextureHandle>,

    /// Mouse and touch adapters for the canvas
    input: CanvasInput,
}

impl SketchApp {
    /// Create the app, mounting into `scaffold` and synthesizing whatever
    /// it lacks.
    pub fn new(scaffold: Scaffold, config: &SketchConfig) -> Self {
        Self {
            mounted: mount(scaffold, config),
            texture: None,
            input: CanvasInput::new(),
        }
    }

    fn handle_toolbar(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::ColorChanged(color) => self.mounted.surface.set_color(color),
            ToolbarAction::Clear => self.mounted.surface.clear(),
            ToolbarAction::None => {}
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A finger on the canvas owns the gesture; the page must not scroll
        let page_scroll = !self.input.suppresses_default();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .enable_scrolling(page_scroll)
                .drag_to_scroll(page_scroll)
                .show(ui, |ui| {
                    if let Some(heading) = &self.mounted.heading {
                        ui.heading(heading);
                        ui.add_space(8.0);
                    }

                    if !self.mounted.toolbar.is_empty() {
                        let action = toolbar::show(
                            ui,
                            &self.mounted.toolbar,
                            self.mounted.surface.color(),
                        );
                        self.handle_toolbar(action);
                        ui.add_space(8.0);
                    }

                    canvas::show(
                        ui,
                        &mut self.mounted.surface,
                        &mut self.texture,
                        &mut self.input,
                    );
                });
        });
    }
}
