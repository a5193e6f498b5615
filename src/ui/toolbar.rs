// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with the color control and the clear control.
//!
//! Either control may be absent when the host supplied its own toolbar
//! without it.

use crate::config::ToolbarConfig;
use crate::models::color::HexColor;

/// Which controls the toolbar shows, and their labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub color_label: Option<String>,
    pub clear_label: Option<String>,
}

impl Toolbar {
    /// A toolbar with no controls.
    pub fn empty() -> Self {
        Self {
            color_label: None,
            clear_label: None,
        }
    }

    /// The default toolbar: one color control and one clear control.
    pub fn from_config(config: &ToolbarConfig) -> Self {
        Self {
            color_label: Some(config.color_label.clone()),
            clear_label: Some(config.clear_label.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color_label.is_none() && self.clear_label.is_none()
    }
}

/// Result of toolbar interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    ColorChanged(HexColor),
    Clear,
}

/// Display the toolbar.
///
/// The color button reports every change, both while the picker is open
/// and when it is closed.
pub fn show(ui: &mut egui::Ui, toolbar: &Toolbar, current: HexColor) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if let Some(label) = &toolbar.color_label {
            ui.label(label);
            let mut rgb = current.to_array();
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                action = ToolbarAction::ColorChanged(HexColor::from_rgb(rgb[0], rgb[1], rgb[2]));
            }
            ui.label(egui::RichText::new(current.to_string()).monospace().weak());
        }

        if toolbar.color_label.is_some() && toolbar.clear_label.is_some() {
            ui.separator();
        }

        if let Some(label) = &toolbar.clear_label {
            if ui.button(label).clicked() {
                action = ToolbarAction::Clear;
            }
        }
    });

    action
}
