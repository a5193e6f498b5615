// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sketchpad - freehand drawing surface
//!
//! A desktop window hosting a drawing surface with a color picker and a
//! clear button.

use anyhow::Result;
use sketchpad::app::SketchApp;
use sketchpad::config::SketchConfig;
use sketchpad::surface::mount::Scaffold;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = SketchConfig::from_env();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([400.0, 300.0])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Sketchpad",
        options,
        Box::new(move |_cc| Ok(Box::new(SketchApp::new(Scaffold::default(), &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
