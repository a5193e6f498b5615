// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides. The file path comes from the `SKETCHPAD_CONFIG` environment
//! variable; without it the built-in defaults are used.

use crate::models::color::HexColor;
use crate::surface::raster::Gradient;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional YAML or JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 500;
/// Largest surface side accepted from a config file. Also the common GPU
/// texture limit the canvas is uploaded into.
pub const MAX_SURFACE_SIDE: u32 = 8192;
pub const GRADIENT_START: HexColor = HexColor::from_rgb(0x66, 0x7e, 0xea);
pub const GRADIENT_END: HexColor = HexColor::from_rgb(0x76, 0x4b, 0xa2);

/// Labels for the default toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    pub color_label: String,
    pub clear_label: String,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            color_label: "Color:".to_string(),
            clear_label: "Clear".to_string(),
        }
    }
}

/// Native window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
            title: "Sketchpad".to_string(),
        }
    }
}

/// Complete configuration for the drawing surface and its window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Width of a synthesized surface in logical pixels.
    pub width: u32,
    /// Height of a synthesized surface in logical pixels.
    pub height: u32,
    pub background: Gradient,
    /// Stroke color before the user picks one.
    pub stroke_color: HexColor,
    /// Heading shown above a synthesized toolbar.
    pub heading: String,
    pub toolbar: ToolbarConfig,
    pub window: WindowConfig,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Gradient::default(),
            stroke_color: GRADIENT_START,
            heading: "Canvas Drawing".to_string(),
            toolbar: ToolbarConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl SketchConfig {
    /// Load configuration from `path`, or return the defaults when no path
    /// is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => crate::io::serialization::load_config(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration named by [`CONFIG_ENV_VAR`].
    ///
    /// A config that cannot be read or is invalid is reported and replaced
    /// by the defaults; startup never fails on configuration.
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR).map(std::path::PathBuf::from);
        match Self::load(path.as_deref()) {
            Ok(config) => {
                if let Some(path) = &path {
                    log::info!("Loaded config from {}", path.display());
                }
                config
            }
            Err(e) => {
                log::warn!("Ignoring config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Reject values no surface can be built from.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "surface size must be non-zero, got {}x{}",
                self.width,
                self.height
            );
        }
        if self.width > MAX_SURFACE_SIDE || self.height > MAX_SURFACE_SIDE {
            bail!(
                "surface size {}x{} exceeds the {} pixel limit per side",
                self.width,
                self.height,
                MAX_SURFACE_SIDE
            );
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            bail!(
                "window size must be positive, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        Ok(())
    }
}
