// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Attaching a drawing surface to whatever the host provides.
//!
//! A host may hand over its own raster and toolbar, or nothing at all.
//! Missing pieces are not an error: a surface of the configured size and
//! a toolbar with a color and a clear control are built instead.

use super::{raster::Raster, DrawingSurface};
use crate::config::SketchConfig;
use crate::ui::toolbar::Toolbar;

/// What the host already has in place.
#[derive(Debug, Default)]
pub struct Scaffold {
    pub surface: Option<Raster>,
    pub toolbar: Option<Toolbar>,
}

/// A ready-to-use surface and the controls that drive it.
pub struct Mounted {
    pub surface: DrawingSurface,
    pub toolbar: Toolbar,
    /// Heading for a synthesized section; hosts with their own scaffold
    /// label it themselves.
    pub heading: Option<String>,
}

/// Mount a surface into `scaffold`, synthesizing whatever is missing.
pub fn mount(scaffold: Scaffold, config: &SketchConfig) -> Mounted {
    match scaffold.surface {
        Some(raster) => {
            log::info!(
                "Mounted on host surface {}x{}",
                raster.width(),
                raster.height()
            );
            Mounted {
                surface: DrawingSurface::with_raster(raster, config),
                toolbar: scaffold.toolbar.unwrap_or_else(Toolbar::empty),
                heading: None,
            }
        }
        None => {
            log::info!(
                "No host surface, creating default {}x{} surface",
                config.width,
                config.height
            );
            Mounted {
                surface: DrawingSurface::new(config),
                toolbar: Toolbar::from_config(&config.toolbar),
                heading: Some(config.heading.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::state::DrawState;

    #[test]
    fn test_empty_scaffold_synthesizes_defaults() {
        let mounted = mount(Scaffold::default(), &SketchConfig::default());

        assert_eq!((mounted.surface.width(), mounted.surface.height()), (800, 500));
        assert_eq!(mounted.toolbar.color_label.as_deref(), Some("Color:"));
        assert_eq!(mounted.toolbar.clear_label.as_deref(), Some("Clear"));
        assert_eq!(mounted.heading.as_deref(), Some("Canvas Drawing"));
        assert_eq!(mounted.surface.state(), DrawState::Idle);
    }

    #[test]
    fn test_host_surface_is_adopted() {
        let scaffold = Scaffold {
            surface: Some(Raster::new(320, 240)),
            toolbar: None,
        };
        let mounted = mount(scaffold, &SketchConfig::default());

        assert_eq!((mounted.surface.width(), mounted.surface.height()), (320, 240));
        // Background is painted over the host raster
        assert_eq!(mounted.surface.raster().pixel(0, 0).unwrap()[3], 255);
        // No controls were offered, none are invented
        assert_eq!(mounted.toolbar, Toolbar::empty());
        assert_eq!(mounted.heading, None);
    }

    #[test]
    fn test_host_toolbar_is_kept() {
        let toolbar = Toolbar {
            color_label: Some("Ink".to_string()),
            clear_label: None,
        };
        let scaffold = Scaffold {
            surface: Some(Raster::new(10, 10)),
            toolbar: Some(toolbar.clone()),
        };

        let mounted = mount(scaffold, &SketchConfig::default());
        assert_eq!(mounted.toolbar, toolbar);
    }

    #[test]
    fn test_config_size_is_used_when_synthesizing() {
        let config = SketchConfig {
            width: 64,
            height: 32,
            ..SketchConfig::default()
        };
        let mounted = mount(Scaffold::default(), &config);
        assert_eq!((mounted.surface.width(), mounted.surface.height()), (64, 32));
    }
}
