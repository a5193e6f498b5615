// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Config file deserialization.
//!
//! This module reads configuration from YAML or JSON files, choosing the
//! format from the file extension.

use crate::config::SketchConfig;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Import configuration from YAML format.
pub fn import_yaml(path: &Path) -> Result<SketchConfig> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = serde_yaml::from_str(&yaml)
        .with_context(|| format!("invalid YAML in {}", path.display()))?;
    Ok(config)
}

/// Import configuration from JSON format.
pub fn import_json(path: &Path) -> Result<SketchConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;
    Ok(config)
}

/// Import configuration, dispatching on the file extension.
pub fn load_config(path: &Path) -> Result<SketchConfig> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => bail!("Unsupported config file extension: {:?}", extension),
    }
}
