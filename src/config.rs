// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor configuration.
//!
//! Settings are read from a YAML file, either the one named by the
//! `PHOTOFRAME_CONFIG` environment variable or `photoframe.yaml` in the
//! working directory. Missing fields fall back to their defaults.

use crate::models::project::Size;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "PHOTOFRAME_CONFIG";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "photoframe.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas size given to newly imported photos.
    pub canvas: Size,
    /// Imported photos wider than this are bounded to it (aspect preserved).
    pub import_max_width: u32,
    /// Distance of one move button press, in canvas units.
    pub move_step: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(15.0, 10.0),
            import_max_width: 600,
            move_step: 1.0 / 2.54,
            zoom_in_factor: 2.0,
            zoom_out_factor: 0.5,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Read a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load the configuration, falling back to defaults when there is no
    /// usable file.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            log::debug!("No config file, using defaults");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.canvas, Size::new(15.0, 10.0));
        assert_eq!(config.import_max_width, 600);
        assert!((config.move_step - 0.3937).abs() < 0.0001);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EditorConfig::from_yaml("canvas:\n  width: 20\n  height: 30\n").unwrap();
        assert_eq!(config.canvas, Size::new(20.0, 30.0));
        assert_eq!(config.import_max_width, 600);
        assert_eq!(config.zoom_in_factor, 2.0);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(EditorConfig::from_yaml("import_max_width: wide").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photoframe.yaml");
        std::fs::write(&path, "move_step: 0.5\n").unwrap();

        let config = EditorConfig::from_file(&path).unwrap();
        assert_eq!(config.move_step, 0.5);
        assert!(EditorConfig::from_file(&dir.path().join("missing.yaml")).is_err());
    }
}
