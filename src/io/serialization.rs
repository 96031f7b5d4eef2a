// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project layout serialization and deserialization.
//!
//! A layout file is a plain array of projects. JSON is the exchange format;
//! YAML with the same structure is accepted as well.

use crate::models::project::Project;
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    Json,
    Yaml,
}

impl LayoutFormat {
    /// Pick the format from a file extension. Files without one are JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension.map(str::to_ascii_lowercase).as_deref() {
            None | Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Serialize projects as pretty-printed JSON.
pub fn to_json(projects: &[Arc<Project>]) -> Result<String> {
    let projects: Vec<&Project> = projects.iter().map(Arc::as_ref).collect();
    Ok(serde_json::to_string_pretty(&projects)?)
}

pub fn from_json(json: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_yaml(projects: &[Arc<Project>]) -> Result<String> {
    let projects: Vec<&Project> = projects.iter().map(Arc::as_ref).collect();
    Ok(serde_yaml::to_string(&projects)?)
}

pub fn from_yaml(yaml: &str) -> Result<Vec<Project>> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Export projects to a layout file.
pub fn export_projects(projects: &[Arc<Project>], path: &Path) -> Result<()> {
    let text = match LayoutFormat::from_path(path)? {
        LayoutFormat::Json => to_json(projects)?,
        LayoutFormat::Yaml => to_yaml(projects)?,
    };
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import projects from a layout file.
pub fn import_projects(path: &Path) -> Result<Vec<Project>> {
    let format = LayoutFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let projects = match format {
        LayoutFormat::Json => from_json(&text),
        LayoutFormat::Yaml => from_yaml(&text),
    }
    .with_context(|| format!("Invalid project file {}", path.display()))?;
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::{ImageRef, Size};
    use crate::util::geometry::AffineMatrix;

    fn projects() -> Vec<Arc<Project>> {
        vec![
            Arc::new(Project {
                id: "TEST".to_string(),
                canvas: Size::new(5.0, 10.0),
                image: ImageRef::new("none", 50.0, 100.0),
                matrix: AffineMatrix::IDENTITY,
            }),
            Arc::new(Project {
                id: "0a1b2c3d4e5f".to_string(),
                canvas: Size::new(15.0, 10.0),
                image: ImageRef::new("/photos/beach.jpg", 600.0, 400.0),
                matrix: AffineMatrix {
                    a: 0.025,
                    b: 0.0,
                    c: 0.0,
                    d: 0.025,
                    e: -0.125,
                    f: 1.0 / 3.0,
                },
            }),
        ]
    }

    #[test]
    fn test_json_layout() {
        let json = to_json(&projects()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["id"], "TEST");
        assert_eq!(first["canvas"]["width"], 5.0);
        assert_eq!(first["image"]["src"], "none");
        assert_eq!(first["image"]["height"], 100.0);
        assert_eq!(first["matrix"]["a"], 1.0);
        assert_eq!(first["matrix"]["f"], 0.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let original = projects();
        let parsed = from_json(&to_json(&original).unwrap()).unwrap();
        let expected: Vec<Project> = original.iter().map(|p| (**p).clone()).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_json_roundtrip_full_mantissa() {
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut next = || {
            // xorshift64, mapped onto [-100, 100)
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed >> 11) as f64 / (1u64 << 53) as f64 * 200.0 - 100.0
        };

        let mut original = vec![Arc::new(Project {
            matrix: AffineMatrix {
                e: 12.154124085147465,
                ..AffineMatrix::IDENTITY
            },
            ..(*projects()[0]).clone()
        })];
        for i in 0..2000 {
            original.push(Arc::new(Project {
                id: format!("p{}", i),
                canvas: Size::new(next().abs(), next().abs()),
                image: ImageRef::new("none", next().abs(), next().abs()),
                matrix: AffineMatrix {
                    a: next(),
                    b: next(),
                    c: next(),
                    d: next(),
                    e: next(),
                    f: next(),
                },
            }));
        }

        let parsed = from_json(&to_json(&original).unwrap()).unwrap();
        for (got, want) in parsed.iter().zip(&original) {
            assert_eq!(got, want.as_ref());
        }
        assert_eq!(parsed.len(), original.len());
    }

    #[test]
    fn test_parses_integer_coefficients() {
        let json = r#"[{"id":"TEST","canvas":{"width":5,"height":10},
            "image":{"src":"none","width":50,"height":100},
            "matrix":{"a":1,"b":0,"c":0,"d":1,"e":0,"f":0}}]"#;
        let parsed = from_json(json).unwrap();
        assert_eq!(parsed[0], *projects()[0]);
    }

    #[test]
    fn test_export_import_files() {
        let dir = tempfile::tempdir().unwrap();
        let expected: Vec<Project> = projects().iter().map(|p| (**p).clone()).collect();

        for name in ["layout.json", "layout.yaml"] {
            let path = dir.path().join(name);
            export_projects(&projects(), &path).unwrap();
            assert_eq!(import_projects(&path).unwrap(), expected);
        }
    }

    #[test]
    fn test_missing_extension_defaults_to_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout");
        assert_eq!(LayoutFormat::from_path(&path).unwrap(), LayoutFormat::Json);

        export_projects(&projects(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert_eq!(import_projects(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.txt");
        assert!(export_projects(&projects(), &path).is_err());
        assert!(!path.exists());
        assert!(import_projects(&path).is_err());
    }
}
