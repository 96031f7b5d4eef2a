// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Photo and project file import.
//!
//! File dialogs are opened on demand and dropped as soon as the user has
//! chosen. Building projects from the chosen photos runs off the UI thread.

use super::{media, ImportError};
use crate::config::EditorConfig;
use crate::models::project::{map_image_to_project, Project};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Ask the user for one or more photos.
pub fn pick_photos() -> Result<Vec<PathBuf>, ImportError> {
    rfd::FileDialog::new()
        .add_filter("Images", PHOTO_EXTENSIONS)
        .pick_files()
        .filter(|files| !files.is_empty())
        .ok_or(ImportError::NoFilesSelected)
}

/// Ask the user for a project layout file.
pub fn pick_project_file() -> Result<PathBuf, ImportError> {
    rfd::FileDialog::new()
        .add_filter("Projects", &["json", "yaml", "yml"])
        .pick_file()
        .ok_or(ImportError::NoFilesSelected)
}

/// Ask the user where to export the project layout.
pub fn pick_export_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .add_filter("YAML", &["yaml", "yml"])
        .set_file_name(default_export_name())
        .save_file()
}

/// Suggested export file name, e.g. `projects-1760000000000.json`.
pub fn default_export_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("projects-{}.json", millis)
}

/// Build one project per readable photo.
///
/// Files that are not photos or fail to decode are logged and skipped
/// without affecting the others.
pub fn build_projects(paths: &[PathBuf], config: &EditorConfig) -> Vec<Project> {
    paths
        .iter()
        .filter_map(|path| match build_project(path, config) {
            Ok(project) => Some(project),
            Err(ImportError::UnsupportedFormat(path)) => {
                log::warn!("Skipping non-image file {}", path.display());
                None
            }
            Err(e) => {
                log::error!("{}", e);
                None
            }
        })
        .collect()
}

fn build_project(path: &Path, config: &EditorConfig) -> Result<Project, ImportError> {
    let image = media::read_image_ref(path, config.import_max_width)?;
    let project = map_image_to_project(image, config.canvas);
    log::info!(
        "Imported {} as project {} ({}x{})",
        path.display(),
        project.id,
        project.image.width,
        project.image.height
    );
    Ok(project)
}
