// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for photos and project files.

pub mod import;
pub mod media;
pub mod serialization;

use std::path::PathBuf;
use thiserror::Error;

/// Failures at the file import boundary.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The user closed the file dialog without picking anything.
    #[error("No files selected")]
    NoFilesSelected,

    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The image could not be read or decoded.
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
