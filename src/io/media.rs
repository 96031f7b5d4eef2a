// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! Importing only needs an image's dimensions, which are read from the file
//! header. Displaying an image needs the full RGBA pixel buffer.

use super::ImportError;
use crate::models::project::ImageRef;
use image::{ImageFormat, ImageReader};
use std::path::Path;

/// Decoded RGBA8 pixels ready to become a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Whether the file is a photo format accepted for import (JPEG, PNG, GIF).
pub fn is_image_file(path: &Path) -> bool {
    matches!(
        ImageFormat::from_path(path),
        Ok(ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Gif)
    )
}

/// Dimensions after bounding `width` to `max_width`, aspect preserved.
pub fn bounded_size(width: u32, height: u32, max_width: u32) -> (f64, f64) {
    let (width, height) = (f64::from(width), f64::from(height));
    let max_width = f64::from(max_width);
    if max_width <= 0.0 || width <= max_width {
        return (width, height);
    }
    (max_width, (height * max_width / width).round())
}

/// Read an image's dimensions and build a reference to it for a new project.
pub fn read_image_ref(path: &Path, max_width: u32) -> Result<ImageRef, ImportError> {
    if !is_image_file(path) {
        return Err(ImportError::UnsupportedFormat(path.to_path_buf()));
    }

    let (width, height) = ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|source| ImportError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let (width, height) = bounded_size(width, height, max_width);
    Ok(ImageRef::new(path.to_string_lossy(), width, height))
}

/// Fully decode an image for display.
pub fn load_image(path: &Path) -> Result<LoadedImage, ImportError> {
    let decoded = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| ImportError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let rgba = decoded.to_rgba8();
    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("photo.jpg")));
        assert!(is_image_file(Path::new("photo.JPEG")));
        assert!(is_image_file(Path::new("photo.png")));
        assert!(is_image_file(Path::new("photo.gif")));
        assert!(!is_image_file(Path::new("photo.bmp")));
        assert!(!is_image_file(Path::new("projects.json")));
    }

    #[test]
    fn test_bounded_size() {
        assert_eq!(bounded_size(1200, 800, 600), (600.0, 400.0));
        assert_eq!(bounded_size(300, 200, 600), (300.0, 200.0));
        assert_eq!(bounded_size(1000, 333, 600), (600.0, 200.0));
    }

    #[test]
    fn test_read_image_ref() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbImage::new(1200, 400).save(&path).unwrap();

        let image = read_image_ref(&path, 600).unwrap();
        assert_eq!(image.width, 600.0);
        assert_eq!(image.height, 200.0);
        assert_eq!(image.src, path.to_string_lossy());
    }

    #[test]
    fn test_read_image_ref_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        assert!(matches!(
            read_image_ref(&path, 600),
            Err(ImportError::Decode { .. })
        ));
        assert!(matches!(
            read_image_ref(&dir.path().join("notes.txt"), 600),
            Err(ImportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        image::RgbImage::new(4, 2).save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (4, 2));
        assert_eq!(loaded.pixels.len(), 4 * 2 * 4);
    }
}
