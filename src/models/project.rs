// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project data.
//!
//! A project pairs a source image with a fixed-size target canvas and the
//! affine transform that places the image on that canvas. This is also the
//! exact layout written to and read from exported project files.

use crate::util::geometry::{compose, is_contained, translate_by, AffineMatrix};
use serde::{Deserialize, Serialize};

/// Width and height, shared by canvases and images.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Reference to a source image together with its natural dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub width: f64,
    pub height: f64,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            src: src.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// One editable framing project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub canvas: Size,
    pub image: ImageRef,
    pub matrix: AffineMatrix,
}

impl Project {
    /// Copy of this project with a different placement.
    pub fn with_matrix(&self, matrix: AffineMatrix) -> Self {
        Self {
            matrix,
            ..self.clone()
        }
    }

    /// Whether the image currently covers the whole canvas.
    pub fn is_contained(&self) -> bool {
        is_contained(self.canvas, self.image.size(), &self.matrix)
    }
}

/// Generate a fresh opaque project id (12 hex digits).
pub fn generate_id() -> String {
    let simple = uuid::Uuid::new_v4().simple().to_string();
    simple[..12].to_string()
}

/// Build a new project that cover-fits `image` inside `canvas`.
///
/// The image is scaled uniformly by the larger of the two canvas/image ratios
/// and centred, so the canvas is covered as soon as the project exists.
pub fn map_image_to_project(image: ImageRef, canvas: Size) -> Project {
    let matrix = cover_fit(image.size(), canvas);
    Project {
        id: generate_id(),
        canvas,
        image,
        matrix,
    }
}

fn cover_fit(image: Size, canvas: Size) -> AffineMatrix {
    let mut scale = f64::max(canvas.width / image.width, canvas.height / image.height);
    let mut matrix = cover_fit_with_scale(image, canvas, scale);

    // Rounding can leave the limiting edge one ulp short of the canvas.
    for _ in 0..4 {
        if is_contained(canvas, image, &matrix) {
            break;
        }
        scale *= 1.0 + f64::EPSILON;
        matrix = cover_fit_with_scale(image, canvas, scale);
    }

    matrix
}

fn cover_fit_with_scale(image: Size, canvas: Size, scale: f64) -> AffineMatrix {
    compose(&[
        translate_by(
            (canvas.width - scale * image.width) / 2.0,
            (canvas.height - scale * image.height) / 2.0,
        ),
        AffineMatrix::scale(scale, scale),
        AffineMatrix::IDENTITY,
    ])
}
