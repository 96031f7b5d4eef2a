// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! 2D affine geometry.
//!
//! This module provides the affine matrix used to place an image inside a
//! canvas, the helpers that build translation and scale transforms, and the
//! containment test that keeps the canvas fully covered by the image.

use crate::models::project::Size;
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A 2D point in canvas or image space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D affine transform stored as the six coefficients of the matrix
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineMatrix {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Non-uniform scale about the origin.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Multiply `self × rhs`; the result applies `rhs` first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }

    /// Map a point through this transform.
    pub fn apply_to_point(&self, point: Point) -> Point {
        Point {
            x: self.a * point.x + self.c * point.y + self.e,
            y: self.b * point.x + self.d * point.y + self.f,
        }
    }
}

impl Mul for AffineMatrix {
    type Output = AffineMatrix;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

/// Compose transforms into a single matrix.
///
/// Transforms are applied right to left: the last one in the slice acts on a
/// point first. An empty slice yields the identity.
pub fn compose(transforms: &[AffineMatrix]) -> AffineMatrix {
    transforms
        .iter()
        .fold(AffineMatrix::IDENTITY, |acc, m| acc.multiply(m))
}

/// Pure translation by (`dx`, `dy`).
pub fn translate_by(dx: f64, dy: f64) -> AffineMatrix {
    AffineMatrix {
        e: dx,
        f: dy,
        ..AffineMatrix::IDENTITY
    }
}

/// Uniform scale by `factor` around the pivot (`pivot_x`, `pivot_y`).
pub fn scale_about(factor: f64, pivot_x: f64, pivot_y: f64) -> AffineMatrix {
    compose(&[
        translate_by(pivot_x, pivot_y),
        AffineMatrix::scale(factor, factor),
        translate_by(-pivot_x, -pivot_y),
    ])
}

/// Check that the transformed image covers the whole canvas.
///
/// Only the top-left and bottom-right image corners are mapped, which is
/// exact for scale + translate transforms. A transform carrying rotation or
/// shear needs a full quadrilateral test instead.
pub fn is_contained(canvas: Size, image: Size, matrix: &AffineMatrix) -> bool {
    let top_left = matrix.apply_to_point(Point::new(0.0, 0.0));
    if top_left.x > 0.0 || top_left.y > 0.0 {
        return false;
    }

    let bottom_right = matrix.apply_to_point(Point::new(image.width, image.height));
    bottom_right.x >= canvas.width && bottom_right.y >= canvas.height
}
