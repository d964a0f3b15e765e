// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by the unit test modules.
//!
//! Float assertions come from the `approx` crate, which handles precision
//! issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use image_rs::{Rgba, RgbaImage};

/// Tolerance for view geometry in screen pixels.
pub const PIXEL_EPSILON: f32 = 1e-3;

/// Uniformly colored test image.
pub fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

/// Image whose red channel encodes the column and green channel the row,
/// so crops can be checked by reading their corner pixels.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
    })
}
