// SPDX-License-Identifier: MPL-2.0
//! Filtered renderer.
//!
//! Turns [`FilterSettings`] into a [`FilterChain`] equivalent to the CSS
//! shorthand `brightness() contrast() saturate() grayscale() sepia() blur()`
//! and renders it onto a copy of a bitmap. Colour functions follow the
//! Filter Effects Level 1 definitions, operating on straight-alpha sRGB
//! components and clamping after every step. Blur is delegated to
//! [`image_rs::imageops::blur`].

use crate::domain::editing::{FilterKind, FilterSettings};
use image_rs::{imageops, RgbaImage};
use std::fmt;

type ColorMatrix = [[f32; 3]; 3];

/// A single filter function of the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOp {
    /// Linear multiplier in percent, 100 is identity.
    Brightness(f32),
    /// Linear contrast around mid grey in percent, 100 is identity.
    Contrast(f32),
    /// Saturation in percent, 100 is identity.
    Saturate(f32),
    /// Desaturation amount in percent.
    Grayscale(f32),
    /// Sepia amount in percent.
    Sepia(f32),
    /// Gaussian standard deviation in pixels.
    Blur(f32),
}

impl FilterOp {
    /// Returns true if the operation leaves every pixel unchanged.
    #[must_use]
    pub fn is_identity(self) -> bool {
        match self {
            FilterOp::Brightness(v) | FilterOp::Contrast(v) | FilterOp::Saturate(v) => {
                (v - 100.0).abs() < f32::EPSILON
            }
            FilterOp::Grayscale(v) | FilterOp::Sepia(v) | FilterOp::Blur(v) => v <= 0.0,
        }
    }

    fn matrix(self) -> Option<ColorMatrix> {
        match self {
            FilterOp::Saturate(s) => Some(saturate_matrix(s / 100.0)),
            FilterOp::Grayscale(g) => Some(grayscale_matrix((g / 100.0).clamp(0.0, 1.0))),
            FilterOp::Sepia(p) => Some(sepia_matrix((p / 100.0).clamp(0.0, 1.0))),
            _ => None,
        }
    }

    fn apply_to(self, rgb: [f32; 3]) -> [f32; 3] {
        let out = match self {
            FilterOp::Brightness(b) => rgb.map(|c| c * b / 100.0),
            FilterOp::Contrast(c) => {
                let c = c / 100.0;
                let intercept = -(0.5 * c) + 0.5;
                rgb.map(|v| v * c + intercept)
            }
            FilterOp::Blur(_) => rgb,
            op => match op.matrix() {
                Some(m) => multiply(&m, rgb),
                None => rgb,
            },
        };
        out.map(|c| c.clamp(0.0, 1.0))
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOp::Brightness(v) => write!(f, "brightness({v}%)"),
            FilterOp::Contrast(v) => write!(f, "contrast({v}%)"),
            FilterOp::Saturate(v) => write!(f, "saturate({v}%)"),
            FilterOp::Grayscale(v) => write!(f, "grayscale({v}%)"),
            FilterOp::Sepia(v) => write!(f, "sepia({v}%)"),
            FilterOp::Blur(v) => write!(f, "blur({v}px)"),
        }
    }
}

/// Ordered filter chain built from the six editor controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChain {
    ops: [FilterOp; 6],
}

impl FilterChain {
    /// Builds the chain in the fixed order brightness, contrast, saturate,
    /// grayscale, sepia, blur.
    #[must_use]
    pub fn from_settings(settings: &FilterSettings) -> Self {
        Self {
            ops: [
                FilterOp::Brightness(settings.get(FilterKind::Brightness)),
                FilterOp::Contrast(settings.get(FilterKind::Contrast)),
                FilterOp::Saturate(settings.get(FilterKind::Saturation)),
                FilterOp::Grayscale(settings.get(FilterKind::Grayscale)),
                FilterOp::Sepia(settings.get(FilterKind::Sepia)),
                FilterOp::Blur(settings.get(FilterKind::Blur)),
            ],
        }
    }

    /// Returns true if rendering the chain is a plain copy.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|op| op.is_identity())
    }

    /// CSS `filter` property value, e.g. `brightness(100%) ... blur(0px)`.
    #[must_use]
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// Renders the chain onto a copy of `source`. The source is never mutated.
    #[must_use]
    pub fn apply(&self, source: &RgbaImage) -> RgbaImage {
        let mut out = source.clone();
        if self.is_identity() {
            return out;
        }

        let color_ops: Vec<FilterOp> = self
            .ops
            .iter()
            .copied()
            .filter(|op| !matches!(op, FilterOp::Blur(_)) && !op.is_identity())
            .collect();

        if !color_ops.is_empty() {
            for pixel in out.pixels_mut() {
                let [r, g, b, a] = pixel.0;
                let mut rgb = [r, g, b].map(|c| f32::from(c) / 255.0);
                for op in &color_ops {
                    rgb = op.apply_to(rgb);
                }
                let [r, g, b] = rgb.map(to_channel);
                pixel.0 = [r, g, b, a];
            }
        }

        match self.ops[5] {
            FilterOp::Blur(sigma) if sigma > 0.0 => imageops::blur(&out, sigma),
            _ => out,
        }
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, op) in self.ops.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Convenience wrapper: render `settings` onto a copy of `source`.
#[must_use]
pub fn render(source: &RgbaImage, settings: &FilterSettings) -> RgbaImage {
    FilterChain::from_settings(settings).apply(source)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn multiply(m: &ColorMatrix, rgb: [f32; 3]) -> [f32; 3] {
    [0, 1, 2].map(|row| m[row][0] * rgb[0] + m[row][1] * rgb[1] + m[row][2] * rgb[2])
}

fn saturate_matrix(s: f32) -> ColorMatrix {
    [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ]
}

fn grayscale_matrix(amount: f32) -> ColorMatrix {
    let s = 1.0 - amount;
    [
        [0.2126 + 0.7874 * s, 0.7152 - 0.7152 * s, 0.0722 - 0.0722 * s],
        [0.2126 - 0.2126 * s, 0.7152 + 0.2848 * s, 0.0722 - 0.0722 * s],
        [0.2126 - 0.2126 * s, 0.7152 - 0.7152 * s, 0.0722 + 0.9278 * s],
    ]
}

fn sepia_matrix(amount: f32) -> ColorMatrix {
    let s = 1.0 - amount;
    [
        [0.393 + 0.607 * s, 0.769 - 0.769 * s, 0.189 - 0.189 * s],
        [0.349 - 0.349 * s, 0.686 + 0.314 * s, 0.168 - 0.168 * s],
        [0.272 - 0.272 * s, 0.534 - 0.534 * s, 0.131 + 0.869 * s],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::solid_image;
    use image_rs::Rgba;

    fn solid(rgba: [u8; 4]) -> RgbaImage {
        solid_image(4, 4, rgba)
    }

    fn with(kind: FilterKind, value: f32) -> FilterSettings {
        FilterSettings::default().with(kind, value)
    }

    #[test]
    fn default_chain_css_text() {
        let chain = FilterChain::from_settings(&FilterSettings::default());
        assert_eq!(
            chain.css(),
            "brightness(100%) contrast(100%) saturate(100%) grayscale(0%) sepia(0%) blur(0px)"
        );
        assert!(chain.is_identity());
    }

    #[test]
    fn css_reflects_values() {
        let settings = FilterSettings::default()
            .with(FilterKind::Brightness, 150.0)
            .with(FilterKind::Blur, 4.0);
        let css = FilterChain::from_settings(&settings).css();
        assert!(css.starts_with("brightness(150%)"));
        assert!(css.ends_with("blur(4px)"));
    }

    #[test]
    fn default_chain_returns_identical_copy() {
        let source = RgbaImage::from_fn(5, 3, |x, y| Rgba([x as u8 * 40, y as u8 * 70, 9, 200]));
        assert_eq!(render(&source, &FilterSettings::default()), source);
    }

    #[test]
    fn brightness_scales_channels() {
        let out = render(&solid([200, 100, 50, 255]), &with(FilterKind::Brightness, 50.0));
        assert_eq!(out.get_pixel(0, 0), &Rgba([100, 50, 25, 255]));
    }

    #[test]
    fn brightness_clamps_at_white() {
        let out = render(&solid([200, 100, 0, 255]), &with(FilterKind::Brightness, 200.0));
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 200, 0, 255]));
    }

    #[test]
    fn zero_contrast_is_mid_grey() {
        let out = render(&solid([10, 240, 77, 255]), &with(FilterKind::Contrast, 0.0));
        assert_eq!(out.get_pixel(0, 0), &Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn full_grayscale_equalises_channels() {
        let out = render(&solid([255, 0, 0, 255]), &with(FilterKind::Grayscale, 100.0));
        let px = out.get_pixel(0, 0);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[0], 54);
    }

    #[test]
    fn zero_saturation_matches_luminance() {
        let out = render(&solid([0, 255, 0, 255]), &with(FilterKind::Saturation, 0.0));
        let px = out.get_pixel(0, 0);
        assert_eq!(px[0], px[2]);
        assert_eq!(px[0], 182);
    }

    #[test]
    fn full_sepia_on_white_is_warm() {
        let out = render(&solid([255, 255, 255, 255]), &with(FilterKind::Sepia, 100.0));
        let px = out.get_pixel(0, 0);
        assert_eq!(px[0], 255);
        assert!(px[1] > px[2]);
    }

    #[test]
    fn alpha_is_preserved() {
        let out = render(&solid([100, 100, 100, 42]), &with(FilterKind::Brightness, 120.0));
        assert_eq!(out.get_pixel(0, 0)[3], 42);
    }

    #[test]
    fn blur_smooths_edges_and_keeps_size() {
        let mut source = RgbaImage::from_pixel(9, 9, Rgba([0, 0, 0, 255]));
        source.put_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let out = render(&source, &with(FilterKind::Blur, 2.0));
        assert_eq!(out.dimensions(), (9, 9));
        assert!(out.get_pixel(4, 4)[0] < 255);
        assert!(out.get_pixel(5, 4)[0] > 0);
    }

    #[test]
    fn source_is_not_mutated() {
        let source = solid([10, 20, 30, 255]);
        let copy = source.clone();
        let _ = render(&source, &with(FilterKind::Sepia, 80.0));
        assert_eq!(source, copy);
    }
}
