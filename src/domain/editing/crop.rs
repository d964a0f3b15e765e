// SPDX-License-Identifier: MPL-2.0
//! Centre crop computation.
//!
//! A crop is always the largest rectangle of the requested aspect ratio that
//! fits inside the source, centred along the axis that gets trimmed.

use std::fmt;

/// Target aspect ratio expressed as `width:height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRatio {
    width: f64,
    height: f64,
}

/// Built-in ratios offered by the crop panel.
pub const CROP_PRESETS: [CropRatio; 6] = [
    CropRatio { width: 1.0, height: 1.0 },
    CropRatio { width: 3.0, height: 4.0 },
    CropRatio { width: 4.0, height: 6.0 },
    CropRatio { width: 16.0, height: 9.0 },
    CropRatio { width: 9.0, height: 16.0 },
    CropRatio { width: 2.0, height: 3.0 },
];

impl CropRatio {
    /// Creates a ratio. Both sides must be finite and strictly positive.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Width side of the ratio.
    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    /// Height side of the ratio.
    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }

    /// Width divided by height.
    #[must_use]
    pub fn value(self) -> f64 {
        self.width / self.height
    }

    /// Fluent key describing the preset's use, if it is a built-in one.
    #[must_use]
    pub fn preset_hint_key(self) -> Option<&'static str> {
        let index = CROP_PRESETS.iter().position(|p| *p == self)?;
        Some(match index {
            0 => "crop-hint-square",
            1 => "crop-hint-id-photo",
            2 => "crop-hint-print",
            3 => "crop-hint-widescreen",
            4 => "crop-hint-story",
            _ => "crop-hint-classic",
        })
    }
}

impl fmt::Display for CropRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Crop rectangle in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    /// Integer bounds `(x, y, width, height)` clamped to a source of the given size.
    ///
    /// Coordinates are rounded; the result is never empty.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn pixel_bounds(&self, source_width: u32, source_height: u32) -> (u32, u32, u32, u32) {
        let max_x = source_width.saturating_sub(1);
        let max_y = source_height.saturating_sub(1);
        let x = (self.x.round().max(0.0) as u32).min(max_x);
        let y = (self.y.round().max(0.0) as u32).min(max_y);
        let width = (self.width.round().max(1.0) as u32).min(source_width - x).max(1);
        let height = (self.height.round().max(1.0) as u32).min(source_height - y).max(1);
        (x, y, width, height)
    }
}

/// Largest centred rectangle of `ratio` that fits in a `source_width` x `source_height` image.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn center_crop(source_width: u32, source_height: u32, ratio: CropRatio) -> CropRect {
    let src_w = source_width as f64;
    let src_h = source_height as f64;
    let target = ratio.value();

    if src_w / src_h > target {
        let width = src_h * target;
        CropRect {
            x: (src_w - width) / 2.0,
            y: 0.0,
            width,
            height: src_h,
        }
    } else {
        let height = src_w / target;
        CropRect {
            x: 0.0,
            y: (src_h - height) / 2.0,
            width: src_w,
            height,
        }
    }
}
