// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Brush Size Bounds
// =============================================================================

/// Brush size bounds in bitmap pixels (5 to 100).
pub mod brush_bounds {
    /// Minimum stroke width.
    pub const MIN: u32 = 5;
    /// Maximum stroke width.
    pub const MAX: u32 = 100;
    /// Default stroke width.
    pub const DEFAULT: u32 = 30;
}

// =============================================================================
// BrushSize
// =============================================================================

/// Mask stroke width, guaranteed to be within valid range (5–100 px).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushSize(u32);

impl BrushSize {
    /// Creates a new brush size, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        Self(pixels.clamp(brush_bounds::MIN, brush_bounds::MAX))
    }

    /// Returns the raw width in pixels.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the width as a stroke width.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_width(self) -> f32 {
        self.0 as f32
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(brush_bounds::DEFAULT)
    }
}

// =============================================================================
// Zoom Bounds
// =============================================================================

/// View scale bounds (0.1x to 10x).
pub mod zoom_bounds {
    /// Minimum scale factor.
    pub const MIN: f32 = 0.1;
    /// Maximum scale factor.
    pub const MAX: f32 = 10.0;
    /// Default scale factor.
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// ZoomScale
// =============================================================================

/// View scale factor, guaranteed to be within valid range (0.1–10).
///
/// Non-finite input collapses to the default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(zoom_bounds::MIN, zoom_bounds::MAX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a rounded percentage (1.0 → 100).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn percent(self) -> i32 {
        (self.0 * 100.0).round() as i32
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT)
    }
}
