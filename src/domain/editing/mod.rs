// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for image editing operations:
//! - [`FilterSettings`]: The six non-destructive filter controls
//! - [`EditorMode`]: Mutually exclusive editing modes
//! - [`CropRatio`] / [`CropRect`]: Centre crop computation
//! - [`BrushSize`]: Mask stroke width
//! - [`ZoomScale`]: View scale factor

pub mod crop;
pub mod filters;
pub mod mode;
pub mod newtypes;

pub use crop::{center_crop, CropRatio, CropRect, CROP_PRESETS};
pub use filters::{FilterKind, FilterSettings};
pub use mode::EditorMode;
pub use newtypes::{brush_bounds, zoom_bounds, BrushSize, ZoomScale};
