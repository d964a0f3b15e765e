// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Editor**: Brush size bounds
//! - **Gateway**: Remote edit service endpoint, models and timeout
//! - **Export**: Output file naming

use crate::domain::editing::newtypes::brush_bounds;

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// Default mask brush width in bitmap pixels.
pub const DEFAULT_BRUSH_SIZE: u32 = 30;

/// Minimum mask brush width.
pub const MIN_BRUSH_SIZE: u32 = 5;

/// Maximum mask brush width.
pub const MAX_BRUSH_SIZE: u32 = 100;

// ==========================================================================
// Gateway Defaults
// ==========================================================================

/// Base URL of the Generative Language REST API.
pub const DEFAULT_GATEWAY_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Model used for image edits.
pub const DEFAULT_GATEWAY_MODEL: &str = "gemini-2.5-flash-image";

/// Model queried by the connection check.
pub const DEFAULT_CHECK_MODEL: &str = "gemini-2.5-flash";

/// Request timeout in seconds. Image generation is slow.
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 120;

/// Minimum request timeout in seconds.
pub const MIN_GATEWAY_TIMEOUT_SECS: u64 = 5;

/// Maximum request timeout in seconds.
pub const MAX_GATEWAY_TIMEOUT_SECS: u64 = 600;

/// Environment variables searched, in order, for the API key.
pub const API_KEY_ENV_VARS: [&str; 3] = ["PHOTOPRO_API_KEY", "API_KEY", "GEMINI_API_KEY"];

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Suggested file name in the save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "photopro-edited.png";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Brush validation
    assert!(MIN_BRUSH_SIZE > 0);
    assert!(MIN_BRUSH_SIZE <= DEFAULT_BRUSH_SIZE);
    assert!(DEFAULT_BRUSH_SIZE <= MAX_BRUSH_SIZE);
    assert!(MIN_BRUSH_SIZE == brush_bounds::MIN);
    assert!(MAX_BRUSH_SIZE == brush_bounds::MAX);
    assert!(DEFAULT_BRUSH_SIZE == brush_bounds::DEFAULT);

    // Gateway timeout validation
    assert!(MIN_GATEWAY_TIMEOUT_SECS > 0);
    assert!(MIN_GATEWAY_TIMEOUT_SECS <= DEFAULT_GATEWAY_TIMEOUT_SECS);
    assert!(DEFAULT_GATEWAY_TIMEOUT_SECS <= MAX_GATEWAY_TIMEOUT_SECS);
};
