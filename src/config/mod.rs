// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: loading `settings.toml`
//! and writing back the preferences the editor remembers (the brush size).
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[editor]` - Brush size
//! - `[gateway]` - Remote edit service endpoint, models and timeout
//! - `[export]` - Output file name
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `PHOTOPRO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photopro::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Remember a larger brush
//! config.editor.brush_size = Some(60);
//! if let Some(path) = config::get_config_path_with_override(None) {
//!     config::save_to_path(&config, &path).expect("Failed to save config");
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::editing::BrushSize;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Sections
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "vi").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Editing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditorConfig {
    /// Mask brush width in bitmap pixels.
    #[serde(default = "default_brush_size", skip_serializing_if = "Option::is_none")]
    pub brush_size: Option<u32>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            brush_size: default_brush_size(),
        }
    }
}

impl EditorConfig {
    /// Brush size, clamped to the valid range.
    #[must_use]
    pub fn brush(&self) -> BrushSize {
        BrushSize::new(self.brush_size.unwrap_or(DEFAULT_BRUSH_SIZE))
    }
}

/// Remote edit service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GatewayConfig {
    /// Base URL of the REST API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Model used for edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Model queried by the connection check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_model: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl GatewayConfig {
    /// Endpoint without a trailing slash.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_GATEWAY_ENDPOINT)
            .trim_end_matches('/')
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_GATEWAY_MODEL)
    }

    #[must_use]
    pub fn check_model(&self) -> &str {
        self.check_model
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_CHECK_MODEL)
    }

    /// Timeout, clamped to the valid range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_GATEWAY_TIMEOUT_SECS)
            .clamp(MIN_GATEWAY_TIMEOUT_SECS, MAX_GATEWAY_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExportConfig {
    /// Suggested file name in the save dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl ExportConfig {
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_EXPORT_FILE_NAME)
    }
}

fn default_brush_size() -> Option<u32> {
    Some(DEFAULT_BRUSH_SIZE)
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

// =============================================================================
// Path Functions
// =============================================================================

/// Returns the config file path, honoring an optional directory override.
#[must_use]
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
