// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first source that yields a directory wins:
//!
//! | Source | Set by |
//! |--------|--------|
//! | explicit argument | tests and `*_with_override` callers |
//! | `--config-dir` | [`init_cli_overrides`] at startup |
//! | `PHOTOPRO_CONFIG_DIR` | environment |
//! | `<platform config dir>/PhotoPro` | [`dirs::config_dir`] |

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "PhotoPro";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "PHOTOPRO_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which source a config directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Explicit,
    CommandLine,
    Environment,
    Platform,
}

/// Records the `--config-dir` value. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let dir = config_dir.filter(|d| !d.trim().is_empty()).map(PathBuf::from);
    if CLI_CONFIG_DIR.set(dir).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

/// Resolves the config directory and reports where it came from.
#[must_use]
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<(PathBuf, ConfigDirSource)> {
    let from_cli = || CLI_CONFIG_DIR.get().cloned().flatten();
    let from_env = || {
        std::env::var_os(ENV_CONFIG_DIR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    };

    explicit
        .map(|dir| (dir, ConfigDirSource::Explicit))
        .or_else(|| from_cli().map(|dir| (dir, ConfigDirSource::CommandLine)))
        .or_else(|| from_env().map(|dir| (dir, ConfigDirSource::Environment)))
        .or_else(|| {
            dirs::config_dir().map(|base| (base.join(APP_DIR_NAME), ConfigDirSource::Platform))
        })
}

/// Config directory, or `None` when the platform has none.
#[must_use]
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    let (dir, source) = resolve_config_dir(explicit)?;
    tracing::debug!(dir = %dir.display(), ?source, "config directory resolved");
    Some(dir)
}
