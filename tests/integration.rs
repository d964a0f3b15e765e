// SPDX-License-Identifier: MPL-2.0
use photopro::config::{self, Config, GeneralConfig};
use photopro::i18n::I18n;
use tempfile::tempdir;

fn save_language(path: &std::path::Path, language: &str) -> Config {
    let config = Config {
        general: GeneralConfig {
            language: Some(language.to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&config, path).expect("Failed to write config file");
    config::load_from_path(path).expect("Failed to load config from path")
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = save_language(&config_path, "en-US");
    let i18n_en = I18n::new(None, &english);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("toolbar-open"), "Open");

    let vietnamese = save_language(&config_path, "vi");
    let i18n_vi = I18n::new(None, &vietnamese);
    assert_eq!(i18n_vi.current_locale().to_string(), "vi");
    assert_eq!(i18n_vi.tr("toolbar-open"), "Mở");
}

#[test]
fn test_cli_language_overrides_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = save_language(&dir.path().join("settings.toml"), "vi");

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_missing_key_is_flagged() {
    let i18n = I18n::new(Some("vi".to_string()), &Config::default());
    assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
}

#[test]
fn test_malformed_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "general = [").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    let key = warning.expect("warning key");
    assert_eq!(
        i18n.tr(&key),
        "Settings could not be loaded, defaults are in use."
    );
}
