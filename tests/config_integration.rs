// SPDX-License-Identifier: MPL-2.0
use iced_uikit::config::{self, Config, DEFAULT_SIDEBAR_TITLE, ENV_CONFIG_DIR};
use iced_uikit::ui::theming::ThemeMode;
use iced_uikit::ui::toast::{Anchor, AutoDismiss};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_round_trip_through_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let mut initial = Config::default();
    initial.general.theme_mode = ThemeMode::Dark;
    initial.toast.duration_ms = Some(5000);
    initial.toast.anchor = Some(Anchor::BottomCenter);
    initial.sidebar.title = Some("Navigation".to_string());

    config::save_to_path(&initial, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded, initial);
    assert_eq!(
        loaded.toast.auto_dismiss(),
        AutoDismiss::After(Duration::from_millis(5000))
    );
    assert_eq!(loaded.sidebar.title(), "Navigation");
}

#[test]
fn missing_sections_use_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[general]\ntheme_mode = \"light\"\n").expect("write");

    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.toast.anchor(), Anchor::TopRight);
    assert_eq!(loaded.toast.auto_dismiss(), AutoDismiss::default());
    assert_eq!(loaded.sidebar.title(), DEFAULT_SIDEBAR_TITLE);
}

#[test]
fn invalid_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[toast]\nanchor = \"middle\"\n").expect("write");

    let (loaded, warning) = config::load_or_default(&path);

    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn negative_duration_disables_auto_dismiss() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[toast]\nduration_ms = -250\n").expect("write");

    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded.toast.auto_dismiss(), AutoDismiss::Never);
}

#[test]
fn override_dir_is_used_for_load_and_save() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.toast.exit_animation_ms = Some(120);

    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");
    assert!(dir.path().join("settings.toml").exists());

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.toast.exit_delay(), Duration::from_millis(120));
}

// Sole user of the environment variable in this test binary.
#[test]
fn config_dir_env_var_drives_load_and_save() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[sidebar]\ntitle = \"From environment\"\n")
        .expect("Failed to write config file");

    std::env::set_var(ENV_CONFIG_DIR, dir.path());

    let (mut loaded, warning) = config::load();
    assert!(warning.is_none());
    assert_eq!(loaded.sidebar.title(), "From environment");

    loaded.general.theme_mode = ThemeMode::Light;
    let saved = config::save(&loaded);

    std::env::remove_var(ENV_CONFIG_DIR);

    saved.expect("Failed to save config");
    let written = config::load_from_path(&path).expect("Failed to reload config");
    assert_eq!(written.general.theme_mode, ThemeMode::Light);
    assert_eq!(written.sidebar.title(), "From environment");
}
