// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget kit's configuration, loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[toast]` - Auto-dismiss duration, exit animation and host anchor
//! - `[sidebar]` - Sidebar menu title
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_UIKIT_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_uikit::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Disable auto-dismiss for all toasts
//! config.toast.duration_ms = Some(0);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{Anchor, AutoDismiss};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedUikit";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_UIKIT_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Auto-dismiss delay in milliseconds. Zero or negative disables it.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,

    #[serde(
        default = "default_exit_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_animation_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            exit_animation_ms: default_exit_animation_ms(),
            anchor: Some(Anchor::default()),
        }
    }
}

impl ToastConfig {
    /// Auto-dismiss policy for new toasts.
    #[must_use]
    pub fn auto_dismiss(&self) -> AutoDismiss {
        match self.duration_ms {
            Some(ms) => AutoDismiss::from_millis(ms),
            None => AutoDismiss::default(),
        }
    }

    /// Exit animation delay, clamped to [`MAX_EXIT_ANIMATION_MS`].
    #[must_use]
    pub fn exit_delay(&self) -> Duration {
        let ms = self
            .exit_animation_ms
            .unwrap_or(DEFAULT_EXIT_ANIMATION_MS)
            .min(MAX_EXIT_ANIMATION_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarConfig {
    #[serde(default = "default_sidebar_title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            title: default_sidebar_title(),
        }
    }
}

impl SidebarConfig {
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_SIDEBAR_TITLE)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub sidebar: SidebarConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<i64> {
    i64::try_from(DEFAULT_TOAST_DURATION_MS).ok()
}

fn default_exit_animation_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_ANIMATION_MS)
}

fn default_sidebar_title() -> Option<String> {
    Some(DEFAULT_SIDEBAR_TITLE.to_string())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring an explicit override first, then
/// [`ENV_CONFIG_DIR`], then the platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable or invalid
/// file yields defaults plus a warning message for the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return load_or_default(&path);
        }
    }
    (Config::default(), None)
}

/// Loads `path`, falling back to defaults with a warning on failure.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
            (
                Config::default(),
                Some(format!("Could not read settings, using defaults ({err})")),
            )
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves into `base_dir`, falling back to the default config directory.
///
/// Fails with [`Error::Io`] when no directory can be resolved.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    save_to_resolved_path(config, get_config_path_with_override(base_dir))
}

fn save_to_resolved_path(config: &Config, path: Option<PathBuf>) -> Result<()> {
    match path {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Io("no config directory available".to_string())),
    }
}

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
