// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery.

use crate::ui::input;
use crate::ui::sidebar_menu;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{ToastKind, ToastMessage};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(ToastMessage),
    /// Periodic tick driving toast timers.
    Tick(Instant),
    /// Push a toast of the given kind with the configured auto-dismiss.
    ShowToast(ToastKind),
    /// Push a toast that only closes through its close button.
    ShowSticky,
    /// Show or hide the pinned toast through its open flag.
    TogglePinned,
    /// Request every toast to close.
    CloseAll,
    CycleAnchor,
    CycleTheme,
    OpenMenu,
    Menu(sidebar_menu::Message),
    NameInput(input::Message),
    EmailInput(input::Message),
    PasswordInput(input::Message),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Explicit settings file; the platform config directory is used otherwise.
    pub config_path: Option<PathBuf>,
    /// Overrides the configured theme mode.
    pub theme: Option<ThemeMode>,
}
