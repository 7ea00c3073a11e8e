// SPDX-License-Identifier: MPL-2.0
//! Toast kinds and their visual identity.

use crate::ui::design_tokens::palette;
use crate::ui::icons;
use iced::widget::svg::Handle;
use iced::Color;

/// Kind of a toast, which selects its accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    /// All kinds, in the order the gallery presents them.
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Info,
        ToastKind::Warning,
    ];

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Error => palette::ERROR_500,
            ToastKind::Info => palette::INFO_500,
            ToastKind::Warning => palette::WARNING_500,
        }
    }

    /// Returns the leading icon for this kind.
    #[must_use]
    pub fn icon(self) -> Handle {
        match self {
            ToastKind::Success => icons::check_circle(),
            ToastKind::Error => icons::cross_circle(),
            ToastKind::Info => icons::info_circle(),
            ToastKind::Warning => icons::warning_triangle(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
            ToastKind::Info => "Info",
            ToastKind::Warning => "Warning",
        }
    }
}
