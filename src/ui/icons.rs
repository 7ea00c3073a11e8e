// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small stroke-based SVG documents embedded as string literals.
//! Handles are created once on first access and cached in a `OnceLock`.
//! Strokes use `currentColor`; use [`themed`] or [`tinted`] to colorize them.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &str = concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                $body,
                "</svg>"
            );
            HANDLE
                .get_or_init(|| Handle::from_memory(DATA.as_bytes()))
                .clone()
        }
    };
}

// =============================================================================
// Feedback Icons
// =============================================================================

define_icon!(
    check_circle,
    r#"<circle cx="12" cy="12" r="10"/><path d="M9 12l2 2 4-4"/>"#,
    "Check mark inside a circle."
);
define_icon!(
    cross_circle,
    r#"<circle cx="12" cy="12" r="10"/><line x1="15" y1="9" x2="9" y2="15"/><line x1="9" y1="9" x2="15" y2="15"/>"#,
    "Diagonal cross inside a circle."
);
define_icon!(
    warning_triangle,
    r#"<path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/>"#,
    "Exclamation mark inside a triangle."
);
define_icon!(
    info_circle,
    r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/>"#,
    "Letter i inside a circle."
);

// =============================================================================
// Control Icons
// =============================================================================

define_icon!(
    cross,
    r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
    "Diagonal cross."
);
define_icon!(
    eye,
    r#"<path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/><circle cx="12" cy="12" r="3"/>"#,
    "Open eye."
);
define_icon!(
    eye_off,
    r#"<path d="M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19m-6.72-1.07a3 3 0 1 1-4.24-4.24"/><line x1="1" y1="1" x2="23" y2="23"/>"#,
    "Struck-through eye."
);
define_icon!(
    chevron_down,
    r#"<polyline points="6 9 12 15 18 9"/>"#,
    "Chevron pointing down."
);
define_icon!(
    chevron_right,
    r#"<polyline points="9 6 15 12 9 18"/>"#,
    "Chevron pointing right."
);
define_icon!(
    hamburger,
    r#"<line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="18" x2="21" y2="18"/>"#,
    "Three horizontal bars."
);

// =============================================================================
// Helpers
// =============================================================================

/// Creates a square SVG widget of the given size.
pub fn sized<'a>(handle: Handle, size: f32) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
}

/// Creates a square SVG widget drawn in a fixed color.
pub fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a> {
    sized(handle, size).style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Creates a square SVG widget drawn in the theme's text color.
pub fn themed<'a>(handle: Handle, size: f32) -> Svg<'a> {
    sized(handle, size).style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}
