// SPDX-License-Identifier: MPL-2.0
//! Widgets of the kit and their shared styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `State`, a `Message`, an `update` returning an `Event` for the
//! parent, and a `view` built from a `ViewContext`.
//!
//! # Components
//!
//! - [`toast`] - Transient notifications with auto-dismiss and exit animation
//! - [`input`] - Text input with label, footer, clear button and password reveal
//! - [`sidebar_menu`] - Slide-in menu with nested, collapsible items
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Inline SVG icons

pub mod design_tokens;
pub mod icons;
pub mod input;
pub mod sidebar_menu;
pub mod styles;
pub mod theming;
pub mod toast;
