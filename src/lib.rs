// SPDX-License-Identifier: MPL-2.0
//! `iced_uikit` is a small widget kit for the Iced GUI framework.
//!
//! It provides self-contained toast notifications, a text input and a sidebar
//! menu, plus a gallery application showing them together.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
