// SPDX-License-Identifier: MPL-2.0
//! Centralized styles shared by the widgets.

pub mod button;
pub mod container;
pub mod tooltip;
