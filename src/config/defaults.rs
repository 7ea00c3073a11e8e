// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss and exit animation timings
//! - **Tick**: Timer evaluation cadence
//! - **Sidebar**: Menu title and nesting indentation

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss delay for toasts (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Delay between a close trigger and final removal of a toast (in milliseconds).
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 300;

/// Upper bound accepted for the exit animation (in milliseconds).
pub const MAX_EXIT_ANIMATION_MS: u64 = 5000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the time subscription that evaluates pending timers.
///
/// Timers fire on the first tick at or after their deadline, so this is the
/// worst-case lateness of a transition.
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Sidebar Defaults
// ==========================================================================

/// Title shown in the sidebar header when none is configured.
pub const DEFAULT_SIDEBAR_TITLE: &str = "Menu";

/// Left padding added per nesting level of a submenu (in pixels).
pub const SUBMENU_INDENT: f32 = 20.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS > 0);
    assert!(DEFAULT_EXIT_ANIMATION_MS > 0);
    assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_EXIT_ANIMATION_MS);

    // A tick must be able to observe the exit animation at least once.
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < DEFAULT_EXIT_ANIMATION_MS);

    assert!(SUBMENU_INDENT > 0.0);
};
