// SPDX-License-Identifier: MPL-2.0
//! Entries of the gallery's sidebar menu.

use crate::ui::icons;
use crate::ui::sidebar_menu::MenuItem;
use crate::ui::toast::ToastKind;

pub const SHOW_TOAST: &str = "show-toast";
pub const APPEARANCE: &str = "appearance";
pub const CYCLE_THEME: &str = "cycle-theme";
pub const CYCLE_ANCHOR: &str = "cycle-anchor";
pub const SAVE_SETTINGS: &str = "save-settings";

/// Menu action resolved from an activated item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowToast(ToastKind),
    CycleTheme,
    CycleAnchor,
    SaveSettings,
}

fn toast_item_id(kind: ToastKind) -> String {
    format!("toast-{}", kind.label().to_lowercase())
}

pub fn items() -> Vec<MenuItem> {
    let toasts = ToastKind::ALL
        .iter()
        .map(|kind| MenuItem::new(toast_item_id(*kind), kind.label()).with_icon(kind.icon()))
        .collect();

    vec![
        MenuItem::new(SHOW_TOAST, "Show toast")
            .with_icon(icons::info_circle())
            .with_children(toasts),
        MenuItem::new(APPEARANCE, "Appearance").with_children(vec![
            MenuItem::new(CYCLE_THEME, "Switch theme"),
            MenuItem::new(CYCLE_ANCHOR, "Move toasts"),
        ]),
        MenuItem::new(SAVE_SETTINGS, "Save settings").with_icon(icons::check_circle()),
    ]
}

/// Maps an activated leaf id to its action.
pub fn action(id: &str) -> Option<Action> {
    match id {
        CYCLE_THEME => Some(Action::CycleTheme),
        CYCLE_ANCHOR => Some(Action::CycleAnchor),
        SAVE_SETTINGS => Some(Action::SaveSettings),
        _ => ToastKind::ALL
            .iter()
            .find(|kind| toast_item_id(**kind) == id)
            .map(|kind| Action::ShowToast(*kind)),
    }
}
