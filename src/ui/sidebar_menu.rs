// SPDX-License-Identifier: MPL-2.0
//! Slide-in navigation menu with nested, collapsible items.
//!
//! The open flag belongs to the parent: the menu asks to be closed through
//! [`Event::CloseRequested`] and reports leaf activations through
//! [`Event::Activated`], after which the parent runs the action and closes it.

use crate::config::SUBMENU_INDENT;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Handle;
use iced::widget::{
    button, mouse_area, opaque, scrollable, text, tooltip, Column, Container, Row, Space, Stack,
    Text,
};
use iced::{alignment, Element, Length};
use std::collections::HashSet;

/// Tooltip of the header close button.
pub const CLOSE_LABEL: &str = "Close menu";

/// Entry of the menu; entries with children expand instead of activating.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub icon: Option<Handle>,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Handle) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Depth-first lookup by id.
#[must_use]
pub fn find_item<'a>(items: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
    items.iter().find_map(|item| {
        if item.id == id {
            Some(item)
        } else {
            find_item(&item.children, id)
        }
    })
}

/// State of the menu (tracks which items are expanded).
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<String>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Toggle an item's expanded state.
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_owned());
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

/// Messages emitted by the menu.
#[derive(Debug, Clone)]
pub enum Message {
    ItemPressed(String),
    /// Backdrop click or header close button.
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A leaf item was pressed: run its action and close the menu.
    Activated(String),
    CloseRequested,
}

/// Process a menu message and return the corresponding event.
pub fn update(state: &mut State, items: &[MenuItem], message: Message) -> Event {
    match message {
        Message::ItemPressed(id) => match find_item(items, &id) {
            Some(item) if item.has_children() => {
                state.toggle(&id);
                Event::None
            }
            Some(_) => {
                tracing::debug!(%id, "menu item activated");
                Event::Activated(id)
            }
            None => Event::None,
        },
        Message::Close => Event::CloseRequested,
    }
}

/// Contextual data needed to render the menu.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub items: &'a [MenuItem],
    pub is_open: bool,
    pub title: &'a str,
}

/// Render the menu as an overlay; nothing when closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !ctx.is_open {
        return Space::new().into();
    }

    let close = button(icons::themed(icons::cross(), sizing::ICON_MD))
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    let header = Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(ctx.title)
                    .size(typography::TITLE_SM)
                    .width(Length::Fill),
            )
            .push(styles::tooltip::styled(
                close,
                CLOSE_LABEL,
                tooltip::Position::Bottom,
            )),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::sidebar_header);

    let list = ctx.items.iter().fold(
        Column::new().spacing(spacing::XXS).padding(spacing::XS),
        |column, item| push_item(column, ctx.state, item, 0),
    );

    let panel = Container::new(
        Column::new()
            .push(header)
            .push(scrollable(list).height(Length::Fill)),
    )
    .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
    .height(Length::Fill)
    .style(styles::container::sidebar);

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Close);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(opaque(panel))
        .into()
}

/// Appends `item` and, when expanded, its children one level deeper.
fn push_item<'a>(
    column: Column<'a, Message>,
    state: &State,
    item: &'a MenuItem,
    depth: u16,
) -> Column<'a, Message> {
    let expanded = state.is_expanded(&item.id);
    let column = column.push(item_row(item, expanded, depth));

    if item.has_children() && expanded {
        item.children
            .iter()
            .fold(column, |column, child| push_item(column, state, child, depth + 1))
    } else {
        column
    }
}

fn item_row<'a>(item: &'a MenuItem, expanded: bool, depth: u16) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if depth > 0 {
        row = row.push(Space::new().width(Length::Fixed(indent(depth))));
    }

    if let Some(icon) = &item.icon {
        row = row.push(icons::themed(icon.clone(), sizing::ICON_MD));
    }

    row = row.push(
        text(item.label.as_str())
            .size(typography::BODY)
            .width(Length::Fill),
    );

    if item.has_children() {
        let chevron = if expanded {
            icons::chevron_down()
        } else {
            icons::chevron_right()
        };
        row = row.push(icons::themed(chevron, sizing::ICON_SM));
    }

    button(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::menu_item)
        .on_press(Message::ItemPressed(item.id.clone()))
        .into()
}

/// Left offset of an item at `depth`; top-level items are not indented.
fn indent(depth: u16) -> f32 {
    f32::from(depth) * SUBMENU_INDENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("home", "Home"),
            MenuItem::new("settings", "Settings").with_children(vec![
                MenuItem::new("profile", "Profile"),
                MenuItem::new("advanced", "Advanced")
                    .with_children(vec![MenuItem::new("logs", "Logs")]),
            ]),
        ]
    }

    #[test]
    fn pressing_leaf_activates_it() {
        let items = sample_items();
        let mut state = State::new();
        let event = update(&mut state, &items, Message::ItemPressed("home".into()));
        assert_eq!(event, Event::Activated("home".into()));
    }

    #[test]
    fn pressing_parent_toggles_expansion() {
        let items = sample_items();
        let mut state = State::new();

        let event = update(&mut state, &items, Message::ItemPressed("settings".into()));
        assert_eq!(event, Event::None);
        assert!(state.is_expanded("settings"));

        update(&mut state, &items, Message::ItemPressed("settings".into()));
        assert!(!state.is_expanded("settings"));
    }

    #[test]
    fn nested_leaf_is_found() {
        let items = sample_items();
        let mut state = State::new();
        let event = update(&mut state, &items, Message::ItemPressed("logs".into()));
        assert_eq!(event, Event::Activated("logs".into()));
    }

    #[test]
    fn unknown_item_is_ignored() {
        let items = sample_items();
        let mut state = State::new();
        let event = update(&mut state, &items, Message::ItemPressed("nope".into()));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn close_requests_parent_to_close() {
        let mut state = State::new();
        assert_eq!(update(&mut state, &[], Message::Close), Event::CloseRequested);
    }

    #[test]
    fn collapse_all_clears_expansion() {
        let mut state = State::new();
        state.toggle("a");
        state.toggle("b");
        state.collapse_all();
        assert!(!state.is_expanded("a"));
        assert!(!state.is_expanded("b"));
    }

    #[test]
    fn indent_grows_per_level() {
        assert_eq!(indent(0), 0.0);
        assert_eq!(indent(1), SUBMENU_INDENT);
        assert_eq!(indent(2), SUBMENU_INDENT * 2.0);
    }

    #[test]
    fn has_children_reflects_children() {
        assert!(!MenuItem::new("a", "A").has_children());
        assert!(MenuItem::new("a", "A")
            .with_children(vec![MenuItem::new("b", "B")])
            .has_children());
    }

    #[test]
    fn view_builds_open_and_closed() {
        let items = sample_items();
        let mut state = State::new();
        state.toggle("settings");
        for is_open in [true, false] {
            let _element = view(ViewContext {
                state: &state,
                items: &items,
                is_open,
                title: "Menu",
            });
        }
    }
}
