// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.
//!
//! The page lists one section per component. Toasts and the sidebar menu are
//! layered on top of the page.

use super::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::input::{self, InputKind};
use crate::ui::sidebar_menu::{self, MenuItem};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{Anchor, ToastKind, ToastStack};
use iced::widget::{button, scrollable, text, tooltip, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub toasts: &'a ToastStack,
    pub now: Instant,
    pub anchor: Anchor,
    pub theme_mode: ThemeMode,
    pub pinned_open: bool,
    pub closed_count: usize,
    pub menu: &'a sidebar_menu::State,
    pub menu_items: &'a [MenuItem],
    pub menu_open: bool,
    pub menu_title: &'a str,
    pub name: &'a str,
    pub name_input: &'a input::State,
    pub email_input: &'a input::State,
    pub email_error: Option<&'a str>,
    pub password_input: &'a input::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header(&ctx))
        .push(toast_section(&ctx))
        .push(input_section(&ctx));

    let toasts = ctx.toasts.view(ctx.now, ctx.anchor).map(Message::Toast);

    let menu = sidebar_menu::view(sidebar_menu::ViewContext {
        state: ctx.menu,
        items: ctx.menu_items,
        is_open: ctx.menu_open,
        title: ctx.menu_title,
    })
    .map(Message::Menu);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable(page).height(Length::Fill))
        .push(toasts)
        .push(menu)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(icons::themed(icons::hamburger(), sizing::ICON_LG))
        .on_press(Message::OpenMenu)
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    let theme_button = button(text(format!("Theme: {}", ctx.theme_mode.label())))
        .on_press(Message::CycleTheme)
        .padding(spacing::XS);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(styles::tooltip::styled(
            menu_button,
            "Open menu",
            tooltip::Position::Bottom,
        ))
        .push(
            Text::new("Iced UI Kit")
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(theme_button)
        .into()
}

fn section<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(content)
        .into()
}

fn toast_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let kinds = ToastKind::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, kind| {
            row.push(
                button(text(kind.label()))
                    .on_press(Message::ShowToast(*kind))
                    .padding(spacing::XS),
            )
        });

    let pinned_label = if ctx.pinned_open {
        "Hide pinned"
    } else {
        "Show pinned"
    };

    let controls = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text("Sticky"))
                .on_press(Message::ShowSticky)
                .padding(spacing::XS),
        )
        .push(
            button(text(pinned_label))
                .on_press(Message::TogglePinned)
                .padding(spacing::XS),
        )
        .push(
            button(text("Close all"))
                .on_press(Message::CloseAll)
                .padding(spacing::XS),
        )
        .push(
            button(text(format!("Anchor: {}", ctx.anchor.label())))
                .on_press(Message::CycleAnchor)
                .padding(spacing::XS),
        );

    let status = Text::new(format!(
        "{} open, {} closed",
        ctx.toasts.rendered_len(),
        ctx.closed_count
    ))
    .size(typography::CAPTION)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    });

    section(
        "Toasts",
        Column::new()
            .spacing(spacing::SM)
            .push(kinds)
            .push(controls)
            .push(status)
            .into(),
    )
}

fn input_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name = input::view(input::ViewContext {
        kind: InputKind::Text,
        value: Some(ctx.name),
        label: Some("Name"),
        placeholder: "Ada Lovelace",
        helper: Some("Controlled: the gallery stores this value"),
        clearable: true,
        ..input::ViewContext::new(ctx.name_input)
    })
    .map(Message::NameInput);

    let email = input::view(input::ViewContext {
        kind: InputKind::Email,
        label: Some("Email"),
        placeholder: "ada@example.com",
        helper: Some("Uncontrolled: the input keeps its own buffer"),
        error: ctx.email_error,
        clearable: true,
        ..input::ViewContext::new(ctx.email_input)
    })
    .map(Message::EmailInput);

    let password = input::view(input::ViewContext {
        kind: InputKind::Password,
        label: Some("Password"),
        placeholder: "Secret",
        ..input::ViewContext::new(ctx.password_input)
    })
    .map(Message::PasswordInput);

    let disabled = input::view(input::ViewContext {
        value: Some("Read only"),
        label: Some("Disabled"),
        disabled: true,
        ..input::ViewContext::new(ctx.name_input)
    })
    .map(Message::NameInput);

    section(
        "Inputs",
        Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(name)
                .push(email)
                .push(password)
                .push(disabled),
        )
        .into(),
    )
}
