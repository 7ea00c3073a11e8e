// SPDX-License-Identifier: MPL-2.0
//! Text input with label, helper/error footer, clear button and password reveal.
//!
//! The value is either **controlled** (the parent passes it at view time and
//! stores what [`Event::Changed`] reports) or **uncontrolled** (the component
//! keeps its own buffer in [`State`]). Either way every edit is reported.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, text_input, tooltip, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Tooltip of the clear button.
pub const CLEAR_LABEL: &str = "Clear";
/// Reveal toggle label while the password is masked.
pub const SHOW_PASSWORD_LABEL: &str = "Show password";
/// Reveal toggle label while the password is visible.
pub const HIDE_PASSWORD_LABEL: &str = "Hide password";

/// Kind of value the input holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Number,
    Email,
}

/// Per-instance state of an input.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Buffer used when the input is uncontrolled.
    internal_value: String,
    reveal_password: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn internal_value(&self) -> &str {
        &self.internal_value
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal_password
    }

    /// Value to display: the controlled value when given, else the buffer.
    #[must_use]
    pub fn value<'a>(&'a self, controlled: Option<&'a str>) -> &'a str {
        controlled.unwrap_or(&self.internal_value)
    }

    /// Kind actually used by the field: a revealed password renders as text.
    #[must_use]
    pub fn effective_kind(&self, kind: InputKind) -> InputKind {
        if kind == InputKind::Password && self.reveal_password {
            InputKind::Text
        } else {
            kind
        }
    }

    #[must_use]
    pub fn reveal_label(&self) -> &'static str {
        if self.reveal_password {
            HIDE_PASSWORD_LABEL
        } else {
            SHOW_PASSWORD_LABEL
        }
    }
}

/// Messages emitted by the input widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Edited(String),
    Clear,
    ToggleReveal,
}

/// Events propagated to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The value changed; controlled parents must store it.
    Changed(String),
}

/// Process an input message and return the corresponding event.
///
/// `controlled` tells whether the parent owns the value; the internal buffer
/// is only touched when it does not.
pub fn update(state: &mut State, message: Message, controlled: bool) -> Event {
    match message {
        Message::Edited(value) => {
            if !controlled {
                state.internal_value.clone_from(&value);
            }
            Event::Changed(value)
        }
        Message::Clear => {
            if !controlled {
                state.internal_value.clear();
            }
            Event::Changed(String::new())
        }
        Message::ToggleReveal => {
            state.reveal_password = !state.reveal_password;
            Event::None
        }
    }
}

#[must_use]
pub fn shows_clear_button(clearable: bool, value: &str) -> bool {
    clearable && !value.is_empty()
}

#[must_use]
pub fn shows_reveal_toggle(kind: InputKind) -> bool {
    kind == InputKind::Password
}

/// Text shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footer<'a> {
    Error(&'a str),
    Helper(&'a str),
}

/// An error takes precedence over the helper text.
#[must_use]
pub fn footer<'a>(error: Option<&'a str>, helper: Option<&'a str>) -> Option<Footer<'a>> {
    error
        .map(Footer::Error)
        .or_else(|| helper.map(Footer::Helper))
}

/// Contextual data needed to render an input.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub kind: InputKind,
    /// `Some` for a controlled input.
    pub value: Option<&'a str>,
    pub label: Option<&'a str>,
    pub placeholder: &'a str,
    pub helper: Option<&'a str>,
    pub error: Option<&'a str>,
    pub clearable: bool,
    pub disabled: bool,
}

impl<'a> ViewContext<'a> {
    /// Uncontrolled text input with no decoration.
    #[must_use]
    pub fn new(state: &'a State) -> Self {
        Self {
            state,
            kind: InputKind::Text,
            value: None,
            label: None,
            placeholder: "",
            helper: None,
            error: None,
            clearable: false,
            disabled: false,
        }
    }
}

/// Render the input.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let value = ctx.state.value(ctx.value);
    let masked = ctx.state.effective_kind(ctx.kind) == InputKind::Password;

    let mut field = text_input(ctx.placeholder, value)
        .secure(masked)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(borderless_field);
    if !ctx.disabled {
        field = field.on_input(Message::Edited);
    }

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(field);

    if shows_clear_button(ctx.clearable, value) && !ctx.disabled {
        let clear = button(icons::themed(icons::cross(), sizing::ICON_SM))
            .on_press(Message::Clear)
            .padding(spacing::XXS)
            .style(styles::button::ghost);
        row = row.push(styles::tooltip::styled(
            clear,
            CLEAR_LABEL,
            tooltip::Position::Top,
        ));
    }

    if shows_reveal_toggle(ctx.kind) {
        let icon = if ctx.state.is_revealed() {
            icons::eye_off()
        } else {
            icons::eye()
        };
        let reveal = button(icons::themed(icon, sizing::ICON_MD))
            .on_press(Message::ToggleReveal)
            .padding(spacing::XXS)
            .style(styles::button::ghost);
        row = row.push(styles::tooltip::styled(
            reveal,
            ctx.state.reveal_label(),
            tooltip::Position::Top,
        ));
    }

    let frame = Container::new(row)
        .padding([0.0, spacing::XXS])
        .width(Length::Fill)
        .style(styles::container::input_field(ctx.error.is_some()));

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    if let Some(label) = ctx.label {
        column = column.push(Text::new(label).size(typography::BODY));
    }
    column = column.push(frame);

    match footer(ctx.error, ctx.helper) {
        Some(Footer::Error(message)) => {
            column = column.push(
                Text::new(message)
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }
        Some(Footer::Helper(message)) => {
            column = column.push(
                Text::new(message)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.text),
                    }),
            );
        }
        None => {}
    }

    column.into()
}

/// The surrounding frame draws the border, so the field itself has none.
fn borderless_field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let value = match status {
        text_input::Status::Disabled => palette.background.strong.text,
        _ => palette.background.base.text,
    };

    text_input::Style {
        background: iced::Color::TRANSPARENT.into(),
        border: Border::default(),
        icon: palette.background.weak.text,
        placeholder: palette.background.strong.text,
        value,
        selection: palette.primary.weak.color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontrolled_edit_updates_buffer_and_reports() {
        let mut state = State::new();
        let event = update(&mut state, Message::Edited("abc".into()), false);

        assert_eq!(event, Event::Changed("abc".into()));
        assert_eq!(state.internal_value(), "abc");
        assert_eq!(state.value(None), "abc");
    }

    #[test]
    fn controlled_edit_leaves_buffer_untouched() {
        let mut state = State::new();
        let event = update(&mut state, Message::Edited("abc".into()), true);

        assert_eq!(event, Event::Changed("abc".into()));
        assert_eq!(state.internal_value(), "");
        assert_eq!(state.value(Some("parent")), "parent");
    }

    #[test]
    fn clear_empties_uncontrolled_buffer() {
        let mut state = State::new();
        update(&mut state, Message::Edited("secret".into()), false);

        let event = update(&mut state, Message::Clear, false);
        assert_eq!(event, Event::Changed(String::new()));
        assert!(state.internal_value().is_empty());
    }

    #[test]
    fn clear_on_controlled_input_only_reports() {
        let mut state = State::new();
        update(&mut state, Message::Edited("kept".into()), false);

        let event = update(&mut state, Message::Clear, true);
        assert_eq!(event, Event::Changed(String::new()));
        assert_eq!(state.internal_value(), "kept");
    }

    #[test]
    fn toggle_reveal_flips_visibility() {
        let mut state = State::new();
        assert_eq!(state.effective_kind(InputKind::Password), InputKind::Password);
        assert_eq!(state.reveal_label(), SHOW_PASSWORD_LABEL);

        assert_eq!(update(&mut state, Message::ToggleReveal, false), Event::None);
        assert_eq!(state.effective_kind(InputKind::Password), InputKind::Text);
        assert_eq!(state.reveal_label(), HIDE_PASSWORD_LABEL);

        update(&mut state, Message::ToggleReveal, false);
        assert!(!state.is_revealed());
    }

    #[test]
    fn reveal_does_not_change_other_kinds() {
        let mut state = State::new();
        update(&mut state, Message::ToggleReveal, false);
        assert_eq!(state.effective_kind(InputKind::Email), InputKind::Email);
        assert_eq!(state.effective_kind(InputKind::Number), InputKind::Number);
    }

    #[test]
    fn clear_button_needs_clearable_and_value() {
        assert!(shows_clear_button(true, "x"));
        assert!(!shows_clear_button(true, ""));
        assert!(!shows_clear_button(false, "x"));
    }

    #[test]
    fn reveal_toggle_only_for_password() {
        assert!(shows_reveal_toggle(InputKind::Password));
        assert!(!shows_reveal_toggle(InputKind::Text));
    }

    #[test]
    fn error_overrides_helper() {
        assert_eq!(
            footer(Some("Required"), Some("Your name")),
            Some(Footer::Error("Required"))
        );
        assert_eq!(footer(None, Some("Your name")), Some(Footer::Helper("Your name")));
        assert_eq!(footer(None, None), None);
    }

    #[test]
    fn view_builds_for_every_kind() {
        let state = State::new();
        for kind in [
            InputKind::Text,
            InputKind::Password,
            InputKind::Number,
            InputKind::Email,
        ] {
            let ctx = ViewContext {
                kind,
                label: Some("Label"),
                error: Some("Oops"),
                clearable: true,
                value: Some("value"),
                ..ViewContext::new(&state)
            };
            let _element = view(ctx);
        }
    }
}
