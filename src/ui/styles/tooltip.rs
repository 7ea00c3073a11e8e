// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips stand in for the accessible labels of icon-only buttons
//! ("Close notification", "Show password", ...).

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Border, Element, Theme};

/// Tooltip surface, inverted against the theme background for contrast.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let inverted = palette.background.base.text;
    let text = palette.background.base.color;

    container::Style {
        background: Some(inverted.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` in a styled tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}
