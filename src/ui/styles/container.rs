// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer behind the sidebar menu.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Sidebar menu surface, derived from the theme background.
pub fn sidebar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Separator under the sidebar header.
pub fn sidebar_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Frame around a text input; red and thicker when the input has an error.
pub fn input_field(has_error: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let (color, width) = if has_error {
            (palette::ERROR_500, border::WIDTH_MD)
        } else {
            (palette.background.strong.color, border::WIDTH_SM)
        };

        container::Style {
            background: Some(palette.background.base.color.into()),
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}
