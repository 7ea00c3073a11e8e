// SPDX-License-Identifier: MPL-2.0
//! Toast card rendering.
//!
//! Toasts appear as small cards with a kind-colored border, a leading icon,
//! the message and an optional close button. While closing, the card fades
//! out following the exit animation progress.

use super::lifecycle::ToastLifecycle;
use super::stack::ToastId;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Tooltip of the close button.
pub const CLOSE_LABEL: &str = "Close notification";

/// Renders a single toast.
///
/// `on_close` builds the message emitted when the close button is pressed;
/// the button is only present while [`ToastLifecycle::shows_close_button`].
pub fn toast<'a, M>(
    id: ToastId,
    lifecycle: &'a ToastLifecycle,
    now: Instant,
    on_close: impl Fn(ToastId) -> M,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let descriptor = lifecycle.descriptor();
    let kind = descriptor.toast_kind();
    let alpha = fade_alpha(lifecycle.exit_progress(now));
    let accent = with_alpha(kind.color(), alpha);

    let icon = icons::tinted(kind.icon(), sizing::ICON_LG, accent);

    let message = Text::new(descriptor.message())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(with_alpha(theme.palette().text, alpha)),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if lifecycle.shows_close_button() {
        let close = button(icons::themed(icons::cross(), sizing::ICON_SM))
            .on_press(on_close(id))
            .padding(spacing::XXS)
            .style(styles::button::ghost);
        content = content.push(styles::tooltip::styled(
            close,
            CLOSE_LABEL,
            tooltip::Position::Left,
        ));
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent, alpha))
        .into()
}

/// Opacity of the card for a given exit progress.
fn fade_alpha(exit_progress: f32) -> f32 {
    (1.0 - exit_progress).clamp(0.0, 1.0)
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card.
fn card_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let card_shadow = iced::Shadow {
        color: with_alpha(shadow::MD.color, alpha * 0.3),
        ..shadow::MD
    };

    container::Style {
        background: Some(iced::Background::Color(with_alpha(bg_color, alpha))),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: card_shadow,
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn card_style_uses_accent_color() {
        let theme = Theme::Dark;
        let style = card_style(&theme, palette::SUCCESS_500, 1.0);

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn fade_alpha_inverts_progress() {
        assert_eq!(fade_alpha(0.0), 1.0);
        assert_eq!(fade_alpha(1.0), 0.0);
        assert!((fade_alpha(0.25) - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn with_alpha_scales_existing_alpha() {
        let half = Color {
            a: 0.5,
            ..palette::BLACK
        };
        assert!((with_alpha(half, 0.5).a - 0.25).abs() < f32::EPSILON);
    }
}
