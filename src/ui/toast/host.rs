// SPDX-License-Identifier: MPL-2.0
//! Layout container for toasts.
//!
//! The host only positions what it is given: it does not inspect the toasts,
//! cap their count or reorder them. Children are stacked in the order
//! received, spaced evenly and pinned to one corner or edge of the window.

use crate::ui::design_tokens::spacing;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length};
use serde::{Deserialize, Serialize};

/// Where toasts are pinned inside the host area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    TopCenter,
    BottomCenter,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
        Anchor::TopCenter,
        Anchor::BottomCenter,
    ];

    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Anchor::TopLeft | Anchor::BottomLeft => alignment::Horizontal::Left,
            Anchor::TopRight | Anchor::BottomRight => alignment::Horizontal::Right,
            Anchor::TopCenter | Anchor::BottomCenter => alignment::Horizontal::Center,
        }
    }

    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        match self {
            Anchor::TopLeft | Anchor::TopRight | Anchor::TopCenter => alignment::Vertical::Top,
            Anchor::BottomLeft | Anchor::BottomRight | Anchor::BottomCenter => {
                alignment::Vertical::Bottom
            }
        }
    }

    /// Cycles through every anchor, used by the gallery.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|anchor| *anchor == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Anchor::TopLeft => "Top left",
            Anchor::TopRight => "Top right",
            Anchor::BottomLeft => "Bottom left",
            Anchor::BottomRight => "Bottom right",
            Anchor::TopCenter => "Top center",
            Anchor::BottomCenter => "Bottom center",
        }
    }
}

/// Positions `children` at `anchor`, in the order given.
///
/// Meant to be layered over the application content with `stack!`. With no
/// children the host takes no space.
pub fn view<'a, Message: 'a>(
    children: Vec<Element<'a, Message>>,
    anchor: Anchor,
) -> Element<'a, Message> {
    if children.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let column = Column::with_children(children)
        .spacing(spacing::XS)
        .align_x(anchor.horizontal());

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(anchor.horizontal())
        .align_y(anchor.vertical())
        .padding(spacing::MD)
        .into()
}
