// SPDX-License-Identifier: MPL-2.0
//! Container styles for the editor surfaces.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Style for the top toolbar.
pub fn toolbar(_theme: &Theme) -> container::Style {
    let base = theme::toolbar_background();
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the sidebar column.
pub fn sidebar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::toolbar_background())),
        ..Default::default()
    }
}

/// Style for a panel inside the sidebar.
///
/// Derived from the current theme background so panels read as raised
/// surfaces in both light and dark themes.
pub fn settings_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;
    let luminance = base.r + base.g + base.b;
    let shift = if luminance < 1.5 { 0.10 } else { -0.06 };
    let lift = |channel: f32| (channel + shift).clamp(0.0, 1.0);

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            lift(base.r),
            lift(base.g),
            lift(base.b),
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Background behind the image.
pub fn canvas(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::canvas_surface_color())),
        ..Default::default()
    }
}

/// Error banner with an accent border.
pub fn error_banner(_theme: &Theme) -> container::Style {
    let accent = theme::error_color();
    container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..accent })),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}
