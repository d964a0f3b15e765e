// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_400, GRAY_900, GRAY_950, WHITE},
};
use crate::workspace::mask::MASK_COLOR;
use iced::Color;

/// Background color of the toolbar and sidebar.
pub fn toolbar_background() -> Color {
    GRAY_900
}

/// Flat color behind the image on the canvas.
pub fn canvas_surface_color() -> Color {
    GRAY_950
}

/// Standard color for error text and accents.
pub fn error_color() -> Color {
    palette::ERROR_500
}

pub fn success_text_color() -> Color {
    palette::SUCCESS_500
}

pub fn warning_text_color() -> Color {
    palette::WARNING_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    GRAY_400
}

/// Ring drawn under the pointer in Erase mode.
pub fn brush_ring_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..WHITE
    }
}

/// Thin shadow under the brush ring so it stays visible on light images.
pub fn brush_ring_shadow_color() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..BLACK
    }
}

/// Mask stroke while it is being drawn, matching the baked mask colour.
pub fn mask_stroke_color() -> Color {
    let [r, g, b, a] = MASK_COLOR;
    Color::from_rgba8(r, g, b, f32::from(a) / 255.0)
}

/// Veil drawn over the canvas while a gateway request runs.
pub fn processing_veil_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..BLACK
    }
}
