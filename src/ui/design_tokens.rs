// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every panel of the editor window.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border**: border widths
//! - **Radius**: border radii
//!
//! ```
//! use photopro::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD;
//! # let _ = (backdrop, padding);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.06, 0.07, 0.09);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.11, 0.13);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.62);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Semi-transparent panels.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    pub const SIDEBAR_WIDTH: f32 = 300.0;
    pub const TOOLBAR_HEIGHT: f32 = 52.0;

    /// Outline width of the brush cursor ring.
    pub const BRUSH_RING_WIDTH: f32 = 1.5;
}

pub mod typography {
    //! Font size scale.

    /// App name in the toolbar.
    pub const TITLE_MD: f32 = 20.0;

    /// Panel headers.
    pub const TITLE_SM: f32 = 16.0;

    /// Most UI text.
    pub const BODY: f32 = 14.0;

    /// Slider labels, secondary buttons.
    pub const BODY_SM: f32 = 13.0;

    /// Hints and values.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Thin border for separators and banners.
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE < 1.0);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(sizing::SIDEBAR_WIDTH > sizing::TOOLBAR_HEIGHT);
    assert!(radius::LG > radius::MD);
};
