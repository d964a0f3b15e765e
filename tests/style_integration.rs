// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::{Background, Theme};
    use photopro::ui::design_tokens::{opacity, palette, sizing, spacing};
    use photopro::ui::styles::editor;
    use photopro::ui::theme;

    #[test]
    fn all_editor_styles_compile() {
        for theme in [Theme::Dark, Theme::Light] {
            let _ = editor::toolbar(&theme);
            let _ = editor::sidebar(&theme);
            let _ = editor::canvas(&theme);
            let _ = editor::error_banner(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        assert!(sizing::SIDEBAR_WIDTH > sizing::TOOLBAR_HEIGHT);
    }

    #[test]
    fn settings_panel_lifts_dark_and_sinks_light_backgrounds() {
        let colour = |theme: &Theme| match editor::settings_panel(theme).background {
            Some(Background::Color(color)) => color,
            other => panic!("expected a colour background, got {other:?}"),
        };

        let dark_base = Theme::Dark.extended_palette().background.base.color;
        let light_base = Theme::Light.extended_palette().background.base.color;
        assert!(colour(&Theme::Dark).r > dark_base.r);
        assert!(colour(&Theme::Light).r < light_base.r);
    }

    #[test]
    fn processing_veil_is_translucent() {
        let veil = theme::processing_veil_color();
        assert!(veil.a > 0.0 && veil.a < 1.0);
    }
}
