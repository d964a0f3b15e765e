// SPDX-License-Identifier: MPL-2.0
//! Filter settings: six independent controls applied at render time.
//!
//! Settings are pure configuration. They never touch pixels themselves; the
//! renderer in `media::filter` turns them into a filter chain.

/// One of the six filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Brightness,
    Contrast,
    Saturation,
    Grayscale,
    Sepia,
    Blur,
}

impl FilterKind {
    /// All controls in chain order.
    pub const ALL: [FilterKind; 6] = [
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Saturation,
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::Blur,
    ];

    /// Inclusive `(min, max)` range of the control.
    #[must_use]
    pub fn range(self) -> (f32, f32) {
        match self {
            FilterKind::Brightness | FilterKind::Contrast | FilterKind::Saturation => (0.0, 200.0),
            FilterKind::Grayscale | FilterKind::Sepia => (0.0, 100.0),
            FilterKind::Blur => (0.0, 20.0),
        }
    }

    /// Neutral value of the control.
    #[must_use]
    pub fn default_value(self) -> f32 {
        match self {
            FilterKind::Brightness | FilterKind::Contrast | FilterKind::Saturation => 100.0,
            FilterKind::Grayscale | FilterKind::Sepia | FilterKind::Blur => 0.0,
        }
    }

    /// Display unit.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            FilterKind::Blur => "px",
            _ => "%",
        }
    }

    /// Fluent key of the control label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FilterKind::Brightness => "filter-brightness",
            FilterKind::Contrast => "filter-contrast",
            FilterKind::Saturation => "filter-saturation",
            FilterKind::Grayscale => "filter-grayscale",
            FilterKind::Sepia => "filter-sepia",
            FilterKind::Blur => "filter-blur",
        }
    }

    fn clamp(self, value: f32) -> f32 {
        let (min, max) = self.range();
        if value.is_nan() {
            return self.default_value();
        }
        value.clamp(min, max)
    }
}

/// Current values of the six controls.
///
/// Every value stays inside its [`FilterKind::range`]; setters clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSettings {
    brightness: f32,
    contrast: f32,
    saturation: f32,
    grayscale: f32,
    sepia: f32,
    blur: f32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            brightness: FilterKind::Brightness.default_value(),
            contrast: FilterKind::Contrast.default_value(),
            saturation: FilterKind::Saturation.default_value(),
            grayscale: FilterKind::Grayscale.default_value(),
            sepia: FilterKind::Sepia.default_value(),
            blur: FilterKind::Blur.default_value(),
        }
    }
}

impl FilterSettings {
    /// Returns the value of one control.
    #[must_use]
    pub fn get(&self, kind: FilterKind) -> f32 {
        match kind {
            FilterKind::Brightness => self.brightness,
            FilterKind::Contrast => self.contrast,
            FilterKind::Saturation => self.saturation,
            FilterKind::Grayscale => self.grayscale,
            FilterKind::Sepia => self.sepia,
            FilterKind::Blur => self.blur,
        }
    }

    /// Sets one control, clamping to its range.
    pub fn set(&mut self, kind: FilterKind, value: f32) {
        let value = kind.clamp(value);
        match kind {
            FilterKind::Brightness => self.brightness = value,
            FilterKind::Contrast => self.contrast = value,
            FilterKind::Saturation => self.saturation = value,
            FilterKind::Grayscale => self.grayscale = value,
            FilterKind::Sepia => self.sepia = value,
            FilterKind::Blur => self.blur = value,
        }
    }

    /// Builder-style variant of [`FilterSettings::set`].
    #[must_use]
    pub fn with(mut self, kind: FilterKind, value: f32) -> Self {
        self.set(kind, value);
        self
    }

    /// Restores every control to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if every control is at its neutral value.
    #[must_use]
    pub fn is_default(&self) -> bool {
        FilterKind::ALL
            .iter()
            .all(|kind| (self.get(*kind) - kind.default_value()).abs() < f32::EPSILON)
    }

    /// Values in chain order: brightness, contrast, saturation, grayscale, sepia, blur.
    #[must_use]
    pub fn as_tuple(&self) -> (f32, f32, f32, f32, f32, f32) {
        (
            self.brightness,
            self.contrast,
            self.saturation,
            self.grayscale,
            self.sepia,
            self.blur,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_neutral_tuple() {
        let settings = FilterSettings::default();
        assert_eq!(settings.as_tuple(), (100.0, 100.0, 100.0, 0.0, 0.0, 0.0));
        assert!(settings.is_default());
    }

    #[test]
    fn reset_always_returns_to_defaults() {
        let mut settings = FilterSettings::default()
            .with(FilterKind::Brightness, 150.0)
            .with(FilterKind::Sepia, 40.0)
            .with(FilterKind::Blur, 3.0);
        assert!(!settings.is_default());

        settings.reset();
        assert_eq!(settings.as_tuple(), (100.0, 100.0, 100.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn setters_clamp_to_range() {
        let mut settings = FilterSettings::default();
        settings.set(FilterKind::Contrast, 500.0);
        settings.set(FilterKind::Grayscale, -5.0);
        settings.set(FilterKind::Blur, 99.0);

        assert_eq!(settings.get(FilterKind::Contrast), 200.0);
        assert_eq!(settings.get(FilterKind::Grayscale), 0.0);
        assert_eq!(settings.get(FilterKind::Blur), 20.0);
    }

    #[test]
    fn nan_falls_back_to_default() {
        let settings = FilterSettings::default().with(FilterKind::Saturation, f32::NAN);
        assert_eq!(settings.get(FilterKind::Saturation), 100.0);
    }

    #[test]
    fn controls_are_independent() {
        let settings = FilterSettings::default().with(FilterKind::Sepia, 70.0);
        for kind in FilterKind::ALL {
            if kind != FilterKind::Sepia {
                assert_eq!(settings.get(kind), kind.default_value());
            }
        }
    }

    #[test]
    fn units_and_ranges() {
        assert_eq!(FilterKind::Blur.unit(), "px");
        assert_eq!(FilterKind::Brightness.unit(), "%");
        assert_eq!(FilterKind::Sepia.range(), (0.0, 100.0));
        assert_eq!(FilterKind::Saturation.range(), (0.0, 200.0));
    }
}
