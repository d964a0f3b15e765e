// SPDX-License-Identifier: MPL-2.0
//! Editing modes.

/// Mutually exclusive editing mode.
///
/// The mode decides which side panel is shown and how pointer input on the
/// canvas is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum EditorMode {
    #[default]
    Adjust,
    Crop,
    Erase,
    Ai,
}

impl EditorMode {
    /// Modes in navigation order.
    pub const ALL: [EditorMode; 4] = [
        EditorMode::Adjust,
        EditorMode::Crop,
        EditorMode::Erase,
        EditorMode::Ai,
    ];

    /// Whether pointer drags pan the view. In Erase mode they draw the mask.
    #[must_use]
    pub fn allows_pan(self) -> bool {
        !self.draws_mask()
    }

    /// Whether pointer drags draw on the mask layer.
    #[must_use]
    pub fn draws_mask(self) -> bool {
        matches!(self, EditorMode::Erase)
    }

    /// Fluent key of the navigation label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            EditorMode::Adjust => "mode-adjust",
            EditorMode::Crop => "mode-crop",
            EditorMode::Erase => "mode-erase",
            EditorMode::Ai => "mode-ai",
        }
    }
}
