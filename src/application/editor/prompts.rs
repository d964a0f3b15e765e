// SPDX-License-Identifier: MPL-2.0
//! Fixed instructions sent to the edit gateway.

/// Preamble prepended to every free-form or preset instruction.
pub const SYSTEM_PROMPT: &str = "You are a digital photo retouching expert (Photoshop expert).\n\
Task: edit the image exactly as requested.\n\
Output: return only the resulting image, no text.";

/// Instruction sent with a masked composite for object removal.
pub const REMOVE_OBJECTS_PROMPT: &str = "Look at the image. There are areas marked with RED color. \
Remove the object covered by the RED color and fill it in seamlessly with the background. \
The second image is the same photo without the markings. \
High quality inpainting.";

/// Wraps a user or preset request in the retouching preamble.
#[must_use]
pub fn instruction_prompt(request: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nRequest: {}", request.trim())
}

/// Upscale factor offered by the AI panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpscaleFactor {
    X2,
    X4,
}

impl UpscaleFactor {
    pub const ALL: [UpscaleFactor; 2] = [UpscaleFactor::X2, UpscaleFactor::X4];

    /// Short label, e.g. `"2x"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UpscaleFactor::X2 => "2x",
            UpscaleFactor::X4 => "4x",
        }
    }

    /// Instruction asking the service to redraw the image at higher fidelity.
    #[must_use]
    pub fn prompt(self) -> String {
        format!(
            "Upscale this image {}. Enhance resolution, sharpen details, reduce noise, \
             and make it look professional high-definition. Maintain the original composition exactly.",
            self.label()
        )
    }
}

/// One-click AI actions: three smart filters and three quick tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiPreset {
    Portrait,
    Landscape,
    Document,
    BlueIdBackground,
    WhiteIdBackground,
    RemoveBackground,
}

impl AiPreset {
    /// Subject-specific enhancements.
    pub const SMART_FILTERS: [AiPreset; 3] =
        [AiPreset::Portrait, AiPreset::Landscape, AiPreset::Document];

    /// Background tools.
    pub const QUICK_TOOLS: [AiPreset; 3] = [
        AiPreset::BlueIdBackground,
        AiPreset::WhiteIdBackground,
        AiPreset::RemoveBackground,
    ];

    /// The request text sent for this preset.
    #[must_use]
    pub fn instruction(self) -> &'static str {
        match self {
            AiPreset::Portrait => {
                "Enhance this portrait. Smooth skin naturally, improve lighting, soft bokeh \
                 background, correct color balance for a professional studio look."
            }
            AiPreset::Landscape => {
                "Enhance this landscape. Boost saturation slightly, increase dynamic range \
                 (HDR effect), sharpen foliage, make the sky pop."
            }
            AiPreset::Document => {
                "Clean up this document. Remove shadows, increase contrast (black text on white \
                 background), straighten text, sharpen edges for printing."
            }
            AiPreset::BlueIdBackground => {
                "Change the background to a solid blue color suitable for ID photos. \
                 Keep the person sharp."
            }
            AiPreset::WhiteIdBackground => {
                "Change the background to a solid white color suitable for ID photos. \
                 Keep the person sharp."
            }
            AiPreset::RemoveBackground => {
                "Remove the background completely, leaving a white background. \
                 Focus on the main subject."
            }
        }
    }

    /// Fluent key of the button label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            AiPreset::Portrait => "ai-preset-portrait",
            AiPreset::Landscape => "ai-preset-landscape",
            AiPreset::Document => "ai-preset-document",
            AiPreset::BlueIdBackground => "ai-preset-blue-id",
            AiPreset::WhiteIdBackground => "ai-preset-white-id",
            AiPreset::RemoveBackground => "ai-preset-remove-background",
        }
    }
}
