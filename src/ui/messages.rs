// SPDX-License-Identifier: MPL-2.0
//! Message types emitted by the editor widgets.

use crate::application::editor::{AiPreset, UpscaleFactor};
use crate::domain::editing::{CropRatio, EditorMode, FilterKind};
use iced::{Point, Size};

/// Toolbar-specific messages.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    Open,
    Export,
    Clear,
    FitView,
}

/// Sidebar control messages.
#[derive(Debug, Clone)]
pub enum SidebarMessage {
    SelectMode(EditorMode),
    FilterChanged(FilterKind, f32),
    ResetFilters,
    SelectCropRatio(CropRatio),
    CustomRatioWidthChanged(String),
    CustomRatioHeightChanged(String),
    ApplyCustomRatio,
    ApplyCrop,
    CancelCrop,
    BrushChanged(u32),
    /// The brush slider was let go.
    BrushReleased,
    RemoveObjects,
    CancelErase,
    RunPreset(AiPreset),
    Upscale(UpscaleFactor),
    PromptChanged(String),
    SubmitPrompt,
    CheckConnection,
}

/// Pointer and layout events from the image canvas, in canvas coordinates.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    /// The canvas changed size. `then` is the input that arrived with it.
    Resized {
        size: Size,
        then: Option<Box<CanvasMessage>>,
    },
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    /// Vertical wheel delta in pixels.
    Wheel(f32),
}

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Sidebar(SidebarMessage),
    Canvas(CanvasMessage),
    DismissError,
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<SidebarMessage> for Message {
    fn from(message: SidebarMessage) -> Self {
        Message::Sidebar(message)
    }
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}
