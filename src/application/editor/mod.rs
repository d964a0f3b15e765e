// SPDX-License-Identifier: MPL-2.0
//! Editor session controller.
//!
//! [`EditorSession`] is the single owner of editing state: the workspace,
//! filter values, the current mode (with crop staging), brush size, the
//! processing gate and the last error. The UI forwards user intents to it
//! and renders from its accessors.
//!
//! Gateway calls are split in two halves so the network round-trip can run
//! as an `iced::Task`:
//!
//! ```ignore
//! let pending = session.begin_edit(EditKind::Upscale(UpscaleFactor::X2))?;
//! let outcome = pending.run().await;
//! session.complete_edit(outcome);
//! ```
//!
//! Only one request can be in flight: [`EditorSession::begin_edit`] takes the
//! sole permit of a semaphore and the permit travels with the request until
//! the outcome is consumed.

pub mod prompts;

pub use prompts::{AiPreset, UpscaleFactor};

use crate::application::port::{EditGateway, EditRequest, GatewayError, InlineImage};
use crate::domain::editing::{
    center_crop, BrushSize, CropRatio, EditorMode, FilterKind, FilterSettings,
};
use crate::error::{Error, Result};
use crate::media::image;
use crate::workspace::{PointerTool, Workspace};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use iced::{Point, Size};
use image_rs::RgbaImage;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// What the gateway is asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    /// Free-form request typed by the user.
    Instruction(String),
    /// One of the panel presets.
    Preset(AiPreset),
    /// Redraw at a higher resolution.
    Upscale(UpscaleFactor),
    /// Inpaint the regions marked on the mask.
    RemoveObjects,
}

impl EditKind {
    /// Instruction text sent along with the image.
    #[must_use]
    pub fn instruction(&self) -> String {
        match self {
            EditKind::Instruction(text) => prompts::instruction_prompt(text),
            EditKind::Preset(preset) => prompts::instruction_prompt(preset.instruction()),
            EditKind::Upscale(factor) => factor.prompt(),
            EditKind::RemoveObjects => prompts::REMOVE_OBJECTS_PROMPT.to_string(),
        }
    }

    /// Whether the payload carries the mask overlay.
    #[must_use]
    pub fn uses_mask(&self) -> bool {
        matches!(self, EditKind::RemoveObjects)
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditKind::Instruction(_) => write!(f, "instruction"),
            EditKind::Preset(preset) => write!(f, "preset {preset:?}"),
            EditKind::Upscale(factor) => write!(f, "upscale {}", factor.label()),
            EditKind::RemoveObjects => write!(f, "object removal"),
        }
    }
}

/// Mode together with the state only that mode owns.
#[derive(Debug, Clone, Default)]
enum ModeState {
    #[default]
    Adjust,
    Crop {
        /// Pre-crop image every preview is computed from.
        staged: Option<RgbaImage>,
        /// Ratio of the preview currently shown.
        ratio: Option<CropRatio>,
    },
    Erase,
    Ai,
}

impl ModeState {
    fn mode(&self) -> EditorMode {
        match self {
            ModeState::Adjust => EditorMode::Adjust,
            ModeState::Crop { .. } => EditorMode::Crop,
            ModeState::Erase => EditorMode::Erase,
            ModeState::Ai => EditorMode::Ai,
        }
    }
}

/// A gateway request that holds the processing permit.
pub struct PendingEdit {
    kind: EditKind,
    request: EditRequest,
    gateway: Arc<dyn EditGateway>,
    permit: OwnedSemaphorePermit,
}

impl fmt::Debug for PendingEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingEdit")
            .field("kind", &self.kind)
            .field("images", &self.request.images().count())
            .finish_non_exhaustive()
    }
}

impl PendingEdit {
    #[must_use]
    pub fn kind(&self) -> &EditKind {
        &self.kind
    }

    #[must_use]
    pub fn request(&self) -> &EditRequest {
        &self.request
    }

    /// Sends the request. The permit moves into the outcome.
    pub async fn run(self) -> EditOutcome {
        let PendingEdit {
            kind,
            request,
            gateway,
            permit,
        } = self;
        let result = gateway.execute(request).await;
        EditOutcome {
            kind,
            result,
            permit: Arc::new(permit),
        }
    }
}

/// Result of a gateway round-trip, still holding the processing permit.
#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub kind: EditKind,
    pub result: std::result::Result<InlineImage, GatewayError>,
    permit: Arc<OwnedSemaphorePermit>,
}

/// Owner of all editing state.
pub struct EditorSession {
    workspace: Workspace,
    filters: FilterSettings,
    mode: ModeState,
    brush: BrushSize,
    gate: Arc<Semaphore>,
    gateway: Arc<dyn EditGateway>,
    last_error: Option<Error>,
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("image", &self.workspace.dimensions())
            .field("filters", &self.filters)
            .field("mode", &self.mode.mode())
            .field("brush", &self.brush)
            .field("processing", &self.is_processing())
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    /// Creates an empty session talking to `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn EditGateway>, brush: BrushSize) -> Self {
        Self {
            workspace: Workspace::default(),
            filters: FilterSettings::default(),
            mode: ModeState::default(),
            brush,
            gate: Arc::new(Semaphore::new(1)),
            gateway,
            last_error: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSettings {
        &self.filters
    }

    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode.mode()
    }

    #[must_use]
    pub fn brush(&self) -> BrushSize {
        self.brush
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.workspace.has_image()
    }

    /// Ratio of the crop preview on screen, if any.
    #[must_use]
    pub fn crop_ratio(&self) -> Option<CropRatio> {
        match &self.mode {
            ModeState::Crop { ratio, .. } => *ratio,
            _ => None,
        }
    }

    /// The pre-crop image retained while in Crop mode.
    #[must_use]
    pub fn staged_original(&self) -> Option<&RgbaImage> {
        match &self.mode {
            ModeState::Crop { staged, .. } => staged.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.gate.available_permits() == 0
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn gateway(&self) -> Arc<dyn EditGateway> {
        Arc::clone(&self.gateway)
    }

    // -------------------------------------------------------------------------
    // Image lifecycle
    // -------------------------------------------------------------------------

    /// Decodes and loads a new image, resetting filters, crop staging, error
    /// and mode. On decode failure the previous state is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] while an edit is in flight and
    /// [`Error::Image`] for undecodable bytes.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<()> {
        if self.is_processing() {
            return Err(self.fail(Error::Busy));
        }
        let decoded = match image::decode(bytes) {
            Ok(decoded) => decoded,
            Err(err) => return Err(self.fail(err)),
        };
        let (width, height) = decoded.dimensions();
        if let Err(err) = self.workspace.set_image(decoded) {
            return Err(self.fail(err));
        }
        self.filters.reset();
        self.mode = ModeState::Adjust;
        self.last_error = None;
        tracing::info!(width, height, "image loaded");
        Ok(())
    }

    /// Returns to the empty state. Refused while an edit is in flight.
    pub fn clear(&mut self) {
        if self.is_processing() {
            let _ = self.fail(Error::Busy);
            return;
        }
        self.workspace.clear();
        self.filters.reset();
        self.mode = ModeState::Adjust;
        self.last_error = None;
        tracing::debug!("session cleared");
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    // -------------------------------------------------------------------------
    // Modes and crop
    // -------------------------------------------------------------------------

    /// Switches mode. Leaving Crop without applying restores the staged
    /// original; leaving Erase clears the mask; entering Crop stages the
    /// current image.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == self.mode() {
            return;
        }
        let previous = std::mem::take(&mut self.mode);
        match previous {
            ModeState::Crop {
                staged: Some(original),
                ..
            } => self.restore(original),
            ModeState::Erase => self.workspace.clear_mask(),
            _ => {}
        }

        self.mode = match mode {
            EditorMode::Adjust => ModeState::Adjust,
            EditorMode::Crop => ModeState::Crop {
                staged: self.workspace.image().cloned(),
                ratio: None,
            },
            EditorMode::Erase => ModeState::Erase,
            EditorMode::Ai => ModeState::Ai,
        };
        tracing::debug!(?mode, "mode changed");
    }

    /// Shows a centre crop at `ratio`, always computed from the staged
    /// original. Enters Crop mode if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImage`] when nothing is loaded and [`Error::Busy`]
    /// while an edit is in flight.
    pub fn preview_crop(&mut self, ratio: CropRatio) -> Result<()> {
        if !self.has_image() {
            return Err(Error::NoImage);
        }
        if self.is_processing() {
            return Err(self.fail(Error::Busy));
        }
        self.set_mode(EditorMode::Crop);

        let ModeState::Crop {
            staged,
            ratio: shown,
        } = &mut self.mode
        else {
            return Ok(());
        };
        let Some(source) = staged.as_ref().or(self.workspace.image()) else {
            return Err(Error::NoImage);
        };
        let rect = center_crop(source.width(), source.height(), ratio);
        let cropped = image::crop(source, &rect);
        *shown = Some(ratio);
        self.workspace.set_image(cropped)?;
        tracing::debug!(%ratio, "crop preview");
        Ok(())
    }

    /// Commits the previewed crop and discards the staged original.
    pub fn apply_crop(&mut self) {
        if let ModeState::Crop { ratio, .. } = &self.mode {
            tracing::info!(ratio = ?ratio.map(|r| r.to_string()), "crop applied");
            self.mode = ModeState::Adjust;
            self.workspace.fit();
        }
    }

    /// Restores the staged original and leaves Crop mode.
    pub fn cancel_crop(&mut self) {
        if !matches!(self.mode, ModeState::Crop { .. }) {
            return;
        }
        if let ModeState::Crop {
            staged: Some(original),
            ..
        } = std::mem::take(&mut self.mode)
        {
            self.restore(original);
        }
        self.workspace.fit();
        tracing::info!("crop cancelled");
    }

    // -------------------------------------------------------------------------
    // Filters and brush
    // -------------------------------------------------------------------------

    pub fn set_filter(&mut self, kind: FilterKind, value: f32) {
        self.filters.set(kind, value);
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    pub fn set_brush(&mut self, brush: BrushSize) {
        self.brush = brush;
    }

    // -------------------------------------------------------------------------
    // Pointer input
    // -------------------------------------------------------------------------

    /// Records the size of the area the image is shown in.
    pub fn set_container(&mut self, size: Size) {
        self.workspace.set_container(size);
    }

    pub fn fit_view(&mut self) {
        self.workspace.fit();
    }

    /// Pointer press: draws in Erase mode, pans otherwise.
    pub fn pointer_down(&mut self, position: Point) {
        let tool = if self.mode().allows_pan() {
            PointerTool::Pan
        } else {
            PointerTool::Brush(self.brush)
        };
        self.workspace.pointer_down(position, tool);
    }

    pub fn pointer_moved(&mut self, position: Point) -> bool {
        self.workspace.pointer_moved(position)
    }

    pub fn pointer_up(&mut self) {
        self.workspace.pointer_up();
    }

    pub fn wheel(&mut self, delta_y: f32) -> bool {
        self.workspace.wheel(delta_y)
    }

    // -------------------------------------------------------------------------
    // Gateway edits
    // -------------------------------------------------------------------------

    /// Validates and prepares a gateway request, taking the processing permit.
    ///
    /// # Errors
    ///
    /// - [`Error::NoImage`] when nothing is loaded
    /// - [`Error::Gateway`] with [`GatewayError::MissingCredential`] when no key is set
    /// - [`Error::Busy`] while another request is in flight
    /// - [`Error::Image`] / [`Error::Mask`] if the payload cannot be exported
    pub fn begin_edit(&mut self, kind: EditKind) -> Result<PendingEdit> {
        if !self.has_image() {
            return Err(self.fail(Error::NoImage));
        }
        if !self.gateway.is_configured() {
            return Err(self.fail(GatewayError::MissingCredential.into()));
        }
        let Ok(permit) = Arc::clone(&self.gate).try_acquire_owned() else {
            return Err(self.fail(Error::Busy));
        };

        let request = match self.build_request(&kind) {
            Ok(request) => request,
            Err(err) => return Err(self.fail(err)),
        };

        self.last_error = None;
        tracing::info!(
            %kind,
            bytes = request.image.data.len(),
            images = request.images().count(),
            "sending edit request"
        );
        Ok(PendingEdit {
            request,
            kind,
            gateway: Arc::clone(&self.gateway),
            permit,
        })
    }

    /// Applies a gateway result. Success replaces the image and resets the
    /// filters (object removal also returns to Adjust); failure records the
    /// error and leaves filters and mode untouched.
    ///
    /// # Errors
    ///
    /// Returns the recorded error on failure.
    pub fn complete_edit(&mut self, outcome: EditOutcome) -> Result<()> {
        let EditOutcome {
            kind,
            result,
            permit,
        } = outcome;
        // Release the gate first.
        drop(permit);

        let decoded = result.map_err(Error::from).and_then(|inline| {
            image::decode_base64(&inline.data)
                .map_err(|e| GatewayError::InvalidPayload(e.to_string()).into())
        });
        let replacement = match decoded {
            Ok(img) => img,
            Err(err) => {
                tracing::warn!(%kind, error = %err, "edit failed");
                return Err(self.fail(err));
            }
        };

        let (width, height) = replacement.dimensions();
        if let ModeState::Crop { staged, ratio } = &mut self.mode {
            *staged = Some(replacement.clone());
            *ratio = None;
        }
        if let Err(err) = self.workspace.set_image(replacement) {
            return Err(self.fail(err));
        }
        self.filters.reset();
        if kind.uses_mask() {
            self.mode = ModeState::Adjust;
        }
        self.last_error = None;
        tracing::info!(%kind, width, height, "edit applied");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Filtered composite of the current image, if one is loaded.
    #[must_use]
    pub fn composite(&self) -> Option<RgbaImage> {
        self.workspace.composite(&self.filters)
    }

    /// Filtered on-screen preview, rendered from the reduced copy.
    #[must_use]
    pub fn preview(&self) -> Option<RgbaImage> {
        self.workspace.preview_composite(&self.filters)
    }

    /// Current composite encoded as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImage`] when nothing is loaded.
    pub fn export_png(&self) -> Result<Vec<u8>> {
        let composite = self.composite().ok_or(Error::NoImage)?;
        image::encode_png(&composite)
    }

    /// Current composite as a `data:image/png;base64,` URI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImage`] when nothing is loaded.
    pub fn export_data_uri(&self) -> Result<String> {
        let composite = self.composite().ok_or(Error::NoImage)?;
        image::encode_data_uri(&composite)
    }

    /// Records an error raised outside the session (file dialogs, disk I/O).
    pub fn report_error(&mut self, error: Error) {
        let _ = self.fail(error);
    }

    fn fail(&mut self, error: Error) -> Error {
        tracing::warn!(error = %error, "editor operation failed");
        self.last_error = Some(error.clone());
        error
    }

    /// Object removal sends the masked composite first and the clean
    /// composite as the reference; other edits send the composite alone.
    fn build_request(&self, kind: &EditKind) -> Result<EditRequest> {
        let encode = |img: &RgbaImage| -> Result<InlineImage> {
            Ok(InlineImage::png(STANDARD.encode(image::encode_png(img)?)))
        };
        let composite = self.workspace.composite(&self.filters).ok_or(Error::NoImage)?;
        if !kind.uses_mask() {
            return Ok(EditRequest::new(encode(&composite)?, kind.instruction()));
        }
        let masked = self.workspace.mask_over(&composite)?;
        Ok(EditRequest::new(encode(&masked)?, kind.instruction()).with_reference(encode(&composite)?))
    }

    fn restore(&mut self, original: RgbaImage) {
        if let Err(err) = self.workspace.set_image(original) {
            let _ = self.fail(err);
        }
    }
}
