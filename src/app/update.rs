// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Widget messages are forwarded to the [`EditorSession`]; anything that
//! needs I/O (file dialogs, disk, the edit gateway) becomes an `iced::Task`
//! whose result comes back as another [`Message`].
//!
//! While an edit is in flight, everything that would change the image,
//! filters or mode is refused; view controls keep working.
//!
//! [`EditorSession`]: crate::application::editor::EditorSession

use super::{App, Message};
use crate::application::editor::EditKind;
use crate::domain::editing::{BrushSize, EditorMode};
use crate::error::Error;
use crate::media::image::OPEN_EXTENSIONS;
use crate::ui::sidebar::{ConnectionStatus, PanelInputs};
use crate::ui::{self, CanvasMessage, SidebarMessage, ToolbarMessage};
use iced::Task;
use std::path::PathBuf;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(message) if self.session.is_processing() && !idle_safe(&message) => {
                tracing::debug!(?message, "ignored while an edit is in flight");
                Task::none()
            }
            Message::Editor(message) => self.handle_editor(message),
            Message::OpenDialogResult(Some(path)) | Message::FileDropped(path) => {
                if self.session.is_processing() {
                    self.session.report_error(Error::Busy);
                    return Task::none();
                }
                read_image(path)
            }
            Message::OpenDialogResult(None) => Task::none(),
            Message::ImageRead(Ok(bytes)) => {
                if self.session.load_image(&bytes).is_ok() {
                    self.inputs = PanelInputs::default();
                }
                self.refresh_preview();
                Task::none()
            }
            Message::ImageRead(Err(err)) => {
                self.session.report_error(err);
                Task::none()
            }
            Message::Exported(Some(Ok(path))) => {
                tracing::info!(path = %path.display(), "image exported");
                Task::none()
            }
            Message::Exported(Some(Err(err))) => {
                self.session.report_error(err);
                Task::none()
            }
            Message::Exported(None) => Task::none(),
            Message::EditFinished(outcome) => {
                // Failures are recorded on the session and shown in the banner.
                let _ = self.session.complete_edit(outcome);
                self.refresh_preview();
                Task::none()
            }
            Message::ConnectionChecked(result) => {
                self.connection = match result {
                    Ok(()) => ConnectionStatus::Connected,
                    Err(err) => {
                        tracing::warn!(error = %err, "connection check failed");
                        ConnectionStatus::Failed
                    }
                };
                Task::none()
            }
        }
    }

    fn handle_editor(&mut self, message: ui::Message) -> Task<Message> {
        match message {
            ui::Message::Toolbar(message) => self.handle_toolbar(message),
            ui::Message::Sidebar(message) => self.handle_sidebar(message),
            ui::Message::Canvas(message) => {
                self.handle_canvas(message);
                Task::none()
            }
            ui::Message::DismissError => {
                self.session.dismiss_error();
                Task::none()
            }
        }
    }

    fn handle_toolbar(&mut self, message: ToolbarMessage) -> Task<Message> {
        match message {
            ToolbarMessage::Open => open_dialog(),
            ToolbarMessage::Export => self.export(),
            ToolbarMessage::Clear => {
                self.session.clear();
                self.inputs = PanelInputs::default();
                self.refresh_preview();
                Task::none()
            }
            ToolbarMessage::FitView => {
                self.session.fit_view();
                Task::none()
            }
        }
    }

    fn handle_sidebar(&mut self, message: SidebarMessage) -> Task<Message> {
        match message {
            SidebarMessage::SelectMode(mode) => {
                self.session.set_mode(mode);
                self.refresh_preview();
            }
            SidebarMessage::FilterChanged(kind, value) => {
                self.session.set_filter(kind, value);
                self.refresh_image();
            }
            SidebarMessage::ResetFilters => {
                self.session.reset_filters();
                self.refresh_image();
            }
            SidebarMessage::SelectCropRatio(ratio) => {
                if let Err(err) = self.session.preview_crop(ratio) {
                    self.session.report_error(err);
                }
                self.refresh_preview();
            }
            SidebarMessage::CustomRatioWidthChanged(value) => self.inputs.ratio_width = value,
            SidebarMessage::CustomRatioHeightChanged(value) => self.inputs.ratio_height = value,
            SidebarMessage::ApplyCustomRatio => {
                // Invalid input is a no-op.
                if let Some(ratio) = self.inputs.custom_ratio() {
                    if let Err(err) = self.session.preview_crop(ratio) {
                        self.session.report_error(err);
                    }
                    self.refresh_preview();
                }
            }
            SidebarMessage::ApplyCrop => {
                self.session.apply_crop();
                self.refresh_preview();
            }
            SidebarMessage::CancelCrop => {
                self.session.cancel_crop();
                self.refresh_preview();
            }
            SidebarMessage::BrushChanged(value) => self.session.set_brush(BrushSize::new(value)),
            SidebarMessage::BrushReleased => self.persist_brush(),
            SidebarMessage::RemoveObjects => return self.start_edit(EditKind::RemoveObjects),
            SidebarMessage::CancelErase => {
                self.session.set_mode(EditorMode::Adjust);
                self.refresh_preview();
            }
            SidebarMessage::RunPreset(preset) => return self.start_edit(EditKind::Preset(preset)),
            SidebarMessage::Upscale(factor) => return self.start_edit(EditKind::Upscale(factor)),
            SidebarMessage::PromptChanged(value) => self.inputs.prompt = value,
            SidebarMessage::SubmitPrompt => {
                if self.inputs.has_prompt() {
                    let instruction = self.inputs.prompt.trim().to_string();
                    return self.start_edit(EditKind::Instruction(instruction));
                }
            }
            SidebarMessage::CheckConnection => {
                self.connection = ConnectionStatus::Checking;
                return Task::perform(
                    self.session.gateway().check_connection(),
                    Message::ConnectionChecked,
                );
            }
        }
        Task::none()
    }

    /// The stroke in progress is drawn by the canvas as geometry, so the
    /// mask image is only rebuilt once a stroke ends.
    fn handle_canvas(&mut self, message: CanvasMessage) {
        match message {
            CanvasMessage::Resized { size, then } => {
                self.session.set_container(size);
                if let Some(input) = then {
                    self.handle_canvas(*input);
                }
            }
            CanvasMessage::PointerPressed(position) => self.session.pointer_down(position),
            CanvasMessage::PointerMoved(position) => {
                self.session.pointer_moved(position);
            }
            CanvasMessage::PointerReleased => {
                let stroke_ended = self.session.workspace().is_drawing();
                self.session.pointer_up();
                if stroke_ended {
                    self.refresh_mask();
                }
            }
            CanvasMessage::Wheel(delta_y) => {
                self.session.wheel(delta_y);
            }
        }
    }

    /// Takes the processing permit and sends the request in the background.
    fn start_edit(&mut self, kind: EditKind) -> Task<Message> {
        match self.session.begin_edit(kind) {
            Ok(pending) => Task::perform(pending.run(), Message::EditFinished),
            // Already recorded on the session.
            Err(_) => Task::none(),
        }
    }

    fn export(&mut self) -> Task<Message> {
        let png = match self.session.export_png() {
            Ok(png) => png,
            Err(err) => {
                self.session.report_error(err);
                return Task::none();
            }
        };
        let file_name = self.config.export.file_name().to_string();

        Task::perform(
            async move {
                let handle = rfd::AsyncFileDialog::new()
                    .set_file_name(&file_name)
                    .add_filter("PNG", &["png"])
                    .save_file()
                    .await?;
                let path = handle.path().to_path_buf();
                Some(
                    std::fs::write(&path, &png)
                        .map(|()| path)
                        .map_err(Error::from),
                )
            },
            Message::Exported,
        )
    }
}

/// Messages that leave the image, filters and mode untouched.
fn idle_safe(message: &ui::Message) -> bool {
    match message {
        ui::Message::DismissError => true,
        ui::Message::Toolbar(message) => {
            matches!(message, ToolbarMessage::Export | ToolbarMessage::FitView)
        }
        ui::Message::Sidebar(message) => matches!(
            message,
            SidebarMessage::CustomRatioWidthChanged(_)
                | SidebarMessage::CustomRatioHeightChanged(_)
                | SidebarMessage::PromptChanged(_)
                | SidebarMessage::BrushChanged(_)
                | SidebarMessage::BrushReleased
                | SidebarMessage::CheckConnection
        ),
        ui::Message::Canvas(message) => canvas_idle_safe(message),
    }
}

fn canvas_idle_safe(message: &CanvasMessage) -> bool {
    match message {
        CanvasMessage::Resized { then, .. } => then.as_deref().map_or(true, canvas_idle_safe),
        CanvasMessage::Wheel(_) | CanvasMessage::PointerReleased => true,
        CanvasMessage::PointerPressed(_) | CanvasMessage::PointerMoved(_) => false,
    }
}

fn open_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", OPEN_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

/// Reads an image file in the background.
pub(super) fn read_image(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            std::fs::read(&path).map_err(|err| {
                tracing::warn!(path = %path.display(), error = %err, "failed to read image");
                Error::from(err)
            })
        },
        Message::ImageRead,
    )
}
