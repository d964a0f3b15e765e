// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the editor session, the
//! localization bundle and the persisted configuration.
//!
//! The `App` owns the [`EditorSession`] and the few pieces of view-only
//! state (text inputs, connection status, cached image handles). Message
//! handling lives in `update`, event routing in `subscription`.

mod message;
pub mod paths;
mod subscription;
mod update;

pub use message::{Flags, Message};

use crate::application::editor::EditorSession;
use crate::application::port::{EditGateway, EditRequest, GatewayError, InlineImage};
use crate::config::{self, Config};
use crate::domain::editing::EditorMode;
use crate::error::Error;
use crate::i18n::I18n;
use crate::infrastructure::GeminiGateway;
use crate::ui::{self, sidebar::ConnectionStatus, sidebar::PanelInputs};
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use image_rs::RgbaImage;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Where settings are written back; `None` disables saving.
    config_path: Option<PathBuf>,
    session: EditorSession,
    inputs: PanelInputs,
    connection: ConnectionStatus,
    /// Filtered composite, rebuilt when the image or filters change.
    image_handle: Option<Handle>,
    /// Mask overlay, only present in Erase mode with strokes.
    mask_handle: Option<Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("connection", &self.connection)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are consumed on the
    // first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and locale, connects the gateway and optionally starts
    /// reading the image passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        // A file that failed to parse is left as the user wrote it.
        let config_path = if config_warning.is_some() {
            None
        } else {
            config::get_config_path_with_override(None)
        };

        let (gateway, gateway_error) = build_gateway(&config);
        let mut session = EditorSession::new(gateway, config.editor.brush());
        if let Some(err) = gateway_error {
            session.report_error(err);
        }
        if let Some(key) = config_warning {
            session.report_error(Error::Config(i18n.tr(&key)));
        }

        let app = App {
            i18n,
            config,
            config_path,
            session,
            inputs: PanelInputs::default(),
            connection: ConnectionStatus::default(),
            image_handle: None,
            mask_handle: None,
        };

        let task = match flags.file_path {
            Some(path) => update::read_image(PathBuf::from(path)),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn view(&self) -> Element<'_, Message> {
        ui::view(
            ui::EditorView {
                session: &self.session,
                inputs: &self.inputs,
                connection: self.connection,
                image: self.image_handle.as_ref(),
                mask: self.mask_handle.as_ref(),
            },
            ui::ViewContext { i18n: &self.i18n },
        )
        .map(Message::Editor)
    }

    fn refresh_preview(&mut self) {
        self.refresh_image();
        self.refresh_mask();
    }

    fn refresh_image(&mut self) {
        self.image_handle = self.session.preview().map(to_handle);
    }

    fn refresh_mask(&mut self) {
        self.mask_handle = if self.session.mode() == EditorMode::Erase {
            self.session
                .workspace()
                .mask()
                .filter(|mask| !mask.is_empty())
                .map(|mask| to_handle(mask.to_rgba()))
        } else {
            None
        };
    }

    /// Writes the current brush size to `settings.toml`.
    fn persist_brush(&mut self) {
        let size = self.session.brush().value();
        if self.config.editor.brush_size == Some(size) {
            return;
        }
        self.config.editor.brush_size = Some(size);
        let Some(path) = &self.config_path else {
            return;
        };
        match config::save_to_path(&self.config, path) {
            Ok(()) => tracing::debug!(size, path = %path.display(), "brush size saved"),
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "failed to save settings"),
        }
    }
}

fn to_handle(image: RgbaImage) -> Handle {
    let (width, height) = image.dimensions();
    Handle::from_rgba(width, height, image.into_raw())
}

/// Gateway from config and environment. If the HTTP client cannot be built
/// the session gets a gateway that reports itself unconfigured.
fn build_gateway(config: &Config) -> (Arc<dyn EditGateway>, Option<Error>) {
    match GeminiGateway::from_env(&config.gateway) {
        Ok(gateway) => {
            if !gateway.is_configured() {
                tracing::warn!(
                    vars = ?config::API_KEY_ENV_VARS,
                    "no API key found, AI edits are disabled"
                );
            }
            (Arc::new(gateway), None)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to initialise the edit gateway");
            (Arc::new(Unavailable), Some(err.into()))
        }
    }
}

struct Unavailable;

impl EditGateway for Unavailable {
    fn is_configured(&self) -> bool {
        false
    }

    fn execute(&self, _request: EditRequest) -> BoxFuture<'static, Result<InlineImage, GatewayError>> {
        future::ready(Err(GatewayError::MissingCredential)).boxed()
    }

    fn check_connection(&self) -> BoxFuture<'static, Result<(), GatewayError>> {
        future::ready(Err(GatewayError::MissingCredential)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::editor::{AiPreset, EditKind};
    use crate::domain::editing::{BrushSize, FilterKind};
    use crate::media::image::encode_png;
    use crate::test_utils::solid_image;
    use crate::ui::{CanvasMessage, SidebarMessage, ToolbarMessage};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use iced::{Point, Size};
    use tempfile::tempdir;

    /// Gateway that answers every edit with the same image.
    struct Replying(InlineImage);

    impl EditGateway for Replying {
        fn is_configured(&self) -> bool {
            true
        }

        fn execute(&self, _request: EditRequest) -> BoxFuture<'static, Result<InlineImage, GatewayError>> {
            future::ready(Ok(self.0.clone())).boxed()
        }

        fn check_connection(&self) -> BoxFuture<'static, Result<(), GatewayError>> {
            future::ready(Ok(())).boxed()
        }
    }

    fn test_app() -> App {
        test_app_with(Arc::new(Unavailable))
    }

    fn test_app_with(gateway: Arc<dyn EditGateway>) -> App {
        App {
            i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
            config: Config::default(),
            config_path: None,
            session: EditorSession::new(gateway, BrushSize::default()),
            inputs: PanelInputs::default(),
            connection: ConnectionStatus::default(),
            image_handle: None,
            mask_handle: None,
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        encode_png(&solid_image(width, height, [40, 80, 120, 255])).expect("encode")
    }

    fn send(app: &mut App, message: impl Into<ui::Message>) {
        let _ = app.update(Message::Editor(message.into()));
    }

    #[test]
    fn title_is_localized() {
        assert_eq!(test_app().title(), "PhotoPro");
    }

    #[test]
    fn reading_an_image_builds_the_preview() {
        let mut app = test_app();
        let _ = app.update(Message::ImageRead(Ok(png_bytes(120, 80))));
        assert!(app.session.has_image());
        assert!(app.image_handle.is_some());
        assert!(app.mask_handle.is_none());
    }

    #[test]
    fn unreadable_file_is_reported() {
        let mut app = test_app();
        let _ = app.update(Message::ImageRead(Err(Error::Io("denied".into()))));
        assert!(matches!(app.session.last_error(), Some(Error::Io(_))));
        assert!(app.image_handle.is_none());
    }

    #[test]
    fn mask_preview_follows_erase_mode() {
        let mut app = test_app();
        let _ = app.update(Message::ImageRead(Ok(png_bytes(200, 100))));
        send(&mut app, SidebarMessage::SelectMode(EditorMode::Erase));

        let center = Point::new(512.0, 384.0);
        send(&mut app, CanvasMessage::PointerPressed(center));
        send(&mut app, CanvasMessage::PointerMoved(Point::new(540.0, 390.0)));
        // Drawn as canvas geometry until the stroke ends.
        assert!(app.mask_handle.is_none());
        assert!(app.session.workspace().stroke_preview().is_some());

        send(&mut app, CanvasMessage::PointerReleased);
        assert!(app.mask_handle.is_some());
        assert!(app.session.workspace().stroke_preview().is_none());

        send(&mut app, SidebarMessage::CancelErase);
        assert_eq!(app.session.mode(), EditorMode::Adjust);
        assert!(app.mask_handle.is_none());
        assert!(app.session.workspace().mask().is_some_and(|m| m.is_empty()));
    }

    #[test]
    fn invalid_custom_ratio_is_ignored() {
        let mut app = test_app();
        let _ = app.update(Message::ImageRead(Ok(png_bytes(160, 90))));
        send(&mut app, SidebarMessage::SelectMode(EditorMode::Crop));
        send(&mut app, SidebarMessage::CustomRatioWidthChanged("4".into()));
        send(&mut app, SidebarMessage::CustomRatioHeightChanged("zero".into()));
        send(&mut app, SidebarMessage::ApplyCustomRatio);
        assert_eq!(app.session.workspace().dimensions(), Some((160, 90)));
        assert!(app.session.crop_ratio().is_none());

        send(&mut app, SidebarMessage::CustomRatioHeightChanged("4".into()));
        send(&mut app, SidebarMessage::ApplyCustomRatio);
        assert_eq!(app.session.workspace().dimensions(), Some((90, 90)));
    }

    #[test]
    fn ai_actions_without_key_report_missing_credential() {
        let mut app = test_app();
        let _ = app.update(Message::ImageRead(Ok(png_bytes(64, 64))));
        send(&mut app, SidebarMessage::PromptChanged("brighter sky".into()));
        send(&mut app, SidebarMessage::SubmitPrompt);
        assert!(matches!(
            app.session.last_error(),
            Some(Error::Gateway(GatewayError::MissingCredential))
        ));
        assert!(!app.session.is_processing());
    }

    #[tokio::test]
    async fn loads_are_refused_while_an_edit_is_in_flight() {
        let reply = InlineImage::png(STANDARD.encode(png_bytes(10, 10)));
        let mut app = test_app_with(Arc::new(Replying(reply)));
        let _ = app.update(Message::ImageRead(Ok(png_bytes(64, 64))));
        let pending = app
            .session
            .begin_edit(EditKind::Preset(AiPreset::Portrait))
            .expect("edit");

        send(&mut app, ToolbarMessage::Open);
        send(&mut app, ToolbarMessage::Clear);
        send(&mut app, SidebarMessage::FilterChanged(FilterKind::Brightness, 150.0));
        let _ = app.update(Message::FileDropped(PathBuf::from("dropped.png")));
        assert!(matches!(app.session.last_error(), Some(Error::Busy)));
        let _ = app.update(Message::ImageRead(Ok(png_bytes(300, 200))));
        assert_eq!(app.session.workspace().dimensions(), Some((64, 64)));
        assert!(app.session.filters().is_default());

        let _ = app.update(Message::EditFinished(pending.run().await));
        assert!(!app.session.is_processing());
        assert_eq!(app.session.workspace().dimensions(), Some((10, 10)));

        let _ = app.update(Message::ImageRead(Ok(png_bytes(300, 200))));
        assert_eq!(app.session.workspace().dimensions(), Some((300, 200)));
    }

    #[test]
    fn brush_size_is_saved_when_the_slider_is_released() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        let mut app = test_app();
        app.config_path = Some(path.clone());

        send(&mut app, SidebarMessage::BrushChanged(42));
        assert!(!path.exists());
        send(&mut app, SidebarMessage::BrushReleased);

        let saved = config::load_from_path(&path).expect("saved settings");
        assert_eq!(saved.editor.brush_size, Some(42));
    }

    #[test]
    fn press_arriving_with_a_resize_is_not_lost() {
        let mut app = test_app();
        let _ = app.update(Message::ImageRead(Ok(png_bytes(200, 100))));
        send(&mut app, SidebarMessage::SelectMode(EditorMode::Erase));

        let size = Size::new(800.0, 600.0);
        send(
            &mut app,
            CanvasMessage::Resized {
                size,
                then: Some(Box::new(CanvasMessage::PointerPressed(Point::new(400.0, 300.0)))),
            },
        );
        assert_eq!(app.session.workspace().container(), size);
        assert!(app.session.workspace().is_drawing());
    }
}
