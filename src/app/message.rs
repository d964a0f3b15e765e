// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::editor::EditOutcome;
use crate::application::port::GatewayError;
use crate::error::Error;
use crate::ui;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Widget messages are
/// forwarded through [`Message::Editor`]; the other variants carry the
/// results of asynchronous tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(ui::Message),
    /// Result from the open file dialog.
    OpenDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Raw bytes of a picked, dropped or command-line image.
    ImageRead(Result<Vec<u8>, Error>),
    /// Result of the export dialog and write; `None` when cancelled.
    Exported(Option<Result<PathBuf, Error>>),
    /// A gateway round-trip finished.
    EditFinished(EditOutcome),
    ConnectionChecked(Result<(), GatewayError>),
}

impl From<ui::Message> for Message {
    fn from(message: ui::Message) -> Self {
        Message::Editor(message)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `vi`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to load on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `PHOTOPRO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
