// SPDX-License-Identifier: MPL-2.0
//! Window-level event subscription: file drops and keyboard shortcuts.
//!
//! Pointer input is handled by the canvas widget itself; only events that
//! no widget captured reach the shortcut table.

use super::Message;
use crate::ui::{self, ToolbarMessage};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            shortcut(&key, modifiers).map(Message::Editor)
        }
        _ => None,
    })
}

/// Maps a key press to an editor message.
///
/// | Keys           | Action       |
/// |----------------|--------------|
/// | Ctrl/Cmd + O   | Open image   |
/// | Ctrl/Cmd + S   | Export PNG   |
/// | Ctrl/Cmd + 0   | Fit to view  |
/// | Escape         | Dismiss error|
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<ui::Message> {
    if let Key::Named(Named::Escape) = key {
        return Some(ui::Message::DismissError);
    }
    if !modifiers.command() {
        return None;
    }
    let Key::Character(c) = key else {
        return None;
    };
    let toolbar = match c.as_str() {
        "o" | "O" => ToolbarMessage::Open,
        "s" | "S" => ToolbarMessage::Export,
        "0" => ToolbarMessage::FitView,
        _ => return None,
    };
    Some(ui::Message::Toolbar(toolbar))
}
