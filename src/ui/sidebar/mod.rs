// SPDX-License-Identifier: MPL-2.0
//! Sidebar: mode tabs on top, the active mode's panel below.

mod adjust_panel;
mod ai_panel;
mod crop_panel;
mod erase_panel;

use crate::application::editor::EditorSession;
use crate::domain::editing::{CropRatio, EditorMode};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::messages::{Message, SidebarMessage};
use crate::ui::styles;
use crate::ui::ViewContext;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Element, Length};

/// Text inputs owned by the view rather than the session.
#[derive(Debug, Clone, Default)]
pub struct PanelInputs {
    pub ratio_width: String,
    pub ratio_height: String,
    pub prompt: String,
}

impl PanelInputs {
    /// Custom ratio typed in the crop panel, if both sides are positive numbers.
    #[must_use]
    pub fn custom_ratio(&self) -> Option<CropRatio> {
        let width = self.ratio_width.trim().parse().ok()?;
        let height = self.ratio_height.trim().parse().ok()?;
        CropRatio::new(width, height)
    }

    /// Whether the prompt has any non-blank text.
    #[must_use]
    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }
}

/// Result of the last gateway connection check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Unchecked,
    Checking,
    Connected,
    Failed,
}

impl ConnectionStatus {
    pub fn i18n_key(self) -> &'static str {
        match self {
            ConnectionStatus::Unchecked => "ai-connection-unchecked",
            ConnectionStatus::Checking => "ai-connection-checking",
            ConnectionStatus::Connected => "ai-connection-ok",
            ConnectionStatus::Failed => "ai-connection-failed",
        }
    }
}

pub struct SidebarModel<'a> {
    pub session: &'a EditorSession,
    pub inputs: &'a PanelInputs,
    pub connection: ConnectionStatus,
}

pub fn view<'a>(model: SidebarModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let session = model.session;
    let current = session.mode();

    let tabs = EditorMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, mode| {
            row.push(mode_tab(*mode, current, session.has_image(), ctx))
        });

    let panel = match current {
        EditorMode::Adjust => adjust_panel::panel(session, ctx),
        EditorMode::Crop => crop_panel::panel(session, model.inputs, ctx),
        EditorMode::Erase => erase_panel::panel(session, ctx),
        EditorMode::Ai => ai_panel::panel(session, model.inputs, model.connection, ctx),
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(tabs)
        .push(scrollable(panel).height(Length::Fill));

    container(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::editor::sidebar)
        .into()
}

fn mode_tab<'a>(
    mode: EditorMode,
    current: EditorMode,
    enabled: bool,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let btn = button(text(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::XXS])
        .width(Length::Fill)
        .style(if mode == current {
            button::primary
        } else {
            button::secondary
        });
    if enabled {
        btn.on_press(Message::Sidebar(SidebarMessage::SelectMode(mode))).into()
    } else {
        btn.into()
    }
}

/// Panel title followed by the panel body, on the shared panel surface.
fn panel_frame<'a>(title: String, body: Column<'a, Message>) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::XS)
            .push(text(title).size(typography::TITLE_SM))
            .push(body),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::editor::settings_panel)
    .into()
}

/// Full-width button that is only pressable when `message` is `Some`.
fn action_button<'a>(
    label: String,
    message: Option<SidebarMessage>,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(text(label).size(typography::BODY_SM))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(style)
        .on_press_maybe(message.map(Message::from))
        .into()
}
