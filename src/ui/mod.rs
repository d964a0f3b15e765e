// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Elm-style "state down, messages up": every view function receives a
//! model borrowed from the [`EditorSession`] and returns an [`Element`]
//! emitting [`Message`]s that the application forwards back to the session.
//!
//! - [`toolbar`] - open, export, clear, zoom readout and fit
//! - [`sidebar`] - mode tabs and the adjust, crop, erase and AI panels
//! - [`canvas`] - image and mask drawing, pointer and wheel input
//! - [`error_banner`] - last error with a dismiss button
//! - [`styles`], [`theme`], [`design_tokens`] - shared styling
//!
//! [`EditorSession`]: crate::application::editor::EditorSession

pub mod canvas;
pub mod design_tokens;
pub mod error_banner;
pub mod messages;
pub mod sidebar;
pub mod styles;
pub mod theme;
pub mod toolbar;

pub use messages::{CanvasMessage, Message, SidebarMessage, ToolbarMessage};

use crate::application::editor::EditorSession;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, container, image, text, Column, Row};
use iced::{Alignment, Element, Length};
use sidebar::{ConnectionStatus, PanelInputs, SidebarModel};

/// Borrowed context shared by every view function.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Everything the editor screen renders from.
pub struct EditorView<'a> {
    pub session: &'a EditorSession,
    pub inputs: &'a PanelInputs,
    pub connection: ConnectionStatus,
    pub image: Option<&'a image::Handle>,
    pub mask: Option<&'a image::Handle>,
}

pub fn view<'a>(model: EditorView<'a>, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let session = model.session;

    let toolbar = toolbar::view(toolbar::ToolbarModel::from_session(session), &ctx);
    let sidebar = sidebar::view(
        SidebarModel {
            session,
            inputs: model.inputs,
            connection: model.connection,
        },
        &ctx,
    );

    let surface: Element<'a, Message> = if session.has_image() {
        canvas::view(canvas::CanvasModel::new(session, model.image, model.mask))
    } else {
        empty_state(&ctx)
    };

    let mut content = Column::new().push(toolbar);
    if let Some(error) = session.last_error() {
        content = content.push(
            container(error_banner::view(error, &ctx)).padding([spacing::XS, spacing::SM]),
        );
    }
    content = content.push(
        Row::new()
            .push(sidebar)
            .push(
                container(surface)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::editor::canvas),
            )
            .height(Length::Fill),
    );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .push(text(ctx.i18n.tr("empty-title")).size(typography::TITLE_MD))
        .push(
            text(ctx.i18n.tr("empty-hint"))
                .size(typography::BODY_SM)
                .color(theme::muted_text_color()),
        )
        .push(
            button(text(ctx.i18n.tr("empty-open")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(button::primary)
                .on_press(Message::Toolbar(ToolbarMessage::Open)),
        );

    container(column)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
