// SPDX-License-Identifier: MPL-2.0
//! Object removal panel: brush size and the remove action.

use crate::application::editor::EditorSession;
use crate::domain::editing::brush_bounds;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::messages::{Message, SidebarMessage};
use crate::ui::theme;
use crate::ui::ViewContext;
use iced::widget::{button, slider, text, Column, Row, Space};
use iced::{Element, Length};

use super::{action_button, panel_frame};

pub fn panel<'a>(session: &'a EditorSession, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brush = session.brush().value();
    let has_strokes = session
        .workspace()
        .mask()
        .is_some_and(|mask| !mask.is_empty());
    let idle = !session.is_processing();

    let brush_row = Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .push(text(ctx.i18n.tr("erase-brush-size")).size(typography::BODY_SM))
                .push(Space::new().width(Length::Fill))
                .push(
                    text(format!("{brush}px"))
                        .size(typography::CAPTION)
                        .color(theme::muted_text_color()),
                ),
        )
        .push(
            slider(brush_bounds::MIN..=brush_bounds::MAX, brush, |value| {
                Message::Sidebar(SidebarMessage::BrushChanged(value))
            })
            .on_release(Message::Sidebar(SidebarMessage::BrushReleased)),
        );

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(action_button(
            ctx.i18n.tr("erase-cancel"),
            idle.then_some(SidebarMessage::CancelErase),
            button::secondary,
        ))
        .push(action_button(
            ctx.i18n.tr("erase-apply"),
            (idle && has_strokes).then_some(SidebarMessage::RemoveObjects),
            button::primary,
        ));

    panel_frame(
        ctx.i18n.tr("erase-title"),
        Column::new()
            .spacing(spacing::SM)
            .push(
                text(ctx.i18n.tr("erase-hint"))
                    .size(typography::CAPTION)
                    .color(theme::muted_text_color()),
            )
            .push(brush_row)
            .push(actions),
    )
}
