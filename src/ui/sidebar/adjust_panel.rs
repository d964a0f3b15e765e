// SPDX-License-Identifier: MPL-2.0
//! Filter sliders.

use crate::application::editor::EditorSession;
use crate::domain::editing::FilterKind;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::messages::{Message, SidebarMessage};
use crate::ui::theme;
use crate::ui::ViewContext;
use iced::widget::{button, slider, text, Column, Row, Space};
use iced::{Element, Length};

use super::{action_button, panel_frame};

pub fn panel<'a>(session: &'a EditorSession, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let filters = session.filters();

    let sliders = FilterKind::ALL
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, kind| {
            column.push(filter_row(*kind, filters.get(*kind), ctx))
        });

    let reset = action_button(
        ctx.i18n.tr("adjust-reset"),
        (!filters.is_default()).then_some(SidebarMessage::ResetFilters),
        button::secondary,
    );

    panel_frame(
        ctx.i18n.tr("adjust-title"),
        Column::new().spacing(spacing::MD).push(sliders).push(reset),
    )
}

fn filter_row<'a>(kind: FilterKind, value: f32, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (min, max) = kind.range();
    let step = if kind == FilterKind::Blur { 0.5 } else { 1.0 };

    let header = Row::new()
        .push(text(ctx.i18n.tr(kind.i18n_key())).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            text(format!("{}{}", value, kind.unit()))
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        );

    Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(
            slider(min..=max, value, move |v| {
                Message::Sidebar(SidebarMessage::FilterChanged(kind, v))
            })
            .step(step),
        )
        .into()
}
