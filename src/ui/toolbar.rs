// SPDX-License-Identifier: MPL-2.0
//! Top toolbar: file actions on the left, zoom and status on the right.

use crate::application::editor::EditorSession;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::messages::{Message, ToolbarMessage};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::ViewContext;
use iced::widget::{button, container, text, Row, Space};
use iced::{Alignment, Element, Length};

pub struct ToolbarModel {
    pub has_image: bool,
    pub processing: bool,
    pub zoom_label: String,
    pub dimensions: Option<(u32, u32)>,
}

impl ToolbarModel {
    pub fn from_session(session: &EditorSession) -> Self {
        let workspace = session.workspace();
        Self {
            has_image: session.has_image(),
            processing: session.is_processing(),
            zoom_label: workspace.viewport().zoom_label(),
            dimensions: workspace.dimensions(),
        }
    }
}

pub fn view<'a>(model: ToolbarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let idle = !model.processing;
    let with_image = model.has_image && idle;

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .padding([spacing::XS, spacing::SM])
        .push(text(ctx.i18n.tr("app-name")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fixed(spacing::MD)))
        .push(tool_button(
            ctx.i18n.tr("toolbar-open"),
            idle.then_some(ToolbarMessage::Open),
        ))
        .push(tool_button(
            ctx.i18n.tr("toolbar-export"),
            with_image.then_some(ToolbarMessage::Export),
        ))
        .push(tool_button(
            ctx.i18n.tr("toolbar-clear"),
            with_image.then_some(ToolbarMessage::Clear),
        ))
        .push(Space::new().width(Length::Fill));

    if model.processing {
        row = row.push(
            text(ctx.i18n.tr("toolbar-processing"))
                .size(typography::CAPTION)
                .color(theme::warning_text_color()),
        );
    }

    if let Some((width, height)) = model.dimensions {
        row = row
            .push(
                text(ctx.i18n.tr_with_args(
                    "status-image-size",
                    &[("width", &width.to_string()), ("height", &height.to_string())],
                ))
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
            )
            .push(text(model.zoom_label).size(typography::BODY_SM))
            .push(tool_button(
                ctx.i18n.tr("toolbar-fit"),
                Some(ToolbarMessage::FitView),
            ));
    }

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .align_y(Alignment::Center)
        .style(styles::editor::toolbar)
        .into()
}

fn tool_button<'a>(label: String, message: Option<ToolbarMessage>) -> Element<'a, Message> {
    button(text(label).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(button::secondary)
        .on_press_maybe(message.map(Message::Toolbar))
        .into()
}
