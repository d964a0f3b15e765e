// SPDX-License-Identifier: MPL-2.0
//! AI panel: smart filters, quick tools, upscaling and free-form prompts.

use crate::application::editor::{AiPreset, EditorSession, UpscaleFactor};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::messages::{Message, SidebarMessage};
use crate::ui::theme;
use crate::ui::ViewContext;
use iced::widget::{button, text, text_input, Column, Row};
use iced::{Color, Element, Length};

use super::{action_button, panel_frame, ConnectionStatus, PanelInputs};

pub fn panel<'a>(
    session: &'a EditorSession,
    inputs: &'a PanelInputs,
    connection: ConnectionStatus,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let configured = session.gateway().is_configured();
    let ready = configured && session.has_image() && !session.is_processing();

    let smart_filters = preset_group(&AiPreset::SMART_FILTERS, ready, ctx);
    let quick_tools = preset_group(&AiPreset::QUICK_TOOLS, ready, ctx);

    let upscale = UpscaleFactor::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, factor| {
            row.push(action_button(
                ctx.i18n
                    .tr_with_args("ai-upscale-button", &[("factor", factor.label())]),
                ready.then_some(SidebarMessage::Upscale(*factor)),
                button::secondary,
            ))
        });

    let prompt_ready = ready && inputs.has_prompt();
    let prompt = Column::new()
        .spacing(spacing::XXS)
        .push(
            text_input(&ctx.i18n.tr("ai-prompt-placeholder"), &inputs.prompt)
                .on_input(|value| Message::Sidebar(SidebarMessage::PromptChanged(value)))
                .on_submit_maybe(prompt_ready.then_some(Message::Sidebar(SidebarMessage::SubmitPrompt)))
                .size(typography::BODY_SM),
        )
        .push(action_button(
            ctx.i18n.tr("ai-prompt-submit"),
            prompt_ready.then_some(SidebarMessage::SubmitPrompt),
            button::primary,
        ));

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(connection_row(configured, connection, ctx));
    if session.is_processing() {
        body = body.push(
            text(ctx.i18n.tr("toolbar-processing"))
                .size(typography::CAPTION)
                .color(theme::warning_text_color()),
        );
    }
    body = body
        .push(section_label(ctx.i18n.tr("ai-smart-filters")))
        .push(smart_filters)
        .push(section_label(ctx.i18n.tr("ai-quick-tools")))
        .push(quick_tools)
        .push(section_label(ctx.i18n.tr("ai-upscale")))
        .push(upscale)
        .push(section_label(ctx.i18n.tr("ai-prompt-label")))
        .push(prompt);

    panel_frame(ctx.i18n.tr("ai-title"), body)
}

fn section_label<'a>(label: String) -> Element<'a, Message> {
    text(label).size(typography::BODY_SM).into()
}

fn preset_group<'a>(presets: &[AiPreset], ready: bool, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    presets
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, preset| {
            column.push(action_button(
                ctx.i18n.tr(preset.i18n_key()),
                ready.then_some(SidebarMessage::RunPreset(*preset)),
                button::secondary,
            ))
        })
        .into()
}

fn connection_row<'a>(
    configured: bool,
    connection: ConnectionStatus,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    if !configured {
        return text(ctx.i18n.tr("ai-key-missing"))
            .size(typography::CAPTION)
            .color(theme::error_color())
            .into();
    }

    let color: Color = match connection {
        ConnectionStatus::Connected => theme::success_text_color(),
        ConnectionStatus::Failed => theme::error_color(),
        ConnectionStatus::Unchecked | ConnectionStatus::Checking => theme::muted_text_color(),
    };
    let check = button(text(ctx.i18n.tr("ai-connection-check")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(button::text)
        .on_press_maybe(
            (connection != ConnectionStatus::Checking)
                .then_some(Message::Sidebar(SidebarMessage::CheckConnection)),
        );

    Row::new()
        .spacing(spacing::XS)
        .align_y(iced::Alignment::Center)
        .push(
            text(ctx.i18n.tr(connection.i18n_key()))
                .size(typography::CAPTION)
                .color(color)
                .width(Length::Fill),
        )
        .push(check)
        .into()
}
