// SPDX-License-Identifier: MPL-2.0
//! Crop tool panel: ratio presets, custom ratio, apply/cancel.

use crate::application::editor::EditorSession;
use crate::domain::editing::{CropRatio, CROP_PRESETS};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::messages::{Message, SidebarMessage};
use crate::ui::theme;
use crate::ui::ViewContext;
use iced::widget::{button, text, text_input, Column, Row};
use iced::{Element, Length};

use super::{action_button, panel_frame, PanelInputs};

pub fn panel<'a>(
    session: &'a EditorSession,
    inputs: &'a PanelInputs,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let selected = session.crop_ratio();

    let presets = CROP_PRESETS
        .chunks(2)
        .fold(Column::new().spacing(spacing::XXS), |column, pair| {
            column.push(pair.iter().fold(Row::new().spacing(spacing::XXS), |row, ratio| {
                row.push(ratio_button(*ratio, selected, ctx))
            }))
        });

    let custom_ratio = inputs.custom_ratio();
    let custom = Row::new()
        .spacing(spacing::XXS)
        .align_y(iced::Alignment::Center)
        .push(
            text_input(&ctx.i18n.tr("crop-custom-width"), &inputs.ratio_width)
                .on_input(|value| Message::Sidebar(SidebarMessage::CustomRatioWidthChanged(value)))
                .size(typography::BODY_SM)
                .width(Length::Fill),
        )
        .push(text(":").size(typography::BODY))
        .push(
            text_input(&ctx.i18n.tr("crop-custom-height"), &inputs.ratio_height)
                .on_input(|value| Message::Sidebar(SidebarMessage::CustomRatioHeightChanged(value)))
                .on_submit_maybe(custom_ratio.map(|_| Message::Sidebar(SidebarMessage::ApplyCustomRatio)))
                .size(typography::BODY_SM)
                .width(Length::Fill),
        )
        .push(
            button(text(ctx.i18n.tr("crop-custom-apply")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::XS])
                .on_press_maybe(custom_ratio.map(|_| Message::Sidebar(SidebarMessage::ApplyCustomRatio))),
        );

    let size_info = session
        .workspace()
        .dimensions()
        .map(|(width, height)| {
            ctx.i18n.tr_with_args(
                "status-image-size",
                &[("width", &width.to_string()), ("height", &height.to_string())],
            )
        })
        .unwrap_or_default();

    let previewing = selected.is_some();
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(action_button(
            ctx.i18n.tr("crop-cancel"),
            Some(SidebarMessage::CancelCrop),
            button::secondary,
        ))
        .push(action_button(
            ctx.i18n.tr("crop-apply"),
            previewing.then_some(SidebarMessage::ApplyCrop),
            button::primary,
        ));

    panel_frame(
        ctx.i18n.tr("crop-title"),
        Column::new()
            .spacing(spacing::SM)
            .push(text(ctx.i18n.tr("crop-presets-label")).size(typography::BODY_SM))
            .push(presets)
            .push(text(ctx.i18n.tr("crop-custom-label")).size(typography::BODY_SM))
            .push(custom)
            .push(
                text(size_info)
                    .size(typography::CAPTION)
                    .color(theme::muted_text_color()),
            )
            .push(actions),
    )
}

fn ratio_button<'a>(
    ratio: CropRatio,
    selected: Option<CropRatio>,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let hint = ratio
        .preset_hint_key()
        .map(|key| ctx.i18n.tr(key))
        .unwrap_or_default();
    let label = Column::new()
        .push(text(ratio.to_string()).size(typography::BODY))
        .push(text(hint).size(typography::CAPTION));

    button(label)
        .on_press(Message::Sidebar(SidebarMessage::SelectCropRatio(ratio)))
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill)
        .style(if selected == Some(ratio) {
            button::primary
        } else {
            button::secondary
        })
        .into()
}
