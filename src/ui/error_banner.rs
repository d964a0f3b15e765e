// SPDX-License-Identifier: MPL-2.0
//! Dismissible banner showing the session's last error.
//!
//! The headline is the localized message for the error variant; the
//! technical detail (HTTP status, decoder message) is shown underneath in a
//! muted caption.

use crate::error::Error;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::messages::Message;
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::ViewContext;
use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Element, Length};

pub fn view<'a>(error: &Error, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let headline = text(ctx.i18n.tr(error.i18n_key())).size(typography::BODY);
    let details = text(error.to_string())
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    let dismiss = button(text(ctx.i18n.tr("error-dismiss")).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(button::text)
        .on_press(Message::DismissError);

    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(headline)
                    .push(details),
            )
            .push(dismiss),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::editor::error_banner)
    .into()
}
