// SPDX-License-Identifier: MPL-2.0
//! Footer with the copyright line and social links.

use super::{styled, Message, ViewContext};
use crate::content;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{self, text::Tone};
use iced::widget::{button, Column, Container, Row};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = content::profile();

    let links = [("GitHub", profile.github), ("LinkedIn", profile.linkedin)]
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), |row, (label, uri)| {
            row.push(
                button(styled(label, typography::BODY_SM, Tone::Muted, 1.0))
                    .on_press(Message::CopyLink(uri))
                    .padding(spacing::XXS)
                    .style(styles::button::icon_link),
            )
        });

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(styled(
            ctx.i18n.tr_with_args("footer-copyright", &[("name", profile.name)]),
            typography::BODY_SM,
            Tone::Muted,
            1.0,
        ))
        .push(links);

    Container::new(column)
        .center(Length::Fill)
        .style(styles::container::footer)
        .into()
}
