// SPDX-License-Identifier: MPL-2.0
//! About: portrait on the left, biography and social links on the right.

use super::{column_width, remote_image, revealed, styled, Message, ViewContext};
use crate::content;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::{Block, ABOUT_GAP, ABOUT_TEXT_HEIGHT};
use crate::ui::styles::{self, text::Tone};
use iced::widget::{button, Column, Container, Row};
use iced::{alignment, ContentFit, Element, Length};

pub const PORTRAIT_DELAY_MS: u64 = 0;
pub const TEXT_DELAY_MS: u64 = 200;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = content::profile();
    let portrait_at = ctx.appearance(Block::Portrait);
    let text_at = ctx.appearance(Block::Biography);

    let portrait = Container::new(remote_image(
        ctx,
        profile.image,
        ContentFit::Cover,
        portrait_at.opacity,
    ))
    .width(sizing::PROFILE_IMAGE_WIDTH)
    .height(sizing::PROFILE_IMAGE_HEIGHT)
    .padding(spacing::XS)
    .style(styles::container::faded(
        styles::container::image_frame,
        portrait_at.opacity,
    ));

    let links = [
        ("GitHub", profile.github),
        ("LinkedIn", profile.linkedin),
        ("E-mail", profile.email),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::MD), |row, (label, uri)| {
        row.push(
            button(styled(label, typography::BODY, Tone::Muted, text_at.opacity))
                .on_press(Message::CopyLink(uri))
                .padding(spacing::XS)
                .style(styles::button::faded(styles::button::icon_link, text_at.opacity)),
        )
    });

    let paragraphs = profile.bio.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, paragraph| {
            column.push(styled(*paragraph, typography::BODY, Tone::Body, text_at.opacity))
        },
    );

    let text_block = Column::new()
        .spacing(spacing::LG)
        .push(styled(
            ctx.i18n.tr("about-welcome"),
            typography::TITLE_SM,
            Tone::Accent,
            text_at.opacity,
        ))
        .push(paragraphs)
        .push(links);

    let row = Row::new()
        .spacing(ABOUT_GAP)
        .align_y(alignment::Vertical::Center)
        .push(revealed(portrait, portrait_at))
        .push(
            Container::new(revealed(text_block, text_at))
                .width(Length::Fill)
                .height(ABOUT_TEXT_HEIGHT)
                .align_y(alignment::Vertical::Center),
        );

    Container::new(Container::new(row).width(column_width(ctx.layout)))
        .center(Length::Fill)
        .into()
}
