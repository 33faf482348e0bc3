// SPDX-License-Identifier: MPL-2.0
//! Work experience cards.

use super::{heading, remote_image, revealed, styled, Message, ViewContext};
use crate::content::{self, Experience};
use crate::ui::design_tokens::{border, palette, sizing, spacing, typography};
use crate::ui::layout::{
    Block, SectionId, CARD_GAP, EXPERIENCE_CARD_HEIGHT, EXPERIENCE_COLUMN_WIDTH, SECTION_PADDING,
};
use crate::ui::reveal::Appearance;
use crate::ui::styles::{self, text::fade, text::Tone};
use iced::widget::{Column, Container, Row, Space};
use iced::{alignment, ContentFit, Element, Length};

const FIRST_CARD_DELAY_MS: u64 = 200;
const CARD_STEP_MS: u64 = 200;

#[must_use]
pub fn card_delay_ms(index: usize) -> u64 {
    FIRST_CARD_DELAY_MS + CARD_STEP_MS * index as u64
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = content::experiences()
        .iter()
        .enumerate()
        .fold(Column::new().spacing(CARD_GAP), |column, (index, experience)| {
            let appearance = ctx.appearance(Block::Experience(index));
            column.push(revealed(card(ctx, experience, index, appearance), appearance))
        });

    let column = Column::new()
        .push(heading(
            ctx.i18n.tr("section-experience"),
            ctx.appearance(Block::Heading(SectionId::Experience)),
        ))
        .push(cards)
        .width(EXPERIENCE_COLUMN_WIDTH.min(super::column_width(ctx.layout)));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([SECTION_PADDING, 0.0])
        .style(styles::container::band)
        .into()
}

fn card<'a>(
    ctx: &ViewContext<'a>,
    experience: &'static Experience,
    index: usize,
    appearance: Appearance,
) -> Element<'a, Message> {
    let opacity = appearance.opacity;
    let accent = if index == 0 {
        palette::PRIMARY_500
    } else {
        palette::PRIMARY_900
    };

    let logo = Container::new(remote_image(ctx, experience.logo, ContentFit::Contain, opacity))
        .width(sizing::COMPANY_LOGO)
        .height(sizing::COMPANY_LOGO)
        .padding(spacing::XXS)
        .style(styles::container::faded(styles::container::logo_tile, opacity));

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(logo)
        .push(
            Column::new()
                .push(styled(experience.role, typography::TITLE_MD, Tone::Strong, opacity))
                .push(styled(experience.company, typography::BODY, Tone::Accent, opacity)),
        )
        .push(Space::new().width(Length::Fill))
        .push(styled(experience.period, typography::BODY_SM, Tone::Muted, opacity));

    let bullets = experience.bullets.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, bullet| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(styled("▹", typography::BODY_SM, Tone::Brand, opacity))
                    .push(styled(*bullet, typography::BODY_SM, Tone::Body, opacity)),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(header)
        .push(bullets);

    let stripe = Container::new(Space::new())
        .width(border::WIDTH_ACCENT)
        .height(Length::Fill)
        .style(styles::container::accent_bar(fade(accent, opacity)));

    Container::new(Row::new().push(stripe).push(body))
        .width(Length::Fill)
        .height(EXPERIENCE_CARD_HEIGHT)
        .clip(true)
        .style(styles::container::faded(styles::container::card, opacity))
        .into()
}
