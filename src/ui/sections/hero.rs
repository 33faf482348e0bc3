// SPDX-License-Identifier: MPL-2.0
//! Hero: greeting, rotating word, tagline, CV call to action.

use super::{revealed, styled, Message, ViewContext};
use crate::content;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::{Block, SectionId, HERO_BLOCK_GAP, HERO_BLOCK_HEIGHTS};
use crate::ui::reveal::Appearance;
use crate::ui::styles::{self, text::Tone};
use iced::widget::{button, Column, Container, Row};
use iced::{alignment, Element, Length, Padding};

/// Headline, tagline, button, scroll hint.
pub const DELAYS_MS: [u64; 4] = [100, 300, 500, 700];

const WORD_LINE_HEIGHT: f32 = typography::DISPLAY * 1.3;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = content::profile();
    let [headline_at, tagline_at, button_at, hint_at] =
        std::array::from_fn(|line| ctx.appearance(Block::Hero(line)));

    let greeting = styled(
        ctx.i18n.tr_with_args("hero-greeting", &[("name", profile.name)]),
        typography::DISPLAY,
        Tone::Strong,
        headline_at.opacity,
    );

    let progress = ctx.rotator.swap_progress(ctx.now);
    let word = Container::new(styled(
        ctx.rotator.current_word(),
        typography::DISPLAY,
        Tone::Accent,
        headline_at.opacity * (1.0 - progress),
    ))
    .padding(Padding {
        top: progress * WORD_LINE_HEIGHT,
        ..Padding::ZERO
    })
    .height(WORD_LINE_HEIGHT)
    .clip(true);

    let second_line = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Bottom)
        .push(styled(
            ctx.i18n.tr("hero-love"),
            typography::DISPLAY,
            Tone::Strong,
            headline_at.opacity,
        ))
        .push(word);

    let headline = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(greeting)
        .push(second_line);

    let tagline = Container::new(
        styled(profile.tagline, typography::BODY_LG, Tone::Body, tagline_at.opacity)
            .center(),
    )
    .max_width(sizing::CONTENT_MAX_WIDTH * 0.6);

    let cv = button(styled(
        ctx.i18n.tr("hero-cv"),
        typography::BODY,
        Tone::Accent,
        button_at.opacity,
    ))
    .on_press(Message::Download(profile.resume))
    .padding([spacing::MD, spacing::XXL])
    .style(styles::button::faded(styles::button::outline, button_at.opacity));

    let hint = button(styled("↓", typography::TITLE_MD, Tone::Muted, hint_at.opacity))
        .on_press(Message::GoTo(SectionId::About))
        .padding(spacing::XS)
        .style(styles::button::faded(styles::button::icon_link, hint_at.opacity));

    let column = Column::new()
        .spacing(HERO_BLOCK_GAP)
        .align_x(alignment::Horizontal::Center)
        .push(line(headline, headline_at, HERO_BLOCK_HEIGHTS[0]))
        .push(line(tagline, tagline_at, HERO_BLOCK_HEIGHTS[1]))
        .push(line(cv, button_at, HERO_BLOCK_HEIGHTS[2]))
        .push(line(hint, hint_at, HERO_BLOCK_HEIGHTS[3]));

    Container::new(column)
        .padding(Padding {
            top: sizing::NAVBAR_HEIGHT,
            ..Padding::ZERO
        })
        .center(Length::Fill)
        .into()
}

fn line<'a>(
    content: impl Into<Element<'a, Message>>,
    appearance: Appearance,
    height: f32,
) -> Element<'a, Message> {
    Container::new(revealed(content, appearance))
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .clip(true)
        .into()
}
