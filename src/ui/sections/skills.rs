// SPDX-License-Identifier: MPL-2.0
//! Skill group cards, three across.

use super::{column_width, heading, revealed, styled, Message, ViewContext};
use crate::content::{self, SkillGroup};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::layout::{Block, SectionId, CARD_GAP, SECTION_PADDING, SKILL_CARD_HEIGHT};
use crate::ui::styles::{self, text::Tone};
use iced::widget::{rule, Column, Container, Row};
use iced::{alignment, Element, Length};

const FIRST_CARD_DELAY_MS: u64 = 100;
const CARD_STEP_MS: u64 = 200;

#[must_use]
pub fn card_delay_ms(index: usize) -> u64 {
    FIRST_CARD_DELAY_MS + CARD_STEP_MS * index as u64
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = content::skill_groups().iter().enumerate().fold(
        Row::new().spacing(CARD_GAP),
        |row, (index, group)| {
            let appearance = ctx.appearance(Block::Skill(index));
            row.push(
                Container::new(revealed(card(group, appearance.opacity), appearance))
                    .width(Length::FillPortion(1)),
            )
        },
    );

    let column = Column::new()
        .push(heading(
            ctx.i18n.tr("section-skills"),
            ctx.appearance(Block::Heading(SectionId::Skills)),
        ))
        .push(cards)
        .width(column_width(ctx.layout));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([SECTION_PADDING, 0.0])
        .into()
}

fn card<'a>(group: &'static SkillGroup, opacity: f32) -> Element<'a, Message> {
    // Two skills per line.
    let grid = group.skills.chunks(2).fold(
        Column::new().spacing(spacing::MD),
        |column, pair| {
            let line = pair.iter().fold(Row::new().spacing(spacing::MD), |row, skill| {
                row.push(
                    Container::new(
                        Row::new()
                            .spacing(spacing::XS)
                            .push(styled("•", typography::BODY_SM, Tone::Accent, opacity))
                            .push(styled(*skill, typography::BODY_SM, Tone::Body, opacity)),
                    )
                    .width(Length::FillPortion(1)),
                )
            });
            column.push(line)
        },
    );

    let body = Column::new()
        .spacing(spacing::LG)
        .push(styled(group.title, typography::TITLE_MD, Tone::Strong, opacity))
        .push(rule::horizontal(1))
        .push(grid);

    Container::new(body)
        .width(Length::Fill)
        .height(SKILL_CARD_HEIGHT)
        .padding(spacing::XL)
        .style(styles::container::faded(styles::container::card, opacity))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_use_hundred_three_hundred_five_hundred() {
        let delays: Vec<u64> = (0..3).map(card_delay_ms).collect();
        assert_eq!(delays, vec![100, 300, 500]);
    }
}
