// SPDX-License-Identifier: MPL-2.0
//! Key projects grid.
//!
//! Cards flow left to right in as many columns as the window fits (at most
//! three). Each card reveals on its own and starts moving 150 ms per index
//! after it is seen. A card ends in an action strip: open the gallery,
//! download documents, or copy links.

use super::{heading, remote_image, revealed, styled, Message, ViewContext};
use crate::content::{self, Document, Project, ProjectAction};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::{Block, SectionId, CARD_GAP, SECTION_PADDING};
use crate::ui::styles::{self, text::Tone};
use iced::widget::{button, Column, Container, Row, Space};
use iced::{alignment, ContentFit, Element, Length};

const CARD_STEP_MS: u64 = 150;

#[must_use]
pub fn card_delay_ms(index: usize) -> u64 {
    CARD_STEP_MS * index as u64
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.layout.project_columns();
    let projects = content::projects();

    let rows = projects
        .chunks(columns)
        .enumerate()
        .fold(Column::new().spacing(CARD_GAP), |grid, (row_index, chunk)| {
            let row = chunk.iter().enumerate().fold(
                Row::new().spacing(CARD_GAP),
                |row, (column_index, project)| {
                    let appearance = ctx.appearance(Block::Project(row_index * columns + column_index));
                    row.push(revealed(card(ctx, project, appearance.opacity), appearance))
                },
            );
            grid.push(row)
        });

    let column = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(heading(
            ctx.i18n.tr("section-projects"),
            ctx.appearance(Block::Heading(SectionId::Projects)),
        ))
        .push(rows);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([SECTION_PADDING, 0.0])
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, project: &'static Project, opacity: f32) -> Element<'a, Message> {
    let cover = Container::new(remote_image(ctx, project.image, ContentFit::Cover, opacity))
        .width(Length::Fill)
        .height(sizing::PROJECT_COVER_HEIGHT)
        .clip(true);

    let status = Container::new(styled(
        ctx.i18n.tr(project.status.i18n_key()),
        typography::CAPTION,
        Tone::Accent,
        opacity,
    ))
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::faded(styles::container::tag, opacity));

    let tags = project.tags.iter().fold(Row::new().spacing(spacing::XS), |row, tag| {
        row.push(
            Container::new(styled(*tag, typography::CAPTION, Tone::Accent, opacity))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::faded(styles::container::tag, opacity)),
        )
    });

    let body = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .height(Length::Fill)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    Container::new(styled(
                        project.title,
                        typography::TITLE_SM,
                        Tone::Strong,
                        opacity,
                    ))
                    .width(Length::Fill),
                )
                .push(status),
        )
        .push(styled(
            project.description,
            typography::BODY_SM,
            Tone::Body,
            opacity,
        ))
        .push(Space::new().height(Length::Fill))
        .push(tags);

    let layout = Column::new()
        .push(cover)
        .push(body)
        .push(action_strip(ctx.i18n, &project.action, opacity));

    Container::new(layout)
        .width(sizing::PROJECT_CARD_WIDTH)
        .height(sizing::PROJECT_CARD_HEIGHT)
        .clip(true)
        .style(styles::container::faded(styles::container::card, opacity))
        .into()
}

/// A labelled action of a card's bottom strip.
#[derive(Debug, Clone, PartialEq)]
struct CardAction {
    label_key: &'static str,
    caption_key: &'static str,
    message: Message,
}

impl CardAction {
    fn download(document: Document) -> Self {
        Self {
            label_key: document.label_key,
            caption_key: document.caption_key,
            message: Message::Download(document),
        }
    }

    fn repository(uri: &'static str) -> Self {
        Self {
            label_key: "project-view-code",
            caption_key: "project-caption-repo",
            message: Message::CopyLink(uri),
        }
    }
}

fn card_actions(action: &ProjectAction) -> Vec<CardAction> {
    match *action {
        ProjectAction::Gallery => vec![CardAction {
            label_key: "project-view-gallery",
            caption_key: "project-caption-gallery",
            message: Message::OpenGallery,
        }],
        ProjectAction::Downloads { primary, secondary } => {
            vec![CardAction::download(primary), CardAction::download(secondary)]
        }
        ProjectAction::CodeAndDocument {
            repository,
            document,
        } => vec![
            CardAction::repository(repository),
            CardAction::download(document),
        ],
        ProjectAction::CodeAndPost { repository, post } => vec![
            CardAction::repository(repository),
            CardAction {
                label_key: "project-view-post",
                caption_key: "project-caption-post",
                message: Message::CopyLink(post),
            },
        ],
    }
}

fn action_strip<'a>(i18n: &I18n, action: &ProjectAction, opacity: f32) -> Element<'a, Message> {
    card_actions(action)
        .into_iter()
        .fold(Row::new(), |row, action| {
            let label = Column::new()
                .align_x(alignment::Horizontal::Center)
                .push(styled(
                    i18n.tr(action.label_key),
                    typography::BODY,
                    Tone::Strong,
                    opacity,
                ))
                .push(styled(
                    i18n.tr(action.caption_key),
                    typography::CAPTION,
                    Tone::Muted,
                    opacity,
                ));
            row.push(
                button(Container::new(label).center_x(Length::Fill))
                    .on_press(action.message)
                    .width(Length::FillPortion(1))
                    .padding(spacing::SM)
                    .style(styles::button::faded(styles::button::card_action, opacity)),
            )
        })
        .into()
}
