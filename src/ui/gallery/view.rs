// SPDX-License-Identifier: MPL-2.0
//! Gallery modal rendering.

use super::{Message, State};
use crate::content::GalleryItem;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, Slot};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, opaque, text, Column, Container, Row, Space};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub items: &'a [GalleryItem],
    pub images: &'a ImageCache,
}

/// Renders the modal, or nothing while the carousel is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let index = ctx.state.open_index()?;
    let item = ctx.items.get(index)?;

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            text(ctx.i18n.tr("gallery-title"))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(Space::new().width(Length::Fill))
        .push(round_button("×", Message::Close));

    let slide = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(round_button("‹", Message::Previous))
        .push(
            Container::new(slide_image(ctx.i18n, ctx.images, item))
                .width(Length::Fill)
                .height(sizing::GALLERY_IMAGE_MAX_HEIGHT)
                .center_x(Length::Fill)
                .center_y(sizing::GALLERY_IMAGE_MAX_HEIGHT)
                .style(styles::container::image_frame),
        )
        .push(round_button("›", Message::Next));

    let (current, total) = ctx.state.position_label();
    let (current, total) = (current.to_string(), total.to_string());
    let position = ctx.i18n.tr_with_args(
        "gallery-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    );

    let footer = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(text(item.description).size(typography::BODY_LG))
                .width(Length::Fill),
        )
        .push(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right)
                .push(
                    text(position)
                        .size(typography::BODY_SM)
                        .color(palette::SLATE_400),
                )
                .push(
                    button(text(ctx.i18n.tr("gallery-view-post")).size(typography::BODY_SM))
                        .on_press(Message::CopyLink)
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::primary),
                ),
        );

    let panel = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(slide)
            .push(footer),
    )
    .max_width(sizing::GALLERY_MAX_WIDTH)
    .padding(spacing::LG)
    .style(styles::container::gallery_panel);

    let backdrop = container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::gallery_backdrop);

    Some(opaque(backdrop))
}

fn slide_image<'a>(
    i18n: &I18n,
    images: &ImageCache,
    item: &GalleryItem,
) -> Element<'a, Message> {
    match images.get(item.image) {
        Some(Slot::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(Slot::Failed(err)) => placeholder(i18n.tr(err.i18n_key())),
        Some(Slot::Loading) | None => placeholder(i18n.tr("image-loading")),
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(typography::BODY_SM)
        .color(palette::SLATE_400)
        .into()
}

fn round_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        text(glyph)
            .size(typography::TITLE_MD)
            .width(sizing::BUTTON_HEIGHT)
            .center(),
    )
    .on_press(message)
    .padding(spacing::XXS)
    .style(styles::button::overlay_round)
    .into()
}
