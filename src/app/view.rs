// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: decorative background, scrolling page, fixed
//! navbar, gallery modal (only while open) and toasts.

use super::{Message, PAGE_ID};
use crate::content;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::gallery;
use crate::ui::hero::Rotator;
use crate::ui::layout::PageLayout;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::reveal::RevealDuration;
use crate::ui::sections::{self, background, RevealSet};
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Space, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: &'a PageLayout,
    pub reveals: &'a RevealSet,
    pub duration: RevealDuration,
    pub rotator: &'a Rotator,
    pub navbar: &'a navbar::State,
    pub gallery: &'a gallery::State,
    pub images: &'a ImageCache,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = sections::view(sections::ViewContext {
        i18n: ctx.i18n,
        images: ctx.images,
        layout: ctx.layout,
        reveals: ctx.reveals,
        rotator: ctx.rotator,
        now: ctx.now,
        duration: ctx.duration,
    })
    .map(Message::Section);

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport: viewport.bounds().size(),
        });

    let navbar_layer = Column::new()
        .push(
            navbar::view(navbar::ViewContext {
                i18n: ctx.i18n,
                scrolled: ctx.navbar.is_scrolled(),
            })
            .map(Message::Navbar),
        )
        .push(Space::new().height(Length::Fill));

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background::view().map(Message::Section))
        .push(scrollable)
        .push(navbar_layer);

    if let Some(modal) = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        state: ctx.gallery,
        items: content::gallery_items(),
        images: ctx.images,
    }) {
        stack = stack.push(modal.map(Message::Gallery));
    }

    stack = stack.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
