// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar at the top of the page.
//!
//! Shows the owner's name, one link per navigable section and the Resume
//! download. The bar is transparent at the top of the page and turns
//! compact and opaque once the page has scrolled past a small offset.

use crate::config::NAVBAR_SCROLLED_OFFSET;
use crate::content::{self, Document};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::SectionId;
use crate::ui::styles;
use iced::widget::{button, container, text, Container, Row, Space};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scrolled: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Brand clicked.
    GoTop,
    GoTo(SectionId),
    DownloadResume,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ScrollToTop,
    ScrollTo(SectionId),
    Download(Document),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    scrolled: bool,
}

impl State {
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Updates the scrolled flag from the page offset. Returns true if it flipped.
    pub fn observe_offset(&mut self, offset_y: f32) -> bool {
        let scrolled = offset_y > NAVBAR_SCROLLED_OFFSET;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

pub fn update(message: Message) -> Event {
    match message {
        Message::GoTop => Event::ScrollToTop,
        Message::GoTo(section) => Event::ScrollTo(section),
        Message::DownloadResume => Event::Download(content::profile().resume),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        text(content::profile().name)
            .size(typography::TITLE_MD)
            .color(crate::ui::design_tokens::palette::PRIMARY_500),
    )
    .on_press(Message::GoTop)
    .padding(0)
    .style(styles::button::nav_link);

    let links = SectionId::NAVIGABLE.into_iter().fold(
        Row::new().spacing(spacing::XL).align_y(Vertical::Center),
        |row, section| {
            row.push(
                button(text(ctx.i18n.tr(section.nav_key())).size(typography::BODY_SM))
                    .on_press(Message::GoTo(section))
                    .padding(spacing::XXS)
                    .style(styles::button::nav_link),
            )
        },
    );

    let resume = button(text(ctx.i18n.tr("nav-resume")).size(typography::BODY_SM))
        .on_press(Message::DownloadResume)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::outline);

    let (height, padding) = if ctx.scrolled {
        (sizing::NAVBAR_HEIGHT_COMPACT, spacing::MD)
    } else {
        (sizing::NAVBAR_HEIGHT, spacing::LG)
    };

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(Space::new().width(spacing::XL))
        .push(resume);

    Container::new(
        container(bar)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([0.0, spacing::LG]),
    )
    .width(Length::Fill)
    .height(height)
    .center_x(Length::Fill)
    .align_y(Vertical::Center)
    .padding([padding / 2.0, 0.0])
    .style(styles::container::navbar(ctx.scrolled))
    .into()
}
