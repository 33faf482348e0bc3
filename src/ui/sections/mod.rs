// SPDX-License-Identifier: MPL-2.0
//! Page sections, stacked top to bottom.
//!
//! Every section renders at the height [`PageLayout`] assigns to it, and
//! every animated block at the size it assigns to the block, so the
//! rectangles used for reveal detection match what is on screen. Each block
//! has its own [`RevealController`] and enters after its stagger delay.

pub mod about;
pub mod background;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use crate::content::Document;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::typography;
use crate::ui::hero::Rotator;
use crate::ui::layout::{Block, PageLayout, SectionId, HEADING_BLOCK};
use crate::ui::reveal::{
    intersection_ratio, Appearance, Observation, RevealController, RevealDuration, Threshold,
};
use crate::ui::styles::text::{tone, Tone};
use iced::widget::{image, text, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length, Padding, Rectangle};
use std::time::{Duration, Instant};

/// Actions the sections hand to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    GoTo(SectionId),
    Download(Document),
    /// Copy an external link (repository, post, social profile).
    CopyLink(&'static str),
    OpenGallery,
}

/// One reveal controller per animated [`Block`], in page order.
#[derive(Debug, Clone)]
pub struct RevealSet {
    controllers: Vec<(Block, RevealController)>,
}

impl RevealSet {
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self {
            controllers: Block::all()
                .into_iter()
                .map(|block| (block, RevealController::new(threshold)))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, block: Block) -> Option<&RevealController> {
        self.controllers
            .iter()
            .find_map(|(candidate, controller)| (*candidate == block).then_some(controller))
    }

    #[must_use]
    pub fn is_visible(&self, block: Block) -> bool {
        self.get(block).is_some_and(RevealController::is_visible)
    }

    /// Registers a watch for every block `layout` renders. Returns the
    /// number newly attached.
    pub fn attach_all(&mut self, layout: &PageLayout) -> usize {
        self.controllers
            .iter_mut()
            .filter(|(block, _)| layout.block_bounds(*block).is_some())
            .map(|(_, controller)| controller.attach())
            .filter(|attached| *attached)
            .count()
    }

    /// Feeds the viewport to every watching controller and returns the
    /// blocks revealed by this observation.
    pub fn observe(&mut self, layout: &PageLayout, viewport: Rectangle, now: Instant) -> Vec<Block> {
        self.controllers
            .iter_mut()
            .filter_map(|(block, controller)| {
                let bounds = layout.block_bounds(*block)?;
                let ratio = intersection_ratio(bounds, viewport);
                (controller.observe(ratio, now) == Observation::Triggered).then(|| {
                    tracing::debug!(%block, ratio, "block revealed");
                    *block
                })
            })
            .collect()
    }

    /// Releases every watch still registered, as when the page goes away.
    /// Returns the number of watches released.
    pub fn teardown_all(&mut self) -> usize {
        self.controllers
            .iter_mut()
            .map(|(_, controller)| {
                let watching = controller.is_watching();
                controller.teardown();
                watching
            })
            .filter(|released| *released)
            .count()
    }

    /// Opacity and offset of `block` at `now`.
    #[must_use]
    pub fn appearance(&self, block: Block, now: Instant, duration: RevealDuration) -> Appearance {
        self.get(block).map_or(Appearance::HIDDEN, |controller| {
            controller.appearance(now, delay_of(block), duration)
        })
    }

    /// True while any block is still sliding in.
    #[must_use]
    pub fn is_animating(&self, now: Instant, duration: RevealDuration) -> bool {
        self.controllers
            .iter()
            .any(|(block, controller)| controller.is_animating(now, delay_of(*block), duration))
    }

    #[must_use]
    pub fn all_visible(&self) -> bool {
        self.controllers
            .iter()
            .all(|(_, controller)| controller.is_visible())
    }
}

/// How long after its trigger a block starts to move.
#[must_use]
pub fn delay_of(block: Block) -> Duration {
    let millis = match block {
        Block::Hero(line) => hero::DELAYS_MS.get(line).copied().unwrap_or_default(),
        Block::Portrait => about::PORTRAIT_DELAY_MS,
        Block::Biography => about::TEXT_DELAY_MS,
        Block::Heading(_) => 0,
        Block::Experience(index) => experience::card_delay_ms(index),
        Block::Skill(index) => skills::card_delay_ms(index),
        Block::Project(index) => projects::card_delay_ms(index),
    };
    Duration::from_millis(millis)
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    pub layout: &'a PageLayout,
    pub reveals: &'a RevealSet,
    pub rotator: &'a Rotator,
    pub now: Instant,
    pub duration: RevealDuration,
}

impl ViewContext<'_> {
    pub(crate) fn appearance(&self, block: Block) -> Appearance {
        self.reveals.appearance(block, self.now, self.duration)
    }
}

/// The whole page, sections in order.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let sections = SectionId::ALL.into_iter().map(|section| {
        let content = match section {
            SectionId::Hero => hero::view(&ctx),
            SectionId::About => about::view(&ctx),
            SectionId::Experience => experience::view(&ctx),
            SectionId::Skills => skills::view(&ctx),
            SectionId::Projects => projects::view(&ctx),
            SectionId::Footer => footer::view(&ctx),
        };
        Container::new(content)
            .width(Length::Fill)
            .height(ctx.layout.height_of(section))
            .clip(true)
            .into()
    });

    Column::with_children(sections).width(Length::Fill).into()
}

/// Pushes `content` down by the appearance's remaining slide.
pub(crate) fn revealed<'a>(
    content: impl Into<Element<'a, Message>>,
    appearance: Appearance,
) -> Element<'a, Message> {
    Container::new(content)
        .padding(Padding {
            top: appearance.offset_y,
            ..Padding::ZERO
        })
        .into()
}

/// Centered section title.
pub(crate) fn heading<'a>(label: String, appearance: Appearance) -> Element<'a, Message> {
    let title = text(label)
        .size(typography::TITLE_LG)
        .style(tone(Tone::Brand, appearance.opacity));
    Container::new(revealed(title, appearance))
        .width(Length::Fill)
        .height(HEADING_BLOCK)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Text run of `tone`, faded with the block.
pub(crate) fn styled<'a>(
    content: impl text::IntoFragment<'a>,
    size: f32,
    role: Tone,
    opacity: f32,
) -> Text<'a> {
    text(content).size(size).style(tone(role, opacity))
}

/// A remote image, or a faint label while it is loading or failed.
pub(crate) fn remote_image<'a>(
    ctx: &ViewContext<'a>,
    uri: &'static str,
    fit: ContentFit,
    opacity: f32,
) -> Element<'a, Message> {
    match ctx.images.handle(uri) {
        Some(handle) => image(handle.clone())
            .content_fit(fit)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(opacity)
            .into(),
        None => Container::new(styled(
            ctx.i18n.tr("image-loading"),
            typography::CAPTION,
            Tone::Muted,
            opacity,
        ))
        .center(Length::Fill)
        .into(),
    }
}

/// Every image URI the page shows, in the order they appear.
pub fn image_uris() -> impl Iterator<Item = &'static str> {
    let content = crate::content::profile();
    std::iter::once(content.image)
        .chain(crate::content::experiences().iter().map(|e| e.logo))
        .chain(crate::content::projects().iter().map(|p| p.image))
}

/// Width of the content column for the current window.
pub(crate) fn column_width(layout: &PageLayout) -> f32 {
    layout.content_width()
}
