// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every scroll, resize and programmatic jump funnels into [`observe_page`],
//! which is the single place where reveal controllers see the viewport and
//! the hero rotator learns whether it is on screen.

use super::{Message, PAGE_ID};
use crate::config::Config;
use crate::content::{self, Document};
use crate::error::DocumentError;
use crate::media::{documents, remote, ImageCache};
use crate::ui::gallery::{self, Effect as GalleryEffect};
use crate::ui::hero::{self, Rotator};
use crate::ui::layout::{viewport_rect, PageLayout, SectionId};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::reveal::intersection_ratio;
use crate::ui::sections::{self, RevealSet};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{window, Size, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the [`super::App`] fields the handlers touch.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub layout: &'a mut PageLayout,
    pub viewport: &'a mut Size,
    pub offset_y: &'a mut f32,
    pub navbar: &'a mut navbar::State,
    pub reveals: &'a mut RevealSet,
    pub rotator: &'a mut Rotator,
    pub gallery: &'a mut gallery::State,
    pub images: &'a mut ImageCache,
    pub notifications: &'a mut notifications::Manager,
    pub window_id: &'a mut Option<window::Id>,
    pub pending_section: &'a mut Option<SectionId>,
    pub now: &'a mut Instant,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ScrollToTop => scroll_to(ctx, 0.0),
        NavbarEvent::ScrollTo(section) => scroll_to_section(ctx, section),
        NavbarEvent::Download(document) => download(ctx, document),
    }
}

pub fn handle_section_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::GoTo(section) => scroll_to_section(ctx, section),
        sections::Message::Download(document) => download(ctx, document),
        sections::Message::CopyLink(uri) => copy_link(ctx, uri),
        sections::Message::OpenGallery => handle_gallery_message(ctx, gallery::Message::Open),
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.handle(message) {
        GalleryEffect::None | GalleryEffect::Closed => Task::none(),
        GalleryEffect::Opened { index } | GalleryEffect::Moved { index } => {
            prefetch_gallery(ctx.images, index)
        }
        GalleryEffect::CopyLink { index } => match content::gallery_items().get(index) {
            Some(item) => copy_link(ctx, item.link),
            None => Task::none(),
        },
    }
}

pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    let (hero::Message::Rotate(at) | hero::Message::SwapFinished(at)) = message;
    *ctx.now = (*ctx.now).max(at);
    ctx.rotator.update(message);
    Task::none()
}

pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, offset_y: f32, viewport: Size) -> Task<Message> {
    *ctx.offset_y = offset_y;
    if viewport.width > 0.0 && viewport.height > 0.0 {
        *ctx.viewport = viewport;
    }
    ctx.navbar.observe_offset(offset_y);
    observe_page(ctx, Instant::now());
    Task::none()
}

pub fn handle_window_opened(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    size: Size,
) -> Task<Message> {
    *ctx.window_id = Some(id);
    apply_window_size(ctx, size);

    match ctx.pending_section.take() {
        Some(section) => scroll_to_section(ctx, section),
        None => {
            observe_page(ctx, Instant::now());
            Task::none()
        }
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    apply_window_size(ctx, size);
    // Bands moved; keep the offset inside the new page.
    *ctx.offset_y = clamp_offset(ctx.layout, *ctx.viewport, *ctx.offset_y);
    ctx.navbar.observe_offset(*ctx.offset_y);
    observe_page(ctx, Instant::now());
    Task::none()
}

/// The page is going away: release every reveal watch still registered,
/// stop the rotator and the gallery listener, then close the window.
pub fn handle_window_close_requested(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
) -> Task<Message> {
    let released = ctx.reveals.teardown_all();
    ctx.rotator.stop();
    ctx.gallery.close();
    tracing::info!(released, "page torn down");
    window::close(id)
}

pub fn handle_document_saved(
    ctx: &mut UpdateContext<'_>,
    document: Document,
    result: Result<Option<PathBuf>, DocumentError>,
) -> Task<Message> {
    match result {
        Ok(Some(path)) => {
            let path = path.display().to_string();
            ctx.notifications.push(
                Notification::success("notification-document-saved").with_arg("path", path),
            );
        }
        Ok(None) => {}
        Err(err) => {
            tracing::warn!(file = document.file_name, error = %err, "document export failed");
            ctx.notifications
                .push(Notification::error(err.i18n_key()).with_arg("file", document.file_name));
        }
    }
    Task::none()
}

/// Feeds the current viewport to the reveal controllers and starts or
/// stops the hero rotator depending on whether the hero band is on screen.
pub fn observe_page(ctx: &mut UpdateContext<'_>, now: Instant) {
    *ctx.now = now;
    let visible = viewport_rect(*ctx.offset_y, *ctx.viewport);
    ctx.reveals.observe(ctx.layout, visible, now);

    let hero_on_screen = intersection_ratio(ctx.layout.bounds_of(SectionId::Hero), visible) > 0.0;
    match (hero_on_screen, ctx.rotator.is_running()) {
        (true, false) => ctx.rotator.start(),
        (false, true) => ctx.rotator.stop(),
        _ => {}
    }
}

/// Starts a fetch for every uri not already cached or in flight.
pub fn fetch_images(
    images: &mut ImageCache,
    uris: impl IntoIterator<Item = &'static str>,
) -> Task<Message> {
    let tasks: Vec<Task<Message>> = uris
        .into_iter()
        .filter(|uri| images.begin(*uri))
        .map(|uri| Task::perform(remote::fetch(uri), move |result| Message::ImageFetched { uri, result }))
        .collect();
    Task::batch(tasks)
}

/// Current gallery image plus both neighbours, so arrow presses land on a
/// loaded slide.
fn prefetch_gallery(images: &mut ImageCache, index: usize) -> Task<Message> {
    let items = content::gallery_items();
    let len = items.len();
    if len == 0 {
        return Task::none();
    }
    let wanted = [index, (index + 1) % len, (index + len - 1) % len];
    fetch_images(
        images,
        wanted.into_iter().filter_map(|i| items.get(i)).map(|item| item.image),
    )
}

fn scroll_to_section(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    let target = ctx.layout.scroll_target(section);
    scroll_to(ctx, target)
}

/// Jumps the page to `offset_y`. The scrollable does not report programmatic
/// jumps, so the offset is observed here as well.
fn scroll_to(ctx: &mut UpdateContext<'_>, offset_y: f32) -> Task<Message> {
    let y = clamp_offset(ctx.layout, *ctx.viewport, offset_y);
    *ctx.offset_y = y;
    ctx.navbar.observe_offset(y);
    observe_page(ctx, Instant::now());
    operation::scroll_to(Id::new(PAGE_ID), AbsoluteOffset { x: 0.0, y })
}

fn clamp_offset(layout: &PageLayout, viewport: Size, offset_y: f32) -> f32 {
    let max = (layout.total_height() - viewport.height).max(0.0);
    offset_y.clamp(0.0, max)
}

fn apply_window_size(ctx: &mut UpdateContext<'_>, size: Size) {
    if size.width <= 0.0 || size.height <= 0.0 {
        return;
    }
    *ctx.viewport = size;
    if (ctx.layout.width() - size.width).abs() > f32::EPSILON {
        *ctx.layout = PageLayout::new(size.width);
        ctx.reveals.attach_all(ctx.layout);
    }
}

fn download(ctx: &mut UpdateContext<'_>, document: Document) -> Task<Message> {
    let dir = ctx.config.documents_dir();
    Task::perform(documents::download(dir, document), move |result| {
        Message::DocumentSaved { document, result }
    })
}

/// Copies `uri` to the clipboard. E-mail links are copied as the bare address.
fn copy_link(ctx: &mut UpdateContext<'_>, uri: &'static str) -> Task<Message> {
    let contents = link_contents(uri);
    tracing::debug!(link = contents, "copied to clipboard");
    ctx.notifications
        .push(Notification::info("notification-link-copied"));
    iced::clipboard::write(contents.to_string())
}

fn link_contents(uri: &str) -> &str {
    uri.strip_prefix("mailto:").unwrap_or(uri)
}
