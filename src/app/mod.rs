// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct wires together the page geometry, the reveal controllers,
//! the hero rotator, the gallery carousel and the toast queue, and translates
//! messages into side effects such as image fetches, clipboard writes and
//! document exports.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::content;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::gallery;
use crate::ui::hero::{HeroTiming, Rotator};
use crate::ui::layout::{PageLayout, SectionId};
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::reveal::{RevealDuration, Threshold};
use crate::ui::sections::{self, RevealSet};
use crate::ui::theming::{AppTheme, ThemeMode};
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Id of the page scrollable, used for programmatic jumps.
pub(crate) const PAGE_ID: &str = "portfolio-page";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    layout: PageLayout,
    /// Visible size of the page scrollable.
    viewport: Size,
    offset_y: f32,
    navbar: navbar::State,
    reveals: RevealSet,
    reveal_duration: RevealDuration,
    rotator: Rotator,
    gallery: gallery::State,
    images: ImageCache,
    notifications: notifications::Manager,
    window_id: Option<window::Id>,
    /// Section requested on the command line, applied once the window opens.
    pending_section: Option<SectionId>,
    /// Clock used to sample animations during `view`.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("offset_y", &self.offset_y)
            .field("gallery_open", &self.gallery.is_open())
            .field("all_revealed", &self.reveals.all_visible())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        // Close requests are handled in `update`.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, builds the page state and starts fetching page images.
    ///
    /// Reveal watches attach here against the default window size so the hero
    /// shows on the first frame; the real size arrives with the window event.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let threshold = Threshold::new(
            config
                .reveal
                .threshold
                .unwrap_or(config::DEFAULT_REVEAL_THRESHOLD),
        );
        let reveal_duration = RevealDuration::new(
            config
                .reveal
                .duration_ms
                .unwrap_or(config::DEFAULT_REVEAL_DURATION_MS),
        );
        let rotator = Rotator::new(
            content::profile().hero_words,
            HeroTiming::from_config(&config.hero),
        );
        let gallery = gallery::State::new(content::gallery_items().len(), config.gallery.reopen_at);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            layout: PageLayout::new(WINDOW_DEFAULT_WIDTH as f32),
            viewport: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            offset_y: 0.0,
            navbar: navbar::State::default(),
            reveals: RevealSet::new(threshold),
            reveal_duration,
            rotator,
            gallery,
            images: ImageCache::default(),
            notifications: notifications::Manager::new(),
            window_id: None,
            pending_section: flags.section,
            now: Instant::now(),
            config,
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let attached = app.reveals.attach_all(&app.layout);
        tracing::debug!(attached, "reveal watches attached");
        update::observe_page(&mut app.update_context(), Instant::now());

        let task = update::fetch_images(&mut app.images, sections::image_uris());
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        AppTheme::new(self.theme_mode).iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_sub = subscription::create_window_subscription();
        let gallery_sub = self.gallery.subscription().map(Message::Gallery);
        let hero_sub = self.rotator.subscription().map(Message::Hero);
        let frame_sub = subscription::create_frame_subscription(self.is_animating());
        let tick_sub = subscription::create_tick_subscription(self.notifications.needs_tick());

        Subscription::batch([window_sub, gallery_sub, hero_sub, frame_sub, tick_sub])
    }

    fn is_animating(&self) -> bool {
        self.rotator.is_swapping() || self.reveals.is_animating(self.now, self.reveal_duration)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            config: &self.config,
            layout: &mut self.layout,
            viewport: &mut self.viewport,
            offset_y: &mut self.offset_y,
            navbar: &mut self.navbar,
            reveals: &mut self.reveals,
            rotator: &mut self.rotator,
            gallery: &mut self.gallery,
            images: &mut self.images,
            notifications: &mut self.notifications,
            window_id: &mut self.window_id,
            pending_section: &mut self.pending_section,
            now: &mut self.now,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut self.update_context(), navbar_message)
            }
            Message::Section(section_message) => {
                update::handle_section_message(&mut self.update_context(), section_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut self.update_context(), gallery_message)
            }
            Message::Hero(hero_message) => {
                update::handle_hero_message(&mut self.update_context(), hero_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Scrolled { offset_y, viewport } => {
                update::handle_scrolled(&mut self.update_context(), offset_y, viewport)
            }
            Message::WindowOpened { id, size } => {
                update::handle_window_opened(&mut self.update_context(), id, size)
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut self.update_context(), size)
            }
            Message::WindowCloseRequested(id) => {
                update::handle_window_close_requested(&mut self.update_context(), id)
            }
            Message::Frame(instant) => {
                self.now = self.now.max(instant);
                Task::none()
            }
            Message::ImageFetched { uri, result } => {
                self.images.finish(uri, result);
                Task::none()
            }
            Message::DocumentSaved { document, result } => {
                update::handle_document_saved(&mut self.update_context(), document, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            layout: &self.layout,
            reveals: &self.reveals,
            duration: self.reveal_duration,
            rotator: &self.rotator,
            navbar: &self.navbar,
            gallery: &self.gallery,
            images: &self.images,
            notifications: &self.notifications,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::ui::hero;
    use crate::ui::layout::Block;
    use std::collections::HashSet;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn boot() -> App {
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".into()),
            ..Flags::default()
        });
        app
    }

    #[test]
    fn new_reveals_the_hero_and_queues_page_images() {
        with_temp_config_dir(|_| {
            let app = boot();
            assert!(app.reveals.is_visible(Block::Hero(0)));
            assert!(!app.reveals.is_visible(Block::Project(0)));
            assert!(app.rotator.is_running());
            let distinct: HashSet<&str> = sections::image_uris().collect();
            assert_eq!(app.images.len(), distinct.len());
            assert!(!app.gallery.is_open());
        });
    }

    #[test]
    fn title_is_localized() {
        with_temp_config_dir(|_| {
            let app = boot();
            assert_eq!(app.title(), "Antonio Lupo | Data Science Portfolio");
        });
    }

    #[test]
    fn gallery_keyboard_listener_follows_open_state() {
        with_temp_config_dir(|_| {
            let mut app = boot();
            let _ = app.update(Message::Section(sections::Message::OpenGallery));
            assert_eq!(app.gallery.open_index(), Some(0));

            let _ = app.update(Message::Gallery(gallery::Message::Previous));
            assert_eq!(app.gallery.open_index(), Some(content::gallery_items().len() - 1));

            let _ = app.update(Message::Gallery(gallery::Message::Close));
            assert!(!app.gallery.is_open());

            let _ = app.update(Message::Section(sections::Message::OpenGallery));
            assert_eq!(app.gallery.open_index(), Some(content::gallery_items().len() - 1));
        });
    }

    #[test]
    fn failed_image_fetch_is_recorded_without_toast() {
        with_temp_config_dir(|_| {
            let mut app = boot();
            let uri = content::profile().image;
            let _ = app.update(Message::ImageFetched {
                uri,
                result: Err(FetchError::Status(404)),
            });
            assert!(app.images.handle(uri).is_none());
            assert_eq!(app.notifications.visible_count(), 0);
        });
    }

    #[test]
    fn frames_never_move_the_clock_backwards() {
        with_temp_config_dir(|_| {
            let mut app = boot();
            let before = app.now;
            let earlier = before - std::time::Duration::from_millis(5);
            let _ = app.update(Message::Frame(earlier));
            assert_eq!(app.now, before);
        });
    }

    #[test]
    fn hero_rotation_advances_the_word() {
        with_temp_config_dir(|_| {
            let mut app = boot();
            let first = app.rotator.current_word();
            let _ = app.update(Message::Hero(hero::Message::Rotate(Instant::now())));
            let _ = app.update(Message::Hero(hero::Message::SwapFinished(Instant::now())));
            assert_ne!(app.rotator.current_word(), first);
        });
    }

    #[test]
    fn smallest_window_reveals_project_cards_while_scrolling() {
        with_temp_config_dir(|_| {
            let mut app = boot();
            let viewport = Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32);
            let _ = app.update(Message::WindowOpened {
                id: window::Id::unique(),
                size: viewport,
            });
            let card = app
                .layout
                .block_bounds(Block::Project(0))
                .expect("project card bounds");
            let _ = app.update(Message::Scrolled {
                offset_y: card.y - 50.0,
                viewport,
            });
            assert!(app.reveals.is_visible(Block::Project(0)));
        });
    }

    #[test]
    fn close_request_releases_open_watches() {
        with_temp_config_dir(|_| {
            let mut app = boot();
            let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
            assert!(!app.rotator.is_running());
            assert!(app.reveals.is_visible(Block::Hero(0)));
            assert!(app
                .reveals
                .get(Block::Project(0))
                .is_some_and(|controller| !controller.is_watching()));
        });
    }

    #[test]
    fn invalid_settings_show_a_warning() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "reveal = [").expect("write settings");
            let app = boot();
            assert_eq!(app.notifications.visible_count(), 1);
        });
    }
}
