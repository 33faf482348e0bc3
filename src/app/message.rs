// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::content::Document;
use crate::error::{DocumentError, FetchError};
use crate::ui::gallery;
use crate::ui::hero;
use crate::ui::layout::SectionId;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use iced::{window, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by [`super::App::update`]. The variants fan
/// out to feature-specific handlers while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Section(sections::Message),
    Gallery(gallery::Message),
    Hero(hero::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrolled; `viewport` is the visible size of the scrollable.
    Scrolled { offset_y: f32, viewport: Size },
    WindowOpened { id: window::Id, size: Size },
    WindowResized(Size),
    /// The user asked to close the window; the app closes it after cleanup.
    WindowCloseRequested(window::Id),
    /// Animation frame while a reveal or a word swap is running.
    Frame(Instant),
    ImageFetched {
        uri: &'static str,
        result: Result<Vec<u8>, FetchError>,
    },
    /// Outcome of a document export. `Ok(None)` means the dialog was cancelled.
    DocumentSaved {
        document: Document,
        result: Result<Option<PathBuf>, DocumentError>,
    },
}

/// Runtime flags passed in from the launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `it`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom translations.
    pub i18n_dir: Option<String>,
    /// Optional data directory override.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Section to scroll to once the window is up.
    pub section: Option<SectionId>,
}
