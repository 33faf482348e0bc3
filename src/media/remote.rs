// SPDX-License-Identifier: MPL-2.0
//! Remote images: portrait, company logos, project covers and gallery slides.
//!
//! Every image the page shows lives behind a URL. Fetches run as tasks and
//! land in an LRU cache of slots, so the view only ever reads the cache and
//! renders a placeholder until a slot is ready.
//!
//! # Usage
//!
//! ```ignore
//! if cache.begin(uri) {
//!     return Task::perform(remote::fetch(uri), move |r| Message::ImageFetched(uri, r));
//! }
//! // later
//! cache.finish(uri, result);
//! ```

use crate::config::{DEFAULT_IMAGE_CACHE_SLOTS, MAX_REMOTE_IMAGE_BYTES, USER_AGENT};
use crate::error::FetchError;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::OnceLock;

/// State of one cached image.
#[derive(Debug, Clone)]
pub enum Slot {
    Loading,
    Ready(image::Handle),
    Failed(FetchError),
}

impl Slot {
    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        match self {
            Slot::Ready(handle) => Some(handle),
            _ => None,
        }
    }
}

/// LRU cache of remote images keyed by URL.
pub struct ImageCache {
    slots: LruCache<&'static str, Slot>,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            slots: LruCache::new(capacity),
        }
    }

    /// Looks up a slot without touching the LRU order.
    #[must_use]
    pub fn get(&self, uri: &str) -> Option<&Slot> {
        self.slots.peek(uri)
    }

    /// Handle of a ready image.
    #[must_use]
    pub fn handle(&self, uri: &str) -> Option<&image::Handle> {
        self.get(uri).and_then(Slot::handle)
    }

    /// Marks `uri` as loading. Returns true if the caller should start a fetch.
    ///
    /// A uri with a slot is never requested again, whatever the slot holds.
    /// A failed image keeps its placeholder until the slot is evicted.
    pub fn begin(&mut self, uri: &'static str) -> bool {
        if self.slots.get(uri).is_some() {
            return false;
        }
        self.slots.put(uri, Slot::Loading);
        true
    }

    /// Stores the outcome of a fetch started with [`begin`](Self::begin).
    pub fn finish(&mut self, uri: &'static str, result: Result<Vec<u8>, FetchError>) {
        let slot = match result {
            Ok(bytes) => Slot::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(%uri, error = %err, "image fetch failed");
                Slot::Failed(err)
            }
        };
        self.slots.put(uri, slot);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_SLOTS)
    }
}

/// HTTP client shared by every fetch so connections are pooled.
fn client() -> Result<&'static reqwest::Client, FetchError> {
    static CLIENT: OnceLock<Result<reqwest::Client, String>> = OnceLock::new();
    CLIENT
        .get_or_init(|| {
            reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::limited(10))
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| FetchError::Network(e.clone()))
}

/// Downloads an image body, refusing anything over the size cap.
pub async fn fetch(uri: &'static str) -> Result<Vec<u8>, FetchError> {
    use futures_util::StreamExt;

    let response = client()?
        .get(uri)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    if let Some(declared) = response.content_length() {
        check_size(declared)?;
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| FetchError::Network(e.to_string()))?;
        check_size((body.len() + chunk.len()) as u64)?;
        body.extend_from_slice(&chunk);
    }

    if body.is_empty() {
        return Err(FetchError::Empty);
    }
    tracing::debug!(%uri, bytes = body.len(), "image fetched");
    Ok(body)
}

fn check_size(bytes: u64) -> Result<(), FetchError> {
    if bytes > MAX_REMOTE_IMAGE_BYTES {
        Err(FetchError::TooLarge(bytes))
    } else {
        Ok(())
    }
}
