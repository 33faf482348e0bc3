// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Reveal**: Scroll-triggered entrance transitions
//! - **Hero**: Rotating word in the landing section
//! - **Navbar**: Scroll offset at which the bar turns compact
//! - **Remote images**: Fetch limits and cache capacity

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Fraction of a block that must be inside the viewport before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.15;

/// Minimum reveal threshold (any overlap at all).
pub const MIN_REVEAL_THRESHOLD: f32 = 0.0;

/// Maximum reveal threshold (block fully visible).
pub const MAX_REVEAL_THRESHOLD: f32 = 1.0;

/// Default duration of the entrance transition (in milliseconds).
pub const DEFAULT_REVEAL_DURATION_MS: u32 = 1000;

/// Minimum entrance transition duration (in milliseconds).
pub const MIN_REVEAL_DURATION_MS: u32 = 0;

/// Maximum entrance transition duration (in milliseconds).
pub const MAX_REVEAL_DURATION_MS: u32 = 5000;

/// Vertical distance a block travels while revealing (in pixels).
pub const REVEAL_TRAVEL_PX: f32 = 48.0;

// ==========================================================================
// Hero Defaults
// ==========================================================================

/// Default time between two word swaps (in milliseconds).
pub const DEFAULT_HERO_INTERVAL_MS: u32 = 2000;

/// Minimum time between two word swaps (in milliseconds).
pub const MIN_HERO_INTERVAL_MS: u32 = 500;

/// Maximum time between two word swaps (in milliseconds).
pub const MAX_HERO_INTERVAL_MS: u32 = 10_000;

/// Default duration of the swap-out animation (in milliseconds).
pub const DEFAULT_HERO_SWAP_MS: u32 = 300;

/// Minimum duration of the swap-out animation (in milliseconds).
pub const MIN_HERO_SWAP_MS: u32 = 50;

// ==========================================================================
// Navbar Defaults
// ==========================================================================

/// Page offset (in pixels) past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_OFFSET: f32 = 50.0;

// ==========================================================================
// Remote Image Defaults
// ==========================================================================

/// Largest image body accepted from the network (16 MB).
pub const MAX_REMOTE_IMAGE_BYTES: u64 = 16 * 1024 * 1024;

/// Number of image slots kept in the LRU cache.
pub const DEFAULT_IMAGE_CACHE_SLOTS: usize = 48;

/// User agent sent with image requests.
pub const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));
