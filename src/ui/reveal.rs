// SPDX-License-Identifier: MPL-2.0
//! One-shot visibility reveal for page blocks.
//!
//! A [`RevealController`] watches a single block. It starts `Unattached`,
//! registers its watch once the block's bounds are known (`attach`), and
//! flips to `Triggered` the first time the visible fraction of the block
//! reaches the [`Threshold`]. After that the watch is gone and later scroll
//! positions are ignored. Tearing down a block that never became visible
//! moves it to `Detached`.
//!
//! ```text
//! Unattached --attach--> Watching --ratio >= threshold--> Triggered
//!                            |
//!                            +--teardown--> Detached
//! ```
//!
//! The controller also drives the entrance transition: once triggered,
//! [`RevealController::appearance`] maps elapsed time to an opacity and a
//! vertical offset with an ease-out curve.

use crate::config::{
    DEFAULT_REVEAL_DURATION_MS, DEFAULT_REVEAL_THRESHOLD, MAX_REVEAL_DURATION_MS,
    MAX_REVEAL_THRESHOLD, MIN_REVEAL_DURATION_MS, MIN_REVEAL_THRESHOLD, REVEAL_TRAVEL_PX,
};
use iced::Rectangle;
use std::time::{Duration, Instant};

/// Fraction of a block that must be inside the viewport to reveal it.
///
/// # Example
///
/// ```
/// use iced_folio::ui::reveal::Threshold;
///
/// assert_eq!(Threshold::default().value(), 0.15);
///
/// // Values outside 0.0..=1.0 are clamped
/// assert_eq!(Threshold::new(1.7).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f32);

impl Threshold {
    /// Creates a threshold, clamping to `0.0..=1.0`. NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_REVEAL_THRESHOLD, MAX_REVEAL_THRESHOLD))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when `ratio` counts as visible.
    ///
    /// A zero threshold still needs some overlap.
    #[must_use]
    pub fn is_reached_by(self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_THRESHOLD)
    }
}

/// Length of the entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDuration(u32);

impl RevealDuration {
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_REVEAL_DURATION_MS, MAX_REVEAL_DURATION_MS))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for RevealDuration {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_DURATION_MS)
    }
}

/// Lifecycle of a reveal watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The block has no bounds yet; nothing is watched.
    Unattached,
    /// The watch is registered and scroll positions are evaluated.
    Watching,
    /// The block became visible at the given instant. Final.
    Triggered(Instant),
    /// The block was torn down before it became visible. Final.
    Detached,
}

/// Outcome of feeding one intersection ratio to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The controller is not watching; the ratio was dropped.
    Ignored,
    /// Still watching, threshold not reached.
    Pending,
    /// This observation triggered the reveal and released the watch.
    Triggered,
}

/// Rendering parameters of a block at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f32,
    /// Downward offset in pixels, shrinking to zero as the block settles.
    pub offset_y: f32,
}

impl Appearance {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset_y: REVEAL_TRAVEL_PX,
    };

    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct RevealController {
    threshold: Threshold,
    phase: Phase,
    releases: u32,
}

impl RevealController {
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            phase: Phase::Unattached,
            releases: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// The visible signal. False until triggered, true forever after.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Triggered(_))
    }

    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.phase == Phase::Watching
    }

    /// Number of times the watch has been released (0 or 1).
    #[must_use]
    pub fn releases(&self) -> u32 {
        self.releases
    }

    /// Registers the watch once the block's bounds are known.
    ///
    /// Returns false if a watch was already registered or the controller
    /// reached a final phase.
    pub fn attach(&mut self) -> bool {
        if self.phase != Phase::Unattached {
            return false;
        }
        self.phase = Phase::Watching;
        true
    }

    /// Feeds the block's current intersection ratio.
    pub fn observe(&mut self, ratio: f32, now: Instant) -> Observation {
        if self.phase != Phase::Watching {
            return Observation::Ignored;
        }
        if !self.threshold.is_reached_by(ratio) {
            return Observation::Pending;
        }
        self.phase = Phase::Triggered(now);
        self.release();
        Observation::Triggered
    }

    /// Releases the watch if it is still registered.
    ///
    /// Safe to call in any phase; a triggered block stays visible.
    pub fn teardown(&mut self) {
        match self.phase {
            Phase::Watching => {
                self.phase = Phase::Detached;
                self.release();
            }
            Phase::Unattached => self.phase = Phase::Detached,
            Phase::Triggered(_) | Phase::Detached => {}
        }
    }

    fn release(&mut self) {
        self.releases += 1;
    }

    /// Opacity and offset of a block revealed by this controller, `delay`
    /// after the trigger, over `duration`.
    #[must_use]
    pub fn appearance(&self, now: Instant, delay: Duration, duration: RevealDuration) -> Appearance {
        let Phase::Triggered(at) = self.phase else {
            return Appearance::HIDDEN;
        };
        let progress = ease_out(progress_at(at + delay, now, duration.as_duration()));
        Appearance {
            opacity: progress,
            offset_y: REVEAL_TRAVEL_PX * (1.0 - progress),
        }
    }

    /// Returns true while any block delayed by up to `max_delay` is still moving.
    #[must_use]
    pub fn is_animating(&self, now: Instant, max_delay: Duration, duration: RevealDuration) -> bool {
        match self.phase {
            Phase::Triggered(at) => now < at + max_delay + duration.as_duration(),
            _ => false,
        }
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(Threshold::default())
    }
}

/// Fraction of `target` covered by `viewport`, in `0.0..=1.0`.
///
/// Degenerate targets (zero area) report 0.
#[must_use]
pub fn intersection_ratio(target: Rectangle, viewport: Rectangle) -> f32 {
    let area = target.width * target.height;
    if area <= 0.0 {
        return 0.0;
    }
    target
        .intersection(&viewport)
        .map_or(0.0, |overlap| (overlap.width * overlap.height / area).clamp(0.0, 1.0))
}

fn progress_at(start: Instant, now: Instant, duration: Duration) -> f32 {
    if now <= start {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.duration_since(start).as_secs_f32();
    (elapsed / duration.as_secs_f32()).min(1.0)
}

/// Cubic ease-out.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
