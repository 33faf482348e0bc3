// SPDX-License-Identifier: MPL-2.0
//! Rotating word in the hero headline ("and I love ___").
//!
//! While running, every interval the current word slides out for the swap
//! duration, then the next word takes its place. The timers are
//! subscriptions that only exist while the rotator runs, so a stopped
//! rotator costs nothing and ignores stray ticks.

use crate::config::{
    HeroConfig, DEFAULT_HERO_INTERVAL_MS, DEFAULT_HERO_SWAP_MS, MAX_HERO_INTERVAL_MS,
    MIN_HERO_INTERVAL_MS, MIN_HERO_SWAP_MS,
};
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Interval and swap durations, validated together.
///
/// # Example
///
/// ```
/// use iced_folio::ui::hero::HeroTiming;
///
/// let timing = HeroTiming::new(100, 5000);
/// assert_eq!(timing.interval().as_millis(), 500); // clamped to min
/// assert!(timing.swap() < timing.interval());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroTiming {
    interval_ms: u32,
    swap_ms: u32,
}

impl HeroTiming {
    #[must_use]
    pub fn new(interval_ms: u32, swap_ms: u32) -> Self {
        let interval_ms = interval_ms.clamp(MIN_HERO_INTERVAL_MS, MAX_HERO_INTERVAL_MS);
        let swap_ms = swap_ms.clamp(MIN_HERO_SWAP_MS, interval_ms - 1);
        Self {
            interval_ms,
            swap_ms,
        }
    }

    #[must_use]
    pub fn from_config(config: &HeroConfig) -> Self {
        Self::new(
            config.interval_ms.unwrap_or(DEFAULT_HERO_INTERVAL_MS),
            config.swap_ms.unwrap_or(DEFAULT_HERO_SWAP_MS),
        )
    }

    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }

    #[must_use]
    pub fn swap(self) -> Duration {
        Duration::from_millis(u64::from(self.swap_ms))
    }
}

impl Default for HeroTiming {
    fn default() -> Self {
        Self::new(DEFAULT_HERO_INTERVAL_MS, DEFAULT_HERO_SWAP_MS)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Interval elapsed: start sliding the current word out.
    Rotate(Instant),
    /// Swap duration elapsed: show the next word.
    SwapFinished(Instant),
}

#[derive(Debug, Clone)]
pub struct Rotator {
    words: &'static [&'static str],
    index: usize,
    timing: HeroTiming,
    running: bool,
    swap_started: Option<Instant>,
}

impl Rotator {
    #[must_use]
    pub fn new(words: &'static [&'static str], timing: HeroTiming) -> Self {
        Self {
            words,
            index: 0,
            timing,
            running: false,
            swap_started: None,
        }
    }

    #[must_use]
    pub fn current_word(&self) -> &'static str {
        self.words.get(self.index).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_swapping(&self) -> bool {
        self.swap_started.is_some()
    }

    /// Starts rotating. A single word never rotates.
    pub fn start(&mut self) {
        if self.running || self.words.len() < 2 {
            return;
        }
        self.running = true;
        tracing::debug!(word = self.current_word(), "hero rotator started");
    }

    /// Stops rotating and cancels a swap in progress. The word shown stays.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.swap_started = None;
        tracing::debug!(word = self.current_word(), "hero rotator stopped");
    }

    pub fn update(&mut self, message: Message) {
        if !self.running {
            return;
        }
        match message {
            Message::Rotate(now) => {
                if self.swap_started.is_none() {
                    self.swap_started = Some(now);
                }
            }
            Message::SwapFinished(_) => {
                if self.swap_started.take().is_some() {
                    self.index = (self.index + 1) % self.words.len();
                }
            }
        }
    }

    /// Fraction of the swap-out completed at `now`, 0.0 when idle.
    #[must_use]
    pub fn swap_progress(&self, now: Instant) -> f32 {
        let Some(started) = self.swap_started else {
            return 0.0;
        };
        let swap = self.timing.swap().as_secs_f32();
        (now.saturating_duration_since(started).as_secs_f32() / swap).clamp(0.0, 1.0)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if !self.running {
            return Subscription::none();
        }
        let rotate = time::every(self.timing.interval()).map(Message::Rotate);
        if self.is_swapping() {
            Subscription::batch([
                rotate,
                time::every(self.timing.swap()).map(Message::SwapFinished),
            ])
        } else {
            rotate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["data", "stats", "machine learning", "football"];

    fn running() -> Rotator {
        let mut rotator = Rotator::new(WORDS, HeroTiming::default());
        rotator.start();
        rotator
    }

    fn full_cycle(rotator: &mut Rotator) {
        let now = Instant::now();
        rotator.update(Message::Rotate(now));
        rotator.update(Message::SwapFinished(now));
    }

    #[test]
    fn starts_on_first_word_and_stopped() {
        let rotator = Rotator::new(WORDS, HeroTiming::default());
        assert_eq!(rotator.current_word(), "data");
        assert!(!rotator.is_running());
    }

    #[test]
    fn rotate_then_swap_advances_word() {
        let mut rotator = running();
        rotator.update(Message::Rotate(Instant::now()));
        assert!(rotator.is_swapping());
        assert_eq!(rotator.current_word(), "data");

        rotator.update(Message::SwapFinished(Instant::now()));
        assert!(!rotator.is_swapping());
        assert_eq!(rotator.current_word(), "stats");
    }

    #[test]
    fn wraps_after_last_word() {
        let mut rotator = running();
        for _ in 0..WORDS.len() {
            full_cycle(&mut rotator);
        }
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn ticks_while_stopped_are_ignored() {
        let mut rotator = running();
        rotator.update(Message::Rotate(Instant::now()));
        rotator.stop();
        assert!(!rotator.is_swapping());

        rotator.update(Message::SwapFinished(Instant::now()));
        rotator.update(Message::Rotate(Instant::now()));
        assert_eq!(rotator.current_word(), "data");
    }

    #[test]
    fn swap_finished_without_swap_does_nothing() {
        let mut rotator = running();
        rotator.update(Message::SwapFinished(Instant::now()));
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn single_word_never_starts() {
        let mut rotator = Rotator::new(&["data"], HeroTiming::default());
        rotator.start();
        assert!(!rotator.is_running());
    }

    #[test]
    fn empty_word_list_renders_blank() {
        let rotator = Rotator::new(&[], HeroTiming::default());
        assert_eq!(rotator.current_word(), "");
    }

    #[test]
    fn swap_progress_tracks_elapsed_time() {
        let mut rotator = running();
        let start = Instant::now();
        assert_eq!(rotator.swap_progress(start), 0.0);
        rotator.update(Message::Rotate(start));
        let half = rotator.swap_progress(start + Duration::from_millis(150));
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(rotator.swap_progress(start + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn timing_keeps_swap_below_interval() {
        let timing = HeroTiming::new(600, 900);
        assert!(timing.swap() < timing.interval());
        assert_eq!(HeroTiming::new(50_000, 300).interval().as_millis(), 10_000);
    }
}
