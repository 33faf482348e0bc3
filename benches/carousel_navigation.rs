// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-event state machines.
//!
//! Measures the performance of:
//! - Carousel navigation (open, next/previous, close)
//! - Reveal observation of a full page scroll

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_folio::config::ReopenPolicy;
use iced_folio::ui::gallery::{Message, State};
use iced_folio::ui::layout::{viewport_rect, PageLayout};
use iced_folio::ui::reveal::Threshold;
use iced_folio::ui::sections::RevealSet;
use std::hint::black_box;
use std::time::Instant;

/// Benchmark a round trip through the nine-item gallery.
fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    group.bench_function("open_cycle_close", |b| {
        b.iter(|| {
            let mut gallery = State::new(9, ReopenPolicy::LastViewed);
            black_box(gallery.handle(Message::Open));
            for _ in 0..9 {
                black_box(gallery.handle(Message::Next));
            }
            for _ in 0..9 {
                black_box(gallery.handle(Message::Previous));
            }
            black_box(gallery.handle(Message::Close));
        });
    });

    group.finish();
}

/// Benchmark feeding every scroll step of the page to the reveal set.
fn bench_reveal_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_scroll");

    let layout = PageLayout::new(1280.0);
    let viewport = Size::new(1280.0, 800.0);

    group.bench_function("reveal_full_scroll", |b| {
        b.iter(|| {
            let mut reveals = RevealSet::new(Threshold::default());
            reveals.attach_all(&layout);
            let now = Instant::now();
            let mut offset = 0.0;
            while offset < layout.total_height() {
                black_box(reveals.observe(&layout, viewport_rect(offset, viewport), now));
                offset += 40.0;
            }
            black_box(reveals.all_visible());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_carousel, bench_reveal_scroll);
criterion_main!(benches);
