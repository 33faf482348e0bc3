// SPDX-License-Identifier: MPL-2.0
//! End-to-end carousel walks over the real gallery content.

use iced::keyboard::{self, key::Named, Key};
use iced_folio::config::ReopenPolicy;
use iced_folio::content;
use iced_folio::ui::gallery::{message_for_key, Effect, Message, State};

fn press(state: &mut State, key: Key) -> Effect {
    match message_for_key(&key) {
        Some(message) if state.is_open() => state.handle(message),
        _ => Effect::None,
    }
}

#[test]
fn nine_item_walk_wraps_and_remembers_position() {
    let mut gallery = State::new(content::gallery_items().len(), ReopenPolicy::LastViewed);
    assert_eq!(gallery.len(), 9);

    assert_eq!(gallery.handle(Message::Open), Effect::Opened { index: 0 });
    assert_eq!(gallery.position_label(), (1, 9));

    assert_eq!(gallery.handle(Message::Previous), Effect::Moved { index: 8 });
    assert_eq!(gallery.position_label(), (9, 9));

    assert_eq!(gallery.handle(Message::Next), Effect::Moved { index: 0 });
    assert_eq!(gallery.handle(Message::Next), Effect::Moved { index: 1 });

    assert_eq!(gallery.handle(Message::Close), Effect::Closed);
    assert_eq!(gallery.open_index(), None);

    assert_eq!(gallery.handle(Message::Open), Effect::Opened { index: 1 });
}

#[test]
fn keyboard_drives_the_open_carousel_only() {
    let mut gallery = State::new(9, ReopenPolicy::LastViewed);

    assert_eq!(press(&mut gallery, Key::Named(Named::ArrowRight)), Effect::None);
    assert_eq!(gallery.current_index(), 0);

    gallery.handle(Message::Open);
    assert_eq!(
        press(&mut gallery, Key::Named(Named::ArrowRight)),
        Effect::Moved { index: 1 }
    );
    assert_eq!(
        press(&mut gallery, Key::Named(Named::ArrowLeft)),
        Effect::Moved { index: 0 }
    );
    assert_eq!(
        press(&mut gallery, Key::Character("a".into())),
        Effect::None
    );
    assert_eq!(press(&mut gallery, Key::Named(Named::Escape)), Effect::Closed);

    // Listener is gone after close: arrows change nothing.
    assert_eq!(press(&mut gallery, Key::Named(Named::ArrowLeft)), Effect::None);
    assert_eq!(gallery.current_index(), 0);
}

#[test]
fn only_navigation_keys_are_mapped() {
    assert_eq!(
        message_for_key(&Key::Named(Named::ArrowRight)),
        Some(Message::Next)
    );
    assert_eq!(
        message_for_key(&Key::Named(Named::ArrowLeft)),
        Some(Message::Previous)
    );
    assert_eq!(message_for_key(&Key::Named(Named::Escape)), Some(Message::Close));
    assert_eq!(message_for_key(&Key::Named(Named::Enter)), None);
    assert_eq!(message_for_key(&keyboard::Key::Unidentified), None);
}

#[test]
fn first_policy_restarts_from_the_beginning() {
    let mut gallery = State::new(9, ReopenPolicy::First);
    gallery.handle(Message::Open);
    gallery.handle(Message::Next);
    gallery.handle(Message::Next);
    gallery.handle(Message::Close);
    assert_eq!(gallery.handle(Message::Open), Effect::Opened { index: 0 });
}

#[test]
fn empty_gallery_never_opens() {
    let mut gallery = State::new(0, ReopenPolicy::LastViewed);
    assert_eq!(gallery.handle(Message::Open), Effect::None);
    assert!(!gallery.is_open());
    assert_eq!(gallery.handle(Message::Next), Effect::None);
}

#[test]
fn copy_link_points_at_the_current_item() {
    let items = content::gallery_items();
    let mut gallery = State::new(items.len(), ReopenPolicy::LastViewed);
    assert_eq!(gallery.handle(Message::CopyLink), Effect::None);

    gallery.handle(Message::Open);
    gallery.handle(Message::Previous);
    let Effect::CopyLink { index } = gallery.handle(Message::CopyLink) else {
        panic!("expected a copy effect");
    };
    assert_eq!(index, items.len() - 1);
    assert!(items[index].link.starts_with("https://"));
}

/// Opens a carousel of `len` items and walks forward to `start`.
fn open_at(len: usize, start: usize) -> State {
    let mut gallery = State::new(len, ReopenPolicy::LastViewed);
    gallery.handle(Message::Open);
    for _ in 0..start {
        gallery.handle(Message::Next);
    }
    assert_eq!(gallery.open_index(), Some(start));
    gallery
}

#[test]
fn literal_nine_item_keyboard_scenario() {
    let mut gallery = State::new(9, ReopenPolicy::LastViewed);
    assert_eq!(gallery.handle(Message::Open), Effect::Opened { index: 0 });

    for _ in 0..8 {
        press(&mut gallery, Key::Named(Named::ArrowRight));
    }
    assert_eq!(gallery.open_index(), Some(8));

    assert_eq!(
        press(&mut gallery, Key::Named(Named::ArrowRight)),
        Effect::Moved { index: 0 }
    );
    assert_eq!(
        press(&mut gallery, Key::Named(Named::ArrowLeft)),
        Effect::Moved { index: 8 }
    );
    assert_eq!(press(&mut gallery, Key::Named(Named::Escape)), Effect::Closed);
    assert!(!gallery.is_open());

    assert_eq!(gallery.handle(Message::Open), Effect::Opened { index: 8 });
}

#[test]
fn index_stays_in_range_for_any_walk() {
    // Fixed-seed xorshift32 walk.
    let mut seed: u32 = 0x9e37_79b9;
    for len in 1..=12 {
        let mut gallery = State::new(len, ReopenPolicy::LastViewed);
        gallery.handle(Message::Open);
        for _ in 0..200 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let message = if seed % 2 == 0 {
                Message::Next
            } else {
                Message::Previous
            };
            gallery.handle(message);
            let index = gallery.open_index().expect("still open");
            assert!(index < len, "index {index} out of range for {len} items");
        }
    }
}

#[test]
fn len_steps_forward_return_to_the_start() {
    for len in 1..=12 {
        for start in 0..len {
            let mut gallery = open_at(len, start);
            for _ in 0..len {
                gallery.handle(Message::Next);
            }
            assert_eq!(gallery.open_index(), Some(start), "len {len} start {start}");
        }
    }
}

#[test]
fn previous_undoes_next_and_next_undoes_previous() {
    for len in 1..=12 {
        for start in 0..len {
            let mut gallery = open_at(len, start);
            gallery.handle(Message::Next);
            gallery.handle(Message::Previous);
            assert_eq!(gallery.open_index(), Some(start), "len {len} start {start}");

            gallery.handle(Message::Previous);
            gallery.handle(Message::Next);
            assert_eq!(gallery.open_index(), Some(start), "len {len} start {start}");
        }
    }
}

#[test]
fn single_item_wraps_onto_itself() {
    let mut gallery = State::new(1, ReopenPolicy::LastViewed);
    assert_eq!(gallery.handle(Message::Open), Effect::Opened { index: 0 });
    assert_eq!(gallery.handle(Message::Next), Effect::Moved { index: 0 });
    assert_eq!(gallery.handle(Message::Previous), Effect::Moved { index: 0 });
    assert_eq!(gallery.position_label(), (1, 1));
    assert_eq!(gallery.handle(Message::Close), Effect::Closed);
    assert_eq!(gallery.handle(Message::Open), Effect::Opened { index: 0 });
}

#[test]
fn closed_carousel_ignores_navigation_for_every_size() {
    for len in 0..=12 {
        let mut gallery = State::new(len, ReopenPolicy::LastViewed);
        for message in [Message::Next, Message::Previous, Message::Close] {
            assert_eq!(gallery.handle(message), Effect::None, "len {len}");
        }
        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), 0);
    }
}
