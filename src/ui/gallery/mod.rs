// SPDX-License-Identifier: MPL-2.0
//! Visualization gallery carousel.
//!
//! The carousel is either `Closed` or `Open(index)`. Navigation wraps in
//! both directions and is ignored while closed. The keyboard listener
//! (ArrowRight, ArrowLeft, Escape) is a subscription that only exists while
//! the carousel is open, so closing it also removes the listener.
//!
//! The index survives close/reopen unless the reopen policy asks for the
//! first item. An empty carousel never opens.

pub mod view;

use crate::config::ReopenPolicy;
use iced::{event, keyboard, Subscription};

pub use view::{view, ViewContext};

/// Navigation triggers handled by the carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Gallery card activated.
    Open,
    /// Close button or Escape.
    Close,
    /// Forward button or ArrowRight.
    Next,
    /// Back button or ArrowLeft.
    Previous,
    /// "View original post" activated for the current item.
    CopyLink,
}

/// Effects produced by carousel transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The carousel opened on the given item.
    Opened { index: usize },
    /// The current item changed while open.
    Moved { index: usize },
    Closed,
    /// Copy the current item's source link.
    CopyLink { index: usize },
}

#[derive(Debug, Clone)]
pub struct State {
    len: usize,
    is_open: bool,
    current_index: usize,
    reopen_at: ReopenPolicy,
}

impl State {
    /// Creates a closed carousel over `len` items.
    #[must_use]
    pub fn new(len: usize, reopen_at: ReopenPolicy) -> Self {
        Self {
            len,
            is_open: false,
            current_index: 0,
            reopen_at,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the item shown, or `None` while closed.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.is_open.then_some(self.current_index)
    }

    /// One-based position and item count for the `3 / 9` indicator.
    #[must_use]
    pub fn position_label(&self) -> (usize, usize) {
        (self.current_index + 1, self.len)
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open => self.open(),
            Message::Close => self.close(),
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::CopyLink => match self.open_index() {
                Some(index) => Effect::CopyLink { index },
                None => Effect::None,
            },
        }
    }

    pub fn open(&mut self) -> Effect {
        if self.is_open {
            return Effect::None;
        }
        if self.is_empty() {
            tracing::debug!("gallery has no items, ignoring open");
            return Effect::None;
        }
        if self.reopen_at == ReopenPolicy::First {
            self.current_index = 0;
        }
        self.is_open = true;
        tracing::debug!(index = self.current_index, "gallery opened");
        Effect::Opened {
            index: self.current_index,
        }
    }

    pub fn close(&mut self) -> Effect {
        if !self.is_open {
            return Effect::None;
        }
        self.is_open = false;
        tracing::debug!(index = self.current_index, "gallery closed");
        Effect::Closed
    }

    pub fn next(&mut self) -> Effect {
        if !self.is_open {
            return Effect::None;
        }
        self.current_index = (self.current_index + 1) % self.len;
        Effect::Moved {
            index: self.current_index,
        }
    }

    pub fn previous(&mut self) -> Effect {
        if !self.is_open {
            return Effect::None;
        }
        self.current_index = (self.current_index + self.len - 1) % self.len;
        Effect::Moved {
            index: self.current_index,
        }
    }

    /// Keyboard listener, present only while the carousel is open.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.is_open {
            return Subscription::none();
        }
        event::listen_with(|event, _status, _window| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                message_for_key(&key)
            }
            _ => None,
        })
    }
}

/// Maps a pressed key to a carousel message.
#[must_use]
pub fn message_for_key(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::Next),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyboard::key::Named;

    fn press(state: &mut State, named: Named) -> Effect {
        match message_for_key(&keyboard::Key::Named(named)) {
            Some(message) => state.handle(message),
            None => Effect::None,
        }
    }

    #[test]
    fn starts_closed_at_first_item() {
        let state = State::new(9, ReopenPolicy::LastViewed);
        assert!(!state.is_open());
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn open_emits_opened_effect() {
        let mut state = State::new(3, ReopenPolicy::LastViewed);
        assert_eq!(state.handle(Message::Open), Effect::Opened { index: 0 });
        assert_eq!(state.handle(Message::Open), Effect::None);
    }

    #[test]
    fn next_wraps_to_start() {
        let mut state = State::new(3, ReopenPolicy::LastViewed);
        state.open();
        state.next();
        state.next();
        assert_eq!(state.next(), Effect::Moved { index: 0 });
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut state = State::new(3, ReopenPolicy::LastViewed);
        state.open();
        assert_eq!(state.previous(), Effect::Moved { index: 2 });
    }

    #[test]
    fn navigation_while_closed_is_noop() {
        let mut state = State::new(4, ReopenPolicy::LastViewed);
        assert_eq!(state.next(), Effect::None);
        assert_eq!(state.previous(), Effect::None);
        assert_eq!(press(&mut state, Named::Escape), Effect::None);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_open());
    }

    #[test]
    fn key_after_close_mutates_nothing() {
        let mut state = State::new(4, ReopenPolicy::LastViewed);
        state.open();
        press(&mut state, Named::ArrowRight);
        press(&mut state, Named::Escape);
        assert!(!state.is_open());

        press(&mut state, Named::ArrowRight);
        press(&mut state, Named::ArrowLeft);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn first_policy_resets_index_on_reopen() {
        let mut state = State::new(5, ReopenPolicy::First);
        state.open();
        state.next();
        state.next();
        state.close();
        assert_eq!(state.open(), Effect::Opened { index: 0 });
    }

    #[test]
    fn empty_carousel_never_opens() {
        let mut state = State::new(0, ReopenPolicy::LastViewed);
        assert_eq!(state.open(), Effect::None);
        assert!(!state.is_open());
        assert_eq!(state.next(), Effect::None);
        assert_eq!(state.previous(), Effect::None);
    }

    #[test]
    fn copy_link_only_while_open() {
        let mut state = State::new(2, ReopenPolicy::LastViewed);
        assert_eq!(state.handle(Message::CopyLink), Effect::None);
        state.open();
        state.next();
        assert_eq!(state.handle(Message::CopyLink), Effect::CopyLink { index: 1 });
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(message_for_key(&keyboard::Key::Named(Named::Enter)), None);
        assert_eq!(
            message_for_key(&keyboard::Key::Character("l".into())),
            None
        );
    }

    #[test]
    fn position_label_is_one_based() {
        let mut state = State::new(9, ReopenPolicy::LastViewed);
        state.open();
        state.previous();
        assert_eq!(state.position_label(), (9, 9));
    }
}
