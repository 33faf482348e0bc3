// SPDX-License-Identifier: MPL-2.0
//! Toast queue: at most three on screen, the rest wait their turn.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, or queues it when three toasts are up.
    ///
    /// A toast with the same text replaces the older one, so repeated copy
    /// actions do not stack identical toasts.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(key = notification.message_key(), "notification"),
            Severity::Error => tracing::error!(key = notification.message_key(), "notification"),
            Severity::Success | Severity::Info => {}
        }

        self.visible.retain(|shown| !shown.says_same_as(&notification));
        self.queue.retain(|queued| !queued.says_same_as(&notification));

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops every visible toast whose lifetime has run out.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// True while some visible toast will expire on its own; drives the tick
    /// subscription.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.visible.iter().any(|n| n.severity().lifetime().is_some())
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.needs_tick());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("toast-{i}")));
        }
        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first);
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::error(format!("more-{i}")));
        }
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        assert!(!manager.dismiss(Notification::info("gone").id()));
    }

    #[test]
    fn identical_toast_replaces_previous() {
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-link-copied"));
        manager.push(Notification::info("notification-link-copied"));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn tick_expires_info_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::info("copied"));
        manager.push(Notification::error("failed"));
        assert!(manager.needs_tick());

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(4)));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().map(|n| n.message_key()), Some("failed"));
        assert!(!manager.needs_tick());
    }
}
