// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are rebuilt after every update, so each one exists only
//! while its condition holds: the gallery keyboard listener while the
//! carousel is open, frame ticks while something animates, and the toast
//! tick while a toast can expire.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{event, time, window, Subscription};
use std::time::Duration;

const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Window lifecycle events: geometry changes and close requests.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowOpened {
            id: window_id,
            size,
        }),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Redraw ticks while a reveal slides in or the hero word swaps.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Periodic tick so timed toasts can auto-dismiss.
pub fn create_tick_subscription(has_timed_notifications: bool) -> Subscription<Message> {
    if has_timed_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|instant| Message::Notification(NotificationMessage::Tick(instant)))
    } else {
        Subscription::none()
    }
}
