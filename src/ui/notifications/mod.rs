// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Link copies, document exports, failed fetches and settings problems are
//! reported as toasts in the bottom-right corner.
//!
//! - Success/info toasts last 3s, warnings 5s, errors stay until dismissed
//! - At most 3 toasts are visible; others wait in a queue
//!
//! ```ignore
//! manager.push(Notification::info("notification-link-copied"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
