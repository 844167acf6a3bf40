// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive, temporary messages used for the intercepted navigation
//! targets (upload, notifications) and session changes (sign-in/out).
//!
//! - [`notification`] - core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - toast widget for rendering notifications
//!
//! Toast duration is ~3s for success/info and ~5s for warnings; errors
//! require a manual dismiss. At most three toasts are visible at once,
//! the rest queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
