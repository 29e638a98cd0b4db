// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Every outcome the user must know about (save result, gallery errors,
//! copied links, written downloads) is reported as a transient toast instead
//! of a blocking dialog.
//!
//! - Toast duration: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
