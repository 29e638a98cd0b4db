// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Notification auto-dismiss tick period.
const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Ticks only while toasts are on screen or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_PERIOD).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
