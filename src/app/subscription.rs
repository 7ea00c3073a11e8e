// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the gallery.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick driving toast timers.
///
/// Ticks only run while a toast waits on a timer, so an idle window does not
/// wake up.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
