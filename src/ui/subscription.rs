// SPDX-License-Identifier: MPL-2.0
//! Periodic tick that drives auto-dismiss timers.

use crate::config::TICK_INTERVAL_MS;
use crate::toast::{Manager, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription while any auto-dismiss timer is live.
///
/// Sticky toasts and pending toasts need no tick: pending timers only start
/// on promotion, which happens inside a manager operation.
pub fn create_tick_subscription(manager: &Manager) -> Subscription<Message> {
    if manager.has_active_timers() {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
