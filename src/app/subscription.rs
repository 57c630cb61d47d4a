// SPDX-License-Identifier: MPL-2.0
//! Subscription management for the workspace.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between progress overlay animation frames.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Periodic tick while at least one progress overlay is visible.
pub fn create_tick_subscription(overlay_visible: bool) -> Subscription<Message> {
    if overlay_visible {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
