// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, window, Subscription};

/// Window input needed by an overlay. Resizes are always routed so the
/// overlay knows the window size before it opens.
pub fn create_event_subscription(overlay_presented: bool) -> Subscription<Message> {
    if overlay_presented {
        event::listen_with(|event, _status, _window_id| match &event {
            event::Event::Window(window::Event::Resized(_))
            | event::Event::Mouse(_)
            | event::Event::Touch(_)
            | event::Event::Keyboard(_) => Some(Message::RawEvent(event)),
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, _window_id| match &event {
            event::Event::Window(window::Event::Resized(_)) => Some(Message::RawEvent(event)),
            _ => None,
        })
    }
}

/// Frame ticks, only while something animates.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Tick)
    } else {
        Subscription::none()
    }
}
