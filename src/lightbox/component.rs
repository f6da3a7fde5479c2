// SPDX-License-Identifier: MPL-2.0
//! A thumbnail paired with its overlay.
//!
//! The trigger side records where the thumbnail sits when pressed and
//! whether the host presents the overlay; the overlay side runs the
//! animations and gestures. Lifecycle notifications surface as [`Event`]s
//! in this order for every open/close cycle: `OnOpen`, `DidOpen`
//! (only if the opening completes), `WillClose`, `OnClose`.

use super::navigator::{LightboxId, Navigator};
use super::overlay::{self, Effect, Frame, Phase};
use super::props::Props;
use super::trigger;
use crate::error::{Error, Result};
use iced::Rectangle;

/// Messages for a lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Thumbnail released after a short press, with its measured bounds.
    Pressed(Rectangle),
    /// Thumbnail held past the long-press duration.
    LongPressed,
    /// Close request from the header's close control.
    Close,
    Overlay(overlay::Message),
}

/// Lifecycle notifications for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OnOpen,
    DidOpen,
    WillClose,
    OnClose,
    LongPress,
}

/// Lightbox state.
#[derive(Debug, Clone)]
pub struct Lightbox {
    id: LightboxId,
    props: Props,
    trigger: trigger::State,
    overlay: overlay::State,
}

impl Lightbox {
    #[must_use]
    pub fn new(id: LightboxId, props: Props) -> Self {
        Self {
            id,
            props,
            trigger: trigger::State::default(),
            overlay: overlay::State::new(&props),
        }
    }

    #[must_use]
    pub fn id(&self) -> LightboxId {
        self.id
    }

    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn set_props(&mut self, props: Props) {
        self.overlay.configure(&props);
        self.props = props;
    }

    /// Whether the host asked for the overlay and has not been told it closed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.trigger.is_open()
    }

    /// Whether the overlay must be rendered.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.overlay.is_presented()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.overlay.is_animating()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.overlay.phase()
    }

    #[must_use]
    pub fn overlay(&self) -> &overlay::State {
        &self.overlay
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.overlay.frame()
    }

    /// Handle a lightbox message. `navigator` must be provided when the
    /// props ask for navigator presentation.
    pub fn update(
        &mut self,
        message: Message,
        navigator: Option<&mut dyn Navigator>,
    ) -> Vec<Event> {
        let events = match message {
            Message::Pressed(bounds) => {
                if self.overlay.is_presented() {
                    return Vec::new();
                }
                if !self.overlay.has_window() {
                    tracing::warn!(lightbox = self.id, "press ignored until the window size is known");
                    return Vec::new();
                }
                let origin = self.trigger.activate(self.id, bounds, navigator);
                self.overlay.handle(overlay::Message::Open(origin));
                vec![Event::OnOpen]
            }
            Message::LongPressed => vec![Event::LongPress],
            Message::Close => self.apply(overlay::Message::Close, navigator),
            Message::Overlay(msg) => self.apply(msg, navigator),
        };

        for event in &events {
            tracing::debug!(lightbox = self.id, ?event, "lightbox lifecycle");
        }
        events
    }

    /// Imperative close from the host.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::DeprecatedClose`]; the overlay is left as is.
    #[deprecated(note = "send `Message::Close` from the header instead")]
    pub fn close(&self) -> Result<()> {
        tracing::warn!(lightbox = self.id, "{}", crate::error::DEPRECATED_CLOSE_MESSAGE);
        Err(Error::DeprecatedClose)
    }

    fn apply(&mut self, msg: overlay::Message, navigator: Option<&mut dyn Navigator>) -> Vec<Event> {
        match self.overlay.handle(msg) {
            Effect::None => Vec::new(),
            Effect::DidOpen => vec![Event::DidOpen],
            Effect::WillClose => vec![Event::WillClose],
            Effect::OnClose => {
                self.trigger.on_close(self.id, navigator);
                vec![Event::OnClose]
            }
        }
    }
}
