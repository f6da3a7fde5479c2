// SPDX-License-Identifier: MPL-2.0
//! Open intent and origin rectangle owned by the thumbnail side.

use super::geometry::OriginRect;
use super::navigator::{self, LightboxId, Navigator, Route};
use iced::Rectangle;

/// Trigger state: whether the host asked for the overlay and from where.
#[derive(Debug, Clone, Default)]
pub struct State {
    is_open: bool,
    origin: OriginRect,
}

impl State {
    /// Records the measured bounds and marks the lightbox open. With a
    /// navigator, also pushes a route for it.
    pub fn activate(
        &mut self,
        id: LightboxId,
        bounds: Rectangle,
        navigator: Option<&mut dyn Navigator>,
    ) -> OriginRect {
        self.origin = OriginRect::from(bounds);
        self.is_open = true;

        if let Some(navigator) = navigator {
            navigator::push(
                navigator,
                Route {
                    lightbox: id,
                    origin: self.origin,
                },
            );
        }

        self.origin
    }

    /// Marks the lightbox closed, popping its route when navigator-driven.
    pub fn on_close(&mut self, id: LightboxId, navigator: Option<&mut dyn Navigator>) {
        self.is_open = false;

        if let Some(navigator) = navigator {
            if navigator::pop(navigator, id).is_none() {
                tracing::warn!(lightbox = id, "no route to pop on close");
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn origin(&self) -> OriginRect {
        self.origin
    }
}
