// SPDX-License-Identifier: MPL-2.0
//! Rectangles and interpolation shared by the trigger and the overlay.

use iced::{Point, Rectangle, Size};

/// On-screen bounds of the trigger content at the moment of opening.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OriginRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl OriginRect {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<Rectangle> for OriginRect {
    fn from(bounds: Rectangle) -> Self {
        Self::new(bounds.x, bounds.y, bounds.width, bounds.height)
    }
}

impl From<OriginRect> for Rectangle {
    fn from(origin: OriginRect) -> Self {
        Rectangle::new(
            Point::new(origin.x, origin.y),
            Size::new(origin.width, origin.height),
        )
    }
}

/// Where the open content sits and how opaque the backdrop is at progress 1.
///
/// Stays at `{0, 0, 1}` except between a drag exceeding the dismiss
/// threshold and the end of the following close animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            opacity: 1.0,
        }
    }
}

impl Target {
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Linear interpolation that extends past both ends.
///
/// Springs overshoot, so a progress slightly above 1 keeps moving the
/// output in the same direction instead of sticking at `to`.
#[must_use]
pub fn interpolate(progress: f32, from: f32, to: f32) -> f32 {
    from + (to - from) * progress
}
