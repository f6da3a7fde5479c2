// SPDX-License-Identifier: MPL-2.0
//! Configuration surface of a lightbox.

use super::spring::SpringConfig;
use crate::config::{DEFAULT_MAX_ZOOM, DEFAULT_SWIPE_TO_DISMISS};
use iced::Color;
use serde::{Deserialize, Serialize};

/// How an open overlay is presented by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Presentation {
    /// The host layers the overlay over its own view while the lightbox is open.
    #[default]
    Inline,
    /// Opening pushes a route on a [`Navigator`](super::Navigator); closing pops it.
    Navigator,
}

/// Behavior and colors of one lightbox. Rendering callbacks (header,
/// content) are supplied at view time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Props {
    /// Dragging the open content past a threshold closes it.
    pub swipe_to_dismiss: bool,
    /// Tuning of the open/close and spring-back animations.
    pub spring: SpringConfig,
    /// Backdrop color at full opacity.
    pub background_color: Color,
    /// Tint drawn over the thumbnail while pressed.
    pub underlay_color: Option<Color>,
    /// Upper bound of the content scale while open.
    pub max_zoom: f32,
    pub presentation: Presentation,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            swipe_to_dismiss: DEFAULT_SWIPE_TO_DISMISS,
            spring: SpringConfig::default(),
            background_color: Color::BLACK,
            underlay_color: None,
            max_zoom: DEFAULT_MAX_ZOOM,
            presentation: Presentation::Inline,
        }
    }
}
