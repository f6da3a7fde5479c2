// SPDX-License-Identifier: MPL-2.0
//! Rendering of lightboxes and the shared styling infrastructure.
//!
//! - [`lightbox_view`] - Trigger thumbnail, default header and overlay layers
//! - [`widgets`] - Custom Iced widgets (pressable area reporting its bounds)
//! - [`styles`] - Centralized styling (backdrop, header, thumbnails)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod lightbox_view;
pub mod styles;
pub mod theming;
pub mod widgets;
