// SPDX-License-Identifier: MPL-2.0
//! Lightbox core: state machines and gesture math, independent of rendering.
//!
//! A [`Lightbox`] pairs a thumbnail trigger with a full-window overlay that
//! springs open from the thumbnail's rectangle, can be dragged away, and can
//! be zoomed once open.

pub mod component;
pub mod drag;
pub mod geometry;
pub mod navigator;
pub mod overlay;
pub mod props;
pub mod spring;
pub mod trigger;
pub mod zoom;

pub use component::{Event, Lightbox, Message};
pub use geometry::{OriginRect, Target};
pub use navigator::{LightboxId, Navigator, Route, RouteStack};
pub use overlay::{Frame, Phase};
pub use props::{Presentation, Props};
pub use spring::{Spring, SpringConfig, SpringStatus};
pub use zoom::{Scale, ViewTransform};
