// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a tap-to-expand lightbox for the Iced GUI framework.
//!
//! A thumbnail springs open into a full-window overlay, can be dragged away
//! to dismiss it, and can be zoomed while open. The state machines live in
//! [`lightbox`] and do not depend on rendering; [`ui`] draws them and [`app`]
//! is a small gallery built on top.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod lightbox;
pub mod ui;
