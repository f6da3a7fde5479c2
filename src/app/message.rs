// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::lightbox::{self, LightboxId};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Message for the lightbox with the given id.
    Lightbox(LightboxId, lightbox::Message),
    /// Window input, routed to presented overlays.
    RawEvent(iced::Event),
    /// Animation frame while an overlay is moving.
    Tick(Instant),
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LIGHTBOX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Present lightboxes through the route stack instead of inline.
    pub navigator: bool,
    /// Image files or directories to show.
    pub paths: Vec<PathBuf>,
}
