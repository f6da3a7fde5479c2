// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[lightbox]` - Overlay behavior (springs, dismiss, zoom, colors)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ICED_LIGHTBOX_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.lightbox.swipe_to_dismiss = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::lightbox::{Presentation, Props, SpringConfig};
use crate::ui::theming::ThemeMode;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Lightbox overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Whether dragging the open content far enough closes the overlay.
    #[serde(
        default = "default_swipe_to_dismiss",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_to_dismiss: Option<bool>,

    /// Spring tension for open/close animations.
    #[serde(default = "default_tension", skip_serializing_if = "Option::is_none")]
    pub spring_tension: Option<f32>,

    /// Spring friction for open/close animations.
    #[serde(default = "default_friction", skip_serializing_if = "Option::is_none")]
    pub spring_friction: Option<f32>,

    /// Overlay background color as `#rrggbb` or `#rrggbbaa`.
    #[serde(
        default = "default_background_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,

    /// Tint drawn over a thumbnail while it is pressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlay_color: Option<String>,

    /// Maximum content scale while open.
    #[serde(default = "default_max_zoom", skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f32>,

    /// How the overlay is presented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation: Option<Presentation>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            swipe_to_dismiss: default_swipe_to_dismiss(),
            spring_tension: default_tension(),
            spring_friction: default_friction(),
            background_color: default_background_color(),
            underlay_color: None,
            max_zoom: default_max_zoom(),
            presentation: Some(Presentation::default()),
        }
    }
}

impl LightboxConfig {
    /// Builds lightbox props from this section, falling back to defaults for
    /// missing or unparsable values.
    #[must_use]
    pub fn props(&self) -> Props {
        let background_color = self
            .background_color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(Color::BLACK);

        Props {
            swipe_to_dismiss: self.swipe_to_dismiss.unwrap_or(DEFAULT_SWIPE_TO_DISMISS),
            spring: SpringConfig::new(
                self.spring_tension.unwrap_or(DEFAULT_SPRING_TENSION),
                self.spring_friction.unwrap_or(DEFAULT_SPRING_FRICTION),
            ),
            background_color,
            underlay_color: self.underlay_color.as_deref().and_then(parse_hex_color),
            max_zoom: self
                .max_zoom
                .unwrap_or(DEFAULT_MAX_ZOOM)
                .clamp(MIN_MAX_ZOOM, MAX_MAX_ZOOM),
            presentation: self.presentation.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Lightbox overlay settings.
    #[serde(default)]
    pub lightbox: LightboxConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_swipe_to_dismiss() -> Option<bool> {
    Some(DEFAULT_SWIPE_TO_DISMISS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_tension() -> Option<f32> {
    Some(DEFAULT_SPRING_TENSION)
}

#[allow(clippy::unnecessary_wraps)]
fn default_friction() -> Option<f32> {
    Some(DEFAULT_SPRING_FRICTION)
}

fn default_background_color() -> Option<String> {
    Some(DEFAULT_BACKGROUND_COLOR.to_string())
}

#[allow(clippy::unnecessary_wraps)]
fn default_max_zoom() -> Option<f32> {
    Some(DEFAULT_MAX_ZOOM)
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` into a color.
#[must_use]
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

    match hex.len() {
        3 => {
            let mut expanded = String::with_capacity(6);
            for c in hex.chars() {
                expanded.push(c);
                expanded.push(c);
            }
            parse_hex_color(&format!("#{expanded}"))
        }
        6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            f32::from(channel(6)?) / 255.0,
        )),
        _ => None,
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
