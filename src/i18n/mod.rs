// SPDX-License-Identifier: MPL-2.0
//! Localization through Fluent.
//!
//! Translations are embedded at build time from `assets/i18n/*.ftl`. The
//! active locale is resolved from the CLI flag, then the config file, then
//! the OS locale, and falls back to `en-US`.

pub mod fluent;
