// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery and the lightbox overlay.

pub mod container;
pub mod overlay;
