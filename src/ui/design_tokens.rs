// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the gallery and the lightbox overlay.
//!
//! ```
//! use iced_lightbox::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let underlay = Color {
//!     a: opacity::UNDERLAY,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD; // 16px
//! # let _ = (underlay, padding);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Default tint over a pressed thumbnail
    pub const UNDERLAY: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Edge of a square gallery thumbnail
    pub const THUMBNAIL: f32 = 160.0;

    /// Height of the overlay header bar
    pub const HEADER_HEIGHT: f32 = 56.0;

    /// Edge of the default close button
    pub const CLOSE_BUTTON: f32 = 40.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;

    /// Glyph size of the default close button
    pub const CLOSE_GLYPH: f32 = 24.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::UNDERLAY > 0.0 && opacity::UNDERLAY < 1.0);

    assert!(sizing::HEADER_HEIGHT > sizing::CLOSE_BUTTON);
    assert!(typography::TITLE_MD > typography::BODY);
};
