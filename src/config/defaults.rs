// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Spring**: Open/close animation tuning
//! - **Dismiss**: Drag-to-dismiss thresholds
//! - **Zoom**: Pinch/wheel zoom bounds
//! - **Trigger**: Press handling on thumbnails

use std::time::Duration;

// ==========================================================================
// Spring Defaults
// ==========================================================================

/// Default spring tension (origami scale).
pub const DEFAULT_SPRING_TENSION: f32 = 30.0;

/// Minimum spring tension. Lower values map to a non-positive stiffness.
pub const MIN_SPRING_TENSION: f32 = 1.0;

/// Maximum spring tension.
pub const MAX_SPRING_TENSION: f32 = 200.0;

/// Default spring friction (origami scale).
pub const DEFAULT_SPRING_FRICTION: f32 = 7.0;

/// Minimum spring friction.
pub const MIN_SPRING_FRICTION: f32 = 1.0;

/// Maximum spring friction.
pub const MAX_SPRING_FRICTION: f32 = 100.0;

/// Displacement below which a spring is considered at rest.
pub const SPRING_REST_DISPLACEMENT: f32 = 0.001;

/// Speed below which a spring is considered at rest.
pub const SPRING_REST_SPEED: f32 = 0.001;

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Horizontal drag distance (logical pixels) that dismisses the overlay.
pub const DRAG_DISMISS_THRESHOLD_X: f32 = 120.0;

/// Vertical drag distance (logical pixels) that dismisses the overlay.
pub const DRAG_DISMISS_THRESHOLD_Y: f32 = 250.0;

/// Swipe-to-dismiss is on unless disabled.
pub const DEFAULT_SWIPE_TO_DISMISS: bool = true;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default maximum content scale while the overlay is open.
pub const DEFAULT_MAX_ZOOM: f32 = 2.0;

/// Lower bound for the configurable maximum scale (1.0 disables zoom).
pub const MIN_MAX_ZOOM: f32 = 1.0;

/// Upper bound for the configurable maximum scale.
pub const MAX_MAX_ZOOM: f32 = 8.0;

/// Scale change per mouse wheel line.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Pixels per wheel "line" when the platform reports pixel deltas.
pub const WHEEL_PIXELS_PER_LINE: f32 = 40.0;

/// Two taps closer than this toggle the zoom.
pub const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(300);

/// A release closer than this to its press position counts as a tap.
pub const TAP_SLOP: f32 = 8.0;

// ==========================================================================
// Trigger Defaults
// ==========================================================================

/// A press held at least this long is a long press instead of an open.
pub const LONG_PRESS_DURATION: Duration = Duration::from_millis(500);

/// Default overlay background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Spring validation
    assert!(MIN_SPRING_TENSION > 0.0);
    assert!(DEFAULT_SPRING_TENSION >= MIN_SPRING_TENSION);
    assert!(DEFAULT_SPRING_TENSION <= MAX_SPRING_TENSION);
    assert!(MIN_SPRING_FRICTION > 0.0);
    assert!(DEFAULT_SPRING_FRICTION >= MIN_SPRING_FRICTION);
    assert!(DEFAULT_SPRING_FRICTION <= MAX_SPRING_FRICTION);
    assert!(SPRING_REST_DISPLACEMENT > 0.0);
    assert!(SPRING_REST_SPEED > 0.0);

    // Dismiss validation
    assert!(DRAG_DISMISS_THRESHOLD_X > 0.0);
    assert!(DRAG_DISMISS_THRESHOLD_Y > DRAG_DISMISS_THRESHOLD_X);

    // Zoom validation
    assert!(MIN_MAX_ZOOM >= 1.0);
    assert!(DEFAULT_MAX_ZOOM >= MIN_MAX_ZOOM);
    assert!(DEFAULT_MAX_ZOOM <= MAX_MAX_ZOOM);
    assert!(WHEEL_ZOOM_STEP > 0.0);
    assert!(WHEEL_PIXELS_PER_LINE > 0.0);
};
