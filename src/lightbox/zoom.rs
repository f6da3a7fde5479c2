// SPDX-License-Identifier: MPL-2.0
//! Pinch/pan/wheel zoom of the open content.
//!
//! The transform scales the content around the viewport center and then
//! translates it. Translation is clamped so the scaled content always covers
//! the viewport on each axis; there is no overscroll resistance.

use crate::config::{DEFAULT_MAX_ZOOM, DOUBLE_TAP_THRESHOLD, MIN_MAX_ZOOM};
use iced::{Point, Rectangle, Size, Vector};
use std::time::Instant;

/// Content scale factor, never below natural size nor above its maximum.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    pub const NATURAL: Scale = Scale(1.0);

    #[must_use]
    pub fn new(value: f32, max: f32) -> Self {
        Self(value.clamp(1.0, max.max(1.0)))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_scaled(self) -> bool {
        (self.0 - 1.0).abs() > f32::EPSILON
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::NATURAL
    }
}

/// Snapshot taken when a two-finger gesture begins.
#[derive(Debug, Clone, Copy)]
struct Pinch {
    initial_distance: f32,
    initial_scale: f32,
    initial_midpoint: Point,
    initial_translation: Vector,
}

/// Snapshot taken when a single-pointer pan begins on scaled content.
#[derive(Debug, Clone, Copy)]
struct Pan {
    start_position: Point,
    start_translation: Vector,
}

/// Scale and translation applied to the open content.
#[derive(Debug, Clone)]
pub struct ViewTransform {
    scale: Scale,
    translation: Vector,
    max_scale: f32,
    pinch: Option<Pinch>,
    pan: Option<Pan>,
    last_tap: Option<Instant>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ZOOM)
    }
}

impl ViewTransform {
    #[must_use]
    pub fn new(max_scale: f32) -> Self {
        Self {
            scale: Scale::NATURAL,
            translation: Vector::ZERO,
            max_scale: max_scale.max(MIN_MAX_ZOOM),
            pinch: None,
            pan: None,
            last_tap: None,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    #[must_use]
    pub fn translation(&self) -> Vector {
        self.translation
    }

    #[must_use]
    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    /// Whether the content is displayed at anything other than its natural size.
    #[must_use]
    pub fn is_scaled(&self) -> bool {
        self.scale.is_scaled()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Back to natural size, dropping any gesture in progress.
    pub fn reset(&mut self) {
        self.scale = Scale::NATURAL;
        self.translation = Vector::ZERO;
        self.pinch = None;
        self.pan = None;
        self.last_tap = None;
    }

    pub fn begin_pinch(&mut self, a: Point, b: Point) {
        self.pan = None;
        self.pinch = Some(Pinch {
            initial_distance: a.distance(b),
            initial_scale: self.scale.value(),
            initial_midpoint: midpoint(a, b),
            initial_translation: self.translation,
        });
    }

    /// Follows the two fingers: distance ratio drives the scale, the
    /// midpoint stays anchored on the same content point.
    pub fn update_pinch(&mut self, a: Point, b: Point, viewport: Rectangle) {
        let Some(pinch) = self.pinch else {
            return;
        };
        if pinch.initial_distance < 1.0 {
            return;
        }

        let scale = pinch.initial_scale * a.distance(b) / pinch.initial_distance;
        self.scale_around(
            scale,
            pinch.initial_midpoint,
            midpoint(a, b),
            pinch.initial_scale,
            pinch.initial_translation,
            viewport,
        );
    }

    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    /// Zooms by `delta` scale units keeping `anchor` fixed on screen.
    pub fn zoom_by(&mut self, delta: f32, anchor: Point, viewport: Rectangle) {
        let (scale, translation) = (self.scale.value(), self.translation);
        self.scale_around(scale + delta, anchor, anchor, scale, translation, viewport);
    }

    pub fn begin_pan(&mut self, position: Point) {
        self.pan = Some(Pan {
            start_position: position,
            start_translation: self.translation,
        });
    }

    pub fn update_pan(&mut self, position: Point, viewport: Rectangle) {
        if let Some(pan) = self.pan {
            self.translation = pan.start_translation + (position - pan.start_position);
            self.clamp_translation(viewport.size());
        }
    }

    pub fn end_pan(&mut self) {
        self.pan = None;
    }

    /// Registers a tap; a second tap within the double-tap window toggles
    /// between natural size and the maximum scale. Returns true on toggle.
    pub fn tap(&mut self, at: Point, now: Instant, viewport: Rectangle) -> bool {
        let is_double = self
            .last_tap
            .is_some_and(|t| now.saturating_duration_since(t) < DOUBLE_TAP_THRESHOLD);

        if !is_double {
            self.last_tap = Some(now);
            return false;
        }

        self.last_tap = None;
        if self.is_scaled() {
            self.scale = Scale::NATURAL;
            self.translation = Vector::ZERO;
        } else {
            let (scale, translation) = (self.scale.value(), self.translation);
            self.scale_around(self.max_scale, at, at, scale, translation, viewport);
        }
        true
    }

    /// Maps the unscaled content rectangle to where it is drawn.
    #[must_use]
    pub fn apply(&self, content: Rectangle) -> Rectangle {
        let center = content.center();
        let scale = self.scale.value();
        let size = Size::new(content.width * scale, content.height * scale);
        Rectangle::new(
            Point::new(
                center.x - size.width / 2.0 + self.translation.x,
                center.y - size.height / 2.0 + self.translation.y,
            ),
            size,
        )
    }

    fn scale_around(
        &mut self,
        scale: f32,
        from_anchor: Point,
        to_anchor: Point,
        base_scale: f32,
        base_translation: Vector,
        viewport: Rectangle,
    ) {
        let scale = Scale::new(scale, self.max_scale);
        let center = viewport.center();

        // Content point under the anchor, relative to the content center.
        let local = (from_anchor - center - base_translation) * (1.0 / base_scale);

        self.scale = scale;
        self.translation = to_anchor - center - local * scale.value();
        self.clamp_translation(viewport.size());
    }

    fn clamp_translation(&mut self, viewport: Size) {
        let excess = self.scale.value() - 1.0;
        let max_x = excess * viewport.width / 2.0;
        let max_y = excess * viewport.height / 2.0;
        self.translation = Vector::new(
            self.translation.x.clamp(-max_x, max_x),
            self.translation.y.clamp(-max_y, max_y),
        );
    }
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn viewport() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(400.0, 800.0))
    }

    #[test]
    fn default_transform_is_identity() {
        let transform = ViewTransform::default();
        assert!(!transform.is_scaled());
        assert_eq!(transform.apply(viewport()), viewport());
    }

    #[test]
    fn pinch_spreading_fingers_zooms_in() {
        let mut transform = ViewTransform::new(2.0);
        transform.begin_pinch(Point::new(150.0, 400.0), Point::new(250.0, 400.0));
        transform.update_pinch(Point::new(125.0, 400.0), Point::new(275.0, 400.0), viewport());

        assert!((transform.scale() - 1.5).abs() < 1e-4);
        assert!(transform.is_scaled());
    }

    #[test]
    fn pinch_is_clamped_to_max_scale() {
        let mut transform = ViewTransform::new(2.0);
        transform.begin_pinch(Point::new(190.0, 400.0), Point::new(210.0, 400.0));
        transform.update_pinch(Point::new(0.0, 400.0), Point::new(400.0, 400.0), viewport());

        assert_eq!(transform.scale(), 2.0);
    }

    #[test]
    fn pinch_cannot_shrink_below_natural_size() {
        let mut transform = ViewTransform::new(2.0);
        transform.begin_pinch(Point::new(100.0, 400.0), Point::new(300.0, 400.0));
        transform.update_pinch(Point::new(190.0, 400.0), Point::new(210.0, 400.0), viewport());

        assert_eq!(transform.scale(), 1.0);
        assert!(!transform.is_scaled());
    }

    #[test]
    fn wheel_zoom_keeps_anchor_fixed() {
        let mut transform = ViewTransform::new(2.0);
        let anchor = Point::new(250.0, 500.0);
        let before = transform.apply(viewport());
        let rel_x = (anchor.x - before.x) / before.width;

        transform.zoom_by(0.5, anchor, viewport());
        let after = transform.apply(viewport());

        assert!((after.x + rel_x * after.width - anchor.x).abs() < 1e-3);
    }

    #[test]
    fn pan_is_clamped_to_content_edges() {
        let mut transform = ViewTransform::new(2.0);
        transform.zoom_by(1.0, viewport().center(), viewport());

        transform.begin_pan(Point::new(200.0, 400.0));
        transform.update_pan(Point::new(2000.0, 400.0), viewport());

        // Scale 2 on a 400 wide viewport allows 200 px either way.
        assert!((transform.translation().x - 200.0).abs() < 1e-6);
        transform.end_pan();
        assert!(!transform.is_panning());
    }

    #[test]
    fn double_tap_toggles_zoom() {
        let mut transform = ViewTransform::new(2.0);
        let now = Instant::now();
        let center = viewport().center();

        assert!(!transform.tap(center, now, viewport()));
        assert!(transform.tap(center, now + Duration::from_millis(100), viewport()));
        assert_eq!(transform.scale(), 2.0);

        let later = now + Duration::from_secs(1);
        transform.tap(center, later, viewport());
        assert!(transform.tap(center, later + Duration::from_millis(100), viewport()));
        assert!(!transform.is_scaled());
    }

    #[test]
    fn slow_taps_do_not_toggle() {
        let mut transform = ViewTransform::new(2.0);
        let now = Instant::now();
        transform.tap(Point::ORIGIN, now, viewport());
        assert!(!transform.tap(Point::ORIGIN, now + Duration::from_secs(1), viewport()));
        assert!(!transform.is_scaled());
    }

    #[test]
    fn scale_is_clamped_on_construction() {
        assert_eq!(Scale::new(0.2, 2.0), Scale::NATURAL);
        assert_eq!(Scale::new(5.0, 2.0).value(), 2.0);
        assert!(!Scale::new(1.0, 1.0).is_scaled());
    }

    #[test]
    fn reset_restores_identity() {
        let mut transform = ViewTransform::new(2.0);
        transform.zoom_by(0.7, Point::new(10.0, 10.0), viewport());
        transform.reset();
        assert!(!transform.is_scaled());
        assert_eq!(transform.translation(), Vector::ZERO);
    }
}
