// SPDX-License-Identifier: MPL-2.0
//! Drag-to-dismiss gesture tracking.
//!
//! Tracks the offset of a single-pointer gesture on the open content and
//! decides, on release, whether the overlay should close.

use super::geometry::Target;
use crate::config::{DRAG_DISMISS_THRESHOLD_X, DRAG_DISMISS_THRESHOLD_Y};
use iced::{Point, Size, Vector};

/// Axis with the larger offset magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Dominant axis of an offset. Ties go to the vertical axis.
    #[must_use]
    pub fn dominant(offset: Vector) -> Self {
        if offset.x.abs() > offset.y.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Close the overlay, carrying the release offset and the fade opacity.
    Dismiss(Target),
    /// Spring back to the resting position.
    SpringBack,
}

/// Manages drag gesture state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Position where the gesture started
    start_position: Option<Point>,

    /// Offset of the pointer from the start position
    offset: Vector,

    /// Axis the gesture is currently moving along
    axis: Axis,
}

impl DragState {
    /// Starts a gesture, resetting the offset to zero.
    pub fn start(&mut self, position: Point) {
        self.start_position = Some(position);
        self.offset = Vector::ZERO;
        self.axis = Axis::Horizontal;
    }

    /// Updates the offset from the current pointer position.
    pub fn update(&mut self, position: Point) -> Option<Vector> {
        let start = self.start_position?;
        self.offset = position - start;
        self.axis = Axis::dominant(self.offset);
        Some(self.offset)
    }

    /// Ends the gesture and returns the final offset.
    pub fn stop(&mut self) -> Vector {
        self.start_position = None;
        std::mem::replace(&mut self.offset, Vector::ZERO)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_position.is_some()
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

/// Whether a release offset crosses either dismiss threshold.
#[must_use]
pub fn exceeds_threshold(offset: Vector) -> bool {
    offset.y.abs() > DRAG_DISMISS_THRESHOLD_Y || offset.x.abs() > DRAG_DISMISS_THRESHOLD_X
}

/// Backdrop opacity while dragging: 1 at rest, 0 once the offset on the
/// dominant axis reaches the window dimension on that axis.
#[must_use]
pub fn drag_opacity(offset: Vector, axis: Axis, window: Size) -> f32 {
    let (pan, max_dimension) = match axis {
        Axis::Horizontal => (offset.x, window.width),
        Axis::Vertical => (offset.y, window.height),
    };

    if max_dimension <= 0.0 {
        return 1.0;
    }

    (1.0 - (pan / max_dimension).abs()).clamp(0.0, 1.0)
}

/// Opacity the close animation starts from after a dismissing release.
///
/// Compares the magnitudes of both axis ratios, so a dismiss to the left or
/// upwards fades exactly like its mirror image. A signed comparison would
/// leave leftward and upward dismisses fully opaque.
#[must_use]
pub fn dismiss_opacity(offset: Vector, window: Size) -> f32 {
    let ratio_x = if window.width > 0.0 {
        (offset.x / window.width).abs()
    } else {
        0.0
    };
    let ratio_y = if window.height > 0.0 {
        (offset.y / window.height).abs()
    } else {
        0.0
    };

    (1.0 - ratio_x.max(ratio_y)).clamp(0.0, 1.0)
}

/// Decides what a release with `offset` does.
#[must_use]
pub fn release(offset: Vector, window: Size) -> Release {
    if exceeds_threshold(offset) {
        Release::Dismiss(Target {
            x: offset.x,
            y: offset.y,
            opacity: dismiss_opacity(offset, window),
        })
    } else {
        Release::SpringBack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size {
        width: 400.0,
        height: 800.0,
    };

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut state = DragState::default();
        assert!(state.update(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn update_tracks_offset_and_axis() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 100.0));

        let offset = state.update(Point::new(130.0, 90.0));
        assert_eq!(offset, Some(Vector::new(30.0, -10.0)));
        assert_eq!(state.axis(), Axis::Horizontal);

        state.update(Point::new(110.0, 180.0));
        assert_eq!(state.axis(), Axis::Vertical);
    }

    #[test]
    fn start_resets_previous_offset() {
        let mut state = DragState::default();
        state.start(Point::new(0.0, 0.0));
        state.update(Point::new(50.0, 0.0));

        state.start(Point::new(200.0, 200.0));
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn stop_returns_final_offset() {
        let mut state = DragState::default();
        state.start(Point::new(0.0, 0.0));
        state.update(Point::new(-20.0, 5.0));

        assert_eq!(state.stop(), Vector::new(-20.0, 5.0));
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert!(!exceeds_threshold(Vector::new(120.0, 0.0)));
        assert!(exceeds_threshold(Vector::new(120.5, 0.0)));
        assert!(!exceeds_threshold(Vector::new(0.0, -250.0)));
        assert!(exceeds_threshold(Vector::new(0.0, -251.0)));
    }

    #[test]
    fn small_release_springs_back() {
        assert_eq!(release(Vector::new(10.0, 10.0), WINDOW), Release::SpringBack);
    }

    #[test]
    fn horizontal_release_dismisses_with_width_ratio() {
        let Release::Dismiss(target) = release(Vector::new(150.0, 0.0), WINDOW) else {
            panic!("expected dismiss");
        };
        assert_eq!(target.x, 150.0);
        assert_eq!(target.y, 0.0);
        assert!((target.opacity - (1.0 - 150.0 / 400.0)).abs() < 1e-6);
    }

    #[test]
    fn leftward_release_fades_like_rightward() {
        let left = dismiss_opacity(Vector::new(-150.0, 0.0), WINDOW);
        let right = dismiss_opacity(Vector::new(150.0, 0.0), WINDOW);
        assert!((left - right).abs() < 1e-6);
    }

    #[test]
    fn drag_opacity_follows_dominant_axis() {
        let horizontal = drag_opacity(Vector::new(100.0, 0.0), Axis::Horizontal, WINDOW);
        let vertical = drag_opacity(Vector::new(0.0, -200.0), Axis::Vertical, WINDOW);
        assert!((horizontal - 0.75).abs() < 1e-6);
        assert!((vertical - 0.75).abs() < 1e-6);
    }

    #[test]
    fn drag_opacity_is_clamped() {
        assert_eq!(
            drag_opacity(Vector::new(1000.0, 0.0), Axis::Horizontal, WINDOW),
            0.0
        );
        assert_eq!(drag_opacity(Vector::ZERO, Axis::Horizontal, Size::ZERO), 1.0);
    }
}
