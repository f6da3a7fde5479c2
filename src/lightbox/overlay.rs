// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay state machine.
//!
//! The overlay animates a progress value between 0 (content at the
//! thumbnail's origin rectangle) and 1 (content filling the window). While
//! open it captures single-pointer drags for swipe-to-dismiss and two-finger
//! or wheel gestures for zoom. Every render reads [`State::frame`], which
//! derives the content rectangle and opacity from the current values.

use super::drag::{self, DragState, Release};
use super::geometry::{interpolate, OriginRect, Target};
use super::props::Props;
use super::spring::{Spring, SpringConfig, SpringStatus};
use super::zoom::ViewTransform;
use crate::config::{TAP_SLOP, WHEEL_PIXELS_PER_LINE, WHEEL_ZOOM_STEP};
use iced::keyboard::{self, key::Named, Key};
use iced::mouse::{self, ScrollDelta};
use iced::touch::{self, Finger};
use iced::{window, Point, Rectangle, Size, Vector};
use std::time::Instant;

/// Lifecycle of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Dragging,
    Closing,
}

/// Messages for the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start opening from the given rectangle.
    Open(OriginRect),
    /// Close request from the header, the host or the back key.
    Close,
    /// Animation frame.
    Tick(Instant),
    WindowResized(Size),
    /// Raw window input while the overlay is presented.
    Input(iced::Event),
}

/// Lifecycle notifications produced by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Opening animation settled at full size.
    DidOpen,
    /// A close was accepted and its animation started.
    WillClose,
    /// Close animation finished.
    OnClose,
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Where the content is drawn, in window coordinates.
    pub content: Rectangle,
    /// Opacity of the backdrop and header.
    pub opacity: f32,
}

/// Overlay state.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    origin: OriginRect,
    target: Target,
    progress: Spring,
    pan_x: Spring,
    pan_y: Spring,
    /// Pan springs are returning to rest after a short drag.
    settling: bool,
    drag: DragState,
    transform: ViewTransform,
    window: Size,
    spring: SpringConfig,
    swipe_to_dismiss: bool,
    cursor: Point,
    mouse_down: bool,
    fingers: Vec<(Finger, Point)>,
    /// Position where the current single-pointer gesture started.
    press_position: Option<Point>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&Props::default())
    }
}

impl State {
    #[must_use]
    pub fn new(props: &Props) -> Self {
        Self {
            phase: Phase::Closed,
            origin: OriginRect::default(),
            target: Target::default(),
            progress: Spring::new(0.0),
            pan_x: Spring::new(0.0),
            pan_y: Spring::new(0.0),
            settling: false,
            drag: DragState::default(),
            transform: ViewTransform::new(props.max_zoom),
            window: Size::ZERO,
            spring: props.spring,
            swipe_to_dismiss: props.swipe_to_dismiss,
            cursor: Point::ORIGIN,
            mouse_down: false,
            fingers: Vec::new(),
            press_position: None,
        }
    }

    /// Applies changed props. Zoom bounds take effect on the next open.
    pub fn configure(&mut self, props: &Props) {
        self.spring = props.spring;
        self.swipe_to_dismiss = props.swipe_to_dismiss;
        if self.phase == Phase::Closed {
            self.transform = ViewTransform::new(props.max_zoom);
        }
    }

    /// Handle an overlay message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open(origin) => {
                self.open(origin, Instant::now());
                Effect::None
            }
            Message::Close => self.close(Instant::now()),
            Message::Tick(now) => self.tick(now),
            Message::WindowResized(size) => {
                self.window = size;
                Effect::None
            }
            Message::Input(event) => self.handle_input(&event, Instant::now()),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether anything of the overlay is on screen.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Whether frames are needed to advance an animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.progress.is_animating() || self.pan_x.is_animating() || self.pan_y.is_animating()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    #[must_use]
    pub fn origin(&self) -> OriginRect {
        self.origin
    }

    #[must_use]
    pub fn window(&self) -> Size {
        self.window
    }

    /// Whether a non-empty window size has been received. The overlay
    /// refuses to open without one.
    #[must_use]
    pub fn has_window(&self) -> bool {
        self.window.width > 0.0 && self.window.height > 0.0
    }

    #[must_use]
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Current drag offset, zero when no drag is in progress.
    #[must_use]
    pub fn pan(&self) -> Vector {
        Vector::new(self.pan_x.value(), self.pan_y.value())
    }

    /// Whether drag offsets drive the content position.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.phase == Phase::Dragging || self.settling
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        let progress = self.progress.value();

        let mut x = interpolate(progress, self.origin.x, self.target.x);
        let mut y = interpolate(progress, self.origin.y, self.target.y);
        let width = interpolate(progress, self.origin.width, self.window.width);
        let height = interpolate(progress, self.origin.height, self.window.height);
        let mut opacity = interpolate(progress, 0.0, self.target.opacity);

        if self.is_panning() {
            let pan = self.pan();
            x = pan.x;
            y = pan.y;
            opacity = drag::drag_opacity(pan, self.drag.axis(), self.window);
        }

        Frame {
            content: self
                .transform
                .apply(Rectangle::new(Point::new(x, y), Size::new(width, height))),
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    fn viewport(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, self.window)
    }

    fn open(&mut self, origin: OriginRect, now: Instant) {
        if matches!(self.phase, Phase::Opening | Phase::Open | Phase::Dragging) {
            return;
        }
        if !self.has_window() {
            tracing::warn!(window = ?self.window, "open requested before the window size is known");
            return;
        }

        self.origin = origin;
        self.target = Target::default();
        self.pan_x.set_value(0.0);
        self.pan_y.set_value(0.0);
        self.settling = false;
        self.drag.stop();
        self.transform.reset();
        self.press_position = None;
        self.progress.animate_to(1.0, self.spring, now);
        self.phase = Phase::Opening;
    }

    fn close(&mut self, now: Instant) -> Effect {
        if matches!(self.phase, Phase::Closed | Phase::Closing) {
            return Effect::None;
        }

        self.drag.stop();
        self.transform.end_pan();
        self.transform.end_pinch();
        self.press_position = None;
        self.settling = false;
        self.pan_x.set_value(0.0);
        self.pan_y.set_value(0.0);
        self.progress.animate_to(0.0, self.spring, now);
        self.phase = Phase::Closing;
        Effect::WillClose
    }

    fn tick(&mut self, now: Instant) -> Effect {
        let status = self.progress.tick(now);
        let pan_x = self.pan_x.tick(now);
        let pan_y = self.pan_y.tick(now);

        if self.settling && pan_x != SpringStatus::Running && pan_y != SpringStatus::Running {
            self.settling = false;
        }

        match (self.phase, status) {
            (Phase::Opening, SpringStatus::Settled) => {
                self.phase = Phase::Open;
                Effect::DidOpen
            }
            (Phase::Closing, SpringStatus::Settled) => {
                self.phase = Phase::Closed;
                self.target = Target::default();
                self.transform.reset();
                Effect::OnClose
            }
            _ => Effect::None,
        }
    }

    fn handle_input(&mut self, event: &iced::Event, now: Instant) -> Effect {
        match event {
            iced::Event::Window(window::Event::Resized(size)) => {
                self.window = *size;
                Effect::None
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => self.close(now),
            iced::Event::Mouse(event) => self.handle_mouse(event, now),
            iced::Event::Touch(event) => self.handle_touch(event, now),
            _ => Effect::None,
        }
    }

    fn handle_mouse(&mut self, event: &mouse::Event, now: Instant) -> Effect {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = *position;
                if self.mouse_down {
                    self.pointer_moved(*position);
                }
                Effect::None
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                self.mouse_down = true;
                self.pointer_pressed(self.cursor);
                Effect::None
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                if !self.mouse_down {
                    return Effect::None;
                }
                self.mouse_down = false;
                self.pointer_released(self.cursor, now)
            }
            mouse::Event::WheelScrolled { delta } => {
                if self.phase != Phase::Open || self.drag.is_dragging() {
                    return Effect::None;
                }
                let lines = match delta {
                    ScrollDelta::Lines { y, .. } => *y,
                    ScrollDelta::Pixels { y, .. } => *y / WHEEL_PIXELS_PER_LINE,
                };
                let viewport = self.viewport();
                self.transform
                    .zoom_by(lines * WHEEL_ZOOM_STEP, self.cursor, viewport);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn handle_touch(&mut self, event: &touch::Event, now: Instant) -> Effect {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                self.fingers.retain(|(finger, _)| *finger != id);
                self.fingers.push((id, position));

                match self.fingers.len() {
                    1 => self.pointer_pressed(position),
                    2 => self.begin_pinch(now),
                    _ => {}
                }
                Effect::None
            }
            touch::Event::FingerMoved { id, position } => {
                if let Some(entry) = self.fingers.iter_mut().find(|(finger, _)| *finger == id) {
                    entry.1 = position;
                }

                if self.transform.is_pinching() {
                    if let [(_, a), (_, b), ..] = self.fingers[..] {
                        let viewport = self.viewport();
                        self.transform.update_pinch(a, b, viewport);
                    }
                } else if self.fingers.len() == 1 {
                    self.pointer_moved(position);
                }
                Effect::None
            }
            touch::Event::FingerLifted { id, position } => {
                let before = self.fingers.len();
                self.fingers.retain(|(finger, _)| *finger != id);

                if self.transform.is_pinching() {
                    self.rebase_pinch();
                    Effect::None
                } else if before == 1 {
                    self.pointer_released(position, now)
                } else {
                    Effect::None
                }
            }
            touch::Event::FingerLost { id, .. } => {
                self.fingers.retain(|(finger, _)| *finger != id);
                self.cancel_gesture(now);
                Effect::None
            }
        }
    }

    /// A gesture may be captured only once fully open and at rest.
    fn can_capture_drag(&self) -> bool {
        self.phase == Phase::Open
            && self.swipe_to_dismiss
            && !self.transform.is_scaled()
            && !self.progress.is_animating()
    }

    fn pointer_pressed(&mut self, position: Point) {
        if self.phase != Phase::Open {
            return;
        }
        self.press_position = Some(position);

        if self.transform.is_scaled() {
            self.transform.begin_pan(position);
        } else if self.can_capture_drag() {
            self.drag.start(position);
            self.pan_x.set_value(0.0);
            self.pan_y.set_value(0.0);
            self.settling = false;
            self.phase = Phase::Dragging;
        }
    }

    fn pointer_moved(&mut self, position: Point) {
        if self.phase == Phase::Dragging {
            if let Some(offset) = self.drag.update(position) {
                self.pan_x.set_value(offset.x);
                self.pan_y.set_value(offset.y);
            }
        } else if self.transform.is_panning() {
            let viewport = self.viewport();
            self.transform.update_pan(position, viewport);
        }
    }

    fn pointer_released(&mut self, position: Point, now: Instant) -> Effect {
        let is_tap = self.press_position.take().is_some_and(|start| {
            let moved = position - start;
            (moved.x * moved.x + moved.y * moved.y).sqrt() < TAP_SLOP
        });

        let effect = if self.phase == Phase::Dragging {
            let offset = self.drag.stop();
            match drag::release(offset, self.window) {
                Release::Dismiss(target) => {
                    tracing::debug!(dx = offset.x, dy = offset.y, "drag dismissed overlay");
                    let effect = self.close(now);
                    self.target = target;
                    effect
                }
                Release::SpringBack => {
                    self.spring_back(now);
                    Effect::None
                }
            }
        } else {
            self.transform.end_pan();
            Effect::None
        };

        if is_tap && self.phase == Phase::Open {
            let viewport = self.viewport();
            if self.transform.tap(position, now, viewport) {
                tracing::debug!(scale = self.transform.scale(), "double tap toggled zoom");
            }
        }

        effect
    }

    /// Ends a single-pointer gesture as if released below the threshold.
    fn cancel_gesture(&mut self, now: Instant) {
        self.press_position = None;
        self.transform.end_pan();
        if self.transform.is_pinching() {
            self.rebase_pinch();
        }
        if self.phase == Phase::Dragging {
            self.drag.stop();
            self.spring_back(now);
        }
    }

    fn begin_pinch(&mut self, now: Instant) {
        self.cancel_gesture(now);
        if self.phase != Phase::Open || self.transform.max_scale() <= 1.0 {
            return;
        }
        if let [(_, a), (_, b), ..] = self.fingers[..] {
            self.transform.begin_pinch(a, b);
        }
    }

    /// Restarts a running pinch on the first two fingers still down, from
    /// the current scale. Ends it when fewer than two remain.
    fn rebase_pinch(&mut self) {
        if let [(_, a), (_, b), ..] = self.fingers[..] {
            self.transform.begin_pinch(a, b);
        } else {
            self.transform.end_pinch();
        }
    }

    fn spring_back(&mut self, now: Instant) {
        self.pan_x.animate_to(0.0, self.spring, now);
        self.pan_y.animate_to(0.0, self.spring, now);
        self.settling = true;
        self.phase = Phase::Open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const WINDOW: Size = Size {
        width: 400.0,
        height: 800.0,
    };

    fn origin() -> OriginRect {
        OriginRect::new(20.0, 40.0, 100.0, 80.0)
    }

    fn settle(state: &mut State) -> Effect {
        state.handle(Message::Tick(Instant::now() + Duration::from_secs(10)))
    }

    fn opened() -> State {
        let mut state = State::default();
        state.handle(Message::WindowResized(WINDOW));
        state.handle(Message::Open(origin()));
        assert_eq!(settle(&mut state), Effect::DidOpen);
        state
    }

    fn mouse(event: mouse::Event) -> Message {
        Message::Input(iced::Event::Mouse(event))
    }

    fn drag_by(state: &mut State, dx: f32, dy: f32) -> Effect {
        let start = Point::new(200.0, 400.0);
        state.handle(mouse(mouse::Event::CursorMoved { position: start }));
        state.handle(mouse(mouse::Event::ButtonPressed(mouse::Button::Left)));
        state.handle(mouse(mouse::Event::CursorMoved {
            position: start + Vector::new(dx, dy),
        }));
        state.handle(mouse(mouse::Event::ButtonReleased(mouse::Button::Left)))
    }

    #[test]
    fn closed_frame_sits_on_origin_and_is_transparent() {
        let mut state = State::default();
        state.handle(Message::WindowResized(WINDOW));
        state.handle(Message::Open(origin()));

        let frame = state.frame();
        assert_eq!(frame.content, Rectangle::from(origin()));
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(state.phase(), Phase::Opening);
    }

    #[test]
    fn open_without_window_size_stays_closed() {
        let mut state = State::default();
        state.handle(Message::Open(origin()));

        assert!(!state.has_window());
        assert_eq!(state.phase(), Phase::Closed);
        assert!(!state.is_animating());
        assert_eq!(settle(&mut state), Effect::None);

        state.handle(Message::WindowResized(WINDOW));
        state.handle(Message::Open(origin()));
        assert_eq!(state.phase(), Phase::Opening);
    }

    #[test]
    fn open_settles_at_full_window() {
        let state = opened();
        let frame = state.frame();

        assert_eq!(state.phase(), Phase::Open);
        assert!((frame.content.width - WINDOW.width).abs() < 1e-3);
        assert!((frame.content.height - WINDOW.height).abs() < 1e-3);
        assert!((frame.opacity - 1.0).abs() < 1e-3);
    }

    #[test]
    fn did_open_is_reported_once() {
        let mut state = opened();
        assert_eq!(settle(&mut state), Effect::None);
    }

    #[test]
    fn close_while_closing_is_ignored() {
        let mut state = opened();
        assert_eq!(state.handle(Message::Close), Effect::WillClose);
        assert_eq!(state.handle(Message::Close), Effect::None);
        assert_eq!(settle(&mut state), Effect::OnClose);
        assert_eq!(state.phase(), Phase::Closed);
        assert_eq!(state.handle(Message::Close), Effect::None);
    }

    #[test]
    fn close_during_opening_is_accepted() {
        let mut state = State::default();
        state.handle(Message::WindowResized(WINDOW));
        state.handle(Message::Open(origin()));
        assert_eq!(state.handle(Message::Close), Effect::WillClose);
        assert_eq!(settle(&mut state), Effect::OnClose);
    }

    #[test]
    fn escape_requests_close() {
        let mut state = opened();
        let effect = state.handle(Message::Input(iced::Event::Keyboard(
            keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                modified_key: Key::Named(Named::Escape),
                physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Escape),
                location: keyboard::Location::Standard,
                modifiers: keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            },
        )));
        assert_eq!(effect, Effect::WillClose);
    }

    #[test]
    fn dragging_follows_pointer_and_fades_backdrop() {
        let mut state = opened();
        state.handle(mouse(mouse::Event::CursorMoved {
            position: Point::new(200.0, 400.0),
        }));
        state.handle(mouse(mouse::Event::ButtonPressed(mouse::Button::Left)));
        state.handle(mouse(mouse::Event::CursorMoved {
            position: Point::new(300.0, 400.0),
        }));

        assert_eq!(state.phase(), Phase::Dragging);
        let frame = state.frame();
        assert_eq!(frame.content.x, 100.0);
        assert!((frame.opacity - 0.75).abs() < 1e-6);
    }

    #[test]
    fn short_drag_springs_back() {
        let mut state = opened();
        assert_eq!(drag_by(&mut state, 10.0, 10.0), Effect::None);
        assert_eq!(state.phase(), Phase::Open);
        assert!(state.is_animating());

        settle(&mut state);
        assert!(!state.is_panning());
        assert_eq!(state.pan(), Vector::ZERO);
        assert_eq!(state.target(), Target::default());
    }

    #[test]
    fn long_horizontal_drag_dismisses() {
        let mut state = opened();
        assert_eq!(drag_by(&mut state, 150.0, 0.0), Effect::WillClose);

        let target = state.target();
        assert_eq!(target.x, 150.0);
        assert_eq!(target.y, 0.0);
        assert!((target.opacity - 0.625).abs() < 1e-6);
        assert_eq!(state.phase(), Phase::Closing);

        assert_eq!(settle(&mut state), Effect::OnClose);
        assert_eq!(state.target(), Target::default());
    }

    #[test]
    fn drag_is_ignored_when_swipe_disabled() {
        let mut state = State::new(&Props {
            swipe_to_dismiss: false,
            ..Props::default()
        });
        state.handle(Message::WindowResized(WINDOW));
        state.handle(Message::Open(origin()));
        settle(&mut state);

        assert_eq!(drag_by(&mut state, 0.0, 400.0), Effect::None);
        assert_eq!(state.phase(), Phase::Open);
    }

    #[test]
    fn drag_is_ignored_while_opening() {
        let mut state = State::default();
        state.handle(Message::WindowResized(WINDOW));
        state.handle(Message::Open(origin()));

        assert_eq!(drag_by(&mut state, 0.0, 400.0), Effect::None);
        assert_eq!(state.phase(), Phase::Opening);
    }

    #[test]
    fn scaled_content_pans_instead_of_dismissing() {
        let mut state = opened();
        state.handle(mouse(mouse::Event::CursorMoved {
            position: Point::new(200.0, 400.0),
        }));
        state.handle(mouse(mouse::Event::WheelScrolled {
            delta: ScrollDelta::Lines { x: 0.0, y: 5.0 },
        }));
        assert!(state.transform().is_scaled());

        assert_eq!(drag_by(&mut state, 300.0, 0.0), Effect::None);
        assert_eq!(state.phase(), Phase::Open);
        assert!(state.transform().translation().x > 0.0);
    }

    #[test]
    fn second_finger_cancels_drag_and_pinches() {
        let mut state = opened();
        let input = |event| Message::Input(iced::Event::Touch(event));

        state.handle(input(touch::Event::FingerPressed {
            id: Finger(1),
            position: Point::new(150.0, 400.0),
        }));
        state.handle(input(touch::Event::FingerMoved {
            id: Finger(1),
            position: Point::new(170.0, 400.0),
        }));
        assert_eq!(state.phase(), Phase::Dragging);

        state.handle(input(touch::Event::FingerPressed {
            id: Finger(2),
            position: Point::new(270.0, 400.0),
        }));
        assert_eq!(state.phase(), Phase::Open);
        assert!(state.transform().is_pinching());

        state.handle(input(touch::Event::FingerMoved {
            id: Finger(2),
            position: Point::new(320.0, 400.0),
        }));
        assert!((state.transform().scale() - 1.5).abs() < 1e-4);
    }

    #[test]
    fn lifting_a_pinching_finger_continues_with_remaining_pair() {
        let mut state = opened();
        let input = |event| Message::Input(iced::Event::Touch(event));
        let press = |id, x, y| {
            input(touch::Event::FingerPressed {
                id: Finger(id),
                position: Point::new(x, y),
            })
        };
        let moved = |id, x, y| {
            input(touch::Event::FingerMoved {
                id: Finger(id),
                position: Point::new(x, y),
            })
        };

        state.handle(press(1, 150.0, 400.0));
        state.handle(press(2, 250.0, 400.0));
        state.handle(moved(2, 300.0, 400.0));
        assert!((state.transform().scale() - 1.5).abs() < 1e-4);

        state.handle(press(3, 200.0, 600.0));
        state.handle(input(touch::Event::FingerLifted {
            id: Finger(1),
            position: Point::new(150.0, 400.0),
        }));
        assert!(state.transform().is_pinching());

        // Remaining pair is 2 and 3; holding them still keeps the scale.
        state.handle(moved(3, 200.0, 600.0));
        assert!((state.transform().scale() - 1.5).abs() < 1e-4);

        state.handle(input(touch::Event::FingerLost {
            id: Finger(3),
            position: Point::new(200.0, 600.0),
        }));
        assert!(!state.transform().is_pinching());
        assert!((state.transform().scale() - 1.5).abs() < 1e-4);
    }

    #[test]
    fn lost_finger_springs_back() {
        let mut state = opened();
        let input = |event| Message::Input(iced::Event::Touch(event));

        state.handle(input(touch::Event::FingerPressed {
            id: Finger(1),
            position: Point::new(200.0, 400.0),
        }));
        state.handle(input(touch::Event::FingerMoved {
            id: Finger(1),
            position: Point::new(200.0, 900.0),
        }));
        state.handle(input(touch::Event::FingerLost {
            id: Finger(1),
            position: Point::new(200.0, 900.0),
        }));

        assert_eq!(state.phase(), Phase::Open);
        assert_eq!(state.target(), Target::default());
    }

    #[test]
    fn reopen_after_close_starts_from_new_origin() {
        let mut state = opened();
        state.handle(Message::Close);
        settle(&mut state);

        let other = OriginRect::new(200.0, 300.0, 50.0, 50.0);
        state.handle(Message::Open(other));
        assert_eq!(state.origin(), other);
        assert_eq!(state.frame().content, Rectangle::from(other));
    }
}
