// SPDX-License-Identifier: MPL-2.0
//! A pressable wrapper that reports its own bounds.
//!
//! The lightbox needs the thumbnail's on-screen rectangle at the moment it
//! is pressed, which a plain button cannot provide. This widget publishes
//! `on_press(bounds)` when a press is released inside it, or `on_long_press`
//! once a press has been held for [`LONG_PRESS_DURATION`]. A long press never
//! also produces a regular press.

use crate::config::LONG_PRESS_DURATION;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::time::{Duration, Instant};
use iced::{touch, window, Color, Element, Event, Length, Rectangle, Size};

#[derive(Debug, Default)]
struct State {
    pressed_at: Option<Instant>,
    long_pressed: bool,
}

/// Pointer transitions relevant to a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Down,
    Up { inside: bool },
    Cancel,
}

/// Outcome of a press released after `held`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Press {
    Short,
    Long,
}

impl Press {
    fn classify(held: Duration) -> Self {
        if held >= LONG_PRESS_DURATION {
            Press::Long
        } else {
            Press::Short
        }
    }
}

/// Wraps content and reports presses together with its layout bounds.
pub struct TriggerArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_press: Option<Box<dyn Fn(Rectangle) -> Message + 'a>>,
    on_long_press: Option<Message>,
    underlay: Option<Color>,
}

impl<'a, Message, Theme, Renderer> TriggerArea<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_press: None,
            on_long_press: None,
            underlay: None,
        }
    }

    /// Message built from the content bounds when a press is released inside.
    #[must_use]
    pub fn on_press(mut self, on_press: impl Fn(Rectangle) -> Message + 'a) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    #[must_use]
    pub fn on_long_press(mut self, message: Message) -> Self {
        self.on_long_press = Some(message);
        self
    }

    /// Tint drawn over the content while pressed.
    #[must_use]
    pub fn underlay(mut self, color: Option<Color>) -> Self {
        self.underlay = color;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for TriggerArea<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );

        let state = tree.state.downcast_ref::<State>();
        if let (Some(_), Some(color)) = (state.pressed_at, self.underlay) {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: layout.bounds(),
                    ..renderer::Quad::default()
                },
                color,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();

        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            if let Some(pressed_at) = state.pressed_at {
                let held = now.saturating_duration_since(pressed_at);
                if !state.long_pressed && Press::classify(held) == Press::Long {
                    state.long_pressed = true;
                    if let Some(message) = self.on_long_press.clone() {
                        shell.publish(message);
                    }
                }
            }
            return;
        }

        match pointer_action(event, cursor, bounds) {
            Some(Pointer::Down) => {
                if state.pressed_at.is_none() {
                    let now = Instant::now();
                    state.pressed_at = Some(now);
                    state.long_pressed = false;
                    shell.request_redraw();
                    shell.request_redraw_at(now + LONG_PRESS_DURATION);
                    shell.capture_event();
                }
            }
            Some(Pointer::Up { inside }) => {
                if let Some(pressed_at) = state.pressed_at.take() {
                    if inside && !state.long_pressed {
                        // No redraw may have observed the threshold yet.
                        let message = match Press::classify(pressed_at.elapsed()) {
                            Press::Short => self.on_press.as_ref().map(|f| f(bounds)),
                            Press::Long => self.on_long_press.clone(),
                        };
                        if let Some(message) = message {
                            shell.publish(message);
                        }
                    }
                    state.long_pressed = false;
                    shell.request_redraw();
                    shell.capture_event();
                }
            }
            Some(Pointer::Cancel) => {
                if state.pressed_at.take().is_some() {
                    state.long_pressed = false;
                    shell.request_redraw();
                }
            }
            None => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.on_press.is_some() && cursor.is_over(layout.bounds()) {
            return mouse::Interaction::Pointer;
        }

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<TriggerArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: TriggerArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

/// Helper function to create a trigger area.
pub fn trigger_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> TriggerArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    TriggerArea::new(content)
}

fn pointer_action(event: &Event, cursor: mouse::Cursor, bounds: Rectangle) -> Option<Pointer> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.is_over(bounds).then_some(Pointer::Down)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            bounds.contains(*position).then_some(Pointer::Down)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Pointer::Up {
            inside: cursor.is_over(bounds),
        }),
        Event::Touch(touch::Event::FingerLifted { position, .. }) => Some(Pointer::Up {
            inside: bounds.contains(*position),
        }),
        Event::Mouse(mouse::Event::CursorLeft) | Event::Touch(touch::Event::FingerLost { .. }) => {
            Some(Pointer::Cancel)
        }
        _ => None,
    }
}
