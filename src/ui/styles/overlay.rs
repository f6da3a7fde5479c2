// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles: backdrop, header bar and close button.
//!
//! Every style takes the frame opacity so the backdrop and header fade
//! together with the open/close and drag animations.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Full-window backdrop in the configured color.
pub fn backdrop(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(color, alpha))),
        ..Default::default()
    }
}

/// Transparent bar holding the header; only its text fades.
pub fn header(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(faded(WHITE, alpha)),
        ..Default::default()
    }
}

/// Round close button of the default header.
pub fn close_button(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => opacity::OVERLAY_MEDIUM,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_SUBTLE,
        };

        button::Style {
            background: Some(Background::Color(faded(
                Color {
                    a: background,
                    ..BLACK
                },
                alpha,
            ))),
            text_color: faded(WHITE, alpha),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Tint drawn over a pressed thumbnail when none is configured.
#[must_use]
pub fn default_underlay() -> Color {
    Color {
        a: opacity::UNDERLAY,
        ..BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_alpha_scales_with_frame_opacity() {
        let style = backdrop(BLACK, 0.5)(&Theme::Dark);
        let Some(Background::Color(color)) = style.background else {
            panic!("expected color background");
        };
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn backdrop_keeps_configured_translucency() {
        let translucent = Color::from_rgba(0.0, 0.0, 0.0, 0.8);
        let style = backdrop(translucent, 0.5)(&Theme::Dark);
        let Some(Background::Color(color)) = style.background else {
            panic!("expected color background");
        };
        assert!((color.a - 0.4).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_opacity_is_clamped() {
        assert_eq!(faded(WHITE, 3.0).a, 1.0);
        assert_eq!(faded(WHITE, -1.0).a, 0.0);
    }
}
