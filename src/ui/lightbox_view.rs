// SPDX-License-Identifier: MPL-2.0
//! Rendering of a lightbox: the thumbnail trigger and the overlay layers.

use crate::lightbox::{Frame, Lightbox, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::trigger_area;
use iced::widget::{button, container, opaque, pin, row, text, Space, Stack};
use iced::{alignment, Element, Length};

/// What a header renderer receives.
#[derive(Debug, Clone)]
pub struct HeaderContext<M> {
    /// Message that closes the lightbox.
    pub close: M,
    /// Current backdrop opacity, for headers that fade along.
    pub opacity: f32,
    /// Localized label of the close control.
    pub close_label: String,
}

/// Thumbnail that opens `lightbox` when pressed. `map` lifts lightbox
/// messages into the host's message type.
pub fn trigger<'a, M>(
    lightbox: &Lightbox,
    thumbnail: impl Into<Element<'a, M>>,
    map: impl Fn(Message) -> M + 'a,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let props = lightbox.props();
    let underlay = props
        .underlay_color
        .unwrap_or_else(styles::overlay::default_underlay);
    let long_press = map(Message::LongPressed);

    trigger_area(thumbnail)
        .on_press(move |bounds| map(Message::Pressed(bounds)))
        .on_long_press(long_press)
        .underlay(Some(underlay))
        .into()
}

/// Header with a single close button in the top-right corner.
pub fn default_header<'a, M>(context: HeaderContext<M>) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let label = row![
        text("×").size(typography::CLOSE_GLYPH),
        text(context.close_label).size(typography::BODY),
    ]
    .spacing(spacing::XS)
    .align_y(alignment::Vertical::Center);

    let close = button(label)
        .height(Length::Fixed(sizing::CLOSE_BUTTON))
        .padding([0.0, spacing::SM])
        .on_press(context.close)
        .style(styles::overlay::close_button(context.opacity));

    row![Space::new().width(Length::Fill), close]
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Overlay layers for one frame: backdrop, positioned content, header.
///
/// The result is opaque to pointer input so nothing underneath reacts
/// while the overlay is presented.
pub fn overlay<'a, M>(
    frame: Frame,
    background: iced::Color,
    content: impl Into<Element<'a, M>>,
    header: Element<'a, M>,
) -> Element<'a, M>
where
    M: 'a,
{
    let backdrop = container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop(background, frame.opacity));

    let positioned = container(
        pin(container(content)
            .width(Length::Fixed(frame.content.width.max(0.0)))
            .height(Length::Fixed(frame.content.height.max(0.0)))
            .clip(true))
        .x(frame.content.x)
        .y(frame.content.y),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .clip(true);

    let header = container(header)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay::header(frame.opacity));

    opaque(
        Stack::with_children([backdrop.into(), positioned.into(), header.into()])
            .width(Length::Fill)
            .height(Length::Fill),
    )
}
