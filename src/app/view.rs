// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is always drawn; the presented lightbox, if any, is layered
//! on top of it.

use super::gallery::Entry;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::lightbox::{self, LightboxId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lightbox_view::{self, HeaderContext};
use crate::ui::styles;
use iced::widget::{container, image, text, Column, Row, Stack};
use iced::{ContentFit, Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [Entry],
    /// Lightbox whose overlay is on screen.
    pub presented: Option<LightboxId>,
    pub window_size: Size,
    pub status: Option<&'a str>,
}

/// Renders the gallery and the presented overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = view_gallery(&ctx);

    let overlay = ctx
        .presented
        .and_then(|id| ctx.entries.iter().find(|entry| entry.lightbox.id() == id))
        .map(|entry| view_overlay(entry, ctx.i18n));

    match overlay {
        Some(overlay) => Stack::with_children([gallery, overlay])
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => gallery,
    }
}

/// Thumbnails per row for the given window width.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    let available = width - 2.0 * spacing::MD + spacing::XS;
    let cell = sizing::THUMBNAIL + spacing::XS;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let columns = (available / cell).floor().max(1.0) as usize;
    columns
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let footer = text(
        ctx.status
            .map_or_else(|| ctx.i18n.tr("gallery-hint"), ToString::to_string),
    )
    .size(typography::CAPTION);

    if ctx.entries.is_empty() {
        return container(
            Column::new()
                .push(text(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
                .spacing(spacing::SM),
        )
        .center(Length::Fill)
        .into();
    }

    let count = i64::try_from(ctx.entries.len()).unwrap_or(i64::MAX);
    let title = text(ctx.i18n.tr_with_args("gallery-count", &[("count", count.into())]))
        .size(typography::TITLE_MD);

    let mut grid = Column::new().spacing(spacing::XS);
    for chunk in ctx.entries.chunks(columns_for_width(ctx.window_size.width)) {
        let row = chunk.iter().fold(Row::new().spacing(spacing::XS), |row, entry| {
            row.push(view_thumbnail(entry))
        });
        grid = grid.push(row);
    }

    Column::new()
        .push(title)
        .push(grid)
        .push(footer)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_thumbnail(entry: &Entry) -> Element<'_, Message> {
    let id = entry.lightbox.id();
    let thumbnail = container(
        image(entry.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL)),
    )
    .style(styles::container::thumbnail);

    lightbox_view::trigger(&entry.lightbox, thumbnail, move |message| {
        Message::Lightbox(id, message)
    })
}

fn view_overlay<'a>(entry: &'a Entry, i18n: &I18n) -> Element<'a, Message> {
    let id = entry.lightbox.id();
    let frame = entry.lightbox.frame();

    let content = image(entry.handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let header = lightbox_view::default_header(HeaderContext {
        close: Message::Lightbox(id, lightbox::Message::Close),
        opacity: frame.opacity,
        close_label: i18n.tr("lightbox-close-label"),
    });

    lightbox_view::overlay(
        frame,
        entry.lightbox.props().background_color,
        content,
        header,
    )
}
