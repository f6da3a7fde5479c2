// SPDX-License-Identifier: MPL-2.0
//! Application root: a thumbnail gallery whose images open in lightboxes.
//!
//! The `App` struct owns one [`Lightbox`](crate::lightbox::Lightbox) per
//! thumbnail and routes window input to whichever overlay is presented.
//! With navigator presentation the overlay on screen is the one on top of
//! the route stack; inline, it is the lightbox whose overlay is not closed.

pub mod gallery;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::lightbox::{self, Event, LightboxId, Navigator, Presentation, RouteStack};
use crate::ui::theming::ThemeMode;
use gallery::Entry;
use crate::error::Error;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    presentation: Presentation,
    entries: Vec<Entry>,
    routes: RouteStack,
    window_size: Size,
    /// Transient line shown under the gallery.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("entries", &self.entries.len())
            .field("presented", &self.presented())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::default(),
            presentation: Presentation::default(),
            entries: Vec::new(),
            routes: RouteStack::new(),
            window_size: default_window_size(),
            status: None,
        }
    }
}

impl App {
    /// Initializes application state from the flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut props = config.lightbox.props();
        if flags.navigator {
            props.presentation = Presentation::Navigator;
        }

        let collected = gallery::collect_images(&flags.paths);
        tracing::info!(
            count = collected.images.len(),
            skipped = collected.skipped.len(),
            presentation = ?props.presentation,
            "gallery ready"
        );

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            presentation: props.presentation,
            entries: gallery::entries(collected.images, props),
            ..Self::default()
        };
        app.status = config_warning
            .map(|key| app.i18n.tr(&key))
            .or_else(|| skipped_status(&app.i18n, &collected.skipped));
        app.broadcast_window_size();

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    /// Lightbox whose overlay is on screen.
    fn presented(&self) -> Option<LightboxId> {
        match self.presentation {
            Presentation::Navigator => self.routes.top().map(|route| route.lightbox),
            Presentation::Inline => self
                .entries
                .iter()
                .find(|entry| entry.lightbox.is_presented())
                .map(|entry| entry.lightbox.id()),
        }
    }

    fn is_animating(&self) -> bool {
        self.entries.iter().any(|entry| entry.lightbox.is_animating())
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.presented().is_some());
        let tick_sub = subscription::create_tick_subscription(self.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Lightbox(id, message) => {
                if matches!(message, lightbox::Message::Pressed(_)) && self.presented().is_some() {
                    return Task::none();
                }
                self.dispatch(id, message);
            }
            Message::RawEvent(event) => {
                if let iced::Event::Window(window::Event::Resized(size)) = event {
                    self.window_size = size;
                    self.broadcast_window_size();
                } else if let Some(id) = self.presented() {
                    self.dispatch(id, lightbox::Message::Overlay(
                        lightbox::overlay::Message::Input(event),
                    ));
                }
            }
            Message::Tick(now) => {
                let animating: Vec<LightboxId> = self
                    .entries
                    .iter()
                    .filter(|entry| entry.lightbox.is_animating())
                    .map(|entry| entry.lightbox.id())
                    .collect();
                for id in animating {
                    self.dispatch(id, lightbox::Message::Overlay(
                        lightbox::overlay::Message::Tick(now),
                    ));
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            entries: &self.entries,
            presented: self.presented(),
            window_size: self.window_size,
            status: self.status.as_deref(),
        })
    }

    fn broadcast_window_size(&mut self) {
        let size = self.window_size;
        for entry in &mut self.entries {
            entry.lightbox.update(
                lightbox::Message::Overlay(lightbox::overlay::Message::WindowResized(size)),
                None,
            );
        }
    }

    fn dispatch(&mut self, id: LightboxId, message: lightbox::Message) {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.lightbox.id() == id) else {
            tracing::warn!(lightbox = id, "message for unknown lightbox");
            return;
        };

        let navigator: Option<&mut dyn Navigator> =
            if entry.lightbox.props().presentation == Presentation::Navigator {
                Some(&mut self.routes)
            } else {
                None
            };

        for event in entry.lightbox.update(message, navigator) {
            match event {
                Event::LongPress => {
                    self.status = Some(self.i18n.tr_with_args(
                        "gallery-long-press",
                        &[("name", entry.display_name().into())],
                    ));
                }
                Event::OnOpen => self.status = None,
                Event::DidOpen | Event::WillClose | Event::OnClose => {
                    tracing::info!(lightbox = id, ?event, "lightbox transition");
                }
            }
        }
    }
}

/// Status line for inputs that could not be shown, naming the first reason.
fn skipped_status(i18n: &I18n, skipped: &[(PathBuf, Error)]) -> Option<String> {
    let (_, first) = skipped.first()?;
    let count = i64::try_from(skipped.len()).unwrap_or(i64::MAX);
    Some(i18n.tr_with_args(
        "gallery-skipped",
        &[
            ("count", count.into()),
            ("reason", i18n.tr(first.i18n_key()).into()),
        ],
    ))
}
