// SPDX-License-Identifier: MPL-2.0
//! Gallery application showcasing the widget kit.
//!
//! The `App` struct owns every component state (toasts, inputs, sidebar
//! menu), forwards component messages and turns component events into
//! effects: pushing toasts, switching theme or anchor, saving settings.

pub mod menu;
mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::input;
use crate::ui::sidebar_menu::{self, MenuItem};
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{
    Anchor, AutoDismiss, ToastDescriptor, ToastEvent, ToastId, ToastKind, ToastStack,
};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Error shown under the email field when the value has no `@`.
pub const EMAIL_ERROR: &str = "Enter a valid email address";

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    config: Config,
    config_path: Option<PathBuf>,
    theme_mode: ThemeMode,
    toasts: ToastStack,
    /// Time of the last tick, used to render exit animations.
    now: Instant,
    anchor: Anchor,
    auto_dismiss: AutoDismiss,
    /// Toast shown and hidden through its open flag.
    pinned: Option<ToastId>,
    pinned_open: bool,
    closed_count: usize,
    menu_items: Vec<MenuItem>,
    menu: sidebar_menu::State,
    menu_open: bool,
    /// Controlled value of the name input.
    name: String,
    name_input: input::State,
    email_input: input::State,
    password_input: input::State,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot; flags are consumed on the first call only
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
        Self::with_config(Config::default(), None, Instant::now())
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = match &flags.config_path {
            Some(path) if path.exists() => config::load_or_default(path),
            Some(_) => (Config::default(), None),
            None => config::load(),
        };

        let now = Instant::now();
        let mut app = Self::with_config(config, flags.config_path, now);
        if let Some(theme) = flags.theme {
            app.theme_mode = theme;
        }
        if let Some(warning) = warning {
            app.push_toast(ToastDescriptor::warning(warning).duration_ms(0), now);
        }

        tracing::info!(
            theme = app.theme_mode.label(),
            anchor = app.anchor.label(),
            "gallery started"
        );
        (app, Task::none())
    }

    fn with_config(config: Config, config_path: Option<PathBuf>, now: Instant) -> Self {
        Self {
            theme_mode: config.general.theme_mode,
            toasts: ToastStack::new().with_exit_delay(config.toast.exit_delay()),
            now,
            anchor: config.toast.anchor(),
            auto_dismiss: config.toast.auto_dismiss(),
            pinned: None,
            pinned_open: false,
            closed_count: 0,
            menu_items: menu::items(),
            menu: sidebar_menu::State::new(),
            menu_open: false,
            name: String::new(),
            name_input: input::State::new(),
            email_input: input::State::new(),
            password_input: input::State::new(),
            config,
            config_path,
        }
    }

    fn title(&self) -> String {
        format!("Iced UI Kit ({} toasts)", self.toasts.rendered_len())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toasts.has_pending_timers())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(instant) => *instant,
            _ => Instant::now(),
        };
        self.update_at(message, now);
        Task::none()
    }

    /// Applies `message` as if it arrived at `now`.
    fn update_at(&mut self, message: Message, now: Instant) {
        self.now = now;

        match message {
            Message::Toast(toast_message) => {
                for event in self.toasts.update(toast_message, now) {
                    self.handle_toast_event(event);
                }
            }
            Message::Tick(_) => {
                for id in self.toasts.tick(now) {
                    self.handle_toast_event(ToastEvent::Closed(id));
                }
            }
            Message::ShowToast(kind) => {
                self.show_toast(kind, now);
            }
            Message::ShowSticky => {
                let descriptor = ToastDescriptor::info("This toast stays until you close it")
                    .auto_dismiss(AutoDismiss::Never);
                self.push_toast(descriptor, now);
            }
            Message::TogglePinned => self.toggle_pinned(now),
            Message::CloseAll => {
                let ids: Vec<ToastId> = self.toasts.iter().map(|(id, _)| id).collect();
                for id in ids {
                    self.toasts.request_close(id, now);
                }
            }
            Message::CycleAnchor => self.anchor = self.anchor.next(),
            Message::CycleTheme => self.theme_mode = self.theme_mode.next(),
            Message::OpenMenu => self.menu_open = true,
            Message::Menu(menu_message) => {
                match sidebar_menu::update(&mut self.menu, &self.menu_items, menu_message) {
                    sidebar_menu::Event::None => {}
                    sidebar_menu::Event::CloseRequested => self.menu_open = false,
                    sidebar_menu::Event::Activated(id) => {
                        self.menu_open = false;
                        if let Some(action) = menu::action(&id) {
                            self.run_menu_action(action, now);
                        }
                    }
                }
            }
            Message::NameInput(input_message) => {
                if let input::Event::Changed(value) =
                    input::update(&mut self.name_input, input_message, true)
                {
                    self.name = value;
                }
            }
            Message::EmailInput(input_message) => {
                input::update(&mut self.email_input, input_message, false);
            }
            Message::PasswordInput(input_message) => {
                input::update(&mut self.password_input, input_message, false);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            now: self.now,
            anchor: self.anchor,
            theme_mode: self.theme_mode,
            pinned_open: self.pinned_open,
            closed_count: self.closed_count,
            menu: &self.menu,
            menu_items: &self.menu_items,
            menu_open: self.menu_open,
            menu_title: self.config.sidebar.title(),
            name: &self.name,
            name_input: &self.name_input,
            email_input: &self.email_input,
            email_error: email_error(self.email_input.internal_value()),
            password_input: &self.password_input,
        })
    }

    fn push_toast(&mut self, descriptor: ToastDescriptor, now: Instant) -> ToastId {
        self.toasts.push(descriptor, now)
    }

    fn show_toast(&mut self, kind: ToastKind, now: Instant) -> ToastId {
        let message = match kind {
            ToastKind::Success => "Changes saved",
            ToastKind::Error => "Something went wrong",
            ToastKind::Info => "Here is some information",
            ToastKind::Warning => "Careful with that",
        };
        let descriptor = ToastDescriptor::new(message)
            .kind(kind)
            .auto_dismiss(self.auto_dismiss);
        self.push_toast(descriptor, now)
    }

    fn toggle_pinned(&mut self, now: Instant) {
        match self.pinned {
            Some(id) => {
                self.pinned_open = !self.pinned_open;
                self.toasts.set_open(id, self.pinned_open, now);
            }
            None => {
                let descriptor = ToastDescriptor::info("Pinned toast, toggled from the gallery")
                    .auto_dismiss(AutoDismiss::Never)
                    .closable(false);
                self.pinned = Some(self.push_toast(descriptor, now));
                self.pinned_open = true;
            }
        }
    }

    fn handle_toast_event(&mut self, event: ToastEvent) {
        match event {
            ToastEvent::Closed(id) => {
                self.closed_count += 1;
                if self.pinned == Some(id) {
                    self.pinned = None;
                    self.pinned_open = false;
                }
                tracing::info!(?id, total = self.closed_count, "toast closed");
            }
        }
    }

    fn run_menu_action(&mut self, action: menu::Action, now: Instant) {
        match action {
            menu::Action::ShowToast(kind) => {
                self.show_toast(kind, now);
            }
            menu::Action::CycleTheme => self.theme_mode = self.theme_mode.next(),
            menu::Action::CycleAnchor => self.anchor = self.anchor.next(),
            menu::Action::SaveSettings => self.save_settings(now),
        }
    }

    fn save_settings(&mut self, now: Instant) {
        self.config.general.theme_mode = self.theme_mode;
        self.config.toast.anchor = Some(self.anchor);

        let result = match &self.config_path {
            Some(path) => config::save_to_path(&self.config, path),
            None => config::save(&self.config),
        };

        let descriptor = match result {
            Ok(()) => ToastDescriptor::success("Settings saved"),
            Err(err) => {
                tracing::error!(error = %err, "failed to save settings");
                ToastDescriptor::error(format!("Could not save settings: {err}"))
            }
        };
        self.push_toast(descriptor.auto_dismiss(self.auto_dismiss), now);
    }
}

/// Validation of the email field: only non-empty values are checked.
fn email_error(value: &str) -> Option<&'static str> {
    (!value.is_empty() && !value.contains('@')).then_some(EMAIL_ERROR)
}
