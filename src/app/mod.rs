// SPDX-License-Identifier: MPL-2.0
//! Toast playground: a small Iced application exercising the toast manager.
//!
//! Buttons show each toast kind at the chosen anchor, optionally sticky, and
//! trigger the bulk operations. The overlay is layered on top of the controls
//! with a `Stack`, the way a host application would mount it.

mod message;

pub use message::{Flags, Message};

use crate::config;
use crate::toast::{self, Manager, ToastDescriptor, ToastKind, ToastPosition, ToastRequest};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::subscription::create_tick_subscription;
use crate::ui::{ThemeMode, Toast, ToastTheme};
use iced::widget::{button, toggler, Column, Container, Row, Stack, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;

/// Root playground state.
pub struct App {
    manager: Manager,
    theme: ToastTheme,
    theme_mode: ThemeMode,
    position: ToastPosition,
    sticky: bool,
    shown: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("manager", &self.manager)
            .field("theme_mode", &self.theme_mode)
            .field("position", &self.position)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires Fn for boot, flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the manager from the persisted config with CLI overrides applied.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.map(Into::into));

        if let Some(max_visible) = flags.max_visible {
            config.queue.max_visible = Some(max_visible);
        }
        if let Some(position) = flags.position {
            config.queue.default_position = Some(position);
        }
        if let Some(mode) = flags.theme_mode {
            config.appearance.theme_mode = mode;
        }

        let mut manager = Manager::with_config(&config);
        manager.set_bridge(Box::new(|toasts: &[ToastDescriptor]| {
            tracing::debug!(visible = toasts.len(), "visible set changed");
        }));

        if let Some(warning) = config_warning {
            if let Err(err) = manager.show(ToastRequest::warning(format!(
                "Could not read settings, using defaults: {warning}"
            ))) {
                tracing::warn!(%err, "config warning toast rejected");
            }
        }

        let app = App {
            manager,
            theme: ToastTheme::default(),
            theme_mode: config.appearance.theme_mode,
            position: config.default_position(),
            sticky: false,
            shown: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!(
            "Toast Playground ({} visible, {} pending)",
            self.manager.visible_count(),
            self.manager.pending_count()
        )
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        create_tick_subscription(&self.manager).map(Message::Toast)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => {
                self.manager.handle_message(&toast_message);
            }
            Message::Show(kind) => {
                self.shown += 1;
                let mut request = ToastRequest::new(sample_message(kind, self.shown))
                    .kind(kind)
                    .position(self.position);
                if self.sticky {
                    request = request.sticky();
                }
                if kind == ToastKind::Custom {
                    request = request.glyph("\u{2605}");
                }
                if let Err(err) = self.manager.show(request) {
                    tracing::warn!(%err, "toast rejected");
                }
            }
            Message::ShowInvalid => {
                if let Err(err) = self.manager.show(ToastRequest::new("")) {
                    // Surface the rejection itself as a toast
                    tracing::info!(%err, "empty toast rejected");
                    if let Err(err) = self.manager.error(err.to_string()) {
                        tracing::warn!(%err, "toast rejected");
                    }
                }
            }
            Message::SetPosition(position) => self.position = position,
            Message::ToggleSticky(sticky) => self.sticky = sticky,
            Message::ToggleTheme => {
                self.theme_mode = if self.theme_mode.is_dark() {
                    ThemeMode::Light
                } else {
                    ThemeMode::Dark
                };
            }
            Message::DismissOldest => {
                self.manager.handle_message(&toast::Message::DismissOldest);
            }
            Message::DismissAll => {
                self.manager.handle_message(&toast::Message::DismissAll);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let kinds = ToastKind::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, kind| {
                row.push(
                    button(Text::new(format!("{kind:?}")).size(typography::BODY))
                        .on_press(Message::Show(*kind)),
                )
            },
        );

        let anchors = Row::new()
            .spacing(spacing::XS)
            .push(position_button("Top", ToastPosition::Top, self.position))
            .push(position_button("Bottom", ToastPosition::Bottom, self.position));

        let sticky_toggle = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new("Sticky (no auto-dismiss)").size(typography::BODY))
            .push(toggler(self.sticky).on_toggle(Message::ToggleSticky));

        let bulk = Row::new()
            .spacing(spacing::XS)
            .push(button(Text::new("Dismiss oldest")).on_press(Message::DismissOldest))
            .push(button(Text::new("Dismiss all")).on_press(Message::DismissAll))
            .push(button(Text::new("Empty message")).on_press(Message::ShowInvalid))
            .push(button(Text::new("Toggle theme")).on_press(Message::ToggleTheme));

        let controls = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("Toast Playground").size(typography::TITLE_MD))
            .push(kinds)
            .push(anchors)
            .push(sticky_toggle)
            .push(bulk)
            .push(Text::new(format!(
                "{} visible / {} pending (max {})",
                self.manager.visible_count(),
                self.manager.pending_count(),
                self.manager.max_visible()
            )));

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let scheme = self.theme.scheme(self.theme_mode);
        Stack::new()
            .push(content)
            .push(Toast::view_overlay(&self.manager, scheme).map(Message::Toast))
            .into()
    }
}

fn position_button<'a>(
    label: &'a str,
    position: ToastPosition,
    current: ToastPosition,
) -> Element<'a, Message> {
    let mut btn = button(Text::new(label));
    if position != current {
        btn = btn.on_press(Message::SetPosition(position));
    }
    btn.into()
}

fn sample_message(kind: ToastKind, n: u32) -> String {
    match kind {
        ToastKind::Info => format!("Heads up! This is info toast #{n}."),
        ToastKind::Success => format!("Saved successfully (#{n})."),
        ToastKind::Error => format!("Something went wrong (#{n})."),
        ToastKind::Warning => format!("Careful, battery is low (#{n})."),
        ToastKind::Custom => format!("A custom toast (#{n})."),
    }
}
