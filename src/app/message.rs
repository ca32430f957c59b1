// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the playground.

use crate::toast::{self, ToastKind, ToastPosition};
use crate::ui::ThemeMode;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the toast manager (close buttons, ticks).
    Toast(toast::Message),
    /// Show a toast of the given kind with the current controls.
    Show(ToastKind),
    /// Try to show a toast with an empty message.
    ShowInvalid,
    SetPosition(ToastPosition),
    ToggleSticky(bool),
    ToggleTheme,
    DismissOldest,
    DismissAll,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Overrides `[queue] max_visible`.
    pub max_visible: Option<usize>,
    /// Overrides `[queue] default_position`.
    pub position: Option<ToastPosition>,
    /// Overrides `[appearance] theme_mode`.
    pub theme_mode: Option<ThemeMode>,
    /// Optional config directory override (for toasts.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
