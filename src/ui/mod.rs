// SPDX-License-Identifier: MPL-2.0
//! Iced presentation layer for the toast core.
//!
//! Follows the Elm-style "state down, messages up" pattern: the overlay reads
//! the manager's visible set and emits [`Message`](crate::toast::Message)s
//! that the host application routes back to
//! [`Manager::handle_message`](crate::toast::Manager::handle_message).
//!
//! - [`toast`] - Toast card and overlay widgets
//! - [`subscription`] - Tick subscription that drives auto-dismiss
//! - [`theming`] - Per-kind light/dark palettes and theme mode
//! - [`icons`] - Default glyph per toast kind
//! - [`design_tokens`] - Design system constants (spacing, sizing, radii)

pub mod design_tokens;
pub mod icons;
pub mod subscription;
pub mod theming;
pub mod toast;

pub use theming::{ColorScheme, KindPalette, ThemeMode, ToastTheme};
pub use toast::Toast;
