// SPDX-License-Identifier: MPL-2.0
//! Glyphs used as toast icons.
//!
//! Icons are plain text glyphs so the overlay needs no bundled assets.

use crate::toast::{Icon, ToastKind};

pub const CHECKMARK: &str = "\u{2713}";
pub const CROSS: &str = "\u{2715}";
pub const WARNING: &str = "\u{26A0}";
pub const INFO: &str = "\u{2139}";

/// Close affordance on every toast.
pub const CLOSE: &str = "\u{00D7}";

/// Built-in glyph for a kind. Custom toasts have none.
#[must_use]
pub fn default_glyph(kind: ToastKind) -> Option<&'static str> {
    match kind {
        ToastKind::Success => Some(CHECKMARK),
        ToastKind::Error => Some(CROSS),
        ToastKind::Warning => Some(WARNING),
        ToastKind::Info => Some(INFO),
        ToastKind::Custom => None,
    }
}

/// Resolves the glyph to draw for `icon` on a toast of `kind`.
#[must_use]
pub fn resolve(icon: &Icon, kind: ToastKind) -> Option<&str> {
    match icon {
        Icon::Default => default_glyph(kind),
        Icon::Glyph(glyph) => Some(glyph.as_str()),
        Icon::Hidden => None,
    }
}
