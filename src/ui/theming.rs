// SPDX-License-Identifier: MPL-2.0
//! Toast palettes for light and dark appearance.
//!
//! The theme is a plain value handed to the overlay at render time; nothing
//! here is global.

use crate::error::Error;
use crate::toast::ToastKind;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors for one toast kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindPalette {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub icon: Color,
}

impl KindPalette {
    fn from_hex(background: u32, text: u32, border: u32, icon: u32) -> Self {
        Self {
            background: hex(background),
            text: hex(text),
            border: hex(border),
            icon: hex(icon),
        }
    }
}

fn hex(rgb: u32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::from_rgb8(r, g, b)
}

/// Per-kind palettes for one appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub info: KindPalette,
    pub success: KindPalette,
    pub error: KindPalette,
    pub warning: KindPalette,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            info: KindPalette::from_hex(0xEFF6FF, 0x1E40AF, 0xBFDBFE, 0x3B82F6),
            success: KindPalette::from_hex(0xF0FDF4, 0x166534, 0xBBF7D0, 0x22C55E),
            error: KindPalette::from_hex(0xFEF2F2, 0x991B1B, 0xFECACA, 0xEF4444),
            warning: KindPalette::from_hex(0xFFFBEB, 0x9A3412, 0xFED7AA, 0xF59E0B),
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            info: KindPalette::from_hex(0x1E3A8A, 0xFFFFFF, 0x1E40AF, 0x60A5FA),
            success: KindPalette::from_hex(0x166534, 0xFFFFFF, 0x15803D, 0x4ADE80),
            error: KindPalette::from_hex(0x991B1B, 0xFFFFFF, 0xB91C1C, 0xFCA5A5),
            warning: KindPalette::from_hex(0x9A3412, 0xFFFFFF, 0xC2410C, 0xFBBF24),
        }
    }

    /// Palette for `kind`. Custom toasts borrow the info palette.
    #[must_use]
    pub fn for_kind(&self, kind: ToastKind) -> &KindPalette {
        match kind {
            ToastKind::Info | ToastKind::Custom => &self.info,
            ToastKind::Success => &self.success,
            ToastKind::Error => &self.error,
            ToastKind::Warning => &self.warning,
        }
    }
}

/// Light and dark schemes; the active one is picked by [`ThemeMode`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToastTheme {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ToastTheme {
    fn default() -> Self {
        Self {
            light: ColorScheme::light(),
            dark: ColorScheme::dark(),
        }
    }
}

impl ToastTheme {
    /// Returns the scheme for `mode`, detecting the system preference when
    /// needed.
    #[must_use]
    pub fn scheme(&self, mode: ThemeMode) -> &ColorScheme {
        if mode.is_dark() {
            &self.dark
        } else {
            &self.light
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(Error::Config(format!("invalid theme_mode: {}", other))),
        }
    }
}
