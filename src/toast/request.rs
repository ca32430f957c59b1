// SPDX-License-Identifier: MPL-2.0
//! Toast requests and the vocabulary they are built from.
//!
//! A [`ToastRequest`] is what callers hand to the manager. Every field except
//! the message is optional; unset fields are resolved against the provider
//! configuration when the request is admitted.

use crate::error::{Error, Result};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Semantic category of a toast. Determines palette and default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
    /// No default icon; appearance is left to the style overrides.
    Custom,
}

impl ToastKind {
    /// All kinds, in display order.
    pub const ALL: [ToastKind; 5] = [
        ToastKind::Info,
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Warning,
        ToastKind::Custom,
    ];
}

/// Screen edge a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPosition {
    #[default]
    Top,
    Bottom,
}

impl std::str::FromStr for ToastPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "top" => Ok(ToastPosition::Top),
            "bottom" => Ok(ToastPosition::Bottom),
            other => Err(Error::Config(format!("invalid position: {}", other))),
        }
    }
}

/// How long a toast stays visible once it is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastDuration {
    Finite(Duration),
    /// Never auto-dismissed; only an explicit dismissal removes it.
    Infinite,
}

impl ToastDuration {
    /// Builds a duration from milliseconds. Zero means no auto-dismiss.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            ToastDuration::Infinite
        } else {
            ToastDuration::Finite(Duration::from_millis(ms))
        }
    }

    /// Returns the countdown length, or `None` when no timer should run.
    #[must_use]
    pub fn as_finite(self) -> Option<Duration> {
        match self {
            ToastDuration::Finite(d) if !d.is_zero() => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_infinite(self) -> bool {
        self.as_finite().is_none()
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        if duration.is_zero() {
            ToastDuration::Infinite
        } else {
            ToastDuration::Finite(duration)
        }
    }
}

/// Icon shown at the leading edge of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Icon {
    /// The kind's built-in glyph (none for [`ToastKind::Custom`]).
    #[default]
    Default,
    /// A caller-supplied text glyph.
    Glyph(String),
    Hidden,
}

/// Per-toast visual overrides. Unset fields fall back to the theme palette.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverrides {
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub border_color: Option<Color>,
    pub icon_color: Option<Color>,
    pub icon_size: Option<f32>,
    pub message_size: Option<f32>,
}

impl StyleOverrides {
    fn validate(&self) -> Result<()> {
        for (name, value) in [("icon_size", self.icon_size), ("message_size", self.message_size)] {
            if let Some(size) = value {
                if !size.is_finite() || size <= 0.0 {
                    return Err(Error::InvalidRequest(format!(
                        "{} must be a positive number, got {}",
                        name, size
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A request to show a toast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastRequest {
    pub kind: Option<ToastKind>,
    pub message: String,
    pub duration: Option<ToastDuration>,
    pub position: Option<ToastPosition>,
    pub icon: Icon,
    pub style: StyleOverrides,
}

impl ToastRequest {
    /// Creates a request with the given message and every other field unset.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastKind::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastKind::Warning)
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<ToastDuration>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Sets the duration in milliseconds; `0` disables auto-dismiss.
    #[must_use]
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration = Some(ToastDuration::from_millis(ms));
        self
    }

    /// Keeps the toast on screen until it is dismissed explicitly.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.duration = Some(ToastDuration::Infinite);
        self
    }

    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn glyph(self, glyph: impl Into<String>) -> Self {
        self.icon(Icon::Glyph(glyph.into()))
    }

    #[must_use]
    pub fn icon_size(mut self, size: f32) -> Self {
        self.style.icon_size = Some(size);
        self
    }

    #[must_use]
    pub fn icon_color(mut self, color: Color) -> Self {
        self.style.icon_color = Some(color);
        self
    }

    #[must_use]
    pub fn style(mut self, style: StyleOverrides) -> Self {
        self.style = style;
        self
    }

    /// Checks the request without touching any state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for an empty or blank message, a blank
    /// custom glyph, or a non-positive size override.
    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(Error::InvalidRequest("message is empty".to_string()));
        }
        if let Icon::Glyph(glyph) = &self.icon {
            if glyph.trim().is_empty() {
                return Err(Error::InvalidRequest("icon glyph is empty".to_string()));
            }
        }
        self.style.validate()
    }
}
