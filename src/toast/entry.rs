// SPDX-License-Identifier: MPL-2.0
//! Admitted toasts and the descriptors handed to the presentation layer.

use super::request::{Icon, StyleOverrides, ToastDuration, ToastKind, ToastPosition};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast, never reused within one manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic identifier source owned by one manager.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub(crate) fn next_id(&mut self) -> ToastId {
        let id = ToastId(self.next);
        self.next += 1;
        id
    }
}

/// Where an admitted toast currently lives.
///
/// Dismissed toasts are gone from the manager entirely, so there is no
/// variant for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Pending,
    Visible,
}

/// A toast request with every default resolved and an identifier assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub(crate) id: ToastId,
    pub(crate) kind: ToastKind,
    pub(crate) message: String,
    pub(crate) duration: ToastDuration,
    pub(crate) position: ToastPosition,
    pub(crate) icon: Icon,
    pub(crate) style: StyleOverrides,
}

impl ToastEntry {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position
    }

    #[must_use]
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    #[must_use]
    pub fn style(&self) -> &StyleOverrides {
        &self.style
    }
}

/// Snapshot of one visible toast, as fed to a render bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastDescriptor {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub position: ToastPosition,
    pub icon: Icon,
    pub style: StyleOverrides,
    /// Position in the visible set, 0 being the newest.
    pub stack_index: usize,
    pub is_visible: bool,
    /// Time left before auto-dismiss, `None` for toasts without a timer.
    pub remaining: Option<Duration>,
}

impl ToastDescriptor {
    pub(crate) fn from_entry(
        entry: &ToastEntry,
        stack_index: usize,
        remaining: Option<Duration>,
    ) -> Self {
        Self {
            id: entry.id,
            kind: entry.kind,
            message: entry.message.clone(),
            position: entry.position,
            icon: entry.icon.clone(),
            style: entry.style,
            stack_index,
            is_visible: true,
            remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_increasing() {
        let mut ids = IdGenerator::default();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert_ne!(a, b);
        assert!(a < b && b < c);
    }

    #[test]
    fn id_display_is_prefixed() {
        let mut ids = IdGenerator::default();
        ids.next_id();
        assert_eq!(ids.next_id().to_string(), "#1");
    }
}
