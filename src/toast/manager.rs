// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the visible set, the pending queue and the auto-dismiss
//! timers. It limits the number of visible toasts, queues the rest in FIFO
//! order and promotes them as slots free up.
//!
//! Every public operation runs to completion before the next one starts, and
//! the render bridge is notified once at the end, so dismissal and the
//! promotion it triggers are observed as a single state change.

use super::bridge::RenderBridge;
use super::entry::{IdGenerator, ToastDescriptor, ToastEntry, ToastId, ToastPhase};
use super::request::{ToastDuration, ToastPosition, ToastRequest};
use super::timer::{Clock, SystemClock, TimerRegistry};
use crate::config::{Config, MAX_MAX_VISIBLE, MIN_MAX_VISIBLE};
use crate::error::Result;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID (close button or swipe).
    Dismiss(ToastId),
    /// Dismiss the oldest visible toast.
    DismissOldest,
    /// Drop every visible and pending toast.
    DismissAll,
    /// Tick for delivering auto-dismiss timers.
    Tick(Instant),
}

/// Path by which a toast left the manager; only used for logging.
#[derive(Debug, Clone, Copy)]
enum DismissCause {
    Manual,
    Oldest,
    Timer,
    Filter,
}

/// Manages the toast queue and visible toasts.
pub struct Manager {
    /// Currently visible toasts (newest first).
    visible: VecDeque<ToastEntry>,
    /// Admitted toasts waiting for a free slot (oldest first).
    pending: VecDeque<ToastEntry>,
    timers: TimerRegistry,
    ids: IdGenerator,
    max_visible: usize,
    default_duration: ToastDuration,
    default_position: ToastPosition,
    clock: Arc<dyn Clock>,
    bridge: Option<Box<dyn RenderBridge>>,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("visible", &self.visible.len())
            .field("pending", &self.pending.len())
            .field("timers", &self.timers.len())
            .field("max_visible", &self.max_visible)
            .field("has_bridge", &self.bridge.is_some())
            .finish()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a manager reading time from `clock`, typically a
    /// [`ManualClock`](super::ManualClock) in tests.
    #[must_use]
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            visible: VecDeque::new(),
            pending: VecDeque::new(),
            timers: TimerRegistry::new(),
            ids: IdGenerator::default(),
            max_visible: config.max_visible(),
            default_duration: config.default_duration(),
            default_position: config.default_position(),
            clock,
            bridge: None,
        }
    }

    /// Attaches the render bridge and feeds it the current visible set.
    pub fn set_bridge(&mut self, bridge: Box<dyn RenderBridge>) {
        self.bridge = Some(bridge);
        self.notify();
    }

    /// Shows a toast, or queues it if the visible set is full.
    ///
    /// Unset request fields are resolved here: kind defaults to info, position
    /// and duration to the configured defaults. A queued toast's timer only
    /// starts once it is promoted, so its on-screen time always matches the
    /// requested duration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`](crate::error::Error::InvalidRequest)
    /// for a malformed request. Nothing is mutated in that case.
    pub fn show(&mut self, request: ToastRequest) -> Result<ToastId> {
        request.validate()?;

        let entry = ToastEntry {
            id: self.ids.next_id(),
            kind: request.kind.unwrap_or_default(),
            message: request.message,
            duration: request.duration.unwrap_or(self.default_duration),
            position: request.position.unwrap_or(self.default_position),
            icon: request.icon,
            style: request.style,
        };
        let id = entry.id;

        if self.visible.len() < self.max_visible {
            tracing::debug!(%id, kind = ?entry.kind, "toast admitted");
            self.make_visible(entry);
            self.notify();
        } else {
            tracing::debug!(%id, pending = self.pending.len() + 1, "toast queued");
            self.pending.push_back(entry);
        }

        Ok(id)
    }

    pub fn info(&mut self, message: impl Into<String>) -> Result<ToastId> {
        self.show(ToastRequest::info(message))
    }

    pub fn success(&mut self, message: impl Into<String>) -> Result<ToastId> {
        self.show(ToastRequest::success(message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> Result<ToastId> {
        self.show(ToastRequest::error(message))
    }

    pub fn warning(&mut self, message: impl Into<String>) -> Result<ToastId> {
        self.show(ToastRequest::warning(message))
    }

    /// Dismisses a toast by its ID, visible or pending.
    ///
    /// Returns `true` if the toast was found and removed. Unknown or already
    /// dismissed IDs are ignored, which makes racing dismissals harmless.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.dismiss_with_cause(id, DismissCause::Manual)
    }

    /// Inbound render bridge call for gesture or close-button dismissals.
    pub fn request_dismiss(&mut self, id: ToastId) -> bool {
        self.dismiss(id)
    }

    /// Dismisses the oldest visible toast, returning its ID.
    pub fn dismiss_oldest(&mut self) -> Option<ToastId> {
        let id = self.visible.back()?.id;
        self.dismiss_with_cause(id, DismissCause::Oldest);
        Some(id)
    }

    /// Dismisses `id`, or the oldest visible toast when `id` is `None`.
    pub fn hide(&mut self, id: Option<ToastId>) {
        match id {
            Some(id) => {
                self.dismiss(id);
            }
            None => {
                self.dismiss_oldest();
            }
        }
    }

    /// Clears all toasts (visible and pending) and cancels every timer.
    pub fn dismiss_all(&mut self) {
        let had_visible = !self.visible.is_empty();
        tracing::debug!(
            visible = self.visible.len(),
            pending = self.pending.len(),
            "dismissing all toasts"
        );

        self.timers.cancel_all();
        self.visible.clear();
        self.pending.clear();

        if had_visible {
            self.notify();
        }
    }

    /// Dismisses every toast, visible or pending, matching `predicate`.
    ///
    /// Returns the number of toasts removed.
    pub fn dismiss_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&ToastEntry) -> bool,
    {
        let doomed: Vec<ToastId> = self
            .visible
            .iter()
            .chain(self.pending.iter())
            .filter(|entry| predicate(*entry))
            .map(ToastEntry::id)
            .collect();

        let mut visible_removed = false;
        for id in &doomed {
            if self.remove(*id, DismissCause::Filter) == Some(ToastPhase::Visible) {
                visible_removed = true;
            }
        }

        if visible_removed {
            self.promote_from_queue();
            self.notify();
        }
        doomed.len()
    }

    /// Delivers every timer that has expired by now.
    ///
    /// Should be called periodically (e.g., every 100ms) while
    /// [`has_active_timers`](Self::has_active_timers) is true. Returns the IDs
    /// that were auto-dismissed, in deadline order.
    pub fn tick(&mut self) -> Vec<ToastId> {
        let now = self.clock.now();
        let expired = self.timers.take_expired(now);
        if expired.is_empty() {
            return expired;
        }

        let mut dismissed = Vec::with_capacity(expired.len());
        for id in expired {
            // The timer is gone already; the entry may have left by another path.
            match self.remove(id, DismissCause::Timer) {
                Some(_) => dismissed.push(id),
                None => tracing::trace!(%id, "stale timer expiry ignored"),
            }
        }

        if !dismissed.is_empty() {
            self.promote_from_queue();
            self.notify();
        }
        dismissed
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.request_dismiss(*id);
            }
            Message::DismissOldest => {
                self.dismiss_oldest();
            }
            Message::DismissAll => self.dismiss_all(),
            Message::Tick(_instant) => {
                self.tick();
            }
        }
    }

    /// Changes the visible capacity at runtime.
    ///
    /// Growing promotes pending toasts immediately. Shrinking never evicts a
    /// visible toast; the set drains down to the new limit as toasts leave.
    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.max_visible = max_visible.clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE);
        let before = self.visible.len();
        self.promote_from_queue();
        if self.visible.len() != before {
            self.notify();
        }
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Returns the currently visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &ToastEntry> {
        self.visible.iter()
    }

    /// Returns the pending toasts, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &ToastEntry> {
        self.pending.iter()
    }

    /// Snapshot of the visible set with stacking indices, as fed to the bridge.
    #[must_use]
    pub fn descriptors(&self) -> Vec<ToastDescriptor> {
        let now = self.clock.now();
        self.visible
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                ToastDescriptor::from_entry(entry, index, self.timers.remaining(entry.id, now))
            })
            .collect()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether there are any toasts (visible or pending).
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty() || !self.pending.is_empty()
    }

    #[must_use]
    pub fn has_active_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Earliest auto-dismiss deadline, if any timer is live.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.phase(id).is_some()
    }

    /// Where `id` currently lives, or `None` once dismissed.
    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        if self.visible.iter().any(|entry| entry.id == id) {
            Some(ToastPhase::Visible)
        } else if self.pending.iter().any(|entry| entry.id == id) {
            Some(ToastPhase::Pending)
        } else {
            None
        }
    }

    fn dismiss_with_cause(&mut self, id: ToastId, cause: DismissCause) -> bool {
        match self.remove(id, cause) {
            Some(ToastPhase::Visible) => {
                self.promote_from_queue();
                self.notify();
                true
            }
            Some(ToastPhase::Pending) => true,
            None => false,
        }
    }

    /// Cancels the timer for `id` and removes it from whichever set holds it.
    /// Does not promote.
    fn remove(&mut self, id: ToastId, cause: DismissCause) -> Option<ToastPhase> {
        self.timers.cancel(id);

        if let Some(pos) = self.visible.iter().position(|entry| entry.id == id) {
            self.visible.remove(pos);
            tracing::debug!(%id, ?cause, "visible toast dismissed");
            return Some(ToastPhase::Visible);
        }

        if let Some(pos) = self.pending.iter().position(|entry| entry.id == id) {
            self.pending.remove(pos);
            tracing::debug!(%id, ?cause, "pending toast dismissed");
            return Some(ToastPhase::Pending);
        }

        None
    }

    /// Inserts at the front of the visible set and starts the timer if the
    /// duration is finite.
    fn make_visible(&mut self, entry: ToastEntry) {
        if let Some(duration) = entry.duration.as_finite() {
            let now = self.clock.now();
            if let Err(err) = self.timers.start(entry.id, duration, now) {
                tracing::error!(%err, "toast shown without auto-dismiss timer");
            }
        }
        self.visible.push_front(entry);
    }

    /// Promotes pending toasts, oldest first, while there is space.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < self.max_visible {
            if let Some(entry) = self.pending.pop_front() {
                tracing::debug!(id = %entry.id, "pending toast promoted");
                self.make_visible(entry);
            } else {
                break;
            }
        }
    }

    fn notify(&mut self) {
        if self.bridge.is_none() {
            return;
        }
        let snapshot = self.descriptors();
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.visible_set_changed(&snapshot);
        }
    }
}
