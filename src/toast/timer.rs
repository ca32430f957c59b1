// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers keyed by toast identifier.
//!
//! Timers are deadlines, not threads. The update loop polls
//! [`TimerRegistry::take_expired`] on every tick; an expired timer is removed
//! from the registry as it is handed out, so it can fire at most once, and a
//! cancelled timer is never handed out at all.

use super::entry::ToastId;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current time for timer bookkeeping.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Virtual clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to a manager.
///
/// # Example
///
/// ```
/// use iced_toasts::toast::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        // The closure always returns Some, so the update cannot fail.
        let _ = self
            .offset_nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |offset| {
                Some(offset.saturating_add(nanos))
            });
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + Duration::from_nanos(self.offset_nanos.load(Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    deadline: Instant,
    /// Start order, used to break deadline ties deterministically.
    seq: u64,
}

/// Owns at most one live countdown per toast identifier.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    timers: HashMap<ToastId, Timer>,
    next_seq: u64,
}

impl TimerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a countdown of `duration` beginning at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRegistered`] if `id` already has a live timer.
    /// The existing timer is left untouched.
    ///
    /// A duration too long to be represented as a deadline registers nothing,
    /// so the toast never expires.
    pub fn start(&mut self, id: ToastId, duration: Duration, now: Instant) -> Result<()> {
        if self.timers.contains_key(&id) {
            tracing::error!(%id, "timer started twice without cancel");
            return Err(Error::AlreadyRegistered(id));
        }
        let Some(deadline) = now.checked_add(duration) else {
            tracing::debug!(%id, ?duration, "deadline out of range, toast will not expire");
            return Ok(());
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(id, Timer { deadline, seq });
        Ok(())
    }

    /// Cancels the timer for `id`.
    ///
    /// Idempotent: cancelling an absent or already fired timer is a no-op.
    /// Returns whether a live timer was removed.
    pub fn cancel(&mut self, id: ToastId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    #[must_use]
    pub fn is_live(&self, id: ToastId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Time left on the timer for `id`, saturating at zero.
    #[must_use]
    pub fn remaining(&self, id: ToastId, now: Instant) -> Option<Duration> {
        self.timers
            .get(&id)
            .map(|timer| timer.deadline.saturating_duration_since(now))
    }

    /// Earliest deadline among live timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|timer| timer.deadline).min()
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// ordered by deadline, then by start order.
    pub fn take_expired(&mut self, now: Instant) -> Vec<ToastId> {
        let mut expired: Vec<(ToastId, Timer)> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(id, timer)| (*id, *timer))
            .collect();
        expired.sort_by_key(|(_, timer)| (timer.deadline, timer.seq));

        for (id, _) in &expired {
            self.timers.remove(id);
        }
        expired.into_iter().map(|(id, _)| id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::entry::IdGenerator;

    fn ids(n: usize) -> Vec<ToastId> {
        let mut generator = IdGenerator::default();
        (0..n).map(|_| generator.next_id()).collect()
    }

    #[test]
    fn start_twice_is_rejected() {
        let clock = ManualClock::new();
        let id = ids(1)[0];
        let mut registry = TimerRegistry::new();

        registry
            .start(id, Duration::from_secs(1), clock.now())
            .expect("first start succeeds");
        assert_eq!(
            registry.start(id, Duration::from_secs(5), clock.now()),
            Err(Error::AlreadyRegistered(id))
        );

        // The original deadline is kept.
        clock.advance(Duration::from_secs(1));
        assert_eq!(registry.take_expired(clock.now()), vec![id]);
    }

    #[test]
    fn unrepresentable_deadline_registers_nothing() {
        let clock = ManualClock::new();
        let id = ids(1)[0];
        let mut registry = TimerRegistry::new();

        assert!(registry.start(id, Duration::MAX, clock.now()).is_ok());
        assert!(!registry.is_live(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn manual_clock_saturates_instead_of_wrapping() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(1));
        let before = clock.now();

        clock.advance(Duration::MAX);
        let after = clock.now();
        clock.advance(Duration::MAX);

        assert!(after > before);
        assert_eq!(clock.now(), after);
    }

    #[test]
    fn start_after_cancel_is_allowed() {
        let clock = ManualClock::new();
        let id = ids(1)[0];
        let mut registry = TimerRegistry::new();

        registry.start(id, Duration::from_secs(1), clock.now()).unwrap();
        assert!(registry.cancel(id));
        assert!(registry.start(id, Duration::from_secs(1), clock.now()).is_ok());
    }

    #[test]
    fn cancel_is_idempotent() {
        let id = ids(1)[0];
        let mut registry = TimerRegistry::new();
        assert!(!registry.cancel(id));
        assert!(!registry.cancel(id));
    }

    #[test]
    fn expiry_is_delivered_exactly_once() {
        let clock = ManualClock::new();
        let id = ids(1)[0];
        let mut registry = TimerRegistry::new();
        registry.start(id, Duration::from_millis(300), clock.now()).unwrap();

        clock.advance(Duration::from_millis(299));
        assert!(registry.take_expired(clock.now()).is_empty());

        clock.advance(Duration::from_millis(1));
        assert_eq!(registry.take_expired(clock.now()), vec![id]);

        clock.advance(Duration::from_secs(10));
        assert!(registry.take_expired(clock.now()).is_empty());
        assert!(!registry.is_live(id));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let clock = ManualClock::new();
        let id = ids(1)[0];
        let mut registry = TimerRegistry::new();
        registry.start(id, Duration::from_millis(100), clock.now()).unwrap();
        registry.cancel(id);

        clock.advance(Duration::from_secs(1));
        assert!(registry.take_expired(clock.now()).is_empty());
    }

    #[test]
    fn expired_timers_come_out_in_deadline_order() {
        let clock = ManualClock::new();
        let all = ids(3);
        let mut registry = TimerRegistry::new();
        registry.start(all[0], Duration::from_millis(500), clock.now()).unwrap();
        registry.start(all[1], Duration::from_millis(100), clock.now()).unwrap();
        registry.start(all[2], Duration::from_millis(100), clock.now()).unwrap();

        assert_eq!(
            registry.next_deadline(),
            Some(clock.now() + Duration::from_millis(100))
        );

        clock.advance(Duration::from_secs(1));
        assert_eq!(
            registry.take_expired(clock.now()),
            vec![all[1], all[2], all[0]]
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let clock = ManualClock::new();
        let id = ids(1)[0];
        let mut registry = TimerRegistry::new();
        registry.start(id, Duration::from_millis(100), clock.now()).unwrap();

        clock.advance(Duration::from_millis(40));
        assert_eq!(
            registry.remaining(id, clock.now()),
            Some(Duration::from_millis(60))
        );
        clock.advance(Duration::from_millis(100));
        assert_eq!(registry.remaining(id, clock.now()), Some(Duration::ZERO));
    }

    #[test]
    fn cancel_all_clears_everything() {
        let clock = ManualClock::new();
        let mut registry = TimerRegistry::new();
        for id in ids(4) {
            registry.start(id, Duration::from_millis(10), clock.now()).unwrap();
        }
        assert_eq!(registry.len(), 4);

        registry.cancel_all();
        clock.advance(Duration::from_secs(1));
        assert!(registry.take_expired(clock.now()).is_empty());
        assert!(registry.next_deadline().is_none());
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let before = other.now();
        clock.advance(Duration::from_secs(2));
        assert_eq!(other.now() - before, Duration::from_secs(2));
    }
}
