// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config, QueueConfig};
use iced_toasts::toast::{
    Clock, ManualClock, Manager, Message, ToastDescriptor, ToastId, ToastKind, ToastPhase,
    ToastPosition, ToastRequest,
};
use iced_toasts::Error;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn config_with(max_visible: usize, default_duration_ms: u64) -> Config {
    Config {
        queue: QueueConfig {
            max_visible: Some(max_visible),
            default_duration_ms: Some(default_duration_ms),
            default_position: Some(ToastPosition::Top),
        },
        ..Config::default()
    }
}

fn manual_manager(max_visible: usize) -> (Manager, ManualClock) {
    let clock = ManualClock::new();
    let manager = Manager::with_clock(&config_with(max_visible, 3000), Arc::new(clock.clone()));
    (manager, clock)
}

fn visible_ids(manager: &Manager) -> Vec<ToastId> {
    manager.visible().map(|entry| entry.id()).collect()
}

fn pending_ids(manager: &Manager) -> Vec<ToastId> {
    manager.pending().map(|entry| entry.id()).collect()
}

fn sticky(manager: &mut Manager, message: &str) -> ToastId {
    manager
        .show(ToastRequest::new(message).sticky())
        .expect("valid request")
}

fn timed(manager: &mut Manager, message: &str, ms: u64) -> ToastId {
    manager
        .show(ToastRequest::new(message).duration_ms(ms))
        .expect("valid request")
}

type Snapshots = Arc<Mutex<Vec<Vec<ToastId>>>>;

fn record_bridge(manager: &mut Manager) -> Snapshots {
    let snapshots: Snapshots = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&snapshots);
    manager.set_bridge(Box::new(move |toasts: &[ToastDescriptor]| {
        for (index, toast) in toasts.iter().enumerate() {
            assert_eq!(toast.stack_index, index);
        }
        sink.lock()
            .expect("bridge lock")
            .push(toasts.iter().map(|toast| toast.id).collect());
    }));
    snapshots
}

#[test]
fn overflow_is_queued_and_promoted_newest_first() {
    let (mut manager, _clock) = manual_manager(3);
    let a = sticky(&mut manager, "A");
    let b = sticky(&mut manager, "B");
    let c = sticky(&mut manager, "C");
    let d = sticky(&mut manager, "D");
    let e = sticky(&mut manager, "E");

    assert_eq!(visible_ids(&manager), vec![c, b, a]);
    assert_eq!(pending_ids(&manager), vec![d, e]);

    assert!(manager.dismiss(b));
    assert_eq!(visible_ids(&manager), vec![d, c, a]);
    assert_eq!(pending_ids(&manager), vec![e]);
}

#[test]
fn infinite_toast_only_leaves_on_explicit_dismiss() {
    let (mut manager, clock) = manual_manager(3);
    let id = manager
        .show(ToastRequest::info("stays").duration_ms(0))
        .expect("valid request");

    assert!(!manager.has_active_timers());
    clock.advance(Duration::from_secs(3600));
    assert!(manager.tick().is_empty());
    assert_eq!(manager.phase(id), Some(ToastPhase::Visible));

    assert!(manager.dismiss(id));
    assert!(!manager.has_toasts());
}

#[test]
fn dismiss_all_clears_everything_without_promotion() {
    let (mut manager, clock) = manual_manager(2);
    for n in 0..5 {
        timed(&mut manager, &format!("toast {n}"), 500);
    }
    assert_eq!(manager.visible_count(), 2);
    assert_eq!(manager.pending_count(), 3);

    manager.dismiss_all();
    assert_eq!(manager.visible_count(), 0);
    assert_eq!(manager.pending_count(), 0);
    assert!(!manager.has_active_timers());

    clock.advance(Duration::from_secs(10));
    assert!(manager.tick().is_empty());
    assert!(!manager.has_toasts());
}

#[test]
fn visible_set_never_exceeds_capacity() {
    let (mut manager, clock) = manual_manager(3);
    for round in 0..20u64 {
        timed(&mut manager, &format!("toast {round}"), 100 + (round % 4) * 150);
        if round % 3 == 0 {
            manager.dismiss_oldest();
        }
        clock.advance(Duration::from_millis(120));
        manager.tick();

        assert!(manager.visible_count() <= manager.max_visible());
        // A free slot never coexists with waiting toasts.
        if manager.visible_count() < manager.max_visible() {
            assert_eq!(manager.pending_count(), 0);
        }
    }
}

#[test]
fn every_admitted_toast_lives_in_exactly_one_place() {
    let (mut manager, _clock) = manual_manager(2);
    let ids: Vec<ToastId> = (0..6).map(|n| sticky(&mut manager, &format!("{n}"))).collect();
    manager.dismiss(ids[4]);

    let visible = visible_ids(&manager);
    let pending = pending_ids(&manager);
    for id in &ids {
        let places = usize::from(visible.contains(id)) + usize::from(pending.contains(id));
        if *id == ids[4] {
            assert_eq!(places, 0);
        } else {
            assert_eq!(places, 1, "{id} found in {places} places");
        }
    }
}

#[test]
fn pending_queue_is_promoted_in_arrival_order() {
    let (mut manager, _clock) = manual_manager(1);
    let first = sticky(&mut manager, "first");
    let queued: Vec<ToastId> = (0..4).map(|n| sticky(&mut manager, &format!("q{n}"))).collect();

    manager.dismiss(first);
    let mut promoted = Vec::new();
    while let Some(id) = manager.dismiss_oldest() {
        promoted.push(id);
    }
    assert_eq!(promoted, queued);
}

#[test]
fn expired_timer_is_delivered_once() {
    let (mut manager, clock) = manual_manager(3);
    let id = timed(&mut manager, "short", 300);

    clock.advance(Duration::from_millis(299));
    assert!(manager.tick().is_empty());
    clock.advance(Duration::from_millis(1));
    assert_eq!(manager.tick(), vec![id]);

    clock.advance(Duration::from_secs(1));
    assert!(manager.tick().is_empty());
    assert!(!manager.dismiss(id));
}

#[test]
fn dismissing_twice_equals_dismissing_once() {
    let (mut manager, _clock) = manual_manager(1);
    let a = sticky(&mut manager, "A");
    let b = sticky(&mut manager, "B");
    let c = sticky(&mut manager, "C");

    assert!(manager.dismiss(a));
    assert!(!manager.dismiss(a));
    assert_eq!(visible_ids(&manager), vec![b]);
    assert_eq!(pending_ids(&manager), vec![c]);
}

#[test]
fn manual_dismiss_cancels_the_timer() {
    let (mut manager, clock) = manual_manager(3);
    let id = timed(&mut manager, "racing", 200);
    assert!(manager.dismiss(id));
    assert!(!manager.has_active_timers());

    clock.advance(Duration::from_millis(500));
    assert!(manager.tick().is_empty());
}

#[test]
fn promoted_toast_gets_its_full_duration() {
    let (mut manager, clock) = manual_manager(1);
    let first = timed(&mut manager, "first", 1000);
    let second = timed(&mut manager, "second", 1000);

    // Waiting in the queue does not eat into the second toast's time.
    clock.advance(Duration::from_millis(1000));
    assert_eq!(manager.tick(), vec![first]);
    assert_eq!(manager.phase(second), Some(ToastPhase::Visible));

    clock.advance(Duration::from_millis(999));
    assert!(manager.tick().is_empty());
    clock.advance(Duration::from_millis(1));
    assert_eq!(manager.tick(), vec![second]);
}

#[test]
fn bridge_sees_one_snapshot_per_change() {
    let (mut manager, _clock) = manual_manager(2);
    let snapshots = record_bridge(&mut manager);

    let a = sticky(&mut manager, "A");
    let b = sticky(&mut manager, "B");
    let c = sticky(&mut manager, "C");
    // Queued toast leaves the visible set untouched.
    assert_eq!(snapshots.lock().expect("lock").len(), 3);

    manager.hide(Some(a));
    let seen = snapshots.lock().expect("lock").clone();
    assert_eq!(seen, vec![vec![], vec![a], vec![b, a], vec![c, b]]);
}

#[test]
fn request_dismiss_routes_through_messages() {
    let (mut manager, _clock) = manual_manager(3);
    let a = sticky(&mut manager, "A");
    let b = sticky(&mut manager, "B");

    manager.handle_message(&Message::Dismiss(a));
    assert_eq!(visible_ids(&manager), vec![b]);
    manager.handle_message(&Message::Dismiss(a));
    manager.handle_message(&Message::DismissAll);
    assert!(!manager.has_toasts());
}

#[test]
fn tick_message_uses_the_manager_clock() {
    let (mut manager, clock) = manual_manager(3);
    let id = timed(&mut manager, "ticking", 100);

    // The instant carried by the message is ignored in favour of the clock.
    manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(60)));
    assert!(manager.contains(id));

    clock.advance(Duration::from_millis(100));
    manager.handle_message(&Message::Tick(Instant::now()));
    assert!(!manager.contains(id));
}

#[test]
fn invalid_requests_leave_state_untouched() {
    let (mut manager, _clock) = manual_manager(3);
    let snapshots = record_bridge(&mut manager);

    let err = manager.show(ToastRequest::new("   ")).unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
    assert!(!manager.has_toasts());
    assert_eq!(snapshots.lock().expect("lock").len(), 1);
}

#[test]
fn dismiss_matching_removes_from_both_collections() {
    let (mut manager, _clock) = manual_manager(2);
    manager.show(ToastRequest::error("e1").sticky()).expect("valid");
    let keep = sticky(&mut manager, "info");
    manager.show(ToastRequest::error("e2").sticky()).expect("valid");
    let queued_info = sticky(&mut manager, "info 2");

    let removed = manager.dismiss_matching(|entry| entry.kind() == ToastKind::Error);
    assert_eq!(removed, 2);
    assert_eq!(visible_ids(&manager), vec![queued_info, keep]);
    assert_eq!(manager.pending_count(), 0);
}

#[test]
fn growing_capacity_promotes_and_shrinking_drains() {
    let (mut manager, _clock) = manual_manager(1);
    let a = sticky(&mut manager, "A");
    let b = sticky(&mut manager, "B");
    let c = sticky(&mut manager, "C");

    manager.set_max_visible(3);
    assert_eq!(visible_ids(&manager), vec![c, b, a]);

    manager.set_max_visible(1);
    assert_eq!(manager.visible_count(), 3);
    let d = sticky(&mut manager, "D");
    assert_eq!(manager.phase(d), Some(ToastPhase::Pending));

    manager.dismiss(a);
    manager.dismiss(b);
    assert_eq!(visible_ids(&manager), vec![c]);
    manager.dismiss(c);
    assert_eq!(visible_ids(&manager), vec![d]);
}

#[test]
fn config_round_trip_drives_manager_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        queue: QueueConfig {
            max_visible: Some(2),
            default_duration_ms: Some(0),
            default_position: Some(ToastPosition::Bottom),
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let mut manager = Manager::with_config(&loaded);
    let id = manager.info("defaults").expect("valid request");
    let entry = manager.visible().next().expect("one visible toast");
    assert_eq!(entry.id(), id);
    assert_eq!(entry.position(), ToastPosition::Bottom);
    assert!(entry.duration().is_infinite());
    assert!(!manager.has_active_timers());
    assert_eq!(manager.max_visible(), 2);
}

#[test]
fn corrupt_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("toasts.toml"), "queue = [not toml")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

/// Clock reading tokio's pausable time.
#[derive(Debug)]
struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[tokio::test(start_paused = true)]
async fn timers_follow_paused_tokio_time() {
    let mut manager = Manager::with_clock(&config_with(3, 3000), Arc::new(TokioClock));
    let id = manager.success("saved").expect("valid request");

    tokio::time::advance(Duration::from_millis(2900)).await;
    assert!(manager.tick().is_empty());

    tokio::time::advance(Duration::from_millis(100)).await;
    assert_eq!(manager.tick(), vec![id]);
    assert!(!manager.has_toasts());
}
