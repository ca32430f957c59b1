// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast queue operations.
//!
//! Measures the performance of:
//! - Admission with a full visible set (queueing)
//! - Dismissal with promotion from a long pending queue
//! - Timer delivery on tick

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_toasts::config::Config;
use iced_toasts::toast::{ManualClock, Manager, ToastRequest};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

fn manager_with(clock: &ManualClock) -> Manager {
    Manager::with_clock(&Config::default(), Arc::new(clock.clone()))
}

/// Benchmark showing toasts past capacity.
fn bench_show(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");

    group.bench_function("show_200_sticky", |b| {
        b.iter_batched(
            || manager_with(&ManualClock::new()),
            |mut manager| {
                for n in 0..200 {
                    let _ = black_box(manager.show(ToastRequest::new(format!("toast {n}")).sticky()));
                }
                manager
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark draining a long queue through dismiss_oldest.
fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");

    group.bench_function("drain_200_by_oldest", |b| {
        b.iter_batched(
            || {
                let mut manager = manager_with(&ManualClock::new());
                for n in 0..200 {
                    let _ = manager.show(ToastRequest::new(format!("toast {n}")).sticky());
                }
                manager
            },
            |mut manager| {
                while let Some(id) = manager.dismiss_oldest() {
                    black_box(id);
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark a tick that expires every visible toast and promotes the queue.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");

    group.bench_function("tick_expire_and_promote", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let mut manager = manager_with(&clock);
                for n in 0..50 {
                    let _ = manager.show(ToastRequest::new(format!("toast {n}")).duration_ms(100));
                }
                clock.advance(Duration::from_millis(100));
                manager
            },
            |mut manager| black_box(manager.tick()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_show, bench_drain, bench_tick);
criterion_main!(benches);
