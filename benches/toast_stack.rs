// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast timer evaluation.
//!
//! Measures the performance of:
//! - Ticking a stack where no timer is due
//! - A full dismissal wave (every toast closing on the same tick)

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use iced_uikit::config::DEFAULT_TOAST_DURATION_MS;
use iced_uikit::ui::toast::{ToastDescriptor, ToastStack};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn filled_stack(count: usize, now: Instant) -> ToastStack {
    let mut stack = ToastStack::new();
    for i in 0..count {
        stack.push(ToastDescriptor::new(format!("toast {i}")), now);
    }
    stack
}

/// Benchmark a tick where every toast is still visible.
fn bench_idle_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_stack");
    let t0 = Instant::now();

    for count in [10usize, 100, 1000] {
        let mut stack = filled_stack(count, t0);
        let now = t0 + Duration::from_millis(100);

        group.bench_with_input(BenchmarkId::new("idle_tick", count), &count, |b, _| {
            b.iter(|| black_box(stack.tick(black_box(now))));
        });
    }

    group.finish();
}

/// Benchmark the tick that closes and removes every toast.
fn bench_dismissal_wave(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_stack");
    let t0 = Instant::now();
    let after_exit = t0 + Duration::from_secs(10);

    for count in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("dismissal_wave", count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let mut stack = filled_stack(count, t0);
                    // moves every toast to Closing
                    stack.tick(t0 + Duration::from_millis(DEFAULT_TOAST_DURATION_MS));
                    stack
                },
                |mut stack| black_box(stack.tick(after_exit)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_idle_tick, bench_dismissal_wave);
criterion_main!(benches);
