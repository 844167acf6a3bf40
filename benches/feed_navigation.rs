// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for feed navigation operations.
//!
//! Measures the performance of:
//! - Wheel-driven index stepping
//! - Full drag gestures (begin / move / end)
//! - Counter formatting used by every card render

use criterion::{criterion_group, criterion_main, Criterion};
use iced_reels::catalog::format_count;
use iced_reels::feed::{Pager, DRAG_THRESHOLD};
use std::hint::black_box;

fn bench_wheel_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_navigation");

    group.bench_function("wheel_sweep", |b| {
        b.iter(|| {
            let mut pager = Pager::new(100);
            for _ in 0..99 {
                black_box(pager.on_wheel(1.0));
            }
            for _ in 0..99 {
                black_box(pager.on_wheel(-1.0));
            }
            black_box(&pager);
        });
    });

    group.finish();
}

fn bench_drag_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_navigation");

    group.bench_function("drag_gesture", |b| {
        b.iter(|| {
            let mut pager = Pager::new(100);
            for step in 0..50 {
                let origin = 500.0 + step as f32;
                pager.begin_drag(origin);
                black_box(pager.update_drag(origin - DRAG_THRESHOLD / 2.0));
                black_box(pager.update_drag(origin - DRAG_THRESHOLD - 1.0));
                pager.end_drag();
            }
            black_box(&pager);
        });
    });

    group.finish();
}

fn bench_format_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_navigation");

    group.bench_function("format_count", |b| {
        b.iter(|| {
            for n in [0u64, 999, 1_500, 12_400, 999_950, 1_250_000, 98_700_000] {
                black_box(format_count(black_box(n)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_wheel_navigation,
    bench_drag_gesture,
    bench_format_count
);
criterion_main!(benches);
