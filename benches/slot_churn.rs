// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast presentation churn.
//!
//! Measures the performance of:
//! - Superseding the presented toast across many emitters
//! - A full present, time out and exit cycle
//! - Sampling the layers a view draws each frame

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::toast::{
    install_coordinator, ContentBox, CoordinatorOptions, EmitterConfig, ManualClock,
};
use std::hint::black_box;
use std::time::Duration;

const EMITTERS: usize = 32;

fn options() -> CoordinatorOptions {
    CoordinatorOptions {
        transition_duration: Duration::from_millis(250),
    }
}

/// Benchmark last-write-wins supersession.
///
/// Every emitter presents in turn, so each write lowers the previous
/// emitter's flag and starts an exit.
fn bench_supersession(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_churn");

    let clock = ManualClock::new();
    let scope = install_coordinator(clock.clone(), options());
    let emitters: Vec<_> = (0..EMITTERS)
        .map(|index| scope.attach_emitter(EmitterConfig::new(ContentBox::new(index))))
        .collect();

    group.bench_function("supersede_32_emitters", |b| {
        b.iter(|| {
            for emitter in &emitters {
                emitter.set_presented(true);
            }
            clock.advance(Duration::from_millis(250));
            scope.coordinator().tick();
            black_box(scope.coordinator().state());
        });
    });

    group.finish();
}

/// Benchmark a complete toast lifecycle driven by the dismiss timer.
fn bench_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_churn");

    let clock = ManualClock::new();
    let scope = install_coordinator(clock.clone(), options());
    let emitter = scope.attach_emitter(
        EmitterConfig::new(ContentBox::new("saved")).with_duration(Duration::from_secs(2)),
    );

    group.bench_function("present_timeout_exit", |b| {
        b.iter(|| {
            emitter.set_presented(true);
            clock.advance(Duration::from_secs(2));
            scope.coordinator().tick();
            clock.advance(Duration::from_millis(250));
            scope.coordinator().tick();
            black_box(emitter.is_presented());
        });
    });

    group.finish();
}

/// Benchmark what a view pays per frame while a toast is superseded mid-enter.
fn bench_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_churn");

    let clock = ManualClock::new();
    let scope = install_coordinator(clock.clone(), options());
    let first = scope.attach_emitter(EmitterConfig::new(ContentBox::new(1)));
    let second = scope.attach_emitter(EmitterConfig::new(ContentBox::new(2)));
    first.set_presented(true);
    clock.advance(Duration::from_millis(100));
    second.set_presented(true);

    group.bench_function("sample_layers", |b| {
        b.iter(|| {
            let frames: Vec<_> = scope
                .coordinator()
                .layers()
                .iter()
                .map(|layer| layer.frame())
                .collect();
            black_box(frames);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_supersession, bench_lifecycle, bench_layers);
criterion_main!(benches);
