// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: rotation interpolation
//!
//! Walks a batch of keyframe pairs and interpolates each at a fixed parameter.
//! `slerp` pays for `acos` and a trig round trip; `lerp` is a blend plus a
//! renormalisation.
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use lintra::dprec::{Angle, Quat, Vec3};

fn keyframes(n: usize) -> Vec<(Quat, Quat)> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            let axis = Vec3::new(1.0, 0.5 + f * 0.1, -0.25);
            (
                Quat::rotation(Angle::from_degrees(f * 3.0), axis),
                Quat::rotation(Angle::from_degrees(f * 3.0 + 40.0), axis),
            )
        })
        .collect()
}

fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat_interpolation");
    for &n in &[16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("slerp", n), &n, |b, &n| {
            b.iter_batched(
                || keyframes(n),
                |pairs| {
                    for (first, second) in pairs {
                        black_box(Quat::slerp(first, second, black_box(0.3)));
                    }
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("lerp", n), &n, |b, &n| {
            b.iter_batched(
                || keyframes(n),
                |pairs| {
                    for (first, second) in pairs {
                        black_box(Quat::lerp(first, second, black_box(0.3)));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_interpolation);
criterion_main!(benches);
