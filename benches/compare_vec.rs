#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use rand::Rng;

use spill_vec::SpillVec;

const INLINE: usize = 32;

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 32;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("spillvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = SpillVec::<usize, INLINE>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("spillvec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = SpillVec::<usize, INLINE>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("spillvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = SpillVec::<usize, INLINE>::new();
                buf.extend(black_box(0..count));
            });
        });

        c.bench_function(&format!("stdvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });

        let mut rng = rand::thread_rng();
        let data: Vec<usize> = (0..count).map(|_| rng.gen()).collect();

        c.bench_function(
            &format!("spillvec extend from slice {} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = SpillVec::<usize, INLINE>::new();
                    buf.extend_from_slice(black_box(&data));
                });
            },
        );

        c.bench_function(&format!("stdvec extend from slice {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                buf.extend_from_slice(black_box(&data));
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
