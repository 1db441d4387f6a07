#[macro_use]
extern crate criterion;
extern crate librat;

use criterion::{black_box, Criterion};
use librat::{BigInt, _euclidean_gcd};

const INPUT: [(i64, i64); 3] = [
    (288_481, 22_783),
    (939_841_321, 28_847_717),
    (48_812, 284_829),
];

fn bench_euclidean_gcd_i64(c: &mut Criterion) {
    c.bench_function("euclidean_gcd_i64", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                _euclidean_gcd(black_box(*u), black_box(*v));
            }
        })
    });
}

fn bench_euclidean_gcd_bigint(c: &mut Criterion) {
    let input: Vec<(BigInt, BigInt)> = INPUT
        .iter()
        .map(|(u, v)| (BigInt::from(*u).pow(12), BigInt::from(*v).pow(12)))
        .collect();
    c.bench_function("euclidean_gcd_bigint", |b| {
        b.iter(|| {
            for (u, v) in input.iter() {
                _euclidean_gcd(black_box(u.clone()), black_box(v.clone()));
            }
        })
    });
}

criterion_group!(gcd_benches, bench_euclidean_gcd_i64, bench_euclidean_gcd_bigint);
criterion_main!(gcd_benches);
