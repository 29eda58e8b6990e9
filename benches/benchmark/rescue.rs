use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use sugar_rail::rescue::{catch, must, or, try_run};

pub fn bench_must_ok(c: &mut Criterion) {
    c.bench_function("rescue/must_ok", |b| {
        b.iter(|| black_box(must(Ok::<_, &str>(black_box(42)))))
    });
}

pub fn bench_try_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("rescue/try_run");

    group.bench_function("completes", |b| {
        b.iter(|| black_box(try_run(|| black_box(42))))
    });

    group.bench_function("parse_then_or", |b| {
        b.iter(|| {
            let (value, ok) = try_run(|| must(black_box("1234").parse::<i32>()));
            black_box(or(value, ok, 0))
        })
    });

    group.finish();
}

pub fn bench_catch_panicking(c: &mut Criterion) {
    // contained panics are not printed, so the report stays readable
    c.bench_function("rescue/catch_panicking", |b| {
        b.iter(|| black_box(catch(|| must(black_box("abc").parse::<i32>()))))
    });
}

criterion_group! {
    name = rescue_benches;
    config = configure_criterion();
    targets = bench_must_ok, bench_try_run, bench_catch_panicking,
}
