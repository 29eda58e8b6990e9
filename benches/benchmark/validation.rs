use crate::common::{configure_criterion, usernames};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use sugar_rail::validation::{max_length, min_length, not_empty};
use sugar_rail::validators;

pub fn bench_chain_validate(c: &mut Criterion) {
    let chain = validators![not_empty(), min_length(3), max_length(16)];
    let inputs = usernames();

    let mut group = c.benchmark_group("validation");

    group.bench_function("chain_short_circuit", |b| {
        b.iter(|| {
            let accepted = inputs
                .iter()
                .filter(|name| chain.validate(name).is_ok())
                .count();
            black_box(accepted)
        })
    });

    group.bench_function("chain_failures_all", |b| {
        b.iter(|| {
            let reasons: usize = inputs.iter().map(|name| chain.failures(name).len()).sum();
            black_box(reasons)
        })
    });

    group.bench_function("chain_construction", |b| {
        b.iter(|| black_box(validators![not_empty(), min_length(3), max_length(16)]))
    });

    group.finish();
}

criterion_group! {
    name = validation_benches;
    config = configure_criterion();
    targets = bench_chain_validate,
}
