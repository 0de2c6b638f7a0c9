use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion};
use outcome_rail::{Errors, Outcome, Status};
use std::hint::black_box;

pub fn bench_construction(c: &mut Criterion) {
    c.bench_function("core/success", |b| b.iter(|| black_box(Outcome::success(black_box(42u64)))));

    c.bench_function("core/fail_static", |b| b.iter(|| black_box(Outcome::<u64>::fail("static message"))));

    c.bench_function("core/fail_owned", |b| {
        b.iter(|| black_box(Outcome::<u64>::fail(format!("user {} not found", black_box(7)))))
    });
}

pub fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/combine");

    for count in [1usize, 4, 16, 64] {
        let statuses: Vec<Status> =
            (0..count).map(|i| if i % 2 == 0 { Status::fail("invalid field") } else { Status::SUCCESS }).collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &statuses, |b, statuses| {
            b.iter(|| black_box(statuses.iter().cloned().sum::<Status>()))
        });
    }
    group.finish();
}

pub fn bench_fail_message(c: &mut Criterion) {
    let mut errors = Errors::new("first");
    for i in 0..16 {
        errors.push(format!("error {}", i));
    }
    let failed: Outcome<()> = errors.into_outcome();

    c.bench_function("core/fail_message_17", |b| b.iter(|| black_box(failed.fail_message())));
    c.bench_function("core/fail_as_17", |b| b.iter(|| black_box(failed.fail_as::<String>())));
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets = bench_construction, bench_combine, bench_fail_message,
}
