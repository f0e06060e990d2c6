//! Benchmarks for the built-in validators and the chain.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use sift_validator::prelude::*;

fn bench_string_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("string");

    group.bench_function("non_empty", |b| {
        b.iter(|| validate_non_empty_string(black_box("  alice  "), None));
    });
    group.bench_function("length", |b| {
        b.iter(|| validate_length(black_box("alice"), 3, 20, None));
    });
    group.bench_function("email", |b| {
        b.iter(|| validate_email(black_box("alice@example.com"), None));
    });
    group.bench_function("url", |b| {
        b.iter(|| validate_url(black_box("https://example.com/a/b?c=d"), None));
    });
    group.bench_function("one_of", |b| {
        let options = ["red", "green", "blue"];
        b.iter(|| validate_one_of(black_box("yellow"), &options, None));
    });

    group.finish();
}

fn bench_numeric_validators(c: &mut Criterion) {
    let value = json!(42);
    c.bench_function("number_range/json", |b| {
        b.iter(|| validate_number_range(black_box(&value), 0.0, 100.0, None));
    });
    c.bench_function("positive_integer/f64", |b| {
        b.iter(|| validate_positive_integer(black_box(&42.0), None));
    });
}

fn bench_chain(c: &mut Criterion) {
    let non_empty = |v: String| validate_non_empty_string(&v, None);
    let bounded = |v: String| validate_length(&v, 3, 32, None);
    let email = |v: String| validate_email(&v, None);
    let steps: [Step<'_, String>; 3] = [&non_empty, &bounded, &email];

    c.bench_function("chain/email_pipeline", |b| {
        b.iter(|| validate_all(black_box(" ops@example.com ".to_string()), &steps));
    });
}

criterion_group!(
    benches,
    bench_string_validators,
    bench_numeric_validators,
    bench_chain
);
criterion_main!(benches);
