//! Performance benchmarks for schema validation
//!
//! Measures compile cost and validation of valid and invalid contact forms.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use serde_json::{json, Value};
use shape_guard::report;

#[path = "../tests/common/mod.rs"]
mod common;

use common::{contact_schema, contact_with, valid_contact};

/// Builds `count` inputs where every tenth one fails on several fields
fn mixed_inputs(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            if i % 10 == 0 {
                let mut input = contact_with("email", json!("not-an-email"));
                input["street"] = json!("Main 10");
                input["checkbox"] = json!("maybe");
                input
            } else {
                contact_with("firstName", json!(format!("User{i}")))
            }
        })
        .collect()
}

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_contact_schema", |b| {
        b.iter(|| std::hint::black_box(contact_schema()))
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let schema = contact_schema();
    let valid = valid_contact();
    let empty = json!({});

    group.bench_function("valid_contact", |b| {
        b.iter(|| std::hint::black_box(schema.validate(&valid)))
    });

    group.bench_function("all_fields_missing", |b| {
        b.iter(|| std::hint::black_box(schema.validate(&empty)))
    });

    group.bench_function("mixed_batch_1k", |b| {
        b.iter_batched(
            || mixed_inputs(1_000),
            |inputs| {
                let failures = inputs
                    .iter()
                    .filter(|input| schema.validate(input).is_failure())
                    .count();
                std::hint::black_box(failures)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_reporting(c: &mut Criterion) {
    let schema = contact_schema();
    let result = schema.validate(&json!({ "firstName": "", "street": 10 }));
    let issues = result.issues();

    c.bench_function("error_tree_json", |b| {
        b.iter(|| std::hint::black_box(report::to_tree(issues).to_json()))
    });
    c.bench_function("error_text", |b| {
        b.iter(|| std::hint::black_box(report::to_text(issues)))
    });
}

criterion_group!(benches, bench_compile, bench_validate, bench_reporting);
criterion_main!(benches);
