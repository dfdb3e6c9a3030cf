//! Benchmarks for the checked arithmetic core.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use safe_calc::domain::services::arithmetic;
use safe_calc::domain::validation;
use safe_calc::{Calculator, Operands, Operation, RawValue};

fn bench_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary");
    for operation in Operation::ALL.into_iter().filter(|op| op.arity().count() == 2) {
        group.bench_with_input(
            BenchmarkId::from_parameter(operation),
            &operation,
            |b, &operation| {
                b.iter(|| operation.apply(black_box(Operands::binary(12_345.678, 3.0))));
            },
        );
    }
    group.finish();
}

fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");
    for n in [10.0, 100.0, 170.0] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| arithmetic::factorial(black_box(n)));
        });
    }
    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let text = RawValue::from("  1.5e3 ");
    c.bench_function("parse_text_operand", |b| {
        b.iter(|| validation::parse(black_box(&text), validation::OPERAND));
    });
    c.bench_function("validate_result_range", |b| {
        b.iter(|| validation::validate_result_range(black_box(9.0e15), Operation::Multiply));
    });
}

fn bench_record(c: &mut Criterion) {
    let calculator = Calculator::new();
    c.bench_function("add_record", |b| {
        b.iter(|| calculator.add_record(black_box(2.0), black_box(3.0)).ok());
    });
}

criterion_group!(
    benches,
    bench_binary,
    bench_factorial,
    bench_validation,
    bench_record
);
criterion_main!(benches);
