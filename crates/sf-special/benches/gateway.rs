//! Cost of the evaluation gateway relative to calling the backend directly.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sf_core::NullSink;
use sf_math::special::{hyp1f1 as hyp1f1_backend, ibeta, powm1 as powm1_backend};
use sf_special::beta::BETAINC;
use sf_special::{betainc, hyp1f1, powm1_saturating};

fn bench_betainc(c: &mut Criterion) {
    let mut group = c.benchmark_group("betainc");
    group.bench_function("backend", |b| b.iter(|| ibeta(black_box(2.5), black_box(4.0), black_box(0.3))));
    group.bench_function("gateway", |b| b.iter(|| betainc(black_box(2.5), black_box(4.0), black_box(0.3))));
    group.bench_function("limiting_case", |b| {
        b.iter(|| betainc(black_box(0.0), black_box(4.0), black_box(0.3)))
    });
    group.bench_function("domain_error_null_sink", |b| {
        b.iter(|| BETAINC.evaluate_with(&NullSink, black_box([2.5, 4.0, 1.5]), |&[a, b, x]| ibeta(a, b, x)))
    });
    group.finish();
}

fn bench_powm1(c: &mut Criterion) {
    let mut group = c.benchmark_group("powm1");
    group.bench_function("backend", |b| b.iter(|| powm1_backend(black_box(1.000_001), black_box(3.0))));
    group.bench_function("gateway", |b| b.iter(|| powm1_saturating(black_box(1.000_001), black_box(3.0))));
    group.finish();
}

fn bench_hyp1f1(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyp1f1");
    group.bench_function("backend", |b| b.iter(|| hyp1f1_backend(black_box(0.5), black_box(1.5), black_box(2.0))));
    group.bench_function("gateway", |b| b.iter(|| hyp1f1(black_box(0.5), black_box(1.5), black_box(2.0))));
    group.finish();
}

criterion_group!(benches, bench_betainc, bench_powm1, bench_hyp1f1);
criterion_main!(benches);
