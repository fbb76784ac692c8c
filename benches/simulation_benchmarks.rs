//! Dice simulation benchmarks.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use platonic::catalog::{list_dice, DieKind};
use platonic::config::ReportConfig;
use platonic::engine::{simulate, simulate_die, FaceSampler, SimRng};
use platonic::report::FrequencyTable;

/// Throughput of a full run across roll counts.
fn bench_simulate_rolls(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_d6");
    group.sample_size(50);

    for rolls in [100u64, 10_000, 100_000] {
        group.throughput(Throughput::Elements(rolls));
        group.bench_with_input(BenchmarkId::new("rolls", rolls), &rolls, |b, &rolls| {
            let mut rng = SimRng::new(42);
            b.iter(|| black_box(simulate(6, rolls, &mut rng)));
        });
    }

    group.finish();
}

/// Cost per die at a fixed roll count.
fn bench_simulate_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_catalog");

    for die in list_dice() {
        group.bench_with_input(BenchmarkId::new("die", die.kind), &die.kind, |b, &kind| {
            let mut rng = SimRng::new(42);
            b.iter(|| black_box(simulate_die(kind, 10_000, &mut rng)));
        });
    }

    group.finish();
}

/// Raw sampler cost, isolated from tallying.
fn bench_sampler(c: &mut Criterion) {
    c.bench_function("sample_face_d20", |b| {
        let mut rng = SimRng::new(42);
        b.iter(|| black_box(rng.sample_face(black_box(20))));
    });
}

/// Report construction from an existing summary.
fn bench_report(c: &mut Criterion) {
    let summary = simulate_die(DieKind::Icosahedron, 100_000, SimRng::new(42));
    let config = ReportConfig::default();
    if let Ok(summary) = summary {
        c.bench_function("frequency_table_d20", |b| {
            b.iter(|| black_box(FrequencyTable::from_summary(&summary, &config).render()));
        });
    }
}

criterion_group!(
    benches,
    bench_simulate_rolls,
    bench_simulate_catalog,
    bench_sampler,
    bench_report
);
criterion_main!(benches);
