//! Criterion microbenches for `Engine::step` across rank 1/2/3 grids, under
//! the two built-in rules.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use ca_engine::{Boundary, Engine, IntCell, NeighborhoodShape, RuleSelect};

fn build_1d(n: usize) -> Engine<IntCell> {
    let mut engine: Engine<IntCell> = Engine::new();
    engine.set_neighborhood(NeighborhoodShape::Moore);
    engine.set_boundary(Boundary::Periodic, 1).unwrap();
    engine.set_rule(RuleSelect::Parity);
    engine.set_dimensions_1d(n, IntCell(0)).unwrap();
    engine.init_condition(1, 0.4, Some(1)).unwrap();
    engine
}

fn build_2d(n: usize) -> Engine<IntCell> {
    let mut engine: Engine<IntCell> = Engine::new();
    engine.set_neighborhood(NeighborhoodShape::Moore);
    engine.set_boundary(Boundary::Periodic, 1).unwrap();
    engine.set_rule(RuleSelect::Majority);
    engine.set_dimensions_2d(n, n, IntCell(0)).unwrap();
    engine.init_condition(1, 0.4, Some(2)).unwrap();
    engine
}

fn build_3d(n: usize) -> Engine<IntCell> {
    let mut engine: Engine<IntCell> = Engine::new();
    engine.set_neighborhood(NeighborhoodShape::VonNeumann);
    engine.set_boundary(Boundary::CutOff, 1).unwrap();
    engine.set_rule(RuleSelect::Parity);
    engine.set_dimensions_3d(n, n, n, IntCell(0)).unwrap();
    engine.init_condition(1, 0.4, Some(3)).unwrap();
    engine
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    group.bench_function(BenchmarkId::new("1d_parity", "4096"), |b| {
        b.iter_batched(
            || build_1d(4096),
            |mut engine| {
                engine.step(None).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function(BenchmarkId::new("2d_majority", "256x256"), |b| {
        b.iter_batched(
            || build_2d(256),
            |mut engine| {
                engine.step(None).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function(BenchmarkId::new("3d_parity_cutoff", "32x32x32"), |b| {
        b.iter_batched(
            || build_3d(32),
            |mut engine| {
                engine.step(None).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
