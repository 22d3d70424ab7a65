//! Benchmarks for the per-tick state transition and the graph pipeline.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use equilibrium::history::{downsample, smooth};
use equilibrium::{Population, PopulationHistory, SimConfig, Simulation};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [40usize, 100, 200] {
        group.bench_with_input(BenchmarkId::new("particles", count * 2), &count, |b, &count| {
            let mut sim = Simulation::new(SimConfig {
                initial_a: count,
                initial_b: count,
                seed: Some(1),
                ..Default::default()
            });
            b.iter(|| black_box(sim.step(1.0)))
        });
    }

    group.finish();
}

fn bench_graph_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");

    let samples: Vec<f32> = (0..1000).map(|i| (i % 80) as f32).collect();
    group.bench_function("downsample_smooth_1000", |b| {
        b.iter(|| black_box(smooth(&downsample(black_box(&samples), 10), 10)))
    });

    let config = SimConfig::default();
    let mut history = PopulationHistory::new(config.history_length);
    for i in 0..config.history_length {
        history.record(Population {
            a: 40 - i % 20,
            b: 40 - i % 20,
            ab: i % 20,
        });
    }
    group.bench_function("graph_series_full_history", |b| {
        b.iter(|| black_box(history.graph_series(&config.graph())))
    });

    group.finish();
}

criterion_group!(benches, bench_step, bench_graph_pipeline);
criterion_main!(benches);
