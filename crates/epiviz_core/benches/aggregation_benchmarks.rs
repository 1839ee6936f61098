//! Criterion benchmarks for epiviz_core aggregation
//!
//! Run with: cargo bench -p epiviz_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use epiviz_core::array::{Axis, NamedArray};
use epiviz_core::model::{ParametricData, SimulationData, StrainValues, TIME_AXIS, TRIAL_AXIS};
use epiviz_core::sweep::{SweepDim, SweepRequest, aggregate};
use epiviz_core::trajectory::{summarize, summarize_all};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POPULATION: u64 = 10_000;

fn random_compartment(rng: &mut StdRng, steps: usize, trials: usize) -> NamedArray {
    let axes = vec![Axis::new(TIME_AXIS, steps), Axis::new(TRIAL_AXIS, trials)];
    NamedArray::from_fn(axes, |_| rng.random_range(0.0..POPULATION as f64))
        .expect("valid compartment axes")
}

fn create_simulation(steps: usize, trials: usize) -> SimulationData {
    let mut rng = StdRng::seed_from_u64(42);
    SimulationData {
        population: POPULATION,
        susceptible: random_compartment(&mut rng, steps, trials),
        exposed: random_compartment(&mut rng, steps, trials),
        infected: random_compartment(&mut rng, steps, trials),
        recovered: random_compartment(&mut rng, steps, trials),
    }
}

fn create_parametric(values_per_dim: usize, trials: usize) -> ParametricData {
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<f64> = (1..=values_per_dim).map(|v| v as f64).collect();
    let strains = StrainValues {
        initial: values.clone(),
        strength: values.clone(),
        radius: values.clone(),
        duration_mean: values.clone(),
        duration_shape: values,
    };

    let mut axes = vec![Axis::new(TIME_AXIS, 24), Axis::new(TRIAL_AXIS, trials)];
    axes.extend(
        SweepDim::ALL
            .iter()
            .map(|dim| Axis::new(dim.axis_name(), values_per_dim)),
    );
    let susceptible = NamedArray::from_fn(axes, |_| rng.random_range(0.0..POPULATION as f64))
        .expect("valid sweep axes");

    ParametricData {
        population: POPULATION,
        susceptible,
        strains,
    }
}

fn bench_trajectory(c: &mut Criterion) {
    let data = create_simulation(24 * 180, 50);

    c.bench_function("summarize_infected_180d_50_trials", |b| {
        b.iter(|| summarize(black_box(&data.infected), black_box(true)))
    });

    c.bench_function("summarize_all_180d_50_trials", |b| {
        b.iter(|| summarize_all(black_box(&data), black_box(false)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_aggregate");

    for values_per_dim in [3, 5, 7].iter() {
        let data = create_parametric(*values_per_dim, 10);
        let line = SweepRequest::new(&[SweepDim::Strength], []).expect("valid request");
        let surface = SweepRequest::new(&[SweepDim::Strength, SweepDim::Radius], [])
            .expect("valid request");

        group.bench_with_input(
            BenchmarkId::new("line", values_per_dim),
            values_per_dim,
            |b, _| b.iter(|| aggregate(black_box(&data), black_box(&line))),
        );
        group.bench_with_input(
            BenchmarkId::new("surface", values_per_dim),
            values_per_dim,
            |b, _| b.iter(|| aggregate(black_box(&data), black_box(&surface))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_trajectory, bench_sweep);
criterion_main!(benches);
