// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, criterion_group};
use sampler_contract::{
    Args, Definition, Parameters, Properties,
    bqm::{SampleSet, Vartype},
};

// local imports
use super::{ND, samples};

criterion_group!(benches, bench);

const GROUP: &str = "derive";

fn bench(c: &mut Criterion) {
    let sampler = Definition::new("Bench")
        .with_parameters(Parameters::new().with("num_reads", Vec::<String>::new()))
        .with_properties(Properties::new())
        .with_sample_ising(|h, _, _| Ok(SampleSet::empty(h.keys().cloned().collect(), Vartype::Spin)))
        .instantiate()
        .unwrap();

    let mut group = c.benchmark_group(GROUP);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let args = Args::new().with("num_reads", 10);
    for n in [16, 1024] {
        let spin = samples::ring(n);
        let (h, j, _) = spin.to_ising();
        let (q, _) = spin.to_qubo();

        group.bench_function(BenchmarkId::new(format!("native{ND}sample_ising"), n), |b| {
            b.iter(|| black_box(sampler.sample_ising(&h, &j, &args).unwrap()));
        });
        group.bench_function(BenchmarkId::new(format!("derived{ND}sample_qubo"), n), |b| {
            b.iter(|| black_box(sampler.sample_qubo(&q, &args).unwrap()));
        });
        group.bench_function(BenchmarkId::new(format!("derived{ND}sample"), n), |b| {
            b.iter(|| black_box(sampler.sample(&spin, &args).unwrap()));
        });
    }

    group.finish();
}
