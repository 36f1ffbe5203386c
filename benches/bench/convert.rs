// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, criterion_group};
use sampler_contract::bqm::Vartype;

// local imports
use super::{ND, samples};

criterion_group!(benches, bench);

const GROUP: &str = "convert";

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group(GROUP);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for n in [16, 256, 4096] {
        let spin = samples::ring(n);
        let binary = spin.change_vartype(Vartype::Binary);

        group.bench_function(BenchmarkId::new(format!("to-qubo{ND}spin"), n), |b| {
            b.iter(|| black_box(spin.to_qubo()));
        });
        group.bench_function(BenchmarkId::new(format!("to-ising{ND}binary"), n), |b| {
            b.iter(|| black_box(binary.to_ising()));
        });
    }

    group.finish();
}
