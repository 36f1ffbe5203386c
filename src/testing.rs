//! Testing utilities for internal use.

// std imports
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// third-party imports
use bqm::{BinaryQuadraticModel, Linear, Quadratic, SampleSet, Variable};
use maplit::btreemap;

// local imports
use crate::{
    definition::Definition,
    descriptor::{Parameters, Properties},
    error::Result,
};

// ---

/// Enumerates every assignment of the model's variables.
pub fn exact(bqm: &BinaryQuadraticModel) -> Result<SampleSet> {
    let n = bqm.len();
    let values = bqm.vartype().values();
    let rows = (0..1usize << n).map(|i| (0..n).map(|k| values[(i >> k) & 1]).collect::<Vec<_>>());
    Ok(SampleSet::from_samples_bqm(rows, bqm)?)
}

/// Asserts that every energy in `ss` is the energy of its sample in `bqm`.
pub fn assert_energies(ss: &SampleSet, bqm: &BinaryQuadraticModel) {
    assert_eq!(ss.vartype(), bqm.vartype());
    for (sample, energy) in ss.samples().zip(ss.energies()) {
        let expected = bqm.energy(&sample).unwrap();
        assert!((expected - energy).abs() < 1e-9, "{sample:?}: {expected} != {energy}");
    }
}

pub fn parameters() -> Parameters {
    Parameters::new().with("num_reads", Vec::<String>::new())
}

pub fn properties() -> Properties {
    Properties::new().with("category", "test")
}

pub fn ising() -> (Linear, Quadratic) {
    let h = btreemap! { Variable::from("a") => 1.0, Variable::from("b") => -0.5 };
    let j = btreemap! {
        (Variable::from("a"), Variable::from("b")) => -1.0,
        (Variable::from("b"), Variable::from("c")) => 0.75,
    };
    (h, j)
}

pub fn qubo() -> Quadratic {
    btreemap! {
        (Variable::from(0), Variable::from(0)) => -1.0,
        (Variable::from(1), Variable::from(1)) => 0.5,
        (Variable::from(0), Variable::from(1)) => 2.0,
        (Variable::from(1), Variable::from(2)) => -3.0,
    }
}

/// Definition with descriptors and no sampling entrypoint.
pub fn described() -> Definition {
    Definition::new("Dummy")
        .with_parameters(parameters())
        .with_properties(properties())
}

/// Counts calls of native entrypoints.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Definition natively sampling structured models by enumeration.
pub fn model_native(calls: Calls) -> Definition {
    described().with_sample(move |bqm, _| {
        calls.hit();
        exact(bqm)
    })
}

/// Definition natively sampling Ising problems by enumeration.
pub fn ising_native(calls: Calls) -> Definition {
    described().with_sample_ising(move |h, j, _| {
        calls.hit();
        exact(&BinaryQuadraticModel::from_ising(h, j)?)
    })
}

/// Definition natively sampling QUBO problems by enumeration.
pub fn qubo_native(calls: Calls) -> Definition {
    described().with_sample_qubo(move |q, _| {
        calls.hit();
        exact(&BinaryQuadraticModel::from_qubo(q))
    })
}
