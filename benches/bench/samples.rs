// third-party imports
use sampler_contract::bqm::{BinaryQuadraticModel, Variable, Vartype};

/// Ring of `n` spins with alternating couplings.
pub fn ring(n: i64) -> BinaryQuadraticModel {
    let mut bqm = BinaryQuadraticModel::new(Vartype::Spin);
    for i in 0..n {
        bqm.add_variable(Variable::from(i), if i % 2 == 0 { 0.5 } else { -0.5 });
        bqm.add_interaction(Variable::from(i), Variable::from((i + 1) % n), if i % 3 == 0 { -1.0 } else { 1.0 })
            .unwrap();
    }
    bqm
}
