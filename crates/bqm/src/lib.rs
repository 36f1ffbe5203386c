//! Binary quadratic models and the sample sets produced for them.
//!
//! A model is a set of linear biases, quadratic biases and a constant offset over
//! variables valued either in {-1, +1} ([`Vartype::Spin`]) or in {0, 1}
//! ([`Vartype::Binary`]). The same model can be expressed in Ising form (`h`, `J`)
//! or in QUBO form (`Q`), using the correspondence `s = 2x - 1`.

// public modules
pub mod error;

// private modules
mod model;
mod sampleset;
mod variable;
mod vartype;

// public uses
pub use error::{Error, Result};
pub use model::{BinaryQuadraticModel, Linear, Quadratic, Sample};
pub use sampleset::{Record, SampleSet};
pub use variable::Variable;
pub use vartype::Vartype;
