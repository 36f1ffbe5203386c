//! Capability-checked sampler contract.
//!
//! A concrete sampler is declared as a [`Definition`]: two descriptors
//! ([`Parameters`], [`Properties`]) and at least one native sampling entrypoint
//! among `sample`, `sample_ising` and `sample_qubo`. [`Definition::instantiate`]
//! validates the declaration and returns a [`Sampler`] exposing all three
//! entrypoints, deriving the ones the definition leaves out.

// public modules
pub mod args;
pub mod definition;
pub mod descriptor;
pub mod error;
pub mod form;
pub mod sampler;
pub mod settings;

// private modules
mod suggest;

#[cfg(test)]
mod testing;

// public uses
pub use args::{Args, UnknownParameters};
pub use definition::{Definition, IsingSampler, ModelSampler, QuboSampler};
pub use descriptor::{Member, Parameters, Properties};
pub use error::{Capability, ContractViolation, Error, Result};
pub use form::Form;
pub use sampler::Sampler;
pub use settings::{SamplingSettings, Settings};
pub use suggest::Suggestions;

// re-exports
pub use bqm;
