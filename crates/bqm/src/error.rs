// third-party imports
use thiserror::Error;

// local imports
use crate::{Variable, Vartype};

// ---

/// Error is an error which may occur when building or evaluating a model or a sample set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("self-loop on variable {0} is not allowed")]
    SelfLoop(Variable),
    #[error("sample has no value for variable {0}")]
    MissingVariable(Variable),
    #[error("value {value} of variable {variable} is not a valid {vartype} value")]
    InvalidValue {
        variable: Variable,
        value: i8,
        vartype: Vartype,
    },
    #[error("sample has {actual} values for {expected} variables")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("got {energies} energies for {samples} samples")]
    EnergyCountMismatch { samples: usize, energies: usize },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
