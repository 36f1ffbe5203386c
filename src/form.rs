// third-party imports
use bqm::Vartype;
use enumset::{EnumSet, EnumSetType};
use itertools::Itertools;
use strum::{AsRefStr, Display};

// ---

/// Calling convention of a sampling entrypoint.
#[derive(EnumSetType, Debug, Hash, AsRefStr, Display)]
pub enum Form {
    /// `sample(bqm)`, a structured model of either vartype.
    #[strum(serialize = "sample")]
    Model,
    /// `sample_ising(h, J)`, spin-valued.
    #[strum(serialize = "sample_ising")]
    Ising,
    /// `sample_qubo(Q)`, binary-valued.
    #[strum(serialize = "sample_qubo")]
    Qubo,
}

impl Form {
    /// Returns the coefficient form that matches `vartype`.
    pub const fn of(vartype: Vartype) -> Self {
        match vartype {
            Vartype::Spin => Self::Ising,
            Vartype::Binary => Self::Qubo,
        }
    }

    /// Returns the vartype of the values this form produces, if fixed.
    pub const fn vartype(self) -> Option<Vartype> {
        match self {
            Self::Model => None,
            Self::Ising => Some(Vartype::Spin),
            Self::Qubo => Some(Vartype::Binary),
        }
    }
}

/// Formats a set of forms as a comma-separated list of entrypoint names.
pub fn describe(forms: EnumSet<Form>) -> String {
    forms.iter().join(", ")
}

#[cfg(test)]
mod tests;
