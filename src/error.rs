// std imports
use std::sync::Arc;

// third-party imports
use config::ConfigError;
use strum::{AsRefStr, Display};
use thiserror::Error;

// local imports
use crate::{form::Form, suggest::Suggestions};

// ---

/// Error is an error which may occur when building or using a sampler.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Contract(#[from] ContractViolation),
    #[error(transparent)]
    Model(#[from] bqm::Error),
    #[error("sampler {sampler} does not accept parameter {name:?}{}", .suggestions.hint())]
    UnknownParameter {
        sampler: Arc<str>,
        name: String,
        suggestions: Suggestions,
    },
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sampling(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a failure reported by a native sampling entrypoint.
    pub fn sampling<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Sampling(err.into())
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ---

/// A required member of the sampler contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    Parameters,
    Properties,
    Sample,
    SampleIsing,
    SampleQubo,
}

impl From<Form> for Capability {
    fn from(form: Form) -> Self {
        match form {
            Form::Model => Self::Sample,
            Form::Ising => Self::SampleIsing,
            Form::Qubo => Self::SampleQubo,
        }
    }
}

// ---

/// ContractViolation is returned when a sampler definition does not satisfy the contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("sampler {sampler} does not define required {capability}")]
    Missing { sampler: Arc<str>, capability: Capability },
    #[error("sampler {sampler} defines {capability} as an operation, expected a descriptor")]
    NotDescriptor { sampler: Arc<str>, capability: Capability },
    #[error("sampler {sampler} defines {capability} as a descriptor, expected an operation")]
    NotOperation { sampler: Arc<str>, capability: Capability },
    #[error("sampler {sampler} defines no sampling entrypoint, define any of sample, sample_ising or sample_qubo")]
    NoEntrypoint { sampler: Arc<str> },
}

impl ContractViolation {
    pub fn sampler(&self) -> &str {
        match self {
            Self::Missing { sampler, .. }
            | Self::NotDescriptor { sampler, .. }
            | Self::NotOperation { sampler, .. }
            | Self::NoEntrypoint { sampler } => sampler,
        }
    }

    /// Returns the offending capability, or `None` when no sampling entrypoint is defined at all.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Self::Missing { capability, .. }
            | Self::NotDescriptor { capability, .. }
            | Self::NotOperation { capability, .. } => Some(*capability),
            Self::NoEntrypoint { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests;
