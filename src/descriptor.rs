// std imports
use std::{collections::BTreeMap, fmt};

// third-party imports
use derive_more::{Deref, From, IntoIterator};
use serde::{Deserialize, Serialize};

// ---

/// Keyword arguments a sampler accepts, each mapped to the names of related options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, From, IntoIterator, Serialize, Deserialize)]
pub struct Parameters(BTreeMap<String, Vec<String>>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds parameter `name` with its related options.
    pub fn with<N, I, R>(mut self, name: N, related: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.0.insert(name.into(), related.into_iter().map(Into::into).collect());
        self
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (N, Vec<String>)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(name, related)| (name.into(), related)).collect())
    }
}

// ---

/// Solver metadata, such as supported topologies or timing limits.
#[derive(Clone, Debug, Default, PartialEq, Deref, From, IntoIterator, Serialize, Deserialize)]
pub struct Properties(json::Map<String, json::Value>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<json::Value>,
    {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl TryFrom<json::Value> for Properties {
    type Error = json::Value;

    /// Accepts only JSON objects, returning any other value back.
    fn try_from(value: json::Value) -> Result<Self, Self::Error> {
        match value {
            json::Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

// ---

/// Content of a capability slot in a sampler definition.
///
/// A slot is either left as the abstract placeholder, filled with descriptor
/// data, or filled with an operation. The contract requires data in descriptor
/// slots and operations in entrypoint slots.
#[derive(Clone)]
pub enum Member<D, F> {
    Unset,
    Descriptor(D),
    Operation(F),
}

impl<D, F> Member<D, F> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_operation(&self) -> bool {
        matches!(self, Self::Operation(_))
    }
}

impl<D, F> Default for Member<D, F> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<D: fmt::Debug, F> fmt::Debug for Member<D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "Unset"),
            Self::Descriptor(data) => f.debug_tuple("Descriptor").field(data).finish(),
            Self::Operation(_) => write!(f, "Operation(..)"),
        }
    }
}

#[cfg(test)]
mod tests;
