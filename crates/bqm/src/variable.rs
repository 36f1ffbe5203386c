// std imports
use std::sync::Arc;

// third-party imports
use derive_more::Display;
use serde::{Deserialize, Serialize};

// ---

/// Label of a model variable.
///
/// Integer labels order before string labels.
#[derive(Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variable {
    #[display("{_0}")]
    Index(i64),
    #[display("{_0}")]
    Name(Arc<str>),
}

impl From<i64> for Variable {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<i32> for Variable {
    fn from(value: i32) -> Self {
        Self::Index(value.into())
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self::Name(value.into())
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Self::Name(value.into())
    }
}
