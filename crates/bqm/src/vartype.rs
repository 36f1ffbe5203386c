// third-party imports
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

// ---

/// Domain of the variables of a model, or of the values in a sample set.
#[derive(
    Clone, Copy, Debug, Deserialize, Serialize, Eq, Hash, Ord, PartialEq, PartialOrd, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum Vartype {
    /// Values in {-1, +1}.
    Spin,
    /// Values in {0, 1}.
    Binary,
}

impl Vartype {
    /// Returns both values of the domain, lowest first.
    pub const fn values(self) -> [i8; 2] {
        match self {
            Self::Spin => [-1, 1],
            Self::Binary => [0, 1],
        }
    }

    pub const fn contains(self, value: i8) -> bool {
        match self {
            Self::Spin => value == -1 || value == 1,
            Self::Binary => value == 0 || value == 1,
        }
    }

    /// Maps a value of this domain to the corresponding value of `target`.
    pub const fn convert(self, value: i8, target: Self) -> i8 {
        match (self, target) {
            (Self::Spin, Self::Binary) => (value + 1) / 2,
            (Self::Binary, Self::Spin) => 2 * value - 1,
            _ => value,
        }
    }
}
