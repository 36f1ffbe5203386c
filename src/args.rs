// std imports
use std::{borrow::Cow, collections::BTreeMap};

// third-party imports
use derive_more::{Deref, DerefMut, From, IntoIterator};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

// local imports
use crate::{
    descriptor::Parameters,
    error::{Error, Result},
    suggest::Suggestions,
};

// ---

/// Keyword arguments of a sampling call.
#[derive(Clone, Debug, Default, PartialEq, Deref, DerefMut, From, IntoIterator, Serialize, Deserialize)]
pub struct Args(BTreeMap<String, json::Value>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<json::Value>,
    {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns the arguments accepted by `parameters`.
    ///
    /// Arguments not listed in `parameters` are dropped or rejected according to `policy`.
    /// No copy is made when every argument is accepted.
    pub fn accepted(&self, sampler: &str, parameters: &Parameters, policy: UnknownParameters) -> Result<Cow<'_, Self>> {
        let unknown: Vec<_> = self.0.keys().filter(|name| !parameters.accepts(name)).collect();
        if unknown.is_empty() {
            return Ok(Cow::Borrowed(self));
        }

        for name in &unknown {
            let suggestions = || Suggestions::new(name, parameters.keys().map(String::as_str));
            match policy {
                UnknownParameters::Reject => {
                    return Err(Error::UnknownParameter {
                        sampler: sampler.into(),
                        name: name.to_string(),
                        suggestions: suggestions(),
                    });
                }
                UnknownParameters::Warn => {
                    log::warn!(
                        "sampler {sampler} ignores unknown parameter {name:?}{}",
                        suggestions().hint()
                    );
                }
                UnknownParameters::Ignore => {
                    log::debug!("sampler {sampler} ignores unknown parameter {name:?}");
                }
            }
        }

        Ok(Cow::Owned(Self(
            self.0
                .iter()
                .filter(|(name, _)| parameters.accepts(name))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        )))
    }
}

// ---

/// What to do with sampling arguments that the sampler parameters do not list.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum UnknownParameters {
    /// Drop them and log a warning.
    #[default]
    Warn,
    /// Drop them silently.
    Ignore,
    /// Fail the call.
    Reject,
}
