// std imports
use std::{include_str, path::Path};

// third-party imports
use config::{Config, Environment, File, FileFormat, Map};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

// local imports
use crate::{args::UnknownParameters, error::Result};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

/// Environment variable naming an optional configuration file.
pub const CONFIG_ENV: &str = "SAMPLER_CONTRACT_CONFIG";

/// Prefix of environment variables overriding individual settings.
pub const ENV_PREFIX: &str = "SAMPLER_CONTRACT";

const ENV_SEPARATOR: &str = "__";

// ---

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub sampling: SamplingSettings,
}

impl Settings {
    /// Loads settings from the embedded defaults, a configuration file and the environment.
    ///
    /// The file is `path` if given, in which case it must exist, or else the file named
    /// by [`CONFIG_ENV`], if set. Variables like `SAMPLER_CONTRACT__SAMPLING__UNKNOWN_PARAMETERS`
    /// take precedence over both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, std::env::vars())
    }

    fn load_from<I>(path: Option<&Path>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = environment(vars);
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        match path {
            Some(path) => builder = builder.add_source(File::from(path).required(true)),
            None => {
                if let Some(filename) = vars.get(CONFIG_ENV) {
                    builder = builder.add_source(File::with_name(filename).required(false));
                }
            }
        }

        Ok(builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).source(Some(vars)))
            .build()?
            .try_deserialize()?)
    }

    /// Parses settings from `source` layered over the embedded defaults.
    pub fn parse(source: &str, format: FileFormat) -> Result<Self> {
        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .add_source(File::from_str(source, format))
            .build()?
            .try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}

// ---

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SamplingSettings {
    pub unknown_parameters: UnknownParameters,
}

// ---

/// Collects environment variables, spelling the setting keys of prefixed ones in kebab-case.
///
/// Within a key segment `_` stands for `-`, so `SAMPLER_CONTRACT__SAMPLING__UNKNOWN_PARAMETERS`
/// addresses `sampling.unknown-parameters`.
fn environment<I>(vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let prefix = format!("{ENV_PREFIX}{ENV_SEPARATOR}");
    vars.into_iter()
        .map(|(key, value)| match key.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(&prefix) => {
                let path = key[prefix.len()..]
                    .split(ENV_SEPARATOR)
                    .map(|segment| segment.replace('_', "-"))
                    .join(ENV_SEPARATOR);
                (format!("{head}{path}"), value)
            }
            _ => (key, value),
        })
        .collect()
}
