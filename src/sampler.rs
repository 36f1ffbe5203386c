// std imports
use std::{fmt, sync::Arc};

// third-party imports
use bqm::{BinaryQuadraticModel, Linear, Quadratic, SampleSet, Vartype};
use enumset::EnumSet;

// local imports
use crate::{
    args::Args,
    definition::{SampleFn, SampleIsingFn, SampleQuboFn},
    descriptor::{Parameters, Properties},
    error::{ContractViolation, Result},
    form::{self, Form},
    settings::SamplingSettings,
};

// ---

/// A native sampling entrypoint of a validated sampler.
#[derive(Clone)]
pub(crate) enum Native {
    Model(SampleFn),
    Ising(SampleIsingFn),
    Qubo(SampleQuboFn),
}

impl Native {
    fn form(&self) -> Form {
        match self {
            Self::Model(_) => Form::Model,
            Self::Ising(_) => Form::Ising,
            Self::Qubo(_) => Form::Qubo,
        }
    }
}

// ---

/// A sampler that satisfies the contract.
///
/// All three entrypoints are available whichever subset is native. A derived
/// entrypoint converts the problem to a native form, calls the native entrypoint,
/// and converts the samples back to the vartype the caller asked in, shifting
/// energies by the conversion offset.
#[derive(Clone)]
pub struct Sampler {
    name: Arc<str>,
    parameters: Parameters,
    properties: Properties,
    natives: Vec<Native>,
    settings: SamplingSettings,
}

impl Sampler {
    pub(crate) fn new(
        name: Arc<str>,
        parameters: Parameters,
        properties: Properties,
        natives: Vec<Native>,
        settings: SamplingSettings,
    ) -> Self {
        Self {
            name,
            parameters,
            properties,
            natives,
            settings,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the forms the sampler implements natively; the others are derived.
    pub fn native(&self) -> EnumSet<Form> {
        self.natives.iter().map(Native::form).collect()
    }

    pub fn settings(&self) -> SamplingSettings {
        self.settings
    }

    /// Samples a structured model, returning samples of the model's vartype.
    pub fn sample(&self, bqm: &BinaryQuadraticModel, args: &Args) -> Result<SampleSet> {
        let args = self.accept(args)?;
        let vartype = bqm.vartype();
        let preferred = Form::of(vartype);
        let other = if preferred == Form::Ising { Form::Qubo } else { Form::Ising };

        match self.select(Form::Model, [Form::Model, preferred, other])? {
            Native::Model(f) => f(bqm, &args),
            Native::Ising(f) => {
                let (h, j, offset) = bqm.to_ising();
                Ok(f(&h, &j, &args)?.change_vartype(vartype, offset))
            }
            Native::Qubo(f) => {
                let (q, offset) = bqm.to_qubo();
                Ok(f(&q, &args)?.change_vartype(vartype, offset))
            }
        }
    }

    /// Samples an Ising problem, returning spin-valued samples.
    pub fn sample_ising(&self, h: &Linear, j: &Quadratic, args: &Args) -> Result<SampleSet> {
        let args = self.accept(args)?;

        match self.select(Form::Ising, [Form::Ising, Form::Model, Form::Qubo])? {
            Native::Ising(f) => f(h, j, &args),
            Native::Model(f) => {
                let bqm = BinaryQuadraticModel::from_ising(h, j)?;
                Ok(f(&bqm, &args)?.change_vartype(Vartype::Spin, 0.0))
            }
            Native::Qubo(f) => {
                let (q, offset) = BinaryQuadraticModel::from_ising(h, j)?.to_qubo();
                Ok(f(&q, &args)?.change_vartype(Vartype::Spin, offset))
            }
        }
    }

    /// Samples a QUBO problem, returning binary-valued samples.
    pub fn sample_qubo(&self, q: &Quadratic, args: &Args) -> Result<SampleSet> {
        let args = self.accept(args)?;

        match self.select(Form::Qubo, [Form::Qubo, Form::Model, Form::Ising])? {
            Native::Qubo(f) => f(q, &args),
            Native::Model(f) => {
                let bqm = BinaryQuadraticModel::from_qubo(q);
                Ok(f(&bqm, &args)?.change_vartype(Vartype::Binary, 0.0))
            }
            Native::Ising(f) => {
                let (h, j, offset) = BinaryQuadraticModel::from_qubo(q).to_ising();
                Ok(f(&h, &j, &args)?.change_vartype(Vartype::Binary, offset))
            }
        }
    }

    fn accept<'a>(&self, args: &'a Args) -> Result<std::borrow::Cow<'a, Args>> {
        args.accepted(&self.name, &self.parameters, self.settings.unknown_parameters)
    }

    fn select(&self, requested: Form, preference: [Form; 3]) -> std::result::Result<&Native, ContractViolation> {
        let native = preference
            .into_iter()
            .find_map(|form| self.natives.iter().find(|native| native.form() == form))
            .ok_or_else(|| ContractViolation::NoEntrypoint {
                sampler: self.name.clone(),
            })?;

        if native.form() != requested {
            log::trace!("sampler {}: {requested} derived from native {}", self.name, native.form());
        }
        Ok(native)
    }
}

impl fmt::Debug for Sampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sampler")
            .field("name", &self.name)
            .field("native", &form::describe(self.native()))
            .field("parameters", &self.parameters)
            .field("properties", &self.properties)
            .field("settings", &self.settings)
            .finish()
    }
}
