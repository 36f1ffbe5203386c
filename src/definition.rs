//! Declaration of a concrete sampler and its validation against the contract.
//!
//! A [`Definition`] is the unvalidated form of a sampler: a name plus five
//! capability slots. [`Definition::instantiate`] checks the slots and either
//! returns a fully populated [`Sampler`] or a [`ContractViolation`]; there is no
//! partially valid state in between.

// std imports
use std::{any::type_name, sync::Arc};

// third-party imports
use bqm::{BinaryQuadraticModel, Linear, Quadratic, SampleSet};
use enumset::EnumSet;

// local imports
use crate::{
    args::Args,
    descriptor::{Member, Parameters, Properties},
    error::{Capability, ContractViolation, Result},
    form::{self, Form},
    sampler::{Native, Sampler},
    settings::SamplingSettings,
};

// ---

pub type Thunk<T> = Arc<dyn Fn() -> T + Send + Sync>;
pub type SampleFn = Arc<dyn Fn(&BinaryQuadraticModel, &Args) -> Result<SampleSet> + Send + Sync>;
pub type SampleIsingFn = Arc<dyn Fn(&Linear, &Quadratic, &Args) -> Result<SampleSet> + Send + Sync>;
pub type SampleQuboFn = Arc<dyn Fn(&Quadratic, &Args) -> Result<SampleSet> + Send + Sync>;

/// Slot of a descriptor capability.
pub type DescriptorSlot<D> = Member<D, Thunk<D>>;

/// Slot of a sampling entrypoint.
pub type EntrypointSlot<F> = Member<json::Value, F>;

// ---

/// A concrete sampler implementation, not yet checked against the contract.
///
/// A definition is reusable, each call to [`instantiate`](Self::instantiate)
/// produces an independent sampler.
#[derive(Clone, Debug)]
pub struct Definition {
    pub name: Arc<str>,
    pub parameters: DescriptorSlot<Parameters>,
    pub properties: DescriptorSlot<Properties>,
    pub sample: EntrypointSlot<SampleFn>,
    pub sample_ising: EntrypointSlot<SampleIsingFn>,
    pub sample_qubo: EntrypointSlot<SampleQuboFn>,
}

impl Definition {
    /// Returns a definition with every slot left unset.
    pub fn new<N: Into<Arc<str>>>(name: N) -> Self {
        Self {
            name: name.into(),
            parameters: Member::Unset,
            properties: Member::Unset,
            sample: Member::Unset,
            sample_ising: Member::Unset,
            sample_qubo: Member::Unset,
        }
    }

    /// Returns the abstract sampler itself, which never satisfies the contract.
    pub fn abstract_base() -> Self {
        Self::new("Sampler")
    }

    /// Defines the typed sampler `sampler`, natively sampling structured models.
    pub fn from_model<S: ModelSampler>(sampler: S) -> Self {
        let sampler = Arc::new(sampler);
        Self::describe::<S>(sampler.parameters(), sampler.properties())
            .with_sample(move |bqm, args| sampler.sample(bqm, args))
    }

    /// Defines the typed sampler `sampler`, natively sampling Ising problems.
    pub fn from_ising<S: IsingSampler>(sampler: S) -> Self {
        let sampler = Arc::new(sampler);
        Self::describe::<S>(sampler.parameters(), sampler.properties())
            .with_sample_ising(move |h, j, args| sampler.sample_ising(h, j, args))
    }

    /// Defines the typed sampler `sampler`, natively sampling QUBO problems.
    pub fn from_qubo<S: QuboSampler>(sampler: S) -> Self {
        let sampler = Arc::new(sampler);
        Self::describe::<S>(sampler.parameters(), sampler.properties())
            .with_sample_qubo(move |q, args| sampler.sample_qubo(q, args))
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Member::Descriptor(parameters);
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Member::Descriptor(properties);
        self
    }

    pub fn with_sample<F>(mut self, f: F) -> Self
    where
        F: Fn(&BinaryQuadraticModel, &Args) -> Result<SampleSet> + Send + Sync + 'static,
    {
        self.sample = Member::Operation(Arc::new(f));
        self
    }

    pub fn with_sample_ising<F>(mut self, f: F) -> Self
    where
        F: Fn(&Linear, &Quadratic, &Args) -> Result<SampleSet> + Send + Sync + 'static,
    {
        self.sample_ising = Member::Operation(Arc::new(f));
        self
    }

    pub fn with_sample_qubo<F>(mut self, f: F) -> Self
    where
        F: Fn(&Quadratic, &Args) -> Result<SampleSet> + Send + Sync + 'static,
    {
        self.sample_qubo = Member::Operation(Arc::new(f));
        self
    }

    /// Returns the forms whose entrypoint slot holds an operation.
    pub fn native(&self) -> EnumSet<Form> {
        let mut forms = EnumSet::empty();
        if self.sample.is_operation() {
            forms |= Form::Model;
        }
        if self.sample_ising.is_operation() {
            forms |= Form::Ising;
        }
        if self.sample_qubo.is_operation() {
            forms |= Form::Qubo;
        }
        forms
    }

    /// Checks the definition against the contract without building a sampler.
    pub fn validate(&self) -> std::result::Result<(), ContractViolation> {
        self.check().map(|_| ())
    }

    /// Builds a sampler with default sampling settings.
    pub fn instantiate(&self) -> std::result::Result<Sampler, ContractViolation> {
        self.instantiate_with(SamplingSettings::default())
    }

    /// Builds a sampler, failing if any required capability is missing or of the wrong kind.
    ///
    /// Checks run in order: `parameters`, `properties`, then the sampling entrypoints.
    pub fn instantiate_with(&self, settings: SamplingSettings) -> std::result::Result<Sampler, ContractViolation> {
        let (parameters, properties, natives) = self.check().inspect_err(|err| log::debug!("{err}"))?;
        let sampler = Sampler::new(self.name.clone(), parameters, properties, natives, settings);
        log::debug!(
            "instantiated sampler {} with native {}",
            self.name,
            form::describe(sampler.native())
        );
        Ok(sampler)
    }

    fn describe<S>(parameters: Parameters, properties: Properties) -> Self {
        Self::new(type_name::<S>()).with_parameters(parameters).with_properties(properties)
    }

    fn check(&self) -> std::result::Result<(Parameters, Properties, Vec<Native>), ContractViolation> {
        let parameters = self.descriptor(&self.parameters, Capability::Parameters)?;
        let properties = self.descriptor(&self.properties, Capability::Properties)?;

        let natives: Vec<_> = [
            self.operation(&self.sample, Form::Model)?.map(Native::Model),
            self.operation(&self.sample_ising, Form::Ising)?.map(Native::Ising),
            self.operation(&self.sample_qubo, Form::Qubo)?.map(Native::Qubo),
        ]
        .into_iter()
        .flatten()
        .collect();

        if natives.is_empty() {
            return Err(ContractViolation::NoEntrypoint {
                sampler: self.name.clone(),
            });
        }

        Ok((parameters, properties, natives))
    }

    fn descriptor<D: Clone>(
        &self,
        member: &DescriptorSlot<D>,
        capability: Capability,
    ) -> std::result::Result<D, ContractViolation> {
        match member {
            Member::Descriptor(data) => Ok(data.clone()),
            Member::Unset => Err(ContractViolation::Missing {
                sampler: self.name.clone(),
                capability,
            }),
            Member::Operation(_) => Err(ContractViolation::NotDescriptor {
                sampler: self.name.clone(),
                capability,
            }),
        }
    }

    fn operation<F: Clone>(
        &self,
        member: &EntrypointSlot<F>,
        form: Form,
    ) -> std::result::Result<Option<F>, ContractViolation> {
        match member {
            Member::Operation(f) => Ok(Some(f.clone())),
            Member::Unset => Ok(None),
            Member::Descriptor(_) => Err(ContractViolation::NotOperation {
                sampler: self.name.clone(),
                capability: form.into(),
            }),
        }
    }
}

impl Default for Definition {
    fn default() -> Self {
        Self::abstract_base()
    }
}

// ---

/// A sampler type that natively samples structured models.
pub trait ModelSampler: Send + Sync + 'static {
    fn parameters(&self) -> Parameters;
    fn properties(&self) -> Properties;
    fn sample(&self, bqm: &BinaryQuadraticModel, args: &Args) -> Result<SampleSet>;
}

/// A sampler type that natively samples Ising problems.
pub trait IsingSampler: Send + Sync + 'static {
    fn parameters(&self) -> Parameters;
    fn properties(&self) -> Properties;
    fn sample_ising(&self, h: &Linear, j: &Quadratic, args: &Args) -> Result<SampleSet>;
}

/// A sampler type that natively samples QUBO problems.
pub trait QuboSampler: Send + Sync + 'static {
    fn parameters(&self) -> Parameters;
    fn properties(&self) -> Properties;
    fn sample_qubo(&self, q: &Quadratic, args: &Args) -> Result<SampleSet>;
}
