// third-party imports
use serde::Serialize;

// local imports
use crate::{BinaryQuadraticModel, Error, Result, Sample, Variable, Vartype};

// ---

/// A single row of a [`SampleSet`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    /// Values aligned with [`SampleSet::variables`].
    pub sample: Vec<i8>,
    pub energy: f64,
    pub num_occurrences: usize,
}

// ---

/// Samples returned by a sampler, together with their energies.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleSet {
    variables: Vec<Variable>,
    records: Vec<Record>,
    vartype: Vartype,
    info: json::Map<String, json::Value>,
}

impl SampleSet {
    /// Builds a sample set from rows aligned with `variables` and their energies.
    pub fn from_samples<I>(variables: Vec<Variable>, rows: I, vartype: Vartype, energies: Vec<f64>) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<i8>>,
    {
        let rows: Vec<_> = rows.into_iter().collect();
        if rows.len() != energies.len() {
            return Err(Error::EnergyCountMismatch {
                samples: rows.len(),
                energies: energies.len(),
            });
        }

        let records = rows
            .into_iter()
            .zip(energies)
            .map(|(sample, energy)| {
                Self::check(&variables, &sample, vartype)?;
                Ok(Record {
                    sample,
                    energy,
                    num_occurrences: 1,
                })
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            variables,
            records,
            vartype,
            info: json::Map::new(),
        })
    }

    /// Builds a sample set from rows aligned with the variables of `bqm`, evaluating their energies.
    pub fn from_samples_bqm<I>(rows: I, bqm: &BinaryQuadraticModel) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<i8>>,
    {
        let variables: Vec<_> = bqm.variables().cloned().collect();
        let rows: Vec<_> = rows.into_iter().collect();
        let energies = rows
            .iter()
            .map(|row| {
                Self::check(&variables, row, bqm.vartype())?;
                bqm.energy(&Self::zip(&variables, row))
            })
            .collect::<Result<_>>()?;

        Self::from_samples(variables, rows, bqm.vartype(), energies)
    }

    /// Returns an empty sample set over `variables`.
    pub fn empty(variables: Vec<Variable>, vartype: Vartype) -> Self {
        Self {
            variables,
            records: Vec::new(),
            vartype,
            info: json::Map::new(),
        }
    }

    pub fn with_info(mut self, info: json::Map<String, json::Value>) -> Self {
        self.info = info;
        self
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    pub fn info(&self) -> &json::Map<String, json::Value> {
        &self.info
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn energies(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.energy)
    }

    /// Iterates over the samples as variable-to-value maps.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.records.iter().map(|record| Self::zip(&self.variables, &record.sample))
    }

    /// Returns the record with the lowest energy.
    pub fn first(&self) -> Option<&Record> {
        self.records.iter().min_by(|a, b| a.energy.total_cmp(&b.energy))
    }

    /// Converts the sample values to `vartype` and adds `energy_offset` to every energy.
    pub fn change_vartype(mut self, vartype: Vartype, energy_offset: f64) -> Self {
        let from = self.vartype;
        for record in &mut self.records {
            for value in &mut record.sample {
                *value = from.convert(*value, vartype);
            }
            record.energy += energy_offset;
        }
        self.vartype = vartype;
        self
    }

    fn check(variables: &[Variable], row: &[i8], vartype: Vartype) -> Result<()> {
        if row.len() != variables.len() {
            return Err(Error::ShapeMismatch {
                expected: variables.len(),
                actual: row.len(),
            });
        }
        match variables.iter().zip(row).find(|(_, value)| !vartype.contains(**value)) {
            Some((variable, &value)) => Err(Error::InvalidValue {
                variable: variable.clone(),
                value,
                vartype,
            }),
            None => Ok(()),
        }
    }

    fn zip(variables: &[Variable], row: &[i8]) -> Sample {
        variables.iter().cloned().zip(row.iter().copied()).collect()
    }
}
