// std imports
use std::collections::BTreeMap;

// local imports
use crate::{Error, Result, Variable, Vartype};

// ---

/// Linear biases, keyed by variable.
pub type Linear = BTreeMap<Variable, f64>;

/// Quadratic biases, keyed by a pair of variables.
///
/// In QUBO form, a diagonal entry `(v, v)` is the linear bias of `v`.
pub type Quadratic = BTreeMap<(Variable, Variable), f64>;

/// Assignment of values to variables.
pub type Sample = BTreeMap<Variable, i8>;

// ---

/// A binary quadratic model.
///
/// Interactions are stored under the ordered pair `(u, v)` with `u < v`, so
/// `(a, b)` and `(b, a)` accumulate into the same bias. Every variable that takes
/// part in an interaction also has a (possibly zero) linear bias.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryQuadraticModel {
    linear: Linear,
    quadratic: Quadratic,
    offset: f64,
    vartype: Vartype,
}

impl BinaryQuadraticModel {
    pub fn new(vartype: Vartype) -> Self {
        Self {
            linear: Linear::new(),
            quadratic: Quadratic::new(),
            offset: 0.0,
            vartype,
        }
    }

    /// Builds a spin-valued model from Ising coefficients.
    pub fn from_ising(h: &Linear, j: &Quadratic) -> Result<Self> {
        let mut bqm = Self::new(Vartype::Spin);
        for (v, &bias) in h {
            bqm.add_variable(v.clone(), bias);
        }
        for ((u, v), &bias) in j {
            bqm.add_interaction(u.clone(), v.clone(), bias)?;
        }
        Ok(bqm)
    }

    /// Builds a binary-valued model from QUBO coefficients.
    pub fn from_qubo(q: &Quadratic) -> Self {
        let mut bqm = Self::new(Vartype::Binary);
        for ((u, v), &bias) in q {
            if u == v {
                bqm.add_variable(u.clone(), bias);
            } else {
                bqm.insert_interaction(u.clone(), v.clone(), bias);
            }
        }
        bqm
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Adds `bias` to the linear bias of `v`, creating the variable if needed.
    pub fn add_variable(&mut self, v: Variable, bias: f64) {
        *self.linear.entry(v).or_default() += bias;
    }

    /// Adds `bias` to the interaction between `u` and `v`.
    pub fn add_interaction(&mut self, u: Variable, v: Variable, bias: f64) -> Result<()> {
        if u == v {
            return Err(Error::SelfLoop(u));
        }
        self.insert_interaction(u, v, bias);
        Ok(())
    }

    pub fn add_offset(&mut self, offset: f64) {
        self.offset += offset;
    }

    pub fn linear(&self) -> &Linear {
        &self.linear
    }

    pub fn quadratic(&self) -> &Quadratic {
        &self.quadratic
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.linear.keys()
    }

    pub fn len(&self) -> usize {
        self.linear.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linear.is_empty()
    }

    pub fn get_linear(&self, v: &Variable) -> Option<f64> {
        self.linear.get(v).copied()
    }

    /// Returns the interaction bias between `u` and `v` in either order.
    pub fn get_quadratic(&self, u: &Variable, v: &Variable) -> Option<f64> {
        let key = if u <= v { (u.clone(), v.clone()) } else { (v.clone(), u.clone()) };
        self.quadratic.get(&key).copied()
    }

    /// Evaluates the model at `sample`.
    ///
    /// The sample must assign a value of the model's vartype to every variable;
    /// values of variables not in the model are ignored.
    pub fn energy(&self, sample: &Sample) -> Result<f64> {
        let value = |v: &Variable| -> Result<f64> {
            let value = *sample.get(v).ok_or_else(|| Error::MissingVariable(v.clone()))?;
            if !self.vartype.contains(value) {
                return Err(Error::InvalidValue {
                    variable: v.clone(),
                    value,
                    vartype: self.vartype,
                });
            }
            Ok(value.into())
        };

        let mut energy = self.offset;
        for (v, bias) in &self.linear {
            energy += bias * value(v)?;
        }
        for ((u, v), bias) in &self.quadratic {
            energy += bias * value(u)? * value(v)?;
        }
        Ok(energy)
    }

    /// Returns an equivalent model over `vartype`.
    ///
    /// Energies are preserved: for every sample `s` and its image `s'` in the
    /// target domain, `energy(s) == converted.energy(s')`.
    pub fn change_vartype(&self, vartype: Vartype) -> Self {
        match (self.vartype, vartype) {
            (Vartype::Spin, Vartype::Binary) => self.spin_to_binary(),
            (Vartype::Binary, Vartype::Spin) => self.binary_to_spin(),
            _ => self.clone(),
        }
    }

    /// Returns the Ising coefficients and offset of the model.
    pub fn to_ising(&self) -> (Linear, Quadratic, f64) {
        let spin = self.change_vartype(Vartype::Spin);
        (spin.linear, spin.quadratic, spin.offset)
    }

    /// Returns the QUBO coefficients and offset of the model.
    ///
    /// Every variable gets a diagonal entry, zero biases included, so no
    /// variable is lost in the round trip.
    pub fn to_qubo(&self) -> (Quadratic, f64) {
        let binary = self.change_vartype(Vartype::Binary);
        let mut q = binary.quadratic;
        q.extend(binary.linear.into_iter().map(|(v, bias)| ((v.clone(), v), bias)));
        (q, binary.offset)
    }

    fn insert_interaction(&mut self, u: Variable, v: Variable, bias: f64) {
        self.linear.entry(u.clone()).or_default();
        self.linear.entry(v.clone()).or_default();
        let key = if u < v { (u, v) } else { (v, u) };
        *self.quadratic.entry(key).or_default() += bias;
    }

    // s = 2x - 1
    fn spin_to_binary(&self) -> Self {
        let mut linear: Linear = self.linear.iter().map(|(v, bias)| (v.clone(), 2.0 * bias)).collect();
        let mut quadratic = Quadratic::new();
        let mut offset = self.offset - self.linear.values().sum::<f64>();

        for ((u, v), &bias) in &self.quadratic {
            quadratic.insert((u.clone(), v.clone()), 4.0 * bias);
            *linear.entry(u.clone()).or_default() -= 2.0 * bias;
            *linear.entry(v.clone()).or_default() -= 2.0 * bias;
            offset += bias;
        }

        Self {
            linear,
            quadratic,
            offset,
            vartype: Vartype::Binary,
        }
    }

    // x = (s + 1) / 2
    fn binary_to_spin(&self) -> Self {
        let mut linear: Linear = self.linear.iter().map(|(v, bias)| (v.clone(), 0.5 * bias)).collect();
        let mut quadratic = Quadratic::new();
        let mut offset = self.offset + 0.5 * self.linear.values().sum::<f64>();

        for ((u, v), &bias) in &self.quadratic {
            quadratic.insert((u.clone(), v.clone()), 0.25 * bias);
            *linear.entry(u.clone()).or_default() += 0.25 * bias;
            *linear.entry(v.clone()).or_default() += 0.25 * bias;
            offset += 0.25 * bias;
        }

        Self {
            linear,
            quadratic,
            offset,
            vartype: Vartype::Spin,
        }
    }
}
