//! Common data types for ProbKit

use serde::{Deserialize, Serialize};

/// A named probabilistic variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Unique name. In Expected-Value mode the name doubles as the numeric
    /// outcome; the engine parses it there, not here.
    pub name: String,

    /// Probability in [0, 1]. The range is enforced at the engine boundary,
    /// not by this type.
    pub value: f64,
}

/// Ordered name -> value map of probabilistic variables.
///
/// Insertion order is preserved: subset enumeration in the union calculation
/// is mathematically commutative, but a stable order keeps results and
/// reports reproducible. Serialized as a JSON array of `{name, value}`
/// objects so the order survives a round-trip.
///
/// Lookup is a linear scan; variable sets are small by construction (the
/// union calculation is O(2^n) anyway).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableSet {
    entries: Vec<Variable>,
}

impl VariableSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable. An existing variable with the same name is
    /// overwritten in place, keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|v| v.name == name) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Variable { name, value }),
        }
    }

    /// Value of the variable `name`, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|v| v.name == name).map(|v| v.value)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set holds no variables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|v| v.value)
    }

    /// Variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.entries.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for VariableSet {
    fn from_iter<T: IntoIterator<Item = (N, f64)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// An (outcome, probability) pair for Expected-Value mode.
///
/// A distinct pair type rather than a reuse of the name -> probability map:
/// the outcome is a number, not a label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Numeric outcome value.
    pub value: f64,
    /// Probability of this outcome.
    pub probability: f64,
}
