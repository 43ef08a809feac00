//! Named, categorised wizard parameters.
//!
//! The store mirrors what a parameter-driven host shows its user: parameters
//! grouped by category, each with a unit, a default, and a current value.
//! Declaration order is preserved so listings are stable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, WizardError};

/// Parameter overrides keyed by category, then parameter name.
pub type ParameterValues = IndexMap<String, IndexMap<String, f64>>;

/// Declared unit of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamUnit {
    /// A non-negative integer count.
    #[serde(rename = "natural")]
    Natural,
    /// A length in millimetres.
    #[serde(rename = "mm")]
    Millimetres,
}

/// One declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parameter {
    /// Declared unit.
    pub unit: ParamUnit,
    /// Value used when nothing overrides it.
    pub default: f64,
    /// Current value.
    pub value: f64,
}

/// Ordered store of wizard parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterStore {
    categories: IndexMap<String, IndexMap<String, Parameter>>,
}

impl ParameterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a parameter; its current value starts at `default`.
    pub fn add(&mut self, category: &str, name: &str, unit: ParamUnit, default: f64) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(
                name.to_string(),
                Parameter {
                    unit,
                    default,
                    value: default,
                },
            );
    }

    /// Returns a declared parameter.
    #[must_use]
    pub fn parameter(&self, category: &str, name: &str) -> Option<&Parameter> {
        self.categories.get(category)?.get(name)
    }

    /// Returns the current value of a parameter.
    #[must_use]
    pub fn get(&self, category: &str, name: &str) -> Option<f64> {
        self.parameter(category, name).map(|p| p.value)
    }

    /// Sets the current value of a declared parameter.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::UnknownParameter`] if the parameter was never declared.
    pub fn set(&mut self, category: &str, name: &str, value: f64) -> Result<(), WizardError> {
        let parameter = self
            .categories
            .get_mut(category)
            .and_then(|params| params.get_mut(name))
            .ok_or_else(|| unknown(category, name))?;
        parameter.value = value;
        Ok(())
    }

    /// Applies every override in `values`.
    ///
    /// # Errors
    ///
    /// Returns an error on the first override naming an undeclared parameter.
    /// Overrides before it have already been applied.
    pub fn apply(&mut self, values: &ParameterValues) -> Result<(), WizardError> {
        for (category, params) in values {
            for (name, value) in params {
                self.set(category, name, *value)?;
            }
        }
        Ok(())
    }

    /// Returns a copy of this store with `values` applied.
    ///
    /// # Errors
    ///
    /// Returns an error if any override names an undeclared parameter.
    pub fn with_overrides(&self, values: &ParameterValues) -> Result<Self, WizardError> {
        let mut store = self.clone();
        store.apply(values)?;
        Ok(store)
    }

    /// Returns the current value of a parameter that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::UnknownParameter`] if the parameter was never declared.
    pub fn require(&self, category: &str, name: &str) -> Result<f64, WizardError> {
        self.get(category, name).ok_or_else(|| unknown(category, name))
    }

    /// Returns the current value of a count parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is undeclared or its value is not a
    /// non-negative integer that fits in a `u32`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn natural(&self, category: &str, name: &str) -> Result<u32, WizardError> {
        let value = self.require(category, name)?;

        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
            return Err(ValidationError::new(
                category,
                name,
                format!("must be a non-negative integer, got {value}"),
            )
            .into());
        }
        if value > f64::from(u32::MAX) {
            return Err(ValidationError::new(category, name, "is too large").into());
        }

        Ok(value as u32)
    }

    /// Iterates categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &IndexMap<String, Parameter>)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the current value of every parameter.
    #[must_use]
    pub fn values(&self) -> ParameterValues {
        self.categories
            .iter()
            .map(|(category, params)| {
                let values = params
                    .iter()
                    .map(|(name, p)| (name.clone(), p.value))
                    .collect();
                (category.clone(), values)
            })
            .collect()
    }

    /// Returns the total number of declared parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn unknown(category: &str, name: &str) -> WizardError {
    WizardError::UnknownParameter {
        category: category.to_string(),
        name: name.to_string(),
    }
}
