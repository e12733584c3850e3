use crate::transform::error::TransformError;
use log::warn;
use ordermap::OrderMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How the components of a [`DerivedScalar`] are folded into one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Combine {
    /// The first component as is.
    Identity,
    /// All components added up.
    Sum,
    /// The first component minus every later one.
    Difference,
}

impl Combine {
    fn min_components(&self) -> usize {
        match self {
            Combine::Identity | Combine::Sum => 1,
            Combine::Difference => 2,
        }
    }

    fn operator(&self) -> &'static str {
        match self {
            Combine::Identity => "",
            Combine::Sum => " + ",
            Combine::Difference => " - ",
        }
    }

    fn apply(&self, values: &[f64]) -> Option<f64> {
        let (first, rest) = values.split_first()?;
        match self {
            Combine::Identity => Some(*first),
            Combine::Sum => Some(first + rest.iter().sum::<f64>()),
            Combine::Difference => Some(first - rest.iter().sum::<f64>()),
        }
    }
}

/// Labelled inputs of one summary figure, in the order they were added.
///
/// Every component has a current value and may carry a reference value from
/// an earlier report, so the same rule can be applied to both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalarComponents {
    current: OrderMap<String, f64>,
    reference: OrderMap<String, f64>,
}

impl ScalarComponents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: impl Into<String>, current: f64) -> Self {
        self.current.insert(label.into(), current);
        self
    }

    pub fn with_reference(mut self, label: impl Into<String>, reference: f64) -> Self {
        self.reference.insert(label.into(), reference);
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, current: f64, reference: Option<f64>) {
        let label = label.into();
        if let Some(reference) = reference {
            self.reference.insert(label.clone(), reference);
        }
        self.current.insert(label, current);
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.current.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn has_reference(&self) -> bool {
        !self.reference.is_empty()
    }
}

impl From<OrderMap<String, f64>> for ScalarComponents {
    fn from(current: OrderMap<String, f64>) -> Self {
        ScalarComponents {
            current,
            reference: OrderMap::new(),
        }
    }
}

/// A single summary number with an optional baseline it is compared against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedScalar {
    name: String,
    current: f64,
    reference: Option<f64>,
}

impl DerivedScalar {
    /// A figure supplied from outside, e.g. typed in from a situation report.
    pub fn external(name: impl Into<String>, current: f64, reference: Option<f64>) -> Self {
        DerivedScalar {
            name: name.into(),
            current,
            reference,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn reference(&self) -> Option<f64> {
        self.reference
    }

    /// `current - reference`, if there is a reference.
    pub fn delta(&self) -> Option<f64> {
        self.reference.map(|reference| self.current - reference)
    }
}

/// Folds `components` into one figure with `combine`.
///
/// When any component carries a reference value, all of them must, and the
/// reference is folded with the same rule. The result is named after its
/// inputs, e.g. `total - recovered`; use [`DerivedScalar::named`] to rename it.
pub fn derive_scalar(
    components: &ScalarComponents,
    combine: Combine,
) -> Result<DerivedScalar, TransformError> {
    if components.len() < combine.min_components() {
        return Err(TransformError::Arithmetic(format!(
            "{combine} needs at least {} components, got {}",
            combine.min_components(),
            components.len()
        )));
    }

    let current_values: Vec<f64> = components.current.values().copied().collect();
    let current = combine.apply(&current_values).ok_or_else(|| {
        TransformError::Arithmetic(format!("{combine} received no components"))
    })?;

    let reference = if components.has_reference() {
        for label in components.reference.keys() {
            if !components.current.contains_key(label) {
                warn!("Ignoring reference value for unknown component '{label}'");
            }
        }
        let reference_values = components
            .current
            .keys()
            .map(|label| {
                components.reference.get(label).copied().ok_or_else(|| {
                    TransformError::Arithmetic(format!(
                        "component '{label}' has no reference value"
                    ))
                })
            })
            .collect::<Result<Vec<f64>, TransformError>>()?;
        combine.apply(&reference_values)
    } else {
        None
    };

    let name = match combine {
        Combine::Identity => components.labels().next().unwrap_or_default().to_string(),
        _ => components
            .labels()
            .collect::<Vec<&str>>()
            .join(combine.operator()),
    };

    Ok(DerivedScalar {
        name,
        current,
        reference,
    })
}
