use crate::transform::Combine;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A summary figure folded from labelled components.
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScalarConfig {
    #[validate(length(min = 1))]
    pub name: String,
    pub combine: Combine,
    #[validate(length(min = 1))]
    pub components: Vec<ComponentConfig>,
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComponentConfig {
    pub label: String,
    pub value: ComponentValue,
}

/// Where a component's number comes from.
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentValue {
    /// Supplied by hand, e.g. copied from the latest situation report.
    Fixed {
        current: f64,
        #[serde(default)]
        reference: Option<f64>,
    },
    /// The last value of a series built in the same refresh. The reference is
    /// the value `reference_offset` rows before it.
    SeriesLatest {
        series: String,
        #[serde(default)]
        reference_offset: Option<usize>,
    },
}
