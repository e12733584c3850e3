use crate::config::{PanelConfig, ScalarConfig, SeriesConfig, SourceConfig};
use crate::validation::dashboard_config_validation::{
    validate_references, validate_separators, validate_unique_names,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Everything one refresh of the dashboard needs to know.
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_unique_names"))]
#[validate(schema(function = "validate_references"))]
#[validate(schema(function = "validate_separators"))]
pub struct DashboardConfig {
    #[validate(length(min = 1), nested)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    #[validate(nested)]
    pub series: Vec<SeriesConfig>,
    #[serde(default)]
    #[validate(nested)]
    pub scalars: Vec<ScalarConfig>,
    #[serde(default)]
    #[validate(nested)]
    pub panels: Vec<PanelConfig>,
}

impl DashboardConfig {
    pub fn source(&self, name: &str) -> Option<&SourceConfig> {
        self.sources.iter().find(|source| source.name == name)
    }
}
