use crate::transform::{CategoryFilter, MissingValuePolicy};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One chartable series, cut from a single source.
///
/// The optional filter is always evaluated against `source` itself.
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct SeriesConfig {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub source: String,
    /// Defaults to the date column of `source`.
    #[serde(default)]
    pub x_column: Option<String>,
    #[validate(length(min = 1))]
    pub y_column: String,
    #[serde(default)]
    pub filter: Option<CategoryFilter>,
    #[serde(default)]
    pub missing_values: MissingValuePolicy,
}

impl SeriesConfig {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        y_column: impl Into<String>,
    ) -> Self {
        SeriesConfig {
            name: name.into(),
            source: source.into(),
            x_column: None,
            y_column: y_column.into(),
            filter: None,
            missing_values: MissingValuePolicy::default(),
        }
    }

    pub fn with_x_column(mut self, x_column: impl Into<String>) -> Self {
        self.x_column = Some(x_column.into());
        self
    }

    pub fn with_filter(mut self, column: impl Into<String>, label: impl Into<String>) -> Self {
        self.filter = Some(CategoryFilter::new(column, label));
        self
    }

    pub fn with_missing_values(mut self, missing_values: MissingValuePolicy) -> Self {
        self.missing_values = missing_values;
        self
    }
}
