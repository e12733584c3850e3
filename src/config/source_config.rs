use crate::extract::DateOrder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// One delimited input table.
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    #[validate(length(min = 1))]
    pub name: String,
    pub path: PathBuf,
    #[validate(length(min = 1))]
    pub date_column: String,
    #[serde(default)]
    pub date_order: DateOrder,
    #[serde(default)]
    pub separator: Option<char>,
}

impl SourceConfig {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        date_column: impl Into<String>,
    ) -> Self {
        SourceConfig {
            name: name.into(),
            path: path.into(),
            date_column: date_column.into(),
            date_order: DateOrder::default(),
            separator: None,
        }
    }

    pub fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }
}
