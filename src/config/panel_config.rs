use serde::{Deserialize, Serialize};
use validator::Validate;

/// Series that are drawn together in one chart.
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    #[validate(length(min = 1))]
    pub id: String,
    pub title: String,
    #[validate(length(min = 1))]
    pub series: Vec<String>,
}
