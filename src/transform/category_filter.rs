use crate::extract::traits::HasRows;
use crate::transform::error::TransformError;
use log::{debug, warn};
use polars::prelude::{DataFrame, DataType, IntoLazy, col, lit};
use serde::{Deserialize, Serialize};

/// Selects the rows whose `column` holds exactly `label`.
///
/// Comparison is plain string equality: no trimming, no case folding. Labels
/// must be given exactly as they appear in the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryFilter {
    pub column: String,
    pub label: String,
}

impl CategoryFilter {
    pub fn new(column: impl Into<String>, label: impl Into<String>) -> Self {
        CategoryFilter {
            column: column.into(),
            label: label.into(),
        }
    }

    /// Returns the matching rows of `table` in their original order.
    ///
    /// The table itself is left untouched. No match is not an error: the
    /// returned view is simply empty.
    pub fn apply(&self, table: &impl HasRows) -> Result<TableView, TransformError> {
        let data = table.data();
        let category = data
            .column(&self.column)
            .map_err(|_| TransformError::ColumnNotFound {
                column: self.column.clone(),
                table: table.table_name().to_string(),
            })?;

        if category.dtype() != &DataType::String {
            return Err(TransformError::ColumnTypeMismatch {
                column: self.column.clone(),
                found: category.dtype().to_string(),
                expected: "text",
            });
        }

        let filtered = data
            .clone()
            .lazy()
            .filter(col(self.column.as_str()).eq(lit(self.label.as_str())))
            .collect()?;

        debug!(
            "Filter {}='{}' kept {} of {} rows in table {}",
            self.column,
            self.label,
            filtered.height(),
            data.height(),
            table.table_name()
        );
        if filtered.height() == 0 {
            warn!(
                "No row of table {} has '{}' in column {}",
                table.table_name(),
                self.label,
                self.column
            );
        }

        Ok(TableView {
            table_name: table.table_name().to_string(),
            filter: Some(self.clone()),
            data: filtered,
        })
    }
}

/// An ordered subsequence of the rows of one table.
#[derive(Debug, Clone)]
pub struct TableView {
    table_name: String,
    filter: Option<CategoryFilter>,
    data: DataFrame,
}

impl TableView {
    /// A view over every row of `table`.
    pub fn all(table: &impl HasRows) -> Self {
        TableView {
            table_name: table.table_name().to_string(),
            filter: None,
            data: table.data().clone(),
        }
    }

    pub fn filter(&self) -> Option<&CategoryFilter> {
        self.filter.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }
}

impl HasRows for TableView {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn data(&self) -> &DataFrame {
        &self.data
    }
}

pub fn filter_by_category(
    table: &impl HasRows,
    column: &str,
    label: &str,
) -> Result<TableView, TransformError> {
    CategoryFilter::new(column, label).apply(table)
}
