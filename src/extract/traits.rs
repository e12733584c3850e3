use crate::extract::row::{Row, collect_rows};
use polars::prelude::{DataFrame, PolarsError};

/// Anything that exposes an ordered block of rows: a freshly loaded source or a
/// filtered view of one.
pub trait HasRows {
    fn table_name(&self) -> &str;
    fn data(&self) -> &DataFrame;

    fn height(&self) -> usize {
        self.data().height()
    }

    fn has_column(&self, column: &str) -> bool {
        self.data().get_column_index(column).is_some()
    }

    /// Materialises the rows as records, in table order.
    fn rows(&self) -> Result<Vec<Row>, PolarsError> {
        collect_rows(self.data())
    }
}
