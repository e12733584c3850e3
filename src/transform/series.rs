use crate::extract::date_parsing::date_column_values;
use crate::extract::traits::HasRows;
use crate::transform::error::TransformError;
use chrono::NaiveDate;
use log::{debug, warn};
use polars::prelude::{Column, DataType};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What `to_series` does with a row whose value is absent.
///
/// Empty cells and non-finite numbers (`NaN`, `inf`) both count as absent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Fail with [`TransformError::MissingValue`].
    #[default]
    Reject,
    /// Drop the whole row from both x and y.
    Exclude,
    /// Keep the row and chart the value as `NaN`.
    Nan,
}

/// A named, time-ordered pair of parallel date and value sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    x: Vec<NaiveDate>,
    y: Vec<f64>,
}

impl Series {
    pub fn new(
        name: impl Into<String>,
        x: Vec<NaiveDate>,
        y: Vec<f64>,
    ) -> Result<Self, TransformError> {
        if x.len() != y.len() {
            return Err(TransformError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Series {
            name: name.into(),
            x,
            y,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> &[NaiveDate] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// The last point in row order.
    pub fn latest(&self) -> Option<(NaiveDate, f64)> {
        self.points().last()
    }

    /// The y value `offset` rows before the last one; `0` is the last value.
    pub fn value_before_latest(&self, offset: usize) -> Option<f64> {
        self.y
            .len()
            .checked_sub(offset + 1)
            .and_then(|idx| self.y.get(idx).copied())
    }
}

/// Projects `x_column` and `y_column` of every row into a [`Series`].
///
/// Rows keep their order and none is dropped: a missing value fails the whole
/// projection. Use [`to_series_with_policy`] to opt into another behaviour.
pub fn to_series(
    rows: &impl HasRows,
    x_column: &str,
    y_column: &str,
    name: &str,
) -> Result<Series, TransformError> {
    to_series_with_policy(rows, x_column, y_column, name, MissingValuePolicy::Reject)
}

pub fn to_series_with_policy(
    rows: &impl HasRows,
    x_column: &str,
    y_column: &str,
    name: &str,
    policy: MissingValuePolicy,
) -> Result<Series, TransformError> {
    let x_col = find_column(rows, x_column)?;
    let y_col = find_column(rows, y_column)?;

    if x_col.dtype() != &DataType::Date {
        return Err(TransformError::ColumnTypeMismatch {
            column: x_column.to_string(),
            found: x_col.dtype().to_string(),
            expected: "date",
        });
    }

    let dates = date_column_values(x_col)?;
    let values = numeric_values(y_col, y_column)?;

    let mut x = Vec::with_capacity(dates.len());
    let mut y = Vec::with_capacity(values.len());
    let mut excluded = 0usize;

    for (row, (date, value)) in dates.into_iter().zip(values).enumerate() {
        match (date, value, policy) {
            (Some(date), Some(value), _) => {
                x.push(date);
                y.push(value);
            }
            (_, _, MissingValuePolicy::Exclude) => excluded += 1,
            (Some(date), None, MissingValuePolicy::Nan) => {
                x.push(date);
                y.push(f64::NAN);
            }
            (None, _, _) => {
                return Err(TransformError::MissingValue {
                    column: x_column.to_string(),
                    row,
                });
            }
            (Some(_), None, MissingValuePolicy::Reject) => {
                return Err(TransformError::MissingValue {
                    column: y_column.to_string(),
                    row,
                });
            }
        }
    }

    if excluded > 0 {
        warn!(
            "Excluded {excluded} rows with missing values from series '{name}' (table {})",
            rows.table_name()
        );
    }
    debug!("Built series '{name}' with {} points", x.len());

    Series::new(name, x, y)
}

fn find_column<'a>(rows: &'a impl HasRows, column: &str) -> Result<&'a Column, TransformError> {
    rows.data()
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
            table: rows.table_name().to_string(),
        })
}

/// Reads a column as numbers, `None` marking absent cells.
///
/// Text that is neither empty nor a number is a type mismatch, never a gap.
fn numeric_values(column: &Column, name: &str) -> Result<Vec<Option<f64>>, TransformError> {
    match column.dtype() {
        DataType::String => column
            .str()?
            .iter()
            .enumerate()
            .map(|(row, raw)| match raw.map(str::trim) {
                None | Some("") => Ok(None),
                Some(raw) => raw
                    .parse::<f64>()
                    .map(|value| value.is_finite().then_some(value))
                    .map_err(|_| TransformError::TypeMismatch {
                        column: name.to_string(),
                        row,
                        raw: raw.to_string(),
                        expected: "number",
                    }),
            })
            .collect(),
        dtype if dtype.is_numeric() => {
            let casted = column.cast(&DataType::Float64)?;
            Ok(casted
                .f64()?
                .iter()
                .map(|value| value.filter(|v| v.is_finite()))
                .collect())
        }
        other => Err(TransformError::ColumnTypeMismatch {
            column: name.to_string(),
            found: other.to_string(),
            expected: "number",
        }),
    }
}
