use crate::extract::date_parsing::epoch_days_to_date;
use chrono::NaiveDate;
use ordermap::OrderMap;
use polars::prelude::{AnyValue, DataFrame, PolarsError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One cell of a loaded table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Null,
}

impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{text}"),
            CellValue::Number(number) => write!(f, "{number}"),
            CellValue::Date(date) => write!(f, "{date}"),
            CellValue::Null => write!(f, "null"),
        }
    }
}

/// A single record, keyed by column name in header order.
pub type Row = OrderMap<String, CellValue>;

impl From<AnyValue<'_>> for CellValue {
    fn from(value: AnyValue<'_>) -> Self {
        match value {
            AnyValue::Null => CellValue::Null,
            AnyValue::String(text) => CellValue::Text(text.to_string()),
            AnyValue::StringOwned(text) => CellValue::Text(text.to_string()),
            AnyValue::Date(days) => epoch_days_to_date(days).map_or(CellValue::Null, CellValue::Date),
            other => match other.extract::<f64>() {
                Some(number) => CellValue::Number(number),
                None => CellValue::Text(other.to_string()),
            },
        }
    }
}

pub(crate) fn collect_rows(data: &DataFrame) -> Result<Vec<Row>, PolarsError> {
    let columns = data.get_columns();
    (0..data.height())
        .map(|idx| {
            columns
                .iter()
                .map(|col| Ok((col.name().to_string(), CellValue::from(col.get(idx)?))))
                .collect::<Result<Row, PolarsError>>()
        })
        .collect()
}
