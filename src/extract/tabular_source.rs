use crate::config::SourceConfig;
use crate::constants::DEFAULT_TABLE_NAME;
use crate::extract::date_parsing::{
    DateOrder, date_column_values, date_to_epoch_days, parse_date,
};
use crate::extract::error::ExtractionError;
use crate::extract::traits::HasRows;
use chrono::NaiveDate;
use log::{debug, info};
use polars::prelude::{Column, CsvReadOptions, DataFrame, DataType, SerReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A delimited table loaded into memory with its date column normalised.
///
/// Every column except the date column is kept as text. The date column is
/// parsed once at load time under the configured [`DateOrder`] and stored as a
/// calendar date; a table with even one unreadable date is never returned.
#[derive(Debug, Clone)]
pub struct TabularSource {
    name: String,
    path: PathBuf,
    date_column: String,
    date_order: DateOrder,
    data: DataFrame,
}

impl TabularSource {
    /// Reads the comma separated file at `path` and parses `date_column`.
    pub fn load(
        path: impl AsRef<Path>,
        date_column: &str,
        date_order: DateOrder,
    ) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        Self::load_named(name, path, date_column, date_order, None)
    }

    pub fn load_named(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        date_column: &str,
        date_order: DateOrder,
        separator: Option<char>,
    ) -> Result<Self, ExtractionError> {
        let name = name.into();
        let path = path.as_ref();
        info!(
            "Attempting to load table '{name}' from {} ({date_order})",
            path.display()
        );

        let mut data = read_table(path, separator)?;
        parse_date_column(&mut data, &name, date_column, date_order)?;

        info!(
            "Loaded table '{name}' with {} rows and {} columns",
            data.height(),
            data.width()
        );
        Ok(TabularSource {
            name,
            path: path.to_path_buf(),
            date_column: date_column.to_string(),
            date_order,
            data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    pub fn date_order(&self) -> DateOrder {
        self.date_order
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// The parsed date column, in row order.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, ExtractionError> {
        let column = self.data.column(&self.date_column)?;
        date_column_values(column)?
            .into_iter()
            .enumerate()
            .map(|(row, date)| {
                date.ok_or_else(|| ExtractionError::Parse {
                    column: self.date_column.clone(),
                    row,
                    raw: String::new(),
                })
            })
            .collect()
    }
}

impl HasRows for TabularSource {
    fn table_name(&self) -> &str {
        &self.name
    }

    fn data(&self) -> &DataFrame {
        &self.data
    }
}

impl PartialEq for TabularSource {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.path == other.path
            && self.date_column == other.date_column
            && self.date_order == other.date_order
            && self.data.equals_missing(&other.data)
    }
}

impl TryFrom<&SourceConfig> for TabularSource {
    type Error = ExtractionError;

    fn try_from(config: &SourceConfig) -> Result<Self, Self::Error> {
        TabularSource::load_named(
            config.name.clone(),
            &config.path,
            &config.date_column,
            config.date_order,
            config.separator,
        )
    }
}

fn read_table(path: &Path, separator: Option<char>) -> Result<DataFrame, ExtractionError> {
    let load_error = |reason: String| ExtractionError::Load {
        path: path.to_path_buf(),
        reason,
    };

    if !path.is_file() {
        return Err(load_error("no such file".to_string()));
    }

    // Schema inference is switched off so that every column arrives as text.
    // Numbers are coerced later, where the offending row can be reported.
    let mut csv_read_options = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0));

    if let Some(sep) = separator {
        if !sep.is_ascii() {
            return Err(load_error(format!("separator '{sep}' is not an ASCII character")));
        }
        let new_parse_options = (*csv_read_options.parse_options)
            .clone()
            .with_separator(sep as u8);
        csv_read_options.parse_options = Arc::from(new_parse_options);
    }

    csv_read_options
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|err| load_error(err.to_string()))
}

fn parse_date_column(
    data: &mut DataFrame,
    table_name: &str,
    date_column: &str,
    date_order: DateOrder,
) -> Result<(), ExtractionError> {
    let column = data
        .column(date_column)
        .map_err(|_| ExtractionError::ColumnNotFound {
            column: date_column.to_string(),
            table: table_name.to_string(),
        })?;

    let epoch_days = column
        .str()?
        .iter()
        .enumerate()
        .map(|(row, raw)| {
            raw.and_then(|raw| parse_date(raw, date_order))
                .map(date_to_epoch_days)
                .ok_or_else(|| ExtractionError::Parse {
                    column: date_column.to_string(),
                    row,
                    raw: raw.unwrap_or_default().to_string(),
                })
        })
        .collect::<Result<Vec<i32>, ExtractionError>>()?;

    debug!("Parsed {} dates in column {date_column}", epoch_days.len());
    let parsed = Column::new(date_column.into(), epoch_days).cast(&DataType::Date)?;
    data.with_column(parsed)?;
    Ok(())
}
