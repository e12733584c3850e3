use crate::constants::{
    DAY_FIRST_DATE_FORMATS, ISO_DATE_FORMATS, ISO_DATETIME_FORMATS, MONTH_FIRST_DATE_FORMATS,
};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::debug;
use polars::prelude::{Column, DataType, PolarsResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Days between 0001-01-01 (CE day 1) and 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// How to read numeric dates whose day and month positions are ambiguous.
///
/// `01/02/2020` is the 1st of February under [`DateOrder::DayFirst`] and the
/// 2nd of January under [`DateOrder::MonthFirst`]. Year-first (ISO) values
/// parse the same way under both.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DateOrder {
    #[default]
    DayFirst,
    MonthFirst,
}

impl DateOrder {
    fn formats(&self) -> &'static [&'static str] {
        match self {
            DateOrder::DayFirst => DAY_FIRST_DATE_FORMATS,
            DateOrder::MonthFirst => MONTH_FIRST_DATE_FORMATS,
        }
    }
}

fn try_parse<T, F>(date_str: &str, formats: &[&str], parser: F) -> Option<T>
where
    F: Fn(&str, &str) -> Option<T>,
{
    for format in formats {
        match parser(date_str, format) {
            Some(value) => {
                return Some(value);
            }
            _ => {
                debug!("Failed to cast {date_str} to {format:?}");
                continue;
            }
        }
    }
    None
}

/// Year-first layouts are only tried when the value actually starts with a
/// four digit year, otherwise `01-02-03` would be read as the year 1.
fn starts_with_year(date_str: &str) -> bool {
    let bytes = date_str.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && !bytes[4].is_ascii_digit()
}

/// Parses a single cell into a calendar date.
///
/// ISO dates and date-times are accepted under any order; date-times are
/// truncated to their date. Everything else is read with the layouts of
/// `order`. Returns `None` when no layout fits.
pub fn parse_date(date_str: &str, order: DateOrder) -> Option<NaiveDate> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }

    if starts_with_year(date_str) {
        return try_parse(date_str, ISO_DATE_FORMATS, |s, fmt| {
            NaiveDate::parse_from_str(s, fmt).ok()
        })
        .or_else(|| {
            try_parse(date_str, ISO_DATETIME_FORMATS, |s, fmt| {
                NaiveDateTime::parse_from_str(s, fmt).ok()
            })
            .map(|datetime| datetime.date())
        });
    }

    try_parse(date_str, order.formats(), |s, fmt| {
        NaiveDate::parse_from_str(s, fmt).ok()
    })
}

pub(crate) fn date_to_epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

pub(crate) fn epoch_days_to_date(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE)
}

/// Reads a `Date` column back into calendar dates. Nulls stay `None`.
pub(crate) fn date_column_values(column: &Column) -> PolarsResult<Vec<Option<NaiveDate>>> {
    let physical = column.cast(&DataType::Int32)?;
    Ok(physical
        .i32()?
        .iter()
        .map(|days| days.and_then(epoch_days_to_date))
        .collect())
}
