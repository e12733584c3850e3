use crate::config::{ComponentValue, DashboardConfig};
use crate::validation::validation_utils::{fail_validation_on_duplicates, find_duplicates};
use std::borrow::Cow;
use std::collections::HashSet;
use validator::ValidationError;

pub(crate) fn validate_unique_names(config: &DashboardConfig) -> Result<(), ValidationError> {
    fail_validation_on_duplicates(
        &find_duplicates(config.sources.iter().map(|s| s.name.as_str())),
        "duplicate_source_names",
        "Source names must be unique.",
    )?;
    fail_validation_on_duplicates(
        &find_duplicates(config.series.iter().map(|s| s.name.as_str())),
        "duplicate_series_names",
        "Series names must be unique.",
    )?;
    fail_validation_on_duplicates(
        &find_duplicates(config.scalars.iter().map(|s| s.name.as_str())),
        "duplicate_scalar_names",
        "Scalar names must be unique.",
    )?;
    fail_validation_on_duplicates(
        &find_duplicates(config.panels.iter().map(|p| p.id.as_str())),
        "duplicate_panel_ids",
        "Panel ids must be unique.",
    )?;
    config.scalars.iter().try_for_each(|scalar| {
        fail_validation_on_duplicates(
            &find_duplicates(scalar.components.iter().map(|c| c.label.as_str())),
            "duplicate_component_labels",
            "Component labels must be unique within a scalar.",
        )
    })
}

/// Every series must name a declared source, and every scalar component and
/// panel must name a declared series.
pub(crate) fn validate_references(config: &DashboardConfig) -> Result<(), ValidationError> {
    let source_names: HashSet<&str> = config.sources.iter().map(|s| s.name.as_str()).collect();
    let series_names: HashSet<&str> = config.series.iter().map(|s| s.name.as_str()).collect();

    let unknown_sources: Vec<&str> = config
        .series
        .iter()
        .map(|s| s.source.as_str())
        .filter(|source| !source_names.contains(source))
        .collect();
    fail_on_dangling(&unknown_sources, "unknown_source", "Series refer to unknown sources.")?;

    let unknown_series: Vec<&str> = config
        .scalars
        .iter()
        .flat_map(|scalar| scalar.components.iter())
        .filter_map(|component| match &component.value {
            ComponentValue::SeriesLatest { series, .. } => Some(series.as_str()),
            ComponentValue::Fixed { .. } => None,
        })
        .chain(
            config
                .panels
                .iter()
                .flat_map(|panel| panel.series.iter().map(String::as_str)),
        )
        .filter(|series| !series_names.contains(series))
        .collect();
    fail_on_dangling(
        &unknown_series,
        "unknown_series",
        "Scalars or panels refer to unknown series.",
    )
}

pub(crate) fn validate_separators(config: &DashboardConfig) -> Result<(), ValidationError> {
    let invalid: Vec<&str> = config
        .sources
        .iter()
        .filter(|source| source.separator.is_some_and(|sep| !sep.is_ascii()))
        .map(|source| source.name.as_str())
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_separator");
        error.add_param(Cow::from("sources"), &invalid);
        Err(error.with_message(Cow::Borrowed("Separators must be ASCII characters.")))
    }
}

fn fail_on_dangling(
    dangling: &[&str],
    error_id: &'static str,
    reason: &'static str,
) -> Result<(), ValidationError> {
    if dangling.is_empty() {
        Ok(())
    } else {
        let mut error = ValidationError::new(error_id);
        error.add_param(Cow::from("references"), &dangling);
        Err(error.with_message(Cow::Borrowed(reason)))
    }
}
