use crate::config::{
    ComponentValue, ConfigLoader, DashboardConfig, PanelConfig, ScalarConfig, SeriesConfig,
};
use crate::error::{ConstructionError, PipelineError};
use crate::extract::TabularSource;
use crate::extract::error::ExtractionError;
use crate::transform::error::TransformError;
use crate::transform::{DerivedScalar, ScalarComponents, Series, derive_scalar, to_series_with_policy};
use log::{info, warn};
use ordermap::OrderMap;
use serde::Serialize;
use std::path::PathBuf;
use validator::Validate;

/// Turns a [`DashboardConfig`] into chart-ready data.
///
/// A pipeline holds configuration only. Every refresh reads its sources from
/// disk again and hands out values that share nothing with other refreshes,
/// so one pipeline can serve concurrent callers without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    config: DashboardConfig,
}

impl Pipeline {
    pub fn new(config: DashboardConfig) -> Result<Pipeline, ConstructionError> {
        config.validate()?;
        Ok(Pipeline { config })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Loads every source and derives every series and scalar.
    ///
    /// The first error aborts the whole refresh.
    pub fn refresh(&self) -> Result<DashboardData, PipelineError> {
        info!("Starting refresh of {} sources", self.config.sources.len());

        let mut sources = OrderMap::new();
        for source_config in &self.config.sources {
            let source = TabularSource::try_from(source_config)?;
            sources.insert(source_config.name.clone(), source);
        }

        let mut series = OrderMap::new();
        for series_config in &self.config.series {
            let source = sources
                .get(&series_config.source)
                .ok_or_else(|| PipelineError::UnknownSource(series_config.source.clone()))?;
            series.insert(
                series_config.name.clone(),
                build_series(series_config, source)?,
            );
        }

        let scalars = self
            .config
            .scalars
            .iter()
            .map(|scalar_config| {
                build_scalar(scalar_config, |name| {
                    series
                        .get(name)
                        .ok_or_else(|| PipelineError::UnknownSeries(name.to_string()))
                })
            })
            .collect::<Result<Vec<DerivedScalar>, PipelineError>>()?;

        info!(
            "Concluded refresh with {} series and {} scalars",
            series.len(),
            scalars.len()
        );
        Ok(DashboardData {
            series: series.into_values().collect(),
            scalars,
            panels: self.config.panels.iter().map(Panel::from).collect(),
        })
    }

    /// Like [`Pipeline::refresh`], but a failing source only takes down the
    /// series built from it, and a failing series only the scalars using it.
    pub fn refresh_isolated(&self) -> RefreshReport {
        info!(
            "Starting isolated refresh of {} sources",
            self.config.sources.len()
        );

        let sources: OrderMap<String, Result<TabularSource, ExtractionError>> = self
            .config
            .sources
            .iter()
            .map(|source_config| {
                let source = TabularSource::try_from(source_config);
                if let Err(err) = &source {
                    warn!("Source '{}' failed to load: {err}", source_config.name);
                }
                (source_config.name.clone(), source)
            })
            .collect();

        let series: OrderMap<String, Result<Series, PipelineError>> = self
            .config
            .series
            .iter()
            .map(|series_config| {
                let result = match sources.get(&series_config.source) {
                    Some(Ok(source)) => build_series(series_config, source),
                    Some(Err(err)) => Err(PipelineError::SourceUnavailable {
                        source_name: series_config.source.clone(),
                        reason: err.to_string(),
                    }),
                    None => Err(PipelineError::UnknownSource(series_config.source.clone())),
                };
                (series_config.name.clone(), result)
            })
            .collect();

        let scalars: OrderMap<String, Result<DerivedScalar, PipelineError>> = self
            .config
            .scalars
            .iter()
            .map(|scalar_config| {
                let result = build_scalar(scalar_config, |name| match series.get(name) {
                    Some(Ok(built)) => Ok(built),
                    Some(Err(err)) => Err(PipelineError::SeriesUnavailable {
                        series_name: name.to_string(),
                        reason: err.to_string(),
                    }),
                    None => Err(PipelineError::UnknownSeries(name.to_string())),
                });
                (scalar_config.name.clone(), result)
            })
            .collect();

        let report = RefreshReport {
            series,
            scalars,
            panels: self.config.panels.iter().map(Panel::from).collect(),
        };
        info!(
            "Concluded isolated refresh with {} failures",
            report.failures().len()
        );
        report
    }
}

impl TryFrom<DashboardConfig> for Pipeline {
    type Error = ConstructionError;

    fn try_from(config: DashboardConfig) -> Result<Self, Self::Error> {
        Pipeline::new(config)
    }
}

impl TryFrom<PathBuf> for Pipeline {
    type Error = ConstructionError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        if !path.exists() {
            return Err(ConstructionError::NoConfigFileFound(path));
        }
        let config: DashboardConfig = ConfigLoader::load(path)?;

        Pipeline::try_from(config)
    }
}

fn build_series(config: &SeriesConfig, source: &TabularSource) -> Result<Series, PipelineError> {
    let x_column = config.x_column.as_deref().unwrap_or(source.date_column());

    let series = match &config.filter {
        Some(filter) => {
            let view = filter.apply(source)?;
            to_series_with_policy(
                &view,
                x_column,
                &config.y_column,
                &config.name,
                config.missing_values,
            )?
        }
        None => to_series_with_policy(
            source,
            x_column,
            &config.y_column,
            &config.name,
            config.missing_values,
        )?,
    };
    Ok(series)
}

fn build_scalar<'a, F>(config: &ScalarConfig, find_series: F) -> Result<DerivedScalar, PipelineError>
where
    F: Fn(&str) -> Result<&'a Series, PipelineError>,
{
    let mut components = ScalarComponents::new();

    for component in &config.components {
        let (current, reference) = match &component.value {
            ComponentValue::Fixed { current, reference } => (*current, *reference),
            ComponentValue::SeriesLatest {
                series,
                reference_offset,
            } => {
                let series = find_series(series)?;
                let (_, current) = series.latest().ok_or_else(|| {
                    TransformError::Arithmetic(format!("series '{}' is empty", series.name()))
                })?;
                let reference = reference_offset
                    .map(|offset| {
                        series.value_before_latest(offset).ok_or_else(|| {
                            TransformError::Arithmetic(format!(
                                "series '{}' has no value {offset} rows before its latest",
                                series.name()
                            ))
                        })
                    })
                    .transpose()?;
                (current, reference)
            }
        };
        components.insert(component.label.clone(), current, reference);
    }

    Ok(derive_scalar(&components, config.combine)?.named(config.name.clone()))
}

/// A group of series the rendering side draws in one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub id: String,
    pub title: String,
    pub series: Vec<String>,
}

impl From<&PanelConfig> for Panel {
    fn from(config: &PanelConfig) -> Self {
        Panel {
            id: config.id.clone(),
            title: config.title.clone(),
            series: config.series.clone(),
        }
    }
}

/// The output of one refresh, ready to be handed to the rendering side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub series: Vec<Series>,
    pub scalars: Vec<DerivedScalar>,
    pub panels: Vec<Panel>,
}

impl DashboardData {
    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.name() == name)
    }

    pub fn scalar(&self, name: &str) -> Option<&DerivedScalar> {
        self.scalars.iter().find(|scalar| scalar.name() == name)
    }

    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Per-item outcome of [`Pipeline::refresh_isolated`].
#[derive(Debug)]
pub struct RefreshReport {
    pub series: OrderMap<String, Result<Series, PipelineError>>,
    pub scalars: OrderMap<String, Result<DerivedScalar, PipelineError>>,
    pub panels: Vec<Panel>,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        self.failures().is_empty()
    }

    pub fn failures(&self) -> Vec<(&str, &PipelineError)> {
        self.series
            .iter()
            .filter_map(|(name, result)| result.as_ref().err().map(|err| (name.as_str(), err)))
            .chain(
                self.scalars
                    .iter()
                    .filter_map(|(name, result)| {
                        result.as_ref().err().map(|err| (name.as_str(), err))
                    }),
            )
            .collect()
    }

    /// Everything that succeeded. Panels only list series that were built.
    pub fn into_partial_data(self) -> DashboardData {
        let series: Vec<Series> = self.series.into_values().filter_map(Result::ok).collect();
        let panels = self
            .panels
            .into_iter()
            .map(|mut panel| {
                panel
                    .series
                    .retain(|name| series.iter().any(|s| s.name() == name));
                panel
            })
            .collect();

        DashboardData {
            series,
            scalars: self.scalars.into_values().filter_map(Result::ok).collect(),
            panels,
        }
    }

    /// All results, or the first failure in configuration order.
    pub fn into_data(self) -> Result<DashboardData, PipelineError> {
        Ok(DashboardData {
            series: self.series.into_values().collect::<Result<_, _>>()?,
            scalars: self.scalars.into_values().collect::<Result<_, _>>()?,
            panels: self.panels,
        })
    }
}
