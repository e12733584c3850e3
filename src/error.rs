use crate::extract::error::ExtractionError;
use crate::transform::error::TransformError;
use config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("Could not find config file at '{0}'")]
    NoConfigFileFound(PathBuf),
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("No source named '{0}' is configured")]
    UnknownSource(String),
    #[error("No series named '{0}' was built")]
    UnknownSeries(String),
    #[error("Source '{source_name}' could not be loaded: {reason}")]
    SourceUnavailable { source_name: String, reason: String },
    #[error("Series '{series_name}' could not be built: {reason}")]
    SeriesUnavailable { series_name: String, reason: String },
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
