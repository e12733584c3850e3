use config::{Config, ConfigError, File, FileFormat};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load<T: DeserializeOwned>(file_path: PathBuf) -> Result<T, ConfigError> {
        if let Some(ext) = file_path.extension() {
            let file_format = match ext.to_str() {
                Some("yaml") => Ok(FileFormat::Yaml),
                Some("yml") => Ok(FileFormat::Yaml),
                Some("json") => Ok(FileFormat::Json),
                Some("toml") => Ok(FileFormat::Toml),
                Some("ron") => Ok(FileFormat::Ron),
                _ => Err(ConfigError::NotFound(format!(
                    "File format not supported. File needs to end with .yaml, .json, .toml or .ron. {file_path:?}"
                ))),
            }?;

            let config_str = fs::read_to_string(&file_path).map_err(|err| {
                ConfigError::Message(format!("Could not read config file {file_path:?}: {err}"))
            })?;

            // this interprets anything after a $ (within certain rules) as an environment variable
            // and it will look in the environment to find it.
            // Therefore all $ symbols must be escaped with a backslash: \$
            let config_str_with_env_vars = shellexpand::env(&config_str).map_err(|err| {
                ConfigError::Message(format!(
                    "Shell expansion of config file {file_path:?} failed: {err}"
                ))
            })?;

            let config = Config::builder()
                .add_source(File::from_str(&config_str_with_env_vars, file_format))
                .build()?;

            let settings_struct: T = config.try_deserialize()?;
            Ok(settings_struct)
        } else {
            Err(ConfigError::NotFound(format!(
                "Could not find file extension on path {file_path:?}"
            )))
        }
    }
}
