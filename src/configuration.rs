//! Configuration management for the NRM CLI client.
//!
//! The configuration is a small YAML file holding the API endpoint and the
//! optional transport calibration overrides. It lives under the platform
//! configuration directory, or under `NRMCLI_CONFIG_DIR` when set.

use crate::format::{FormattingError, OutputFormat, OutputFormatter};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use serde_yaml;
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "nrmcli";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:9696/v2.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause:?}")]
    FailedToLoadData { cause: Box<dyn std::error::Error> },
    #[error("failed to write configuration data to file, because of: {cause:?}")]
    FailedToWriteData { cause: Box<dyn std::error::Error> },
    #[error("{cause:?}")]
    FormattingError {
        #[from]
        cause: FormattingError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    api_url: Url,
    /// Override for the server's request-URI length limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_uri_len: Option<usize>,
    /// Override for the encoded byte cost of one subnet id filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    subnet_id_filter_len: Option<usize>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            // the default URL is a valid literal; parsing cannot fail
            api_url: Url::parse(DEFAULT_API_URL).unwrap(),
            max_uri_len: None,
            subnet_id_filter_len: None,
        }
    }
}

impl Configuration {
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn set_api_url(&mut self, api_url: Url) {
        self.api_url = api_url;
    }

    pub fn max_uri_len(&self) -> Option<usize> {
        self.max_uri_len
    }

    pub fn subnet_id_filter_len(&self) -> Option<usize> {
        self.subnet_id_filter_len
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        // Check for NRMCLI_CONFIG_DIR environment variable first
        if let Ok(config_dir_str) = std::env::var("NRMCLI_CONFIG_DIR") {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        let configuration_directory = config_dir();
        match configuration_directory {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);

                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {:?}...", default_file_path);
        Configuration::load_from_file(default_file_path)
    }

    /// Load the default configuration, creating one if none exists yet.
    pub fn load_or_create_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!(
            "Loading or creating configuration from {:?}...",
            default_file_path
        );

        match Configuration::load_from_file(default_file_path.clone()) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Only a missing file warrants creating the default
                match &e {
                    ConfigurationError::FailedToLoadData { cause } => {
                        if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
                            if io_err.kind() == std::io::ErrorKind::NotFound {
                                debug!(
                                    "Configuration file not found, creating default configuration"
                                );
                                let default_config = Configuration::default();
                                default_config.save(&default_file_path)?;
                                Ok(default_config)
                            } else {
                                Err(e)
                            }
                        } else {
                            Err(e)
                        }
                    }
                    _ => Err(e),
                }
            }
        }
    }

    pub fn load_from_file(path: PathBuf) -> Result<Configuration, ConfigurationError> {
        match fs::read_to_string(path.clone()) {
            Ok(configuration) => {
                let configuration = serde_yaml::from_str(&configuration);
                match configuration {
                    Ok(configuration) => Ok(configuration),
                    Err(cause) => Err(ConfigurationError::FailedToLoadData {
                        cause: Box::new(cause),
                    }),
                }
            }
            Err(cause) => Err(ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            }),
        }
    }

    pub fn write(&self, writer: Box<dyn Write>) -> Result<(), ConfigurationError> {
        match serde_yaml::to_writer(writer, &self.clone()) {
            Ok(()) => Ok(()),
            Err(e) => Err(ConfigurationError::FailedToWriteData { cause: Box::new(e) }),
        }
    }

    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigurationError> {
        // first check if the parent directory exists and try to create it if not
        let configuration_directory = path.parent();
        match configuration_directory {
            Some(path) => {
                // this operation only executes if the directory does not exist
                match fs::create_dir_all(path) {
                    Ok(()) => (),
                    Err(_) => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
                }
            }
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path);
        match file {
            Ok(file) => {
                let writer: Box<dyn Write> = Box::new(file);
                Ok(self.write(writer)?)
            }
            Err(e) => Err(ConfigurationError::FailedToWriteData { cause: Box::new(e) }),
        }
    }

    pub fn save_to_default(&self) -> Result<(), ConfigurationError> {
        self.save(&Self::get_default_configuration_file_path()?)
    }
}

impl OutputFormatter for Configuration {
    type Item = Configuration;

    fn format(&self, format: OutputFormat) -> Result<String, FormattingError> {
        match format {
            OutputFormat::Json(options) => {
                if options.pretty {
                    Ok(serde_json::to_string_pretty(self)?)
                } else {
                    Ok(serde_json::to_string(self)?)
                }
            }
            OutputFormat::Csv(options) => {
                if options.with_headers {
                    Ok(format!("API_URL\n{}", self.api_url))
                } else {
                    Ok(self.api_url.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIGURATION_FILE_NAME);

        let mut configuration = Configuration::default();
        configuration.set_api_url(Url::parse("https://nrm.example.com/v2.0").unwrap());
        configuration.save(&path).unwrap();

        let loaded = Configuration::load_from_file(path).unwrap();
        assert_eq!(loaded, configuration);
        assert_eq!(loaded.api_url().as_str(), "https://nrm.example.com/v2.0");
    }

    #[test]
    fn missing_file_fails_to_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.yml");
        assert!(Configuration::load_from_file(path).is_err());
    }

    #[test]
    fn default_configuration_has_no_calibration_overrides() {
        let configuration = Configuration::default();
        assert_eq!(configuration.max_uri_len(), None);
        assert_eq!(configuration.subnet_id_filter_len(), None);
    }
}
