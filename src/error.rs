use thiserror::Error;

use crate::{
    api::ApiError, configuration::ConfigurationError, exit_codes::NrmExitCode,
    format::FormattingError, listing::ListingError,
};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or management
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] FormattingError),
    /// Error when a required command-line argument is missing
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// Error related to JSON serialization/deserialization
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API error: {0}")]
    ApiError(#[from] ApiError),

    #[error("{0}")]
    ListingError(#[from] ListingError),
}

impl CliError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> NrmExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => NrmExitCode::UsageError,
            CliError::ConfigurationError(_) => NrmExitCode::ConfigError,
            CliError::FormattingError(_) => NrmExitCode::DataError,
            CliError::MissingRequiredArgument(_) => NrmExitCode::UsageError,
            CliError::JsonError(_) => NrmExitCode::DataError,
            CliError::ApiError(e) => Self::api_exit_code(e),
            CliError::ListingError(ListingError::Api(e)) => Self::api_exit_code(e),
            // the calibrated filter cost disagrees with the server
            CliError::ListingError(ListingError::UriLimitUnsatisfiable { .. }) => {
                NrmExitCode::ConfigError
            }
        }
    }

    fn api_exit_code(error: &ApiError) -> NrmExitCode {
        match error {
            ApiError::NotFound { .. } => NrmExitCode::NotFound,
            ApiError::Ambiguous { .. } => NrmExitCode::UsageError,
            ApiError::Http(_) => NrmExitCode::NetworkError,
            ApiError::Json(_) => NrmExitCode::DataError,
            _ => NrmExitCode::ApiError,
        }
    }
}
