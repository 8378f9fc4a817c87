use nrmcli::cli::execute_command;
use nrmcli::configuration::{Configuration, ConfigurationError};
use nrmcli::error::CliError;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum NrmcliError {
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),
    #[error(transparent)]
    CliError(#[from] CliError),
}

/// Main entry point for the program
#[tokio::main]
async fn main() -> Result<(), NrmcliError> {
    // Initialize the logging subsystem
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Get the configuration
    let configuration = Configuration::load_or_create_default()?;

    // Parse and execute the CLI command
    match execute_command(configuration).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ::std::process::exit(e.exit_code().code());
        }
    }
}
