use clap::ArgMatches;
use url::Url;

use crate::{
    commands::params::PARAMETER_API_URL, configuration::Configuration, error::CliError,
    format::OutputFormatter, param_utils::get_format_parameter_value,
};

pub fn print_configuration(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    let format = get_format_parameter_value(sub_matches);
    println!("{}", configuration.format(format)?);
    Ok(())
}

pub fn print_configuration_path() -> Result<(), CliError> {
    let path = Configuration::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}

pub fn set_configuration(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    // the argument is mandatory; clap guarantees it is present
    let api_url = sub_matches.get_one::<Url>(PARAMETER_API_URL).unwrap();

    let mut configuration = configuration.clone();
    configuration.set_api_url(api_url.clone());
    configuration.save_to_default()?;
    Ok(())
}
