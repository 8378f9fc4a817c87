use clap::ArgMatches;
use tracing::trace;

use crate::{
    api::NrmApiClient, commands::params::PARAMETER_HOST_ID, configuration::Configuration,
    error::CliError, format::OutputFormatter, param_utils::get_format_parameter_value,
};

/// Show the restriction record of a host. Hosts are addressed by id only;
/// there is no name resolution for them.
pub async fn print_host_restrictions(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Fetching host restrictions...");

    let format = get_format_parameter_value(sub_matches);
    let api = NrmApiClient::from_configuration(configuration);

    // the argument is mandatory; clap guarantees it is present
    let id = sub_matches.get_one::<String>(PARAMETER_HOST_ID).unwrap();

    let host = api.get_host(id).await?;
    println!("{}", host.format(format)?);
    Ok(())
}
