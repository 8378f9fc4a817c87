use clap::ArgMatches;
use tracing::trace;

use crate::{
    api::{ClusterSpec, NrmApiClient, SubnetAttachment},
    commands::params::{
        PARAMETER_CLUSTER, PARAMETER_NAME, PARAMETER_NO_EXPAND_SUBNETS, PARAMETER_PAGE_SIZE,
        PARAMETER_SUBNET, PARAMETER_TENANT_ID,
    },
    configuration::Configuration,
    error::CliError,
    format::OutputFormatter,
    listing::ClusterListing,
    model::SearchOptions,
    param_utils::{get_format_parameter_value, get_sort_parameter_value},
    resolution::{resolve_cluster_identifier, resolve_subnet_identifier},
};

pub async fn list_clusters(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Listing clusters...");

    let format = get_format_parameter_value(sub_matches);
    let mut api = NrmApiClient::from_configuration(configuration);

    let mut filters = SearchOptions::default();
    filters.name = sub_matches.get_one::<String>(PARAMETER_NAME).cloned();
    filters.tenant_id = sub_matches.get_one::<String>(PARAMETER_TENANT_ID).cloned();

    let mut listing = ClusterListing::new()
        .with_page_size(sub_matches.get_one::<usize>(PARAMETER_PAGE_SIZE).copied())
        .with_sort(get_sort_parameter_value(sub_matches));
    if let Some(filter_len) = configuration.subnet_id_filter_len() {
        listing = listing.with_subnet_id_filter_len(filter_len);
    }

    let mut clusters = listing.list(&mut api, &filters).await?;
    if !sub_matches.get_flag(PARAMETER_NO_EXPAND_SUBNETS) {
        listing.extend_with_subnets(&mut api, &mut clusters).await?;
    }

    println!("{}", clusters.format(format)?);
    Ok(())
}

pub async fn print_cluster_details(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    let format = get_format_parameter_value(sub_matches);
    let mut api = NrmApiClient::from_configuration(configuration);

    // the argument is mandatory; clap guarantees it is present
    let identifier = sub_matches.get_one::<String>(PARAMETER_CLUSTER).unwrap();
    let id = resolve_cluster_identifier(&mut api, identifier).await?;

    let cluster = api.get_cluster(&id).await?;
    println!("{}", cluster.format(format)?);
    Ok(())
}

pub async fn create_cluster(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    let format = get_format_parameter_value(sub_matches);
    let api = NrmApiClient::from_configuration(configuration);

    // the argument is mandatory; clap guarantees it is present
    let name = sub_matches.get_one::<String>(PARAMETER_NAME).unwrap();
    let spec = ClusterSpec {
        name: Some(name.clone()),
        tenant_id: sub_matches.get_one::<String>(PARAMETER_TENANT_ID).cloned(),
    };

    let cluster = api.create_cluster(&spec).await?;
    println!("{}", cluster.format(format)?);
    Ok(())
}

pub async fn update_cluster(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    let format = get_format_parameter_value(sub_matches);
    let mut api = NrmApiClient::from_configuration(configuration);

    let identifier = sub_matches.get_one::<String>(PARAMETER_CLUSTER).unwrap();
    let name = sub_matches
        .get_one::<String>(PARAMETER_NAME)
        .ok_or(CliError::MissingRequiredArgument(PARAMETER_NAME.to_string()))?;

    let id = resolve_cluster_identifier(&mut api, identifier).await?;
    let spec = ClusterSpec {
        name: Some(name.clone()),
        tenant_id: None,
    };

    let cluster = api.update_cluster(&id, &spec).await?;
    println!("{}", cluster.format(format)?);
    Ok(())
}

pub async fn delete_cluster(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    let mut api = NrmApiClient::from_configuration(configuration);

    let identifier = sub_matches.get_one::<String>(PARAMETER_CLUSTER).unwrap();
    let id = resolve_cluster_identifier(&mut api, identifier).await?;

    api.delete_cluster(&id).await?;
    Ok(())
}

pub async fn add_subnet(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    let mut api = NrmApiClient::from_configuration(configuration);

    let cluster_identifier = sub_matches.get_one::<String>(PARAMETER_CLUSTER).unwrap();
    let subnet_identifier = sub_matches.get_one::<String>(PARAMETER_SUBNET).unwrap();

    let cluster_id = resolve_cluster_identifier(&mut api, cluster_identifier).await?;
    let subnet_id = resolve_subnet_identifier(&mut api, subnet_identifier).await?;

    let attachment = SubnetAttachment {
        subnet_id,
        tenant_id: sub_matches.get_one::<String>(PARAMETER_TENANT_ID).cloned(),
    };
    api.cluster_insert_subnet(&cluster_id, &attachment).await?;
    Ok(())
}

pub async fn remove_subnet(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    let mut api = NrmApiClient::from_configuration(configuration);

    let cluster_identifier = sub_matches.get_one::<String>(PARAMETER_CLUSTER).unwrap();
    let subnet_identifier = sub_matches.get_one::<String>(PARAMETER_SUBNET).unwrap();

    let cluster_id = resolve_cluster_identifier(&mut api, cluster_identifier).await?;
    let subnet_id = resolve_subnet_identifier(&mut api, subnet_identifier).await?;

    let attachment = SubnetAttachment {
        subnet_id,
        tenant_id: sub_matches.get_one::<String>(PARAMETER_TENANT_ID).cloned(),
    };
    api.cluster_remove_subnet(&cluster_id, &attachment).await?;
    Ok(())
}
