//! Command dispatch.
//!
//! Parses the command line and routes each subcommand to its handler in
//! [`crate::actions`].

use clap::ArgMatches;

use crate::actions;
use crate::commands::{
    create_cli_commands, COMMAND_ADD_SUBNET, COMMAND_CLUSTER, COMMAND_CONFIG, COMMAND_CREATE,
    COMMAND_DELETE, COMMAND_GET, COMMAND_HOST, COMMAND_LIST, COMMAND_PATH, COMMAND_REMOVE_SUBNET,
    COMMAND_SET, COMMAND_UPDATE,
};
use crate::configuration::Configuration;
use crate::error::CliError;

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    let message = match sub_matches.subcommand() {
        Some(m) => m.0,
        None => "unknown",
    };

    message.to_string()
}

pub async fn execute_command(configuration: Configuration) -> Result<(), CliError> {
    let commands = create_cli_commands();

    match commands.subcommand() {
        // Cluster
        Some((COMMAND_CLUSTER, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, sub_matches)) => {
                actions::clusters::list_clusters(&configuration, sub_matches).await
            }
            Some((COMMAND_GET, sub_matches)) => {
                actions::clusters::print_cluster_details(&configuration, sub_matches).await
            }
            Some((COMMAND_CREATE, sub_matches)) => {
                actions::clusters::create_cluster(&configuration, sub_matches).await
            }
            Some((COMMAND_UPDATE, sub_matches)) => {
                actions::clusters::update_cluster(&configuration, sub_matches).await
            }
            Some((COMMAND_DELETE, sub_matches)) => {
                actions::clusters::delete_cluster(&configuration, sub_matches).await
            }
            Some((COMMAND_ADD_SUBNET, sub_matches)) => {
                actions::clusters::add_subnet(&configuration, sub_matches).await
            }
            Some((COMMAND_REMOVE_SUBNET, sub_matches)) => {
                actions::clusters::remove_subnet(&configuration, sub_matches).await
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        // Host
        Some((COMMAND_HOST, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_GET, sub_matches)) => {
                actions::hosts::print_host_restrictions(&configuration, sub_matches).await
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        // Configuration
        Some((COMMAND_CONFIG, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_GET, sub_matches)) => {
                actions::config::print_configuration(&configuration, sub_matches)
            }
            Some((COMMAND_PATH, _)) => actions::config::print_configuration_path(),
            Some((COMMAND_SET, sub_matches)) => {
                actions::config::set_configuration(&configuration, sub_matches)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        None => Err(CliError::UnsupportedSubcommand(String::from("unknown"))),
        _ => unreachable!(),
    }
}
