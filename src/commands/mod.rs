//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the
//! clap crate. Each resource has its own submodule building a `Command`
//! tree; shared parameter definitions live in `params`.

use clap::{ArgMatches, Command};

pub mod cluster;
pub mod config;
pub mod host;
pub mod params;

pub use params::{
    COMMAND_ADD_SUBNET, COMMAND_CLUSTER, COMMAND_CONFIG, COMMAND_CREATE, COMMAND_DELETE,
    COMMAND_GET, COMMAND_HOST, COMMAND_LIST, COMMAND_PATH, COMMAND_REMOVE_SUBNET, COMMAND_SET,
    COMMAND_UPDATE,
};

/// Create and configure all CLI commands and their arguments.
///
/// # Returns
///
/// An `ArgMatches` instance containing the parsed command-line arguments.
pub fn create_cli_commands() -> ArgMatches {
    build_cli().get_matches()
}

/// The full command tree, separated from parsing for help/usage tests.
pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cluster::cluster_command())
        .subcommand(host::host_command())
        .subcommand(config::config_command())
}
