//! Config command definitions.

use crate::commands::params::{
    api_url_parameter, format_parameter, format_pretty_parameter, format_with_headers_parameter,
    COMMAND_CONFIG, COMMAND_GET, COMMAND_PATH, COMMAND_SET,
};
use clap::Command;

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Manage the client configuration")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Show the current configuration")
                .arg(format_with_headers_parameter())
                .arg(format_pretty_parameter())
                .arg(format_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_PATH)
                .about("Print the configuration file path"),
        )
        .subcommand(
            Command::new(COMMAND_SET)
                .about("Update the configuration")
                .arg(api_url_parameter()),
        )
}
