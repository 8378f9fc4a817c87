//! Host command definitions.
//!
//! Hosts expose a single read-only query: their restriction record.

use crate::commands::params::{
    format_parameter, format_pretty_parameter, format_with_headers_parameter, host_id_argument,
    COMMAND_GET, COMMAND_HOST,
};
use clap::Command;

/// Create the host command with its subcommands.
pub fn host_command() -> Command {
    Command::new(COMMAND_HOST)
        .about("Query host restrictions")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Show restrictions about a given host")
                .arg(host_id_argument())
                .arg(format_with_headers_parameter())
                .arg(format_pretty_parameter())
                .arg(format_parameter()),
        )
}
