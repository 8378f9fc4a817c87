//! Cluster command definitions.
//!
//! This module defines CLI commands related to cluster management.

use crate::commands::params::{
    cluster_argument, format_parameter, format_pretty_parameter, format_with_headers_parameter,
    name_argument, name_option_parameter, new_name_parameter, no_expand_subnets_parameter,
    page_size_parameter, sort_dir_parameter, sort_key_parameter, subnet_argument,
    tenant_id_parameter, COMMAND_ADD_SUBNET, COMMAND_CLUSTER, COMMAND_CREATE, COMMAND_DELETE,
    COMMAND_GET, COMMAND_LIST, COMMAND_REMOVE_SUBNET, COMMAND_UPDATE,
};
use clap::Command;

/// Create the cluster command with all its subcommands.
pub fn cluster_command() -> Command {
    Command::new(COMMAND_CLUSTER)
        .about("Manage clusters")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List clusters")
                .visible_alias("ls")
                .arg(name_option_parameter())
                .arg(tenant_id_parameter())
                .arg(page_size_parameter())
                .arg(sort_key_parameter())
                .arg(sort_dir_parameter())
                .arg(no_expand_subnets_parameter())
                .arg(format_with_headers_parameter())
                .arg(format_pretty_parameter())
                .arg(format_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Show information of a given cluster")
                .arg(cluster_argument())
                .arg(format_with_headers_parameter())
                .arg(format_pretty_parameter())
                .arg(format_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a cluster with a given name")
                .arg(name_argument())
                .arg(tenant_id_parameter())
                .arg(format_with_headers_parameter())
                .arg(format_pretty_parameter())
                .arg(format_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a cluster's information")
                .arg(cluster_argument())
                .arg(new_name_parameter())
                .arg(format_with_headers_parameter())
                .arg(format_pretty_parameter())
                .arg(format_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a given cluster")
                .visible_alias("rm")
                .arg(cluster_argument()),
        )
        .subcommand(
            Command::new(COMMAND_ADD_SUBNET)
                .about("Add a subnet to a cluster")
                .arg(cluster_argument())
                .arg(subnet_argument())
                .arg(tenant_id_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_REMOVE_SUBNET)
                .about("Remove a subnet from a cluster")
                .arg(cluster_argument())
                .arg(subnet_argument())
                .arg(tenant_id_parameter()),
        )
}
