//! Shared command parameters for all CLI commands.
//!
//! This module defines the command and parameter names used across the
//! command modules, along with common argument configurations.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};
use url::Url;

// CRUD operations
pub const COMMAND_CREATE: &str = "create";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_UPDATE: &str = "update";
pub const COMMAND_DELETE: &str = "delete";

// Cluster commands
pub const COMMAND_CLUSTER: &str = "cluster";
pub const COMMAND_ADD_SUBNET: &str = "add-subnet";
pub const COMMAND_REMOVE_SUBNET: &str = "remove-subnet";

// Host commands
pub const COMMAND_HOST: &str = "host";

// Config commands
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_SET: &str = "set";
pub const COMMAND_PATH: &str = "path";

// Parameter names
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_HEADERS: &str = "headers";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_TENANT_ID: &str = "tenant-id";
pub const PARAMETER_PAGE_SIZE: &str = "page-size";
pub const PARAMETER_SORT_KEY: &str = "sort-key";
pub const PARAMETER_SORT_DIR: &str = "sort-dir";
pub const PARAMETER_NO_EXPAND_SUBNETS: &str = "no-expand-subnets";
pub const PARAMETER_CLUSTER: &str = "cluster";
pub const PARAMETER_SUBNET: &str = "subnet";
pub const PARAMETER_HOST_ID: &str = "host-id";
pub const PARAMETER_API_URL: &str = "api-url";

/// Create the global format parameter.
///
/// This parameter is used across multiple commands for output formatting.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env("NRMCLI_FORMAT")
        .default_value("json")
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

pub fn format_pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Format the output pretty")
}

pub fn format_with_headers_parameter() -> Arg {
    Arg::new(PARAMETER_HEADERS)
        .long(PARAMETER_HEADERS)
        .action(ArgAction::SetTrue)
        .required(false)
        .env("NRMCLI_HEADERS")
        .help("Format the output with headers")
}

/// Positional cluster identifier; accepts the id or the name.
pub fn cluster_argument() -> Arg {
    Arg::new(PARAMETER_CLUSTER)
        .value_name("CLUSTER")
        .required(true)
        .help("ID or name of the cluster")
}

/// Positional subnet identifier; accepts the id or the name.
pub fn subnet_argument() -> Arg {
    Arg::new(PARAMETER_SUBNET)
        .value_name("SUBNET")
        .required(true)
        .help("ID or name of the subnet")
}

/// Positional host identifier. Hosts are addressed by id only.
pub fn host_id_argument() -> Arg {
    Arg::new(PARAMETER_HOST_ID)
        .value_name("HOST")
        .required(true)
        .help("ID of the host")
}

/// Positional cluster name for create.
pub fn name_argument() -> Arg {
    Arg::new(PARAMETER_NAME)
        .value_name("NAME")
        .required(true)
        .help("Name of this cluster")
}

pub fn name_option_parameter() -> Arg {
    Arg::new(PARAMETER_NAME)
        .long(PARAMETER_NAME)
        .num_args(1)
        .required(false)
        .help("Filter by cluster name")
}

pub fn new_name_parameter() -> Arg {
    Arg::new(PARAMETER_NAME)
        .long(PARAMETER_NAME)
        .num_args(1)
        .required(true)
        .help("New name for the cluster")
}

pub fn tenant_id_parameter() -> Arg {
    Arg::new(PARAMETER_TENANT_ID)
        .long(PARAMETER_TENANT_ID)
        .num_args(1)
        .required(false)
        .help("Tenant that owns the resource")
}

pub fn page_size_parameter() -> Arg {
    Arg::new(PARAMETER_PAGE_SIZE)
        .long(PARAMETER_PAGE_SIZE)
        .num_args(1)
        .required(false)
        .value_parser(|s: &str| -> Result<usize, String> {
            let val: usize = s.parse().map_err(|_| "Must be a number".to_string())?;
            if val == 0 {
                Err("Value must be greater than zero".to_string())
            } else {
                Ok(val)
            }
        })
        .help("Fetch results in pages of this size")
}

pub fn sort_key_parameter() -> Arg {
    Arg::new(PARAMETER_SORT_KEY)
        .long(PARAMETER_SORT_KEY)
        .num_args(1)
        .required(false)
        .value_parser(["id", "name"])
        .help("Sort the listing by this field")
}

pub fn sort_dir_parameter() -> Arg {
    Arg::new(PARAMETER_SORT_DIR)
        .long(PARAMETER_SORT_DIR)
        .num_args(1)
        .required(false)
        .value_parser(["asc", "desc"])
        .help("Sort direction")
}

pub fn no_expand_subnets_parameter() -> Arg {
    Arg::new(PARAMETER_NO_EXPAND_SUBNETS)
        .long(PARAMETER_NO_EXPAND_SUBNETS)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Keep subnet ids as-is instead of expanding them to details")
}

pub fn api_url_parameter() -> Arg {
    Arg::new(PARAMETER_API_URL)
        .long(PARAMETER_API_URL)
        .num_args(1)
        .required(true)
        .value_parser(clap::value_parser!(Url))
        .help("Base URL of the NRM API")
}
