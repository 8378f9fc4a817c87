use crate::commands::params::{
    PARAMETER_FORMAT, PARAMETER_HEADERS, PARAMETER_PRETTY, PARAMETER_SORT_DIR, PARAMETER_SORT_KEY,
};
use crate::format::{OutputFormat, OutputFormatOptions};
use crate::listing::SortSpec;
use crate::model::SortDirection;
use clap::ArgMatches;
use tracing::trace;

pub fn get_format_parameter_value(sub_matches: &ArgMatches) -> OutputFormat {
    trace!("Resolving output format options...");

    // Using clap, we have configured the 'format' argument to always have a
    // default value ("json"). Because of that, it is safe to unwrap.
    let format = sub_matches.get_one::<String>(PARAMETER_FORMAT).unwrap();
    let with_headers = sub_matches.get_flag(PARAMETER_HEADERS);
    let pretty = sub_matches.get_flag(PARAMETER_PRETTY);

    let options = OutputFormatOptions {
        with_headers,
        pretty,
    };

    // Using clap, we allow only valid values for the --format parameter.
    // Because of that it is safe to unwrap.
    OutputFormat::from_string_with_options(format, options).unwrap()
}

/// Read the sort parameters, if any. A sort key without a direction sorts
/// ascending.
pub fn get_sort_parameter_value(sub_matches: &ArgMatches) -> Option<SortSpec> {
    let key = sub_matches.get_one::<String>(PARAMETER_SORT_KEY)?;
    let direction = sub_matches
        .get_one::<String>(PARAMETER_SORT_DIR)
        // clap restricts the value set; parsing cannot fail
        .map(|dir| dir.parse().unwrap())
        .unwrap_or(SortDirection::Asc);
    Some(SortSpec {
        key: key.clone(),
        direction,
    })
}
