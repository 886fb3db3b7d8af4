// Daily batch processing
use clap::{value_parser, Arg, ArgAction, Command};

use super::{doy_arg, year_arg};

pub fn subcommand() -> Command {
    Command::new("process")
        .arg_required_else_help(true)
        .about(
            "Process every receiver file of given day: extract complete observations,
write one processed file per station and the daily attributes summary.",
        )
        .arg(year_arg())
        .arg(doy_arg())
        .arg(
            Arg::new("limit")
                .short('l')
                .long("limit")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Set)
                .help("Maximal number of directory entries to consider."),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Do not print generated files."),
        )
}
