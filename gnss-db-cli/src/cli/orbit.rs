// Orbit interpolation
use clap::{value_parser, Arg, ArgAction, Command};

use super::{doy_arg, year_arg};

pub fn subcommand() -> Command {
    Command::new("orbit")
        .arg_required_else_help(true)
        .about(
            "Interpolate the position of one satellite over the whole day,
from the SP3 product of the database.",
        )
        .arg(year_arg())
        .arg(doy_arg())
        .arg(
            Arg::new("sv")
                .long("sv")
                .value_name("SV")
                .action(ArgAction::Set)
                .required(true)
                .help("Satellite vehicle, like \"G01\" or \"R12\"."),
        )
        .arg(
            Arg::new("constellation")
                .short('c')
                .long("constellation")
                .value_name("CODE")
                .action(ArgAction::Set)
                .default_value("igr")
                .help("Orbit product code, like \"igr\" or \"igl\"."),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .value_name("SECONDS")
                .value_parser(value_parser!(f64))
                .action(ArgAction::Set)
                .help("Sampling interval in seconds (30 s by default)."),
        )
}
