// Database paths resolution
use clap::{Arg, ArgAction, Command};

use super::{doy_arg, year_arg};

pub fn subcommand() -> Command {
    Command::new("paths")
        .arg_required_else_help(true)
        .about("Resolve the database paths of given day. The file system is not accessed.")
        .arg(year_arg())
        .arg(doy_arg())
        .arg(
            Arg::new("station")
                .short('s')
                .long("station")
                .value_name("CODE")
                .action(ArgAction::Set)
                .help("Station code (4 letters) used to resolve per station files."),
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
}
