// Calendar conversions
use clap::{value_parser, Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("gps-week")
        .arg_required_else_help(true)
        .about("Convert (year, day of year) to GPS week and day number, or the opposite.")
        .arg(
            Arg::new("year")
                .short('y')
                .long("year")
                .value_name("YYYY")
                .value_parser(value_parser!(i32).range(1..=9999))
                .action(ArgAction::Set)
                .requires("doy")
                .conflicts_with("week")
                .help("Year (4 digits)"),
        )
        .arg(
            Arg::new("doy")
                .short('d')
                .long("doy")
                .value_name("DOY")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set)
                .requires("year")
                .help("Day of year, starting at 1"),
        )
        .arg(
            Arg::new("week")
                .short('w')
                .long("week")
                .value_name("WWWW")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set)
                .requires("day")
                .help("GPS week"),
        )
        .arg(
            Arg::new("day")
                .long("day")
                .value_name("D")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set)
                .requires("week")
                .help("Day number within GPS week (0 = Sunday)"),
        )
}
