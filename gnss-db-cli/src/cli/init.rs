// Database folders creation
use clap::{value_parser, Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("init")
        .arg_required_else_help(true)
        .about("Create the yearly database folders.")
        .arg(
            Arg::new("year")
                .short('y')
                .long("year")
                .value_name("YYYY")
                .value_parser(value_parser!(i32).range(1..=9999))
                .action(ArgAction::Set)
                .required(true)
                .help("Year (4 digits)"),
        )
}
