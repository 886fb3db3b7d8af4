// Satellite identifiers
use clap::{Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("prns")
        .about("List the GPS & Glonass satellite identifiers.")
        .arg(
            Arg::new("constellation")
                .short('c')
                .long("constellation")
                .value_name("CONSTELLATION")
                .action(ArgAction::Set)
                .help("Restrict to a single constellation (\"G\" or \"R\")."),
        )
}
