// Filename conventions
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("parse")
        .arg_required_else_help(true)
        .about(
            "Recover production attributes (station or product, year, day of year, date)
from standardized file names. Directories are walked recursively.",
        )
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .required(true)
                .help("File names, files or directories."),
        )
}
