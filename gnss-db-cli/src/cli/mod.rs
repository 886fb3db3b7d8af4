use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};

use gnss_db::prelude::PathContext;

use crate::Error;

mod gps_week;
mod init;
mod orbit;
mod parse;
mod paths;
mod prns;
mod process;

/// Environment variable defining the database root directory
pub const ROOT_ENV: &str = "GNSS_DB_ROOT";

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

/// Mandatory --year argument
pub(crate) fn year_arg() -> Arg {
    Arg::new("year")
        .short('y')
        .long("year")
        .value_name("YYYY")
        .value_parser(value_parser!(i32).range(1..=9999))
        .action(ArgAction::Set)
        .required(true)
        .help("Year (4 digits)")
}

/// Mandatory --doy argument
pub(crate) fn doy_arg() -> Arg {
    Arg::new("doy")
        .short('d')
        .long("doy")
        .value_name("DOY")
        .value_parser(value_parser!(u32))
        .action(ArgAction::Set)
        .required(true)
        .help("Day of year, starting at 1")
}

/// Command line definition
fn command() -> Command {
    Command::new("gnss-db")
        .version(env!("CARGO_PKG_VERSION"))
        .about("GNSS observation & orbit database")
        .long_about(
            "gnss-db manages a local database of GNSS receiver observations
(RINEX) and orbit products (SP3), organized by year and day of year.
The database root directory is defined either with --root
or the $GNSS_DB_ROOT environment variable.",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .color(ColorChoice::Always)
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("FOLDER")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Database root directory (contains \"database/\"). Overrides $GNSS_DB_ROOT."),
        )
        .subcommand(paths::subcommand())
        .subcommand(parse::subcommand())
        .subcommand(gps_week::subcommand())
        .subcommand(init::subcommand())
        .subcommand(process::subcommand())
        .subcommand(orbit::subcommand())
        .subcommand(prns::subcommand())
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: command().get_matches(),
        }
    }
    /// Database root directory, from --root or $GNSS_DB_ROOT
    pub fn root(&self) -> Result<PathBuf, Error> {
        if let Some(root) = self.matches.get_one::<PathBuf>("root") {
            return Ok(root.clone());
        }
        match std::env::var(ROOT_ENV) {
            Ok(root) if !root.is_empty() => Ok(PathBuf::from(root)),
            _ => Err(Error::MissingRoot),
        }
    }
    /// [PathContext] from --year, --doy and the root directory
    pub fn context(&self, matches: &ArgMatches) -> Result<PathContext, Error> {
        let year = *matches
            .get_one::<i32>("year")
            .ok_or(Error::MissingArgument("year"))?;
        let doy = *matches
            .get_one::<u32>("doy")
            .ok_or(Error::MissingArgument("doy"))?;
        Ok(PathContext::new(year, doy, self.root()?)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    fn cli(args: &[&str]) -> Cli {
        Cli {
            matches: command().try_get_matches_from(args).unwrap(),
        }
    }
    #[test]
    fn day_context() {
        let cli = cli(&["gnss-db", "--root", "/data", "paths", "-y", "2014", "-d", "15"]);
        let (name, matches) = cli.matches.subcommand().unwrap();
        assert_eq!(name, "paths");
        assert_eq!(
            matches.get_one::<String>("constellation").map(|s| s.as_str()),
            Some("igr")
        );
        let ctx = cli.context(matches).unwrap();
        assert_eq!(ctx.year(), 2014);
        assert_eq!(ctx.doy(), 15);
        assert_eq!(ctx.root(), std::path::Path::new("/data"));
    }
    #[test]
    fn invalid_day() {
        let cli = cli(&["gnss-db", "-r", "/data", "process", "-y", "2014", "-d", "366"]);
        let (_, matches) = cli.matches.subcommand().unwrap();
        assert!(cli.context(matches).is_err());
    }
    #[test]
    fn rejected_arguments() {
        for args in [
            vec!["gnss-db", "paths", "-y", "2014"],
            vec!["gnss-db", "paths", "-y", "year", "-d", "15"],
            vec!["gnss-db", "orbit", "-y", "2014", "-d", "15"],
            vec!["gnss-db", "gps-week", "-y", "2014", "-w", "1775"],
            vec!["gnss-db", "paths", "-y", "2147483647", "-d", "1"],
            vec!["gnss-db", "paths", "-y", "0", "-d", "1"],
            vec!["gnss-db", "init", "-y", "10000"],
        ] {
            assert!(command().try_get_matches_from(args.clone()).is_err(), "{:?}", args);
        }
    }
}
