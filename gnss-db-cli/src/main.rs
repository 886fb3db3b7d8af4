//! Command line interface to the GNSS database
#[macro_use]
extern crate log;

mod cli;
mod ops;

use cli::Cli;
use env_logger::{Builder, Target};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error")]
    StdioError(#[from] std::io::Error),
    #[error("{0}")]
    DatabaseError(#[from] gnss_db::Error),
    #[error("{0}")]
    DomainError(#[from] gnss_db::DomainError),
    #[error("database root is not defined: use --root or $GNSS_DB_ROOT")]
    MissingRoot,
    #[error("missing --{0} argument")]
    MissingArgument(&'static str),
    #[error("invalid satellite \"{0}\"")]
    SvParsing(String),
    #[error("constellation \"{0}\" is not supported")]
    NonSupportedConstellation(String),
}

pub fn main() -> Result<(), Error> {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();

    match cli.matches.subcommand() {
        Some(("paths", submatches)) => ops::paths(&cli, submatches),
        Some(("parse", submatches)) => ops::parse(submatches),
        Some(("gps-week", submatches)) => ops::gps_week(submatches),
        Some(("init", submatches)) => ops::init(&cli, submatches),
        Some(("process", submatches)) => ops::process(&cli, submatches),
        Some(("orbit", submatches)) => ops::orbit(&cli, submatches),
        Some(("prns", submatches)) => ops::prns(submatches),
        _ => Ok(()),
    }
}
