//! Subcommands implementation
use std::{path::PathBuf, str::FromStr};

use clap::ArgMatches;
use itertools::Itertools;
use walkdir::WalkDir;

use gnss_db::prelude::{
    database_folders, doy_from_gpsweek, gps_and_glonass, gpsweek_from_doy, prn_list,
    run_for_all_files, tec_map_epoch, Constellation, Duration, FileLoader, FilenameAttributes,
    Loader, OrbitPositions, SV,
};
use gnss_db::prn::{GLONASS_PRNS, GPS_PRNS};

use crate::{cli::Cli, Error};

pub fn paths(cli: &Cli, matches: &ArgMatches) -> Result<(), Error> {
    let ctx = cli.context(matches)?;
    let constellation = matches
        .get_one::<String>("constellation")
        .map(|s| s.as_str())
        .unwrap_or("igr");

    println!("date       : {}", ctx.date());
    println!("gps week   : {} (day {})", ctx.gps_week().week, ctx.gps_week().day_number);
    println!("orbit      : {}", ctx.orbit_file(constellation).display());
    println!("geo        : {}", ctx.geo().display());
    println!("rinex      : {}", ctx.rinex().display());
    println!("process    : {}", ctx.process().display());
    println!("all_process: {}", ctx.all_process().display());
    println!("roti       : {}", ctx.roti_file().display());
    println!("dcb        : {}", ctx.dcb_file().display());
    println!("json       : {}", ctx.json_file().display());
    println!("prns       : {}", ctx.prns_file().display());

    if let Some(station) = matches.get_one::<String>("station") {
        println!("{} rinex      : {}", station, ctx.rinex_file(station).display());
        println!("{} process    : {}", station, ctx.process_file(station).display());
        println!(
            "{} all_process: {}",
            station,
            ctx.all_process_file(station).display()
        );
    }
    Ok(())
}

fn describe(fname: &str) {
    match FilenameAttributes::from_str(fname) {
        Ok(attrs) => println!(
            "{}: {} \"{}\" {} doy={:03} ({})",
            fname,
            attrs.category(),
            attrs.code(),
            attrs.year(),
            attrs.doy(),
            attrs.date(),
        ),
        Err(e) => match tec_map_epoch(fname) {
            Ok(epoch) => println!("{}: tec map {}", fname, epoch),
            Err(_) => warn!("{}", e),
        },
    }
}

pub fn parse(matches: &ArgMatches) -> Result<(), Error> {
    let paths = matches
        .get_many::<PathBuf>("path")
        .ok_or(Error::MissingArgument("path"))?;

    for path in paths {
        if path.is_dir() {
            let walkdir = WalkDir::new(path).sort_by_file_name();
            for entry in walkdir.into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_file() {
                    describe(&entry.file_name().to_string_lossy());
                }
            }
        } else {
            let fname = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string());
            describe(&fname);
        }
    }
    Ok(())
}

pub fn gps_week(matches: &ArgMatches) -> Result<(), Error> {
    if let (Some(year), Some(doy)) = (
        matches.get_one::<i32>("year"),
        matches.get_one::<u32>("doy"),
    ) {
        let week = gpsweek_from_doy(*year, *doy)?;
        println!("{} {} ({})", week.week, week.day_number, week.to_date()?);
        return Ok(());
    }
    let week = *matches
        .get_one::<u32>("week")
        .ok_or(Error::MissingArgument("week"))?;
    let day = *matches
        .get_one::<u32>("day")
        .ok_or(Error::MissingArgument("day"))?;
    let (year, doy) = doy_from_gpsweek(week, day)?;
    println!("{} {:03}", year, doy);
    Ok(())
}

pub fn init(cli: &Cli, matches: &ArgMatches) -> Result<(), Error> {
    let year = *matches
        .get_one::<i32>("year")
        .ok_or(Error::MissingArgument("year"))?;
    let root = cli.root()?;
    database_folders(&root, year)?;
    info!("database folders ready for year {}", year);
    Ok(())
}

pub fn process(cli: &Cli, matches: &ArgMatches) -> Result<(), Error> {
    let ctx = cli.context(matches)?;
    let limit = matches.get_one::<usize>("limit").copied();
    let quiet = matches.get_flag("quiet");

    let loader = FileLoader::default();
    let report = run_for_all_files(&ctx, &loader, limit)?;

    for (path, reason) in report.skipped.iter() {
        warn!("\"{}\" skipped: {}", path.display(), reason);
    }
    if !quiet {
        for output in report.outputs.iter() {
            println!("{}", output.display());
        }
    }

    let summary = report.save_attributes(&ctx)?;
    info!(
        "{} processed, {} skipped, summary in \"{}\"",
        report.outputs.len(),
        report.skipped.len(),
        summary.display()
    );
    Ok(())
}

pub fn orbit(cli: &Cli, matches: &ArgMatches) -> Result<(), Error> {
    let ctx = cli.context(matches)?;
    let constellation = matches
        .get_one::<String>("constellation")
        .map(|s| s.as_str())
        .unwrap_or("igr");

    let sv = matches
        .get_one::<String>("sv")
        .ok_or(Error::MissingArgument("sv"))?;
    let sv = SV::from_str(sv.trim()).map_err(|_| Error::SvParsing(sv.to_string()))?;

    let step = matches
        .get_one::<f64>("step")
        .map(|seconds| Duration::from_seconds(*seconds));

    let loader = FileLoader::default();
    let table = loader.load_orbits(&ctx.orbit_file(constellation))?;
    let positions = OrbitPositions::from_table(&table, sv)?.position(step)?;

    for (epoch, (x_km, y_km, z_km)) in positions.iter() {
        println!("{} {:.6} {:.6} {:.6}", epoch, x_km, y_km, z_km);
    }
    Ok(())
}

pub fn prns(matches: &ArgMatches) -> Result<(), Error> {
    let prns = match matches.get_one::<String>("constellation") {
        Some(code) => {
            let constellation = Constellation::from_str(code.trim())
                .map_err(|_| Error::NonSupportedConstellation(code.to_string()))?;
            match constellation {
                Constellation::GPS => prn_list(constellation, GPS_PRNS),
                Constellation::Glonass => prn_list(constellation, GLONASS_PRNS),
                _ => return Err(Error::NonSupportedConstellation(code.to_string())),
            }
        },
        None => gps_and_glonass(),
    };
    println!("{}", prns.iter().join(" "));
    Ok(())
}
