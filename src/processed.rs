//! Processed observations text files.
//!
//! Whitespace delimited, one row per (epoch, satellite):
//! ```text
//! time sv L1 L2 C1 P2 L1lli L2lli
//! 2014-01-15T00:00:00 G01 110020464.178 85730243.637 20936094.387 20936092.957 0 0
//! ```
//! Epochs are GPST timestamps, missing lock indicators are written "nan".
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use gnss::prelude::SV;

use crate::{
    calendar::{gpst_timestamp, parse_gpst_timestamp},
    error::{Error, LoadingError},
    observation::{ObsKey, ObservationFrame, ObservationRow},
    paths::PathContext,
};

/// Column labels
pub const COLUMNS: [&str; 8] = ["time", "sv", "L1", "L2", "C1", "P2", "L1lli", "L2lli"];

const MISSING: &str = "nan";

fn format_lli(lli: Option<u8>) -> String {
    match lli {
        Some(lli) => lli.to_string(),
        None => MISSING.to_string(),
    }
}

fn parse_lli(content: &str, line_number: usize) -> Result<Option<u8>, LoadingError> {
    if content.eq_ignore_ascii_case(MISSING) {
        Ok(None)
    } else {
        let value = content
            .parse::<u8>()
            .map_err(|_| LoadingError::MalformedLine(line_number))?;
        Ok(Some(value))
    }
}

/// Writes [ObservationFrame] to given path
pub fn write(path: impl AsRef<Path>, frame: &ObservationFrame) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", COLUMNS.join(" "))?;
    for (key, row) in frame.iter() {
        writeln!(
            writer,
            "{} {} {} {} {} {} {} {}",
            gpst_timestamp(key.epoch),
            key.sv,
            row.l1,
            row.l2,
            row.c1,
            row.p2,
            format_lli(row.l1_lli),
            format_lli(row.l2_lli),
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_row(line: &str, line_number: usize) -> Result<(ObsKey, ObservationRow), LoadingError> {
    let items = line.split_whitespace().collect::<Vec<_>>();
    if items.len() != COLUMNS.len() {
        return Err(LoadingError::MalformedLine(line_number));
    }

    let epoch = parse_gpst_timestamp(items[0])
        .ok_or(LoadingError::EpochParsing(items[0].to_string()))?;

    let sv = SV::from_str(items[1]).map_err(|_| LoadingError::SvParsing(items[1].to_string()))?;

    let value = |content: &str| {
        content
            .parse::<f64>()
            .map_err(|_| LoadingError::MalformedLine(line_number))
    };

    let row = ObservationRow {
        l1: value(items[2])?,
        l2: value(items[3])?,
        c1: value(items[4])?,
        p2: value(items[5])?,
        l1_lli: parse_lli(items[6], line_number)?,
        l2_lli: parse_lli(items[7], line_number)?,
    };

    Ok((ObsKey { epoch, sv }, row))
}

/// Reads a file previously generated with [write]
pub fn read(path: impl AsRef<Path>) -> Result<ObservationFrame, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let header = lines.next().ok_or(LoadingError::EmptyRecord)??;
    if !header.split_whitespace().eq(COLUMNS.iter().copied()) {
        return Err(LoadingError::MalformedHeader(header).into());
    }

    let mut frame = ObservationFrame::default();
    for (i, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (key, row) = parse_row(&line, i + 2)?;
        frame.record.insert(key, row);
    }
    Ok(frame)
}

/// Reads the "all_process" observations of given station
pub fn read_all_processed(ctx: &PathContext, station: &str) -> Result<ObservationFrame, Error> {
    read(ctx.all_process_file(station))
}
