//! EMBRACE TEC map filenames: "TECMAP_YYYYMMDD_HHMM.txt"
use hifitime::Epoch;

use super::ParsingError;

fn parse_u8(content: Option<&str>, fname: &str) -> Result<u8, ParsingError> {
    content
        .and_then(|c| c.parse::<u8>().ok())
        .ok_or(ParsingError::TecMap(fname.to_string()))
}

/// Returns the (UTC) [Epoch] of a TEC map, from its filename.
/// ```
/// use gnss_db::prelude::{tec_map_epoch, Epoch};
/// use std::str::FromStr;
/// let t = tec_map_epoch("TECMAP_20140115_1230.txt").unwrap();
/// assert_eq!(t, Epoch::from_str("2014-01-15T12:30:00 UTC").unwrap());
/// ```
pub fn tec_map_epoch(fname: &str) -> Result<Epoch, ParsingError> {
    let items = fname.split('_').collect::<Vec<_>>();
    if items.len() < 3 {
        return Err(ParsingError::TecMap(fname.to_string()));
    }

    let date = items[1];
    let year = date
        .get(..4)
        .and_then(|y| y.parse::<i32>().ok())
        .ok_or(ParsingError::TecMap(fname.to_string()))?;

    let month = parse_u8(date.get(4..6), fname)?;
    let day = parse_u8(date.get(6..8), fname)?;

    let time = items[items.len() - 1].trim_end_matches(".txt");
    let hours = parse_u8(time.get(..2), fname)?;
    let minutes = parse_u8(time.get(2..4), fname)?;

    Epoch::maybe_from_gregorian_utc(year, month, day, hours, minutes, 0, 0)
        .map_err(|_| ParsingError::TecMap(fname.to_string()))
}
