//! RINEX-2 (short) observation filenames: "ssssdddf.yyo"
use super::ParsingError;
use crate::calendar::{date_from_doy, CalendarDate};

/// Production attributes of RINEX receiver observations
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverObservationAttributes {
    /// 4 letter station code
    pub station: String,
    /// Year of production
    pub year: i32,
    /// Day of year of production
    pub doy: u32,
    /// Production date
    pub date: CalendarDate,
}

/// Converts 2 digit year to full year.
/// Only 99 maps to the 20th century.
pub(crate) fn full_year(yy: u32) -> i32 {
    if yy < 99 {
        2_000 + yy as i32
    } else {
        1_900 + yy as i32
    }
}

impl ReceiverObservationAttributes {
    pub(crate) fn parse(fname: &str, base: &str, extension: &str) -> Result<Self, ParsingError> {
        let station = base
            .get(..4)
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let doy = base
            .get(4..7)
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let doy = doy
            .parse::<u32>()
            .map_err(|_| ParsingError::DayOfYear(doy.to_string()))?;

        let yy = extension
            .get(..2)
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let yy = yy
            .parse::<u32>()
            .map_err(|_| ParsingError::Year(yy.to_string()))?;

        let year = full_year(yy);

        Ok(Self {
            station: station.to_string(),
            year,
            doy,
            date: date_from_doy(year, doy)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::full_year;
    use crate::production::FilenameAttributes;
    use std::str::FromStr;
    #[test]
    fn two_digit_years() {
        for (yy, year) in [
            (0, 2000),
            (14, 2014),
            (80, 2080),
            (97, 2097),
            (98, 2098),
            (99, 1999),
        ] {
            assert_eq!(full_year(yy), year, "yy={}", yy);
        }
    }
    #[test]
    fn observation_filenames() {
        for (fname, station, year, doy, date) in [
            ("alar0141.14o", "alar", 2014, 14, "2014-01-14"),
            ("alar0151.14o", "alar", 2014, 15, "2014-01-15"),
            ("bair3650.15o", "bair", 2015, 365, "2015-12-31"),
            ("rovn0010.21o", "rovn", 2021, 1, "2021-01-01"),
            ("pdel0010.99o", "pdel", 1999, 1, "1999-01-01"),
            ("pdel0010.98o", "pdel", 2098, 1, "2098-01-01"),
        ] {
            let attrs = FilenameAttributes::from_str(fname).unwrap();
            match attrs {
                FilenameAttributes::ReceiverObservation(ref obs) => {
                    assert_eq!(obs.station, station);
                },
                _ => panic!("\"{}\" identified as {}", fname, attrs.category()),
            }
            assert_eq!(attrs.code(), station);
            assert_eq!(attrs.year(), year);
            assert_eq!(attrs.doy(), doy);
            assert_eq!(attrs.date().to_string(), date);
        }
    }
    #[test]
    fn malformed_observation_filenames() {
        for fname in ["alarxyz1.14o", "alar0141.x4o", "alar01.14o", "alar0141.o"] {
            assert!(FilenameAttributes::from_str(fname).is_err(), "{}", fname);
        }
    }
}
