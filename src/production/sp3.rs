//! IGS SP3 orbit product filenames: "cccwwwwd.sp3"
use super::ParsingError;
use crate::calendar::{date_from_gpsweek, CalendarDate};

/// Production attributes of SP3 orbit products
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitProductAttributes {
    /// 3 letter product (analysis center) code, like "igr"
    pub constellation: String,
    /// GPS week
    pub week: u32,
    /// Day number within the week, as encoded in the name
    pub day_number: u32,
    /// Year of production
    pub year: i32,
    /// Day of year of production
    pub doy: u32,
    /// Production date
    pub date: CalendarDate,
}

impl OrbitProductAttributes {
    pub(crate) fn parse(fname: &str, base: &str) -> Result<Self, ParsingError> {
        let constellation = base
            .get(..3)
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let week = base
            .get(3..7)
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let week = week
            .parse::<u32>()
            .map_err(|_| ParsingError::GpsWeek(week.to_string()))?;

        let day_number = base
            .get(7..)
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let day_number = day_number
            .parse::<u32>()
            .map_err(|_| ParsingError::DayNumber(day_number.to_string()))?;

        let date = date_from_gpsweek(week, day_number)?;

        Ok(Self {
            constellation: constellation.to_string(),
            week,
            day_number,
            year: date.year(),
            doy: date.day_of_year(),
            date,
        })
    }
}
