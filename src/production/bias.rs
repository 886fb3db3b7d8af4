//! MGEX bias products: "AAA0MGXRAP_YYYYDDDHHMM_01D_01D_DCB.BSX"
use super::ParsingError;
use crate::calendar::{date_from_doy, CalendarDate};

/// Production attributes of (MGEX) bias products
#[derive(Debug, Clone, PartialEq)]
pub struct BiasProductAttributes {
    /// Product name, like "CAS0MGXRAP"
    pub product: String,
    /// Year of production
    pub year: i32,
    /// Day of year of production
    pub doy: u32,
    /// Production date
    pub date: CalendarDate,
}

impl BiasProductAttributes {
    pub(crate) fn parse(fname: &str, base: &str) -> Result<Self, ParsingError> {
        let mut items = base.split('_');

        let product = items
            .next()
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let datetime = items
            .next()
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let year = datetime
            .get(..4)
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let year = year
            .parse::<i32>()
            .map_err(|_| ParsingError::Year(year.to_string()))?;

        let doy = datetime
            .get(4..7)
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let doy = doy
            .parse::<u32>()
            .map_err(|_| ParsingError::DayOfYear(doy.to_string()))?;

        Ok(Self {
            product: product.to_string(),
            year,
            doy,
            date: date_from_doy(year, doy)?,
        })
    }
}
