/*
 * File naming conventions.
 * Every product stored in the database follows one of the three
 * naming conventions below, which allows to recover the production
 * date (and station or product name) from a bare filename:
 *
 *   1. RINEX-2 receiver observations: "ssssdddf.yyo"
 *   2. IGS SP3 orbit products: "cccwwwwd.sp3"
 *   3. MGEX bias products: "AAA0MGXRAP_YYYYDDDHHMM_01D_01D_DCB.BSX"
 */
use std::{path::Path, str::FromStr};

use thiserror::Error;

use crate::{calendar::CalendarDate, error::DomainError};

mod bias;
mod rinex;
mod sp3;
mod tec;

pub use bias::BiasProductAttributes;
pub use rinex::ReceiverObservationAttributes;
pub use sp3::OrbitProductAttributes;
pub use tec::tec_map_epoch;

/// Filename parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsingError {
    #[error("\"{0}\" does not follow any known naming convention")]
    NonStandardFilename(String),
    #[error("invalid year \"{0}\"")]
    Year(String),
    #[error("invalid day of year \"{0}\"")]
    DayOfYear(String),
    #[error("invalid gps week \"{0}\"")]
    GpsWeek(String),
    #[error("invalid gps day number \"{0}\"")]
    DayNumber(String),
    #[error("invalid TEC map date or time in \"{0}\"")]
    TecMap(String),
    #[error("invalid production date: {0}")]
    Date(#[from] DomainError),
}

/// Type of product, deduced from its name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// RINEX receiver observations
    ReceiverObservation,
    /// SP3 orbit product
    OrbitProduct,
    /// Differential code bias product
    BiasProduct,
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ReceiverObservation => write!(f, "receiver observation"),
            Self::OrbitProduct => write!(f, "orbit product"),
            Self::BiasProduct => write!(f, "bias product"),
        }
    }
}

/// Splits filename into (base name, extension), the extension
/// being the content between the first and second '.'
fn split_filename(fname: &str) -> Option<(&str, &str)> {
    let mut items = fname.split('.');
    let base = items.next()?;
    let extension = items.next()?;
    Some((base, extension))
}

impl FileCategory {
    /// Identifies the naming convention followed by given (bare) filename.
    /// ```
    /// use gnss_db::prelude::FileCategory;
    /// assert_eq!(FileCategory::classify("alar0141.14o"), Some(FileCategory::ReceiverObservation));
    /// assert_eq!(FileCategory::classify("igr17753.sp3"), Some(FileCategory::OrbitProduct));
    /// assert_eq!(FileCategory::classify("alar.txt"), None);
    /// ```
    pub fn classify(fname: &str) -> Option<Self> {
        let (base, extension) = split_filename(fname)?;
        if extension.ends_with('o') {
            Some(Self::ReceiverObservation)
        } else if extension == "sp3" {
            Some(Self::OrbitProduct)
        } else {
            let product = base.split('_').next()?;
            if product.contains("MGX") {
                Some(Self::BiasProduct)
            } else {
                None
            }
        }
    }
}

/// Production attributes recovered from a standardized filename.
#[derive(Debug, Clone, PartialEq)]
pub enum FilenameAttributes {
    ReceiverObservation(ReceiverObservationAttributes),
    OrbitProduct(OrbitProductAttributes),
    BiasProduct(BiasProductAttributes),
}

impl FromStr for FilenameAttributes {
    type Err = ParsingError;
    fn from_str(fname: &str) -> Result<Self, Self::Err> {
        let category = FileCategory::classify(fname)
            .ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        let (base, extension) =
            split_filename(fname).ok_or(ParsingError::NonStandardFilename(fname.to_string()))?;

        match category {
            FileCategory::ReceiverObservation => Ok(Self::ReceiverObservation(
                ReceiverObservationAttributes::parse(fname, base, extension)?,
            )),
            FileCategory::OrbitProduct => Ok(Self::OrbitProduct(OrbitProductAttributes::parse(
                fname, base,
            )?)),
            FileCategory::BiasProduct => Ok(Self::BiasProduct(BiasProductAttributes::parse(
                fname, base,
            )?)),
        }
    }
}

impl FilenameAttributes {
    /// Parses [FilenameAttributes] from the file name of given path
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParsingError> {
        let path = path.as_ref();
        let fname = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or(ParsingError::NonStandardFilename(
                path.to_string_lossy().to_string(),
            ))?;
        Self::from_str(&fname)
    }
    pub fn category(&self) -> FileCategory {
        match self {
            Self::ReceiverObservation(_) => FileCategory::ReceiverObservation,
            Self::OrbitProduct(_) => FileCategory::OrbitProduct,
            Self::BiasProduct(_) => FileCategory::BiasProduct,
        }
    }
    /// Station (observations), constellation (orbits) or product name (biases)
    pub fn code(&self) -> &str {
        match self {
            Self::ReceiverObservation(attrs) => &attrs.station,
            Self::OrbitProduct(attrs) => &attrs.constellation,
            Self::BiasProduct(attrs) => &attrs.product,
        }
    }
    pub fn year(&self) -> i32 {
        match self {
            Self::ReceiverObservation(attrs) => attrs.year,
            Self::OrbitProduct(attrs) => attrs.year,
            Self::BiasProduct(attrs) => attrs.year,
        }
    }
    /// Day of year
    pub fn doy(&self) -> u32 {
        match self {
            Self::ReceiverObservation(attrs) => attrs.doy,
            Self::OrbitProduct(attrs) => attrs.doy,
            Self::BiasProduct(attrs) => attrs.doy,
        }
    }
    pub fn date(&self) -> CalendarDate {
        match self {
            Self::ReceiverObservation(attrs) => attrs.date,
            Self::OrbitProduct(attrs) => attrs.date,
            Self::BiasProduct(attrs) => attrs.date,
        }
    }
}
