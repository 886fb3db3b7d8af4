use thiserror::Error;

use crate::{calendar::CalendarDate, production::ParsingError};

use gnss::prelude::SV;

/// Calendar, GPS week and numerical domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// GPS week counting starts on 1980-01-06
    #[error("{0} precedes the GPS epoch (1980-01-06)")]
    BeforeGpsEpoch(CalendarDate),
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },
    #[error("year {0} is not within the supported range (1..=9999)")]
    YearRange(i32),
    #[error("{date} offset by {days} days is not within the supported range")]
    DayOffset { date: CalendarDate, days: i64 },
    #[error("day of year {doy} is not within year {year}")]
    DayOfYear { year: i32, doy: u32 },
    #[error("degree {degree} spline requires at least {required} samples, got {found}")]
    NotEnoughSamples {
        degree: usize,
        required: usize,
        found: usize,
    },
    #[error("interpolation step must be strictly positive")]
    InvalidStep,
    #[error("{0} is not described in this dataset")]
    NoSuchSatellite(SV),
    #[error("spline collocation system is singular")]
    SingularSystem,
}

/// Errors raised while decoding (loading) data files
#[derive(Error, Debug)]
pub enum LoadingError {
    #[error("missing \"{0}\" header field")]
    MissingHeaderField(&'static str),
    #[error("not an observation RINEX")]
    NotObservationRinex,
    #[error("non supported RINEX revision \"{0}\"")]
    NonSupportedRevision(String),
    #[error("\"{0}\" observable is not described in header")]
    MissingObservable(&'static str),
    #[error("malformed header line \"{0}\"")]
    MalformedHeader(String),
    #[error("failed to parse epoch from \"{0}\"")]
    EpochParsing(String),
    #[error("failed to parse sv from \"{0}\"")]
    SvParsing(String),
    #[error("file does not contain any data")]
    EmptyRecord,
    #[error("malformed line #{0}")]
    MalformedLine(usize),
    #[error("non supported compression (gzip requires the flate2 feature)")]
    CompressionNotSupported,
    #[error("rinex: {0}")]
    Rinex(#[from] rinex::prelude::ParsingError),
    #[error("sp3: {0}")]
    Sp3(#[from] sp3::prelude::Error),
}

/// [Error] is the error type of every fallible operation of this crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("filename error: {0}")]
    Parsing(#[from] ParsingError),
    #[error("loading error: {0}")]
    Loading(#[from] LoadingError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
