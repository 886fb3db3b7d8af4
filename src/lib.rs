#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

pub mod attributes;
pub mod batch;
pub mod calendar;
pub mod folders;
pub mod loader;
pub mod observables;
pub mod observation;
pub mod orbit;
pub mod paths;
pub mod prn;
pub mod processed;
pub mod production;
pub mod receiver;
pub mod spline;

mod error;

#[cfg(test)]
mod tests;

pub use error::{DomainError, Error, LoadingError};

/// Package to include all basic structures
pub mod prelude {
    pub use crate::attributes::{AttributeSummary, StationAttributes};
    pub use crate::batch::{run_for_all_files, BatchReport};
    pub use crate::calendar::{
        date_from_doy, date_from_gpsweek, day_and_month, days_in_year, doy_from_gpsweek,
        gpsweek_from_date, gpsweek_from_doy, CalendarDate, GpsWeek, GPS_EPOCH, YEARS,
    };
    pub use crate::folders::{create_directory, database_folders, delete_files, DirectoryStatus};
    pub use crate::loader::{FileLoader, Loader};
    pub use crate::observables::Observables;
    pub use crate::observation::{
        LliFlags, ObsKey, ObservationFrame, ObservationRow, ObservationTable, RawObservation,
        ReceiverHeader,
    };
    pub use crate::orbit::{OrbitHeader, OrbitKey, OrbitPositions, OrbitTable};
    pub use crate::paths::PathContext;
    pub use crate::prn::{format_prn, gps_and_glonass, prn_list};
    pub use crate::production::{
        tec_map_epoch, BiasProductAttributes, FileCategory, FilenameAttributes,
        OrbitProductAttributes, ParsingError, ReceiverObservationAttributes,
    };
    pub use crate::receiver::Receiver;
    pub use crate::spline::Spline;
    pub use crate::{DomainError, Error, LoadingError};
    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale, TimeSeries};
}
