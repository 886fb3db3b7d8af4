//! Database layout: every path derives from a (year, day of year) context.
//!
//! ```text
//! root/database/
//!     orbit/{year}/{const}/{const}{week}{day_number}.sp3
//!     geo/{year}.txt
//!     rinex/{year}/{doy}/{station}{doy}1.{yy}o
//!     process/{year}/{doy}/{station}.txt
//!     all_process/{year}/{doy}/{station}.txt
//!     roti/{year}/{doy}.txt
//!     dcb/{year}/CAS0MGXRAP_{year}{doy}0000_01D_01D_DCB.BSX
//!     json/{year}/{doy}.json
//!     prns/{year}/{doy}.txt
//! ```
use std::path::{Path, PathBuf};

use crate::{
    calendar::{date_from_doy, days_in_year, gpsweek_from_date, CalendarDate, GpsWeek},
    error::DomainError,
};

/// Name of the database folder, within the root directory
pub const DATABASE: &str = "database";

/// [PathContext] resolves all paths of the database for one day.
/// Path resolution never accesses the file system.
#[derive(Debug, Clone, PartialEq)]
pub struct PathContext {
    root: PathBuf,
    year: i32,
    doy: u32,
    date: CalendarDate,
    gps_week: GpsWeek,
}

impl PathContext {
    /// Builds a new [PathContext] for given day, within `root` directory.
    /// ```
    /// use gnss_db::prelude::PathContext;
    /// use std::path::Path;
    ///
    /// let ctx = PathContext::new(2014, 15, "/data")
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     ctx.rinex_file("alar"),
    ///     Path::new("/data/database/rinex/2014/015/alar0151.14o"),
    /// );
    /// ```
    pub fn new(year: i32, doy: u32, root: impl AsRef<Path>) -> Result<Self, DomainError> {
        if doy == 0 || doy > days_in_year(year)? {
            return Err(DomainError::DayOfYear { year, doy });
        }
        let date = date_from_doy(year, doy)?;
        let gps_week = gpsweek_from_date(&date)?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            year,
            doy,
            date,
            gps_week,
        })
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn year(&self) -> i32 {
        self.year
    }
    /// Day of year
    pub fn doy(&self) -> u32 {
        self.doy
    }
    pub fn date(&self) -> CalendarDate {
        self.date
    }
    pub fn gps_week(&self) -> GpsWeek {
        self.gps_week
    }
    /// Zero padded, 3 digit day of year
    pub fn doy_str(&self) -> String {
        format!("{:03}", self.doy)
    }
    /// Last two digits of the year
    pub fn year_suffix(&self) -> String {
        format!("{:02}", self.year.rem_euclid(100))
    }
    /// RINEX observation files extension, like "14o"
    pub fn rinex_extension(&self) -> String {
        format!("{}o", self.year_suffix())
    }
    /// Database base directory
    pub fn database(&self) -> PathBuf {
        self.root.join(DATABASE)
    }
    fn yearly(&self, folder: &str) -> PathBuf {
        self.database().join(folder).join(self.year.to_string())
    }
    fn daily(&self, folder: &str) -> PathBuf {
        self.yearly(folder).join(self.doy_str())
    }
    /// Orbit products directory, for given product code
    pub fn orbit(&self, constellation: &str) -> PathBuf {
        self.yearly("orbit").join(constellation)
    }
    /// SP3 product file, named after the GPS week
    pub fn orbit_file(&self, constellation: &str) -> PathBuf {
        self.orbit(constellation)
            .join(format!("{}{}.sp3", constellation, self.gps_week))
    }
    /// Yearly station coordinates file
    pub fn geo(&self) -> PathBuf {
        self.database()
            .join("geo")
            .join(format!("{}.txt", self.year))
    }
    /// Daily RINEX observations directory
    pub fn rinex(&self) -> PathBuf {
        self.daily("rinex")
    }
    /// RINEX observation file of given station
    pub fn rinex_file(&self, station: &str) -> PathBuf {
        self.rinex().join(format!(
            "{}{}1.{}",
            station,
            self.doy_str(),
            self.rinex_extension()
        ))
    }
    /// Daily processed observations directory
    pub fn process(&self) -> PathBuf {
        self.daily("process")
    }
    /// Processed observations of given station
    pub fn process_file(&self, station: &str) -> PathBuf {
        self.process().join(format!("{}.txt", station))
    }
    pub fn all_process(&self) -> PathBuf {
        self.daily("all_process")
    }
    pub fn all_process_file(&self, station: &str) -> PathBuf {
        self.all_process().join(format!("{}.txt", station))
    }
    /// Yearly ROTI directory
    pub fn roti(&self) -> PathBuf {
        self.yearly("roti")
    }
    pub fn roti_file(&self) -> PathBuf {
        self.roti().join(format!("{}.txt", self.doy_str()))
    }
    /// Yearly DCB products directory
    pub fn dcb(&self) -> PathBuf {
        self.yearly("dcb")
    }
    /// MGEX DCB product file
    pub fn dcb_file(&self) -> PathBuf {
        self.dcb().join(format!(
            "CAS0MGXRAP_{}{}0000_01D_01D_DCB.BSX",
            self.year,
            self.doy_str()
        ))
    }
    /// Yearly attributes summary directory
    pub fn json(&self) -> PathBuf {
        self.yearly("json")
    }
    /// Daily attributes summary
    pub fn json_file(&self) -> PathBuf {
        self.json().join(format!("{}.json", self.doy_str()))
    }
    pub fn prns_file(&self) -> PathBuf {
        self.yearly("prns").join(format!("{}.txt", self.doy_str()))
    }
}
