//! Calendar date, day of year (DOY) and GPS week conversions.
//!
//! Every GNSS product of the database is named after either
//! a (year, DOY) pair or a (GPS week, day number) pair.
//! This module converts between both representations and
//! the civil (Gregorian) calendar.
use hifitime::{Duration, Epoch, TimeScale};
use std::{ops::RangeInclusive, str::FromStr};

use crate::error::DomainError;

const SECONDS_PER_DAY: f64 = 86_400.0;

const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// Years a [CalendarDate] may describe
pub const YEARS: RangeInclusive<i32> = 1..=9999;

// Wider than any offset between two dates of [YEARS]
const MAX_DAY_OFFSET: u64 = 366 * 10_000;

/// GPS week counting origin: 1980-01-06
pub const GPS_EPOCH: CalendarDate = CalendarDate {
    year: 1980,
    month: 1,
    day: 6,
};

/// [CalendarDate] is a valid Gregorian date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl CalendarDate {
    /// Builds a new [CalendarDate], verifying it exists.
    /// ```
    /// use gnss_db::prelude::CalendarDate;
    /// assert!(CalendarDate::new(2016, 2, 29).is_ok());
    /// assert!(CalendarDate::new(2014, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        check_year(year)?;
        Epoch::maybe_from_gregorian_utc(year, month, day, 12, 0, 0, 0)
            .map_err(|_| DomainError::InvalidDate { year, month, day })?;
        Ok(Self { year, month, day })
    }
    /// January 1st of given year
    pub fn first_day_of(year: i32) -> Result<Self, DomainError> {
        check_year(year)?;
        Ok(Self {
            year,
            month: 1,
            day: 1,
        })
    }
    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u8 {
        self.month
    }
    pub fn day(&self) -> u8 {
        self.day
    }
    /// Returns the day of year of this date, starting at 1.
    pub fn day_of_year(&self) -> u32 {
        let january_1st = Self {
            year: self.year,
            month: 1,
            day: 1,
        };
        self.days_since(&january_1st) as u32 + 1
    }
    /// Returns a new [CalendarDate] offset by signed number of days.
    /// Fails if the resulting date is not within [YEARS].
    /// ```
    /// use gnss_db::prelude::CalendarDate;
    /// let date = CalendarDate::new(2014, 12, 31).unwrap();
    /// assert_eq!(date.add_days(1).unwrap().to_string(), "2015-01-01");
    /// assert!(date.add_days(i64::MAX).is_err());
    /// ```
    pub fn add_days(&self, days: i64) -> Result<Self, DomainError> {
        let out_of_range = DomainError::DayOffset { date: *self, days };
        if days.unsigned_abs() > MAX_DAY_OFFSET {
            return Err(out_of_range);
        }
        let date = self.shift(days);
        if YEARS.contains(&date.year) {
            Ok(date)
        } else {
            Err(out_of_range)
        }
    }
    /// Returns the signed number of days elapsed from `rhs` to `self`.
    pub fn days_since(&self, rhs: &Self) -> i64 {
        ((self.noon() - rhs.noon()).to_seconds() / SECONDS_PER_DAY).round() as i64
    }
    /// Converts this date to [GpsWeek].
    pub fn gps_week(&self) -> Result<GpsWeek, DomainError> {
        gpsweek_from_date(self)
    }
    // Dates are anchored at noon UTC: leap seconds never roll the civil date.
    fn noon(&self) -> Epoch {
        Epoch::from_gregorian_utc(self.year, self.month, self.day, 12, 0, 0, 0)
    }
    fn from_noon(t: Epoch) -> Self {
        let (year, month, day, _, _, _, _) = t.to_gregorian_utc();
        Self { year, month, day }
    }
    // Offset must not exceed the [Epoch] span
    fn shift(&self, days: i64) -> Self {
        Self::from_noon(self.noon() + Duration::from_days(days as f64))
    }
}

fn check_year(year: i32) -> Result<(), DomainError> {
    if YEARS.contains(&year) {
        Ok(())
    } else {
        Err(DomainError::YearRange(year))
    }
}

/// GPS week counter and day number within that week (0 = Sunday).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GpsWeek {
    /// Weeks elapsed since [GPS_EPOCH]
    pub week: u32,
    /// Day number within the week, 0..=6
    pub day_number: u8,
}

impl std::fmt::Display for GpsWeek {
    /// Formats as concatenated WWWWD, as used in product names
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.week, self.day_number)
    }
}

impl GpsWeek {
    /// Builds [GpsWeek] from number of days elapsed since [GPS_EPOCH]
    pub fn from_days(days: u64) -> Self {
        Self {
            week: (days / 7) as u32,
            day_number: (days % 7) as u8,
        }
    }
    /// Number of days elapsed since [GPS_EPOCH]
    pub fn days(&self) -> u64 {
        u64::from(self.week) * 7 + u64::from(self.day_number)
    }
    /// Converts back to [CalendarDate]
    pub fn to_date(&self) -> Result<CalendarDate, DomainError> {
        date_from_gpsweek(self.week, u32::from(self.day_number))
    }
}

/// Returns total number of days in given year.
/// Fails for years outside of [YEARS].
pub fn days_in_year(year: i32) -> Result<u32, DomainError> {
    check_year(year)?;
    let december_31st = CalendarDate {
        year,
        month: 12,
        day: 31,
    };
    Ok(december_31st.day_of_year())
}

/// Returns [CalendarDate] from year and day of year.
/// DOY=1 is January 1st. A DOY past the end of the year
/// rolls into the following year.
/// ```
/// use gnss_db::prelude::date_from_doy;
/// let date = date_from_doy(2014, 15).unwrap();
/// assert_eq!(date.to_string(), "2014-01-15");
/// // rolls over
/// assert_eq!(date_from_doy(2014, 366).unwrap().to_string(), "2015-01-01");
/// // but never past year 9999
/// assert!(date_from_doy(2014, u32::MAX).is_err());
/// ```
pub fn date_from_doy(year: i32, doy: u32) -> Result<CalendarDate, DomainError> {
    CalendarDate::first_day_of(year)?.add_days(i64::from(doy) - 1)
}

/// Returns (month, day) from year and day of year
pub fn day_and_month(year: i32, doy: u32) -> Result<(u8, u8), DomainError> {
    let date = date_from_doy(year, doy)?;
    Ok((date.month, date.day))
}

/// Converts [CalendarDate] to [GpsWeek].
/// Fails for dates preceding the [GPS_EPOCH].
pub fn gpsweek_from_date(date: &CalendarDate) -> Result<GpsWeek, DomainError> {
    let days = date.days_since(&GPS_EPOCH);
    if days < 0 {
        return Err(DomainError::BeforeGpsEpoch(*date));
    }
    Ok(GpsWeek::from_days(days as u64))
}

/// Converts (year, DOY) to [GpsWeek]
pub fn gpsweek_from_doy(year: i32, doy: u32) -> Result<GpsWeek, DomainError> {
    gpsweek_from_date(&date_from_doy(year, doy)?)
}

/// Returns [CalendarDate] from GPS week and day number.
/// Day numbers past 6 roll into the following weeks.
pub fn date_from_gpsweek(week: u32, day_number: u32) -> Result<CalendarDate, DomainError> {
    GPS_EPOCH.add_days(i64::from(week) * 7 + i64::from(day_number))
}

/// Returns (year, DOY) from GPS week and day number
/// ```
/// use gnss_db::prelude::doy_from_gpsweek;
/// assert_eq!(doy_from_gpsweek(1775, 3), Ok((2014, 15)));
/// ```
pub fn doy_from_gpsweek(week: u32, day_number: u32) -> Result<(i32, u32), DomainError> {
    let date = date_from_gpsweek(week, day_number)?;
    Ok((date.year, date.day_of_year()))
}

/// Formats [Epoch] as GPST timestamp "YYYY-MM-DDTHH:MM:SS[.mmm]"
/// (millisecond resolution, no whitespace).
pub(crate) fn gpst_timestamp(t: Epoch) -> String {
    let millis = (t.to_gpst_seconds() * 1.0E3).round() as i64;
    let date = GPS_EPOCH.shift(millis.div_euclid(MILLISECONDS_PER_DAY));
    let millis = millis.rem_euclid(MILLISECONDS_PER_DAY);

    let (hh, mm) = (millis / 3_600_000, (millis / 60_000) % 60);
    let (ss, ms) = ((millis / 1_000) % 60, millis % 1_000);

    if ms == 0 {
        format!("{}T{:02}:{:02}:{:02}", date, hh, mm, ss)
    } else {
        format!("{}T{:02}:{:02}:{:02}.{:03}", date, hh, mm, ss, ms)
    }
}

/// Describes [TimeScale] with the 3 letter time system
/// descriptor used in RINEX headers
pub(crate) fn time_system(ts: TimeScale) -> &'static str {
    match ts {
        TimeScale::GST => "GAL",
        TimeScale::BDT => "BDT",
        TimeScale::UTC => "UTC",
        TimeScale::TAI => "TAI",
        _ => "GPS",
    }
}

/// Parses a timestamp formatted by [gpst_timestamp]
pub(crate) fn parse_gpst_timestamp(content: &str) -> Option<Epoch> {
    Epoch::from_str(&format!("{} GPST", content.trim())).ok()
}
