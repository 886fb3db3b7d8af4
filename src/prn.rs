//! Satellite (PRN) catalogs
use gnss::prelude::{Constellation, SV};

/// Number of GPS PRNs tracked by the database
pub const GPS_PRNS: u8 = 32;

/// Number of Glonass slots tracked by the database
pub const GLONASS_PRNS: u8 = 24;

/// Formats a satellite identifier, like "G01"
/// ```
/// use gnss_db::prelude::{format_prn, Constellation};
/// assert_eq!(format_prn(Constellation::GPS, 1), "G01");
/// assert_eq!(format_prn(Constellation::Glonass, 24), "R24");
/// ```
pub fn format_prn(constellation: Constellation, prn: u8) -> String {
    SV::new(constellation, prn).to_string()
}

/// Returns `count` satellites of given constellation, numbered from 1
pub fn prn_list(constellation: Constellation, count: u8) -> Vec<SV> {
    (1..=count)
        .map(|prn| SV::new(constellation, prn))
        .collect()
}

/// G01..G32 followed by R01..R24
pub fn gps_and_glonass() -> Vec<SV> {
    let mut list = prn_list(Constellation::GPS, GPS_PRNS);
    list.extend(prn_list(Constellation::Glonass, GLONASS_PRNS));
    list
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn catalogs() {
        let list = gps_and_glonass();
        assert_eq!(list.len(), 56);
        assert_eq!(list[0].to_string(), "G01");
        assert_eq!(list[31].to_string(), "G32");
        assert_eq!(list[32].to_string(), "R01");
        assert_eq!(list[55].to_string(), "R24");
        assert!(prn_list(Constellation::GPS, 0).is_empty());
    }
}
