#[cfg(test)]
mod test {
    use crate::prelude::*;
    #[test]
    fn doy_gps_week_round_trip() {
        for year in 1980..=2040 {
            for doy in 1..=days_in_year(year).unwrap() {
                let date = date_from_doy(year, doy).unwrap();
                if date < GPS_EPOCH {
                    assert!(gpsweek_from_date(&date).is_err());
                    continue;
                }
                assert_eq!(date.day_of_year(), doy);
                let gps_week = gpsweek_from_date(&date).unwrap();
                assert_eq!(
                    doy_from_gpsweek(gps_week.week, u32::from(gps_week.day_number)),
                    Ok((year, doy)),
                    "{} (doy={})",
                    date,
                    doy
                );
                assert_eq!(gps_week.to_date(), Ok(date));
            }
        }
    }
    #[test]
    fn gps_week_date_round_trip() {
        for week in (0..2500).step_by(7) {
            for day_number in 0..7 {
                let date = date_from_gpsweek(week, day_number).unwrap();
                let gps_week = gpsweek_from_date(&date).unwrap();
                assert_eq!(gps_week.week, week);
                assert_eq!(u32::from(gps_week.day_number), day_number);
            }
        }
    }
    #[test]
    fn gps_epoch() {
        assert_eq!(GPS_EPOCH.to_string(), "1980-01-06");
        assert_eq!(
            gpsweek_from_date(&GPS_EPOCH).unwrap(),
            GpsWeek {
                week: 0,
                day_number: 0
            }
        );
        let before = CalendarDate::new(1980, 1, 5).unwrap();
        assert!(matches!(
            gpsweek_from_date(&before),
            Err(DomainError::BeforeGpsEpoch(_))
        ));
    }
}
