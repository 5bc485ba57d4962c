//! Moon rise/set solver behaviour beyond the reference dataset.

extern crate std;
use crate::time::advance_by_hours;
use crate::{moon_position, moon_times, sun_times, GeoLocation, RiseSetPrecision};
use chrono::{DateTime, Days, TimeDelta, TimeZone, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Asia::Tokyo;
use proptest::prelude::*;
use std::format;

/// Apparent altitude of the Moon's centre at rise/set, radians.
const HORIZON: f64 = 0.133 * (core::f64::consts::PI / 180.0);

fn altitude_offset_from_horizon(location: &GeoLocation, instant: &DateTime<Utc>, minutes: f64) -> f64 {
    let at = advance_by_hours(instant, minutes / 60.0).unwrap();
    moon_position(location, &at).altitude - HORIZON
}

proptest! {
    #[test]
    fn moon_is_below_before_rise_and_above_after(
        timestamp in 946_684_800i64..=1_893_456_000i64,
        latitude in -50.0_f64..=50.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let location = GeoLocation::new(latitude, longitude);
        let date = Utc.timestamp_opt(timestamp, 0).single().unwrap();
        let times = moon_times(&location, &date, RiseSetPrecision::Exact).unwrap();

        if let Some(rise) = &times.rise {
            prop_assert!(altitude_offset_from_horizon(&location, rise, -20.0) < 0.0);
            prop_assert!(altitude_offset_from_horizon(&location, rise, 20.0) > 0.0);
        }
        if let Some(set) = &times.set {
            prop_assert!(altitude_offset_from_horizon(&location, set, -20.0) > 0.0);
            prop_assert!(altitude_offset_from_horizon(&location, set, 20.0) < 0.0);
        }
    }

    #[test]
    fn events_and_flags_are_exclusive(
        timestamp in 946_684_800i64..=1_893_456_000i64,
        latitude in -89.0_f64..=89.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let location = GeoLocation::new(latitude, longitude);
        let date = Utc.timestamp_opt(timestamp, 0).single().unwrap();
        let times = moon_times(&location, &date, RiseSetPrecision::Exact).unwrap();

        let midnight = date.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc();
        let next_midnight = midnight + TimeDelta::hours(24);
        for event in [&times.rise, &times.set].into_iter().flatten() {
            prop_assert!(midnight <= *event && *event <= next_midnight, "{} outside {}", event, midnight);
        }

        let found = times.rise.is_some() || times.set.is_some();
        prop_assert!(!(times.always_up && times.always_down));
        prop_assert_eq!(found, !(times.always_up || times.always_down));
    }
}

#[test]
fn high_arctic_moon_stays_up_then_down() {
    let location = GeoLocation::new(75.0, 0.0);
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    for offset in 6..=12 {
        let date = start + Days::new(offset);
        let times = moon_times(&location, &date, RiseSetPrecision::Exact).unwrap();
        assert!(times.always_up, "{date}: {times:?}");
    }
    for offset in 19..=25 {
        let date = start + Days::new(offset);
        let times = moon_times(&location, &date, RiseSetPrecision::Exact).unwrap();
        assert!(times.always_down, "{date}: {times:?}");
    }
}

#[test]
fn local_zone_shifts_the_scanned_day() {
    let location = GeoLocation::new(35.68, 139.69);
    let local = Tokyo.with_ymd_and_hms(2020, 9, 22, 15, 0, 0).unwrap();
    let times = moon_times(&location, &local, RiseSetPrecision::Exact).unwrap();
    let day_start = Tokyo.with_ymd_and_hms(2020, 9, 22, 0, 0, 0).unwrap();
    for event in [&times.rise, &times.set].into_iter().flatten() {
        assert_eq!(event.timezone(), Tokyo);
        assert!(*event >= day_start && *event <= day_start + TimeDelta::hours(24));
    }
}

#[test]
fn spring_forward_day_is_anchored_at_wall_clock_midnight() {
    let location = GeoLocation::new(40.71, -74.01);
    // 2020-03-08 skips 02:00-03:00 local time
    let before_shift = New_York.with_ymd_and_hms(2020, 3, 8, 0, 30, 0).unwrap();
    let after_shift = New_York.with_ymd_and_hms(2020, 3, 8, 15, 0, 0).unwrap();

    let early = moon_times(&location, &before_shift, RiseSetPrecision::Exact).unwrap();
    let late = moon_times(&location, &after_shift, RiseSetPrecision::Exact).unwrap();
    assert_eq!(early, late);

    let early_sun = sun_times(&location, &before_shift, 0.0).unwrap();
    let late_sun = sun_times(&location, &after_shift, 0.0).unwrap();
    assert_eq!(early_sun, late_sun);
    assert_eq!(late_sun.solar_noon.date_naive(), after_shift.date_naive());
}

#[test]
fn whole_hour_precision_truncates_exact_times() {
    let location = GeoLocation::new(50.5, 30.5);
    let date = Utc.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap();
    let exact = moon_times(&location, &date, RiseSetPrecision::Exact).unwrap();
    let coarse = moon_times(&location, &date, RiseSetPrecision::WholeHour).unwrap();
    let (exact_rise, coarse_rise) = (exact.rise.unwrap(), coarse.rise.unwrap());
    assert!(coarse_rise <= exact_rise);
    assert!(exact_rise - coarse_rise < TimeDelta::hours(1));
    assert_eq!(exact.always_up, coarse.always_up);
}
