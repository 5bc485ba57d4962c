#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]
extern crate std;
mod moon_times_tests;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use std::string::String;

use crate::{GeoLocation, MoonTimes, RiseSetPrecision, SunCalc, SunEvent, SunTimeKind};

/// Largest difference between computed and recorded instants, in milliseconds.
const TOLERANCE_MS: i64 = 1_000;

fn parse_instant(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value).unwrap().to_utc()
}

fn assert_close(row: usize, what: &str, got: &DateTime<Utc>, expected: &DateTime<Utc>) {
    let diff: TimeDelta = (*got - *expected).abs();
    assert!(
        diff.num_milliseconds() <= TOLERANCE_MS,
        "Row {row}: {what} mismatch\n  Expected: {expected}\n  Got: {got}\n  Diff: {} ms",
        diff.num_milliseconds()
    );
}

#[derive(Debug, Deserialize, Clone)]
struct SunTimesRecord {
    latitude: f64,
    longitude: f64,
    height: f64,
    date: String,
    solar_noon: String,
    nadir: String,
    sunrise: Option<String>,
    sunset: Option<String>,
    sunrise_end: Option<String>,
    sunset_start: Option<String>,
    dawn: Option<String>,
    dusk: Option<String>,
    nautical_dawn: Option<String>,
    nautical_dusk: Option<String>,
    night_end: Option<String>,
    night: Option<String>,
    golden_hour_end: Option<String>,
    golden_hour: Option<String>,
}

impl SunTimesRecord {
    fn crossing(&self, kind: SunTimeKind) -> Option<&String> {
        match kind {
            SunTimeKind::Sunrise => self.sunrise.as_ref(),
            SunTimeKind::Sunset => self.sunset.as_ref(),
            SunTimeKind::SunriseEnd => self.sunrise_end.as_ref(),
            SunTimeKind::SunsetStart => self.sunset_start.as_ref(),
            SunTimeKind::Dawn => self.dawn.as_ref(),
            SunTimeKind::Dusk => self.dusk.as_ref(),
            SunTimeKind::NauticalDawn => self.nautical_dawn.as_ref(),
            SunTimeKind::NauticalDusk => self.nautical_dusk.as_ref(),
            SunTimeKind::NightEnd => self.night_end.as_ref(),
            SunTimeKind::Night => self.night.as_ref(),
            SunTimeKind::GoldenHourEnd => self.golden_hour_end.as_ref(),
            SunTimeKind::GoldenHour => self.golden_hour.as_ref(),
            SunTimeKind::SolarNoon => Some(&self.solar_noon),
            SunTimeKind::Nadir => Some(&self.nadir),
        }
    }
}

/// Sun times against a dataset of known values. Each `date` is a UTC midnight;
/// the query is issued at a later hour of the same day to exercise the
/// calendar-day anchoring.
#[test]
fn test_sun_times_dataset() {
    let csv_path = concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/sun_times.csv");
    let mut rdr = csv::Reader::from_path(csv_path).expect("Failed to open CSV file");

    let mut rows = 0;
    for (idx, result) in rdr.deserialize().enumerate() {
        let record: SunTimesRecord = result.expect("Failed to deserialize CSV record");
        let row = idx + 2;
        rows += 1;

        let date = parse_instant(&record.date) + TimeDelta::hours(17);
        let times = SunCalc::new(record.latitude, record.longitude, date)
            .with_height(record.height)
            .sun_times()
            .unwrap();

        assert_eq!(
            times.solar_noon.date_naive(),
            date.date_naive(),
            "Row {row}: solar noon should fall on the query date"
        );

        for kind in SunTimeKind::ALL {
            let event = times.event(kind);
            match (record.crossing(kind), &event) {
                (Some(expected), SunEvent::Occurs(got)) => {
                    assert_close(row, kind.name(), got, &parse_instant(expected));
                }
                (None, SunEvent::AlwaysAbove | SunEvent::AlwaysBelow) => {}
                (expected, got) => panic!("Row {row}: {} expected {expected:?}, got {got:?}", kind.name()),
            }
        }
    }
    assert_eq!(rows, 45);
}

#[derive(Debug, Deserialize, Clone)]
struct MoonTimesRecord {
    latitude: f64,
    longitude: f64,
    date: String,
    rise: Option<String>,
    set: Option<String>,
    always_up: bool,
    always_down: bool,
}

fn assert_moon_event(row: usize, what: &str, got: &Option<DateTime<Utc>>, expected: &Option<String>) {
    match (got, expected) {
        (Some(got), Some(expected)) => assert_close(row, what, got, &parse_instant(expected)),
        (None, None) => {}
        (got, expected) => panic!("Row {row}: moon {what} expected {expected:?}, got {got:?}"),
    }
}

#[test]
fn test_moon_times_dataset() {
    let csv_path = concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/moon_times.csv");
    let mut rdr = csv::Reader::from_path(csv_path).expect("Failed to open CSV file");

    let mut flagged = 0;
    for (idx, result) in rdr.deserialize().enumerate() {
        let record: MoonTimesRecord = result.expect("Failed to deserialize CSV record");
        let row = idx + 2;

        let location = GeoLocation::new(record.latitude, record.longitude);
        let date = parse_instant(&record.date);
        let times: MoonTimes<Utc> = crate::moon_times(&location, &date, RiseSetPrecision::Exact).unwrap();

        assert_moon_event(row, "rise", &times.rise, &record.rise);
        assert_moon_event(row, "set", &times.set, &record.set);
        assert_eq!(times.always_up, record.always_up, "Row {row}: always_up");
        assert_eq!(times.always_down, record.always_down, "Row {row}: always_down");
        if times.always_up || times.always_down {
            flagged += 1;
        }
    }
    assert!(flagged > 0, "dataset should cover a day without moon crossings");
}
