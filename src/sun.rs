use chrono::{DateTime, TimeZone};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::debug;

use core::f64::consts::TAU;

use crate::coords::{
    declination, ecliptic_longitude, horizontal_coords, hour_angle, solar_mean_anomaly, sun_equatorial_coords,
};
use crate::time::{advance_by_hours, from_day_count, start_of_local_day, to_day_count};
use crate::types::{CalculationError, GeoLocation, SunPosition};

/// Fractional-day correction between mean solar transit and the J2000 day count.
const J0: f64 = 0.0009;

/// Result of a sun threshold crossing for one day (sunrise, dusk, golden hour, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(bound(serialize = "")))]
pub enum SunEvent<Tz: TimeZone> {
    /// The Sun crosses the threshold at this instant.
    Occurs(DateTime<Tz>),
    /// The Sun stays above the threshold all day (e.g. midnight sun).
    AlwaysAbove,
    /// The Sun never reaches the threshold (e.g. polar night).
    AlwaysBelow,
}

impl<Tz: TimeZone> SunEvent<Tz> {
    /// The crossing instant, or `None` if the threshold is not crossed that day.
    pub fn instant(&self) -> Option<&DateTime<Tz>> {
        match self {
            SunEvent::Occurs(instant) => Some(instant),
            _ => None,
        }
    }

    pub fn into_instant(self) -> Option<DateTime<Tz>> {
        match self {
            SunEvent::Occurs(instant) => Some(instant),
            _ => None,
        }
    }

    pub fn occurs(&self) -> bool {
        matches!(self, SunEvent::Occurs(_))
    }
}

/// The fourteen named instants of a solar day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum SunTimeKind {
    Dawn,
    Sunrise,
    SunriseEnd,
    GoldenHourEnd,
    SolarNoon,
    GoldenHour,
    SunsetStart,
    Sunset,
    Dusk,
    NauticalDawn,
    NauticalDusk,
    Night,
    Nadir,
    NightEnd,
}

impl SunTimeKind {
    pub const ALL: [SunTimeKind; 14] = [
        SunTimeKind::Dawn,
        SunTimeKind::Sunrise,
        SunTimeKind::SunriseEnd,
        SunTimeKind::GoldenHourEnd,
        SunTimeKind::SolarNoon,
        SunTimeKind::GoldenHour,
        SunTimeKind::SunsetStart,
        SunTimeKind::Sunset,
        SunTimeKind::Dusk,
        SunTimeKind::NauticalDawn,
        SunTimeKind::NauticalDusk,
        SunTimeKind::Night,
        SunTimeKind::Nadir,
        SunTimeKind::NightEnd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SunTimeKind::Dawn => "dawn",
            SunTimeKind::Sunrise => "sunrise",
            SunTimeKind::SunriseEnd => "sunrise_end",
            SunTimeKind::GoldenHourEnd => "golden_hour_end",
            SunTimeKind::SolarNoon => "solar_noon",
            SunTimeKind::GoldenHour => "golden_hour",
            SunTimeKind::SunsetStart => "sunset_start",
            SunTimeKind::Sunset => "sunset",
            SunTimeKind::Dusk => "dusk",
            SunTimeKind::NauticalDawn => "nautical_dawn",
            SunTimeKind::NauticalDusk => "nautical_dusk",
            SunTimeKind::Night => "night",
            SunTimeKind::Nadir => "nadir",
            SunTimeKind::NightEnd => "night_end",
        }
    }
}

/// Sun altitude thresholds in degrees with their morning and evening names.
pub const SUN_THRESHOLDS: [(f64, SunTimeKind, SunTimeKind); 6] = [
    (-0.833, SunTimeKind::Sunrise, SunTimeKind::Sunset),
    (-0.3, SunTimeKind::SunriseEnd, SunTimeKind::SunsetStart),
    (-6.0, SunTimeKind::Dawn, SunTimeKind::Dusk),
    (-12.0, SunTimeKind::NauticalDawn, SunTimeKind::NauticalDusk),
    (-18.0, SunTimeKind::NightEnd, SunTimeKind::Night),
    (6.0, SunTimeKind::GoldenHourEnd, SunTimeKind::GoldenHour),
];

/// Sun times for one calendar day at one location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(bound(serialize = "")))]
pub struct SunTimes<Tz: TimeZone> {
    pub dawn: SunEvent<Tz>,
    pub sunrise: SunEvent<Tz>,
    pub sunrise_end: SunEvent<Tz>,
    pub golden_hour_end: SunEvent<Tz>,
    pub solar_noon: DateTime<Tz>,
    pub golden_hour: SunEvent<Tz>,
    pub sunset_start: SunEvent<Tz>,
    pub sunset: SunEvent<Tz>,
    pub dusk: SunEvent<Tz>,
    pub nautical_dawn: SunEvent<Tz>,
    pub nautical_dusk: SunEvent<Tz>,
    pub night: SunEvent<Tz>,
    pub nadir: DateTime<Tz>,
    pub night_end: SunEvent<Tz>,
}

impl<Tz: TimeZone> SunTimes<Tz> {
    /// Looks up one named instant. Solar noon and nadir always occur.
    pub fn event(&self, kind: SunTimeKind) -> SunEvent<Tz> {
        match kind {
            SunTimeKind::Dawn => self.dawn.clone(),
            SunTimeKind::Sunrise => self.sunrise.clone(),
            SunTimeKind::SunriseEnd => self.sunrise_end.clone(),
            SunTimeKind::GoldenHourEnd => self.golden_hour_end.clone(),
            SunTimeKind::SolarNoon => SunEvent::Occurs(self.solar_noon.clone()),
            SunTimeKind::GoldenHour => self.golden_hour.clone(),
            SunTimeKind::SunsetStart => self.sunset_start.clone(),
            SunTimeKind::Sunset => self.sunset.clone(),
            SunTimeKind::Dusk => self.dusk.clone(),
            SunTimeKind::NauticalDawn => self.nautical_dawn.clone(),
            SunTimeKind::NauticalDusk => self.nautical_dusk.clone(),
            SunTimeKind::Night => self.night.clone(),
            SunTimeKind::Nadir => SunEvent::Occurs(self.nadir.clone()),
            SunTimeKind::NightEnd => self.night_end.clone(),
        }
    }
}

/// Outcome of the closed-form hour-angle solve, in day counts.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Crossing {
    Occurs { rise: f64, set: f64 },
    AlwaysAbove,
    AlwaysBelow,
}

/// Mean solar quantities of the transit nearest to a day count.
#[derive(Copy, Clone, Debug)]
struct SolarTransit {
    cycle: f64,
    lw: f64,
    phi: f64,
    mean_anomaly: f64,
    ecliptic_longitude: f64,
    declination: f64,
    noon: f64,
}

fn approx_transit(hour_angle: f64, lw: f64, cycle: f64) -> f64 {
    J0 + (hour_angle + lw) / TAU + cycle
}

fn solar_transit_day(ds: f64, mean_anomaly: f64, ecliptic_longitude: f64) -> f64 {
    ds + 0.0053 * mean_anomaly.sin() - 0.0069 * (2.0 * ecliptic_longitude).sin()
}

impl SolarTransit {
    fn nearest(location: &GeoLocation, d: f64) -> Self {
        let lw = location.lw();
        let cycle = (d - J0 - lw / TAU).round();
        let ds = approx_transit(0.0, lw, cycle);
        let mean_anomaly = solar_mean_anomaly(ds);
        let ecliptic_longitude = ecliptic_longitude(mean_anomaly);
        Self {
            cycle,
            lw,
            phi: location.phi(),
            mean_anomaly,
            ecliptic_longitude,
            declination: declination(ecliptic_longitude, 0.0),
            noon: solar_transit_day(ds, mean_anomaly, ecliptic_longitude),
        }
    }

    fn nadir(&self) -> f64 {
        self.noon - 0.5
    }

    /// Solves `cos(H) = (sin(h0) - sin(phi) sin(dec)) / (cos(phi) cos(dec))`.
    fn crossing(&self, h0: f64) -> Crossing {
        let cos_h = (h0.sin() - self.phi.sin() * self.declination.sin()) / (self.phi.cos() * self.declination.cos());
        if cos_h < -1.0 {
            return Crossing::AlwaysAbove;
        }
        if cos_h > 1.0 || cos_h.is_nan() {
            return Crossing::AlwaysBelow;
        }
        let w = cos_h.acos();
        let set = solar_transit_day(
            approx_transit(w, self.lw, self.cycle),
            self.mean_anomaly,
            self.ecliptic_longitude,
        );
        Crossing::Occurs {
            rise: self.noon - (set - self.noon),
            set,
        }
    }
}

/// Horizon dip in degrees for an observer `height` metres above the terrain.
///
/// Heights at or below zero are treated as sea level.
pub fn observer_dip(height: f64) -> f64 {
    if height > 0.0 {
        -2.076 * height.sqrt() / 60.0
    } else {
        0.0
    }
}

/// Sun azimuth and altitude at `instant`.
pub fn sun_position<Tz: TimeZone>(location: &GeoLocation, instant: &DateTime<Tz>) -> SunPosition {
    let d = to_day_count(instant);
    let c = sun_equatorial_coords(d);
    let h = hour_angle(d, location.lw(), c.right_ascension);
    let horizontal = horizontal_coords(h, location.phi(), c.declination);
    SunPosition {
        azimuth: horizontal.azimuth,
        altitude: horizontal.altitude,
    }
}

/// Noon (local wall clock of `instant`) of the calendar day being asked for.
///
/// The transit search snaps to the nearest solar noon, so anchoring there
/// keeps the result on the caller's calendar day for any time of day.
fn day_anchor<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<f64, CalculationError> {
    let noon = advance_by_hours(&start_of_local_day(instant)?, 12.0)?;
    Ok(to_day_count(&noon))
}

fn crossing_events<Tz: TimeZone>(
    transit: &SolarTransit,
    angle: f64,
    height: f64,
    tz: &Tz,
) -> Result<(SunEvent<Tz>, SunEvent<Tz>), CalculationError> {
    let h0 = (angle + observer_dip(height)).to_radians();
    let crossing = transit.crossing(h0);
    let (morning, evening) = match crossing {
        Crossing::Occurs { rise, set } => (
            SunEvent::Occurs(from_day_count(rise, tz)?),
            SunEvent::Occurs(from_day_count(set, tz)?),
        ),
        Crossing::AlwaysAbove => (SunEvent::AlwaysAbove, SunEvent::AlwaysAbove),
        Crossing::AlwaysBelow => (SunEvent::AlwaysBelow, SunEvent::AlwaysBelow),
    };
    if !morning.occurs() {
        debug!(
            "sun does not cross {angle} deg at latitude {}: {crossing:?}",
            transit.phi.to_degrees()
        );
    }
    Ok((morning, evening))
}

/// Morning and evening instants at which the Sun passes `angle` degrees of
/// altitude on the calendar day of `instant`.
///
/// `height` is the observer's height above the terrain in metres; it lowers
/// the apparent horizon.
///
/// # Errors
///
/// [`CalculationError::TimeConversionError`] if an instant cannot be
/// represented.
pub fn threshold_crossings<Tz: TimeZone>(
    location: &GeoLocation,
    instant: &DateTime<Tz>,
    angle: f64,
    height: f64,
) -> Result<(SunEvent<Tz>, SunEvent<Tz>), CalculationError> {
    let transit = SolarTransit::nearest(location, day_anchor(instant)?);
    crossing_events(&transit, angle, height, &instant.timezone())
}

/// All fourteen sun times for the calendar day of `instant`.
///
/// # Errors
///
/// [`CalculationError::TimeConversionError`] if an instant cannot be
/// represented.
pub fn sun_times<Tz: TimeZone>(
    location: &GeoLocation,
    instant: &DateTime<Tz>,
    height: f64,
) -> Result<SunTimes<Tz>, CalculationError> {
    let tz = instant.timezone();
    let transit = SolarTransit::nearest(location, day_anchor(instant)?);

    let [horizon, upper_limb, civil, nautical, astronomical, golden] = SUN_THRESHOLDS;
    let (sunrise, sunset) = crossing_events(&transit, horizon.0, height, &tz)?;
    let (sunrise_end, sunset_start) = crossing_events(&transit, upper_limb.0, height, &tz)?;
    let (dawn, dusk) = crossing_events(&transit, civil.0, height, &tz)?;
    let (nautical_dawn, nautical_dusk) = crossing_events(&transit, nautical.0, height, &tz)?;
    let (night_end, night) = crossing_events(&transit, astronomical.0, height, &tz)?;
    let (golden_hour_end, golden_hour) = crossing_events(&transit, golden.0, height, &tz)?;

    Ok(SunTimes {
        dawn,
        sunrise,
        sunrise_end,
        golden_hour_end,
        solar_noon: from_day_count(transit.noon, &tz)?,
        golden_hour,
        sunset_start,
        sunset,
        dusk,
        nautical_dawn,
        nautical_dusk,
        night,
        nadir: from_day_count(transit.nadir(), &tz)?,
        night_end,
    })
}
