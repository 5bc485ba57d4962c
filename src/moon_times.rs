use chrono::{DateTime, TimeZone};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::{debug, trace};

use crate::moon::moon_position;
use crate::time::{advance_by_hours, start_of_local_day};
use crate::types::{CalculationError, GeoLocation, MoonTimes};

/// Altitude of the Moon's centre at apparent rise/set, 0.133 degrees.
const MOON_HORIZON: f64 = 0.133 * (core::f64::consts::PI / 180.0);

/// Number of two-hour windows scanned from local midnight.
const WINDOWS: u32 = 12;

/// How rise and set hours are turned back into instants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiseSetPrecision {
    /// Keep the interpolated fraction of the hour.
    #[default]
    Exact,
    /// Drop the fraction and report the whole hour the crossing falls in.
    WholeHour,
}

impl RiseSetPrecision {
    fn apply(self, hours: f64) -> f64 {
        match self {
            RiseSetPrecision::Exact => hours,
            RiseSetPrecision::WholeHour => hours.trunc(),
        }
    }
}

/// Quadratic through three altitude samples one hour apart, on `x` in [-1, 1].
#[derive(Copy, Clone, Debug)]
struct Parabola {
    a: f64,
    b: f64,
    c: f64,
}

/// Horizon crossings of one fitted window, as offsets from the window centre.
#[derive(Copy, Clone, Debug, PartialEq)]
enum WindowCrossing {
    None,
    One(f64),
    Two { first: f64, second: f64 },
}

impl Parabola {
    fn through(before: f64, centre: f64, after: f64) -> Self {
        Self {
            a: (before + after) / 2.0 - centre,
            b: (after - before) / 2.0,
            c: centre,
        }
    }

    /// Value at the vertex. Its sign tells whether a two-root window is a
    /// peak above the horizon or a dip below it.
    fn vertex_value(&self) -> f64 {
        let xe = -self.b / (2.0 * self.a);
        (self.a * xe + self.b) * xe + self.c
    }

    fn crossings(&self) -> WindowCrossing {
        let xe = -self.b / (2.0 * self.a);
        let discriminant = self.b * self.b - 4.0 * self.a * self.c;
        if discriminant < 0.0 {
            return WindowCrossing::None;
        }
        let dx = discriminant.sqrt() / (self.a.abs() * 2.0);
        let x1 = xe - dx;
        let x2 = xe + dx;
        match (x1.abs() <= 1.0, x2.abs() <= 1.0) {
            (true, true) => WindowCrossing::Two { first: x1, second: x2 },
            (true, false) => WindowCrossing::One(x1),
            (false, true) => WindowCrossing::One(x2),
            (false, false) => WindowCrossing::None,
        }
    }
}

/// Moon rise and set on the calendar day of `instant`, in the instant's zone.
///
/// The Moon's altitude is sampled hourly from local midnight and a parabola
/// is fitted through each consecutive triple of samples; its roots inside the
/// window are the horizon crossings. The scan stops early once both a rise and
/// a set are known. If neither is found the Moon is flagged as staying up or
/// down for the whole day.
///
/// A full day costs up to 25 Moon position evaluations, one per sampled hour
/// from 0 to 24.
///
/// # Errors
///
/// [`CalculationError::TimeConversionError`] if the day or a crossing cannot be
/// represented as a chrono instant.
pub fn moon_times<Tz: TimeZone>(
    location: &GeoLocation,
    instant: &DateTime<Tz>,
    precision: RiseSetPrecision,
) -> Result<MoonTimes<Tz>, CalculationError> {
    let midnight = start_of_local_day(instant)?;
    let altitude_at = |hours: f64| -> Result<f64, CalculationError> {
        let at = advance_by_hours(&midnight, hours)?;
        Ok(moon_position(location, &at).altitude - MOON_HORIZON)
    };

    let mut h0 = altitude_at(0.0)?;
    let mut rise = None;
    let mut set = None;
    let mut vertex = 0.0;

    for window in 0..WINDOWS {
        let centre = f64::from(2 * window + 1);
        let h1 = altitude_at(centre)?;
        let h2 = altitude_at(centre + 1.0)?;

        let parabola = Parabola::through(h0, h1, h2);
        vertex = parabola.vertex_value();
        let crossing = parabola.crossings();
        trace!("moon window at hour {centre}: {parabola:?} -> {crossing:?}");

        match crossing {
            WindowCrossing::One(x) if h0 < 0.0 => rise = Some(centre + x),
            WindowCrossing::One(x) => set = Some(centre + x),
            WindowCrossing::Two { first, second } if vertex < 0.0 => {
                rise = Some(centre + second);
                set = Some(centre + first);
            }
            WindowCrossing::Two { first, second } => {
                rise = Some(centre + first);
                set = Some(centre + second);
            }
            WindowCrossing::None => {}
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
    }

    let to_instant = |hours: Option<f64>| -> Result<Option<DateTime<Tz>>, CalculationError> {
        hours
            .map(|h| advance_by_hours(&midnight, precision.apply(h)))
            .transpose()
    };

    let neither = rise.is_none() && set.is_none();
    let times = MoonTimes {
        rise: to_instant(rise)?,
        set: to_instant(set)?,
        always_up: neither && vertex > 0.0,
        always_down: neither && vertex <= 0.0,
    };

    if neither {
        debug!(
            "moon stays {} at latitude {} on {}",
            if times.always_up { "up" } else { "down" },
            location.latitude,
            midnight.date_naive()
        );
    } else if rise.is_none() || set.is_none() {
        debug!("moon crosses the horizon only once on {}", midnight.date_naive());
    }

    Ok(times)
}
