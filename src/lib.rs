//! # SunCalc
//!
//! Sun and Moon ephemeris for any place on Earth: sky positions, sunrise,
//! sunset and twilight times, moonrise and moonset, and lunar phase.
//!
//! The formulas are the low-precision series from Jean Meeus' "Astronomical
//! Algorithms". They are good to about a minute of arc for the Sun and a few
//! minutes of arc for the Moon, which is plenty for almanacs, photography
//! planners and the like. Everything is a pure function of the observer's
//! location and a [`chrono`] instant, and the crate is `no_std`.
//!
//! Angles are in radians. Azimuth is measured from south, positive towards
//! west. Instants come back in the time zone of the instant you passed in.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use suncalc::{SunCalc, SunEvent};
//!
//! let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
//! let calc = SunCalc::new(50.5, 30.5, date);
//!
//! let position = calc.sun_position();
//! println!("Sun altitude: {:.2}°", position.altitude.to_degrees());
//!
//! let times = calc.sun_times().unwrap();
//! match times.sunrise {
//!     SunEvent::Occurs(instant) => println!("Sunrise at {instant}"),
//!     SunEvent::AlwaysAbove => println!("Sun never sets (midnight sun)"),
//!     SunEvent::AlwaysBelow => println!("Sun never rises (polar night)"),
//! }
//!
//! let phase = calc.moon_phase().unwrap();
//! println!("{} {}", phase.glyph, phase.phase);
//!
//! let moon = calc.moon_times().unwrap();
//! if let Some(rise) = moon.rise {
//!     println!("Moonrise at {rise}");
//! }
//! ```
#![no_std]

pub mod coords;
mod math;
pub mod moon;
pub mod moon_times;
pub mod phase;
pub mod sun;
pub mod time;
pub mod types;

#[cfg(test)]
mod tests;

use chrono::{DateTime, TimeZone, Utc};

pub use crate::math::angular_difference;
pub use crate::moon::{moon_phase, moon_position, moon_zodiac_sign, MoonPhaseInfo, ZodiacSign};
pub use crate::moon_times::{moon_times, RiseSetPrecision};
pub use crate::phase::MoonPhase;
pub use crate::sun::{
    observer_dip, sun_position, sun_times, threshold_crossings, SunEvent, SunTimeKind, SunTimes, SUN_THRESHOLDS,
};
pub use crate::time::{from_day_count, from_julian_date, to_day_count, to_julian_date};
pub use crate::types::{CalculationError, GeoLocation, MoonPosition, MoonTimes, SunPosition};

/// Sun and Moon calculator for one observer and one instant.
///
/// The struct only holds the query; every accessor recomputes from scratch.
/// The `*_at` variants answer for another instant without rebuilding the
/// calculator.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use suncalc::{RiseSetPrecision, SunCalc};
///
/// let date = Utc.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap();
/// let calc = SunCalc::new(50.5, 30.5, date)
///     .with_height(120.0)
///     .with_rise_set_precision(RiseSetPrecision::WholeHour);
///
/// let moon = calc.moon_times().unwrap();
/// assert!(moon.rise.is_some());
/// assert!(!moon.always_up && !moon.always_down);
/// ```
#[derive(Clone, Debug)]
pub struct SunCalc<Tz: TimeZone = Utc> {
    location: GeoLocation,
    date: DateTime<Tz>,
    height: f64,
    precision: RiseSetPrecision,
}

#[cfg(feature = "clock")]
impl SunCalc<Utc> {
    /// Calculator for the current system time.
    pub fn now(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, Utc::now())
    }
}

impl<Tz: TimeZone> SunCalc<Tz> {
    /// Creates a calculator at sea level with exact moon rise/set times.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Degrees, positive north
    /// * `longitude` - Degrees, positive east
    /// * `date` - Query instant; results come back in its zone
    pub fn new(latitude: f64, longitude: f64, date: DateTime<Tz>) -> Self {
        Self::at_location(GeoLocation::new(latitude, longitude), date)
    }

    pub fn at_location(location: GeoLocation, date: DateTime<Tz>) -> Self {
        Self {
            location,
            date,
            height: 0.0,
            precision: RiseSetPrecision::default(),
        }
    }

    /// Observer height above the terrain in metres, used for sun times.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_date(mut self, date: DateTime<Tz>) -> Self {
        self.date = date;
        self
    }

    pub fn with_rise_set_precision(mut self, precision: RiseSetPrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    pub fn date(&self) -> &DateTime<Tz> {
        &self.date
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn sun_position(&self) -> SunPosition {
        self.sun_position_at(&self.date)
    }

    pub fn sun_position_at(&self, instant: &DateTime<Tz>) -> SunPosition {
        sun::sun_position(&self.location, instant)
    }

    /// Sun times for the calendar day of the query instant.
    ///
    /// # Errors
    ///
    /// [`CalculationError::TimeConversionError`] if an instant cannot be
    /// represented.
    pub fn sun_times(&self) -> Result<SunTimes<Tz>, CalculationError> {
        self.sun_times_at(&self.date)
    }

    /// # Errors
    ///
    /// See [`SunCalc::sun_times`].
    pub fn sun_times_at(&self, instant: &DateTime<Tz>) -> Result<SunTimes<Tz>, CalculationError> {
        sun::sun_times(&self.location, instant, self.height)
    }

    /// Morning and evening crossings of a custom sun altitude in degrees.
    ///
    /// # Errors
    ///
    /// See [`SunCalc::sun_times`].
    pub fn sun_crossing(&self, angle: f64) -> Result<(SunEvent<Tz>, SunEvent<Tz>), CalculationError> {
        sun::threshold_crossings(&self.location, &self.date, angle, self.height)
    }

    pub fn moon_position(&self) -> MoonPosition {
        self.moon_position_at(&self.date)
    }

    pub fn moon_position_at(&self, instant: &DateTime<Tz>) -> MoonPosition {
        moon::moon_position(&self.location, instant)
    }

    /// # Errors
    ///
    /// See [`moon::moon_phase`].
    pub fn moon_phase(&self) -> Result<MoonPhaseInfo, CalculationError> {
        self.moon_phase_at(&self.date)
    }

    /// # Errors
    ///
    /// See [`moon::moon_phase`].
    pub fn moon_phase_at(&self, instant: &DateTime<Tz>) -> Result<MoonPhaseInfo, CalculationError> {
        moon::moon_phase(instant)
    }

    /// Moon rise and set for the calendar day of the query instant.
    ///
    /// # Errors
    ///
    /// See [`moon_times::moon_times`].
    pub fn moon_times(&self) -> Result<MoonTimes<Tz>, CalculationError> {
        self.moon_times_at(&self.date)
    }

    /// # Errors
    ///
    /// See [`moon_times::moon_times`].
    pub fn moon_times_at(&self, instant: &DateTime<Tz>) -> Result<MoonTimes<Tz>, CalculationError> {
        moon_times::moon_times(&self.location, instant, self.precision)
    }

    pub fn moon_zodiac_sign(&self) -> ZodiacSign {
        self.moon_zodiac_sign_at(&self.date)
    }

    pub fn moon_zodiac_sign_at(&self, instant: &DateTime<Tz>) -> ZodiacSign {
        moon::moon_zodiac_sign(instant)
    }
}
