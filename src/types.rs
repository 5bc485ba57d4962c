use chrono::{DateTime, TimeZone};
use thiserror::Error;

/// Errors produced while turning astronomical results back into civil time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    /// An instant fell outside the range chrono can represent
    #[error("Time conversion error")]
    TimeConversionError,
}

/// Observer location on the Earth's surface, in degrees.
///
/// Latitude is positive north, longitude positive east. Values are not
/// validated; out-of-range inputs give mathematically defined but physically
/// meaningless results.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Observer latitude in radians (`phi` in the formulas).
    pub(crate) fn phi(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// West longitude in radians (`lw` in the formulas).
    pub(crate) fn lw(&self) -> f64 {
        (-self.longitude).to_radians()
    }
}

/// Observer-independent position of a body, in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialCoords {
    pub right_ascension: f64,
    pub declination: f64,
}

/// Geocentric ecliptic position, in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EclipticCoords {
    pub longitude: f64,
    pub latitude: f64,
}

/// Observer-relative position, in radians.
///
/// Azimuth is measured from south, positive towards west, in (-PI, PI].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalCoords {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Equatorial position of the Moon together with its distance from the Earth.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonCoords {
    pub right_ascension: f64,
    pub declination: f64,
    pub distance_km: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Topocentric Moon position.
///
/// `altitude` includes the atmospheric refraction correction; `azimuth` does not
/// need one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPosition {
    pub azimuth: f64,
    pub altitude: f64,
    pub distance_km: f64,
    pub parallactic_angle: f64,
}

/// Moon rise and set for one calendar day.
///
/// `rise` or `set` is `None` when the Moon does not cross the horizon in that
/// direction during the day. When neither crossing happens exactly one of
/// `always_up`/`always_down` is set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(bound(serialize = "")))]
pub struct MoonTimes<Tz: TimeZone> {
    pub rise: Option<DateTime<Tz>>,
    pub set: Option<DateTime<Tz>>,
    pub always_up: bool,
    pub always_down: bool,
}
