//! Low-precision celestial coordinate formulas.
//!
//! Every angle is in radians and every time is a J2000.0 day count (see
//! [`crate::time::to_day_count`]). The solar and lunar series are the
//! first-order approximations from Meeus' "Astronomical Algorithms", good to
//! roughly an arc-minute for the Sun and a few arc-minutes for the Moon.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use core::f64::consts::PI;

use crate::types::{EclipticCoords, EquatorialCoords, HorizontalCoords, MoonCoords};

/// Obliquity of the ecliptic, fixed at its J2000.0 value of 23.4397 degrees.
pub const OBLIQUITY: f64 = 23.4397 * (PI / 180.0);

/// Longitude of the Earth's perihelion, in radians.
const PERIHELION: f64 = 102.9372 * (PI / 180.0);

/// Right ascension from ecliptic longitude `l` and latitude `b`.
pub fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

/// Declination from ecliptic longitude `l` and latitude `b`.
pub fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

pub fn ecliptic_to_equatorial(ecliptic: EclipticCoords) -> EquatorialCoords {
    EquatorialCoords {
        right_ascension: right_ascension(ecliptic.longitude, ecliptic.latitude),
        declination: declination(ecliptic.longitude, ecliptic.latitude),
    }
}

/// Local sidereal time for day count `d` and west longitude `lw` (radians,
/// positive west).
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    (280.16 + 360.985_623_5 * d).to_radians() - lw
}

/// Hour angle `H` of a body with right ascension `ra`.
pub fn hour_angle(d: f64, lw: f64, ra: f64) -> f64 {
    sidereal_time(d, lw) - ra
}

/// Altitude above the horizon for hour angle `h`, observer latitude `phi` and
/// declination `dec`.
pub fn horizontal_altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Azimuth, measured from south towards west.
pub fn horizontal_azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

pub fn horizontal_coords(h: f64, phi: f64, dec: f64) -> HorizontalCoords {
    HorizontalCoords {
        azimuth: horizontal_azimuth(h, phi, dec),
        altitude: horizontal_altitude(h, phi, dec),
    }
}

/// Parallactic angle (Meeus formula 14.1).
pub fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(phi.tan() * dec.cos() - dec.sin() * h.cos())
}

/// Atmospheric refraction for an apparent altitude, in radians.
///
/// Meeus formula 16.4, `1.02 / tan(h + 10.26 / (h + 5.10))` arc-minutes with
/// `h` in degrees, rewritten for radians. The formula only holds above the
/// horizon, so negative altitudes are evaluated at 0.
pub fn atmospheric_refraction(altitude: f64) -> f64 {
    let h = if altitude < 0.0 { 0.0 } else { altitude };
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}

pub fn solar_mean_anomaly(d: f64) -> f64 {
    (357.5291 + 0.985_600_28 * d).to_radians()
}

/// Ecliptic longitude of the Sun from its mean anomaly `m`.
pub fn ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians();
    m + c + PERIHELION + PI
}

pub fn sun_equatorial_coords(d: f64) -> EquatorialCoords {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    ecliptic_to_equatorial(EclipticCoords { longitude: l, latitude: 0.0 })
}

/// Fundamental lunar arguments: mean longitude, mean anomaly, argument of
/// latitude.
fn moon_arguments(d: f64) -> (f64, f64, f64) {
    let l = (218.316 + 13.176_396 * d).to_radians();
    let m = (134.963 + 13.064_993 * d).to_radians();
    let f = (93.272 + 13.229_350 * d).to_radians();
    (l, m, f)
}

/// Geocentric ecliptic longitude and latitude of the Moon.
pub fn moon_ecliptic_coords(d: f64) -> EclipticCoords {
    let (l, m, f) = moon_arguments(d);
    EclipticCoords {
        longitude: l + 6.289_f64.to_radians() * m.sin(),
        latitude: 5.128_f64.to_radians() * f.sin(),
    }
}

pub fn moon_equatorial_coords(d: f64) -> MoonCoords {
    let (_, m, _) = moon_arguments(d);
    let equatorial = ecliptic_to_equatorial(moon_ecliptic_coords(d));
    MoonCoords {
        right_ascension: equatorial.right_ascension,
        declination: equatorial.declination,
        distance_km: 385_001.0 - 20_905.0 * m.cos(),
    }
}
