use chrono::{DateTime, Days, TimeZone};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::coords::{
    atmospheric_refraction, horizontal_coords, hour_angle, moon_ecliptic_coords, moon_equatorial_coords,
    parallactic_angle, sun_equatorial_coords,
};
use crate::math::normalize_degrees_360;
use crate::phase::{classify, phase_value, MoonPhase};
use crate::time::to_day_count;
use crate::types::{CalculationError, GeoLocation, MoonPosition};

/// Mean Earth-Sun distance in km, good enough for the phase angle.
const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Illumination and named phase of the Moon at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoonPhaseInfo {
    /// Illuminated fraction of the disk, 0 at new moon to 1 at full moon.
    pub illuminated_fraction: f64,
    /// Position in the synodic cycle: 0 new, 0.25 first quarter, 0.5 full,
    /// 0.75 last quarter, back to 1.
    pub phase_value: f64,
    /// Midpoint angle of the bright limb, eastward from the disk's north
    /// point. Negative while waxing, positive while waning.
    pub phase_angle: f64,
    pub phase: MoonPhase,
    pub glyph: &'static str,
}

/// Raw illumination geometry for one day count.
#[derive(Copy, Clone, Debug)]
struct Illumination {
    inc: f64,
    angle: f64,
}

impl Illumination {
    fn at(d: f64) -> Self {
        let s = sun_equatorial_coords(d);
        let m = moon_equatorial_coords(d);

        let ra_diff = s.right_ascension - m.right_ascension;
        // geocentric elongation of the Moon from the Sun
        let phi = (s.declination.sin() * m.declination.sin()
            + s.declination.cos() * m.declination.cos() * ra_diff.cos())
        .acos();
        let inc = (SUN_DISTANCE_KM * phi.sin()).atan2(m.distance_km - SUN_DISTANCE_KM * phi.cos());
        let angle = (s.declination.cos() * ra_diff.sin()).atan2(
            s.declination.sin() * m.declination.cos() - s.declination.cos() * m.declination.sin() * ra_diff.cos(),
        );
        Self { inc, angle }
    }

    fn fraction(&self) -> f64 {
        (1.0 + self.inc.cos()) / 2.0
    }

    fn phase_value(&self) -> f64 {
        phase_value(self.inc, self.angle)
    }
}

/// Moon azimuth, refraction-corrected altitude, distance and parallactic angle.
pub fn moon_position<Tz: TimeZone>(location: &GeoLocation, instant: &DateTime<Tz>) -> MoonPosition {
    let d = to_day_count(instant);
    let phi = location.phi();
    let c = moon_equatorial_coords(d);
    let h = hour_angle(d, location.lw(), c.right_ascension);
    let horizontal = horizontal_coords(h, phi, c.declination);

    MoonPosition {
        azimuth: horizontal.azimuth,
        altitude: horizontal.altitude + atmospheric_refraction(horizontal.altitude),
        distance_km: c.distance_km,
        parallactic_angle: parallactic_angle(h, phi, c.declination),
    }
}

/// Moon illumination and named phase at `instant`.
///
/// The phase name comes from comparing the phase value at `instant` and one
/// calendar day later, so a quarter phase is reported on the single day during
/// which the Moon passes it. Illumination is geocentric; the observer location
/// does not enter the computation.
///
/// # Errors
///
/// [`CalculationError::TimeConversionError`] if `instant` is the last
/// representable day.
pub fn moon_phase<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<MoonPhaseInfo, CalculationError> {
    let next_day = instant
        .clone()
        .checked_add_days(Days::new(1))
        .ok_or(CalculationError::TimeConversionError)?;

    let today = Illumination::at(to_day_count(instant));
    let tomorrow = Illumination::at(to_day_count(&next_day));
    let phase = MoonPhase::from_index(classify(today.phase_value(), tomorrow.phase_value()));

    Ok(MoonPhaseInfo {
        illuminated_fraction: today.fraction(),
        phase_value: today.phase_value(),
        phase_angle: today.angle,
        phase,
        glyph: phase.glyph(),
    })
}

/// Tropical zodiac signs, 30 degrees of ecliptic longitude each from the March
/// equinox.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign containing an ecliptic longitude given in degrees.
    pub fn from_longitude(degrees: f64) -> Self {
        let sector = (normalize_degrees_360(degrees) / 30.0) as usize;
        Self::ALL[sector.min(11)]
    }
}

/// Zodiac sign the Moon is in at `instant`, from its geocentric ecliptic
/// longitude.
pub fn moon_zodiac_sign<Tz: TimeZone>(instant: &DateTime<Tz>) -> ZodiacSign {
    let ecliptic = moon_ecliptic_coords(to_day_count(instant));
    ZodiacSign::from_longitude(ecliptic.longitude.to_degrees())
}
