use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::types::CalculationError;

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00:00 UTC).
pub const J2000: f64 = 2_451_545.0;

/// Unix timestamp of the J2000.0 epoch, in seconds.
pub const J2000_UNIX_SECONDS: i64 = 946_728_000;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

const NANOS_PER_SECOND: f64 = 1.0e9;
const NANOS_PER_HOUR: f64 = 3.6e12;

/// Converts an instant to the continuous day count since J2000.0.
///
/// Only the UTC instant matters; the zone of `instant` is ignored. Sub-second
/// precision is kept down to the nanosecond the instant carries.
///
/// # Arguments
///
/// * `instant` - Any chrono date-time.
///
/// # Returns
///
/// Whole and fractional days since 2000-01-01T12:00:00 UTC (negative before it).
pub fn to_day_count<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    let seconds = (instant.timestamp() - J2000_UNIX_SECONDS) as f64;
    let nanos = f64::from(instant.timestamp_subsec_nanos());
    (seconds + nanos / NANOS_PER_SECOND) / SECONDS_PER_DAY
}

/// Converts a J2000.0 day count back to a civil instant in `tz`.
///
/// The result is rounded to the nearest nanosecond, so
/// `from_day_count(to_day_count(&t), &tz)` reproduces `t` to well under a
/// millisecond.
///
/// # Errors
///
/// Returns [`CalculationError::TimeConversionError`] when `days` is not finite
/// or lies outside the range chrono can represent.
pub fn from_day_count<Tz: TimeZone>(days: f64, tz: &Tz) -> Result<DateTime<Tz>, CalculationError> {
    let seconds = days * SECONDS_PER_DAY;
    // chrono tops out around +/-262,000 years; anything past i64 seconds is already out.
    if !seconds.is_finite() || seconds.abs() >= 9.0e15 {
        return Err(CalculationError::TimeConversionError);
    }
    let whole = seconds.floor();
    let mut nanos = ((seconds - whole) * NANOS_PER_SECOND).round() as i64;
    let mut whole = whole as i64;
    if nanos >= 1_000_000_000 {
        whole += 1;
        nanos -= 1_000_000_000;
    }
    let unix = whole
        .checked_add(J2000_UNIX_SECONDS)
        .ok_or(CalculationError::TimeConversionError)?;
    DateTime::<Utc>::from_timestamp(unix, nanos as u32)
        .map(|utc| utc.with_timezone(tz))
        .ok_or(CalculationError::TimeConversionError)
}

/// Julian Day (JD) of an instant.
pub fn to_julian_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    to_day_count(instant) + J2000
}

/// Civil instant of a Julian Day (JD) in `tz`.
///
/// # Errors
///
/// Same as [`from_day_count`].
pub fn from_julian_date<Tz: TimeZone>(julian_day: f64, tz: &Tz) -> Result<DateTime<Tz>, CalculationError> {
    from_day_count(julian_day - J2000, tz)
}

/// Moves an instant by a fractional, possibly negative, number of hours.
///
/// # Errors
///
/// Returns [`CalculationError::TimeConversionError`] if the offset is not
/// finite or the result leaves chrono's range.
pub fn advance_by_hours<Tz: TimeZone>(instant: &DateTime<Tz>, hours: f64) -> Result<DateTime<Tz>, CalculationError> {
    let nanos = (hours * NANOS_PER_HOUR).round();
    // i64 nanoseconds cover roughly +/-292 years of offset.
    if !nanos.is_finite() || nanos.abs() >= 9.2e18 {
        return Err(CalculationError::TimeConversionError);
    }
    instant
        .clone()
        .checked_add_signed(TimeDelta::nanoseconds(nanos as i64))
        .ok_or(CalculationError::TimeConversionError)
}

/// The instant at which the local calendar day of `instant` started, in the
/// instant's own zone.
///
/// This is the wall-clock midnight of that date. In zones where a transition
/// skips midnight, the local time of day is subtracted from `instant` instead.
pub(crate) fn start_of_local_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<DateTime<Tz>, CalculationError> {
    let midnight = instant.date_naive().and_time(NaiveTime::MIN);
    if let Some(start) = instant.timezone().from_local_datetime(&midnight).earliest() {
        return Ok(start);
    }
    let local = instant.time();
    let elapsed = TimeDelta::seconds(i64::from(local.num_seconds_from_midnight()))
        + TimeDelta::nanoseconds(i64::from(local.nanosecond()));
    instant
        .clone()
        .checked_sub_signed(elapsed)
        .ok_or(CalculationError::TimeConversionError)
}
