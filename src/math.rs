#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Normalizes an angle in degrees to the range [0, 360).
///
/// # Arguments
///
/// * `degrees` - The angle in degrees to normalize
///
/// # Returns
///
/// The normalized angle in degrees, in the range [0, 360)
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    let limited = degrees.rem_euclid(360.0);
    // rem_euclid rounds up to exactly 360.0 for tiny negative inputs
    if limited >= 360.0 {
        limited - 360.0
    } else {
        limited
    }
}

/// Sign used by the phase formulas: `-1.0` for negative values, `1.0` otherwise.
///
/// Zero, negative zero and NaN all count as positive, unlike `f64::signum`
/// on `-0.0`.
pub(crate) fn sign_non_negative(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Smallest signed difference `a - b` between two angles in radians, in [-PI, PI).
pub fn angular_difference(a: f64, b: f64) -> f64 {
    use core::f64::consts::{PI, TAU};
    (a - b + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn normalizes_into_range() {
        assert_eq!(normalize_degrees_360(370.0), 10.0);
        assert_eq!(normalize_degrees_360(-30.0), 330.0);
        assert_eq!(normalize_degrees_360(720.0), 0.0);
        assert_eq!(normalize_degrees_360(390.0), 30.0);
        assert_eq!(normalize_degrees_360(-1e-15), 0.0);
    }

    #[test]
    fn zero_counts_as_positive() {
        assert_eq!(sign_non_negative(0.0), 1.0);
        assert_eq!(sign_non_negative(-0.0), 1.0);
        assert_eq!(sign_non_negative(-1e-300), -1.0);
        assert_eq!(sign_non_negative(f64::NAN), 1.0);
    }

    #[test]
    fn angular_difference_wraps() {
        assert!((angular_difference(PI - 0.1, -PI + 0.1) + 0.2).abs() < 1e-12);
        assert!((angular_difference(0.3, 0.1) - 0.2).abs() < 1e-12);
    }
}
