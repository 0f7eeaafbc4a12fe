//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Angles
/// Tau (2*PI) for full circle
pub const TWOPI: f64 = PI * 2.0;
/// Degrees to radians conversion factor
pub const DEGTORAD: f64 = PI / 180.0;
/// Hours of right ascension to radians conversion factor
pub const RATORAD: f64 = PI / 12.0;
/// Arcseconds to radians conversion factor
pub const ARCSECTORAD: f64 = DEGTORAD / 3600.0;
/// Mean obliquity of the ecliptic at J2000.0 in radians
pub const OBLIQUITY_2000: f64 = 23.439_291_11 * DEGTORAD;

// Astronomical distances
/// Astronomical Unit in kilometers
pub const AU: f64 = 149_597_870.66;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Days in a Julian year
pub const JULIAN_YEAR_DAYS: f64 = 365.25;
/// Legacy one-second scale factor.
///
/// Kept at 1/180 for compatibility with existing sphere mappings; this is not
/// the fraction of a day (that would be `1.0 / DAY_S`).
pub const ONE_SECOND: f64 = 1.0 / 180.0;

// Physics
/// Speed of light in km/s
pub const CLIGHT: f64 = 299_792.458;

// Derived constants
/// Light-year in kilometers
pub const LIGHT_YEAR: f64 = CLIGHT * JULIAN_YEAR_DAYS * DAY_S;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_factors() {
        assert_relative_eq!(180.0 * DEGTORAD, PI);
        assert_relative_eq!(12.0 * RATORAD, PI);
        assert_relative_eq!(TWOPI, 360.0 * DEGTORAD);
        assert_relative_eq!(3600.0 * ARCSECTORAD, DEGTORAD);
    }

    #[test]
    fn test_obliquity() {
        assert_relative_eq!(OBLIQUITY_2000, 0.409_092_804_203, epsilon = 1e-12);
    }

    #[test]
    fn test_light_year() {
        // ~9.4607e12 km
        assert_relative_eq!(LIGHT_YEAR, 9_460_730_472_580.8, max_relative = 1e-12);
        assert!(LIGHT_YEAR / AU > 63_000.0);
    }
}
