//! The Earth's umbra at the Moon's distance.
//!
//! The shadow has no theory of its own: it is the antisolar point, at the Moon's distance,
//! with the umbral radius of the Danjon rule as semidiameter.

use crate::constants::{AstronomicalUnit, DPI, RADSEC};
use crate::kepler::principal_angle;
use crate::ref_system::GeocentricPosition;

/// Enlargement of the umbra by the atmosphere
const ATMOSPHERE_FACTOR: f64 = 1.0183;

/// Solar semidiameter term of the umbral radius at 1 au, arcseconds
const SOLAR_TERM: f64 = 969.85;

/// Geocentric place of the shadow.
///
/// Arguments
/// ---------
/// * `sun`: geocentric place of the Sun at the same instant.
/// * `moon`: geocentric place of the Moon at the same instant.
/// * `sun_distance`: distance of the Sun in au.
///
/// Return
/// ------
/// * The antisolar point with the Moon's horizontal parallax and the umbral semidiameter
///   `1.0183·π☾ − 969.85″/r☉`.
pub fn position(
    sun: &GeocentricPosition,
    moon: &GeocentricPosition,
    sun_distance: AstronomicalUnit,
) -> GeocentricPosition {
    let hp = moon.horizontal_parallax;
    GeocentricPosition {
        alpha: (sun.alpha + std::f64::consts::PI) % DPI,
        delta: -sun.delta,
        distance: moon.distance,
        horizontal_parallax: hp,
        semi: ATMOSPHERE_FACTOR * hp / RADSEC - SOLAR_TERM / sun_distance,
        mag: 0.0,
        longitude: principal_angle(sun.longitude + std::f64::consts::PI),
    }
}
