//! # Coordinate pipeline
//!
//! Two stages turn the ecliptic state of a body into what the observer sees:
//!
//! 1. [`heliocentric_to_geocentric`] – light-time correction, annual parallax (adding the
//!    Sun's geocentric vector), annual aberration (the Earth's velocity from the frame), the
//!    nutation in longitude, and the rotation from the ecliptic to the true equator.
//! 2. [`geocentric_to_topocentric`] – local hour angle, diurnal parallax on the Earth
//!    ellipsoid, then horizon azimuth and elevation.
//!
//! [`horizon_to_equatorial`] inverts the last step and [`separation`] measures the angle
//! between two samples; both are used by the event search.
//!
//! ## Conventions
//!
//! - Right ascension of a sample in [0, 2π), declination in [−π/2, π/2] (radians).
//! - Azimuth from north through east and elevation, in **degrees**.
//! - Semidiameters in arcseconds.

use nalgebra::{Rotation3, Vector3};

use crate::constants::{ArcSec, AstronomicalUnit, Degree, Radian, RADEG, RADSEC};
use crate::frame::Frame;
use crate::kepler::{principal_angle, pyth};
use crate::orbit_type::OrbitalState;

/// Light time for one astronomical unit, in days
const LIGHT_TIME_AU: f64 = 0.0057756;

/// Equatorial horizontal parallax of the Sun at 1 au, arcseconds
const SOLAR_PARALLAX: ArcSec = 8.794;

/// Bodies farther than this (au) get no distance term in their magnitude.
const MAGNITUDE_DISTANCE_LIMIT: AstronomicalUnit = 2.0e5;

/// Apparent position of a body at one sample instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionSample {
    /// Topocentric right ascension, radians in [0, 2π)
    pub ra: Radian,
    /// Topocentric declination, radians
    pub decl: Radian,
    /// Apparent semidiameter, arcseconds
    pub semi: ArcSec,
    /// Azimuth, degrees from north through east
    pub az: Degree,
    /// Elevation above the horizon, degrees
    pub el: Degree,
    /// Visual magnitude
    pub mag: f64,
    /// Apparent geocentric ecliptic longitude, radians in [0, 2π)
    pub longitude: Radian,
    /// Lunation fraction, `Some` for the Moon only
    pub phase: Option<f64>,
}

/// Geocentric apparent place, referred to the true equator and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPosition {
    pub alpha: Radian,
    pub delta: Radian,
    /// Distance from the geocentre (au; 1 for the Moon, whose size is carried by the parallax)
    pub distance: AstronomicalUnit,
    pub horizontal_parallax: Radian,
    /// Semidiameter seen from the geocentre, arcseconds
    pub semi: ArcSec,
    pub mag: f64,
    /// Apparent ecliptic longitude, radians in [0, 2π)
    pub longitude: Radian,
}

/// Rotation about the x axis of a vector, the ecliptic to equator rotation for `angle = ε`.
pub fn rotation_x(angle: Radian) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle)
}

/// Rectangular vector from longitude, latitude and distance.
pub fn from_spherical(lon: Radian, lat: Radian, r: f64) -> Vector3<f64> {
    let (sl, cl) = lon.sin_cos();
    let (sb, cb) = lat.sin_cos();
    Vector3::new(r * cb * cl, r * cb * sl, r * sb)
}

/// Longitude in (−π, π] and latitude of a rectangular vector.
pub fn to_spherical(v: &Vector3<f64>) -> (Radian, Radian) {
    (v.y.atan2(v.x), v.z.atan2(v.x.hypot(v.y)))
}

/// Geocentric place from an apparent ecliptic direction of date.
///
/// Arguments
/// ---------
/// * `lambda`, `beta`: apparent ecliptic longitude (nutation included) and latitude.
/// * `distance`: geocentric distance.
/// * `obliquity`: true obliquity of date.
/// * `horizontal_parallax`: radians.
/// * `semi`, `mag`: already scaled to the geocentric distance.
pub fn ecliptic_to_geocentric(
    lambda: Radian,
    beta: Radian,
    distance: AstronomicalUnit,
    obliquity: Radian,
    horizontal_parallax: Radian,
    semi: ArcSec,
    mag: f64,
) -> GeocentricPosition {
    let equatorial = rotation_x(obliquity) * from_spherical(lambda, beta, distance);
    let (alpha, delta) = to_spherical(&equatorial);
    GeocentricPosition {
        alpha,
        delta,
        distance,
        horizontal_parallax,
        semi,
        mag,
        longitude: principal_angle(lambda),
    }
}

/// Convert a heliocentric ecliptic state into the geocentric apparent place.
///
/// Steps
/// -----
/// 1. Geometric distance ρ from the Earth, then the light-time shift `λ −= 0.0057756·ρ·λ̇`.
/// 2. Annual parallax: add the Sun's geocentric vector.
/// 3. Annual aberration: subtract `ρ·v` with `v` the scaled Earth velocity of the frame.
/// 4. Add the nutation in longitude, rotate by the true obliquity.
/// 5. Horizontal parallax `8.794″/ρ`, semidiameter `s/ρ`, and for bodies closer than
///    2·10⁵ au the magnitude term `2.17·ln(r·ρ)` (that is, `5·log₁₀(r·ρ)`).
///
/// Arguments
/// ---------
/// * `state`: heliocentric state; a zero radius puts the body at the Sun.
/// * `frame`: the frame of the instant.
///
/// Return
/// ------
/// * The geocentric apparent place.
pub fn heliocentric_to_geocentric(state: &OrbitalState, frame: &Frame) -> GeocentricPosition {
    let sun = frame.sun_vector;

    let rp = (state.cartesian() + sun).norm();
    let lmb2 = state.lambda - LIGHT_TIME_AU * rp * state.motion;

    let mut v = from_spherical(lmb2, state.beta, state.rad) + sun;
    let rp = v.norm();
    v -= frame.earth_velocity * rp;

    let (lmb2, beta2) = to_spherical(&v);
    let lmb2 = lmb2 + frame.nutation.longitude;

    let mut mag = state.mag;
    if state.rad > 0.0 && state.rad < MAGNITUDE_DISTANCE_LIMIT {
        mag += 2.17 * (state.rad * rp).ln();
    }

    ecliptic_to_geocentric(
        lmb2,
        beta2,
        rp,
        frame.true_obliquity,
        SOLAR_PARALLAX * RADSEC / rp,
        state.semi / rp,
        mag,
    )
}

/// Convert a geocentric place into the observer's topocentric sample.
///
/// The diurnal parallax is applied with the geocentric latitude and radius of the observer;
/// the semidiameter grows by the inverse of the resulting topocentric distance ratio.
///
/// Arguments
/// ---------
/// * `geo`: geocentric apparent place.
/// * `frame`: the frame of the instant (sidereal time, corrected longitude, observer).
///
/// Return
/// ------
/// * The topocentric sample, `phase` left empty.
pub fn geocentric_to_topocentric(geo: &GeocentricPosition, frame: &Frame) -> PositionSample {
    let observer = &frame.observer;
    let nlat = observer.latitude();
    let glat = observer.geocentric_latitude();
    let erad = observer.earth_radius();
    let hp = geo.horizontal_parallax;

    let lha = frame.gst - geo.alpha - frame.west_longitude;
    let decl = geo.delta;

    let sa = decl.cos() * lha.sin();
    let ca = decl.cos() * lha.cos() - erad * glat.cos() * hp.sin();
    let sd = decl.sin() - erad * glat.sin() * hp.sin();

    let lha = sa.atan2(ca);
    let decl2 = sd.atan2(sa.hypot(ca));
    let f = (sa * sa + ca * ca + sd * sd).sqrt();

    let sel = nlat.sin() * decl2.sin() + nlat.cos() * decl2.cos() * lha.cos();
    let el = sel.atan2(pyth(sel));
    let saz = lha.sin() * decl2.cos();
    let caz = nlat.cos() * decl2.sin() - nlat.sin() * decl2.cos() * lha.cos();
    let az = std::f64::consts::PI + saz.atan2(-caz);

    PositionSample {
        ra: principal_angle(frame.gst - lha - frame.west_longitude),
        decl: decl2,
        semi: geo.semi / f,
        az: az / RADEG,
        el: el / RADEG,
        mag: geo.mag,
        longitude: geo.longitude,
        phase: None,
    }
}

/// Topocentric right ascension and declination of a horizon direction.
///
/// Inverse of the horizon step of [`geocentric_to_topocentric`].
///
/// Arguments
/// ---------
/// * `az`, `el`: azimuth and elevation in degrees.
/// * `frame`: the frame of the instant.
///
/// Return
/// ------
/// * `(ra, decl)` in radians, `ra` in [0, 2π).
pub fn horizon_to_equatorial(az: Degree, el: Degree, frame: &Frame) -> (Radian, Radian) {
    let nlat = frame.observer.latitude();
    let (az, el) = (az * RADEG, el * RADEG);

    let sd = nlat.sin() * el.sin() + nlat.cos() * el.cos() * az.cos();
    let sh = -el.cos() * az.sin();
    let ch = nlat.cos() * el.sin() - nlat.sin() * el.cos() * az.cos();

    let lha = sh.atan2(ch);
    let decl = sd.atan2(sh.hypot(ch));
    (principal_angle(frame.gst - lha - frame.west_longitude), decl)
}

/// Angular separation of two samples, in arcseconds.
pub fn separation(a: &PositionSample, b: &PositionSample) -> ArcSec {
    let d = a.decl.sin() * b.decl.sin() + a.decl.cos() * b.decl.cos() * (a.ra - b.ra).cos();
    pyth(d).atan2(d).abs() / RADSEC
}
