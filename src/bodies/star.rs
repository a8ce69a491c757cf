//! Catalog stars.
//!
//! Mean places at B1950 are brought to the mean ecliptic of date (E-terms of aberration,
//! proper motion, precession), then enter the common coordinate pipeline as very distant
//! bodies. The magnitude stays the catalog one.

use crate::catalog::CatalogStar;
use crate::constants::{Day, RADEG, TROPICAL_YEAR};
use crate::frame::Frame;
use crate::kepler::principal_angle;
use crate::orbit_type::OrbitalState;
use crate::ref_system::{heliocentric_to_geocentric, GeocentricPosition};

/// Epoch of the catalog places (B1950.0), in days since 1899-12-31T12:00
pub const CATALOG_EPOCH: Day = 50.0 * TROPICAL_YEAR + 0.313;

/// Distance given to stars without parallax, au
const NO_PARALLAX_DISTANCE: f64 = 1.0e9;

/// Half-width of the band around the Moon's orbit where occultations can happen
const BELT_HALF_WIDTH: f64 = 0.0183;

/// Mean ecliptic state of a catalog star at the frame's ephemeris day.
///
/// Arguments
/// ---------
/// * `star`: the catalog record.
/// * `frame`: supplies the ephemeris day and the mean obliquity.
///
/// Return
/// ------
/// * The state with `rad = 20600 / parallax` au (10⁹ au without parallax), no motion and
///   no disk.
pub fn mean_ecliptic_state(star: &CatalogStar, frame: &Frame) -> OrbitalState {
    let eday = frame.eday;
    let mut alpha = star.ra_hours;
    let mut delta = star.declination;

    // E-terms of aberration
    alpha += (0.341 / (3600.0 * 15.0)) * ((alpha + 11.26) * 15.0 * RADEG).sin()
        / (delta * RADEG).cos();
    delta += (0.341 / 3600.0) * ((alpha + 11.26) * 15.0 * RADEG).cos() * (delta * RADEG).sin()
        - (0.029 / 3600.0) * (delta * RADEG).cos();

    let tau = (eday - CATALOG_EPOCH) / TROPICAL_YEAR;
    alpha += tau * star.ra_proper_motion / 3600.0;
    delta += tau * star.dec_proper_motion / 3600.0;
    let alpha = alpha * 15.0 * RADEG;
    let delta = delta * RADEG;

    let mut xm = delta.cos() * alpha.cos();
    let mut ym = delta.cos() * alpha.sin();
    let mut zm = delta.sin();

    // precession from the catalog epoch
    let capt0 = (CATALOG_EPOCH - 18262.427) / 36524.220;
    let capt1 = (eday - CATALOG_EPOCH) / 36524.220;
    let capt12 = capt1 * capt1;
    let capt13 = capt12 * capt1;
    let xx = -(0.00029696 + 26.0e-8 * capt0) * capt12 - 13.0e-8 * capt13;
    let yx = -(0.02234941 + 1355.0e-8 * capt0) * capt1 - 676.0e-8 * capt12 + 221.0e-8 * capt13;
    let zx = -(0.00971690 - 414.0e-8 * capt0) * capt1 + 207.0e-8 * capt12 + 96.0e-8 * capt13;
    let yy = -(0.00024975 + 30.0e-8 * capt0) * capt12 - 15.0e-8 * capt13;
    let zy = -(0.00010858 + 2.0e-8 * capt0) * capt12;
    let zz = -(0.00004721 - 4.0e-8 * capt0) * capt12;
    let dxm = xx * xm + yx * ym + zx * zm;
    let dym = -yx * xm + yy * ym + zy * zm;
    let dzm = -zx * xm + zy * ym + zz * zm;
    xm += dxm;
    ym += dym;
    zm += dzm;

    let alpha = ym.atan2(xm);
    let delta = zm.atan2(xm.hypot(ym));
    let (sin_ob, cos_ob) = frame.mean_obliquity.sin_cos();
    let cl = delta.cos() * alpha.cos();
    let sl = delta.cos() * alpha.sin() * cos_ob + delta.sin() * sin_ob;
    let sb = -delta.cos() * alpha.sin() * sin_ob + delta.sin() * cos_ob;

    OrbitalState {
        lambda: principal_angle(sl.atan2(cl)),
        beta: sb.atan2(cl.hypot(sl)),
        rad: if star.parallax != 0.0 {
            20600.0 / star.parallax
        } else {
            NO_PARALLAX_DISTANCE
        },
        motion: 0.0,
        semi: 0.0,
        mag: star.magnitude,
    }
}

/// Whether a mean ecliptic direction lies in the band the Moon can cover.
pub fn in_ecliptic_belt(state: &OrbitalState, eday: Day) -> bool {
    let s = 0.0896833 * state.beta.cos() * (state.lambda - 1.3820 + 0.00092422117 * eday).sin()
        + 0.99597 * state.beta.sin();
    s.abs() <= BELT_HALF_WIDTH
}

/// Geocentric apparent place of a catalog star, catalog magnitude kept.
pub fn position(star: &CatalogStar, frame: &Frame) -> GeocentricPosition {
    let state = mean_ecliptic_state(star, frame);
    GeocentricPosition {
        mag: star.magnitude,
        ..heliocentric_to_geocentric(&state, frame)
    }
}

#[cfg(test)]
mod star_test {
    use super::*;
    use crate::observers::Observer;
    use approx::assert_abs_diff_eq;

    fn regulus() -> CatalogStar {
        CatalogStar {
            id: "098967".into(),
            ra_hours: 10.0 + 5.0 / 60.0 + 42.645 / 3600.0,
            declination: 12.0 + 12.0 / 60.0 + 44.53 / 3600.0,
            ra_proper_motion: -0.017,
            dec_proper_motion: 0.001,
            parallax: 0.0,
            magnitude: 1.35,
        }
    }

    #[test]
    fn test_catalog_epoch() {
        assert_abs_diff_eq!(CATALOG_EPOCH, 18262.423, epsilon = 1e-3);
    }

    #[test]
    fn test_regulus_at_j2000() {
        let frame = Frame::new(36525.0, 64.0, Observer::default(), false);
        let state = mean_ecliptic_state(&regulus(), &frame);
        assert_abs_diff_eq!(state.lambda.to_degrees(), 149.8289, epsilon = 1e-3);
        assert_abs_diff_eq!(state.beta.to_degrees(), 0.4647, epsilon = 1e-3);
        assert_eq!(state.rad, 1.0e9);
        // Regulus lies close to the ecliptic but outside the lunar belt of this date
        assert!(!in_ecliptic_belt(&state, frame.eday));

        let geo = position(&regulus(), &frame);
        // apparent place, within a few seconds of the J2000 mean place 10h08m22s +11°58′
        assert_abs_diff_eq!(geo.alpha.to_degrees() / 15.0, 10.13948, epsilon = 1e-4);
        assert_abs_diff_eq!(geo.delta.to_degrees(), 11.96644, epsilon = 1e-4);
        assert_eq!(geo.mag, 1.35);
        assert_eq!(geo.semi, 0.0);
    }

    #[test]
    fn test_parallax_distance() {
        let frame = Frame::new(36525.0, 0.0, Observer::default(), false);
        let star = CatalogStar {
            parallax: 42.0,
            ..regulus()
        };
        let state = mean_ecliptic_state(&star, &frame);
        assert_abs_diff_eq!(state.rad, 20600.0 / 42.0, epsilon = 1e-9);
    }
}
