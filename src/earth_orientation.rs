use crate::constants::{ArcSec, Day, Radian, DAYS_PER_CENTURY, DPI, RADEG, RADSEC};
use crate::series::{cos_series, sin_series};
use crate::tables::nutation;

/// Tropical centuries since 1899-12-31T12:00 and their powers.
///
/// Every mean-element polynomial of the crate is written in these units, so they are
/// computed once per ephemeris instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centuries {
    pub t: f64,
    pub t2: f64,
    pub t3: f64,
}

impl Centuries {
    /// Build the century powers of an ephemeris day.
    pub fn from_ephemeris_day(eday: Day) -> Self {
        let t = eday / DAYS_PER_CENTURY;
        Centuries {
            t,
            t2: t * t,
            t3: t * t * t,
        }
    }
}

/// Nutation angles, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ
    pub longitude: Radian,
    /// Nutation in obliquity Δε
    pub obliquity: Radian,
}

/// Compute the nutation in longitude and obliquity.
///
/// The pole of the Earth's rotation wobbles around its mean position with an amplitude of
/// about 9″ and a main period of 18.6 years, driven by the pull of the Sun and the Moon on
/// the equatorial bulge. The angles are truncated series of the Moon's mean anomaly l, the
/// Sun's mean anomaly l', the Moon's argument of latitude F, its elongation D and the node Ω
/// (Explanatory Supplement, pp. 44-45).
///
/// Arguments
/// ---------
/// * `eday`: ephemeris days since 1899-12-31T12:00.
/// * `capt`: the matching century powers.
///
/// Return
/// ------
/// * The nutation angles (Δψ, Δε) in radians.
///
/// # See also
/// * [`sidereal_time`] – applies the equation of the equinoxes built from Δψ
pub fn nutation(eday: Day, capt: &Centuries) -> Nutation {
    let Centuries { t, t2, t3 } = *capt;

    let mnom = (296.104608 + 13.0649924465 * eday + 9.192e-3 * t2 + 14.38e-6 * t3) * RADEG;
    let msun = (358.475833 + 0.9856002669 * eday - 0.150e-3 * t2 - 3.33e-6 * t3) * RADEG;
    let noded = (11.250889 + 13.2293504490 * eday - 3.211e-3 * t2 - 0.33e-6 * t3) * RADEG;
    let dmoon = (350.737486 + 12.1907491914 * eday - 1.436e-3 * t2 + 1.89e-6 * t3) * RADEG;
    let node = (259.183275 - 0.0529539222 * eday + 2.078e-3 * t2 + 2.22e-6 * t3) * RADEG;

    let long_args = [node, noded, dmoon, msun];

    // long-period terms
    let phi: ArcSec = -(17.2327 + 0.01737 * t) * node.sin()
        + sin_series(&nutation::LONGITUDE, &long_args);
    let eps: ArcSec = cos_series(&nutation::OBLIQUITY, &long_args);

    // short-period terms
    let dphi: ArcSec = sin_series(&nutation::LONGITUDE_SHORT, &[node, noded, mnom, dmoon]);
    let deps: ArcSec = cos_series(&nutation::OBLIQUITY_SHORT, &[node, noded, mnom]);

    Nutation {
        longitude: (phi + dphi) * RADSEC,
        obliquity: (eps + deps) * RADSEC,
    }
}

/// Mean obliquity of the ecliptic, cubic in tropical centuries since 1900.
///
/// ```text
/// ε = 23.452294° − 0.0130125°·T − 1.64e-6°·T² + 0.503e-6°·T³
/// ```
pub fn mean_obliquity(capt: &Centuries) -> Radian {
    (23.452294 - 0.0130125 * capt.t - 1.64e-6 * capt.t2 + 0.503e-6 * capt.t3) * RADEG
}

/// Apparent Greenwich sidereal time, in radians within [0, 2π) before the equation of the
/// equinoxes is added.
///
/// Arguments
/// ---------
/// * `eday`: ephemeris days since 1899-12-31T12:00.
/// * `capt`: the matching century powers.
/// * `nutation_longitude`: Δψ in radians.
/// * `mean_obliquity`: mean obliquity in radians.
///
/// Return
/// ------
/// * Mean sidereal time plus `Δψ·cos ε`.
pub fn sidereal_time(
    eday: Day,
    capt: &Centuries,
    nutation_longitude: Radian,
    mean_obliquity: Radian,
) -> Radian {
    let mut gst = 99.690983 + 360.9856473354 * eday + 0.000387 * capt.t2 - 180.0;
    gst %= 360.0;
    if gst < 0.0 {
        gst += 360.0;
    }
    gst * RADEG + nutation_longitude * mean_obliquity.cos()
}

/// Local sidereal time for an observer at the given west longitude, in [0, 2π).
pub fn local_sidereal_time(gst: Radian, west_longitude: Radian) -> Radian {
    (gst - west_longitude).rem_euclid(DPI)
}

#[cfg(test)]
mod earth_orientation_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_obliquity_j2000() {
        // J2000.0 is 36525 days after the time origin
        let capt = Centuries::from_ephemeris_day(36525.0);
        let obliq = mean_obliquity(&capt).to_degrees();
        // IAU value 23°26'21.4"
        assert_abs_diff_eq!(obliq, 23.439291, epsilon = 2e-4);
    }

    #[test]
    fn test_nutation_magnitude() {
        // sweep one nodal period: |Δψ| stays below 20″, |Δε| below 10″
        for k in 0..200 {
            let eday = 36525.0 + f64::from(k) * 34.0;
            let capt = Centuries::from_ephemeris_day(eday);
            let nut = nutation(eday, &capt);
            assert!(nut.longitude.abs() / RADSEC < 20.0);
            assert!(nut.obliquity.abs() / RADSEC < 10.0);
        }
    }

    #[test]
    fn test_sidereal_time_j2000() {
        // GMST at 2000-01-01T12:00 UT is 280.46°
        let capt = Centuries::from_ephemeris_day(36525.0);
        let gst = sidereal_time(36525.0, &capt, 0.0, mean_obliquity(&capt));
        assert_abs_diff_eq!(gst.to_degrees(), 280.46, epsilon = 0.02);
    }

    #[test]
    fn test_local_sidereal_time_wraps() {
        let lst = local_sidereal_time(0.1, 0.5);
        assert!((0.0..DPI).contains(&lst));
        assert_abs_diff_eq!(lst, DPI - 0.4, epsilon = 1e-15);
    }
}
