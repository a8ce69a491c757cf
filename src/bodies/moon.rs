//! Brown's lunar theory.
//!
//! The Moon is computed geocentrically: the four principal arguments (mean anomaly l of the
//! Moon, mean anomaly l' of the Sun, argument of latitude F, elongation D) drive five named
//! series of [`crate::tables::moon`], rescaled by the correction factors k₁…k₆ that move the
//! 1919 coefficients to modern eccentricities, inclination and parallax constant.
//!
//! Long-period arguments first correct the mean elements (additive terms in arcseconds),
//! the series then give longitude, latitude and parallax, and the result goes straight to the
//! equatorial rotation, skipping the heliocentric stage.

use tracing::trace;

use crate::constants::{Degree, RADEG, RADSEC};
use crate::frame::Frame;
use crate::ref_system::{ecliptic_to_geocentric, GeocentricPosition};
use crate::tables::moon::{self as table, MoonTerm};

/// Latitude offset applied in occultation mode, arcseconds
const OCCULTATION_LATITUDE_OFFSET: f64 = 0.6;

/// Geocentric place of the Moon and its lunation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    pub geocentric: GeocentricPosition,
    /// Fraction of the synodic month elapsed since new moon, in [0, 1)
    pub lunation: f64,
}

/// Mean arguments of the theory, in degrees.
struct Arguments {
    /// Mean anomaly of the Moon l
    mnom: Degree,
    /// Mean anomaly of the Sun l'
    msun: Degree,
    /// Argument of latitude F
    noded: Degree,
    /// Mean elongation D
    dmoon: Degree,
}

/// Rescaling of Brown's amplitudes.
struct Scale {
    k1: f64,
    k2: f64,
    k3: f64,
    k4: f64,
}

impl Scale {
    fn term(&self, term: &MoonTerm, args: &Arguments, angle: Degree, f: fn(f64) -> f64) -> f64 {
        let [i, j, k, m] = term.multipliers;
        let x = f64::from(i) * args.mnom
            + f64::from(j) * args.msun
            + f64::from(k) * args.noded
            + f64::from(m) * args.dmoon
            + angle;
        let mut value = term.coefficient * f(x * RADEG);
        value *= self.k1.powi(i.abs());
        value *= self.k2.powi(j.abs());
        value *= self.k3.powi(k.abs());
        if m % 2 != 0 {
            value *= self.k4;
        }
        value
    }

    fn series(&self, terms: &[MoonTerm], args: &Arguments, f: fn(f64) -> f64) -> f64 {
        terms.iter().map(|t| self.term(t, args, 0.0, f)).sum()
    }
}

/// IEEE remainder: `x − 360·round_even(x/360)`, in [−180, 180].
fn remainder_360(x: Degree) -> Degree {
    x - 360.0 * (x / 360.0).round_ties_even()
}

/// Visual magnitude of the Moon for a mean elongation in degrees, after Allen's phase law.
///
/// `i = |180° − D|` stands in for the phase angle.
pub fn magnitude(elongation: Degree) -> f64 {
    let i = (180.0 - elongation).abs();
    -12.73 + 0.026 * i + 4.0e-9 * i.powi(4)
}

/// Geocentric apparent place of the Moon.
///
/// Arguments
/// ---------
/// * `frame`: the frame of the instant; in occultation mode the latitude is lowered by 0.6″.
///
/// Return
/// ------
/// * The place with the Moon's parallax, semidiameter and magnitude, and the lunation.
pub fn position(frame: &Frame) -> LunarPosition {
    let eday = frame.eday;
    let capt = frame.capt;
    let (t, t2, t3) = (capt.t, capt.t2, capt.t3);

    let mut dlong = (270.434164 + 13.1763965268 * eday - 0.001133 * t2 + 2.0e-6 * t3) % 360.0;
    let mut argp = (334.329556 + 0.1114040803 * eday - 0.010325 * t2 - 12.0e-6 * t3) % 360.0;
    let mut node = remainder_360(259.183275 - 0.0529539222 * eday + 0.002078 * t2 + 2.0e-6 * t3);
    let lsun = (279.696678 + 0.9856473354 * eday + 0.000303 * t2) % 360.0;

    let eccm = 22639.550;
    let eccs = 0.01675104 - 0.00004180 * t;
    let cpe = 124.986;
    let chp = 3422.451;

    // mean longitudes of Venus, the Earth, Mars and Jupiter
    let v0 = 342.069128 + 1.6021304820 * eday;
    let mut t0 = 98.998753 + 0.9856091138 * eday;
    let m0 = 293.049675 + 0.5240329445 * eday;
    let mut j0 = 237.352319 + 0.0830912295 * eday;

    let c = t + 0.5;
    let a = [
        41.1 + 20.2 * c,
        dlong - argp + 33.0 + 3.0 * t0 - 10.0 * v0 - 2.6 * c,
        dlong - argp + 151.1 + 16.0 * t0 - 18.0 * v0 - c,
        node,
        node + 276.2 - 2.3 * c,
        313.9 + 13.0 * t0 - 8.0 * v0,
        dlong - argp + 112.0 + 29.0 * t0 - 26.0 * v0,
        dlong + argp - 2.0 * lsun + 273.0 + 21.0 * t0 - 20.0 * v0,
        node + 290.1 - 0.9 * c,
        115.0 + 38.5 * c,
    ]
    .map(|x| x * RADEG);
    let s = |k: usize| a[k].sin();

    // long-period corrections of the mean elements
    dlong += (0.84 * s(0)
        + 0.31 * s(1)
        + 14.27 * s(2)
        + 7.261 * s(3)
        + 0.282 * s(4)
        + 0.237 * s(5)
        + 0.108 * s(6)
        + 0.126 * s(7))
        / 3600.0;
    argp += (-2.10 * s(0) - 0.118 * s(2) - 2.076 * s(3) - 0.840 * s(4) - 0.593 * s(5)) / 3600.0;
    node += (0.63 * s(0) + 0.17 * s(2) + 95.96 * s(3) + 15.58 * s(4) + 1.86 * s(8)) / 3600.0;
    t0 += (-6.40 * s(0) - 1.89 * s(5)) / 3600.0;
    let psun = (281.220833 + 0.0000470684 * eday + 0.000453 * t2 + 3.0e-6 * t3) % 360.0
        + (6.40 * s(0) + 1.89 * s(5)) / 3600.0;
    let dgamma = -4.318 * a[3].cos() - 0.698 * a[4].cos() - 0.083 * a[8].cos();
    j0 += 0.33 * s(9);

    let scale = Scale {
        k1: eccm / 22639.500,
        k2: eccs / 0.01675104,
        k3: 1.0 + 2.708e-6 + 0.000108008 * dgamma,
        k4: cpe / 125.154,
    };
    let k5 = chp / 3422.700;

    let args = Arguments {
        mnom: dlong - argp,
        msun: lsun - psun,
        noded: dlong - node,
        dmoon: dlong - lsun,
    };

    let planets = [t0, v0, j0, m0, node];
    let mut lterms = scale.series(&table::LONGITUDE, &args, f64::sin);
    for term in table::LONGITUDE_PLANETARY.iter() {
        let angle = term
            .planets
            .iter()
            .zip(planets)
            .fold(term.phase, |acc, (&n, x)| acc + f64::from(n) * x);
        let solar = MoonTerm {
            coefficient: term.coefficient,
            multipliers: term.multipliers,
        };
        lterms += scale.term(&solar, &args, angle, f64::sin);
    }
    trace!(eday, lterms, "lunar longitude terms");

    let sterms = scale.series(&table::LATITUDE_ARGUMENT, &args, f64::sin);
    let cterms = scale.series(&table::LATITUDE_FACTOR, &args, f64::cos);
    let nterms = scale.series(&table::LATITUDE_NODE, &args, f64::sin);
    let pterms = 0.215 * (dlong * RADEG).sin();
    let spterms = 3422.700 + scale.series(&table::PARALLAX, &args, f64::cos);

    let lambda = (dlong + lterms / 3600.0) * RADEG;
    let arglat = (args.noded + sterms / 3600.0) * RADEG;

    let k3 = scale.k3;
    let gamma1 = 18519.700 * k3;
    let gamma2 = -6.241 * k3 * k3 * k3;
    let gamma3 = 0.004 * k3.powi(5);
    let k6 = (gamma1 + cterms) / gamma1;

    let mut beta = k6
        * (gamma1 * arglat.sin()
            + gamma2 * (3.0 * arglat).sin()
            + gamma3 * (5.0 * arglat).sin()
            + nterms)
        + pterms;
    if frame.occultation_mode {
        beta -= OCCULTATION_LATITUDE_OFFSET;
    }
    let beta = beta * RADSEC;

    let sp = k5 * spterms * RADSEC;
    let hp = sp + sp * sp * sp / 6.0;
    let semi = 0.0799 + 0.272453 * (hp / RADSEC);

    let elongation = if args.dmoon < 0.0 {
        args.dmoon + 360.0
    } else {
        args.dmoon
    };

    let geocentric = ecliptic_to_geocentric(
        lambda + frame.nutation.longitude,
        beta,
        1.0,
        frame.true_obliquity,
        hp,
        semi,
        magnitude(elongation),
    );

    LunarPosition {
        geocentric,
        lunation: elongation / 360.0,
    }
}
