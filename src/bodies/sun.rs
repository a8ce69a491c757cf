//! Newcomb's theory of the Sun.
//!
//! The Sun is the degenerate case of the orbital models: the theory gives its geocentric
//! ecliptic longitude, latitude and distance directly, and the coordinate pipeline sees it as
//! a body at zero heliocentric distance.

use crate::constants::{Day, LN_10, RADEG, RADSEC};
use crate::earth_orientation::Centuries;
use crate::kepler::principal_angle;
use crate::orbit_type::OrbitalState;
use crate::series::{cos_series, sin_series};
use crate::tables::sun as table;

/// Semidiameter of the Sun at 1 au, arcseconds
pub const SEMIDIAMETER: f64 = 961.182;

/// Semidiameter used for occultation predictions (the limb-darkened edge)
pub const OCCULTATION_SEMIDIAMETER: f64 = 959.63;

/// Visual magnitude of the Sun
pub const MAGNITUDE: f64 = -26.5;

/// Geocentric ecliptic orbit of the Sun, mean equinox of date.
///
/// Arguments
/// ---------
/// * `eday`: ephemeris day of the evaluation.
/// * `capt`: century powers; the aberration finite difference passes those of the frame
///   instant even when `eday` is shifted.
/// * `occultation_mode`: selects [`OCCULTATION_SEMIDIAMETER`].
///
/// Return
/// ------
/// * λ in [0, 2π), β, the distance in au, the mean daily motion and the photometric constants.
pub fn geocentric_orbit(eday: Day, capt: &Centuries, occultation_mode: bool) -> OrbitalState {
    let Centuries { t, t2, t3 } = *capt;

    let ecc = 0.01675104 - 4.180e-5 * t - 1.26e-7 * t2;
    let argp = (281.220833 + 0.0000470684 * eday + 0.000453 * t2 + 0.000003 * t3) * RADEG;
    let mut anom = 358.475845 + 0.9856002670 * eday - 0.000150 * t2 - 0.000003 * t3;
    let motion = 0.9856473354;

    let dmoon = ((350.737681 + 12.1907491914 * eday - 0.001436 * t2) % 360.0) * RADEG;
    let gmoon = ((11.250889 + 13.2293504490 * eday - 0.003212 * t2) % 360.0) * RADEG;
    let mmoon = ((296.104608 + 13.0649924465 * eday + 9.192e-3 * t2) % 360.0) * RADEG;
    let mven = (212.448 + 1.602121635 * eday) * RADEG;
    let merth = (358.476 + 0.985600267 * eday) * RADEG;
    let mmars = (319.590 + 0.524024095 * eday) * RADEG;
    let mjup = (225.269 + 0.083082362 * eday) * RADEG;
    let msat = (175.593 + 0.033450794 * eday) * RADEG;

    let planets4 = [mmars, merth, mven, mjup];
    let planets5 = [mmars, merth, mven, mjup, msat];
    let lunar = [dmoon, mmoon, merth];

    anom += cos_series(&table::ANOMALY_COS, &planets4) / 3600.0;
    anom += sin_series(&table::ANOMALY_SIN, &[mmars, merth, mven, mjup, 0.07884 * t]) / 3600.0;
    let anom = (anom % 360.0) * RADEG;

    // equation of the centre
    let centre = (6910.057 - 17.240 * t - 0.052 * t2) * anom.sin()
        + (72.338 - 0.361 * t) * (2.0 * anom).sin()
        + (1.054 - 0.001 * t) * (3.0 * anom).sin()
        + 0.018 * (4.0 * anom).sin();
    let mut lambda = anom + argp + centre * RADSEC;

    let lograd = (30.57e-6 - 0.15e-6 * t)
        - (7274.12e-6 - 18.14e-6 * t - 0.05e-6 * t2) * anom.cos()
        - (91.38e-6 - 0.46e-6 * t) * (2.0 * anom).cos()
        - (1.45e-6 - 0.01e-6 * t) * (3.0 * anom).cos()
        - 0.02e-6 * (4.0 * anom).cos();

    let pturbl = cos_series(&table::LONGITUDE_PLANETARY, &planets5)
        + sin_series(&table::LONGITUDE_LUNAR, &lunar)
        + 0.9;
    let pturbb = cos_series(&table::LATITUDE_PLANETARY, &[merth, mven, mjup])
        + sin_series(&table::LATITUDE_LUNAR, &[gmoon, mmoon, dmoon]);
    let pturbr = cos_series(&table::RADIUS_PLANETARY, &planets5)
        + cos_series(&table::RADIUS_LUNAR, &lunar);

    lambda += pturbl * RADSEC;
    let beta = pturbb * RADSEC;

    // exp(ln 10 · log r), third order
    let x = (lograd + pturbr) * LN_10;
    let rad = 1.0 + x * (1.0 + x * (0.5 + x / 6.0));

    OrbitalState {
        lambda: principal_angle(lambda),
        beta,
        rad,
        motion: motion * RADEG / (rad * rad),
        semi: if occultation_mode {
            OCCULTATION_SEMIDIAMETER
        } else {
            SEMIDIAMETER
        },
        mag: MAGNITUDE,
    }
}

/// Heliocentric state of the Sun handed to the coordinate pipeline.
///
/// The Sun sits at the origin: the pipeline then reduces to the frame's Sun vector with
/// aberration, nutation and the equatorial rotation applied.
pub fn pipeline_state(orbit: &OrbitalState) -> OrbitalState {
    OrbitalState {
        lambda: 0.0,
        beta: 0.0,
        rad: 0.0,
        motion: 0.0,
        semi: orbit.semi,
        mag: orbit.mag,
    }
}
