use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Day, Degree, GAUSS_GRAV, MAX_ECCENTRICITY, RADEG};
use crate::orbit_type::keplerian_element::{MeanElements, Perturbations};
use crate::orbit_type::OrbitalState;
use crate::time::{epoch_to_day, utc_epoch};

/// # Cometary orbital elements
///
/// Perihelion-based elements of the single user-supplied comet, as published in orbit
/// circulars.
///
/// Units & conventions
/// --------------------
/// - `perihelion_time` in **days since 1899-12-31T12:00 UTC**.
/// - Distances in **AU**; angles in **degrees**, ecliptic and equinox J2000.
/// - The small constant offsets applied to `ω` and `Ω` in [`CometElements::heliocentric`]
///   carry the J2000 angles over to the mean equinox of date used by the other models.
///
/// Eccentricities at or above one cannot be handled by the Kepler solver; they are clamped
/// to [`MAX_ECCENTRICITY`], so a parabolic or hyperbolic comet is modelled by a very
/// elongated ellipse.
///
/// See also
/// ------------
/// * [`MeanElements`] – the classical representation the comet is reduced through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CometElements {
    /// Time of perihelion passage `T` (days since 1899-12-31T12:00 UTC).
    pub perihelion_time: Day,

    /// Perihelion distance `q` (AU).
    pub perihelion_distance: AstronomicalUnit,

    /// Eccentricity `e`.
    pub eccentricity: f64,

    /// Inclination `i` (degrees).
    pub inclination: Degree,

    /// Argument of perihelion `ω` (degrees).
    pub perihelion_argument: Degree,

    /// Longitude of the ascending node `Ω` (degrees).
    pub ascending_node: Degree,
}

impl CometElements {
    /// Eccentricity actually used by the orbit, clamped below one.
    pub fn effective_eccentricity(&self) -> f64 {
        self.eccentricity.min(MAX_ECCENTRICITY)
    }

    /// True when the eccentricity had to be clamped.
    pub fn is_clamped(&self) -> bool {
        self.eccentricity > MAX_ECCENTRICITY
    }

    /// Heliocentric ecliptic state of the comet at an ephemeris day.
    ///
    /// The mean anomaly grows linearly from perihelion with the Gaussian mean motion
    /// `n = k·a^(−3/2)` of the ellipse `a = q / (1 − e)`. The total magnitude follows
    /// `H = 5.47 + 2.65·ln r` (a `6.1·log r` activity law); the comet has no disk.
    ///
    /// Arguments
    /// ---------
    /// * `eday`: ephemeris days since 1899-12-31T12:00.
    ///
    /// Return
    /// ------
    /// * The heliocentric state of the comet.
    pub fn heliocentric(&self, eday: Day) -> OrbitalState {
        let ecc = self.effective_eccentricity();
        let semi_major_axis = self.perihelion_distance / (1.0 - ecc);
        let daily_motion = GAUSS_GRAV * (1.0 / semi_major_axis.powi(3)).sqrt() / RADEG;

        let elements = MeanElements {
            semi_major_axis,
            eccentricity: ecc,
            inclination: self.inclination * RADEG,
            node: (self.ascending_node + 0.4593) * RADEG,
            perihelion: (self.perihelion_argument + self.ascending_node + 0.4066) * RADEG,
            mean_anomaly: (eday - self.perihelion_time) * daily_motion * RADEG,
            daily_motion,
        };

        let mut state = elements.heliocentric(&Perturbations::default());
        state.semi = 0.0;
        state.mag = 5.47 + 6.1 / 2.303 * state.rad.ln();
        state
    }
}

impl Default for CometElements {
    /// 153P/Ikeya–Zhang, perihelion 2002-03-18.
    fn default() -> Self {
        CometElements {
            perihelion_time: epoch_to_day(&utc_epoch(2002, 3, 18, 23, 28, 53.76)),
            perihelion_distance: 0.5070601,
            eccentricity: 0.990111,
            inclination: 28.12106,
            perihelion_argument: 34.6666,
            ascending_node: 93.1206,
        }
    }
}

impl fmt::Display for CometElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Comet Elements @ perihelion (day): {:.6}",
            self.perihelion_time
        )?;
        writeln!(f, "------------------------------------------------")?;
        writeln!(
            f,
            "  q   (perihelion distance)     = {:.6} AU",
            self.perihelion_distance
        )?;
        writeln!(f, "  e   (eccentricity)            = {:.6}", self.eccentricity)?;
        writeln!(f, "  i   (inclination)             = {:.6}°", self.inclination)?;
        writeln!(
            f,
            "  ω   (argument of perihelion)  = {:.6}°",
            self.perihelion_argument
        )?;
        write!(f, "  Ω   (longitude of node)       = {:.6}°", self.ascending_node)
    }
}
