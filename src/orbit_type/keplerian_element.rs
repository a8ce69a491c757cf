use crate::constants::{AstronomicalUnit, Degree, Radian, LN_10, RADEG};
use crate::kepler::{principal_angle, pyth, solve_kepler, true_anomaly};
use crate::orbit_type::OrbitalState;

/// # Mean orbital elements
///
/// Osculating-like elements of a planet or comet at one instant, referred to the mean
/// ecliptic and equinox of date.
///
/// Units & conventions
/// --------------------
/// - Distances in **AU**; angles in **radians**.
/// - `perihelion` is the **longitude** of perihelion ϖ = Ω + ω, as the classical planetary
///   theories tabulate it.
/// - `daily_motion` is the mean motion in **degrees per day**, converted to the apparent
///   angular rate of the light-time correction by [`MeanElements::heliocentric`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub node: Radian,
    pub perihelion: Radian,
    pub mean_anomaly: Radian,
    pub daily_motion: Degree,
}

/// Periodic corrections applied on top of the elliptic motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Perturbations {
    /// Added to the orbital longitude before the reduction to the ecliptic (radians)
    pub longitude: Radian,
    /// Added to the ecliptic latitude after the reduction (radians)
    pub latitude: Radian,
    /// Decimal logarithm of the radius-vector correction
    pub log_radius: f64,
}

impl MeanElements {
    /// Solve the elliptic motion and reduce it to the ecliptic.
    ///
    /// Steps
    /// -----
    /// 1. Solve Kepler's equation for E, convert to true anomaly ν, `r = a·(1 − e·cos E)`.
    /// 2. Orbital longitude `u = ν + ϖ + δλ`.
    /// 3. Reduce to the ecliptic: `λ = Ω + atan2(sin(u−Ω)·cos i, cos(u−Ω))`,
    ///    `β = asin(sin i·sin(u−Ω)) + δβ`.
    /// 4. Scale the radius by `1 + ln(10)·δlog r` and the angular rate by `a²/r²`.
    ///
    /// Arguments
    /// ---------
    /// * `perturbations`: periodic corrections of the body (zero for pure Keplerian motion).
    ///
    /// Return
    /// ------
    /// * The heliocentric state, with `semi` and `mag` left at zero for the caller.
    pub fn heliocentric(&self, perturbations: &Perturbations) -> OrbitalState {
        let ecc = self.eccentricity;
        let enom = solve_kepler(self.mean_anomaly, ecc);
        let vnom = true_anomaly(enom, ecc);
        let mut rad = self.semi_major_axis * (1.0 - ecc * enom.cos());

        let lambda = vnom + self.perihelion + perturbations.longitude;
        let nd = lambda - self.node;
        let lambda = self.node + (nd.sin() * self.inclination.cos()).atan2(nd.cos());
        let sl = self.inclination.sin() * nd.sin();
        let beta = sl.atan2(pyth(sl)) + perturbations.latitude;

        rad *= 1.0 + perturbations.log_radius * LN_10;
        let motion =
            self.daily_motion * RADEG * self.semi_major_axis * self.semi_major_axis / (rad * rad);

        OrbitalState {
            lambda: principal_angle(lambda),
            beta,
            rad,
            motion,
            semi: 0.0,
            mag: 0.0,
        }
    }
}

/// Reduce a mean anomaly given in degrees to radians in [0, 2π).
pub(crate) fn mean_anomaly_from_degrees(anom: Degree) -> Radian {
    (anom % 360.0) * RADEG
}

#[cfg(test)]
mod keplerian_element_test {
    use super::*;
    use approx::assert_relative_eq;

    fn circular(inclination: Radian) -> MeanElements {
        MeanElements {
            semi_major_axis: 2.0,
            eccentricity: 0.0,
            inclination,
            node: 0.3,
            perihelion: 0.5,
            mean_anomaly: 1.0,
            daily_motion: 0.25,
        }
    }

    #[test]
    fn test_circular_equatorial_orbit() {
        let state = circular(0.0).heliocentric(&Perturbations::default());
        assert_relative_eq!(state.lambda, 1.5, epsilon = 1e-14);
        assert_eq!(state.beta, 0.0);
        assert_relative_eq!(state.rad, 2.0, epsilon = 1e-15);
        assert_relative_eq!(state.motion, 0.25 * RADEG, epsilon = 1e-15);
    }

    #[test]
    fn test_latitude_bounded_by_inclination() {
        let incl = 0.2;
        for k in 0..36 {
            let mut el = circular(incl);
            el.mean_anomaly = f64::from(k) * 10.0 * RADEG;
            let state = el.heliocentric(&Perturbations::default());
            assert!(state.beta.abs() <= incl + 1e-14);
            assert!((0.0..crate::constants::DPI).contains(&state.lambda));
        }
    }

    #[test]
    fn test_log_radius_perturbation() {
        let p = Perturbations {
            log_radius: 1e-4,
            ..Default::default()
        };
        let state = circular(0.0).heliocentric(&p);
        assert_relative_eq!(state.rad, 2.0 * (1.0 + 1e-4 * LN_10), epsilon = 1e-15);
    }

    #[test]
    fn test_mean_anomaly_reduction() {
        assert_relative_eq!(mean_anomaly_from_degrees(370.0), 10.0 * RADEG, epsilon = 1e-13);
    }
}
