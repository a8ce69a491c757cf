use std::f64::consts::PI;

use crate::constants::{Radian, CONVERGE, DPI};

/// Return the principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: Radian) -> Radian {
    let r = a.rem_euclid(DPI);
    // rem_euclid may round up to exactly 2π for tiny negative inputs
    if r >= DPI {
        0.0
    } else {
        r
    }
}

/// Return an angle wrapped into (−π, π].
pub fn pinorm(a: Radian) -> Radian {
    let r = PI - (PI - a).rem_euclid(DPI);
    if r <= -PI {
        r + DPI
    } else {
        r
    }
}

/// Return √(1 − x²), with x² clamped to 1.
///
/// Cosine of an angle from its sine (or the reverse) without a NaN when rounding pushes
/// |x| slightly above one.
#[inline]
pub fn pyth(x: f64) -> f64 {
    (1.0 - (x * x).min(1.0)).sqrt()
}

/// Solve Kepler's equation `M = E − e·sin E` for the eccentric anomaly.
///
/// Starting from `E₀ = M + e·sin M`, the Newton correction
/// `δ = (M − E + e·sin E) / (1 − e·cos E)` is applied until `|δ| ≤ 1e-14`.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M in radians.
/// * `eccentricity`: eccentricity, `0 ≤ e < 1`.
///
/// Return
/// ------
/// * The eccentric anomaly E in radians.
///
/// Remarks
/// -------
/// There is no iteration cap: convergence is a caller contract that holds for elliptic
/// orbits. Parabolic and hyperbolic inputs must be clamped below one beforehand, see
/// [`MAX_ECCENTRICITY`](crate::constants::MAX_ECCENTRICITY).
pub fn solve_kepler(mean_anomaly: Radian, eccentricity: f64) -> Radian {
    let mut enom = mean_anomaly + eccentricity * mean_anomaly.sin();
    loop {
        let dele = (mean_anomaly - enom + eccentricity * enom.sin())
            / (1.0 - eccentricity * enom.cos());
        enom += dele;
        if dele.abs() <= CONVERGE {
            return enom;
        }
    }
}

/// True anomaly from the eccentric anomaly.
///
/// `ν = 2·atan2(√((1+e)/(1−e))·sin(E/2), cos(E/2))`
pub fn true_anomaly(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt()) * half.sin()).atan2(half.cos())
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kepler_residual() {
        for i in 0..=40 {
            let e = 0.999 * f64::from(i) / 40.0;
            for j in -36..=36 {
                let m = f64::from(j) * 10.0_f64.to_radians();
                let enom = solve_kepler(m, e);
                let residual = m - enom + e * enom.sin();
                assert!(
                    residual.abs() < 1e-13,
                    "residual {residual} for e = {e}, M = {m}"
                );
            }
        }
    }

    #[test]
    fn test_circular_orbit() {
        assert_eq!(solve_kepler(1.25, 0.0), 1.25);
        assert_relative_eq!(true_anomaly(1.25, 0.0), 1.25, epsilon = 1e-15);
    }

    #[test]
    fn test_true_anomaly_quadrature() {
        // at E = 90°, cos ν = −e
        let e: f64 = 0.3;
        let nu = true_anomaly(std::f64::consts::FRAC_PI_2, e);
        assert_relative_eq!(nu.cos(), -e, epsilon = 1e-14);
    }

    #[test]
    fn test_principal_angle_range() {
        for a in [-1e6, -7.0, -DPI, -1e-18, 0.0, 3.0, DPI, 12.5, 1e7] {
            let r = principal_angle(a);
            assert!((0.0..DPI).contains(&r), "{a} -> {r}");
        }
        assert_relative_eq!(principal_angle(-PI / 2.0), 1.5 * PI, epsilon = 1e-15);
    }

    #[test]
    fn test_pinorm_range() {
        for a in [-1e6, -7.0, -PI, -1e-18, 0.0, PI, 3.5, DPI, 1e7] {
            let r = pinorm(a);
            assert!(r > -PI && r <= PI, "{a} -> {r}");
        }
        assert_eq!(pinorm(-PI), PI);
        assert_relative_eq!(pinorm(1.5 * PI), -PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_pyth_clamps() {
        assert_eq!(pyth(1.0000000001), 0.0);
        assert_relative_eq!(pyth(0.6), 0.8, epsilon = 1e-15);
    }
}
