//! Brightness of a ringed planet (Explanatory Supplement, p. 363 ff.).
//!
//! The magnitude depends on the saturnicentric ring-plane coordinates of the Earth and the
//! Sun: the difference of their ring-plane longitudes `ΔU` and the Earth's ring-plane
//! latitude `B`.
//!
//! ```text
//! m = −8.68 + 2.52·|ΔU| − 2.60·|sin B| + 1.25·sin²B
//! ```

use crate::constants::RADEG;
use crate::frame::Frame;
use crate::kepler::pinorm;
use crate::orbit_type::OrbitalState;

/// Ring orientation of date, in radians.
struct RingElements {
    /// Inclination of the ring plane on the equator
    capj: f64,
    /// Right ascension of its ascending node
    capn: f64,
    /// Inclination of the ring plane on the ecliptic
    eye: f64,
    /// Longitude of its ascending node on the ecliptic
    comg: f64,
    omg: f64,
}

impl RingElements {
    fn of_date(frame: &Frame) -> Self {
        let t = frame.capt.t;
        let t2 = frame.capt.t2;
        RingElements {
            capj: (6.9056 - 0.4322 * t) * RADEG,
            capn: (126.3615 + 3.9894 * t + 0.2403 * t2) * RADEG,
            eye: (28.0743 - 0.0128 * t) * RADEG,
            comg: (168.1179 + 1.3936 * t) * RADEG,
            omg: (42.9236 - 2.7390 * t - 0.2344 * t2) * RADEG,
        }
    }
}

/// Magnitude at unit distance of a ringed planet.
///
/// Arguments
/// ---------
/// * `state`: heliocentric ecliptic state of the planet, offsets already applied.
/// * `frame`: supplies the mean obliquity, the Sun vector and the century powers.
///
/// Return
/// ------
/// * The magnitude before the distance term of the coordinate pipeline.
pub fn ring_magnitude(state: &OrbitalState, frame: &Frame) -> f64 {
    let (lambda, beta, rad) = (state.lambda, state.beta, state.rad);
    let (sin_ob, cos_ob) = frame.mean_obliquity.sin_cos();

    // rough equatorial direction of the planet
    let sd = rad * (beta.cos() * lambda.sin() * sin_ob + beta.sin() * cos_ob) + frame.sun_vector.z;
    let sa = rad * (beta.cos() * lambda.sin() * cos_ob - beta.sin() * sin_ob) + frame.sun_vector.y;
    let ca = rad * beta.cos() * lambda.cos() + frame.sun_vector.x;
    let alpha = sa.atan2(ca);
    let delta = sd.atan2((sa * sa + ca * ca).sqrt());

    let ring = RingElements::of_date(frame);

    // ring-plane coordinates of the Earth
    let sb = ring.capj.sin() * delta.cos() * (alpha - ring.capn).sin()
        - ring.capj.cos() * delta.sin();
    let su = ring.capj.cos() * delta.cos() * (alpha - ring.capn).sin()
        + ring.capj.sin() * delta.sin();
    let cu = delta.cos() * (alpha - ring.capn).cos();
    let u = su.atan2(cu);
    let b = sb.atan2((su * su + cu * cu).sqrt());

    // ring-plane longitude of the Sun
    let su = ring.eye.sin() * beta.sin() + ring.eye.cos() * beta.cos() * (lambda - ring.comg).sin();
    let cu = beta.cos() * (lambda - ring.comg).cos();
    let up = su.atan2(cu);

    let sb = b.sin();
    -8.68 + 2.52 * pinorm(up + ring.omg - u).abs() - 2.60 * sb.abs() + 1.25 * sb * sb
}

#[cfg(test)]
mod ring_test {
    use crate::bodies::planets::Planet;
    use crate::frame::Frame;
    use crate::observers::Observer;
    use crate::ref_system::heliocentric_to_geocentric;

    #[test]
    fn test_saturn_over_one_revolution() {
        for k in 0..180 {
            let frame = Frame::new(36525.0 + 60.0 * k as f64, 0.0, Observer::default(), false);
            let state = Planet::Saturn.heliocentric(&frame);
            assert!(
                (-9.7..-8.4).contains(&state.mag),
                "unit-distance magnitude {} at step {k}",
                state.mag
            );
            let apparent = heliocentric_to_geocentric(&state, &frame).mag;
            assert!(
                (-9.0..2.0).contains(&apparent),
                "apparent magnitude {apparent} at step {k}"
            );
        }
    }
}
