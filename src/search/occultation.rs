//! # Occultation refinement
//!
//! Close approaches of two bodies are refined in three stages:
//!
//! 1. **coarse**: a local minimum of the separation over the grid samples;
//! 2. **medium**: quadratic interpolation of both bodies through the three samples around that
//!    minimum, scanned with `2880·period/N` steps per two grid intervals (one minute for a
//!    one-day window, never fewer than four);
//! 3. **fine**: both bodies are recomputed from their models at three instants around the
//!    medium minimum, interpolated again and scanned sixty times finer, then walked forwards
//!    and backwards from the minimum to find the contacts.
//!
//! Contacts are the instants where the separation crosses the sum of the semidiameters
//! (partial phase) and their difference (total or annular phase).

use itertools::Itertools;
use tracing::trace;

use crate::almanac_errors::{AlmanacError, RefinementStage};
use crate::bodies::CelestialBody;
use crate::constants::{
    ArcSec, Degree, Radian, SampleTime, FINE_STEPS, MEDIUM_STEPS_PER_PERIOD, NPTS,
};
use crate::ephemeris::SamplingWindow;
use crate::kepler::pinorm;
use crate::ref_system::{separation, PositionSample};

/// Ratio of the medium step to the fine step
const FINE_RATIO: f64 = 60.0;

/// Fewest medium steps over two grid intervals; keeps the middle sample on the medium grid
const MIN_MEDIUM_STEPS: f64 = 4.0;

/// A contact instant and the elevation of the first body at that instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub time: SampleTime,
    pub elevation: Degree,
}

/// Breakpoints of a close approach.
///
/// `closest` always exists; the other phases are `None` when the separation never crosses
/// the corresponding threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occultation {
    pub partial_begin: Option<Contact>,
    pub total_begin: Option<Contact>,
    pub closest: Contact,
    pub total_end: Option<Contact>,
    pub partial_end: Option<Contact>,
}

/// Newton forward-difference quadratic through three equally spaced samples.
///
/// `x = 0, 1, 2` returns the three samples; angle differences are wrapped into (−π, π].
#[derive(Debug, Clone, Copy, PartialEq)]
struct Interpolant {
    base: Track,
    first: Track,
    second: Track,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Track {
    ra: Radian,
    decl: Radian,
    semi: ArcSec,
    el: Degree,
}

impl Interpolant {
    fn new(p1: &PositionSample, p2: &PositionSample, p3: &PositionSample) -> Self {
        Interpolant {
            base: Track {
                ra: p1.ra,
                decl: p1.decl,
                semi: p1.semi,
                el: p1.el,
            },
            first: Track {
                ra: pinorm(p2.ra - p1.ra),
                decl: pinorm(p2.decl - p1.decl),
                semi: p2.semi - p1.semi,
                el: p2.el - p1.el,
            },
            second: Track {
                ra: pinorm(p1.ra + p3.ra - 2.0 * p2.ra) / 2.0,
                decl: pinorm(p1.decl + p3.decl - 2.0 * p2.decl) / 2.0,
                semi: (p1.semi + p3.semi - 2.0 * p2.semi) / 2.0,
                el: (p1.el + p3.el - 2.0 * p2.el) / 2.0,
            },
        }
    }

    fn at(&self, x: f64) -> PositionSample {
        let y = x * (x - 1.0);
        let (b, f, s) = (&self.base, &self.first, &self.second);
        PositionSample {
            ra: b.ra + x * f.ra + y * s.ra,
            decl: b.decl + x * f.decl + y * s.decl,
            semi: b.semi + x * f.semi + y * s.semi,
            el: b.el + x * f.el + y * s.el,
            ..Default::default()
        }
    }
}

/// Interpolated pair of bodies.
#[derive(Debug, Clone, Copy)]
struct Pair {
    first: Interpolant,
    second: Interpolant,
}

impl Pair {
    fn new(first: [PositionSample; 3], second: [PositionSample; 3]) -> Self {
        Pair {
            first: Interpolant::new(&first[0], &first[1], &first[2]),
            second: Interpolant::new(&second[0], &second[1], &second[2]),
        }
    }

    /// Separation, semidiameters and first-body elevation at `x`.
    fn at(&self, x: f64) -> Approach {
        let (a, b) = (self.first.at(x), self.second.at(x));
        Approach {
            distance: separation(&a, &b),
            semi_sum: a.semi + b.semi,
            semi_difference: (a.semi - b.semi).abs(),
            elevation: a.el,
        }
    }

    /// Step index of the first local minimum of the separation over `x = k·dx, k < steps`,
    /// with the separation there.
    fn minimum(&self, dx: f64, steps: usize) -> Option<(usize, ArcSec)> {
        (0..steps)
            .map(|k| self.at(k as f64 * dx).distance)
            .tuple_windows()
            .enumerate()
            .find(|(_, (d1, d2, d3))| d2 <= d1 && d2 <= d3)
            .map(|(k, (_, d2, _))| (k + 1, d2))
    }
}

#[derive(Debug, Clone, Copy)]
struct Approach {
    distance: ArcSec,
    semi_sum: ArcSec,
    semi_difference: ArcSec,
    elevation: Degree,
}

/// Refine the close approach of two bodies over the sampled window.
///
/// Arguments
/// ---------
/// * `window`: the window the bodies were sampled on, used to recompute them in the fine pass.
/// * `first`: the body whose elevation is reported with the contacts.
/// * `second`: the other body.
/// * `margin`: tolerance added to the sum of the semidiameters after the medium pass.
///
/// Return
/// ------
/// * `Ok(None)` when the separation has no minimum over the samples, or when the bodies stay
///   apart at the minimum.
/// * `Ok(Some(occultation))` otherwise.
///
/// Errors
/// ------
/// * [`AlmanacError::RefinementFailed`] if the medium or the fine scan misses the minimum the
///   previous stage found.
pub fn occult(
    window: &SamplingWindow,
    first: &CelestialBody,
    second: &CelestialBody,
    margin: ArcSec,
) -> Result<Option<Occultation>, AlmanacError> {
    // coarse: three consecutive samples with a minimum in the middle
    let Some(start) = first
        .samples
        .iter()
        .zip(second.samples.iter())
        .map(|(a, b)| separation(a, b))
        .tuple_windows()
        .position(|(d1, d2, d3)| d2 <= d1 && d2 <= d3)
    else {
        return Ok(None);
    };

    // medium: about one minute per step for a one-day window
    let n = (MEDIUM_STEPS_PER_PERIOD * window.period / NPTS as f64).max(MIN_MEDIUM_STEPS);
    let dx = 2.0 / n;
    let coarse = Pair::new(
        [
            first.samples[start],
            first.samples[start + 1],
            first.samples[start + 2],
        ],
        [
            second.samples[start],
            second.samples[start + 1],
            second.samples[start + 2],
        ],
    );
    let (k, distance) = coarse
        .minimum(dx, (n + 1.0) as usize)
        .ok_or(AlmanacError::RefinementFailed(RefinementStage::Medium))?;
    let approach = coarse.at(k as f64 * dx);
    trace!(
        first = %first.name,
        second = %second.name,
        time = start as f64 + k as f64 * dx,
        distance,
        "medium minimum"
    );
    if distance > approach.semi_sum + margin {
        return Ok(None);
    }

    // fine: true positions two medium steps apart, the minimum on the middle one
    let origin = start as f64 + (k as f64 - 2.0) * dx;
    let mut first_points = [PositionSample::default(); 3];
    let mut second_points = [PositionSample::default(); 3];
    for j in 0..3 {
        let samples = window.sample_at(origin + 2.0 * dx * j as f64, &[first, second]);
        first_points[j] = samples[0];
        second_points[j] = samples[1];
    }
    let fine = Pair::new(first_points, second_points);
    let dx = dx / FINE_RATIO;
    let x_step = 1.0 / FINE_STEPS as f64;

    let (i1, distance) = fine
        .minimum(x_step, 2 * FINE_STEPS + 1)
        .ok_or(AlmanacError::RefinementFailed(RefinementStage::Fine))?;
    let approach = fine.at(i1 as f64 * x_step);
    if distance > approach.semi_sum {
        return Ok(None);
    }

    let closest = Contact {
        time: origin + i1 as f64 * dx,
        elevation: approach.elevation,
    };
    let inner = approach.semi_difference;
    let outer = approach.semi_sum;
    let max_steps = (NPTS as f64 / dx).ceil() as i64;
    let contact_time = |i: i64| origin + (i as f64 - 0.5) * dx;

    let walk = |direction: i64| -> (Option<Contact>, Option<Contact>) {
        let mut total = None;
        let mut previous = distance;
        for s in 1..=max_steps {
            let i = i1 as i64 + direction * s;
            let here = fine.at(i as f64 * x_step);
            if previous <= inner && here.distance > inner {
                total = Some(Contact {
                    time: contact_time(i),
                    elevation: here.elevation,
                });
            }
            if here.distance > outer {
                let partial = (previous <= outer).then_some(Contact {
                    time: contact_time(i),
                    elevation: here.elevation,
                });
                return (total, partial);
            }
            previous = here.distance;
        }
        (total, None)
    };

    let (total_end, partial_end) = walk(1);
    let (total_begin, partial_begin) = walk(-1);
    let occultation = Occultation {
        partial_begin,
        total_begin,
        closest,
        total_end,
        partial_end,
    };
    trace!(
        first = %first.name,
        second = %second.name,
        closest = closest.time,
        begin = ?partial_begin.map(|c| c.time),
        end = ?partial_end.map(|c| c.time),
        "contacts"
    );
    Ok(Some(occultation))
}

#[cfg(test)]
mod occultation_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample(ra: Radian, decl: Radian, semi: ArcSec, el: Degree) -> PositionSample {
        PositionSample {
            ra,
            decl,
            semi,
            el,
            ..Default::default()
        }
    }

    #[test]
    fn test_interpolant_through_samples() {
        let p1 = sample(6.2, 0.10, 900.0, 10.0);
        let p2 = sample(6.27, 0.12, 901.0, 20.0);
        // right ascension wraps past 2π
        let p3 = sample(0.06, 0.15, 903.0, 28.0);
        let q = Interpolant::new(&p1, &p2, &p3);

        assert_abs_diff_eq!(q.at(0.0).ra, 6.2, epsilon = 1e-12);
        assert_abs_diff_eq!(q.at(1.0).ra, 6.27, epsilon = 1e-12);
        // continued past 2π rather than back to 0.06
        assert_abs_diff_eq!(q.at(2.0).ra, 0.06 + std::f64::consts::TAU, epsilon = 1e-12);
        assert_abs_diff_eq!(q.at(2.0).decl, 0.15, epsilon = 1e-12);
        assert_abs_diff_eq!(q.at(2.0).semi, 903.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.at(2.0).el, 28.0, epsilon = 1e-12);
        // quadratic midpoint: 10 + 0.5·10 − 0.25·(−1)
        assert_abs_diff_eq!(q.at(0.5).el, 15.25, epsilon = 1e-12);
    }

    #[test]
    fn test_pair_minimum() {
        // second body at rest, first body passing 100″ south of it
        let still = sample(1.0, 0.0, 10.0, 30.0);
        let arc = 600.0 * crate::constants::RADSEC;
        let south = -100.0 * crate::constants::RADSEC;
        let pair = Pair::new(
            [
                sample(1.0 - arc, south, 900.0, 30.0),
                sample(1.0, south, 900.0, 30.0),
                sample(1.0 + arc, south, 900.0, 30.0),
            ],
            [still, still, still],
        );
        let (k, distance) = pair.minimum(0.01, 201).unwrap();
        assert_eq!(k, 100);
        assert_abs_diff_eq!(distance, 100.0, epsilon = 1e-6);
        let approach = pair.at(1.0);
        assert_abs_diff_eq!(approach.semi_sum, 910.0, epsilon = 1e-9);
        assert_abs_diff_eq!(approach.semi_difference, 890.0, epsilon = 1e-9);

        // receding bodies have no interior minimum
        let receding = Pair::new(
            [
                sample(1.0, south, 900.0, 30.0),
                sample(1.0 + arc, south, 900.0, 30.0),
                sample(1.0 + 2.0 * arc, south, 900.0, 30.0),
            ],
            [still, still, still],
        );
        assert_eq!(receding.minimum(0.01, 201).map(|(k, _)| k), None);
    }
}
