//! # Trajectory sampler
//!
//! A [`SamplingWindow`] covers `period` days with `N + 2 = 14` sample instants spaced by
//! `period / N` (`N = 12`). At each instant a fresh [`Frame`] and [`LuminaryContext`] are built,
//! then every body of the almanac is evaluated and its sample stored at that grid index.
//!
//! ΔT is resolved once per window, from its starting day, and shared by every instant of the
//! window, including the off-grid instants the occultation refinement asks for.

use tracing::debug;

use crate::bodies::{CelestialBody, LuminaryContext};
use crate::constants::{Day, SampleTime, NPTS, SAMPLE_COUNT};
use crate::frame::Frame;
use crate::observers::Observer;
use crate::ref_system::PositionSample;
use crate::time::delta_t;

/// Time grid of one search pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingWindow {
    /// First sample instant, days since 1899-12-31T12:00 UTC
    pub start: Day,
    /// Window length in days
    pub period: f64,
    /// ΔT of the window, seconds
    pub delta_t: f64,
    pub observer: Observer,
    pub occultation_mode: bool,
}

impl SamplingWindow {
    /// Build a window.
    ///
    /// Arguments
    /// ---------
    /// * `start`: day of the first sample.
    /// * `period`: window length in days.
    /// * `delta_t_override`: ΔT in seconds, `0.0` for the linear model at `start`.
    /// * `observer`: the observing site.
    /// * `occultation_mode`: stellar-occultation constants for the Sun and the Moon.
    pub fn new(
        start: Day,
        period: f64,
        delta_t_override: f64,
        observer: Observer,
        occultation_mode: bool,
    ) -> Self {
        SamplingWindow {
            start,
            period,
            delta_t: delta_t(start, delta_t_override),
            observer,
            occultation_mode,
        }
    }

    /// Spacing of two grid instants, in days.
    pub fn step(&self) -> Day {
        self.period / NPTS as f64
    }

    /// Day of a fractional grid index.
    pub fn day_at(&self, t: SampleTime) -> Day {
        self.start + t * self.step()
    }

    /// Frame of a fractional grid index.
    pub fn frame_at(&self, t: SampleTime) -> Frame {
        Frame::new(self.day_at(t), self.delta_t, self.observer, self.occultation_mode)
    }

    /// Samples of a set of bodies at a fractional grid index, one per body.
    pub fn sample_at(&self, t: SampleTime, bodies: &[&CelestialBody]) -> Vec<PositionSample> {
        let frame = self.frame_at(t);
        let luminaries = LuminaryContext::new(&frame);
        bodies
            .iter()
            .map(|body| body.compute(&frame, &luminaries))
            .collect()
    }

    /// Fill the samples of every body over the window.
    pub fn sample(&self, bodies: &mut [CelestialBody]) {
        debug!(
            start = self.start,
            period = self.period,
            delta_t = self.delta_t,
            bodies = bodies.len(),
            "sampling window"
        );
        for i in 0..SAMPLE_COUNT {
            let frame = self.frame_at(i as f64);
            let luminaries = LuminaryContext::new(&frame);
            for body in bodies.iter_mut() {
                body.samples[i] = body.compute(&frame, &luminaries);
            }
        }
    }
}
