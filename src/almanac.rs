//! # Almanac: configuration and driver
//!
//! This module defines [`AlmanacParams`], the validated configuration of a run, and
//! [`Almanac`], the façade that owns the bodies, samples them window after window and runs the
//! event search on each window.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use almanac::almanac::{Almanac, AlmanacParams};
//! use almanac::time::utc_epoch;
//!
//! let params = AlmanacParams::builder()
//!     .start(utc_epoch(2024, 6, 20, 0, 0, 0.0))
//!     .periods(3)
//!     .build()
//!     .unwrap();
//!
//! let mut almanac = Almanac::new(params);
//! for report in almanac.run().unwrap() {
//!     println!("{}", report.start);
//!     for event in &report.events {
//!         println!("{event}");
//!     }
//! }
//! ```
//!
//! ## See also
//! ------------
//! * [`crate::ephemeris::SamplingWindow`] – the time grid of one window.
//! * [`crate::search::search`] – the event search run on each window.

use std::cmp::Ordering::{Equal, Greater};

use hifitime::Epoch;
use tracing::{debug, warn};

use crate::almanac_errors::AlmanacError;
use crate::bodies::{find_body, solar_system, CelestialBody, LuminaryContext};
use crate::catalog::CatalogStar;
use crate::constants::{ArcSec, Radian, DEFAULT_PERIOD, SAMPLE_COUNT};
use crate::ephemeris::SamplingWindow;
use crate::observers::Observer;
use crate::orbit_type::cometary_element::CometElements;
use crate::ref_system::{separation, PositionSample};
use crate::search::events::Event;
use crate::search::{search, GatingThresholds, SearchReport};
use crate::time::{day_to_epoch, epoch_to_day, utc_epoch};

/// Configuration of an almanac run.
///
/// Defaults
/// -----------------
/// * `start`: the current instant, J2000 if the clock cannot be read.
/// * `delta_t`: 0, the linear ΔT model.
/// * `observer`: Murray Hill, NJ.
/// * `period`: 1 day, `periods`: 1.
/// * `comet`: 153P/Ikeya–Zhang.
/// * `occultation_mode`: off.
/// * `distance_pair`: none.
/// * `gating`: [`GatingThresholds::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct AlmanacParams {
    /// Instant of the first sample of the first window
    pub start: Epoch,
    /// ΔT override in seconds, 0 for the model
    pub delta_t: f64,
    pub observer: Observer,
    /// Length of a window and spacing of successive windows, in days
    pub period: f64,
    /// Number of successive windows
    pub periods: usize,
    pub comet: Option<CometElements>,
    /// Stellar-occultation constants and catalog star search
    pub occultation_mode: bool,
    /// Bodies whose separation is reported by [`Almanac::distances`]
    pub distance_pair: Option<(String, String)>,
    pub gating: GatingThresholds,
}

impl AlmanacParams {
    /// Create a new [`AlmanacParamsBuilder`] initialized with the defaults.
    pub fn builder() -> AlmanacParamsBuilder {
        AlmanacParamsBuilder::new()
    }
}

impl Default for AlmanacParams {
    fn default() -> Self {
        AlmanacParams {
            start: Epoch::now().unwrap_or_else(|_| utc_epoch(2000, 1, 1, 12, 0, 0.0)),
            delta_t: 0.0,
            observer: Observer::default(),
            period: DEFAULT_PERIOD,
            periods: 1,
            comet: Some(CometElements::default()),
            occultation_mode: false,
            distance_pair: None,
            gating: GatingThresholds::default(),
        }
    }
}

/// Builder for [`AlmanacParams`], with validation.
#[derive(Debug, Clone)]
pub struct AlmanacParamsBuilder {
    params: AlmanacParams,
}

impl Default for AlmanacParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AlmanacParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: AlmanacParams::default(),
        }
    }

    pub fn start(mut self, v: Epoch) -> Self {
        self.params.start = v;
        self
    }
    pub fn delta_t(mut self, v: f64) -> Self {
        self.params.delta_t = v;
        self
    }
    pub fn observer(mut self, v: Observer) -> Self {
        self.params.observer = v;
        self
    }
    pub fn period(mut self, v: f64) -> Self {
        self.params.period = v;
        self
    }
    pub fn periods(mut self, v: usize) -> Self {
        self.params.periods = v;
        self
    }
    pub fn comet(mut self, v: Option<CometElements>) -> Self {
        self.params.comet = v;
        self
    }
    pub fn occultation_mode(mut self, v: bool) -> Self {
        self.params.occultation_mode = v;
        self
    }
    pub fn distance_pair(mut self, v: Option<(String, String)>) -> Self {
        self.params.distance_pair = v;
        self
    }
    pub fn gating(mut self, v: GatingThresholds) -> Self {
        self.params.gating = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Return true iff x >= 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn ge0(x: f64) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `period > 0` and finite, `periods ≥ 1`.
    /// * `delta_t` finite.
    /// * every gating threshold finite, `coarse_margin ≥ 0`, `conjunction ≥ 0`.
    /// * comet `q > 0` and `e ≥ 0`.
    /// * both names of `distance_pair` answer to a body of the run.
    ///
    /// A comet with `e ≥ 1` is accepted; its eccentricity is clamped when it is evaluated and
    /// a warning is logged here.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(AlmanacParams)` if every rule holds.
    /// * `Err(AlmanacError::InvalidParameter)` naming the first failing rule, or
    ///   `Err(AlmanacError::InvalidBodyName)` for an unknown distance body.
    pub fn build(self) -> Result<AlmanacParams, AlmanacError> {
        let p = &self.params;

        if !Self::gt0(p.period) || !p.period.is_finite() {
            return Err(AlmanacError::InvalidParameter(
                "period must be a positive number of days".into(),
            ));
        }
        if p.periods == 0 {
            return Err(AlmanacError::InvalidParameter(
                "periods must be >= 1".into(),
            ));
        }
        if !p.delta_t.is_finite() {
            return Err(AlmanacError::InvalidParameter(
                "delta_t must be finite".into(),
            ));
        }

        let g = &p.gating;
        if !g.darkness.is_finite() || !g.daylight.is_finite() {
            return Err(AlmanacError::InvalidParameter(
                "gating elevations must be finite".into(),
            ));
        }
        if !Self::ge0(g.coarse_margin)
            || !Self::ge0(g.conjunction)
            || !g.coarse_margin.is_finite()
            || !g.conjunction.is_finite()
        {
            return Err(AlmanacError::InvalidParameter(
                "gating separations must be finite and non-negative".into(),
            ));
        }

        if let Some(comet) = &p.comet {
            if !Self::gt0(comet.perihelion_distance) || !Self::ge0(comet.eccentricity) {
                return Err(AlmanacError::InvalidParameter(
                    "comet requires q > 0 and e >= 0".into(),
                ));
            }
            if comet.is_clamped() {
                warn!(
                    eccentricity = comet.eccentricity,
                    used = comet.effective_eccentricity(),
                    "comet eccentricity clamped below 1"
                );
            }
        }

        if let Some((a, b)) = &p.distance_pair {
            let bodies = solar_system(p.comet);
            find_body(&bodies, a)?;
            find_body(&bodies, b)?;
        }

        Ok(self.params)
    }
}

/// Positions of every body at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReport {
    pub epoch: Epoch,
    /// Local apparent sidereal time, radians
    pub local_sidereal_time: Radian,
    /// Catalog name and sample of each body, in search order
    pub positions: Vec<(String, PositionSample)>,
}

/// The almanac: bodies, optional star catalog and run configuration.
#[derive(Debug, Clone)]
pub struct Almanac {
    params: AlmanacParams,
    bodies: Vec<CelestialBody>,
    stars: Vec<CatalogStar>,
}

impl Almanac {
    /// Build the almanac and its bodies from validated parameters.
    pub fn new(params: AlmanacParams) -> Self {
        let bodies = solar_system(params.comet);
        Almanac {
            params,
            bodies,
            stars: Vec::new(),
        }
    }

    /// Attach a star catalog, searched in occultation mode.
    pub fn with_catalog(mut self, stars: Vec<CatalogStar>) -> Self {
        self.stars = stars;
        self
    }

    pub fn params(&self) -> &AlmanacParams {
        &self.params
    }

    /// The bodies, with the samples of the last sampled window.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn stars(&self) -> &[CatalogStar] {
        &self.stars
    }

    /// Window number `index` of the run, `index · period` days after the start.
    pub fn window(&self, index: usize) -> SamplingWindow {
        let p = &self.params;
        SamplingWindow::new(
            epoch_to_day(&p.start) + index as f64 * p.period,
            p.period,
            p.delta_t,
            p.observer,
            p.occultation_mode,
        )
    }

    /// Sample of every body at one instant, with the local sidereal time.
    pub fn positions_at(&self, epoch: Epoch) -> PositionReport {
        let p = &self.params;
        let window = SamplingWindow::new(
            epoch_to_day(&epoch),
            p.period,
            p.delta_t,
            p.observer,
            p.occultation_mode,
        );
        let frame = window.frame_at(0.0);
        let luminaries = LuminaryContext::new(&frame);
        let positions = self
            .bodies
            .iter()
            .map(|body| (body.name.clone(), body.compute(&frame, &luminaries)))
            .collect();
        PositionReport {
            epoch,
            local_sidereal_time: frame.local_sidereal_time(),
            positions,
        }
    }

    /// Sample every body over a window and search it for events.
    ///
    /// Errors
    /// ------
    /// * See [`crate::search::search`].
    pub fn search(&mut self, window: &SamplingWindow) -> Result<Vec<Event>, AlmanacError> {
        window.sample(&mut self.bodies);
        search(window, &self.bodies, &self.stars, &self.params.gating)
    }

    /// Search every window of the run, in order.
    ///
    /// Errors
    /// ------
    /// * The first error of a window stops the run.
    pub fn run(&mut self) -> Result<Vec<SearchReport>, AlmanacError> {
        debug!(periods = self.params.periods, period = self.params.period, "almanac run");
        (0..self.params.periods)
            .map(|index| {
                let window = self.window(index);
                let events = self.search(&window)?;
                Ok(SearchReport {
                    start: day_to_epoch(window.start),
                    events,
                })
            })
            .collect()
    }

    /// Separation of the configured pair at every sample of a window.
    ///
    /// Return
    /// ------
    /// * `Ok(None)` if no pair is configured, otherwise the instant and separation (arcseconds)
    ///   of each sample.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidBodyName`] if a name of the pair answers to no body.
    pub fn distances(
        &mut self,
        window: &SamplingWindow,
    ) -> Result<Option<Vec<(Epoch, ArcSec)>>, AlmanacError> {
        let Some((a, b)) = &self.params.distance_pair else {
            return Ok(None);
        };
        let i = find_body(&self.bodies, a)?;
        let j = find_body(&self.bodies, b)?;
        window.sample(&mut self.bodies);
        let (first, second) = (&self.bodies[i], &self.bodies[j]);
        Ok(Some(
            (0..SAMPLE_COUNT)
                .map(|k| {
                    (
                        day_to_epoch(window.day_at(k as f64)),
                        separation(&first.samples[k], &second.samples[k]),
                    )
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod almanac_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn j2000() -> Epoch {
        utc_epoch(2000, 1, 1, 12, 0, 0.0)
    }

    #[test]
    fn test_builder_defaults() {
        let params = AlmanacParams::builder().start(j2000()).build().unwrap();
        assert_eq!(params.period, 1.0);
        assert_eq!(params.periods, 1);
        assert_eq!(params.comet, Some(CometElements::default()));
        assert_eq!(params.observer, Observer::default());
        assert!(!params.occultation_mode);
    }

    #[test]
    fn test_builder_validation() {
        let err = AlmanacParams::builder().period(0.0).build();
        assert!(matches!(err, Err(AlmanacError::InvalidParameter(_))));
        let err = AlmanacParams::builder().period(f64::NAN).build();
        assert!(matches!(err, Err(AlmanacError::InvalidParameter(_))));
        let err = AlmanacParams::builder().periods(0).build();
        assert!(matches!(err, Err(AlmanacError::InvalidParameter(_))));
        let err = AlmanacParams::builder()
            .gating(GatingThresholds {
                conjunction: -1.0,
                ..Default::default()
            })
            .build();
        assert!(matches!(err, Err(AlmanacError::InvalidParameter(_))));

        // the comet only answers when it is part of the run
        let pair = Some(("moon".to_string(), "comet".to_string()));
        assert_eq!(
            AlmanacParams::builder()
                .comet(None)
                .distance_pair(pair.clone())
                .build(),
            Err(AlmanacError::InvalidBodyName("comet".into()))
        );
        assert!(AlmanacParams::builder().distance_pair(pair).build().is_ok());
    }

    #[test]
    fn test_windows() {
        let params = AlmanacParams::builder()
            .start(j2000())
            .period(0.5)
            .periods(3)
            .build()
            .unwrap();
        let almanac = Almanac::new(params);
        let w = almanac.window(2);
        assert_abs_diff_eq!(w.start, 36526.0, epsilon = 1e-8);
        assert_eq!(w.period, 0.5);
        assert_eq!(almanac.bodies().len(), 12);
    }

    #[test]
    fn test_positions_at() {
        let params = AlmanacParams::builder()
            .start(j2000())
            .comet(None)
            .build()
            .unwrap();
        let report = Almanac::new(params).positions_at(j2000());
        assert_eq!(report.positions.len(), 11);
        assert_eq!(report.positions[0].0, "sun");
        assert!((0.0..std::f64::consts::TAU).contains(&report.local_sidereal_time));
        let moon = &report.positions[1].1;
        assert!(moon.phase.is_some());
        assert!(moon.semi > 850.0 && moon.semi < 1010.0);
    }

    #[test]
    fn test_distances() {
        let params = AlmanacParams::builder()
            .start(j2000())
            .comet(None)
            .distance_pair(Some(("sun".into(), "The shadow".into())))
            .build()
            .unwrap();
        let mut almanac = Almanac::new(params);
        let window = almanac.window(0);
        let distances = almanac.distances(&window).unwrap().unwrap();
        assert_eq!(distances.len(), SAMPLE_COUNT);
        // the shadow is opposite the Sun, up to the parallaxes
        for (_, d) in distances {
            assert!(d > 178.0 * 3600.0, "{d}");
        }

        let params = AlmanacParams::builder().start(j2000()).build().unwrap();
        let mut almanac = Almanac::new(params);
        assert_eq!(almanac.distances(&window), Ok(None));
    }
}
