//! # Per-instant reference frame
//!
//! A [`Frame`] gathers every quantity that depends only on the sample time and the observer:
//! ephemeris time, the century powers of the mean-element polynomials, nutation, obliquity,
//! sidereal time and the geocentric position and velocity of the Sun. It is computed once per
//! sample instant and passed by reference into every body model and coordinate transform,
//! so no model reads state left behind by another one.
//!
//! ## Construction
//!
//! [`Frame::new`] follows a fixed order:
//!
//! 1. `eday = day + ΔT / 86400` and the west longitude shifted by `15·ΔT` arcseconds,
//! 2. century powers, nutation `(Δψ, Δε)`, mean and true obliquity, apparent sidereal time,
//! 3. the Sun's geocentric orbit 0.1 day ahead, then at `eday`,
//! 4. the Earth's velocity as the finite difference of the two Sun vectors.
//!
//! The ahead position reuses the century powers of `eday`.

use nalgebra::Vector3;

use crate::bodies::sun;
use crate::constants::{AstronomicalUnit, Day, Radian, RADSEC};
use crate::earth_orientation::{mean_obliquity, nutation, sidereal_time, Centuries, Nutation};
use crate::observers::Observer;
use crate::orbit_type::OrbitalState;
use crate::time::ephemeris_day;

/// Step of the Sun finite difference, in days
const VELOCITY_STEP: Day = 0.1;

/// Aberration scale applied to the Sun finite difference (light time per au over the step)
const ABERRATION_SCALE: f64 = 0.057756;

/// Frame state at one sample instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Universal-time day since 1899-12-31T12:00
    pub day: Day,
    /// ΔT used for this instant, in seconds
    pub delta_t: f64,
    /// Ephemeris day
    pub eday: Day,
    pub capt: Centuries,
    pub nutation: Nutation,
    pub mean_obliquity: Radian,
    /// Mean obliquity plus nutation in obliquity
    pub true_obliquity: Radian,
    /// Apparent Greenwich sidereal time
    pub gst: Radian,
    /// Observer west longitude corrected for ΔT
    pub west_longitude: Radian,
    pub observer: Observer,
    /// Geocentric ecliptic orbit of the Sun
    pub sun: OrbitalState,
    /// Geocentric ecliptic position of the Sun (au)
    pub sun_vector: Vector3<f64>,
    /// Scaled Earth velocity used by the aberration correction
    pub earth_velocity: Vector3<f64>,
    pub occultation_mode: bool,
}

impl Frame {
    /// Build the frame of one instant.
    ///
    /// Arguments
    /// ---------
    /// * `day`: universal-time days since 1899-12-31T12:00.
    /// * `delta_t`: ΔT in seconds, already resolved (see [`crate::time::delta_t`]).
    /// * `observer`: the observing site.
    /// * `occultation_mode`: selects the occultation constants of the Sun and the Moon.
    ///
    /// Return
    /// ------
    /// * The frame, ready to be shared by every body model of this instant.
    pub fn new(day: Day, delta_t: f64, observer: Observer, occultation_mode: bool) -> Self {
        let eday = ephemeris_day(day, delta_t);
        let west_longitude = observer.longitude() + 15.0 * delta_t * RADSEC;
        let capt = Centuries::from_ephemeris_day(eday);

        let nutation = nutation(eday, &capt);
        let mean_obliquity = mean_obliquity(&capt);
        let true_obliquity = mean_obliquity + nutation.obliquity;
        let gst = sidereal_time(eday, &capt, nutation.longitude, mean_obliquity);

        let ahead = sun::geocentric_orbit(eday + VELOCITY_STEP, &capt, occultation_mode);
        let now = sun::geocentric_orbit(eday, &capt, occultation_mode);
        let sun_vector = now.cartesian();
        let earth_velocity = ABERRATION_SCALE * (ahead.cartesian() - sun_vector);

        Frame {
            day,
            delta_t,
            eday,
            capt,
            nutation,
            mean_obliquity,
            true_obliquity,
            gst,
            west_longitude,
            observer,
            sun: now,
            sun_vector,
            earth_velocity,
            occultation_mode,
        }
    }

    /// Distance of the Sun from the Earth, in au.
    pub fn sun_distance(&self) -> AstronomicalUnit {
        self.sun.rad
    }

    /// Local sidereal time at the observer, in [0, 2π).
    pub fn local_sidereal_time(&self) -> Radian {
        crate::earth_orientation::local_sidereal_time(self.gst, self.west_longitude)
    }
}
