//! # Orbital states and element representations
//!
//! Every orbital model of the crate produces an [`OrbitalState`](crate::orbit_type::OrbitalState):
//! a heliocentric ecliptic position referred to the mean equinox of date, plus the two
//! photometric quantities the coordinate pipeline scales with distance. It is a scratch record,
//! returned by value from each model and never shared between bodies.
//!
//! The element representations that produce those states live in the submodules:
//!
//! - [`keplerian_element`](crate::orbit_type::keplerian_element): mean elements `(a, e, i, Ω, ϖ, M)`
//!   and their reduction to the ecliptic, shared by every planet model.
//! - [`cometary_element`](crate::orbit_type::cometary_element): perihelion elements `(T, q, e, i, ω, Ω)`
//!   of a user-supplied comet, with the eccentricity clamp the Kepler solver needs.
//!
//! ## Typical workflow
//!
//! ```rust
//! use almanac::orbit_type::keplerian_element::{MeanElements, Perturbations};
//!
//! let elements = MeanElements {
//!     semi_major_axis: 1.5236915,
//!     eccentricity: 0.0933,
//!     inclination: 1.85_f64.to_radians(),
//!     node: 49.5_f64.to_radians(),
//!     perihelion: 336.0_f64.to_radians(),
//!     mean_anomaly: 20.0_f64.to_radians(),
//!     daily_motion: 0.5240711638,
//! };
//! let state = elements.heliocentric(&Perturbations::default());
//! assert!(state.rad > 1.3 && state.rad < 1.7);
//! ```

use nalgebra::Vector3;

use crate::constants::{ArcSec, AstronomicalUnit, Radian};

/// Mean elements and reduction to the ecliptic.
pub mod keplerian_element;

/// Perihelion elements of a comet.
pub mod cometary_element;

/// Heliocentric (or, for the Sun, geocentric) ecliptic state of a body at one instant.
///
/// Units
/// -----
/// * `lambda`, `beta`: radians, mean ecliptic and equinox of date; `lambda` in [0, 2π).
/// * `rad`: astronomical units (0 for the Sun seen from the Earth).
/// * `motion`: apparent angular rate used by the light-time correction, radians per day.
/// * `semi`: semidiameter at 1 au, arcseconds.
/// * `mag`: magnitude at 1 au from the Earth (before the distance term).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitalState {
    pub lambda: Radian,
    pub beta: Radian,
    pub rad: AstronomicalUnit,
    pub motion: f64,
    pub semi: ArcSec,
    pub mag: f64,
}

impl OrbitalState {
    /// Rectangular ecliptic coordinates `r·(cosβ cosλ, cosβ sinλ, sinβ)`.
    pub fn cartesian(&self) -> Vector3<f64> {
        let (sl, cl) = self.lambda.sin_cos();
        let (sb, cb) = self.beta.sin_cos();
        Vector3::new(self.rad * cb * cl, self.rad * cb * sl, self.rad * sb)
    }
}
