//! # Constants and type definitions for Almanac
//!
//! This module centralizes the **conversion factors**, **sampling constants** and **common type
//! aliases** used throughout the `almanac` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians, meters → feet)
//! - Time base: days counted from 1899-12-31T12:00 UTC (Julian Date 2 415 020.0)
//! - Sampling grid of one search window (N = 12 intervals, N + 2 samples)
//! - Numerical limits shared by the orbital models and the event search
//!
//! All angles handled internally are in radians unless the alias says otherwise.

// -------------------------------------------------------------------------------------------------
// Angle and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = RADEG / 3600.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Meters → international feet, used by the Earth-radius elevation term
pub const METERS_TO_FEET: f64 = 3.28084;

/// Natural logarithm of 10, turns a decimal log-radius perturbation into a relative change
pub const LN_10: f64 = 2.30258509;

/// Gaussian gravitational constant k
pub const GAUSS_GRAV: f64 = 0.01720209895;

// -------------------------------------------------------------------------------------------------
// Time base
// -------------------------------------------------------------------------------------------------

/// Julian Date of the time origin (1899-12-31T12:00:00 UTC)
pub const JD_EPOCH_1900: f64 = 2_415_020.0;

/// Tropical days per century used by the mean-element polynomials
pub const DAYS_PER_CENTURY: f64 = 36_524.220;

/// Julian days per century
pub const JULIAN_CENTURY: f64 = 36_525.0;

/// Tropical year in days
pub const TROPICAL_YEAR: f64 = 365.24220;

/// Linear ΔT growth, seconds of ΔT per day elapsed since the time origin
pub const DELTA_T_RATE: f64 = 0.001704;

// -------------------------------------------------------------------------------------------------
// Sampling grid
// -------------------------------------------------------------------------------------------------

/// Number of sampling intervals in one window
pub const NPTS: usize = 12;

/// Number of samples stored per body (N + 2)
pub const SAMPLE_COUNT: usize = NPTS + 2;

/// Default window length in days
pub const DEFAULT_PERIOD: f64 = 1.0;

/// Steps of the medium occultation pass per window (one per minute for a one-day window)
pub const MEDIUM_STEPS_PER_PERIOD: f64 = 2880.0;

/// Sub-steps of the fine occultation pass per interpolation unit
pub const FINE_STEPS: usize = 120;

// -------------------------------------------------------------------------------------------------
// Numerical limits
// -------------------------------------------------------------------------------------------------

/// Convergence threshold of the Kepler solver
pub const CONVERGE: f64 = 1e-14;

/// Largest eccentricity the Kepler solver is trusted with
pub const MAX_ECCENTRICITY: f64 = 0.999;

/// Capacity of the event buffer of one search pass
pub const MAX_EVENTS: usize = 100;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in meters
pub type Meter = f64;
/// Days elapsed since 1899-12-31T12:00 UTC
pub type Day = f64;
/// Fractional index into a body's sample sequence
pub type SampleTime = f64;
