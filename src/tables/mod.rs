//! # Coefficient tables
//!
//! Literal perturbation coefficients of the analytical theories used by the orbital models.
//! The values are reproduced exactly from the published theories; they are data, not code,
//! and must not be re-derived or rounded.
//!
//! - [`sun`] – Newcomb's theory of the Sun (mean-anomaly, longitude, latitude and radius terms).
//! - [`mercury`], [`venus`] – planetary perturbations of the inner planets.
//! - [`nutation`] – long- and short-period nutation in longitude and obliquity.
//! - [`moon`] – Brown's lunar theory, one named list per perturbation category.
//! - [`URANUS`], [`NEPTUNE`], [`PLUTO`] – secularly varying mean elements at J2000.

pub mod moon;
pub mod mercury;
pub mod nutation;
pub mod sun;
pub mod venus;

/// Mean elements at an epoch with their secular rates, for a slowly moving planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecularElements {
    /// Epoch of the elements, in days since 1899-12-31T12:00
    pub epoch: f64,
    /// Semi-major axis (au)
    pub semi_major_axis: f64,
    /// Eccentricity
    pub eccentricity: f64,
    /// Inclination (deg)
    pub inclination: f64,
    /// Longitude of the ascending node (deg)
    pub node: f64,
    /// Longitude of perihelion (deg)
    pub perihelion: f64,
    /// Mean longitude (deg)
    pub mean_longitude: f64,
    /// Rate of the semi-major axis (au / Julian century)
    pub semi_major_axis_rate: f64,
    /// Rate of the eccentricity (1 / Julian century)
    pub eccentricity_rate: f64,
    /// Rate of the inclination (arcsec / Julian century)
    pub inclination_rate: f64,
    /// Rate of the node (arcsec / Julian century)
    pub node_rate: f64,
    /// Rate of the longitude of perihelion (arcsec / Julian century)
    pub perihelion_rate: f64,
    /// Rate of the mean longitude (arcsec / Julian century)
    pub mean_longitude_rate: f64,
}

pub const URANUS: SecularElements = SecularElements {
    epoch: 36525.0,
    semi_major_axis: 19.19126393,
    eccentricity: 0.04716771,
    inclination: 0.76986,
    node: 74.22988,
    perihelion: 170.96424,
    mean_longitude: 313.23218,
    semi_major_axis_rate: 0.00152025,
    eccentricity_rate: -0.00019150,
    inclination_rate: -2.09,
    node_rate: -1681.40,
    perihelion_rate: 1312.56,
    mean_longitude_rate: 1542547.79,
};

pub const NEPTUNE: SecularElements = SecularElements {
    epoch: 36525.0,
    semi_major_axis: 30.06896348,
    eccentricity: 0.00858587,
    inclination: 1.76917,
    node: 131.72169,
    perihelion: 44.97135,
    mean_longitude: 304.88003,
    semi_major_axis_rate: -0.00125196,
    eccentricity_rate: 0.0000251,
    inclination_rate: -3.64,
    node_rate: -151.25,
    perihelion_rate: -844.43,
    mean_longitude_rate: 786449.21,
};

pub const PLUTO: SecularElements = SecularElements {
    epoch: 36525.0,
    semi_major_axis: 39.48168677,
    eccentricity: 0.24880766,
    inclination: 17.14175,
    node: 110.30347,
    perihelion: 224.06676,
    mean_longitude: 238.92881,
    semi_major_axis_rate: -0.00076912,
    eccentricity_rate: 0.00006465,
    inclination_rate: 11.07,
    node_rate: -37.33,
    perihelion_rate: -132.25,
    mean_longitude_rate: 522747.90,
};
