//! # Observer & site geometry
//!
//! This module holds the terrestrial observing site used by the topocentric stage of the
//! coordinate pipeline. It provides:
//!
//! - An [`Observer`](crate::observers::Observer) storing the **north latitude**, **west longitude**
//!   and **elevation** of the site, NaN-free via [`ordered_float::NotNan`].
//! - The Earth-ellipsoid corrections needed for diurnal parallax: the **geocentric latitude**
//!   ([`Observer::geocentric_latitude`](crate::observers::Observer::geocentric_latitude)) and the
//!   **geocentric radius** in Earth equatorial radii
//!   ([`Observer::earth_radius`](crate::observers::Observer::earth_radius)).
//! - Parsing of the plain-text site triple `"nlat wlong elev"` (degrees, degrees, meters), either
//!   from a string ([`FromStr`]) or from the first line of a site file
//!   ([`Observer::from_reader`](crate::observers::Observer::from_reader)).
//!
//! ## Conventions
//!
//! - Latitude: **degrees north** on input, stored in radians.
//! - Longitude: **degrees west** of Greenwich on input (the historical convention of the
//!   site file), stored in radians.
//! - Elevation: **meters** above sea level.
//!
//! ## Default site
//!
//! [`Observer::default`] is Murray Hill, New Jersey (40°41.06′ N, 74°23.98′ W, 150 m).
//!
//! ## See also
//! ------------
//! * [`Frame`](crate::frame::Frame) – carries the observer into every pipeline call.
//! * [`geocentric_to_topocentric`](crate::ref_system::geocentric_to_topocentric) – consumer of the
//!   geocentric latitude and radius.

use std::io::BufRead;
use std::str::FromStr;

use ordered_float::NotNan;

use crate::almanac_errors::AlmanacError;
use crate::constants::{Degree, Meter, Radian, METERS_TO_FEET, RADEG, RADSEC};

/// Terrestrial observing site.
///
/// Units
/// -----
/// * `north_latitude`: radians, north positive.
/// * `west_longitude`: radians, west positive.
/// * `elevation`: meters.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Observer {
    /// Geodetic latitude in **radians**, north positive.
    pub north_latitude: NotNan<f64>,

    /// Longitude in **radians**, west of Greenwich positive.
    pub west_longitude: NotNan<f64>,

    /// Height above sea level in **meters**.
    pub elevation: NotNan<f64>,
}

impl Observer {
    /// Create a new observer from geodetic coordinates.
    ///
    /// Arguments
    /// -----------------
    /// * `north_latitude`: geodetic latitude in **degrees** (north positive).
    /// * `west_longitude`: longitude in **degrees** (west positive).
    /// * `elevation`: height above sea level in **meters**.
    ///
    /// Return
    /// ----------
    /// * A constructed [`Observer`].
    ///
    /// Errors
    /// ----------
    /// * [`AlmanacError::InvalidLocation`] if one of the inputs is not finite, or if the
    ///   latitude lies outside [−90°, 90°].
    pub fn new(
        north_latitude: Degree,
        west_longitude: Degree,
        elevation: Meter,
    ) -> Result<Observer, AlmanacError> {
        if !(-90.0..=90.0).contains(&north_latitude) {
            return Err(AlmanacError::InvalidLocation(format!(
                "latitude {north_latitude} outside [-90, 90]"
            )));
        }
        let not_nan = |x: f64, what: &str| {
            if !x.is_finite() {
                return Err(AlmanacError::InvalidLocation(format!("{what} is {x}")));
            }
            NotNan::new(x).map_err(|_| AlmanacError::InvalidLocation(format!("{what} is NaN")))
        };
        Ok(Observer {
            north_latitude: not_nan(north_latitude * RADEG, "latitude")?,
            west_longitude: not_nan(west_longitude * RADEG, "longitude")?,
            elevation: not_nan(elevation, "elevation")?,
        })
    }

    /// Read the site triple from the first non-empty line of a reader.
    ///
    /// Errors
    /// ----------
    /// * [`AlmanacError::IoError`] if reading fails.
    /// * [`AlmanacError::InvalidLocation`] if no line holds a valid triple.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Observer, AlmanacError> {
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                return line.parse();
            }
        }
        Err(AlmanacError::InvalidLocation("empty site description".into()))
    }

    /// Latitude in radians.
    pub fn latitude(&self) -> Radian {
        self.north_latitude.into_inner()
    }

    /// West longitude in radians.
    pub fn longitude(&self) -> Radian {
        self.west_longitude.into_inner()
    }

    /// Geocentric latitude of the site, in radians.
    ///
    /// ```text
    /// φ' = φ − 692.74″·sin 2φ + 1.16″·sin 4φ
    /// ```
    pub fn geocentric_latitude(&self) -> Radian {
        let nlat = self.latitude();
        nlat - (692.74 * RADSEC) * (2.0 * nlat).sin() + (1.16 * RADSEC) * (4.0 * nlat).sin()
    }

    /// Distance of the site from the geocentre, in Earth equatorial radii.
    ///
    /// The ellipsoid term is a cosine series of the latitude; the elevation term uses
    /// feet, 0.1568e-6 radius per foot.
    pub fn earth_radius(&self) -> f64 {
        let nlat = self.latitude();
        let elev_feet = self.elevation.into_inner() * METERS_TO_FEET;
        0.99832707 + 0.00167644 * (2.0 * nlat).cos() - 0.352e-5 * (4.0 * nlat).cos()
            + 0.001e-5 * (6.0 * nlat).cos()
            + 0.1568e-6 * elev_feet
    }
}

impl Default for Observer {
    /// Murray Hill, NJ.
    fn default() -> Self {
        Observer {
            north_latitude: NotNan::new((40.0 + 41.06 / 60.0) * RADEG).unwrap_or_default(),
            west_longitude: NotNan::new((74.0 + 23.98 / 60.0) * RADEG).unwrap_or_default(),
            elevation: NotNan::new(150.0).unwrap_or_default(),
        }
    }
}

impl FromStr for Observer {
    type Err = AlmanacError;

    /// Parse `"nlat wlong elev"`, in degrees, degrees and meters, whitespace separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(AlmanacError::InvalidLocation(format!(
                "expected \"nlat wlong elev\", got {s:?}"
            )));
        }
        let parse = |f: &str| {
            f.parse::<f64>()
                .map_err(|e| AlmanacError::InvalidLocation(format!("{f:?}: {e}")))
        };
        Observer::new(parse(fields[0])?, parse(fields[1])?, parse(fields[2])?)
    }
}
