//! # Planetary theories
//!
//! Every planet shares one pipeline: mean elements of date, periodic perturbations, the
//! elliptic motion reduced to the ecliptic ([`MeanElements::heliocentric`]), optional fixed
//! corrections of longitude and latitude, then an empirical magnitude law. A planet differs
//! from another only by its [`PlanetModel`] parameters.
//!
//! | Planet | Elements | Perturbations | Magnitude |
//! |---|---|---|---|
//! | Mercury | polynomials | Venus, Earth, Jupiter, Saturn | phase angle |
//! | Venus | polynomials | long-period anomaly terms + series | phase angle |
//! | Mars | polynomials | – | phase angle |
//! | Jupiter | polynomials | fixed offsets | constant |
//! | Saturn | polynomials | fixed offsets | ring geometry |
//! | Uranus, Neptune, Pluto | J2000 elements + secular rates | fixed offsets | ring geometry |

use std::fmt;
use std::str::FromStr;

use crate::almanac_errors::AlmanacError;
use crate::bodies::ring::ring_magnitude;
use crate::constants::{ArcSec, Day, Degree, JULIAN_CENTURY, RADEG, RADSEC};
use crate::earth_orientation::Centuries;
use crate::frame::Frame;
use crate::kepler::{principal_angle, pyth};
use crate::orbit_type::keplerian_element::{mean_anomaly_from_degrees, MeanElements, Perturbations};
use crate::orbit_type::OrbitalState;
use crate::series::cos_series;
use crate::tables::{self, mercury, venus, SecularElements};

/// The eight planets of the almanac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Empirical visual magnitude law at unit distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MagnitudeLaw {
    /// Cubic in the phase angle `i` (degrees): `c₀ + c₁·i + c₂·i² + c₃·i³`
    Phase([f64; 4]),
    /// Constant
    Fixed(f64),
    /// Ring geometry, see [`ring_magnitude`]
    Ring,
}

/// Element source of a planet: a theory evaluated at `eday`.
type ElementTheory = fn(Day, Centuries) -> (MeanElements, Perturbations);

/// Parameters of one planetary theory.
#[derive(Debug, Clone, Copy)]
pub struct PlanetModel {
    pub elements: ElementTheory,
    /// Added to the ecliptic longitude after the reduction
    pub longitude_offset: ArcSec,
    /// Added to the ecliptic latitude after the reduction
    pub latitude_offset: ArcSec,
    /// Semidiameter at 1 au
    pub semidiameter: ArcSec,
    pub magnitude: MagnitudeLaw,
}

impl Planet {
    /// All planets, innermost first.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Lowercase catalog name.
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
            Planet::Pluto => "pluto",
        }
    }

    /// Theory parameters of the planet.
    pub fn model(&self) -> PlanetModel {
        const RING_OFFSETS: (ArcSec, ArcSec) = (-1185.0, -51.0);
        let ringed = |elements: ElementTheory| PlanetModel {
            elements,
            longitude_offset: RING_OFFSETS.0,
            latitude_offset: RING_OFFSETS.1,
            semidiameter: 83.33,
            magnitude: MagnitudeLaw::Ring,
        };
        match self {
            Planet::Mercury => PlanetModel {
                elements: mercury_elements,
                longitude_offset: 0.0,
                latitude_offset: 0.0,
                semidiameter: 3.34,
                magnitude: MagnitudeLaw::Phase([-0.003, 0.01815, 0.0001023, 0.0]),
            },
            Planet::Venus => PlanetModel {
                elements: venus_elements,
                longitude_offset: 0.0,
                latitude_offset: 0.0,
                semidiameter: 8.41,
                magnitude: MagnitudeLaw::Phase([-4.0, 0.01322, 0.0, 0.0000004247]),
            },
            Planet::Mars => PlanetModel {
                elements: mars_elements,
                longitude_offset: 0.0,
                latitude_offset: 0.0,
                semidiameter: 4.68,
                magnitude: MagnitudeLaw::Phase([-1.30, 0.01486, 0.0, 0.0]),
            },
            Planet::Jupiter => PlanetModel {
                elements: jupiter_elements,
                longitude_offset: 555.0,
                latitude_offset: -51.0,
                semidiameter: 98.47,
                magnitude: MagnitudeLaw::Fixed(-8.93),
            },
            Planet::Saturn => ringed(saturn_elements),
            Planet::Uranus => ringed(|eday, _| secular_elements(&tables::URANUS, eday)),
            Planet::Neptune => ringed(|eday, _| secular_elements(&tables::NEPTUNE, eday)),
            Planet::Pluto => ringed(|eday, _| secular_elements(&tables::PLUTO, eday)),
        }
    }

    /// Heliocentric ecliptic state of the planet at the frame instant.
    pub fn heliocentric(&self, frame: &Frame) -> OrbitalState {
        let model = self.model();
        let (elements, perturbations) = (model.elements)(frame.eday, frame.capt);
        let mut state = elements.heliocentric(&perturbations);

        state.lambda = principal_angle(state.lambda + model.longitude_offset * RADSEC);
        state.beta += model.latitude_offset * RADSEC;
        state.semi = model.semidiameter;
        state.mag = match model.magnitude {
            MagnitudeLaw::Phase(c) => {
                let i = phase_angle(&state, frame.eday);
                c[0] + i * (c[1] + i * (c[2] + i * c[3]))
            }
            MagnitudeLaw::Fixed(m) => m,
            MagnitudeLaw::Ring => ring_magnitude(&state, frame),
        };
        state
    }
}

impl fmt::Display for Planet {
    /// Display name, capitalized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Planet {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Planet::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AlmanacError::InvalidBodyName(s.to_string()))
    }
}

/// Phase angle of a planet, Sun–planet–Earth, in degrees.
///
/// Uses the mean longitude of the Earth seen from the Sun,
/// `99.696678° + 0.9856473354°·eday`.
pub fn phase_angle(state: &OrbitalState, eday: Day) -> Degree {
    let lsun = (99.696678 + 0.9856473354 * eday) * RADEG;
    let elong = state.lambda - lsun;
    let rad = state.rad;
    let ci = (rad - elong.cos()) / (1.0 + rad * rad - 2.0 * rad * elong.cos()).sqrt();
    pyth(ci).atan2(ci) / RADEG
}

fn mercury_elements(eday: Day, capt: Centuries) -> (MeanElements, Perturbations) {
    let Centuries { t, t2, .. } = capt;

    let q0 = (102.28 + 4.092334429 * eday) * RADEG;
    let v0 = (212.536 + 1.602126105 * eday) * RADEG;
    let t0 = (-1.45 + 0.985604737 * eday) * RADEG;
    let j0 = (225.36 + 0.083086735 * eday) * RADEG;
    let s0 = (175.68 + 0.033455441 * eday) * RADEG;

    let elements = MeanElements {
        semi_major_axis: 0.3870986,
        eccentricity: 0.20561421 + 0.00002046 * t - 0.03e-6 * t2,
        inclination: (7.0028806 + 0.0018608 * t - 18.3e-6 * t2) * RADEG,
        node: (47.145944 + 1.185208 * t + 0.0001739 * t2) * RADEG,
        perihelion: (75.899697 + 1.555490 * t + 0.0002947 * t2) * RADEG,
        mean_anomaly: mean_anomaly_from_degrees(102.279381 + 4.0923344364 * eday + 6.7e-6 * t2),
        daily_motion: 4.0923770233,
    };

    let longitude = cos_series(&mercury::LONGITUDE_VENUS, &[q0, -v0])
        + cos_series(&mercury::LONGITUDE_EARTH, &[q0, -t0])
        + cos_series(&mercury::LONGITUDE_JUPITER, &[q0, -j0])
        + cos_series(&mercury::LONGITUDE_SATURN, &[q0, -s0]);
    let log_radius = cos_series(&mercury::RADIUS_VENUS, &[q0, -v0])
        + cos_series(&mercury::RADIUS_EARTH, &[q0, -t0])
        + cos_series(&mercury::RADIUS_JUPITER, &[q0, -j0]);

    (
        elements,
        Perturbations {
            longitude: longitude * RADSEC,
            latitude: 0.0,
            log_radius,
        },
    )
}

fn venus_elements(eday: Day, capt: Centuries) -> (MeanElements, Perturbations) {
    let Centuries { t, t2, .. } = capt;

    let v0 = (212.60 + 1.602130154 * eday) * RADEG;
    let t0 = (358.63 + 0.985608747 * eday) * RADEG;
    let m0 = (319.74 + 0.524032490 * eday) * RADEG;
    let j0 = (225.43 + 0.083090842 * eday) * RADEG;
    let s0 = (175.8 + 0.033459258 * eday) * RADEG;

    // long-period terms of the mean anomaly
    let mut anom = mean_anomaly_from_degrees(212.603219 + 1.6021301540 * eday + 0.00128605 * t2);
    anom += (2.761 - 0.022 * t) * RADSEC * (13.0 * t0 - 8.0 * v0 + 43.83 * RADEG + 4.52 * RADEG * t).sin()
        + 0.268 * RADSEC * (4.0 * m0 - 7.0 * t0 + 3.0 * v0).cos()
        + 0.019 * RADSEC * (4.0 * m0 - 7.0 * t0 + 3.0 * v0).sin()
        - 0.208 * RADSEC * (s0 + 1.4 * RADEG * t).sin();

    let elements = MeanElements {
        semi_major_axis: 0.7233316,
        eccentricity: 0.00682069 - 0.00004774 * t + 0.091e-6 * t2,
        inclination: (3.393631 + 0.0010058 * t - 0.97e-6 * t2) * RADEG,
        node: (75.779647 + 0.89985 * t + 0.00041 * t2) * RADEG,
        perihelion: (130.163833 + 1.408036 * t - 0.0009763 * t2) * RADEG,
        mean_anomaly: anom,
        daily_motion: 1.6021687039,
    };

    let perturbations = Perturbations {
        longitude: cos_series(&venus::LONGITUDE, &[v0, t0, m0, j0]) * RADSEC,
        latitude: cos_series(&venus::LATITUDE, &[v0, t0, j0]) * RADSEC,
        log_radius: cos_series(&venus::RADIUS, &[v0, t0, m0, j0]),
    };
    (elements, perturbations)
}

fn mars_elements(eday: Day, capt: Centuries) -> (MeanElements, Perturbations) {
    let Centuries { t, t2, .. } = capt;
    let elements = MeanElements {
        semi_major_axis: 1.5236915,
        eccentricity: 0.09331290 + 0.000092064 * t,
        inclination: (1.850333 - 6.75e-4 * t) * RADEG,
        node: (48.786442 + 0.770992 * t) * RADEG,
        perihelion: (334.218203 + 1.840758 * t + 1.30e-4 * t2) * RADEG,
        mean_anomaly: mean_anomaly_from_degrees(319.529425 + 0.5240207666 * eday + 1.808e-4 * t2),
        daily_motion: 0.5240711638,
    };
    (elements, Perturbations::default())
}

fn jupiter_elements(eday: Day, capt: Centuries) -> (MeanElements, Perturbations) {
    let t = capt.t;
    let elements = MeanElements {
        semi_major_axis: 5.202803,
        eccentricity: 0.0483376 + 163.0e-6 * t,
        inclination: (1.308660 - 0.0055 * t) * RADEG,
        node: (99.43785 + 1.011 * t) * RADEG,
        perihelion: (12.71165 + 1.611 * t) * RADEG,
        mean_anomaly: mean_anomaly_from_degrees(225.22165 + 0.0830912 * eday - 0.0484 * t),
        daily_motion: 299.1284 / 3600.0,
    };
    (elements, Perturbations::default())
}

fn saturn_elements(eday: Day, capt: Centuries) -> (MeanElements, Perturbations) {
    let t = capt.t;
    let elements = MeanElements {
        semi_major_axis: 9.538843,
        eccentricity: 0.0558900 - 0.000347 * t,
        inclination: (2.49256 - 0.0044 * t) * RADEG,
        node: (112.78364 + 0.87306 * t) * RADEG,
        perihelion: (91.08897 + 1.95917 * t) * RADEG,
        mean_anomaly: mean_anomaly_from_degrees(175.47630 + 0.03345972 * eday - 0.56527 * t),
        daily_motion: 120.4550 / 3600.0,
    };
    (elements, Perturbations::default())
}

/// Mean elements propagated linearly from their J2000 values.
///
/// The semi-major axis and eccentricity rates are per Julian century, the angular rates in
/// arcseconds per Julian century.
pub fn secular_elements(table: &SecularElements, eday: Day) -> (MeanElements, Perturbations) {
    let cy = (eday - table.epoch) / JULIAN_CENTURY;
    let semi_major_axis = table.semi_major_axis + table.semi_major_axis_rate * cy;
    let eccentricity = table.eccentricity + table.eccentricity_rate * cy;

    let cy = cy / 3600.0;
    let perihelion = table.perihelion + table.perihelion_rate * cy;
    let anom = table.mean_longitude + table.mean_longitude_rate * cy - perihelion;

    let elements = MeanElements {
        semi_major_axis,
        eccentricity,
        inclination: (table.inclination + table.inclination_rate * cy) * RADEG,
        node: (table.node + table.node_rate * cy) * RADEG,
        perihelion: perihelion * RADEG,
        mean_anomaly: mean_anomaly_from_degrees(anom),
        daily_motion: table.mean_longitude_rate / JULIAN_CENTURY / 3600.0,
    };
    (elements, Perturbations::default())
}

#[cfg(test)]
mod planets_test {
    use super::*;
    use crate::observers::Observer;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_names() {
        assert_eq!(Planet::Mercury.to_string(), "Mercury");
        assert_eq!("SATURN".parse::<Planet>(), Ok(Planet::Saturn));
        assert_eq!(
            "vulcan".parse::<Planet>(),
            Err(AlmanacError::InvalidBodyName("vulcan".into()))
        );
    }

    #[test]
    fn test_mean_distances() {
        let frame = Frame::new(45000.0, 0.0, Observer::default(), false);
        let bounds = [
            (Planet::Mercury, 0.30, 0.47),
            (Planet::Venus, 0.71, 0.73),
            (Planet::Mars, 1.38, 1.67),
            (Planet::Jupiter, 4.95, 5.46),
            (Planet::Saturn, 9.0, 10.1),
            (Planet::Uranus, 18.2, 20.1),
            (Planet::Neptune, 29.7, 30.4),
            (Planet::Pluto, 29.6, 49.4),
        ];
        for (planet, lo, hi) in bounds {
            let state = planet.heliocentric(&frame);
            assert!(
                state.rad > lo && state.rad < hi,
                "{planet}: r = {}",
                state.rad
            );
            assert!((0.0..crate::constants::DPI).contains(&state.lambda));
            assert!(state.beta.abs() < 18.0 * RADEG);
        }
    }

    #[test]
    fn test_secular_elements_at_epoch() {
        let (elements, _) = secular_elements(&tables::URANUS, tables::URANUS.epoch);
        assert_eq!(elements.semi_major_axis, tables::URANUS.semi_major_axis);
        assert_abs_diff_eq!(
            elements.mean_anomaly,
            (313.23218 - 170.96424) * RADEG,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            elements.daily_motion * 365.25 * 84.0,
            360.0,
            epsilon = 2.0
        );
    }

    #[test]
    fn test_phase_angle() {
        // a planet exactly at opposition is seen fully lit
        let eday = 40000.0;
        let lsun = (99.696678 + 0.9856473354 * eday) * RADEG;
        let state = OrbitalState {
            lambda: lsun,
            rad: 5.2,
            ..Default::default()
        };
        assert_abs_diff_eq!(phase_angle(&state, eday), 0.0, epsilon = 1e-6);
    }
}
