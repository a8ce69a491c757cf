//! # Celestial bodies
//!
//! A [`CelestialBody`] couples an identity (catalog name and display name), a model
//! ([`BodyKind`]) and the fixed-length sequence of [`PositionSample`]s of the current
//! sampling window.
//!
//! Models fall in three families:
//!
//! - heliocentric ecliptic theories run through the full coordinate pipeline
//!   ([`planets`], the comet, the catalog [`star`]s);
//! - geocentric theories that skip the heliocentric stage ([`sun`], [`moon`]);
//! - the [`shadow`], derived algebraically from the Sun and the Moon.
//!
//! The Sun, the Moon and the shadow of one instant are computed together in a
//! [`LuminaryContext`], so the shadow always sees the Sun and the Moon of its own instant.
//!
//! ## Fixed order
//!
//! [`solar_system`] returns the bodies in the order the event search walks them: sun, moon,
//! shadow, mercury, venus, mars, jupiter, saturn, uranus, neptune, pluto, comet.

use crate::almanac_errors::AlmanacError;
use crate::catalog::CatalogStar;
use crate::constants::SAMPLE_COUNT;
use crate::frame::Frame;
use crate::orbit_type::cometary_element::CometElements;
use crate::ref_system::{
    geocentric_to_topocentric, heliocentric_to_geocentric, GeocentricPosition, PositionSample,
};

use self::moon::LunarPosition;
use self::planets::Planet;

pub mod moon;
pub mod planets;
pub mod ring;
pub mod shadow;
pub mod star;
pub mod sun;

/// Model of a body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyKind {
    Sun,
    Moon,
    Shadow,
    Planet(Planet),
    Comet(CometElements),
    Star(CatalogStar),
}

/// Geocentric places of the Sun and the Moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminaryContext {
    pub sun: GeocentricPosition,
    pub moon: LunarPosition,
    pub shadow: GeocentricPosition,
}

impl LuminaryContext {
    /// Compute the Sun, the Moon and the shadow for the frame instant.
    pub fn new(frame: &Frame) -> Self {
        let sun = heliocentric_to_geocentric(&sun::pipeline_state(&frame.sun), frame);
        let moon = moon::position(frame);
        let shadow = shadow::position(&sun, &moon.geocentric, frame.sun_distance());
        LuminaryContext { sun, moon, shadow }
    }
}

impl BodyKind {
    /// Geocentric apparent place at the frame instant.
    pub fn geocentric(&self, frame: &Frame, luminaries: &LuminaryContext) -> GeocentricPosition {
        match self {
            BodyKind::Sun => luminaries.sun,
            BodyKind::Moon => luminaries.moon.geocentric,
            BodyKind::Shadow => luminaries.shadow,
            BodyKind::Planet(planet) => {
                heliocentric_to_geocentric(&planet.heliocentric(frame), frame)
            }
            BodyKind::Comet(elements) => {
                heliocentric_to_geocentric(&elements.heliocentric(frame.eday), frame)
            }
            BodyKind::Star(star) => star::position(star, frame),
        }
    }

    /// Topocentric sample at the frame instant; the Moon's carries its lunation.
    pub fn sample(&self, frame: &Frame, luminaries: &LuminaryContext) -> PositionSample {
        let mut sample = geocentric_to_topocentric(&self.geocentric(frame, luminaries), frame);
        if let BodyKind::Moon = self {
            sample.phase = Some(luminaries.moon.lunation);
        }
        sample
    }
}

/// A body of the almanac and its samples over the current window.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    /// Lowercase catalog name
    pub name: String,
    /// Name used in event messages
    pub display_name: String,
    pub kind: BodyKind,
    pub samples: [PositionSample; SAMPLE_COUNT],
}

impl CelestialBody {
    fn new(name: impl Into<String>, display_name: impl Into<String>, kind: BodyKind) -> Self {
        CelestialBody {
            name: name.into(),
            display_name: display_name.into(),
            kind,
            samples: [PositionSample::default(); SAMPLE_COUNT],
        }
    }

    pub fn sun() -> Self {
        Self::new("sun", "The sun", BodyKind::Sun)
    }

    pub fn moon() -> Self {
        Self::new("moon", "The moon", BodyKind::Moon)
    }

    pub fn shadow() -> Self {
        Self::new("shadow", "The shadow", BodyKind::Shadow)
    }

    pub fn planet(planet: Planet) -> Self {
        Self::new(planet.name(), planet.to_string(), BodyKind::Planet(planet))
    }

    pub fn comet(elements: CometElements) -> Self {
        Self::new("comet", "Comet", BodyKind::Comet(elements))
    }

    /// A catalog star, displayed as `SAO <id>`.
    pub fn star(star: CatalogStar) -> Self {
        let display_name = format!("SAO {}", star.id);
        Self::new("star", display_name, BodyKind::Star(star))
    }

    /// Whether `name` is the catalog name or the display name of the body.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.display_name == name
    }

    /// Position sample of the body at the frame instant.
    pub fn compute(&self, frame: &Frame, luminaries: &LuminaryContext) -> PositionSample {
        self.kind.sample(frame, luminaries)
    }
}

/// The bodies of the almanac in search order, the comet last when present.
pub fn solar_system(comet: Option<CometElements>) -> Vec<CelestialBody> {
    let mut bodies = vec![
        CelestialBody::sun(),
        CelestialBody::moon(),
        CelestialBody::shadow(),
    ];
    bodies.extend(Planet::ALL.into_iter().map(CelestialBody::planet));
    bodies.extend(comet.map(CelestialBody::comet));
    bodies
}

/// Index of the body answering to `name`.
///
/// Errors
/// ------
/// * [`AlmanacError::InvalidBodyName`] if no body answers to it.
pub fn find_body(bodies: &[CelestialBody], name: &str) -> Result<usize, AlmanacError> {
    bodies
        .iter()
        .position(|b| b.answers_to(name))
        .ok_or_else(|| AlmanacError::InvalidBodyName(name.to_string()))
}

#[cfg(test)]
mod bodies_test {
    use super::*;
    use crate::constants::RADEG;
    use crate::observers::Observer;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_solar_system_order() {
        let names: Vec<_> = solar_system(Some(CometElements::default()))
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(
            names,
            [
                "sun", "moon", "shadow", "mercury", "venus", "mars", "jupiter", "saturn",
                "uranus", "neptune", "pluto", "comet"
            ]
        );
        assert_eq!(solar_system(None).len(), 11);
    }

    #[test]
    fn test_find_body() {
        let bodies = solar_system(None);
        assert_eq!(find_body(&bodies, "moon"), Ok(1));
        assert_eq!(find_body(&bodies, "The shadow"), Ok(2));
        assert_eq!(find_body(&bodies, "Saturn"), Ok(7));
        assert_eq!(
            find_body(&bodies, "comet"),
            Err(AlmanacError::InvalidBodyName("comet".into()))
        );
    }

    #[test]
    fn test_luminaries_j2000() {
        let frame = Frame::new(36525.0, 64.0, Observer::default(), false);
        let luminaries = LuminaryContext::new(&frame);

        // apparent solar longitude 280.37°, declination −23.03°
        assert_abs_diff_eq!(luminaries.sun.longitude / RADEG, 280.37, epsilon = 0.02);
        assert_abs_diff_eq!(luminaries.sun.delta / RADEG, -23.03, epsilon = 0.02);
        assert_abs_diff_eq!(
            luminaries.shadow.delta,
            -luminaries.sun.delta,
            epsilon = 1e-15
        );

        let moon = CelestialBody::moon().compute(&frame, &luminaries);
        assert_eq!(moon.phase, Some(luminaries.moon.lunation));
        let sun = CelestialBody::sun().compute(&frame, &luminaries);
        assert_eq!(sun.phase, None);
        assert_eq!(sun.mag, -26.5);
    }

    #[test]
    fn test_star_body() {
        let star = CatalogStar {
            id: "098967".into(),
            ra_hours: 10.1,
            declination: 12.2,
            ra_proper_motion: 0.0,
            dec_proper_motion: 0.0,
            parallax: 0.0,
            magnitude: 1.35,
        };
        let body = CelestialBody::star(star);
        assert_eq!(body.display_name, "SAO 098967");
        assert!(body.answers_to("star"));
    }
}
