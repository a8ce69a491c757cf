//! # Event search
//!
//! One search pass walks the bodies of a sampled window in their fixed order and turns the
//! sample curves into [`Event`]s:
//!
//! - rise and set of every body (the shadow excepted);
//! - for the Sun: equinoxes and solstices, meteor-shower peaks, astronomical twilight;
//! - for the Moon: the principal phases;
//! - for Mercury and Venus: greatest elongation, morning or evening;
//! - for each later body paired with the current one: eclipses and occultations when the Moon
//!   is involved, transits of Mercury and Venus over the Sun, close conjunctions otherwise.
//!
//! In occultation mode, catalog stars the Moon can reach during the window are refined against
//! it as well. Events are gated on the Sun's elevation and returned significant first, then in
//! time order.
//!
//! See also
//! ------------
//! * [`crossing`] – the threshold scans.
//! * [`occultation::occult`] – the three-stage close-approach refinement.
//! * [`events::EventSink`] – gating, capacity and ordering.

use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::almanac_errors::AlmanacError;
use crate::bodies::planets::Planet;
use crate::bodies::{find_body, star, BodyKind, CelestialBody};
use crate::catalog::CatalogStar;
use crate::constants::{ArcSec, Degree, Radian, MAX_EVENTS, NPTS, RADSEC};
use crate::ephemeris::SamplingWindow;
use crate::kepler::principal_angle;
use crate::ref_system::separation;

use self::crossing::{ElongationSide, HORIZON, METEOR_SHOWERS, TWILIGHT};
use self::events::{Event, EventFlags, EventSink};
use self::occultation::{occult, Contact, Occultation};

pub mod crossing;
pub mod events;
pub mod occultation;

/// Margin around the Moon's right-ascension range when preselecting catalog stars
const STAR_WINDOW_MARGIN: ArcSec = 1000.0;

/// Catalog stars brighter than this need darkness to be observed
const DARK_SKY_MAGNITUDE: f64 = 2.0;

/// Catalog stars brighter than this are significant
const SIGNIFICANT_MAGNITUDE: f64 = 5.0;

/// Tunable thresholds of the event search.
///
/// The defaults are the empirical values of the almanac; reference output depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GatingThresholds {
    /// Highest Sun elevation for events that need darkness
    pub darkness: Degree,
    /// Lowest Sun elevation for events that need sunlight
    pub daylight: Degree,
    /// Tolerance on the medium-pass minimum separation, arcseconds
    pub coarse_margin: ArcSec,
    /// Largest first-sample separation of a reported conjunction, arcseconds
    pub conjunction: ArcSec,
}

impl Default for GatingThresholds {
    fn default() -> Self {
        GatingThresholds {
            darkness: -12.0,
            daylight: 0.0,
            coarse_margin: 50.0,
            conjunction: 5000.0,
        }
    }
}

/// Events of one window.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Instant of the window's first sample
    pub start: Epoch,
    pub events: Vec<Event>,
}

/// Run one search pass over sampled bodies.
///
/// Arguments
/// ---------
/// * `window`: the window the bodies were sampled on.
/// * `bodies`: the bodies in search order, samples filled, the Sun among them.
/// * `stars`: catalog stars, searched only in occultation mode.
/// * `gating`: search thresholds.
///
/// Return
/// ------
/// * The events of the window, significant ones first, then by time.
///
/// Errors
/// ------
/// * [`AlmanacError::InvalidBodyName`] if the Sun is missing from `bodies`.
/// * [`AlmanacError::RefinementFailed`] if an occultation refinement loses its minimum.
/// * [`AlmanacError::EventBufferFull`] if more than [`MAX_EVENTS`] events pass the gates.
pub fn search(
    window: &SamplingWindow,
    bodies: &[CelestialBody],
    stars: &[CatalogStar],
    gating: &GatingThresholds,
) -> Result<Vec<Event>, AlmanacError> {
    let sun = &bodies[find_body(bodies, "sun")?];
    let mut sink = EventSink::new(&sun.samples, *gating, MAX_EVENTS);
    debug!(start = window.start, bodies = bodies.len(), "search pass");

    for (i, body) in bodies.iter().enumerate() {
        if body.kind == BodyKind::Shadow {
            continue;
        }
        rise_and_set(&mut sink, body)?;
        match body.kind {
            BodyKind::Sun => solar_events(&mut sink, body)?,
            BodyKind::Moon => {
                for (phase, time) in crossing::lunar_phases(&body.samples) {
                    sink.push(Event::new(phase.to_string(), time, EventFlags::TIMED))?;
                }
            }
            BodyKind::Planet(Planet::Mercury | Planet::Venus) => {
                elongation(&mut sink, body, sun)?;
            }
            _ => {}
        }
        for other in &bodies[i + 1..] {
            pair_events(&mut sink, window, gating, body, other)?;
        }
    }

    if window.occultation_mode && !stars.is_empty() {
        let moon = &bodies[find_body(bodies, "moon")?];
        star_occultations(&mut sink, window, gating, moon, stars)?;
    }

    let events = sink.flush(window);
    debug!(start = window.start, events = events.len(), "search pass done");
    Ok(events)
}

fn rise_and_set(sink: &mut EventSink, body: &CelestialBody) -> Result<(), AlmanacError> {
    let flags = if body.kind == BodyKind::Sun {
        EventFlags::TIMED
    } else {
        EventFlags::TIMED.in_darkness()
    };
    if let Some(t) = crossing::rise(&body.samples, HORIZON) {
        sink.push(Event::new(format!("{} rises", body.display_name), t, flags))?;
    }
    if let Some(t) = crossing::set(&body.samples, HORIZON) {
        sink.push(Event::new(format!("{} sets", body.display_name), t, flags))?;
    }
    Ok(())
}

fn solar_events(sink: &mut EventSink, sun: &CelestialBody) -> Result<(), AlmanacError> {
    for point in crossing::SeasonPoint::ALL {
        if let Some(t) = crossing::solstice(&sun.samples, point) {
            sink.push(Event::new(point.to_string(), t, EventFlags::TIMED.significant()))?;
        }
    }
    for (shower, longitude) in METEOR_SHOWERS {
        if let Some(t) = crossing::ecliptic_crossing(&sun.samples, longitude) {
            sink.push(Event::new(
                format!("{shower} meteor shower"),
                t,
                EventFlags::SIGNIFICANT,
            ))?;
        }
    }
    if let Some(t) = crossing::rise(&sun.samples, TWILIGHT) {
        sink.push(Event::new("Twilight starts", t, EventFlags::TIMED))?;
    }
    if let Some(t) = crossing::set(&sun.samples, TWILIGHT) {
        sink.push(Event::new("Twilight ends", t, EventFlags::TIMED))?;
    }
    Ok(())
}

fn elongation(
    sink: &mut EventSink,
    planet: &CelestialBody,
    sun: &CelestialBody,
) -> Result<(), AlmanacError> {
    if crossing::greatest_elongation(&planet.samples, &sun.samples).is_none() {
        return Ok(());
    }
    let side = match crossing::elongation_side(&planet.samples, &sun.samples) {
        ElongationSide::Morning => "Morning",
        ElongationSide::Evening => "Evening",
    };
    sink.push(Event::new(
        format!("{side} elongation of {}", planet.display_name),
        0.0,
        EventFlags::SIGNIFICANT,
    ))
}

/// Contact at or after the window start.
fn in_window(contact: Option<Contact>) -> Option<Contact> {
    contact.filter(|c| c.time >= 0.0)
}

fn push_contact(
    sink: &mut EventSink,
    message: String,
    contact: Option<Contact>,
    flags: EventFlags,
) -> Result<(), AlmanacError> {
    match in_window(contact) {
        Some(c) => sink.push(Event::new(message, c.time, flags)),
        None => Ok(()),
    }
}

/// Refine a pair and keep the approach only if its closest instant is inside the window.
fn approach(
    window: &SamplingWindow,
    gating: &GatingThresholds,
    first: &CelestialBody,
    second: &CelestialBody,
) -> Result<Option<Occultation>, AlmanacError> {
    Ok(occult(window, first, second, gating.coarse_margin)?
        .filter(|o| o.closest.time >= 0.0))
}

fn pair_events(
    sink: &mut EventSink,
    window: &SamplingWindow,
    gating: &GatingThresholds,
    body: &CelestialBody,
    other: &CelestialBody,
) -> Result<(), AlmanacError> {
    let flags = EventFlags::TIMED.significant();
    match (&body.kind, &other.kind) {
        (BodyKind::Sun, BodyKind::Moon) | (BodyKind::Moon, BodyKind::Shadow) => {
            let Some(o) = approach(window, gating, body, other)? else {
                return Ok(());
            };
            // the Sun for a solar eclipse, the Moon for a lunar one
            let eclipsed = &body.display_name;
            let phases = [
                ("Partial", "begins", o.partial_begin),
                ("Total", "begins", o.total_begin),
                ("Total", "ends", o.total_end),
                ("Partial", "ends", o.partial_end),
            ];
            for (kind, edge, contact) in phases {
                push_contact(
                    sink,
                    format!("{kind} eclipse of {eclipsed} {edge}"),
                    contact,
                    flags,
                )?;
            }
        }
        (BodyKind::Moon, _) | (_, BodyKind::Moon) => {
            let Some(o) = approach(window, gating, body, other)? else {
                return Ok(());
            };
            let occulted = if body.kind == BodyKind::Moon {
                &other.display_name
            } else {
                &body.display_name
            };
            push_contact(
                sink,
                format!("Occultation of {occulted} begins"),
                o.partial_begin,
                flags,
            )?;
            push_contact(
                sink,
                format!("Occultation of {occulted} ends"),
                o.partial_end,
                flags,
            )?;
        }
        (BodyKind::Sun, BodyKind::Planet(Planet::Mercury | Planet::Venus)) => {
            let Some(o) = approach(window, gating, body, other)? else {
                return Ok(());
            };
            let flags = flags.in_sunlight();
            let transiting = &other.display_name;
            push_contact(
                sink,
                format!("Transit of {transiting} begins"),
                o.partial_begin,
                flags,
            )?;
            push_contact(
                sink,
                format!("Transit of {transiting} ends"),
                o.partial_end,
                flags,
            )?;
        }
        (BodyKind::Sun, _) | (_, BodyKind::Shadow) => {}
        _ => {
            if separation(&body.samples[0], &other.samples[0]) <= gating.conjunction {
                sink.push(Event::plain(format!(
                    "{} is in the house of {}",
                    body.display_name, other.display_name
                )))?;
            }
        }
    }
    Ok(())
}

/// Whether a right ascension lies in `[low, high]`, the range wrapping through 0h when
/// `low > high`.
fn in_ra_window(ra: Radian, low: Radian, high: Radian) -> bool {
    if low <= high {
        (low..=high).contains(&ra)
    } else {
        ra >= low || ra <= high
    }
}

/// Occultations of catalog stars by the Moon.
///
/// A star is refined only when its apparent right ascension at the window start lies in the
/// Moon's range over the window widened by 1000″, and when it lies in the ecliptic belt the
/// Moon can cover.
fn star_occultations(
    sink: &mut EventSink,
    window: &SamplingWindow,
    gating: &GatingThresholds,
    moon: &CelestialBody,
    stars: &[CatalogStar],
) -> Result<(), AlmanacError> {
    let margin = STAR_WINDOW_MARGIN * RADSEC;
    let low = principal_angle(moon.samples[0].ra - margin);
    let high = principal_angle(moon.samples[NPTS + 1].ra + margin);
    let frame = window.frame_at(0.0);
    let mut candidates = 0;

    for catalog_star in stars {
        let ra = principal_angle(star::position(catalog_star, &frame).alpha);
        if !in_ra_window(ra, low, high) {
            continue;
        }
        let state = star::mean_ecliptic_state(catalog_star, &frame);
        if !star::in_ecliptic_belt(&state, frame.eday) {
            trace!(id = %catalog_star.id, "outside the ecliptic belt");
            continue;
        }
        candidates += 1;

        let mut body = CelestialBody::star(catalog_star.clone());
        window.sample(std::slice::from_mut(&mut body));
        let Some(o) = occult(window, moon, &body, gating.coarse_margin)? else {
            continue;
        };

        let mut flags = EventFlags::TIMED;
        if catalog_star.magnitude > DARK_SKY_MAGNITUDE {
            flags = flags.in_darkness();
        }
        if catalog_star.magnitude < SIGNIFICANT_MAGNITUDE {
            flags = flags.significant();
        }
        let above_horizon = |c: Option<Contact>| in_window(c).filter(|c| c.elevation >= 0.0);
        push_contact(
            sink,
            format!("Occultation of {} begins", body.display_name),
            above_horizon(o.partial_begin),
            flags,
        )?;
        push_contact(
            sink,
            format!("Occultation of {} ends", body.display_name),
            above_horizon(o.partial_end),
            flags,
        )?;
    }
    debug!(stars = stars.len(), candidates, "star occultation pass");
    Ok(())
}
