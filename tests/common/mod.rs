#![allow(dead_code)]

use almanac::catalog::CatalogStar;
use almanac::search::events::Event;
use hifitime::{Duration, Epoch};

/// Murray Hill ΔT model, start of the window at `start`, one day, no comet.
pub fn one_day_from(start: Epoch) -> almanac::almanac::Almanac {
    let params = almanac::almanac::AlmanacParams::builder()
        .start(start)
        .comet(None)
        .build()
        .unwrap();
    almanac::almanac::Almanac::new(params)
}

/// Regulus (SAO 098967), mean place B1950.
pub fn regulus() -> CatalogStar {
    CatalogStar {
        id: "098967".into(),
        ra_hours: 10.0 + 5.0 / 60.0 + 42.645 / 3600.0,
        declination: 12.0 + 12.0 / 60.0 + 44.53 / 3600.0,
        ra_proper_motion: -0.017,
        dec_proper_motion: 0.001,
        parallax: 0.0,
        magnitude: 1.35,
    }
}

pub fn find_event<'a>(events: &'a [Event], message: &str) -> &'a Event {
    events
        .iter()
        .find(|e| e.message == message)
        .unwrap_or_else(|| panic!("no {message:?} in {:?}", messages(events)))
}

pub fn messages(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.message.as_str()).collect()
}

/// Assert that `message` is reported within `seconds` of `expected`.
pub fn assert_event_near(events: &[Event], message: &str, expected: Epoch, seconds: f64) {
    let event = find_event(events, message);
    let epoch = event
        .epoch
        .unwrap_or_else(|| panic!("{message:?} has no instant"));
    let error = (epoch - expected).abs();
    assert!(
        error <= Duration::from_seconds(seconds),
        "{message:?} at {epoch}, expected {expected} ± {seconds} s"
    );
}
