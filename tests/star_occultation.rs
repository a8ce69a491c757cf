use std::io::Cursor;

use almanac::almanac::{Almanac, AlmanacParams};
use almanac::bodies::{solar_system, CelestialBody};
use almanac::catalog::{read_catalog, CatalogStar};
use almanac::search::occultation::occult;
use almanac::time::{day_to_epoch, utc_epoch};
use hifitime::Duration;

mod common;
use common::{assert_event_near, find_event, messages, regulus};

fn occultation_almanac(stars: Vec<CatalogStar>) -> Almanac {
    let params = AlmanacParams::builder()
        .start(utc_epoch(2026, 2, 3, 0, 0, 0.0))
        .comet(None)
        .occultation_mode(true)
        .build()
        .unwrap();
    Almanac::new(params).with_catalog(stars)
}

#[test]
fn test_regulus_occultation_2026() {
    let mut almanac = occultation_almanac(vec![regulus()]);
    let window = almanac.window(0);
    let events = almanac.search(&window).unwrap();

    assert_event_near(
        &events,
        "Occultation of SAO 098967 begins",
        utc_epoch(2026, 2, 3, 1, 52, 54.5),
        60.0,
    );
    assert_event_near(
        &events,
        "Occultation of SAO 098967 ends",
        utc_epoch(2026, 2, 3, 2, 52, 52.5),
        60.0,
    );
    // a first-magnitude star is significant and needs no dark sky
    let begins = find_event(&events, "Occultation of SAO 098967 begins");
    assert!(begins.flags.significant);
    assert!(!begins.flags.requires_darkness);
}

#[test]
fn test_catalog_record_matches_struct() {
    let line = format!(
        "{:<6}{:12}{:<12} {:>6} {:<12} {:>6} {:>3}  {:>4}",
        "098967", "", "10 05 42.645", "-0.017", "+12 12 44.53", "+0.001", "0", "1.35"
    );
    let stars = read_catalog(Cursor::new(line)).unwrap();
    assert_eq!(stars.len(), 1);
    assert_eq!(stars[0].id, "098967");
    assert!((stars[0].ra_hours - regulus().ra_hours).abs() < 1e-9);
    assert!((stars[0].declination - regulus().declination).abs() < 1e-9);
    assert_eq!(stars[0].magnitude, 1.35);
}

#[test]
fn test_star_away_from_the_moon() {
    // Spica, some fifty degrees east of the Moon of that night
    let spica = CatalogStar {
        id: "157923".into(),
        ra_hours: 13.0 + 22.0 / 60.0 + 33.3 / 3600.0,
        declination: -(10.0 + 54.0 / 60.0 + 3.0 / 3600.0),
        ra_proper_motion: -0.003,
        dec_proper_motion: -0.030,
        parallax: 0.0,
        magnitude: 0.98,
    };
    let mut almanac = occultation_almanac(vec![spica]);
    let window = almanac.window(0);
    let events = almanac.search(&window).unwrap();
    assert!(
        !events.iter().any(|e| e.message.starts_with("Occultation of SAO")),
        "{:?}",
        messages(&events)
    );
}

#[test]
fn test_catalog_ignored_outside_occultation_mode() {
    let params = AlmanacParams::builder()
        .start(utc_epoch(2026, 2, 3, 0, 0, 0.0))
        .comet(None)
        .build()
        .unwrap();
    let mut almanac = Almanac::new(params).with_catalog(vec![regulus()]);
    let window = almanac.window(0);
    let events = almanac.search(&window).unwrap();
    assert!(!messages(&events).contains(&"Occultation of SAO 098967 begins"));
}

#[test]
fn test_refinement_is_repeatable() {
    let mut almanac = occultation_almanac(vec![regulus()]);
    let window = almanac.window(0);
    almanac.search(&window).unwrap();

    let moon = almanac
        .bodies()
        .iter()
        .find(|b| b.name == "moon")
        .unwrap();
    let mut star = CelestialBody::star(regulus());
    window.sample(std::slice::from_mut(&mut star));

    let first = occult(&window, moon, &star, 50.0).unwrap().unwrap();
    let second = occult(&window, moon, &star, 50.0).unwrap().unwrap();
    assert_eq!(first, second);
    // contacts straddle the closest approach
    let begin = first.partial_begin.unwrap();
    let end = first.partial_end.unwrap();
    assert!(begin.time < first.closest.time && first.closest.time < end.time);
    // about an hour, 1/12 of a one-day window per hour
    assert!((end.time - begin.time - 0.5).abs() < 0.01, "{first:?}");
}

#[test]
fn test_short_window_keeps_the_closest_approach() {
    // 0.01 day, 72 s between samples, around the closest approach of 02:22:21 UTC
    let params = AlmanacParams::builder()
        .start(utc_epoch(2026, 2, 3, 2, 15, 0.0))
        .period(0.01)
        .comet(None)
        .occultation_mode(true)
        .build()
        .unwrap();
    let almanac = Almanac::new(params);
    let window = almanac.window(0);
    let mut bodies = solar_system(None);
    window.sample(&mut bodies);
    let moon = bodies.iter().find(|b| b.name == "moon").unwrap();
    let mut star = CelestialBody::star(regulus());
    window.sample(std::slice::from_mut(&mut star));

    let occultation = occult(&window, moon, &star, 50.0).unwrap().unwrap();
    let closest = day_to_epoch(window.day_at(occultation.closest.time));
    let error = (closest - utc_epoch(2026, 2, 3, 2, 22, 21.0)).abs();
    assert!(error <= Duration::from_seconds(30.0), "closest at {closest}");
}
