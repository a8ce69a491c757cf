use approx::assert_abs_diff_eq;

use almanac::bodies::solar_system;
use almanac::constants::{RADEG, SAMPLE_COUNT};
use almanac::ref_system::{horizon_to_equatorial, separation};
use almanac::time::{epoch_to_day, utc_epoch};

mod common;
use common::one_day_from;

#[test]
fn test_horizon_round_trip() {
    let almanac = one_day_from(utc_epoch(2024, 6, 20, 3, 0, 0.0));
    let window = almanac.window(0);
    let mut bodies = solar_system(None);
    window.sample(&mut bodies);

    for i in [0, 5, 13] {
        let frame = window.frame_at(i as f64);
        for body in &bodies {
            let p = &body.samples[i];
            let (ra, decl) = horizon_to_equatorial(p.az, p.el, &frame);
            let mut back = *p;
            back.ra = ra;
            back.decl = decl;
            assert!(
                separation(p, &back) < 1e-2,
                "{} at sample {i}: {}″",
                body.name,
                separation(p, &back)
            );
        }
    }
}

#[test]
fn test_positions_at_matches_sampling() {
    let start = utc_epoch(2024, 6, 20, 0, 0, 0.0);
    let almanac = one_day_from(start);
    let report = almanac.positions_at(start);
    let window = almanac.window(0);
    let mut bodies = solar_system(None);
    window.sample(&mut bodies);

    assert_eq!(report.positions.len(), bodies.len());
    for ((name, p), body) in report.positions.iter().zip(&bodies) {
        assert_eq!(name, &body.name);
        assert_abs_diff_eq!(p.ra, body.samples[0].ra, epsilon = 1e-12);
        assert_abs_diff_eq!(p.el, body.samples[0].el, epsilon = 1e-9);
    }
    // Moon's phase only
    assert!(report.positions[1].1.phase.is_some());
    assert!(report.positions.iter().filter(|(_, p)| p.phase.is_some()).count() == 1);
}

#[test]
fn test_sun_near_solstice() {
    let start = utc_epoch(2024, 6, 20, 20, 51, 33.0);
    let report = one_day_from(start).positions_at(start);
    let (_, sun) = &report.positions[0];
    // apparent longitude 90°, declination at the obliquity
    assert_abs_diff_eq!(sun.longitude / RADEG, 90.0, epsilon = 0.01);
    assert_abs_diff_eq!(sun.decl / RADEG, 23.44, epsilon = 0.02);
    assert_eq!(epoch_to_day(&start).floor(), 45462.0);
}

#[test]
fn test_window_grid() {
    let almanac = one_day_from(utc_epoch(2024, 6, 20, 0, 0, 0.0));
    let window = almanac.window(0);
    assert_abs_diff_eq!(window.start, 45461.5, epsilon = 1e-9);
    assert_abs_diff_eq!(
        window.day_at((SAMPLE_COUNT - 1) as f64),
        45461.5 + 13.0 / 12.0,
        epsilon = 1e-12
    );
    // linear ΔT model: 0.001704 s per day
    assert_abs_diff_eq!(window.delta_t, 0.001704 * 45461.5, epsilon = 1e-9);
}
