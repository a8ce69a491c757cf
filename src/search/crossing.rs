//! # Threshold crossings
//!
//! Every scan here walks consecutive pairs of samples once and returns the fractional grid
//! index where a quantity crosses a level, interpolating linearly between the two bracketing
//! samples. The sampling density makes the quantities monotonic between two samples, so no
//! root finder is needed.
//!
//! Angular quantities are compared through their offset from the target, wrapped into
//! (−π, π], so a crossing is found whatever side of 0 the target lies on.

use std::fmt;

use itertools::Itertools;

use crate::constants::{Degree, Radian, SampleTime, NPTS, SAMPLE_COUNT};
use crate::kepler::pinorm;
use crate::ref_system::{separation, PositionSample};

/// Elevation of rise and set, refraction and semidiameter included
pub const HORIZON: Degree = -0.833;

/// Elevation of the Sun at the limit of astronomical twilight
pub const TWILIGHT: Degree = -18.0;

/// Sun's apparent ecliptic longitude at the peak of the major meteor showers, radians
pub const METEOR_SHOWERS: [(&str, Radian); 10] = [
    ("Quadrantid", -1.3572),
    ("Eta aquarid", 0.7620),
    ("Ophiuchid", 1.5497),
    ("Capricornid", 2.1324),
    ("Delta aquarid", 2.1991),
    ("Pisces australid", 2.2158),
    ("Perseid", 2.4331),
    ("Orionid", -2.6578),
    ("Phoenicid", -1.8678),
    ("Geminid", -1.7260),
];

/// First fractional index where the elevation goes from `≤ el` to `> el`.
pub fn rise(samples: &[PositionSample; SAMPLE_COUNT], el: Degree) -> Option<SampleTime> {
    samples
        .iter()
        .map(|s| s.el)
        .tuple_windows()
        .enumerate()
        .find(|(_, (e1, e2))| *e1 <= el && *e2 > el)
        .map(|(i, (e1, e2))| i as f64 + (el - e1) / (e2 - e1))
}

/// First fractional index where the elevation goes from `> el` to `≤ el`.
pub fn set(samples: &[PositionSample; SAMPLE_COUNT], el: Degree) -> Option<SampleTime> {
    samples
        .iter()
        .map(|s| s.el)
        .tuple_windows()
        .enumerate()
        .find(|(_, (e1, e2))| *e1 > el && *e2 <= el)
        .map(|(i, (e1, e2))| i as f64 + (el - e1) / (e2 - e1))
}

/// First fractional index where an angle passes the target going eastwards.
fn angle_crossing(angles: impl Iterator<Item = Radian>, target: Radian) -> Option<SampleTime> {
    angles
        .map(|a| pinorm(a - target))
        .tuple_windows()
        .enumerate()
        .find(|(_, (d1, d2))| *d1 <= 0.0 && *d2 > 0.0 && d2 - d1 < std::f64::consts::PI)
        .map(|(i, (d1, d2))| i as f64 - d1 / (d2 - d1))
}

/// The four cardinal points of the Sun's yearly path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonPoint {
    FallEquinox,
    WinterSolstice,
    SpringEquinox,
    SummerSolstice,
}

impl SeasonPoint {
    pub const ALL: [SeasonPoint; 4] = [
        SeasonPoint::FallEquinox,
        SeasonPoint::WinterSolstice,
        SeasonPoint::SpringEquinox,
        SeasonPoint::SummerSolstice,
    ];

    /// Right ascension of the Sun at this point.
    pub fn right_ascension(&self) -> Radian {
        use std::f64::consts::{FRAC_PI_2, PI};
        match self {
            SeasonPoint::FallEquinox => PI,
            SeasonPoint::WinterSolstice => 3.0 * FRAC_PI_2,
            SeasonPoint::SpringEquinox => 0.0,
            SeasonPoint::SummerSolstice => FRAC_PI_2,
        }
    }
}

impl fmt::Display for SeasonPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeasonPoint::FallEquinox => "Fall equinox",
            SeasonPoint::WinterSolstice => "Winter solstice",
            SeasonPoint::SpringEquinox => "Spring equinox",
            SeasonPoint::SummerSolstice => "Summer solstice",
        };
        write!(f, "{name}")
    }
}

/// Fractional index where the Sun's right ascension passes a season point.
///
/// Arguments
/// ---------
/// * `sun`: the Sun's samples.
/// * `point`: equinox or solstice looked for.
///
/// Return
/// ------
/// * `Some(t)` for a crossing between samples 0 and `N`; the last sample is not scanned.
pub fn solstice(sun: &[PositionSample; SAMPLE_COUNT], point: SeasonPoint) -> Option<SampleTime> {
    angle_crossing(
        sun[..SAMPLE_COUNT - 1].iter().map(|s| s.ra),
        point.right_ascension(),
    )
}

/// Fractional index where the Sun's apparent ecliptic longitude passes `longitude`.
pub fn ecliptic_crossing(
    sun: &[PositionSample; SAMPLE_COUNT],
    longitude: Radian,
) -> Option<SampleTime> {
    angle_crossing(sun.iter().map(|s| s.longitude), longitude)
}

/// The four principal phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunarPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LunarPhase::New => "New moon",
            LunarPhase::FirstQuarter => "First quarter moon",
            LunarPhase::Full => "Full moon",
            LunarPhase::LastQuarter => "Last quarter moon",
        };
        write!(f, "{name}")
    }
}

/// Principal phases of the Moon between samples 0 and `N`, in time order.
///
/// A new moon is a fall of the lunation fraction from above 0.75 to below 0.25; its time is
/// interpolated on the unwrapped fraction. The quarters are upward crossings of 0.25, 0.5 and
/// 0.75. Samples without a lunation fraction are skipped.
pub fn lunar_phases(moon: &[PositionSample; SAMPLE_COUNT]) -> Vec<(LunarPhase, SampleTime)> {
    let quarters = [
        (LunarPhase::FirstQuarter, 0.25),
        (LunarPhase::Full, 0.5),
        (LunarPhase::LastQuarter, 0.75),
    ];
    let mut phases = Vec::new();
    for (j, (p1, p2)) in moon[..SAMPLE_COUNT - 1]
        .iter()
        .map(|s| s.phase)
        .tuple_windows()
        .enumerate()
    {
        let (Some(p1), Some(p2)) = (p1, p2) else {
            continue;
        };
        let j = j as f64;
        if p1 > 0.75 && p2 < 0.25 {
            phases.push((LunarPhase::New, j + (1.0 - p1) / (p2 + 1.0 - p1)));
        }
        for (phase, level) in quarters {
            if p1 <= level && p2 > level {
                phases.push((phase, j + (level - p1) / (p2 - p1)));
            }
        }
    }
    phases
}

/// Grid index opening the first triple of samples where the distance of a body to the Sun
/// peaks.
pub fn greatest_elongation(
    body: &[PositionSample; SAMPLE_COUNT],
    sun: &[PositionSample; SAMPLE_COUNT],
) -> Option<usize> {
    body.iter()
        .zip(sun.iter())
        .map(|(b, s)| separation(b, s))
        .tuple_windows()
        .position(|(d1, d2, d3)| d2 >= d1 && d2 >= d3)
}

/// Side of the Sun where an inner planet stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElongationSide {
    Morning,
    Evening,
}

/// Morning or evening side, from the delay between the planet's rise and the Sun's rise.
///
/// The delay is wrapped into `[0, N]` grid units: beyond half a window the planet rises
/// before the Sun. A body that does not rise in the window counts as rising one step before
/// its start.
pub fn elongation_side(
    body: &[PositionSample; SAMPLE_COUNT],
    sun: &[PositionSample; SAMPLE_COUNT],
) -> ElongationSide {
    let n = NPTS as f64;
    let rise_or_before =
        |samples: &[PositionSample; SAMPLE_COUNT]| rise(samples, 0.0).unwrap_or(-1.0);
    let mut t = rise_or_before(body) - rise_or_before(sun);
    if t < 0.0 {
        t += n;
    }
    if t > n {
        t -= n;
    }
    if t > n / 2.0 {
        ElongationSide::Morning
    } else {
        ElongationSide::Evening
    }
}

#[cfg(test)]
mod crossing_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{PI, TAU};

    fn samples(f: impl Fn(usize) -> PositionSample) -> [PositionSample; SAMPLE_COUNT] {
        std::array::from_fn(f)
    }

    fn elevations(values: [Degree; SAMPLE_COUNT]) -> [PositionSample; SAMPLE_COUNT] {
        samples(|i| PositionSample {
            el: values[i],
            ..Default::default()
        })
    }

    #[test]
    fn test_rise_and_set() {
        let body = elevations([
            -10.0, -7.0, -4.0, -1.0, 2.0, 5.0, 8.0, 5.0, 2.0, -1.0, -4.0, -7.0, -10.0, -13.0,
        ]);
        assert_abs_diff_eq!(rise(&body, 0.0).unwrap(), 3.0 + 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(set(&body, 0.0).unwrap(), 8.0 + 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rise(&body, HORIZON).unwrap(), 3.0 + 0.167 / 3.0, epsilon = 1e-12);
        assert_eq!(rise(&body, 10.0), None);
        assert_eq!(set(&body, -20.0), None);
    }

    #[test]
    fn test_rise_at_exact_sample() {
        // a sample exactly on the level belongs to the side below it
        let body = elevations([
            -2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0,
        ]);
        assert_abs_diff_eq!(rise(&body, 0.0).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solstice_across_wrap() {
        // right ascension from 23h to 1h, crossing 0h at index 6
        let sun = samples(|i| PositionSample {
            ra: (-PI / 12.0 + i as f64 * PI / 72.0).rem_euclid(TAU),
            ..Default::default()
        });
        let t = solstice(&sun, SeasonPoint::SpringEquinox).unwrap();
        assert_abs_diff_eq!(t, 6.0, epsilon = 1e-9);
        assert_eq!(solstice(&sun, SeasonPoint::FallEquinox), None);
        assert_eq!(solstice(&sun, SeasonPoint::SummerSolstice), None);
    }

    #[test]
    fn test_solstice_ignores_last_sample() {
        // the crossing lies between samples 12 and 13, outside the scanned range
        let sun = samples(|i| PositionSample {
            ra: PI / 2.0 - 12.5e-3 + i as f64 * 1e-3,
            ..Default::default()
        });
        assert_eq!(solstice(&sun, SeasonPoint::SummerSolstice), None);
    }

    #[test]
    fn test_meteor_shower_crossing() {
        // Perseid peak between samples 4 and 5
        let (_, perseid) = METEOR_SHOWERS[6];
        let sun = samples(|i| PositionSample {
            longitude: perseid - 4.25e-3 + i as f64 * 1e-3,
            ..Default::default()
        });
        assert_abs_diff_eq!(ecliptic_crossing(&sun, perseid).unwrap(), 4.25, epsilon = 1e-9);

        // Geminid at a negative longitude, matched on a longitude kept in [0, 2π)
        let (_, geminid) = METEOR_SHOWERS[9];
        let sun = samples(|i| PositionSample {
            longitude: geminid + TAU - 0.5e-3 + i as f64 * 1e-3,
            ..Default::default()
        });
        assert_abs_diff_eq!(ecliptic_crossing(&sun, geminid).unwrap(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_lunar_phases() {
        // about 0.0028 lunation per two-hour step
        let moon = |start: f64| {
            samples(move |i| PositionSample {
                phase: Some((start + i as f64 * 0.0028).fract()),
                ..Default::default()
            })
        };

        let full = lunar_phases(&moon(0.48));
        assert_eq!(full.len(), 1);
        assert_eq!(full[0].0, LunarPhase::Full);
        assert_abs_diff_eq!(full[0].1, 0.02 / 0.0028, epsilon = 1e-9);

        // the unwrapped fraction crosses 1 at t = 0.01 / 0.0028
        let new = lunar_phases(&moon(0.99));
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].0, LunarPhase::New);
        assert_abs_diff_eq!(new[0].1, 0.01 / 0.0028, epsilon = 1e-9);

        assert_eq!(LunarPhase::FirstQuarter.to_string(), "First quarter moon");
        assert_eq!(SeasonPoint::WinterSolstice.to_string(), "Winter solstice");
    }

    #[test]
    fn test_lunar_phase_in_last_interval_ignored() {
        // 0.5 is passed between samples 12 and 13 only
        let moon = samples(|i| PositionSample {
            phase: Some(if i == 13 { 0.52 } else { 0.45 + 0.004 * i as f64 }),
            ..Default::default()
        });
        assert!(lunar_phases(&moon).is_empty());
    }

    #[test]
    fn test_greatest_elongation() {
        let sun = samples(|_| PositionSample::default());
        // separation grows until sample 5 then shrinks
        let planet = samples(|i| PositionSample {
            decl: (0.40 - 0.01 * (i as f64 - 5.0).abs()).to_radians(),
            ..Default::default()
        });
        assert_eq!(greatest_elongation(&planet, &sun), Some(4));

        let receding = samples(|i| PositionSample {
            decl: (0.1 + 0.01 * i as f64).to_radians(),
            ..Default::default()
        });
        assert_eq!(greatest_elongation(&receding, &sun), None);
    }

    #[test]
    fn test_elongation_side() {
        let rising_at = |t: f64| {
            samples(move |i| PositionSample {
                el: 10.0 * (i as f64 - t),
                ..Default::default()
            })
        };
        // planet rises two hours before the Sun
        assert_eq!(
            elongation_side(&rising_at(4.0), &rising_at(5.0)),
            ElongationSide::Morning
        );
        // planet rises after the Sun
        assert_eq!(
            elongation_side(&rising_at(7.0), &rising_at(5.0)),
            ElongationSide::Evening
        );
    }
}
