//! # Time base
//!
//! Every model of the crate is driven by a single scalar: the number of days elapsed since
//! **1899-12-31T12:00:00 UTC** (Julian Date 2 415 020.0). This module converts between that
//! scalar and [`hifitime::Epoch`], and provides the ΔT model used to turn universal time into
//! ephemeris time.

use hifitime::{Epoch, TimeScale};

use crate::constants::{Day, DELTA_T_RATE, JD_EPOCH_1900, SECONDS_PER_DAY};

/// Convert an epoch into days since 1899-12-31T12:00 UTC.
///
/// Arguments
/// ---------
/// * `epoch`: any hifitime epoch, read in the UTC time scale.
///
/// Return
/// ------
/// * The day offset used by the orbital models (`JD_UTC − 2415020`).
pub fn epoch_to_day(epoch: &Epoch) -> Day {
    epoch.to_jde_utc_days() - JD_EPOCH_1900
}

/// Convert days since 1899-12-31T12:00 UTC back into an epoch.
///
/// Arguments
/// ---------
/// * `day`: the day offset used by the orbital models.
///
/// Return
/// ------
/// * The corresponding UTC epoch.
pub fn day_to_epoch(day: Day) -> Epoch {
    Epoch::from_jde_utc(day + JD_EPOCH_1900)
}

/// Build a UTC epoch from calendar fields, fractional seconds included.
///
/// Arguments
/// ---------
/// * `year`, `month`, `day`, `hour`, `minute`: calendar fields in UTC.
/// * `seconds`: seconds of the minute, fractional part kept to the nanosecond.
///
/// Return
/// ------
/// * The UTC epoch.
pub fn utc_epoch(year: i32, month: u8, day: u8, hour: u8, minute: u8, seconds: f64) -> Epoch {
    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * 1e9).round() as u32;
    Epoch::from_gregorian(
        year,
        month,
        day,
        hour,
        minute,
        whole as u8,
        nanos,
        TimeScale::UTC,
    )
}

/// Difference between ephemeris time and universal time, in seconds.
///
/// A non-zero `override_seconds` is returned unchanged; zero selects the linear model
/// `ΔT = 0.001704 s × day`, which reaches about a minute around the year 2000.
///
/// Arguments
/// ---------
/// * `day`: days since 1899-12-31T12:00 UTC.
/// * `override_seconds`: externally supplied ΔT, `0.0` meaning "compute".
///
/// Return
/// ------
/// * ΔT in seconds.
pub fn delta_t(day: Day, override_seconds: f64) -> f64 {
    if override_seconds != 0.0 {
        return override_seconds;
    }
    day * DELTA_T_RATE
}

/// Ephemeris day for a universal-time day offset and a ΔT in seconds.
pub fn ephemeris_day(day: Day, delta_t_seconds: f64) -> Day {
    day + delta_t_seconds / SECONDS_PER_DAY
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_origin() {
        let origin = utc_epoch(1899, 12, 31, 12, 0, 0.0);
        assert_relative_eq!(epoch_to_day(&origin), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_j2000_day_offset() {
        let j2000 = utc_epoch(2000, 1, 1, 12, 0, 0.0);
        assert_relative_eq!(epoch_to_day(&j2000), 36525.0, epsilon = 1e-8);
    }

    #[test]
    fn test_day_epoch_round_trip() {
        let day = 45_678.321;
        let back = epoch_to_day(&day_to_epoch(day));
        assert_relative_eq!(back, day, epsilon = 1e-8);
    }

    #[test]
    fn test_delta_t() {
        assert_eq!(delta_t(36525.0, 0.0), 36525.0 * 0.001704);
        assert_eq!(delta_t(36525.0, 64.2), 64.2);
        assert_relative_eq!(
            ephemeris_day(100.0, 86_400.0 / 2.0),
            100.5,
            epsilon = 1e-12
        );
    }
}
