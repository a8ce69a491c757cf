//! Sexagesimal parsing and formatting.
//!
//! Catalog fields arrive as `HH MM SS.SS` right ascensions and `±DD MM SS.S` declinations;
//! reports render radians back into the same notation.

use crate::constants::{Degree, Radian, DPI, RADH};

/// Parse a right ascension string to hours
///
/// Arguments
/// ---------
/// * `ra`: a string representing the right ascension in the format `HH MM SS.SS`
///
/// Returns
/// -------
/// * The right ascension in hours, `None` if the input format is invalid.
pub fn parse_ra_to_hours(ra: &str) -> Option<f64> {
    let parts: Vec<&str> = ra.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let h: f64 = parts[0].parse().ok()?;
    let m: f64 = parts[1].parse().ok()?;
    let s: f64 = parts[2].parse().ok()?;

    Some(h + m / 60.0 + s / 3600.0)
}

/// Parse a declination string to degrees
///
/// The sign is read from the degree field, so `-00 30 14.2` is south of the equator.
///
/// Arguments
/// ---------
/// * `dec`: a string representing the declination in the format `±DD MM SS.SS`
///
/// Returns
/// -------
/// * The declination in degrees, `None` if the input format is invalid.
pub fn parse_dec_to_deg(dec: &str) -> Option<Degree> {
    let parts: Vec<&str> = dec.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let sign = if parts[0].starts_with('-') { -1.0 } else { 1.0 };
    let d: f64 = parts[0].trim_start_matches(&['-', '+'][..]).parse().ok()?;
    let m: f64 = parts[1].parse().ok()?;
    let s: f64 = parts[2].parse().ok()?;

    Some(sign * (d + m / 60.0 + s / 3600.0))
}

/// Split a non-negative value into whole units, whole sixtieths and the remaining
/// 3600ths, rounded to `decimals` places with carries propagated.
fn sexagesimal(value: f64, decimals: usize) -> (u32, u32, f64) {
    let scale = 10f64.powi(decimals as i32);
    let total = (value * 3600.0 * scale).round() / scale;
    let whole = (total / 3600.0).floor();
    let rest = total - whole * 3600.0;
    let minutes = (rest / 60.0).floor();
    let seconds = rest - minutes * 60.0;
    (whole as u32, minutes as u32, seconds)
}

/// Format a right ascension as `HHh MMm SS.SSs`.
///
/// Arguments
/// ---------
/// * `ra`: right ascension in radians, any turn.
pub fn format_ra(ra: Radian) -> String {
    let hours = ra.rem_euclid(DPI) / RADH;
    let (h, m, s) = sexagesimal(hours, 2);
    format!("{:02}h {:02}m {:05.2}s", h % 24, m, s)
}

/// Format a declination as `±DD° MM' SS.S"`.
pub fn format_dec(decl: Radian) -> String {
    let degrees = decl.to_degrees();
    let sign = if degrees < 0.0 { '-' } else { '+' };
    let (d, m, s) = sexagesimal(degrees.abs(), 1);
    format!("{sign}{d:02}° {m:02}' {s:04.1}\"")
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ra_to_hours() {
        assert_relative_eq!(
            parse_ra_to_hours("22 52 23.37").unwrap(),
            22.0 + 52.0 / 60.0 + 23.37 / 3600.0,
            epsilon = 1e-12
        );
        assert_eq!(parse_ra_to_hours("1 2 3.4.5"), None);
        assert_eq!(parse_ra_to_hours("1 2"), None);
    }

    #[test]
    fn test_dec_to_deg() {
        assert_relative_eq!(
            parse_dec_to_deg("-00 30 14.2").unwrap(),
            -0.5039444444444444,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            parse_dec_to_deg("+13 55 42.7").unwrap(),
            13.928527777777777,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            parse_dec_to_deg("89 15 50.2").unwrap(),
            89.26394444444445,
            epsilon = 1e-12
        );
        assert_eq!(parse_dec_to_deg("89 15 50.2.3"), None);
        assert_eq!(parse_dec_to_deg("89 15"), None);
    }

    #[test]
    fn test_format_ra() {
        let ra = (22.0 + 52.0 / 60.0 + 23.37 / 3600.0) * 15.0_f64.to_radians();
        assert_eq!(format_ra(ra), "22h 52m 23.37s");
        assert_eq!(format_ra(-1e-12), "00h 00m 00.00s");
        // 59.999 seconds round up into the next minute
        let ra = (1.0 + 59.0 / 60.0 + 59.999 / 3600.0) * 15.0_f64.to_radians();
        assert_eq!(format_ra(ra), "02h 00m 00.00s");
    }

    #[test]
    fn test_format_dec() {
        assert_eq!(format_dec((-0.5039444444444444_f64).to_radians()), "-00° 30' 14.2\"");
        assert_eq!(format_dec(13.928527777777777_f64.to_radians()), "+13° 55' 42.7\"");
    }
}
