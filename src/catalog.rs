//! # Star catalog
//!
//! Stellar occultations are searched against a fixed-width catalog of mean places at
//! epoch B1950. One record per line, columns counted from zero:
//!
//! | Columns | Field                                         |
//! |---------|-----------------------------------------------|
//! | 0–5     | catalog identifier (SAO number)               |
//! | 18–29   | right ascension `HH MM SS.SSS`                |
//! | 31–36   | proper motion in RA, seconds of time per year |
//! | 38–49   | declination `±DD MM SS.SS`                    |
//! | 51–56   | proper motion in declination, ″ per year      |
//! | 58–60   | parallax, catalog units (distance 20600/π au) |
//! | 63–66   | visual magnitude                              |
//!
//! A declination written `-00 …` is south of the equator.

use std::io::BufRead;

use tracing::debug;

use crate::almanac_errors::AlmanacError;
use crate::conversion::{parse_dec_to_deg, parse_ra_to_hours};
use crate::constants::Degree;

/// Shortest line holding every column of a record
const RECORD_LENGTH: usize = 67;

/// Mean place of a catalog star at B1950.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStar {
    /// Catalog identifier, as printed in the events
    pub id: String,
    /// Right ascension in hours
    pub ra_hours: f64,
    /// Declination in degrees
    pub declination: Degree,
    /// Proper motion in right ascension, seconds of time per year
    pub ra_proper_motion: f64,
    /// Proper motion in declination, arcseconds per year
    pub dec_proper_motion: f64,
    /// Parallax as stored in the catalog, 0 when unknown
    pub parallax: f64,
    pub magnitude: f64,
}

type Columns = std::ops::Range<usize>;

fn field(line: &str, number: usize, columns: Columns) -> Result<&str, AlmanacError> {
    line.get(columns.clone())
        .map(str::trim)
        .ok_or_else(|| AlmanacError::InvalidCatalogLine {
            line: number,
            reason: format!("columns {}..{} are not readable", columns.start, columns.end),
        })
}

fn parse_field(
    line: &str,
    number: usize,
    columns: Columns,
    what: &str,
) -> Result<f64, AlmanacError> {
    let text = field(line, number, columns)?;
    text.parse().map_err(|_| AlmanacError::InvalidCatalogLine {
        line: number,
        reason: format!("invalid {what}: {text:?}"),
    })
}

impl CatalogStar {
    /// Parse one fixed-width record.
    ///
    /// Arguments
    /// ---------
    /// * `line`: the record.
    /// * `number`: its line number, reported in errors.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidCatalogLine`] if the line is too short or a field does not parse.
    pub fn from_fixed_width(line: &str, number: usize) -> Result<CatalogStar, AlmanacError> {
        if line.len() < RECORD_LENGTH {
            return Err(AlmanacError::InvalidCatalogLine {
                line: number,
                reason: format!("expected at least {RECORD_LENGTH} columns, got {}", line.len()),
            });
        }

        let invalid = |what: &str, text: &str| AlmanacError::InvalidCatalogLine {
            line: number,
            reason: format!("invalid {what}: {text:?}"),
        };

        let ra_text = field(line, number, 18..30)?;
        let ra_hours =
            parse_ra_to_hours(ra_text).ok_or_else(|| invalid("right ascension", ra_text))?;
        let dec_text = field(line, number, 38..50)?;
        let declination =
            parse_dec_to_deg(dec_text).ok_or_else(|| invalid("declination", dec_text))?;

        Ok(CatalogStar {
            id: field(line, number, 0..6)?.to_string(),
            ra_hours,
            declination,
            ra_proper_motion: parse_field(line, number, 31..37, "proper motion in RA")?,
            dec_proper_motion: parse_field(line, number, 51..57, "proper motion in declination")?,
            parallax: parse_field(line, number, 58..61, "parallax")?,
            magnitude: parse_field(line, number, 63..67, "magnitude")?,
        })
    }
}

/// Read every record of a catalog.
///
/// Blank lines are skipped; line numbers in errors start at 1.
///
/// Errors
/// ------
/// * [`AlmanacError::IoError`] if reading fails.
/// * [`AlmanacError::InvalidCatalogLine`] on the first malformed record.
pub fn read_catalog<R: BufRead>(reader: R) -> Result<Vec<CatalogStar>, AlmanacError> {
    let mut stars = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        stars.push(CatalogStar::from_fixed_width(&line, index + 1)?);
    }
    debug!(count = stars.len(), "star catalog read");
    Ok(stars)
}
