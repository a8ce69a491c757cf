use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use hifitime::{Duration, Epoch};

use almanac::almanac::{Almanac, AlmanacParams};
use almanac::almanac_errors::AlmanacError;
use almanac::catalog::read_catalog;
use almanac::constants::DEFAULT_PERIOD;
use almanac::conversion::{format_dec, format_ra};
use almanac::observers::Observer;
use almanac::orbit_type::cometary_element::CometElements;
use almanac::time::{day_to_epoch, epoch_to_day};

#[derive(Parser)]
#[command(name = "almanac")]
#[command(about = "Positions of the Sun, Moon and planets, and the celestial events of the day")]
struct Cli {
    /// Print the day number of the start (days since 1899-12-31T12:00 UTC)
    #[arg(short = 'j')]
    julian: bool,
    /// Print the positions of the bodies at the start of each period
    #[arg(short = 'p')]
    positions: bool,
    /// Search for occultations of catalog stars by the Moon
    #[arg(short = 'o', requires = "catalog")]
    occultations: bool,
    /// Fixed-width star catalog used with -o
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Include the comet in the list of bodies
    #[arg(short = 'm')]
    comet: bool,
    /// Number of successive periods
    #[arg(short = 'c', default_value_t = 1)]
    periods: usize,
    /// Length of a period in days
    #[arg(short = 'C', default_value_t = DEFAULT_PERIOD)]
    period: f64,
    /// Start instant, RFC 3339 (default: now)
    #[arg(short = 'd')]
    date: Option<String>,
    /// Report the distance between two bodies, "body1 body2"
    #[arg(short = 'e')]
    distance: Option<String>,
    /// Observer location, "nlat wlong elev" in degrees, degrees (west positive) and meters
    #[arg(short = 'l', conflicts_with = "here")]
    location: Option<String>,
    /// ΔT in seconds (default: model)
    #[arg(short = 't', default_value_t = 0.0)]
    delta_t: f64,
    /// File whose first line holds the observer location
    #[arg(long)]
    here: Option<PathBuf>,
}

/// Split an RFC 3339 instant into its local part and its UTC offset in minutes.
fn split_offset(date: &str) -> Result<(&str, i64), AlmanacError> {
    let invalid = || AlmanacError::InvalidParameter(format!("start date {date:?}: bad UTC offset"));
    if let Some(local) = date.strip_suffix(['Z', 'z']) {
        return Ok((local, 0));
    }
    // the offset sign can only follow the time of day
    let Some(time_at) = date.find(['T', 't', ' ']) else {
        return Ok((date, 0));
    };
    let Some(sign_at) = date[time_at..].rfind(['+', '-']).map(|i| time_at + i) else {
        return Ok((date, 0));
    };
    let (local, offset) = date.split_at(sign_at);
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let (hours, minutes) = offset[1..].split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok((local, sign * (60 * hours + minutes)))
}

/// Start instant from an RFC 3339 string; a missing offset reads as UTC.
fn parse_start(date: &str) -> Result<Epoch, AlmanacError> {
    let (local, offset) = split_offset(date.trim())?;
    let epoch = Epoch::from_str(local)
        .map_err(|e| AlmanacError::InvalidParameter(format!("start date {date:?}: {e}")))?;
    Ok(epoch - Duration::from_seconds(60.0 * offset as f64))
}

fn parse_pair(pair: &str) -> Result<(String, String), AlmanacError> {
    let names: Vec<&str> = pair.split_whitespace().collect();
    match names.as_slice() {
        [a, b] => Ok((a.to_string(), b.to_string())),
        _ => Err(AlmanacError::InvalidBodyName(pair.to_string())),
    }
}

fn observer(cli: &Cli) -> Result<Observer, AlmanacError> {
    if let Some(location) = &cli.location {
        return location.parse();
    }
    if let Some(path) = &cli.here {
        return Observer::from_reader(BufReader::new(File::open(path)?));
    }
    Ok(Observer::default())
}

fn main() -> Result<(), AlmanacError> {
    let cli = Cli::parse();

    let mut builder = AlmanacParams::builder()
        .observer(observer(&cli)?)
        .delta_t(cli.delta_t)
        .period(cli.period)
        .periods(cli.periods)
        .comet(cli.comet.then(CometElements::default))
        .occultation_mode(cli.occultations)
        .distance_pair(cli.distance.as_deref().map(parse_pair).transpose()?);
    if let Some(date) = &cli.date {
        builder = builder.start(parse_start(date)?);
    }
    let params = builder.build()?;

    let stars = match (&cli.catalog, cli.occultations) {
        (Some(path), true) => read_catalog(BufReader::new(File::open(path)?))?,
        _ => Vec::new(),
    };
    let mut almanac = Almanac::new(params).with_catalog(stars);

    for index in 0..almanac.params().periods {
        let window = almanac.window(index);
        let start = day_to_epoch(window.start);
        println!("{start}");
        if cli.julian {
            println!("Julian date: {:.4}", epoch_to_day(&start));
        }

        if cli.positions {
            let report = almanac.positions_at(start);
            println!(
                "local sidereal time {}",
                format_ra(report.local_sidereal_time)
            );
            for (name, p) in &report.positions {
                print!(
                    "{name:>10} {} {} {:9.4} {:9.4} {:9.4}",
                    format_ra(p.ra),
                    format_dec(p.decl),
                    p.az,
                    p.el,
                    p.semi
                );
                match (name.as_str(), p.phase) {
                    ("sun", _) => print!(" {:7.4}", p.longitude),
                    (_, Some(phase)) => print!(" {phase:7.4}"),
                    _ => print!(" {:7.2}", p.mag),
                }
                println!();
            }
        }

        if let Some(distances) = almanac.distances(&window)? {
            if let Some((a, b)) = &almanac.params().distance_pair {
                for (epoch, d) in distances {
                    println!("{epoch} dist {a} to {b} = {d:.4}");
                }
            }
        }

        if !cli.positions && cli.distance.is_none() {
            for event in almanac.search(&window)? {
                println!("{event}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod cli_test {
    use super::*;
    use almanac::time::utc_epoch;

    #[test]
    fn test_parse_start_offsets() {
        let noon = utc_epoch(2024, 6, 20, 12, 0, 0.0);
        assert_eq!(parse_start("2024-06-20T12:00:00").unwrap(), noon);
        assert_eq!(parse_start("2024-06-20T12:00:00Z").unwrap(), noon);
        assert_eq!(parse_start("2024-06-20T14:00:00+02:00").unwrap(), noon);
        assert_eq!(parse_start("2024-06-20T07:30:00-04:30").unwrap(), noon);
    }

    #[test]
    fn test_parse_start_rejects_bad_offsets() {
        for date in [
            "2024-06-20T12:00:00+2",
            "2024-06-20T12:00:00+25:00",
            "2024-06-20T12:00:00-04:xx",
            "yesterday",
        ] {
            assert!(
                matches!(parse_start(date), Err(AlmanacError::InvalidParameter(_))),
                "{date}"
            );
        }
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("moon  mars").unwrap(),
            ("moon".to_string(), "mars".to_string())
        );
        assert!(matches!(
            parse_pair("moon"),
            Err(AlmanacError::InvalidBodyName(_))
        ));
    }
}
