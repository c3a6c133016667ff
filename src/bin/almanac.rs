//! Lunisolar almanac CLI.
//!
//! # Usage
//!
//! ```bash
//! # Sun/Moon ecliptic coordinates and solar RA at an instant
//! almanac snapshot 2022-01-02T18:33:00Z
//!
//! # New moons and solar stations for a calendar year
//! almanac year 2022
//! ```
//!
//! # Environment Variables
//!
//! - `ALMANAC_CONFIG`: path to an `almanac.toml` configuration file
//! - `ALMANAC_FORMAT`: `text` (default) or `json`
//! - `RUST_LOG`: log filter (default: info)

use std::env;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lunisolar::config::AlmanacConfig;
use lunisolar::ephemeris::{lunar, solar};
use lunisolar::models::{ModifiedJulianDate, Period};
use lunisolar::services::{find_lunar_phases, find_solar_events, LunarPhase, SolarEvent};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = AlmanacConfig::from_default_location()?.with_env_overrides();

    match args.get(1).map(String::as_str) {
        Some("snapshot") => {
            let timestamp = args
                .get(2)
                .context("usage: almanac snapshot <RFC3339-UTC-timestamp>")?;
            snapshot(timestamp)
        }
        Some("year") => {
            let year: i32 = args
                .get(2)
                .context("usage: almanac year <YYYY>")?
                .parse()
                .context("year must be an integer")?;
            year_events(year, &config)
        }
        _ => bail!("usage: almanac <snapshot|year> ..."),
    }
}

/// Print the Sun/Moon ecliptic coordinates and solar RA at one instant,
/// the almanac's spot-check mode.
fn snapshot(timestamp: &str) -> Result<()> {
    let instant = chrono::DateTime::parse_from_rfc3339(timestamp)
        .with_context(|| format!("unparseable RFC3339 timestamp: {timestamp}"))?
        .to_utc();
    let mjd = ModifiedJulianDate::from_datetime(instant);
    let jd_tt = mjd.to_julian_date().to_terrestrial();

    let sun = solar::apparent_position(jd_tt);
    let moon = lunar::apparent_position(jd_tt);
    let sun_equ = sun.to_equatorial(jd_tt);

    println!("{}", instant.to_rfc3339());
    println!("sunlat= {}", sun.latitude);
    println!("sunlon= {}", sun.longitude);
    println!("moonlat= {}", moon.latitude);
    println!("moonlon= {}", moon.longitude);
    println!("sunra= {}", sun_equ.right_ascension);
    Ok(())
}

/// Print the year's new moons and the eight solar stations.
fn year_events(year: i32, config: &AlmanacConfig) -> Result<()> {
    let start = ModifiedJulianDate::from_utc(year, 1, 1, 0, 0, 0.0)?;
    let stop = ModifiedJulianDate::from_utc(year + 1, 1, 1, 0, 0, 0.0)?;
    let period = Period::new(start, stop)?;
    let settings = config.scan_settings();

    info!(year, "searching lunar phases and solar stations");
    let new_moons = find_lunar_phases(&period, LunarPhase::New, &settings);
    let stations = find_solar_events(&period, &SolarEvent::ALL, &settings);

    if env::var("ALMANAC_FORMAT").as_deref() == Ok("json") {
        let doc = serde_json::json!({
            "year": year,
            "new_moons": new_moons,
            "solar_events": stations,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("new moons of {year}:");
    for event in &new_moons {
        println!("  {}", event.instant.to_datetime().to_rfc3339());
    }
    println!("solar stations of {year}:");
    for station in &stations {
        println!(
            "  {:<18} (sun at {:>5.1}°)  {}",
            station.event.name(),
            station.event.longitude().value(),
            station.instant.to_datetime().to_rfc3339()
        );
    }
    Ok(())
}
