//! Daylight-length sweep CLI.
//!
//! Prints a `date,hours_sunlight` CSV line for each local day of the
//! requested range at the configured observer site.
//!
//! # Usage
//!
//! ```bash
//! daylight 1986-01-17 2022-07-14
//! ```
//!
//! # Environment Variables
//!
//! - `ALMANAC_CONFIG`: path to an `almanac.toml` configuration file
//! - `ALMANAC_SITE_LAT` / `ALMANAC_SITE_LON` / `ALMANAC_SITE_ELEVATION_M`
//! - `ALMANAC_UTC_OFFSET_HOURS`: local offset for the day windows
//! - `RUST_LOG`: log filter (default: info)

use std::env;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lunisolar::config::AlmanacConfig;
use lunisolar::services::daylight_lengths;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let start = parse_date(args.get(1), "start")?;
    let end = parse_date(args.get(2), "end")?;

    let config = AlmanacConfig::from_default_location()?.with_env_overrides();
    let site = config.observer_site()?;
    info!(
        site = %config.site.name,
        latitude = site.location.latitude,
        longitude = site.location.longitude,
        "sweeping daylight lengths"
    );

    let records = daylight_lengths(&site, start, end, config.site.utc_offset_hours)?;

    println!("date,hours_sunlight");
    for record in &records {
        println!("{},{}", record.date.format("%Y-%m-%d"), record.hours_sunlight);
    }
    Ok(())
}

fn parse_date(arg: Option<&String>, which: &str) -> Result<NaiveDate> {
    let raw = arg.with_context(|| format!("usage: daylight <start-date> <end-date> ({which} date missing)"))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("unparseable {which} date: {raw} (expected YYYY-MM-DD)"))
}
