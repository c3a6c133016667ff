//! Sunrise, sunset, and daylight-length sweeps for an observer site.

use chrono::{Datelike, NaiveDate};
use qtty::{Degree, Degrees, Hours};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scan::{find_crossings, CrossingDirection, ScanSettings};
use crate::ephemeris::solar;
use crate::error::AlmanacError;
use crate::models::{ModifiedJulianDate, Period};
use crate::topo::ObserverSite;

/// Altitude of the Sun's center at rise/set: refraction plus semidiameter.
pub const REFRACTION_HORIZON_DEG: f64 = -0.8333;

/// Apparent altitude of the Sun's center above the site's horizon.
pub fn sun_altitude_at(site: &ObserverSite, instant: ModifiedJulianDate) -> Degrees {
    let jd_tt = instant.to_julian_date().to_terrestrial();
    let equ = solar::apparent_position(jd_tt).to_equatorial(jd_tt);

    let lst_deg = site.lst_hours_at(instant).to::<Degree>().value();
    let hour_angle = Degrees::new(lst_deg - equ.right_ascension.to::<Degree>().value());

    let (sin_lat, cos_lat) = site.location.latitude_deg().sin_cos();
    let (sin_dec, cos_dec) = equ.declination.sin_cos();
    let sin_alt = sin_lat * sin_dec + cos_lat * cos_dec * hour_angle.cos();
    Degrees::new(sin_alt.clamp(-1.0, 1.0).asin().to_degrees())
}

/// Horizon depression from the observer's elevation above the ellipsoid.
fn horizon_dip_deg(site: &ObserverSite) -> f64 {
    let h = site.location.elevation_or_zero_m();
    if h.abs() < 1e-5 {
        return 0.0;
    }
    let r = site.ellipsoid.radius_at(site.location.latitude_deg());
    let ratio = (r / (r + h.abs())).clamp(-1.0, 1.0);
    let dip = ratio.acos().to_degrees();
    if h > 0.0 {
        dip
    } else {
        -dip
    }
}

/// Rise/set threshold altitude for the site.
pub fn horizon_altitude(site: &ObserverSite) -> Degrees {
    Degrees::new(REFRACTION_HORIZON_DEG - horizon_dip_deg(site))
}

/// A sunrise or sunset instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SunEventKind {
    Sunrise,
    Sunset,
}

/// Sunrise/sunset crossing located by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunEvent {
    pub kind: SunEventKind,
    pub instant: ModifiedJulianDate,
}

/// Locate sunrise and sunset crossings inside a period.
///
/// Polar days and nights simply produce no crossings.
pub fn find_sun_events(
    site: &ObserverSite,
    period: &Period,
    settings: &ScanSettings,
) -> Vec<SunEvent> {
    let threshold = horizon_altitude(site);
    find_crossings(period, settings, |t| {
        (sun_altitude_at(site, t) - threshold).value()
    })
    .into_iter()
    .map(|crossing| SunEvent {
        kind: match crossing.direction {
            CrossingDirection::Ascending => SunEventKind::Sunrise,
            CrossingDirection::Descending => SunEventKind::Sunset,
        },
        instant: crossing.instant,
    })
    .collect()
}

/// One line of the daylight sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaylightRecord {
    pub date: NaiveDate,
    pub hours_sunlight: f64,
}

/// Daylight length for each local civil day in `[start, end)`.
///
/// # Arguments
/// * `site` - observer site
/// * `start`, `end` - civil date range, end exclusive
/// * `utc_offset_hours` - the site's UTC offset, so each scanned window is
///   a local day (e.g. -7.0 for the Grand Canyon)
///
/// # Returns
/// One record per day that has both a sunrise and a following sunset.
pub fn daylight_lengths(
    site: &ObserverSite,
    start: NaiveDate,
    end: NaiveDate,
    utc_offset_hours: f64,
) -> Result<Vec<DaylightRecord>, AlmanacError> {
    let settings = ScanSettings {
        step: Hours::new(0.5),
        ..ScanSettings::default()
    };

    let mut records = Vec::new();
    let mut date = start;
    while date < end {
        let midnight =
            ModifiedJulianDate::from_utc(date.year(), date.month(), date.day(), 0, 0, 0.0)?;
        let day_start = midnight.value() - utc_offset_hours / 24.0;
        let window = Period::from_mjd(day_start, day_start + 1.0)?;

        let events = find_sun_events(site, &window, &settings);
        let sunrise = events
            .iter()
            .find(|e| e.kind == SunEventKind::Sunrise)
            .map(|e| e.instant);
        if let Some(rise) = sunrise {
            let sunset = events
                .iter()
                .find(|e| e.kind == SunEventKind::Sunset && e.instant.value() > rise.value())
                .map(|e| e.instant);
            if let Some(set) = sunset {
                records.push(DaylightRecord {
                    date,
                    hours_sunlight: (set.value() - rise.value()) * 24.0,
                });
            }
        }

        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    debug!(
        site_lat = site.location.latitude,
        days = records.len(),
        "daylight sweep finished"
    );
    Ok(records)
}
