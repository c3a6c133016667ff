//! Quarter and cross-quarter solar events.
//!
//! Quarter days are the equinoxes and solstices, where the apparent solar
//! ecliptic longitude crosses a multiple of 90°. Cross-quarter days fall
//! halfway between them, at 45° + k·90°; the traditional names (Imbolc,
//! Beltane, Lughnasadh, Samhain) follow the northern-hemisphere calendar.

use qtty::Degrees;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scan::{find_directed_crossings, CrossingDirection, ScanSettings};
use crate::ephemeris::solar;
use crate::models::{JulianDate, ModifiedJulianDate, Period};

/// The eight solar stations of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolarEvent {
    MarchEquinox,
    Beltane,
    JuneSolstice,
    Lughnasadh,
    SeptemberEquinox,
    Samhain,
    DecemberSolstice,
    Imbolc,
}

impl SolarEvent {
    /// All eight stations in longitude order.
    pub const ALL: [SolarEvent; 8] = [
        SolarEvent::MarchEquinox,
        SolarEvent::Beltane,
        SolarEvent::JuneSolstice,
        SolarEvent::Lughnasadh,
        SolarEvent::SeptemberEquinox,
        SolarEvent::Samhain,
        SolarEvent::DecemberSolstice,
        SolarEvent::Imbolc,
    ];

    /// The four equinoxes and solstices.
    pub const QUARTERS: [SolarEvent; 4] = [
        SolarEvent::MarchEquinox,
        SolarEvent::JuneSolstice,
        SolarEvent::SeptemberEquinox,
        SolarEvent::DecemberSolstice,
    ];

    /// The four cross-quarter stations.
    pub const CROSS_QUARTERS: [SolarEvent; 4] = [
        SolarEvent::Beltane,
        SolarEvent::Lughnasadh,
        SolarEvent::Samhain,
        SolarEvent::Imbolc,
    ];

    /// Apparent solar ecliptic longitude at which the event occurs.
    pub fn longitude(&self) -> Degrees {
        let deg = match self {
            SolarEvent::MarchEquinox => 0.0,
            SolarEvent::Beltane => 45.0,
            SolarEvent::JuneSolstice => 90.0,
            SolarEvent::Lughnasadh => 135.0,
            SolarEvent::SeptemberEquinox => 180.0,
            SolarEvent::Samhain => 225.0,
            SolarEvent::DecemberSolstice => 270.0,
            SolarEvent::Imbolc => 315.0,
        };
        Degrees::new(deg)
    }

    /// True for the four mid-season stations.
    pub fn is_cross_quarter(&self) -> bool {
        matches!(
            self,
            SolarEvent::Beltane | SolarEvent::Lughnasadh | SolarEvent::Samhain | SolarEvent::Imbolc
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            SolarEvent::MarchEquinox => "March equinox",
            SolarEvent::Beltane => "Beltane",
            SolarEvent::JuneSolstice => "June solstice",
            SolarEvent::Lughnasadh => "Lughnasadh",
            SolarEvent::SeptemberEquinox => "September equinox",
            SolarEvent::Samhain => "Samhain",
            SolarEvent::DecemberSolstice => "December solstice",
            SolarEvent::Imbolc => "Imbolc",
        }
    }
}

/// A located solar station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarEventInstant {
    pub event: SolarEvent,
    pub instant: ModifiedJulianDate,
}

/// Apparent solar ecliptic longitude of date, degrees in [0, 360).
pub fn solar_longitude_at(jd_tt: JulianDate) -> Degrees {
    solar::apparent_position(jd_tt).longitude
}

/// Locate the given solar stations inside a period, sorted by instant.
///
/// # Arguments
/// * `period` - UTC time span to search, MJD
/// * `events` - which stations to look for
/// * `settings` - scan step and refinement tolerance
pub fn find_solar_events(
    period: &Period,
    events: &[SolarEvent],
    settings: &ScanSettings,
) -> Vec<SolarEventInstant> {
    let mut found = Vec::new();
    for &event in events {
        let target = event.longitude();
        let instants =
            find_directed_crossings(period, settings, CrossingDirection::Ascending, |t| {
                let jd_tt = t.to_julian_date().to_terrestrial();
                solar_longitude_at(jd_tt).signed_separation(target).value()
            });
        found.extend(
            instants
                .into_iter()
                .map(|instant| SolarEventInstant { event, instant }),
        );
    }
    found.sort_by(|a, b| {
        a.instant
            .value()
            .partial_cmp(&b.instant.value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        start = period.start.value(),
        stop = period.stop.value(),
        found = found.len(),
        "solar station search finished"
    );
    found
}

/// The four cross-quarter instants inside a period, default settings.
pub fn find_cross_quarters(period: &Period) -> Vec<SolarEventInstant> {
    find_solar_events(period, &SolarEvent::CROSS_QUARTERS, &ScanSettings::default())
}

/// The four equinox/solstice instants inside a period, default settings.
pub fn find_quarters(period: &Period) -> Vec<SolarEventInstant> {
    find_solar_events(period, &SolarEvent::QUARTERS, &ScanSettings::default())
}
