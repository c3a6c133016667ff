//! Lunar phase events from the Moon-Sun elongation.

use qtty::Degrees;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scan::{find_directed_crossings, CrossingDirection, ScanSettings};
use crate::ephemeris::{lunar, solar};
use crate::models::{JulianDate, ModifiedJulianDate, Period};

/// Principal lunar phases located by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LunarPhase {
    /// Sun and Moon at equal ecliptic longitude (elongation 0°).
    New,
    /// Moon opposite the Sun (elongation 180°).
    Full,
}

impl LunarPhase {
    /// Elongation at which the phase occurs.
    pub fn target_elongation(&self) -> Degrees {
        match self {
            LunarPhase::New => Degrees::new(0.0),
            LunarPhase::Full => Degrees::new(180.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LunarPhase::New => "new moon",
            LunarPhase::Full => "full moon",
        }
    }
}

/// A located phase instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarPhaseEvent {
    pub phase: LunarPhase,
    pub instant: ModifiedJulianDate,
}

/// Moon-Sun elongation in ecliptic longitude of date, degrees in [0, 360).
///
/// The elongation grows by ~12.19°/day, so each phase recurs once per
/// synodic month.
pub fn elongation_at(jd_tt: JulianDate) -> Degrees {
    let moon = lunar::apparent_position(jd_tt);
    let sun = solar::apparent_position(jd_tt);
    (moon.longitude - sun.longitude).wrap_pos()
}

/// Locate every occurrence of a lunar phase inside a period.
///
/// # Arguments
/// * `period` - UTC time span to search, MJD
/// * `phase` - which phase to locate
/// * `settings` - scan step and refinement tolerance
///
/// # Returns
/// Phase instants in chronological order.
pub fn find_lunar_phases(
    period: &Period,
    phase: LunarPhase,
    settings: &ScanSettings,
) -> Vec<LunarPhaseEvent> {
    let target = phase.target_elongation();
    let instants = find_directed_crossings(period, settings, CrossingDirection::Ascending, |t| {
        let jd_tt = t.to_julian_date().to_terrestrial();
        elongation_at(jd_tt).signed_separation(target).value()
    });

    debug!(
        phase = phase.name(),
        start = period.start.value(),
        stop = period.stop.value(),
        found = instants.len(),
        "lunar phase search finished"
    );

    instants
        .into_iter()
        .map(|instant| LunarPhaseEvent { phase, instant })
        .collect()
}

/// Locate the new moons inside a period with default scan settings.
pub fn find_new_moons(period: &Period) -> Vec<LunarPhaseEvent> {
    find_lunar_phases(period, LunarPhase::New, &ScanSettings::default())
}
