//! Almanac event services built on the ephemeris layer.
//!
//! Each service takes a UTC search period (MJD) and returns typed event
//! records: lunar phases, solar stations of the year, and sunrise/sunset
//! sweeps. The bracketing-and-bisection search itself lives in [`scan`].

pub mod cross_quarter;
pub mod daylight;
pub mod lunation;
pub mod scan;

pub use cross_quarter::{
    find_cross_quarters, find_quarters, find_solar_events, SolarEvent, SolarEventInstant,
};
pub use daylight::{daylight_lengths, find_sun_events, DaylightRecord, SunEvent, SunEventKind};
pub use lunation::{find_lunar_phases, find_new_moons, LunarPhase, LunarPhaseEvent};
pub use scan::{find_crossings, Crossing, CrossingDirection, ScanSettings};
