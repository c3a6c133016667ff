//! # Lunisolar Almanac Engine
//!
//! Almanac computations from compact analytic lunisolar theory: apparent
//! solar and lunar ecliptic positions, new moons, the quarter and
//! cross-quarter solar stations of the year, sunrise/sunset daylight
//! sweeps, and topocentric geodesy (earth-fixed observer positions, polar
//! motion, local sidereal time, subpoints).
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: time scales (MJD/JD, ΔT) and geographic locations
//! - [`ephemeris`]: analytic solar/lunar positions and sidereal time
//! - [`topo`]: reference ellipsoids, observer sites, polar motion, subpoints
//! - [`services`]: event searches built on a bracketing scan with bisection
//! - [`config`]: TOML + environment configuration for the binaries
//!
//! The `almanac` and `daylight` binaries are thin CLI frontends over the
//! service layer.

pub mod config;
pub mod ephemeris;
pub mod error;
pub mod models;
pub mod services;
pub mod topo;

pub use error::AlmanacError;
