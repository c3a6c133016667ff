//! Time scale types: Modified Julian Date, Julian Date, and the ΔT
//! correction between Universal and Terrestrial Time.

use serde::{Deserialize, Serialize};

use crate::error::AlmanacError;

/// Offset between Julian Date and Modified Julian Date.
pub const JD_MINUS_MJD: f64 = 2_400_000.5;

/// MJD of the Unix epoch (1970-01-01 00:00:00 UTC).
pub const UNIX_EPOCH_MJD: f64 = 40_587.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Modified Julian Date representation.
/// MJD 0 = 1858-11-17 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModifiedJulianDate(qtty::Days);

impl ModifiedJulianDate {
    /// Create a new MJD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw MJD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Build an MJD from a UTC calendar timestamp.
    ///
    /// # Arguments
    /// * `year`, `month`, `day` - civil date
    /// * `hour`, `minute` - civil time of day
    /// * `second` - seconds including any fractional part
    ///
    /// # Returns
    /// * `Ok(ModifiedJulianDate)` for a representable timestamp
    /// * `Err(AlmanacError::InvalidTimestamp)` otherwise
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, AlmanacError> {
        if !(0.0..60.0).contains(&second) {
            return Err(AlmanacError::InvalidTimestamp(format!(
                "seconds out of range: {second}"
            )));
        }
        let whole = second.floor();
        let nanos = (((second - whole) * 1e9).round() as u32).min(999_999_999);
        let dt = chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_nano_opt(hour, minute, whole as u32, nanos))
            .ok_or_else(|| {
                AlmanacError::InvalidTimestamp(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second}"
                ))
            })?;
        Ok(Self::from_datetime(dt.and_utc()))
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.value() - UNIX_EPOCH_MJD) * 86_400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / 86_400.0 + UNIX_EPOCH_MJD)
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        let secs = self.to_unix_timestamp();
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9) as u32;
        chrono::DateTime::from_timestamp(secs_i64, nanos)
            .unwrap_or_else(|| chrono::DateTime::UNIX_EPOCH)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }

    /// Convert to a Julian Date on the same (universal) time scale.
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::new(self.value() + JD_MINUS_MJD)
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}

impl std::fmt::Display for ModifiedJulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MJD {:.6}", self.value())
    }
}

/// Julian Date representation.
///
/// The scale (universal or terrestrial) is by convention of the call site:
/// civil timestamps enter on the universal scale and are promoted with
/// [`JulianDate::to_terrestrial`] before ephemeris evaluation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Create a new Julian Date.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Convert to a Modified Julian Date.
    pub fn to_modified(&self) -> ModifiedJulianDate {
        ModifiedJulianDate::new(self.0 - JD_MINUS_MJD)
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        (self.0 - J2000_JD) / DAYS_PER_CENTURY
    }

    /// Decimal calendar year, good enough for the ΔT polynomials.
    pub fn year_fraction(&self) -> f64 {
        2000.0 + (self.0 - J2000_JD) / 365.25
    }

    /// Promote a universal-scale JD to the terrestrial scale by adding ΔT.
    pub fn to_terrestrial(&self) -> JulianDate {
        JulianDate::new(self.0 + delta_t_seconds(self.year_fraction()) / 86_400.0)
    }
}

/// Time period in Modified Julian Date (MJD) format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// Start time in MJD
    pub start: ModifiedJulianDate,
    /// End time in MJD
    pub stop: ModifiedJulianDate,
}

impl Period {
    /// Create a period, rejecting empty or reversed spans.
    pub fn new(start: ModifiedJulianDate, stop: ModifiedJulianDate) -> Result<Self, AlmanacError> {
        if start.value() < stop.value() {
            Ok(Self { start, stop })
        } else {
            Err(AlmanacError::InvalidPeriod {
                start: start.value(),
                stop: stop.value(),
            })
        }
    }

    /// Shorthand constructor from raw MJD values.
    pub fn from_mjd(start: f64, stop: f64) -> Result<Self, AlmanacError> {
        Self::new(ModifiedJulianDate::new(start), ModifiedJulianDate::new(stop))
    }

    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.stop.value() - self.start.value()
    }

    /// True when the instant lies within the period (inclusive bounds).
    pub fn contains(&self, instant: ModifiedJulianDate) -> bool {
        (self.start.value()..=self.stop.value()).contains(&instant.value())
    }
}

/// ΔT = TT − UT in seconds for a decimal year.
///
/// Piecewise polynomial fits (Espenak & Meeus, after Morrison & Stephenson
/// 2004). Accurate to a few seconds over 1800-2050, which is far below the
/// timing tolerance of the analytic ephemeris series in this crate.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1800.0..1860.0).contains(&year) {
        let t = year - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if (1860.0..1900.0).contains(&year) {
        let t = year - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if (1900.0..1920.0).contains(&year) {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if (1920.0..1941.0).contains(&year) {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2) + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if (2050.0..2150.0).contains(&year) {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}
