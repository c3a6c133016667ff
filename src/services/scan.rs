//! Generic threshold-crossing search over a time period.
//!
//! A fixed-step linear scan brackets each sign change of a scalar offset
//! function, then bisection tightens every bracket to a stated time
//! tolerance. The event searches in this module's siblings are all built
//! on this routine.

use qtty::{Hours, Seconds};
use serde::{Deserialize, Serialize};

use crate::models::{ModifiedJulianDate, Period};

/// Direction of a sign change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossingDirection {
    /// Offset passes from negative to non-negative.
    Ascending,
    /// Offset passes from positive to non-positive.
    Descending,
}

/// A refined sign change of the offset function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub instant: ModifiedJulianDate,
    pub direction: CrossingDirection,
}

/// Scan step and refinement tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Bracketing step of the linear scan.
    pub step: Hours,
    /// Bisection stops once the bracket is narrower than this.
    pub tolerance: Seconds,
    /// Sample pairs whose offsets differ by more than this are treated as a
    /// branch-cut artifact of a wrapped angle, not a crossing.
    pub discontinuity_guard: f64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            step: Hours::new(1.0),
            tolerance: Seconds::new(1.0),
            discontinuity_guard: 180.0,
        }
    }
}

impl ScanSettings {
    fn step_days(&self) -> f64 {
        self.step.to::<qtty::time::Day>().value()
    }

    fn tolerance_days(&self) -> f64 {
        self.tolerance.to::<qtty::time::Day>().value()
    }
}

/// Locate every sign change of `offset` inside `period`.
///
/// # Arguments
/// * `period` - time span to scan, MJD
/// * `settings` - step, tolerance and wrap guard
/// * `offset` - signed scalar function of time; its zeros are the events
///
/// # Returns
/// Refined crossings in chronological order.
pub fn find_crossings<F>(period: &Period, settings: &ScanSettings, offset: F) -> Vec<Crossing>
where
    F: Fn(ModifiedJulianDate) -> f64,
{
    let step = settings.step_days();
    let mut crossings = Vec::new();

    let mut t0 = period.start.value();
    let mut f0 = offset(period.start);
    while t0 < period.stop.value() {
        let t1 = (t0 + step).min(period.stop.value());
        let f1 = offset(ModifiedJulianDate::new(t1));

        if (f1 - f0).abs() < settings.discontinuity_guard {
            let direction = if f0 < 0.0 && f1 >= 0.0 {
                Some(CrossingDirection::Ascending)
            } else if f0 > 0.0 && f1 <= 0.0 {
                Some(CrossingDirection::Descending)
            } else {
                None
            };
            if let Some(direction) = direction {
                let instant = bisect(t0, f0, t1, settings, &offset);
                crossings.push(Crossing { instant, direction });
            }
        }

        t0 = t1;
        f0 = f1;
    }

    crossings
}

/// Keep only crossings in the requested direction.
pub fn find_directed_crossings<F>(
    period: &Period,
    settings: &ScanSettings,
    direction: CrossingDirection,
    offset: F,
) -> Vec<ModifiedJulianDate>
where
    F: Fn(ModifiedJulianDate) -> f64,
{
    find_crossings(period, settings, offset)
        .into_iter()
        .filter(|c| c.direction == direction)
        .map(|c| c.instant)
        .collect()
}

fn bisect<F>(mut t0: f64, mut f0: f64, mut t1: f64, settings: &ScanSettings, offset: &F) -> ModifiedJulianDate
where
    F: Fn(ModifiedJulianDate) -> f64,
{
    let tolerance = settings.tolerance_days();
    let mut iterations = 0;
    while t1 - t0 > tolerance && iterations < 64 {
        let mid = 0.5 * (t0 + t1);
        let fm = offset(ModifiedJulianDate::new(mid));
        if (fm < 0.0) == (f0 < 0.0) {
            t0 = mid;
            f0 = fm;
        } else {
            t1 = mid;
        }
        iterations += 1;
    }
    ModifiedJulianDate::new(0.5 * (t0 + t1))
}
