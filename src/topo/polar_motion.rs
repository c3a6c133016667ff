//! Polar motion wobble applied to earth-fixed vectors.
//!
//! The pole coordinates xp/yp are inputs supplied by the caller (they come
//! from IERS bulletins in practice); this module only applies them.

use qtty::{Arcseconds, Radian};

use super::Mat3;

/// Coordinates of the celestial intermediate pole within the terrestrial
/// frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarMotion {
    /// Pole x coordinate, along the Greenwich meridian.
    pub xp: Arcseconds,
    /// Pole y coordinate, along the 90°W meridian.
    pub yp: Arcseconds,
}

impl Default for PolarMotion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PolarMotion {
    /// No wobble: the identity correction.
    pub const ZERO: PolarMotion = PolarMotion {
        xp: Arcseconds::new(0.0),
        yp: Arcseconds::new(0.0),
    };

    pub fn new(xp: Arcseconds, yp: Arcseconds) -> Self {
        Self { xp, yp }
    }

    /// True when both pole coordinates are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.xp.value() == 0.0 && self.yp.value() == 0.0
    }

    /// Wobble matrix W = R2(xp)·R1(yp) taking earth-fixed vectors into the
    /// intermediate frame (the IERS W(t) with the sub-microarcsecond s'
    /// term dropped).
    pub(crate) fn wobble_matrix(&self) -> Mat3 {
        if self.is_zero() {
            return Mat3::identity();
        }
        let xp_rad = self.xp.to::<Radian>().value();
        let yp_rad = self.yp.to::<Radian>().value();
        Mat3::r2(xp_rad).mul(&Mat3::r1(yp_rad))
    }
}

/// Convenience constructor mirroring how pole coordinates are quoted.
impl From<(f64, f64)> for PolarMotion {
    fn from((xp_arcsec, yp_arcsec): (f64, f64)) -> Self {
        Self::new(
            Arcseconds::new(xp_arcsec),
            Arcseconds::new(yp_arcsec),
        )
    }
}
