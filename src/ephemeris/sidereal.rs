//! Greenwich sidereal time.

use qtty::{Degree, Degrees, HourAngle, HourAngles};

use super::{nutation, true_obliquity};
use crate::models::{JulianDate, DAYS_PER_CENTURY, J2000_JD};

/// Greenwich mean sidereal time at a universal-scale JD, wrapped to [0, 24) hours.
pub fn gmst(jd_ut: JulianDate) -> HourAngles {
    let du = jd_ut.value() - J2000_JD;
    let t = du / DAYS_PER_CENTURY;
    let theta_deg =
        280.460_618_37 + 360.985_647_366_29 * du + 0.000_387_933 * t * t - t.powi(3) / 38_710_000.0;
    Degrees::new(theta_deg).wrap_pos().to::<HourAngle>()
}

/// Greenwich apparent sidereal time: GMST plus the equation of the equinoxes.
pub fn gast(jd_ut: JulianDate) -> HourAngles {
    let nut = nutation(jd_ut);
    let eps = true_obliquity(jd_ut, &nut);
    let eq_equinoxes_deg = nut.in_longitude.to::<Degree>().value() * eps.cos();
    (gmst(jd_ut) + Degrees::new(eq_equinoxes_deg).to::<HourAngle>()).wrap_pos()
}
