//! Analytic lunisolar ephemeris.
//!
//! Apparent positions of the Sun and Moon referred to the ecliptic and
//! equinox of date, from compact published series (Meeus, *Astronomical
//! Algorithms*, 2nd ed.): solar theory in [`solar`], a truncated ELP2000
//! lunar theory in [`lunar`], and Earth-rotation angles in [`sidereal`].
//! Accuracy is almanac-grade: ≲0.01° for the Sun and ≲0.01° for the Moon
//! near the present era, which the event searches in
//! [`crate::services`] budget for.

use qtty::{Arcseconds, Degree, Degrees, HourAngle, HourAngles, Kilometers};
use serde::{Deserialize, Serialize};

use crate::models::JulianDate;

pub mod lunar;
pub mod sidereal;
pub mod solar;

/// Kilometers per astronomical unit (IAU 2012).
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Position on the ecliptic of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    /// Ecliptic longitude of date, wrapped to [0, 360).
    pub longitude: Degrees,
    /// Ecliptic latitude, positive north of the ecliptic plane.
    pub latitude: Degrees,
    /// Geocentric distance.
    pub distance: Kilometers,
}

impl EclipticPosition {
    /// Geocentric distance in astronomical units.
    pub fn distance_au(&self) -> f64 {
        self.distance.value() / KM_PER_AU
    }

    /// Convert to equatorial coordinates of date using the true obliquity.
    pub fn to_equatorial(&self, jd_tt: JulianDate) -> EquatorialPosition {
        let nut = nutation(jd_tt);
        let eps = true_obliquity(jd_tt, &nut);
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let (sin_eps, cos_eps) = eps.sin_cos();
        let tan_lat = self.latitude.tan();
        let (sin_lat, cos_lat) = self.latitude.sin_cos();

        let ra_deg = (sin_lon * cos_eps - tan_lat * sin_eps)
            .atan2(cos_lon)
            .to_degrees();
        let dec_deg = (sin_lat * cos_eps + cos_lat * sin_eps * sin_lon)
            .asin()
            .to_degrees();

        EquatorialPosition {
            right_ascension: Degrees::new(ra_deg).wrap_pos().to::<HourAngle>(),
            declination: Degrees::new(dec_deg),
        }
    }
}

/// Position on the equator and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialPosition {
    /// Right ascension in hour angles, wrapped to [0, 24).
    pub right_ascension: HourAngles,
    /// Declination, positive north of the celestial equator.
    pub declination: Degrees,
}

/// Nutation angles at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude, Δψ.
    pub in_longitude: Arcseconds,
    /// Nutation in obliquity, Δε.
    pub in_obliquity: Arcseconds,
}

/// Mean obliquity of the ecliptic (IAU 2006 polynomial).
pub fn mean_obliquity(jd_tt: JulianDate) -> Degrees {
    let t = jd_tt.julian_centuries();
    let arcsec = 84_381.406 - 46.836_769 * t - 0.000_183_1 * t * t + 0.002_003_40 * t.powi(3);
    Arcseconds::new(arcsec).to::<Degree>()
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity(jd_tt: JulianDate, nutation: &Nutation) -> Degrees {
    mean_obliquity(jd_tt) + nutation.in_obliquity.to::<Degree>()
}

/// Nutation in longitude and obliquity, principal terms only.
///
/// The four largest periodic terms of the IAU 1980 theory; the omitted tail
/// is below 0.3″, well inside this crate's accuracy budget.
pub fn nutation(jd_tt: JulianDate) -> Nutation {
    let t = jd_tt.julian_centuries();

    // Longitude of the Moon's ascending node, mean longitudes of Sun and Moon
    let omega = Degrees::new(125.044_52 - 1_934.136_261 * t).wrap_pos();
    let l_sun = Degrees::new(280.4665 + 36_000.7698 * t).wrap_pos();
    let l_moon = Degrees::new(218.3165 + 481_267.8813 * t).wrap_pos();

    let two_l_sun = l_sun * 2.0;
    let two_l_moon = l_moon * 2.0;
    let two_omega = omega * 2.0;

    let dpsi = -17.20 * omega.sin() - 1.32 * two_l_sun.sin() - 0.23 * two_l_moon.sin()
        + 0.21 * two_omega.sin();
    let deps = 9.20 * omega.cos() + 0.57 * two_l_sun.cos() + 0.10 * two_l_moon.cos()
        - 0.09 * two_omega.cos();

    Nutation {
        in_longitude: Arcseconds::new(dpsi),
        in_obliquity: Arcseconds::new(deps),
    }
}
