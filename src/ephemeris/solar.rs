//! Apparent geocentric solar position (Meeus ch. 25).

use qtty::{Degree, Degrees, Kilometers};

use super::{nutation, EclipticPosition, KM_PER_AU};
use crate::models::JulianDate;

/// Constant of aberration, arcseconds at 1 au.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Apparent geocentric ecliptic position of the Sun at the given TT instant.
///
/// Mean longitude plus equation of center, corrected for nutation in
/// longitude and annual aberration. The apparent Sun is treated as lying in
/// the ecliptic plane, so the returned latitude is zero.
pub fn apparent_position(jd_tt: JulianDate) -> EclipticPosition {
    let t = jd_tt.julian_centuries();

    // Geometric mean longitude and mean anomaly
    let l0 = Degrees::new(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t).wrap_pos();
    let m = Degrees::new(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).wrap_pos();

    // Equation of center
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (m * 2.0).sin()
        + 0.000_289 * (m * 3.0).sin();

    let true_longitude = l0 + Degrees::new(c);
    let true_anomaly = m + Degrees::new(c);

    // Radius vector from the orbit's eccentricity
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    let r_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    // Apparent longitude: nutation and aberration
    let dpsi = nutation(jd_tt).in_longitude.to::<Degree>();
    let aberration = Degrees::new(ABERRATION_ARCSEC / 3600.0 / r_au);
    let apparent_longitude = (true_longitude + dpsi - aberration).wrap_pos();

    EclipticPosition {
        longitude: apparent_longitude,
        latitude: Degrees::new(0.0),
        distance: Kilometers::new(r_au * KM_PER_AU),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_meeus_example_25a() {
        // 1992 October 13.0 TD: apparent λ ≈ 199.9089°, R ≈ 0.99766 au.
        let pos = apparent_position(JulianDate::new(2_448_908.5));
        assert_abs_diff_eq!(pos.longitude.value(), 199.909, epsilon = 0.01);
        assert_abs_diff_eq!(pos.distance_au(), 0.997_66, epsilon = 5e-4);
        assert_eq!(pos.latitude.value(), 0.0);

        let equ = pos.to_equatorial(JulianDate::new(2_448_908.5));
        let ra_deg = equ.right_ascension.to::<Degree>().value();
        assert_abs_diff_eq!(ra_deg, 198.381, epsilon = 0.02);
        assert_abs_diff_eq!(equ.declination.value(), -7.785, epsilon = 0.01);
    }

    #[test]
    fn test_longitude_advances_about_one_degree_per_day() {
        let jd = JulianDate::new(2_459_600.5);
        let today = apparent_position(jd);
        let tomorrow = apparent_position(JulianDate::new(jd.value() + 1.0));
        let advance = tomorrow
            .longitude
            .signed_separation(today.longitude)
            .value();
        assert!(
            (0.9..1.1).contains(&advance),
            "solar longitude should advance ~0.9856°/day, got {advance}"
        );
    }

    #[test]
    fn test_distance_within_orbit_bounds() {
        // Perihelion ~0.9833 au, aphelion ~1.0167 au.
        for day in (0..366).step_by(10) {
            let pos = apparent_position(JulianDate::new(2_459_580.5 + day as f64));
            let r = pos.distance_au();
            assert!(
                (0.982..1.018).contains(&r),
                "solar distance {r} au out of orbital bounds"
            );
        }
    }
}
