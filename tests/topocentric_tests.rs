//! Topocentric geodesy integration tests: earth-fixed observer positions,
//! rotational velocity, local sidereal time, polar motion, and subpoints.

use lunisolar::models::{GeographicLocation, ModifiedJulianDate};
use lunisolar::topo::{
    ItrsPosition, ObserverSite, PolarMotion, IERS2010, WGS84,
};

/// Meters per astronomical unit (IAU 2012).
const AU_M: f64 = 149_597_870_700.0;

/// Equatorial earth radius used as the elevation baseline, m.
const ERAD_M: f64 = 6_378_136.6;

fn mjd(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> ModifiedJulianDate {
    ModifiedJulianDate::from_utc(year, month, day, hour, minute, second).unwrap()
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[test]
fn test_raw_itrs_position() {
    // A raw earth-fixed vector can be carried to an instant without any
    // geodetic site attached.
    let p = ItrsPosition::new([1.0e5, 2.0e5, 3.0e5]);
    let t = mjd(2020, 12, 16, 12, 59, 0.0);
    let pos = p.at(t);
    assert!((norm(pos.position_km) - norm(p.position_km)).abs() < 1e-6);
    assert_eq!(pos.position_km[2], 3.0e5);
}

#[test]
fn test_velocity() {
    // A short fraction of a second: long enough for the motion to rise
    // above the noise, short enough that the direction barely changes.
    let factor = 300.0;

    let jacob = ObserverSite::wgs84(GeographicLocation::new(36.7138, -112.2169, None).unwrap());
    let t0 = mjd(2019, 11, 2, 3, 53, 0.0);
    let t1 = ModifiedJulianDate::new(t0.value() + 1.0 / factor / 86_400.0);

    let p0 = jacob.at(t0);
    let p1 = jacob.at(t1);
    let velocity1 = sub(p1.position_km, p0.position_km);
    let velocity2 = p0.velocity_km_per_s;

    let residual = [
        velocity2[0] - factor * velocity1[0],
        velocity2[1] - factor * velocity1[1],
        velocity2[2] - factor * velocity1[2],
    ];
    assert!(
        norm(residual) < 0.0007,
        "analytic velocity disagrees with finite difference by {} km/s",
        norm(residual)
    );
}

#[test]
fn test_lst() {
    // HORIZONS local apparent sidereal time at (0°N, 0°E),
    // 2020-11-27 15:34 UT: 20.0336663100 hours.
    let top = ObserverSite::wgs84(GeographicLocation::new(0.0, 0.0, None).unwrap());
    let t = mjd(2020, 11, 27, 15, 34, 0.0);
    let actual = top.lst_hours_at(t).value();
    let expected = 20.033_666_31;
    assert!(
        (actual - expected).abs() < 5e-4,
        "LST {actual} h differs from HORIZONS value {expected} h"
    );
}

#[test]
fn test_itrf_vector() {
    // A site lifted an astronomical unit above the geoid points almost
    // exactly along the (cos 45°, 0, sin 45°) direction.
    let top = ObserverSite::wgs84(
        GeographicLocation::new(45.0, 0.0, Some(AU_M - ERAD_M)).unwrap(),
    );

    let p = top.itrs_position_m();
    let x_au = p[0] / AU_M;
    let y_au = p[1] / AU_M;
    let z_au = p[2] / AU_M;
    let half_sqrt = 0.5_f64.sqrt();
    assert!((x_au - half_sqrt).abs() < 2e-7);
    assert!(y_au.abs() < 1e-14);
    assert!((z_au - half_sqrt).abs() < 2e-7);

    // Rotation into the frame of date preserves the geocentric distance.
    let t = mjd(2019, 11, 2, 3, 53, 0.0);
    let pos = top.at(t);
    assert!((norm(pos.position_km) * 1e3 - norm(p)).abs() < 1.0);
}

#[test]
fn test_polar_motion_when_computing_topos_position() {
    let xp_arcseconds = 11.0;
    let yp_arcseconds = 22.0;
    let pm = PolarMotion::from((xp_arcseconds, yp_arcseconds));

    let location =
        GeographicLocation::from_dms(42, 21, 24.1, -71, 3, 24.8, Some(43.0)).unwrap();
    let top = ObserverSite::iers2010(location);
    let t = mjd(2020, 11, 12, 22, 2, 0.0);

    let plain = top.at(t);
    let wobbled = top.at_with_polar_motion(t, &pm);

    // The wobble is a pure rotation: geocentric distance is unchanged.
    assert!((norm(plain.position_km) - norm(wobbled.position_km)).abs() < 1e-9);

    // For this site the 11"/22" wobble displaces the position by ~0.76 km,
    // dominated by a positive shift along the rotation axis.
    let displacement = sub(wobbled.position_km, plain.position_km);
    let magnitude = norm(displacement);
    assert!(
        (0.4..1.1).contains(&magnitude),
        "wobble displacement {magnitude} km out of expected range"
    );
    let dz = wobbled.position_km[2] - plain.position_km[2];
    assert!(
        (0.4..0.7).contains(&dz),
        "wobble z-shift {dz} km has the wrong size or sign"
    );

    // The subpoint still recovers the site when the wobble is active.
    let recovered = IERS2010.subpoint(&wobbled).unwrap();
    assert!((recovered.latitude - location.latitude).abs() < 1e-8);
    assert!((recovered.longitude - location.longitude).abs() < 1e-8);
}

#[test]
fn test_subpoint_with_wrong_center() {
    use lunisolar::topo::SitePosition;
    let t = mjd(2020, 12, 31, 0, 0, 0.0);
    let p = SitePosition::barycentric([0.0, 0.0, 0.0], t);
    let err = WGS84.subpoint(&p).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("subpoint") && message.contains("center of the Earth"),
        "unexpected error message: {message}"
    );
}

#[test]
fn test_iers2010_subpoint() {
    let t = mjd(2018, 1, 19, 14, 37, 55.0);
    for angle in [-15.0, 15.0, 35.0, 45.0] {
        // An elevation of 0 is more difficult for the routine's accuracy
        // than a very large elevation.
        let top = ObserverSite::iers2010(
            GeographicLocation::new(angle, angle, Some(0.0)).unwrap(),
        );
        let b = IERS2010.subpoint(&top.at(t)).unwrap();

        let error_mas = 60.0 * 60.0 * 1000.0 * (b.latitude - angle).abs();
        assert!(error_mas < 0.1, "latitude error {error_mas} mas at {angle}");

        let error_mas = 60.0 * 60.0 * 1000.0 * (b.longitude - angle).abs();
        assert!(error_mas < 0.1, "longitude error {error_mas} mas at {angle}");
    }
}

#[test]
fn test_wgs84_subpoint() {
    let t = mjd(2018, 1, 19, 14, 37, 55.0);
    for angle in [-15.0, 15.0, 35.0, 45.0] {
        let top = ObserverSite::wgs84(
            GeographicLocation::new(angle, angle, Some(0.0)).unwrap(),
        );
        let b = WGS84.subpoint(&top.at(t)).unwrap();

        let error_mas = 60.0 * 60.0 * 1000.0 * (b.latitude - angle).abs();
        assert!(error_mas < 0.1, "latitude error {error_mas} mas at {angle}");

        let error_mas = 60.0 * 60.0 * 1000.0 * (b.longitude - angle).abs();
        assert!(error_mas < 0.1, "longitude error {error_mas} mas at {angle}");
    }
}

#[test]
fn test_position_subpoint_method() {
    // The convenience method uses the ellipsoid the position was built on.
    let t = mjd(2018, 1, 19, 14, 37, 55.0);
    for angle in [-15.0, 15.0, 35.0, 45.0] {
        let top = ObserverSite::iers2010(
            GeographicLocation::new(angle, angle, Some(0.0)).unwrap(),
        );
        let b = top.at(t).subpoint().unwrap();

        let error_mas = 60.0 * 60.0 * 1000.0 * (b.latitude - angle).abs();
        assert!(error_mas < 0.1, "latitude error {error_mas} mas at {angle}");

        let error_mas = 60.0 * 60.0 * 1000.0 * (b.longitude - angle).abs();
        assert!(error_mas < 0.1, "longitude error {error_mas} mas at {angle}");
    }
}
