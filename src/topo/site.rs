//! Geodetic observer sites and their earth-fixed and equinox-of-date
//! positions.

use qtty::{HourAngle, HourAngles, Radian};
use serde::{Deserialize, Serialize};

use super::{Mat3, PolarMotion, ReferenceEllipsoid, Vec3, EARTH_ANGULAR_VELOCITY_RAD_PER_S};
use crate::ephemeris::sidereal;
use crate::models::{GeographicLocation, ModifiedJulianDate};

/// Origin a position vector is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Center {
    /// The center of the Earth.
    Geocenter,
    /// The solar system barycenter.
    SolarSystemBarycenter,
}

impl std::fmt::Display for Center {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Center::Geocenter => write!(f, "the geocenter"),
            Center::SolarSystemBarycenter => write!(f, "the solar system barycenter"),
        }
    }
}

/// A geodetic site on a reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSite {
    pub location: GeographicLocation,
    pub ellipsoid: ReferenceEllipsoid,
}

impl ObserverSite {
    pub fn new(location: GeographicLocation, ellipsoid: ReferenceEllipsoid) -> Self {
        Self {
            location,
            ellipsoid,
        }
    }

    /// Site on the WGS84 ellipsoid.
    pub fn wgs84(location: GeographicLocation) -> Self {
        Self::new(location, super::WGS84)
    }

    /// Site on the IERS2010 ellipsoid.
    pub fn iers2010(location: GeographicLocation) -> Self {
        Self::new(location, super::IERS2010)
    }

    /// Earth-fixed (ITRS) position vector of the site in meters.
    pub fn itrs_position_m(&self) -> Vec3 {
        let lat = self.location.latitude_deg();
        let lon = self.location.longitude_deg();
        let h = self.location.elevation_or_zero_m();

        let n = self.ellipsoid.prime_vertical_radius_m(lat);
        let e2 = self.ellipsoid.eccentricity_squared();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        [
            (n + h) * cos_lat * cos_lon,
            (n + h) * cos_lat * sin_lon,
            (n * (1.0 - e2) + h) * sin_lat,
        ]
    }

    /// Earth-fixed position in kilometers.
    pub fn itrs_position_km(&self) -> Vec3 {
        let m = self.itrs_position_m();
        [m[0] / 1e3, m[1] / 1e3, m[2] / 1e3]
    }

    /// Position of the site at an instant, in the equinox-of-date
    /// equatorial frame, without polar motion.
    pub fn at(&self, instant: ModifiedJulianDate) -> SitePosition {
        self.at_with_polar_motion(instant, &PolarMotion::ZERO)
    }

    /// Position of the site at an instant with an explicit wobble
    /// correction: of-date = R3(−GAST) · W · earth-fixed.
    pub fn at_with_polar_motion(
        &self,
        instant: ModifiedJulianDate,
        polar_motion: &PolarMotion,
    ) -> SitePosition {
        let itrs_km = self.itrs_position_km();
        rotate_to_frame_of_date(itrs_km, instant, polar_motion, self.ellipsoid)
    }

    /// Local apparent sidereal time at the site, hours in [0, 24).
    pub fn lst_hours_at(&self, instant: ModifiedJulianDate) -> HourAngles {
        let gast = sidereal::gast(instant.to_julian_date());
        (gast + self.location.longitude_deg().to::<HourAngle>()).wrap_pos()
    }
}

/// A raw earth-fixed position not tied to a geodetic site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItrsPosition {
    pub position_km: Vec3,
}

impl ItrsPosition {
    pub fn new(position_km: Vec3) -> Self {
        Self { position_km }
    }

    /// Rotate the raw vector into the equinox-of-date frame at an instant.
    pub fn at(&self, instant: ModifiedJulianDate) -> SitePosition {
        rotate_to_frame_of_date(
            self.position_km,
            instant,
            &PolarMotion::ZERO,
            super::WGS84,
        )
    }
}

/// An instant position measured from some center.
///
/// Positions produced by [`ObserverSite::at`] are geocentric, expressed in
/// the equinox-of-date equatorial frame, and carry their earth-fixed
/// counterpart so the subpoint can be recovered exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitePosition {
    pub instant: ModifiedJulianDate,
    pub center: Center,
    /// Position in the equinox-of-date equatorial frame, km.
    pub position_km: Vec3,
    /// Velocity from the Earth's rotation, km/s, same frame.
    pub velocity_km_per_s: Vec3,
    /// Earth-fixed counterpart of `position_km`, km.
    pub itrs_position_km: Vec3,
    /// Ellipsoid the position was built against.
    pub ellipsoid: ReferenceEllipsoid,
}

impl SitePosition {
    /// A position measured from the solar system barycenter; only useful to
    /// demonstrate that geodetic operations reject it.
    pub fn barycentric(position_km: Vec3, instant: ModifiedJulianDate) -> Self {
        Self {
            instant,
            center: Center::SolarSystemBarycenter,
            position_km,
            velocity_km_per_s: [0.0; 3],
            itrs_position_km: [0.0; 3],
            ellipsoid: super::WGS84,
        }
    }

    /// Geodetic subpoint on the ellipsoid this position was built against.
    pub fn subpoint(&self) -> Result<GeographicLocation, crate::error::AlmanacError> {
        self.ellipsoid.subpoint(self)
    }
}

fn rotate_to_frame_of_date(
    itrs_km: Vec3,
    instant: ModifiedJulianDate,
    polar_motion: &PolarMotion,
    ellipsoid: ReferenceEllipsoid,
) -> SitePosition {
    let gast_rad = sidereal::gast(instant.to_julian_date())
        .to::<Radian>()
        .value();
    let rotation = Mat3::r3(-gast_rad).mul(&polar_motion.wobble_matrix());
    let position_km = rotation.mul_vec(itrs_km);

    // Earth rotation sweeps the site eastward: v = ω ẑ × r
    let omega = EARTH_ANGULAR_VELOCITY_RAD_PER_S;
    let velocity_km_per_s = [
        -omega * position_km[1],
        omega * position_km[0],
        0.0,
    ];

    SitePosition {
        instant,
        center: Center::Geocenter,
        position_km,
        velocity_km_per_s,
        itrs_position_km: itrs_km,
        ellipsoid,
    }
}
