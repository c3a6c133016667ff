//! Geodetic subpoint recovery: the point on the ellipsoid surface directly
//! beneath a geocentric position.

use crate::error::AlmanacError;
use crate::models::GeographicLocation;

use super::site::{Center, SitePosition};
use super::{ReferenceEllipsoid, Vec3};

/// Iterations of the geodetic-latitude fixed point; convergence is far
/// below a microarcsecond for any terrestrial height.
const LATITUDE_ITERATIONS: usize = 6;

impl ReferenceEllipsoid {
    /// Geodetic latitude, longitude and height beneath a geocentric
    /// position.
    ///
    /// # Arguments
    /// * `position` - a position measured from the geocenter
    ///
    /// # Returns
    /// * `Ok(GeographicLocation)` with the recovered coordinates
    /// * `Err(AlmanacError::WrongCenter)` when the position is not
    ///   measured from the center of the Earth
    pub fn subpoint(&self, position: &SitePosition) -> Result<GeographicLocation, AlmanacError> {
        if position.center != Center::Geocenter {
            return Err(AlmanacError::WrongCenter(position.center.to_string()));
        }
        Ok(self.geodetic_from_itrs_m(scale_km_to_m(position.itrs_position_km)))
    }

    /// Invert an earth-fixed cartesian vector (meters) to geodetic
    /// coordinates on this ellipsoid.
    pub fn geodetic_from_itrs_m(&self, xyz_m: Vec3) -> GeographicLocation {
        let [x, y, z] = xyz_m;
        let a = self.semi_major_axis_m;
        let e2 = self.eccentricity_squared();

        let longitude = y.atan2(x).to_degrees();
        let p = x.hypot(y);

        let mut latitude = z.atan2(p * (1.0 - e2));
        for _ in 0..LATITUDE_ITERATIONS {
            let sin_lat = latitude.sin();
            let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
            latitude = (z + e2 * n * sin_lat).atan2(p);
        }

        let sin_lat = latitude.sin();
        let cos_lat = latitude.cos();
        let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        // Near the poles p/cos(lat) degenerates; lean on z there instead.
        let height = if cos_lat.abs() > 1e-8 {
            p / cos_lat - n
        } else {
            z.abs() - n * (1.0 - e2)
        };

        GeographicLocation {
            latitude: latitude.to_degrees(),
            longitude,
            elevation_m: Some(height),
        }
    }
}

fn scale_km_to_m(v: Vec3) -> Vec3 {
    [v[0] * 1e3, v[1] * 1e3, v[2] * 1e3]
}
