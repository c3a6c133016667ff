//! Geographic observer locations.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use crate::error::AlmanacError;

/// Geographic location of an observer on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicLocation {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180), east positive
    pub longitude: f64,
    /// Elevation in meters above the reference ellipsoid (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
}

impl GeographicLocation {
    /// Create a validated location.
    ///
    /// # Arguments
    /// * `latitude` - degrees, north positive
    /// * `longitude` - degrees, east positive
    /// * `elevation_m` - meters above the ellipsoid; `None` is treated as 0
    ///
    /// # Returns
    /// * `Ok(GeographicLocation)` when both angles are in range
    /// * `Err(AlmanacError::InvalidLocation)` otherwise
    pub fn new(
        latitude: f64,
        longitude: f64,
        elevation_m: Option<f64>,
    ) -> Result<Self, AlmanacError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AlmanacError::InvalidLocation(format!(
                "latitude must be between -90 and 90 degrees, got {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AlmanacError::InvalidLocation(format!(
                "longitude must be between -180 and 180 degrees, got {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
            elevation_m,
        })
    }

    /// Create a location from degrees-minutes-seconds components.
    ///
    /// Sign is taken from the degree components, matching
    /// [`qtty::Degrees::from_dms`].
    pub fn from_dms(
        lat_deg: i32,
        lat_min: u32,
        lat_sec: f64,
        lon_deg: i32,
        lon_min: u32,
        lon_sec: f64,
        elevation_m: Option<f64>,
    ) -> Result<Self, AlmanacError> {
        Self::new(
            Degrees::from_dms(lat_deg, lat_min, lat_sec).value(),
            Degrees::from_dms(lon_deg, lon_min, lon_sec).value(),
            elevation_m,
        )
    }

    /// Latitude as a typed angle.
    pub fn latitude_deg(&self) -> Degrees {
        Degrees::new(self.latitude)
    }

    /// Longitude as a typed angle, east positive.
    pub fn longitude_deg(&self) -> Degrees {
        Degrees::new(self.longitude)
    }

    /// Elevation with the optional field defaulted to sea level.
    pub fn elevation_or_zero_m(&self) -> f64 {
        self.elevation_m.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_location() {
        let loc = GeographicLocation::new(36.0544, -112.1401, None).unwrap();
        assert_eq!(loc.latitude, 36.0544);
        assert_eq!(loc.longitude, -112.1401);
        assert_eq!(loc.elevation_or_zero_m(), 0.0);
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert!(GeographicLocation::new(90.1, 0.0, None).is_err());
        assert!(GeographicLocation::new(-91.0, 0.0, None).is_err());
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert!(GeographicLocation::new(0.0, 180.5, None).is_err());
        assert!(GeographicLocation::new(0.0, -200.0, None).is_err());
    }

    #[test]
    fn test_from_dms() {
        // 42°21'24.1" N, 71°03'24.8" W
        let loc = GeographicLocation::from_dms(42, 21, 24.1, -71, 3, 24.8, Some(43.0)).unwrap();
        assert!((loc.latitude - (42.0 + 21.0 / 60.0 + 24.1 / 3600.0)).abs() < 1e-9);
        assert!(loc.longitude < 0.0, "west longitudes are negative");
        assert!((loc.longitude + (71.0 + 3.0 / 60.0 + 24.8 / 3600.0)).abs() < 1e-9);
        assert_eq!(loc.elevation_m, Some(43.0));
    }

    #[test]
    fn test_elevation_preserved() {
        let loc = GeographicLocation::new(28.7624, -17.8892, Some(2396.0)).unwrap();
        assert_eq!(loc.elevation_or_zero_m(), 2396.0);
    }
}
