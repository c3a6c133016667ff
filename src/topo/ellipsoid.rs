//! Reference ellipsoids for geodetic coordinates.

use qtty::Degrees;

/// An oblate reference ellipsoid described by its equatorial radius and
/// inverse flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEllipsoid {
    /// Short identifier used in log output and errors.
    pub name: &'static str,
    /// Semi-major (equatorial) axis in meters.
    pub semi_major_axis_m: f64,
    /// Inverse flattening 1/f.
    pub inverse_flattening: f64,
}

/// World Geodetic System 1984 ellipsoid.
pub const WGS84: ReferenceEllipsoid = ReferenceEllipsoid {
    name: "WGS84",
    semi_major_axis_m: 6_378_137.0,
    inverse_flattening: 298.257_223_563,
};

/// IERS 2010 conventions ellipsoid.
pub const IERS2010: ReferenceEllipsoid = ReferenceEllipsoid {
    name: "IERS2010",
    semi_major_axis_m: 6_378_136.6,
    inverse_flattening: 298.256_42,
};

impl ReferenceEllipsoid {
    /// Flattening f.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inverse_flattening
    }

    /// First eccentricity squared, e² = f(2 − f).
    pub fn eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// Semi-minor (polar) axis in meters.
    pub fn polar_radius_m(&self) -> f64 {
        self.semi_major_axis_m * (1.0 - self.flattening())
    }

    /// Geocentric radius of the ellipsoid surface at a geodetic latitude.
    pub fn radius_at(&self, latitude: Degrees) -> f64 {
        let (sin, cos) = latitude.sin_cos();
        let a = self.semi_major_axis_m;
        let b = self.polar_radius_m();
        let a2 = a * a;
        let b2 = b * b;
        let numerator = a2 * a2 * cos * cos + b2 * b2 * sin * sin;
        let denominator = (a * cos).powi(2) + (b * sin).powi(2);
        (numerator / denominator).sqrt()
    }

    /// Prime-vertical radius of curvature N(φ) in meters.
    pub fn prime_vertical_radius_m(&self, latitude: Degrees) -> f64 {
        let sin = latitude.sin();
        self.semi_major_axis_m / (1.0 - self.eccentricity_squared() * sin * sin).sqrt()
    }
}
