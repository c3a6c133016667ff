//! Topocentric geodesy: reference ellipsoids, earth-fixed observer
//! positions, polar motion, rotation into the equinox-of-date frame, and
//! subpoint recovery.

pub mod ellipsoid;
pub mod polar_motion;
pub mod site;
pub mod subpoint;

pub use ellipsoid::{ReferenceEllipsoid, IERS2010, WGS84};
pub use polar_motion::PolarMotion;
pub use site::{Center, ItrsPosition, ObserverSite, SitePosition};

/// Earth rotation rate, radians per second (IERS nominal value).
pub const EARTH_ANGULAR_VELOCITY_RAD_PER_S: f64 = 7.292_115_146_706_979e-5;

pub(crate) type Vec3 = [f64; 3];

/// Minimal 3×3 rotation matrix for frame transforms.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mat3(pub [[f64; 3]; 3]);

impl Mat3 {
    pub fn identity() -> Self {
        Mat3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Frame rotation about the x axis (IERS R1 convention).
    pub fn r1(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Mat3([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
    }

    /// Frame rotation about the y axis (IERS R2 convention).
    pub fn r2(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Mat3([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    /// Frame rotation about the z axis (IERS R3 convention).
    pub fn r3(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Mat3([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    pub fn mul(&self, other: &Mat3) -> Mat3 {
        let a = &self.0;
        let b = &other.0;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Mat3(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_r3_moves_greenwich_to_its_hour_angle() {
        // A point on the x axis rotated by R3(-θ) lands at angle θ.
        let theta = 0.3_f64;
        let rotated = Mat3::r3(-theta).mul_vec([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(rotated[0], theta.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(rotated[1], theta.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(rotated[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotations_preserve_length() {
        let v = [3.0, -4.0, 12.0];
        for m in [Mat3::r1(0.7), Mat3::r2(-1.1), Mat3::r3(2.9)] {
            let r = m.mul_vec(v);
            let len = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
            assert_abs_diff_eq!(len, 13.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity_product() {
        let m = Mat3::r1(0.5).mul(&Mat3::r1(-0.5));
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(m.0[i][j], expected, epsilon = 1e-12);
            }
        }
    }
}
