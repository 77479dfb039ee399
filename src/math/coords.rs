//! Polar and spherical coordinates and their conversions to cartesian form.
//!
//! Conventions:
//! - Polar `theta` is measured from +x towards +y, in `[0, 2π)`.
//! - Spherical `theta` is the inclination above the xz-plane, in `[-π/2, π/2]`.
//! - Spherical `phi` is the azimuth from +x towards +z, in `[0, 2π)`.
//!
//! All angles are in radians.

use tracing::debug;

use crate::error::{CoordinateError, Result};

use super::{Vector2, Vector3, EPSILON, PI, PI_2};

/// A 2D vector in polar form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolarVector {
    radius: f32,
    theta: f32,
}

impl PolarVector {
    /// Creates a polar vector, wrapping `theta` into `[0, 2π)`.
    #[must_use]
    pub fn new(radius: f32, theta: f32) -> Self {
        Self {
            radius,
            theta: wrap_angle(theta),
        }
    }

    /// Distance from the origin.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Angle from +x towards +y.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Returns `true` if both components are within [`EPSILON`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.radius - other.radius).abs() <= EPSILON
            && (self.theta - other.theta).abs() <= EPSILON
    }
}

/// A 3D vector in spherical form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SphericalVector {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl SphericalVector {
    /// Creates a spherical vector, folding the angles into their canonical
    /// ranges.
    ///
    /// An inclination beyond the poles is reflected back and the azimuth turned
    /// by π. At the poles the azimuth is forced to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative, or if `radius` is zero while
    /// either angle is not.
    #[allow(clippy::float_cmp)]
    pub fn new(radius: f32, theta: f32, phi: f32) -> Result<Self> {
        if radius < 0.0 {
            debug!(radius, "rejected spherical vector with negative radius");
            return Err(CoordinateError::NegativeRadius(radius).into());
        }
        if radius == 0.0 && (theta != 0.0 || phi != 0.0) {
            debug!(theta, phi, "rejected spherical vector with angles at the origin");
            return Err(CoordinateError::NonZeroAnglesAtOrigin { theta, phi }.into());
        }

        // Bring theta into (-π, π] before folding it over the poles.
        let mut theta = wrap_angle(theta);
        if theta > PI {
            theta -= 2.0 * PI;
        }
        let mut phi = phi;
        if theta > PI_2 {
            theta = PI - theta;
            phi += PI;
        } else if theta < -PI_2 {
            theta = -PI - theta;
            phi += PI;
        }

        if (theta.abs() - PI_2).abs() <= EPSILON {
            return Ok(Self {
                radius,
                theta: PI_2.copysign(theta),
                phi: 0.0,
            });
        }

        Ok(Self {
            radius,
            theta,
            phi: wrap_angle(phi),
        })
    }

    /// Distance from the origin.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Inclination above the xz-plane.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Azimuth from +x towards +z.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Returns `true` if all three components are within [`EPSILON`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.radius - other.radius).abs() <= EPSILON
            && (self.theta - other.theta).abs() <= EPSILON
            && (self.phi - other.phi).abs() <= EPSILON
    }
}

/// Wraps an angle into `[0, 2π)`.
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= 2.0 * PI {
        0.0
    } else {
        wrapped
    }
}

/// Converts a cartesian 2D vector to polar form.
#[must_use]
pub fn cartesian_to_polar(v: &Vector2) -> PolarVector {
    PolarVector::new(v.norm(), v.y.atan2(v.x))
}

/// Converts a polar vector to cartesian form.
#[must_use]
pub fn polar_to_cartesian(v: &PolarVector) -> Vector2 {
    Vector2::new(v.radius * v.theta.cos(), v.radius * v.theta.sin())
}

/// Converts a cartesian 3D vector to spherical form.
///
/// The zero vector maps to the zero spherical vector.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn cartesian_to_spherical(v: &Vector3) -> SphericalVector {
    let radius = v.norm();
    if radius == 0.0 {
        return SphericalVector::default();
    }
    let theta = (v.y / radius).clamp(-1.0, 1.0).asin();
    let phi = v.z.atan2(v.x);
    // radius > 0 here, so construction cannot fail.
    SphericalVector::new(radius, theta, phi).unwrap_or_default()
}

/// Converts a spherical vector to cartesian form.
#[must_use]
pub fn spherical_to_cartesian(v: &SphericalVector) -> Vector3 {
    let horizontal = v.radius * v.theta.cos();
    Vector3::new(
        horizontal * v.phi.cos(),
        v.radius * v.theta.sin(),
        horizontal * v.phi.sin(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RaymathError;
    use crate::math::{approx_eq, random, PI_4};

    fn sph(r: f32, theta: f32, phi: f32) -> SphericalVector {
        SphericalVector::new(r, theta, phi).unwrap()
    }

    // ── polar ──

    #[test]
    fn polar_round_trip() {
        let v = Vector2::new(5.5, 2.4);
        assert!(approx_eq(&polar_to_cartesian(&cartesian_to_polar(&v)), &v));
    }

    #[test]
    fn polar_axis_convention() {
        let cases = [
            (Vector2::new(1.0, 0.0), 0.0),
            (Vector2::new(0.0, 1.0), PI_2),
            (Vector2::new(-1.0, 0.0), 2.0 * PI_2),
            (Vector2::new(0.0, -1.0), 3.0 * PI_2),
        ];
        for (v, theta) in cases {
            let polar = cartesian_to_polar(&v);
            assert!(
                polar.approx_eq(&PolarVector::new(1.0, theta)),
                "{v:?} -> {polar:?}, expected theta {theta}"
            );
        }
    }

    #[test]
    fn polar_theta_is_wrapped() {
        let polar = PolarVector::new(1.0, -PI_2);
        assert!((polar.theta() - 3.0 * PI_2).abs() <= EPSILON);
    }

    // ── spherical ──

    #[test]
    fn spherical_round_trip_random_vectors() {
        random::seed_thread_rng(7);
        for _ in 0..10 {
            let v = Vector3::new(random::frand(), random::frand(), random::frand());
            let back = spherical_to_cartesian(&cartesian_to_spherical(&v));
            assert!(approx_eq(&back, &v), "{v:?} -> {back:?}");
        }
    }

    #[test]
    fn spherical_axis_convention() {
        let cases = [
            (Vector3::new(1.0, 0.0, 0.0), sph(1.0, 0.0, 0.0)),
            (Vector3::new(-1.0, 0.0, 0.0), sph(1.0, 0.0, PI)),
            (Vector3::new(0.0, 1.0, 0.0), sph(1.0, PI_2, 0.0)),
            (Vector3::new(0.0, -1.0, 0.0), sph(1.0, -PI_2, 0.0)),
            (Vector3::new(0.0, 0.0, 1.0), sph(1.0, 0.0, PI_2)),
            (Vector3::new(0.0, 0.0, -1.0), sph(1.0, 0.0, PI + PI_2)),
        ];
        for (v, expected) in cases {
            let got = cartesian_to_spherical(&v);
            assert!(got.approx_eq(&expected), "{v:?} -> {got:?}, expected {expected:?}");
        }
    }

    #[test]
    fn spherical_diagonals_in_xz_plane() {
        let h = 2.0_f32.sqrt() / 2.0;
        let cases = [
            (Vector3::new(h, 0.0, h), PI_4),
            (Vector3::new(-h, 0.0, h), 3.0 * PI_4),
            (Vector3::new(-h, 0.0, -h), 5.0 * PI_4),
            (Vector3::new(h, 0.0, -h), 7.0 * PI_4),
        ];
        for (v, phi) in cases {
            let got = cartesian_to_spherical(&v);
            assert!(got.approx_eq(&sph(1.0, 0.0, phi)), "{v:?} -> {got:?}");
        }
    }

    #[test]
    fn spherical_diagonals_in_xy_plane() {
        let h = 2.0_f32.sqrt() / 2.0;
        let cases = [
            (Vector3::new(h, h, 0.0), sph(1.0, PI_4, 0.0)),
            (Vector3::new(-h, h, 0.0), sph(1.0, PI_4, PI)),
            (Vector3::new(-h, -h, 0.0), sph(1.0, -PI_4, PI)),
            (Vector3::new(h, -h, 0.0), sph(1.0, -PI_4, 0.0)),
        ];
        for (v, expected) in cases {
            let got = cartesian_to_spherical(&v);
            assert!(got.approx_eq(&expected), "{v:?} -> {got:?}");
        }
    }

    #[test]
    fn zero_vector_maps_to_origin() {
        let got = cartesian_to_spherical(&Vector3::zeros());
        assert!(got.approx_eq(&SphericalVector::default()));
    }

    #[test]
    fn inclination_past_pole_is_folded() {
        // 135° inclination is 45° on the opposite side.
        let folded = sph(1.0, 3.0 * PI_4, 0.0);
        assert!(folded.approx_eq(&sph(1.0, PI_4, PI)));
    }

    #[test]
    fn pole_forces_zero_azimuth() {
        let pole = sph(2.0, PI_2, 1.0);
        assert!((pole.phi()).abs() <= EPSILON);
        assert!((pole.theta() - PI_2).abs() <= EPSILON);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let err = SphericalVector::new(-1.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            RaymathError::Coordinate(CoordinateError::NegativeRadius(_))
        ));
    }

    #[test]
    fn angles_at_origin_are_rejected() {
        let err = SphericalVector::new(0.0, 0.5, 0.0).unwrap_err();
        assert!(matches!(
            err,
            RaymathError::Coordinate(CoordinateError::NonZeroAnglesAtOrigin { .. })
        ));
    }
}
