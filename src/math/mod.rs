pub mod coords;
pub mod random;
pub mod scalar;

use nalgebra::SMatrix;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f32>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f32>;

/// 4x4 homogeneous transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f32>;

/// Global floating-point tolerance for equality and near-zero tests.
pub const EPSILON: f32 = 1e-5;

/// π in single precision.
pub const PI: f32 = std::f32::consts::PI;

/// π / 2 in single precision.
pub const PI_2: f32 = std::f32::consts::FRAC_PI_2;

/// π / 4 in single precision.
pub const PI_4: f32 = std::f32::consts::FRAC_PI_4;

/// Returns `true` if every element of `a` is within [`EPSILON`] of `b`.
#[must_use]
pub fn approx_eq<const R: usize, const C: usize>(
    a: &SMatrix<f32, R, C>,
    b: &SMatrix<f32, R, C>,
) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= EPSILON)
}

/// Epsilon equality for points.
#[must_use]
pub fn points_approx_eq(a: &Point3, b: &Point3) -> bool {
    approx_eq(&a.coords, &b.coords)
}
