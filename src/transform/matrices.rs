//! Elementary homogeneous matrices used to build a [`Transform`](super::Transform).
//!
//! Column-vector convention: a point maps as `p' = M * p` and the
//! translation lives in the last column.

use nalgebra::ArrayStorage;

use crate::geometry::Line;
use crate::math::{Matrix4, Vector3};

/// The 4x4 identity, usable in `const` contexts.
pub const IDENTITY_MATRIX: Matrix4 = Matrix4::from_array_storage(ArrayStorage([
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
]));

/// Translation by `tr`.
#[must_use]
pub fn translation_matrix(tr: &Vector3) -> Matrix4 {
    Matrix4::new_translation(tr)
}

/// Componentwise scaling by `sc`.
#[must_use]
pub fn scaling_matrix(sc: &Vector3) -> Matrix4 {
    Matrix4::new_nonuniform_scaling(sc)
}

/// Rotation by `degrees` about the axis through `axis.origin` along
/// `axis.direction` (right-handed).
///
/// A zero-length axis yields the identity.
#[must_use]
#[allow(
    clippy::float_cmp,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::suspicious_operation_groupings
)]
pub fn rotation_matrix(axis: &Line, degrees: f32) -> Matrix4 {
    let len = axis.direction.norm();
    if len == 0.0 {
        return IDENTITY_MATRIX;
    }
    let dir = axis.direction / len;
    let (u, v, w) = (dir.x, dir.y, dir.z);
    let (a, b, c) = (axis.origin.x, axis.origin.y, axis.origin.z);

    let (sin, cos) = degrees.to_radians().sin_cos();
    let k = 1.0 - cos;

    Matrix4::new(
        u * u + (v * v + w * w) * cos,
        u * v * k - w * sin,
        u * w * k + v * sin,
        (a * (v * v + w * w) - u * (b * v + c * w)) * k + (b * w - c * v) * sin,
        u * v * k + w * sin,
        v * v + (u * u + w * w) * cos,
        v * w * k - u * sin,
        (b * (u * u + w * w) - v * (a * u + c * w)) * k + (c * u - a * w) * sin,
        u * w * k - v * sin,
        v * w * k + u * sin,
        w * w + (u * u + v * v) * cos,
        (c * (u * u + v * v) - w * (a * u + b * v)) * k + (a * v - b * u) * sin,
        0.0,
        0.0,
        0.0,
        1.0,
    )
}
