//! Affine transforms that carry their exact inverse.
//!
//! A [`Transform`] is an append-only composition of translations, scalings and
//! rotations. Each elementary operation has a closed-form inverse, so the
//! inverse matrix is maintained alongside the forward one instead of being
//! recomputed by general inversion. The inverse-transpose is derived from the
//! inverse after every change and is used to map direction vectors.
//!
//! Matrices follow nalgebra's column-vector convention. Every new operation is
//! applied to points after the ones already accumulated:
//! `forward = op * forward` and `inverse = inverse * op⁻¹`.

pub mod matrices;

use std::ops::Mul;

use tracing::trace;

use crate::geometry::Line;
use crate::math::{Matrix4, Point3, Vector3};

pub use matrices::{rotation_matrix, scaling_matrix, translation_matrix, IDENTITY_MATRIX};

/// The identity transform.
pub const IDENTITY_TRANSFORM: Transform = Transform::new();

/// An affine map together with its inverse and inverse-transpose.
///
/// Invariant: `forward * inverse` is the identity within floating-point
/// tolerance, and `inverse_transpose == inverse.transpose()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    forward: Matrix4,
    inverse: Matrix4,
    inverse_transpose: Matrix4,
}

impl Transform {
    /// Creates the identity transform.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            forward: IDENTITY_MATRIX,
            inverse: IDENTITY_MATRIX,
            inverse_transpose: IDENTITY_MATRIX,
        }
    }

    /// Translation that moves the origin to `position`.
    #[must_use]
    pub fn from_position(position: Point3) -> Self {
        let mut t = Self::new();
        t.translate(&position.coords);
        t
    }

    /// Componentwise scaling.
    #[must_use]
    pub fn from_scaling(scaling: Vector3) -> Self {
        let mut t = Self::new();
        t.scale(&scaling);
        t
    }

    /// Scaling followed by a move of the origin to `position`.
    #[must_use]
    pub fn from_scaling_position(scaling: Vector3, position: Point3) -> Self {
        Self::from_scaling_translation(scaling, position.coords)
    }

    /// Scaling followed by a translation.
    #[must_use]
    pub fn from_scaling_translation(scaling: Vector3, translation: Vector3) -> Self {
        let mut t = Self::new();
        t.scale(&scaling);
        t.translate(&translation);
        t
    }

    /// Scaling followed by a rotation of `degrees` about `axis`.
    #[must_use]
    pub fn from_scaling_rotation(scaling: Vector3, axis: &Line, degrees: f32) -> Self {
        let mut t = Self::new();
        t.scale(&scaling);
        t.rotate(axis, degrees);
        t
    }

    /// Rotation of `degrees` about `axis`.
    #[must_use]
    pub fn from_rotation(axis: &Line, degrees: f32) -> Self {
        let mut t = Self::new();
        t.rotate(axis, degrees);
        t
    }

    /// Rotation followed by a move of the origin to `position`.
    #[must_use]
    pub fn from_rotation_position(axis: &Line, degrees: f32, position: Point3) -> Self {
        let mut t = Self::new();
        t.rotate(axis, degrees);
        t.translate(&position.coords);
        t
    }

    /// Scaling, then rotation, then a move of the origin to `position`.
    #[must_use]
    pub fn from_scaling_rotation_position(
        scaling: Vector3,
        axis: &Line,
        degrees: f32,
        position: Point3,
    ) -> Self {
        let mut t = Self::new();
        t.scale(&scaling);
        t.rotate(axis, degrees);
        t.translate(&position.coords);
        t
    }

    /// Wraps a matrix and its inverse.
    ///
    /// The pair is trusted as given; nothing checks that `inverse` actually
    /// inverts `forward`.
    #[must_use]
    pub fn from_matrices(forward: Matrix4, inverse: Matrix4) -> Self {
        Self {
            forward,
            inverse,
            inverse_transpose: inverse.transpose(),
        }
    }

    /// Returns the forward matrix (local to world).
    #[must_use]
    pub fn forward(&self) -> &Matrix4 {
        &self.forward
    }

    /// Returns the inverse matrix (world to local).
    #[must_use]
    pub fn inverse(&self) -> &Matrix4 {
        &self.inverse
    }

    /// Returns the transposed inverse, used for direction vectors.
    #[must_use]
    pub fn inverse_transpose(&self) -> &Matrix4 {
        &self.inverse_transpose
    }

    fn push(&mut self, op: &Matrix4, op_inverse: &Matrix4) {
        self.forward = op * self.forward;
        self.inverse = self.inverse * op_inverse;
        self.inverse_transpose = self.inverse.transpose();
    }

    /// Appends a translation by `tr`.
    pub fn translate(&mut self, tr: &Vector3) {
        self.push(&translation_matrix(tr), &translation_matrix(&-tr));
    }

    /// Appends a componentwise scaling by `sc`.
    ///
    /// Every component of `sc` must be non-zero; this is not checked, and a
    /// zero component leaves non-finite values in the inverse.
    pub fn scale(&mut self, sc: &Vector3) {
        self.push(&scaling_matrix(sc), &scaling_matrix(&sc.map(f32::recip)));
    }

    /// Appends a rotation of `degrees` about `axis`.
    ///
    /// Does nothing if the axis direction has zero length.
    #[allow(clippy::float_cmp)]
    pub fn rotate(&mut self, axis: &Line, degrees: f32) {
        if axis.direction.norm() == 0.0 {
            trace!(origin = ?axis.origin, degrees, "skipped rotation about a zero-length axis");
            return;
        }
        self.push(&rotation_matrix(axis, degrees), &rotation_matrix(axis, -degrees));
    }

    /// Maps a point from local to world space, dividing by the homogeneous `w`.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        apply_to_point(&self.forward, point)
    }

    /// Maps a direction vector through the inverse-transpose.
    ///
    /// This keeps normals perpendicular to their surface under non-uniform
    /// scaling. The result is divided by the homogeneous component unless that
    /// component is exactly zero.
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        apply_to_direction(&self.inverse_transpose, vector)
    }

    /// Maps a point from world back to local space.
    #[must_use]
    pub fn inverse_transform_point(&self, point: &Point3) -> Point3 {
        apply_to_point(&self.inverse, point)
    }

    /// Maps a ray from world back to local space.
    ///
    /// The direction goes through the plain inverse, not the
    /// inverse-transpose, so ray parameters are preserved: a hit at `t` in
    /// local space is a hit at `t` in world space.
    #[must_use]
    pub fn inverse_transform_line(&self, line: &Line) -> Line {
        Line::new(
            apply_to_point(&self.inverse, &line.origin),
            apply_to_direction(&self.inverse, &line.direction),
        )
    }

    /// Composes two transforms so that `right` is applied first, then `left`.
    ///
    /// `forward = left.forward * right.forward` and
    /// `inverse = right.inverse * left.inverse`.
    #[must_use]
    pub fn compose(left: &Self, right: &Self) -> Self {
        Self::from_matrices(
            left.forward * right.forward,
            right.inverse * left.inverse,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform::compose(&self, &rhs)
    }
}

impl Mul<&Transform> for &Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Transform {
        Transform::compose(self, rhs)
    }
}

/// `m * (p, 1)` followed by the perspective divide.
fn apply_to_point(m: &Matrix4, p: &Point3) -> Point3 {
    let h = m * p.to_homogeneous();
    Point3::from(h.xyz() / h.w)
}

/// `m * (v, 0)`, divided by the homogeneous component when it is non-zero.
#[allow(clippy::float_cmp)]
fn apply_to_direction(m: &Matrix4, v: &Vector3) -> Vector3 {
    let h = m * v.to_homogeneous();
    let multiplier = if h.w == 0.0 { 1.0 } else { 1.0 / h.w };
    h.xyz() * multiplier
}
