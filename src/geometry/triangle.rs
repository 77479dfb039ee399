use crate::math::{Point3, EPSILON};

use super::Line;

/// Distance returned by [`Triangle::intersect`] when the ray misses.
pub const INVALID_DISTANCE: f32 = -1.0;

/// A triangle given by three vertices.
///
/// Winding is not constrained; the intersection test does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Corner points of the triangle.
    pub vertices: [Point3; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self {
            vertices: [p0, p1, p2],
        }
    }

    /// Intersects the triangle with a ray using the Möller–Trumbore algorithm.
    ///
    /// Returns the signed parametric distance `t` along `line.direction`, which
    /// is negative when the triangle lies behind the ray origin. Returns
    /// [`INVALID_DISTANCE`] when the ray is parallel to the triangle's plane or
    /// passes outside the triangle. Edges and vertices count as hits; only the
    /// parallelism check uses [`EPSILON`].
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn intersect(&self, line: &Line) -> f32 {
        let [v0, v1, v2] = &self.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let h = line.direction.cross(&edge2);
        let a = edge1.dot(&h);
        if a > -EPSILON && a < EPSILON {
            return INVALID_DISTANCE;
        }

        let f = 1.0 / a;
        let s = line.origin - v0;
        let u = f * s.dot(&h);
        if !(0.0..=1.0).contains(&u) {
            return INVALID_DISTANCE;
        }

        let q = s.cross(&edge1);
        let v = f * line.direction.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return INVALID_DISTANCE;
        }

        f * edge2.dot(&q)
    }

    /// Returns the centroid of the triangle.
    #[must_use]
    pub fn center(&self) -> Point3 {
        let [a, b, c] = &self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }
}

impl From<[Point3; 3]> for Triangle {
    fn from(vertices: [Point3; 3]) -> Self {
        Self { vertices }
    }
}
