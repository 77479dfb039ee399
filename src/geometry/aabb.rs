use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::{Line, Triangle};

/// An axis-aligned bounding box.
///
/// Invariant: `min[i] <= max[i]` on every axis. Zero-volume boxes are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    min: Point3,
    max: Point3,
}

impl Aabb {
    /// Creates a bounding box from its minimum and maximum corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidBounds`] if `min` exceeds `max` on any
    /// axis (or either coordinate is NaN).
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(min: Point3, max: Point3) -> Result<Self> {
        for axis in 0..3 {
            // Written as a negated `<=` so NaN is rejected too.
            if !(min[axis] <= max[axis]) {
                debug!(axis, min = min[axis], max = max[axis], "rejected AABB bounds");
                return Err(GeometryError::InvalidBounds {
                    axis,
                    min: min[axis],
                    max: max[axis],
                }
                .into());
            }
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> &Point3 {
        &self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> &Point3 {
        &self.max
    }

    /// Branchless slab test against a ray.
    ///
    /// Zero direction components rely on IEEE-754 semantics: the reciprocal
    /// becomes ±infinity, and any resulting NaN is dropped by `f32::min` /
    /// `f32::max`. Rays that graze a corner, run along an edge, or lie in a
    /// face plane give an unspecified answer; pad the box if that matters.
    #[must_use]
    pub fn intersect(&self, line: &Line) -> bool {
        let inv_x = 1.0 / line.direction.x;
        let inv_y = 1.0 / line.direction.y;
        let inv_z = 1.0 / line.direction.z;

        let tx1 = (self.min.x - line.origin.x) * inv_x;
        let tx2 = (self.max.x - line.origin.x) * inv_x;

        let mut tmin = tx1.min(tx2);
        let mut tmax = tx1.max(tx2);

        let ty1 = (self.min.y - line.origin.y) * inv_y;
        let ty2 = (self.max.y - line.origin.y) * inv_y;

        tmin = tmin.max(ty1.min(ty2));
        tmax = tmax.min(ty1.max(ty2));

        let tz1 = (self.min.z - line.origin.z) * inv_z;
        let tz2 = (self.max.z - line.origin.z) * inv_z;

        tmin = tmin.max(tz1.min(tz2));
        tmax = tmax.min(tz1.max(tz2));

        tmax >= tmin.max(0.0)
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns `true` if `other` lies entirely inside this box (inclusive).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        (0..3).all(|i| self.min[i] <= other.min[i] && self.max[i] >= other.max[i])
    }

    /// Returns the smallest box enclosing both `left` and `right`.
    #[must_use]
    pub fn union(left: &Self, right: &Self) -> Self {
        Self {
            min: left.min.inf(&right.min),
            max: left.max.sup(&right.max),
        }
    }
}

/// Builds the bounding box of a single triangle.
#[must_use]
pub fn create_aabb(triangle: &Triangle) -> Aabb {
    let [a, b, c] = &triangle.vertices;
    Aabb {
        min: a.inf(b).inf(c),
        max: a.sup(b).sup(c),
    }
}

/// Builds the bounding box of a set of triangles.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn create_aabb_from_triangles(triangles: &[Triangle]) -> Option<Aabb> {
    let Some((first, rest)) = triangles.split_first() else {
        warn!("bounding box requested for an empty triangle set");
        return None;
    };
    Some(
        rest.iter()
            .fold(create_aabb(first), |acc, tri| Aabb::union(&acc, &create_aabb(tri))),
    )
}
