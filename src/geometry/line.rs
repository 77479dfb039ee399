use crate::math::{Point3, Vector3};

/// A ray: an origin point and a direction.
///
/// The parametric form is `P(t) = origin + t * direction`. The direction is
/// not normalized, and a zero direction is a legal (degenerate) value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vector3,
}

impl Line {
    /// Creates a new line from an origin and direction.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::points_approx_eq;

    #[test]
    fn at_follows_unnormalized_direction() {
        let line = Line::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
        assert!(points_approx_eq(&line.at(1.5), &Point3::new(1.0, 3.0, 0.0)));
        assert!(points_approx_eq(&line.at(-1.0), &Point3::new(1.0, -2.0, 0.0)));
    }

    #[test]
    fn default_is_degenerate() {
        let line = Line::default();
        assert_eq!(line.direction, Vector3::zeros());
        assert_eq!(line.origin, Point3::origin());
    }
}
