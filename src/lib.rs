pub mod error;
pub mod geometry;
pub mod math;
pub mod transform;

pub use error::{RaymathError, Result};
pub use geometry::{
    create_aabb, create_aabb_from_triangles, Aabb, Line, Rectangle2D, Triangle, INVALID_DISTANCE,
};
pub use transform::{Transform, IDENTITY_TRANSFORM};
