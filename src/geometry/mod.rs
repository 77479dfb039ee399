pub mod aabb;
pub mod line;
pub mod rect;
pub mod triangle;

pub use aabb::{create_aabb, create_aabb_from_triangles, Aabb};
pub use line::Line;
pub use rect::Rectangle2D;
pub use triangle::{Triangle, INVALID_DISTANCE};
