mod ray;
mod triangle;

pub use ray::Aabb;
pub use triangle::intersect_triangle;
