mod common;
mod studio;

pub use common::{box_triangles, quad_triangles};
pub use studio::create_studio_scene;
