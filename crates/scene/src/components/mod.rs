pub mod geometry;
pub mod material;
pub mod transform;

pub use geometry::*;
pub use material::*;
pub use transform::*;
