pub mod camera;
pub mod components;
pub mod globe;
pub mod lighting;
pub mod prefabs;
pub mod scroll;
pub mod world;

pub use camera::*;
pub use globe::*;
pub use lighting::*;
pub use world::*;
