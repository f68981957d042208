pub mod error;
pub mod loader;
pub mod sources;
pub mod texture;

pub use error::*;
pub use loader::*;
pub use sources::*;
pub use texture::*;
