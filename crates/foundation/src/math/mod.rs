pub mod mat4;
pub mod scalar;
pub mod vec;

pub use mat4::*;
pub use scalar::*;
pub use vec::*;
