pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod session;
pub mod status;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use host::*;
pub use session::*;
pub use status::*;
