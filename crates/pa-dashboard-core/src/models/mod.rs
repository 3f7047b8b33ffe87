//! Domain models for the prior authorization dashboard.

mod request;
mod status;
mod timeline;

pub use request::*;
pub use status::*;
pub use timeline::*;
