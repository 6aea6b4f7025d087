// LightBnB Core - Domain Records, Query Builder & Ports
// NO infrastructure dependencies (Hexagonal Architecture)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;
pub mod query;

pub use error::{AppError, Result};
